//! Tracing utilities for statement execution.
//!
//! Enable the `tracing` feature to emit events via the `tracing` crate. The
//! macro no-ops when the feature is disabled, avoiding `#[cfg]` boilerplate at
//! every call site.

/// Emit a trace-level event for an executed statement.
///
/// ```ignore
/// trace_statement!("EXEC", sql, args, result);
/// ```
///
/// `result` is a `Result` whose `Ok` side is a row or change count.
#[cfg(feature = "tracing")]
macro_rules! trace_statement {
    ($op:literal, $sql:expr, $args:expr, $result:expr) => {
        match &$result {
            Ok(count) => ::tracing::trace!(query = %$sql, args = ?$args, result = count, $op),
            Err(err) => ::tracing::trace!(query = %$sql, args = ?$args, error = %err, $op),
        }
    };
}

#[cfg(not(feature = "tracing"))]
macro_rules! trace_statement {
    ($op:literal, $sql:expr, $args:expr, $result:expr) => {
        let _ = (&$sql, &$args, &$result);
    };
}

pub(crate) use trace_statement;
