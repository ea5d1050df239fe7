//! Named placeholder rewriting
//!
//! PostgreSQL only understands numbered `$n` placeholders. The generated
//! statements use `:name`, so they are rewritten before preparing.

/// Rewrite `:name` placeholders to `$1`, `$2`, ...
///
/// Returns the rewritten text and the parameter names in `$n` order.
/// Repeated names reuse their first index. `::type` casts and anything
/// inside single quotes, double quotes or comments are left alone.
pub(crate) fn rewrite_named(sql: &str) -> (String, Vec<String>) {
    let mut out = String::with_capacity(sql.len());
    let mut names: Vec<String> = Vec::new();
    let mut chars = sql.char_indices().peekable();

    while let Some((i, c)) = chars.next() {
        match c {
            '\'' | '"' => {
                out.push(c);
                for (_, q) in chars.by_ref() {
                    out.push(q);
                    if q == c {
                        break;
                    }
                }
            }
            '-' if sql[i..].starts_with("--") => {
                out.push(c);
                for (_, q) in chars.by_ref() {
                    out.push(q);
                    if q == '\n' {
                        break;
                    }
                }
            }
            ':' => match chars.peek() {
                Some((_, ':')) => {
                    out.push_str("::");
                    chars.next();
                }
                Some(&(start, n)) if n.is_ascii_alphabetic() || n == '_' => {
                    let mut end = start;
                    while let Some(&(j, n)) = chars.peek() {
                        if !(n.is_ascii_alphanumeric() || n == '_') {
                            break;
                        }
                        end = j + n.len_utf8();
                        chars.next();
                    }
                    let name = &sql[start..end];
                    let index = match names.iter().position(|existing| existing == name) {
                        Some(index) => index,
                        None => {
                            names.push(name.to_owned());
                            names.len() - 1
                        }
                    };
                    out.push('$');
                    out.push_str(&(index + 1).to_string());
                }
                _ => out.push(c),
            },
            _ => out.push(c),
        }
    }

    (out, names)
}
