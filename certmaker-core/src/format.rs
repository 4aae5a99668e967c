//! Positional template filling, shared by field formatters and mail bodies.

use crate::error::MetaError;

/// Fill a positional template: each `{}` consumes the next value in order.
///
/// `{{` and `}}` escape literal braces. A `{}` slot with no remaining value is
/// an arity error; unused trailing values are permitted.
pub fn fill_template(template: &str, values: &[&str]) -> Result<String, MetaError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.chars().peekable();
    let mut next = 0usize;

    while let Some(c) = chars.next() {
        match c {
            '{' => match chars.peek() {
                Some('{') => {
                    chars.next();
                    out.push('{');
                }
                Some('}') => {
                    chars.next();
                    let value =
                        values
                            .get(next)
                            .copied()
                            .ok_or_else(|| MetaError::FormatterArity {
                                formatter: template.to_owned(),
                                supplied: values.len(),
                            })?;
                    out.push_str(value);
                    next += 1;
                }
                _ => out.push('{'),
            },
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                }
                out.push('}');
            }
            other => out.push(other),
        }
    }
    Ok(out)
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fills_slots_in_order() {
        let out = fill_template("{} completed {}", &["Ana", "Rust 101"]).unwrap();
        assert_eq!(out, "Ana completed Rust 101");
    }

    #[test]
    fn escaped_braces_survive() {
        let out = fill_template("{{{}}}", &["x"]).unwrap();
        assert_eq!(out, "{x}");
    }

    #[test]
    fn lone_open_brace_is_literal() {
        let out = fill_template("{x}", &[]).unwrap();
        assert_eq!(out, "{x}");
    }

    #[test]
    fn too_many_slots_is_an_arity_error() {
        let err = fill_template("{} and {}", &["only one"]).unwrap_err();
        assert!(matches!(err, MetaError::FormatterArity { supplied: 1, .. }));
    }

    #[test]
    fn unused_values_are_allowed() {
        let out = fill_template("{}", &["a", "b"]).unwrap();
        assert_eq!(out, "a");
    }
}
