//! Rust string literal escaping
//!
//! Lossless: `str`'s `Debug` output is a valid Rust literal that evaluates to
//! exactly the original string (quotes, backslashes and control characters
//! escaped, everything else verbatim).

/// Quoted Rust string literal for `value`
pub fn string_literal(value: &str) -> String {
    format!("{value:?}")
}

/// Parse the literal at the start of `input`, returning the value and the
/// remaining text. Only the escapes `Debug` produces for the names we emit
/// are understood.
#[cfg(test)]
pub(crate) fn parse_string_literal(input: &str) -> Option<(String, &str)> {
    let body = input.strip_prefix('"')?;
    let mut value = String::new();
    let mut chars = body.char_indices();

    while let Some((i, c)) = chars.next() {
        match c {
            '"' => return Some((value, &body[i + 1..])),
            '\\' => match chars.next()?.1 {
                '"' => value.push('"'),
                '\\' => value.push('\\'),
                'n' => value.push('\n'),
                'r' => value.push('\r'),
                't' => value.push('\t'),
                '0' => value.push('\0'),
                '\'' => value.push('\''),
                'u' => {
                    let rest = &body[i + 2..];
                    let close = rest.find('}')?;
                    let code = u32::from_str_radix(rest.get(1..close)?, 16).ok()?;
                    value.push(char::from_u32(code)?);
                    for _ in 0..=close {
                        chars.next();
                    }
                }
                _ => return None,
            },
            c => value.push(c),
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_name_unchanged() {
        assert_eq!(string_literal("Franklin"), "\"Franklin\"");
    }

    #[test]
    fn test_quotes_escaped() {
        assert_eq!(string_literal("O\"Brien"), r#""O\"Brien""#);
        assert_eq!(string_literal("Prince George's"), "\"Prince George's\"");
    }

    #[test]
    fn test_control_characters_escaped() {
        assert_eq!(string_literal("a\u{1b}b"), "\"a\\u{1b}b\"");
        assert_eq!(string_literal("a\\b"), r#""a\\b""#);
    }

    #[test]
    fn test_parse_back() {
        for name in [
            "Franklin",
            "O\"Brien",
            "Prince George's",
            "back\\slash",
            "tab\there",
            "bell\u{7}\u{1b}",
            "Doña Ana",
            "",
        ] {
            let literal = string_literal(name);
            let (parsed, rest) = parse_string_literal(&literal).unwrap();
            assert_eq!(parsed, name);
            assert!(rest.is_empty());
        }
    }
}
