//! Phone number sanitizing
//!
//! Reduces freeform input to the characters a dialer accepts.

use lazy_static::lazy_static;
use regex::Regex;

lazy_static! {
    static ref NON_DIAL_CHARS: Regex = Regex::new(r"[^0-9+#*]").expect("static regex");
}

/// Strip every character that is not a digit, `+`, `#` or `*`.
pub fn sanitize(raw: &str) -> String {
    NON_DIAL_CHARS.replace_all(raw, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_formatted_number() {
        assert_eq!(sanitize("+1 (555) 123-4567"), "+15551234567");
    }

    #[test]
    fn test_empty_and_garbage() {
        assert_eq!(sanitize(""), "");
        assert_eq!(sanitize("abc def"), "");
        assert_eq!(sanitize("   "), "");
    }

    #[test]
    fn test_keeps_service_codes() {
        assert_eq!(sanitize("*#06#"), "*#06#");
        assert_eq!(sanitize("*123# ext. 9"), "*123#9");
    }

    #[test]
    fn test_unicode_digits_are_dropped() {
        // Only ASCII digits are dialable
        assert_eq!(sanitize("٥٥٥ 12"), "12");
        assert_eq!(sanitize("１２3"), "3");
    }

    #[test]
    fn test_output_alphabet_and_idempotence() {
        let inputs = [
            "+1 (555) 123-4567",
            "tel:+34 600-000-000",
            "!!! @@@ ###",
            "número: 55 12 34 56 78",
            "extremely long string 0 with 1 digits 2 sprinkled 3 through *",
            "\n\t+\u{200b}4\u{00a0}4",
        ];
        for input in inputs {
            let once = sanitize(input);
            assert!(
                once.chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '+' | '#' | '*')),
                "unexpected character in {:?}",
                once
            );
            assert_eq!(sanitize(&once), once);
        }
    }
}
