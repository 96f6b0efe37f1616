//! String folding and byte decoding helpers
//!
//! All of these are lossy-but-successful: they degrade the value instead of
//! erroring, which is what callers feeding UI widgets and external tools
//! want.

use unicode_normalization::UnicodeNormalization;

/// Fold a string to best-effort ASCII.
///
/// Applies NFKD compatibility decomposition and drops every non-ASCII code
/// point that remains, so "café" becomes "cafe" and "ﬁle" becomes "file".
pub fn ascii_fold(s: &str) -> String {
    s.nfkd().filter(char::is_ascii).collect()
}

/// Decode raw bytes from an external source into a String.
///
/// `None` becomes the empty string. Valid UTF-8 passes through unchanged;
/// undecodable sequences are dropped rather than reported.
pub fn lossy_string(bytes: Option<&[u8]>) -> String {
    let Some(bytes) = bytes else {
        return String::new();
    };
    match std::str::from_utf8(bytes) {
        Ok(s) => s.to_string(),
        Err(_) => String::from_utf8_lossy(bytes)
            .chars()
            .filter(|c| *c != char::REPLACEMENT_CHARACTER)
            .collect(),
    }
}

/// Check whether a string parses as a floating-point number.
///
/// Never fails; unparseable input (including the empty string) is just
/// `false`.
pub fn is_number(value: &str) -> bool {
    value.trim().parse::<f64>().is_ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ascii_fold_strips_diacritics() {
        assert_eq!(ascii_fold("café"), "cafe");
        assert_eq!(ascii_fold("Naïve Résumé"), "Naive Resume");
    }

    #[test]
    fn test_ascii_fold_drops_unmappable_codepoints() {
        assert_eq!(ascii_fold("snow☃man"), "snowman");
        assert_eq!(ascii_fold(""), "");
    }

    #[test]
    fn test_lossy_string_none_is_empty() {
        assert_eq!(lossy_string(None), "");
    }

    #[test]
    fn test_lossy_string_decodes_utf8() {
        assert_eq!(lossy_string(Some(b"caf\xc3\xa9")), "café");
    }

    #[test]
    fn test_lossy_string_passes_text_through() {
        assert_eq!(lossy_string(Some("already text".as_bytes())), "already text");
    }

    #[test]
    fn test_lossy_string_drops_invalid_sequences() {
        assert_eq!(lossy_string(Some(b"ab\xffcd")), "abcd");
    }

    #[test]
    fn test_is_number() {
        assert!(is_number("3.14"));
        assert!(is_number("-42"));
        assert!(is_number("1e5"));
        assert!(is_number(" 2.5 "));
        assert!(!is_number("abc"));
        assert!(!is_number(""));
        assert!(!is_number("1.2.3"));
    }
}
