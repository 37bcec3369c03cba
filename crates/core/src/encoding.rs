//! Percent-encoding rules used by the expander.
//!
//! Encoding always works on the UTF-8 bytes of a character and produces
//! uppercase hex pairs.

/// RFC 3986 `gen-delims` and `sub-delims`.
const RESERVED: &str = ":/?#[]@!$&'()*+,;=";

/// Whether `c` is in the RFC 3986 unreserved set.
#[must_use]
pub fn is_unreserved(c: char) -> bool {
    c.is_ascii_alphanumeric() || matches!(c, '-' | '.' | '_' | '~')
}

/// Whether `c` is in the RFC 3986 reserved set.
#[must_use]
pub fn is_reserved(c: char) -> bool {
    RESERVED.contains(c)
}

/// Whether `bytes` starts with a `%XX` triplet.
#[must_use]
pub fn starts_with_triplet(bytes: &[u8]) -> bool {
    matches!(bytes, [b'%', high, low, ..] if high.is_ascii_hexdigit() && low.is_ascii_hexdigit())
}

/// Encodes everything outside the unreserved set.
#[must_use]
pub fn encode_unreserved(value: &str) -> String {
    urlencoding::encode(value).into_owned()
}

/// Encodes everything outside the unreserved and reserved sets, leaving
/// existing `%XX` triplets untouched.
#[must_use]
pub fn encode_reserved(value: &str) -> String {
    let mut encoded = String::with_capacity(value.len());
    let mut utf8 = [0u8; 4];

    for (index, c) in value.char_indices() {
        if is_unreserved(c) || is_reserved(c) || starts_with_triplet(&value.as_bytes()[index..]) {
            encoded.push(c);
        } else {
            encoded.push_str(&urlencoding::encode(c.encode_utf8(&mut utf8)));
        }
    }

    encoded
}

/// Encodes a substituted value according to an operator's policy.
#[must_use]
pub fn encode(value: &str, allow_reserved: bool) -> String {
    if allow_reserved {
        encode_reserved(value)
    } else {
        encode_unreserved(value)
    }
}

/// Encodes literal template text.
///
/// Literal text may contain any URI character as is; everything else,
/// including a `%` that does not start a triplet, is encoded.
#[must_use]
pub fn encode_literal(text: &str) -> String {
    encode_reserved(text)
}

/// Returns the first `max_chars` code points of `value`.
#[must_use]
pub fn truncate(value: &str, max_chars: usize) -> &str {
    match value.char_indices().nth(max_chars) {
        Some((end, _)) => &value[..end],
        None => value,
    }
}

/// Like [`truncate`], but a `%XX` triplet counts as a single character so the
/// cut never splits one. Used when the reserved policy keeps triplets intact.
#[must_use]
pub fn truncate_reserved(value: &str, max_chars: usize) -> &str {
    let bytes = value.as_bytes();
    let mut end = 0;
    for _ in 0..max_chars {
        if end >= value.len() {
            break;
        }
        end += if starts_with_triplet(&bytes[end..]) {
            3
        } else {
            value[end..].chars().next().map_or(1, char::len_utf8)
        };
    }
    &value[..end]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_unreserved_keeps_unreserved() {
        assert_eq!(encode_unreserved("AZaz09-._~"), "AZaz09-._~");
    }

    #[test]
    fn test_encode_unreserved_encodes_reserved_and_space() {
        assert_eq!(encode_unreserved("Hello World!"), "Hello%20World%21");
        assert_eq!(encode_unreserved("/foo/bar"), "%2Ffoo%2Fbar");
        assert_eq!(encode_unreserved("50%"), "50%25");
    }

    #[test]
    fn test_encode_reserved_passes_reserved() {
        assert_eq!(encode_reserved("/foo/bar"), "/foo/bar");
        assert_eq!(encode_reserved("Hello World!"), "Hello%20World!");
        assert_eq!(encode_reserved(":/?#[]@!$&'()*+,;="), ":/?#[]@!$&'()*+,;=");
    }

    #[test]
    fn test_encode_reserved_keeps_triplets() {
        assert_eq!(encode_reserved("a%20b"), "a%20b");
        assert_eq!(encode_reserved("100%"), "100%25");
        assert_eq!(encode_reserved("%zz"), "%25zz");
    }

    #[test]
    fn test_encode_uses_utf8_uppercase_hex() {
        assert_eq!(encode_unreserved("é"), "%C3%A9");
        assert_eq!(encode_reserved("é"), "%C3%A9");
        assert_eq!(encode_unreserved("\u{2603}"), "%E2%98%83");
    }

    #[test]
    fn test_encode_literal_encodes_unsafe() {
        assert_eq!(encode_literal("a b"), "a%20b");
        assert_eq!(encode_literal("<x>"), "%3Cx%3E");
        assert_eq!(encode_literal("}"), "%7D");
        assert_eq!(encode_literal("http://example.com/~fred/"), "http://example.com/~fred/");
    }

    #[test]
    fn test_encode_dispatches_on_policy() {
        assert_eq!(encode("a/b", false), "a%2Fb");
        assert_eq!(encode("a/b", true), "a/b");
    }

    #[test]
    fn test_truncate_counts_code_points() {
        assert_eq!(truncate("value", 3), "val");
        assert_eq!(truncate("value", 30), "value");
        assert_eq!(truncate("", 1), "");
        assert_eq!(truncate("ééé", 1), "é");
        assert_eq!(truncate("ééé", 2), "éé");
    }

    #[test]
    fn test_truncate_reserved_keeps_triplets_whole() {
        assert_eq!(truncate_reserved("%20abc", 1), "%20");
        assert_eq!(truncate_reserved("%20abc", 2), "%20a");
        assert_eq!(truncate_reserved("a%2Fb", 2), "a%2F");
        assert_eq!(truncate_reserved("%2", 1), "%");
        assert_eq!(truncate_reserved("é%41", 2), "é%41");
        assert_eq!(truncate_reserved("ab", 5), "ab");
    }

    #[test]
    fn test_starts_with_triplet() {
        assert!(starts_with_triplet(b"%2F"));
        assert!(starts_with_triplet(b"%a0rest"));
        assert!(!starts_with_triplet(b"%2"));
        assert!(!starts_with_triplet(b"%g0"));
        assert!(!starts_with_triplet(b"x%20"));
    }
}
