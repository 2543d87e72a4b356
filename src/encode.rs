//! Optional percent-encoding of request URLs
//!
//! Off by default. When enabled, every character outside the unreserved
//! set is encoded, except `/` and `:` so that the scheme and path
//! structure of an already-assembled URL survive.

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};

/// Characters to percent-encode: everything except alphanumerics, the
/// unreserved marks, and the `/` and `:` separators.
const URL_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'/')
    .remove(b':')
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~');

/// Percent-encodes a URL, leaving `/` and `:` intact.
pub fn encode_url(url: &str) -> String {
    utf8_percent_encode(url, URL_ENCODE_SET).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_url_unchanged() {
        let url = "https://en.wikipedia.org/wiki/Example";
        assert_eq!(encode_url(url), url);
    }

    #[test]
    fn test_space_encoded() {
        assert_eq!(
            encode_url("https://example.com/a page"),
            "https://example.com/a%20page"
        );
    }

    #[test]
    fn test_scheme_and_path_separators_kept() {
        let url = "https://example.com/a/b/c";
        assert_eq!(encode_url(url), url);
    }

    #[test]
    fn test_unreserved_marks_kept() {
        let url = "https://example.com/a-b_c.d~e";
        assert_eq!(encode_url(url), url);
    }

    #[test]
    fn test_non_ascii_encoded() {
        assert_eq!(
            encode_url("https://en.wikipedia.org/wiki/Ångström"),
            "https://en.wikipedia.org/wiki/%C3%85ngstr%C3%B6m"
        );
    }

    #[test]
    fn test_query_characters_encoded() {
        assert_eq!(
            encode_url("https://example.com/page?a=1&b=2"),
            "https://example.com/page%3Fa%3D1%26b%3D2"
        );
    }
}
