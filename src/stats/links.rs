//! Link detection.

use std::sync::LazyLock;

use regex::Regex;

static URL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"https?://\S+").expect("URL pattern is valid"));

/// Returns every `http://` or `https://` link in `text`.
///
/// A link runs until the next whitespace, so trailing punctuation is kept.
pub fn extract_links(text: &str) -> Vec<&str> {
    URL_PATTERN.find_iter(text).map(|m| m.as_str()).collect()
}

/// Counts links in `text`.
pub fn count_links(text: &str) -> usize {
    URL_PATTERN.find_iter(text).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_links() {
        let text = "see https://example.com/a?b=c and http://x.org, thanks";
        assert_eq!(
            extract_links(text),
            vec!["https://example.com/a?b=c", "http://x.org,"]
        );
    }

    #[test]
    fn test_no_scheme_no_link() {
        assert_eq!(count_links("www.example.com and ftp://files.net"), 0);
        assert_eq!(count_links("https://"), 0);
    }

    #[test]
    fn test_adjacent_links_split_on_whitespace_only() {
        assert_eq!(count_links("https://a.com https://b.com"), 2);
        assert_eq!(count_links("https://a.comhttps://b.com"), 1);
    }
}
