//! Emoji extraction.
//!
//! A single visible emoji can span several code points (flags, skin tones,
//! ZWJ families, keycaps), so text is split into extended grapheme clusters
//! and a cluster counts once if it is an emoji sequence or contains any emoji
//! code point.

use unicode_segmentation::UnicodeSegmentation;

/// Returns every grapheme cluster of `text` that contains an emoji.
///
/// # Example
///
/// ```rust
/// use chatstat::stats::extract_emojis;
///
/// assert_eq!(extract_emojis("Hi 👋🏽 from 🇰🇿!"), vec!["👋🏽", "🇰🇿"]);
/// ```
pub fn extract_emojis(text: &str) -> Vec<&str> {
    text.graphemes(true).filter(|g| is_emoji_cluster(g)).collect()
}

/// Counts emoji grapheme clusters in `text`.
pub fn count_emojis(text: &str) -> usize {
    text.graphemes(true).filter(|g| is_emoji_cluster(g)).count()
}

fn is_emoji_cluster(cluster: &str) -> bool {
    emojis::get(cluster).is_some() || cluster.chars().any(is_emoji_char)
}

fn is_emoji_char(c: char) -> bool {
    // Regional indicators only form emoji in pairs and are absent from the
    // table on their own.
    if ('\u{1F1E6}'..='\u{1F1FF}').contains(&c) {
        return true;
    }
    let mut buf = [0u8; 4];
    emojis::get(c.encode_utf8(&mut buf)).is_some()
}
