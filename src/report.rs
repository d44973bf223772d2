//! Rendering of a [`ChatReport`].
//!
//! - [`render_text`] - scalar summary, per-author table, top words, activity
//! - [`to_json_report`] - the whole report as pretty JSON (`json-output` feature)

use crate::stats::ChatReport;

/// Renders the report as a plain-text summary.
///
/// # Example
///
/// ```rust
/// use chatstat::config::StatsConfig;
/// use chatstat::report::render_text;
/// use chatstat::stats::analyze;
///
/// let records = chatstat::parse("1/2/23, 10:00\u{202F}am - Alice: Hello");
/// let text = render_text(&analyze(&records, &StatsConfig::default()));
/// assert!(text.contains("Messages:  1"));
/// assert!(text.contains("Alice"));
/// ```
pub fn render_text(report: &ChatReport) -> String {
    let mut out = String::new();

    if report.is_empty() {
        out.push_str("📭 No authored messages found.\n");
        return out;
    }

    let totals = &report.totals;
    out.push_str("📊 Summary:\n");
    out.push_str(&format!("   Messages:  {}\n", totals.messages));
    out.push_str(&format!("   Media:     {}\n", totals.media));
    out.push_str(&format!("   Emojis:    {}\n", totals.emojis));
    out.push_str(&format!("   Links:     {}\n", totals.links));

    let width = report
        .authors
        .iter()
        .map(|a| a.author.chars().count())
        .max()
        .unwrap_or(0)
        .max("Author".len());

    out.push('\n');
    out.push_str("👥 Authors:\n");
    out.push_str(&format!(
        "   {:<width$}  {:>8}  {:>5}  {:>6}  {:>5}\n",
        "Author", "Messages", "Media", "Emojis", "Links"
    ));
    for author in &report.authors {
        let s = &author.stats;
        out.push_str(&format!(
            "   {:<width$}  {:>8}  {:>5}  {:>6}  {:>5}\n",
            author.author, s.messages, s.media, s.emojis, s.links
        ));
    }

    if !report.top_words.is_empty() {
        out.push('\n');
        out.push_str("🔤 Top words:\n");
        let words: Vec<String> = report
            .top_words
            .iter()
            .map(|w| format!("{} ({})", w.word, w.count))
            .collect();
        out.push_str(&format!("   {}\n", words.join(", ")));
    }

    if !report.activity.is_empty() {
        out.push('\n');
        out.push_str("🕒 Activity:\n");
        for period in &report.activity {
            out.push_str(&format!("   {:<6} {}\n", period.period, period.messages));
        }
    }

    out
}

/// Serializes the report to pretty-printed JSON.
#[cfg(feature = "json-output")]
pub fn to_json_report(report: &ChatReport) -> crate::Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ChatRecord;
    use crate::config::StatsConfig;
    use crate::stats::analyze;
    use chrono::NaiveDate;

    fn report() -> ChatReport {
        let date = NaiveDate::from_ymd_opt(2023, 1, 2);
        let records = vec![
            ChatRecord::new(date, "10:00 am", "Alice", "pizza 🍕"),
            ChatRecord::new(date, "10:01 am", "Bartholomew", "<Media omitted>"),
        ];
        analyze(&records, &StatsConfig::default())
    }

    #[test]
    fn test_render_summary_and_table() {
        let text = render_text(&report());
        assert!(text.contains("Messages:  2"));
        assert!(text.contains("Media:     1"));
        assert!(text.contains("Emojis:    1"));
        assert!(text.contains("Bartholomew"));
        assert!(text.contains("pizza (1)"));
        assert!(text.contains("10-11"));

        let alice_row = text.lines().find(|l| l.contains("Alice")).unwrap();
        assert!(alice_row.starts_with("   Alice      "));
    }

    #[test]
    fn test_render_line_layout() {
        let text = render_text(&report());
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "📊 Summary:");
        assert_eq!(lines[1], "   Messages:  2");
        assert!(lines.contains(&"   Author       Messages  Media  Emojis  Links"));
        assert!(lines.contains(&"   Bartholomew         1      1       0      0"));
        assert!(text.ends_with('\n'));
    }

    #[test]
    fn test_render_empty_report() {
        let text = render_text(&ChatReport::default());
        assert!(text.contains("No authored messages"));
    }

    #[cfg(feature = "json-output")]
    #[test]
    fn test_json_report() {
        let json = to_json_report(&report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        assert_eq!(value["totals"]["messages"], 2);
        assert_eq!(value["authors"][0]["author"], "Alice");
        assert_eq!(value["authors"][1]["media"], 1);
        assert_eq!(value["timeline"][0]["date"], "2023-01-02");
    }
}
