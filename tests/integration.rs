//! Integration tests: parse a realistic export end to end.

use chatstat::config::{AmPmSpacing, ClockFormat, DateOrder, HeaderGrammar, ParserConfig};
use chatstat::prelude::*;
use chrono::NaiveDate;
use std::fs;
use tempfile::tempdir;

/// Export in the default dialect (narrow no-break space before am/pm).
fn sample_export() -> String {
    r#"Messages and calls are end-to-end encrypted. No one outside of this chat can read them.
1/15/24, 10:30 am - Alice created group "Trip"
1/15/24, 10:31 am - Alice: Hello everyone! 👋
1/15/24, 10:32 am - Bob: <Media omitted>
1/15/24, 10:33 am - Bob: Look at this https://example.com/photo
and this too
1/16/24, 9:05 pm - Charlie joined using this group's invite link
1/16/24, 9:06 pm - Charlie: 😂😂 pizza tonight?
1/16/24, 9:07 pm - Alice: <Media omitted>"#
        .replace(" am -", "\u{202F}am -")
        .replace(" pm -", "\u{202F}pm -")
}

fn date(m: u32, d: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(2024, m, d)
}

// ============================================================================
// Parsing
// ============================================================================

#[test]
fn test_parse_authored_records() {
    let records = chatstat::parse(&sample_export());

    assert_eq!(records.len(), 5);
    assert_eq!(
        records[0],
        ChatRecord::new(date(1, 15), "10:31\u{202F}am", "Alice", "Hello everyone! 👋")
    );
    assert_eq!(
        records[2].message,
        "Look at this https://example.com/photo and this too"
    );
    assert_eq!(records[3].author(), Some("Charlie"));
    assert_eq!(records[3].date, date(1, 16));
    assert!(records.iter().all(ChatRecord::is_authored));
}

#[test]
fn test_parse_all_keeps_notifications_and_drops_preamble() {
    let records = chatstat::parse_all(&sample_export());

    assert_eq!(records.len(), 7);
    assert_eq!(
        records[0],
        ChatRecord::notification(date(1, 15), "10:30\u{202F}am", "Alice created group \"Trip\"")
    );
    assert!(records[4].is_notification());
    assert!(
        records
            .iter()
            .all(|r| !r.message.contains("end-to-end encrypted"))
    );
}

#[test]
fn test_parse_is_repeatable() {
    let raw = sample_export();
    let parser = LogParser::new();
    assert_eq!(parser.parse(&raw), parser.parse(&raw));
}

#[test]
fn test_parse_file_honours_notification_setting() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("chat.txt");
    fs::write(&path, sample_export()).unwrap();

    assert_eq!(LogParser::new().parse_file(&path).unwrap().len(), 5);

    let parser = LogParser::with_config(ParserConfig::new().with_notifications(true));
    assert_eq!(parser.parse_file(&path).unwrap().len(), 7);
}

#[test]
fn test_parse_file_missing() {
    let err = LogParser::new().parse_file("/nonexistent/chat.txt").unwrap_err();
    assert!(err.is_io());
}

#[test]
fn test_parse_file_invalid_utf8() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("bad.txt");
    fs::write(&path, [0x31, 0x2f, 0xff, 0xfe]).unwrap();

    let err = LogParser::new().parse_file(&path).unwrap_err();
    assert!(err.is_utf8());
    assert!(err.to_string().contains("bad.txt"));
}

// ============================================================================
// Dialects
// ============================================================================

#[test]
fn test_spaced_dialect() {
    let raw = sample_export().replace('\u{202F}', " ");
    assert!(chatstat::parse(&raw).is_empty());

    let parser = LogParser::with_grammar(HeaderGrammar::new().with_am_pm_space(AmPmSpacing::Space));
    let records = parser.parse(&raw);
    assert_eq!(records.len(), 5);
    assert_eq!(records[0].time.as_deref(), Some("10:31 am"));
}

#[test]
fn test_day_first_twenty_four_hour_dialect() {
    let raw = "15/01/2024, 22:30 - Alice: Hallo\n16/01/2024, 08:05 - Bob: Moin";
    let parser = LogParser::with_grammar(
        HeaderGrammar::new()
            .with_date_order(DateOrder::DayFirst)
            .with_clock(ClockFormat::TwentyFourHour),
    );
    let records = parser.parse(raw);

    assert_eq!(records.len(), 2);
    assert_eq!(records[0].date, date(1, 15));
    assert_eq!(records[0].hour(), Some(22));
    assert_eq!(records[1].period().as_deref(), Some("8-9"));
}

// ============================================================================
// Statistics
// ============================================================================

#[test]
fn test_statistics_end_to_end() {
    let records = chatstat::parse(&sample_export());
    let report = analyze(&records, &StatsConfig::default());

    assert_eq!(report.totals.messages, 5);
    assert_eq!(report.totals.media, 2);
    assert_eq!(report.totals.emojis, 3);
    assert_eq!(report.totals.links, 1);

    let names: Vec<&str> = report.authors.iter().map(|a| a.author.as_str()).collect();
    assert_eq!(names, vec!["Alice", "Bob", "Charlie"]);

    let bob = report.author("Bob").unwrap();
    assert_eq!(bob.stats.messages, 2);
    assert_eq!(bob.stats.media, 1);
    assert_eq!(bob.stats.links, 1);
    assert_eq!(report.author("Charlie").unwrap().stats.emojis, 2);
}

#[test]
fn test_statistics_ignore_notifications() {
    let all = chatstat::parse_all(&sample_export());
    let authored = chatstat::parse(&sample_export());
    let config = StatsConfig::default();
    assert_eq!(analyze(&all, &config), analyze(&authored, &config));
}

#[test]
fn test_activity_and_timeline() {
    let report = analyze(&chatstat::parse(&sample_export()), &StatsConfig::default());

    let activity: Vec<(&str, usize)> = report
        .activity
        .iter()
        .map(|p| (p.period.as_str(), p.messages))
        .collect();
    assert_eq!(activity, vec![("10-11", 3), ("21-22", 2)]);

    let timeline: Vec<usize> = report.timeline.iter().map(|d| d.messages).collect();
    assert_eq!(timeline, vec![3, 2]);
    assert_eq!(report.timeline[0].date, date(1, 15).unwrap());
}

#[test]
fn test_top_words() {
    let report = analyze(&chatstat::parse(&sample_export()), &StatsConfig::default());
    let words: Vec<&str> = report.top_words.iter().map(|w| w.word.as_str()).collect();

    assert!(words.contains(&"pizza"));
    assert!(words.contains(&"hello"));
    assert!(!words.contains(&"media"));
    assert!(!words.contains(&"omitted"));
    assert!(!words.contains(&"this"));

    let limited = analyze(
        &chatstat::parse(&sample_export()),
        &StatsConfig::new().with_top_words(2),
    );
    assert_eq!(limited.top_words.len(), 2);
}

#[test]
fn test_filters_then_statistics() {
    let records = chatstat::parse(&sample_export());
    let config = FilterConfig::new()
        .with_date_from("2024-01-16")
        .unwrap()
        .with_author("ALICE");
    let filtered = apply_filters(records, &config);

    assert_eq!(filtered.len(), 1);
    let report = analyze(&filtered, &StatsConfig::default());
    assert_eq!(report.totals.media, 1);
}

#[test]
fn test_text_report() {
    let report = analyze(&chatstat::parse(&sample_export()), &StatsConfig::default());
    let text = render_text(&report);

    assert!(text.contains("Messages:  5"));
    assert!(text.contains("Media:     2"));
    assert!(text.contains("Charlie"));
    assert!(text.contains("21-22"));
}

#[test]
fn test_json_report() {
    let report = analyze(&chatstat::parse(&sample_export()), &StatsConfig::default());
    let json = chatstat::report::to_json_report(&report).unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    assert_eq!(value["totals"]["emojis"], 3);
    assert_eq!(value["authors"][2]["author"], "Charlie");
    assert_eq!(value["activity"][1]["period"], "21-22");
}
