//! JSON Lines (JSONL) output writer.
//!
//! One record per line, so large exports can be consumed incrementally.

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use super::json_writer::JsonRecord;
use crate::ChatRecord;
use crate::core::models::OutputConfig;
use crate::error::Result;

/// Writes records to JSONL (JSON Lines) format.
///
/// ```jsonl
/// {"author":"Alice","message":"Hello"}
/// {"author":"Bob","message":"Hi"}
/// ```
pub fn write_jsonl(
    records: &[ChatRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);
    write_lines(&mut writer, records, config)?;
    writer.flush()?;
    Ok(())
}

/// Converts records to a JSONL string, each line terminated by `\n`.
pub fn to_jsonl(records: &[ChatRecord], config: &OutputConfig) -> Result<String> {
    let mut out = String::new();
    for record in records {
        out.push_str(&serde_json::to_string(&JsonRecord::from_record(record, config))?);
        out.push('\n');
    }
    Ok(out)
}

fn write_lines<W: Write>(writer: &mut W, records: &[ChatRecord], config: &OutputConfig) -> Result<()> {
    for record in records {
        serde_json::to_writer(&mut *writer, &JsonRecord::from_record(record, config))?;
        writeln!(writer)?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn records() -> Vec<ChatRecord> {
        vec![
            ChatRecord::new(None, "9:00 am", "Alice", "Hello"),
            ChatRecord::new(None, "9:01 am", "Bob", "Hi"),
        ]
    }

    #[test]
    fn test_to_jsonl_one_object_per_line() {
        let jsonl = to_jsonl(&records(), &OutputConfig::new()).unwrap();
        let lines: Vec<&str> = jsonl.lines().collect();

        assert_eq!(lines.len(), 2);
        assert_eq!(lines[0], r#"{"author":"Alice","message":"Hello"}"#);
        assert!(jsonl.ends_with('\n'));
    }

    #[test]
    fn test_write_jsonl_matches_string() {
        let temp = tempfile::NamedTempFile::new().unwrap();
        let config = OutputConfig::new().with_timestamps();
        write_jsonl(&records(), temp.path(), &config).unwrap();

        let content = std::fs::read_to_string(temp.path()).unwrap();
        assert_eq!(content, to_jsonl(&records(), &config).unwrap());
        assert!(content.contains(r#""time":"9:00 am""#));
    }

    #[test]
    fn test_empty_records() {
        assert_eq!(to_jsonl(&[], &OutputConfig::new()).unwrap(), "");
    }
}
