//! CSV output writer.

use std::fs::File;
use std::io::Write;
use std::path::Path;

use crate::ChatRecord;
use crate::core::models::OutputConfig;
use crate::error::{ChatstatError, Result};

/// Writes records to CSV with semicolon delimiter.
///
/// # Format
/// - Delimiter: `;`
/// - Columns: `Author`, `Message`, preceded by `Date`, `Time` with timestamps
/// - Group notifications have an empty `Author`
/// - Encoding: UTF-8
pub fn write_csv(
    records: &[ChatRecord],
    output_path: impl AsRef<Path>,
    config: &OutputConfig,
) -> Result<()> {
    let file = File::create(output_path)?;
    write_records(file, records, config)
}

/// Converts records to a CSV string.
///
/// Same format as [`write_csv`].
pub fn to_csv(records: &[ChatRecord], config: &OutputConfig) -> Result<String> {
    let mut buffer = Vec::new();
    write_records(&mut buffer, records, config)?;
    String::from_utf8(buffer).map_err(|e| ChatstatError::invalid_format("CSV", e.to_string()))
}

fn write_records<W: Write>(out: W, records: &[ChatRecord], config: &OutputConfig) -> Result<()> {
    let mut writer = csv::WriterBuilder::new().delimiter(b';').from_writer(out);

    writer.write_record(build_header(config))?;
    for record in records {
        writer.write_record(build_row(record, config))?;
    }

    writer.flush()?;
    Ok(())
}

fn build_header(config: &OutputConfig) -> Vec<&'static str> {
    let mut header = Vec::with_capacity(4);
    if config.include_timestamps {
        header.push("Date");
        header.push("Time");
    }
    header.push("Author");
    header.push("Message");
    header
}

fn build_row(record: &ChatRecord, config: &OutputConfig) -> Vec<String> {
    let mut row = Vec::with_capacity(4);
    if config.include_timestamps {
        row.push(
            record
                .date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        );
        row.push(record.time.clone().unwrap_or_default());
    }
    row.push(record.author().unwrap_or_default().to_string());
    row.push(record.message.clone());
    row
}
