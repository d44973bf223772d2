//! # chatstat CLI
//!
//! Parses a chat export, prints statistics to stdout, and optionally writes
//! the parsed records. Progress goes to stderr.

use std::path::Path;
use std::process;
use std::time::{Duration, Instant};

use clap::Parser as ClapParser;

use chatstat::cli::{Args, ReportFormat};
use chatstat::config::ParserConfig;
use chatstat::core::{FilterConfig, OutputConfig, apply_filters};
use chatstat::format::{OutputFormat, write_to_format};
use chatstat::parser::LogParser;
use chatstat::report::{render_text, to_json_report};
use chatstat::stats::analyze;
use chatstat::{ChatRecord, ChatstatError, logging};

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    logging::init(args.debug);

    eprintln!("📦 chatstat v{}", env!("CARGO_PKG_VERSION"));
    eprintln!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    eprintln!("📂 Input:   {}", args.input.display());
    if args.streaming {
        eprintln!("🌊 Mode:    Streaming");
    }

    let mut filter_config = FilterConfig::new();
    if let Some(ref after) = args.after {
        filter_config = filter_config.with_date_from(after)?;
        eprintln!("📅 After:   {}", after);
    }
    if let Some(ref before) = args.before {
        filter_config = filter_config.with_date_to(before)?;
        eprintln!("📅 Before:  {}", before);
    }
    if let Some(ref from) = args.from {
        filter_config = filter_config.with_author(from.clone());
        eprintln!("👤 From:    {}", from);
    }

    // Notifications are always parsed; statistics skip them and the
    // record writer drops them unless --notifications is given.
    let parser = LogParser::with_config(
        ParserConfig::new()
            .with_grammar(args.grammar())
            .with_notifications(true),
    );

    let (records, parse_time) = if args.streaming {
        parse_streaming(&parser, &args.input)?
    } else {
        parse_regular(&parser, &args.input)?
    };
    eprintln!(
        "   Found {} records ({:.2}s)",
        records.len(),
        parse_time.as_secs_f64()
    );

    let records = if filter_config.is_active() {
        let filtered = apply_filters(records, &filter_config);
        eprintln!("🔍 {} records after filtering", filtered.len());
        filtered
    } else {
        records
    };

    let report = analyze(&records, &args.stats_config());
    match args.report {
        ReportFormat::Text => print!("{}", render_text(&report)),
        ReportFormat::Json => println!("{}", to_json_report(&report)?),
    }

    if let Some(ref output) = args.output {
        let format = match args.format {
            Some(format) => format.into(),
            None => OutputFormat::from_path(output).unwrap_or_default(),
        };
        let mut output_config = OutputConfig::new();
        if args.timestamps {
            output_config = output_config.with_timestamps();
        }

        let written: Vec<ChatRecord> = if args.notifications {
            records
        } else {
            records.into_iter().filter(ChatRecord::is_authored).collect()
        };

        eprintln!("💾 Writing {}...", format);
        write_to_format(&written, output, format, &output_config)?;
        eprintln!("✅ {} records saved to {}", written.len(), output.display());
    }

    eprintln!(
        "⚡ Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}

/// Reads the whole file, then parses it.
fn parse_regular(
    parser: &LogParser,
    input: &Path,
) -> Result<(Vec<ChatRecord>, Duration), ChatstatError> {
    eprintln!("⏳ Parsing...");
    let start = Instant::now();
    let records = parser.parse_file(input)?;
    Ok((records, start.elapsed()))
}

/// Parses record by record from a buffered reader.
fn parse_streaming(
    parser: &LogParser,
    input: &Path,
) -> Result<(Vec<ChatRecord>, Duration), ChatstatError> {
    eprintln!("⏳ Streaming...");
    let start = Instant::now();
    let records = parser.stream(input)?.collect::<Result<Vec<_>, _>>()?;
    Ok((records, start.elapsed()))
}
