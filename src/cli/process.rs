use std::path::Path;

use anyhow::Result;

use nlpipe_core::StructuredRecord;

use super::{input, OutputFormat, Settings};

pub const DEMO_TEXT: &str = "This is an example sentence for text preprocessing.";

pub fn run(
    settings: &Settings<'_>,
    text: Option<String>,
    file: Option<&Path>,
    format: OutputFormat,
) -> Result<()> {
    let pipeline = settings.pipeline()?;
    let bytes = input::read(text, file)?;
    tracing::debug!(bytes = bytes.len(), "Read input");
    let record = pipeline.process_bytes(&bytes)?;
    print_record(&record, format)
}

pub fn run_demo(settings: &Settings<'_>, format: OutputFormat) -> Result<()> {
    let pipeline = settings.pipeline()?;
    let record = pipeline.process(DEMO_TEXT)?;
    print_record(&record, format)
}

fn print_record(record: &StructuredRecord, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Display => println!("{record}"),
        OutputFormat::Json => println!("{}", serde_json::to_string(record)?),
        OutputFormat::Pretty => println!("{}", serde_json::to_string_pretty(record)?),
    }
    Ok(())
}
