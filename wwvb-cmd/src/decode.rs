use std::fs::File;
use std::io::stdout;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::{debug, info};
use wwvb::{calendar, Decoded, FieldValue, Reliability, SampleBuffer};

use crate::dump::print_frame;

#[derive(Debug, Clone)]
pub enum Format {
    Json,
    Text,
}

impl clap::ValueEnum for Format {
    fn value_variants<'a>() -> &'a [Self] {
        &[Self::Json, Self::Text]
    }

    fn to_possible_value(&self) -> Option<clap::builder::PossibleValue> {
        match self {
            Self::Json => Some(clap::builder::PossibleValue::new("json")),
            Self::Text => Some(clap::builder::PossibleValue::new("text")),
        }
    }
}

#[derive(Debug, Clone, Serialize)]
struct Report {
    filename: String,
    sync: wwvb::FrameSync,
    frame: wwvb::DecodedFrame,
    total_score: u32,
    failed_fields: usize,
    worst_score: u32,
    reliability: Reliability,
    month: Option<u32>,
    day: Option<u32>,
}

impl Report {
    fn new(filename: String, decoded: &Decoded) -> Self {
        let frame = &decoded.frame;
        let (month, day) = if frame.day_of_year.is_failed() || frame.leap_year.is_failed() {
            (None, None)
        } else {
            match calendar::month_day(frame.day_of_year.value, frame.leap_year.value == 1) {
                Ok((month, day)) => (Some(month), Some(day)),
                Err(err) => {
                    debug!(%err, "decoded day of year does not map to a date");
                    (None, None)
                }
            }
        };
        Report {
            filename,
            sync: decoded.sync,
            frame: frame.clone(),
            total_score: frame.total_score(),
            failed_fields: frame.failed_fields(),
            worst_score: frame.worst_score(),
            reliability: frame.reliability(),
            month,
            day,
        }
    }
}

pub fn decode(
    input: &Path,
    rate: u32,
    format: &Format,
    with_frame: bool,
    save: Option<&Path>,
) -> Result<()> {
    let file = File::open(input).context("opening input")?;
    let buffer = SampleBuffer::read_from(file, rate).context("reading capture")?;
    debug!(
        samples = buffer.len(),
        seconds = buffer.seconds(),
        rate,
        "capture loaded"
    );

    let decoded = wwvb::decode(&buffer);
    let report = Report::new(input.display().to_string(), &decoded);

    match format {
        Format::Text => {
            print_text(&report);
            if with_frame {
                print_frame(&buffer, decoded.sync.offset);
            }
        }
        Format::Json => {
            serde_json::to_writer_pretty(stdout(), &report).context("serializing report")?;
            println!();
        }
    }

    if let Some(path) = save {
        let out = File::create(path)
            .with_context(|| format!("failed to create output {path:?}"))?;
        buffer.write_to(out).context("saving capture")?;
        info!("saved capture to {path:?}");
    }

    Ok(())
}

/// Renders a field's quality as `score/average-worst`: total errors, errors
/// per coded bit, and the errors in the worst bit.
fn scores(field: &FieldValue) -> String {
    match field.score {
        Some(score) => format!(
            "{}/{:.2}-{:02}",
            score,
            f64::from(score) / field.kind.code_len() as f64,
            field.worst
        ),
        None => format!("failed-{:02}", field.worst),
    }
}

fn value(field: &FieldValue) -> String {
    if field.is_failed() {
        "?".repeat(field.kind.display_width())
    } else {
        format!("{:0width$}", field.value, width = field.kind.display_width())
    }
}

fn print_text(report: &Report) {
    let f = &report.frame;
    println!(
        "Found frame at sample {} (sync score {})",
        report.sync.offset, report.sync.error
    );
    println!(
        "  Time: {}:{}                  ({}, {})",
        value(&f.hours),
        value(&f.minutes),
        scores(&f.hours),
        scores(&f.minutes),
    );
    println!(
        "  Day number: {} of year {}   ({}, {})",
        value(&f.day_of_year),
        value(&f.year),
        scores(&f.day_of_year),
        scores(&f.year),
    );
    println!(
        "  LYI: {}, LSW: {}, DST: {}      ({}, {}, {})",
        value(&f.leap_year),
        value(&f.leap_second),
        value(&f.dst),
        scores(&f.leap_year),
        scores(&f.leap_second),
        scores(&f.dst),
    );

    let decoded_bits: usize = f
        .fields()
        .iter()
        .filter(|fv| !fv.is_failed())
        .map(|fv| fv.kind.code_len())
        .sum();
    let average = if decoded_bits == 0 {
        0.0
    } else {
        f64::from(report.total_score) / decoded_bits as f64
    };
    println!(
        "  Total decode score {}/{:.2}-{:02}, {} failed field(s) (lower is better)",
        report.total_score, average, report.worst_score, report.failed_fields,
    );

    let date = match (report.month, report.day) {
        (Some(month), Some(day)) => {
            format!("{:02}/{:02}/20{}", month, day, value(&f.year))
        }
        _ => format!("day {} of 20{}", value(&f.day_of_year), value(&f.year)),
    };
    println!(
        "  Summary: {}:{} UT1 on {} - {:02} {}",
        value(&f.hours),
        value(&f.minutes),
        date,
        report.worst_score,
        report.reliability,
    );
}
