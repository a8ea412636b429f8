//! CSV export for the hourly simulation timeline.

use std::fs::File;
use std::io::{self, Write};
use std::path::Path;

use crate::sim::types::HourlyRecord;

/// Column header for CSV timeline export.
const HEADER: &str = "hour,demand,demand_flex,tank_level,tank_level_flex,\
                      stress_index,stress_index_flex,color,color_flex";

/// Exports hourly records to a CSV file at the given path.
///
/// Writes a header row followed by one row per hour. Produces identical
/// output for identical inputs.
///
/// # Errors
///
/// Returns an `io::Error` if file creation or writing fails.
pub fn export_csv(records: &[HourlyRecord], path: &Path) -> io::Result<()> {
    let file = File::create(path)?;
    let buf = io::BufWriter::new(file);
    write_csv(records, buf)
}

/// Writes hourly records as CSV to any writer.
///
/// # Errors
///
/// Returns an `io::Error` if writing fails.
pub fn write_csv(records: &[HourlyRecord], writer: impl Write) -> io::Result<()> {
    let mut wtr = csv::WriterBuilder::new().from_writer(writer);

    wtr.write_record(HEADER.split(',').map(str::trim))?;

    for r in records {
        wtr.write_record(&[
            r.hour.to_string(),
            format!("{:.4}", r.demand),
            format!("{:.4}", r.demand_flex),
            format!("{:.4}", r.tank_level),
            format!("{:.4}", r.tank_level_flex),
            format!("{:.4}", r.stress_index),
            format!("{:.4}", r.stress_index_flex),
            r.color.to_string(),
            r.color_flex.to_string(),
        ])?;
    }

    wtr.flush()?;
    Ok(())
}
