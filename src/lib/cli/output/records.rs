//! Emission and ingestion of the measurement streams

use std::io::{BufRead, Write};

use color_eyre::{eyre::Context, Result};

use crate::domain::measurement::{Measurement, RecordFormat};
use crate::utils::constants::error_messages;

/// Writes one measurement as a line and flushes the writer, so the consumer
/// on the other side of a pipe sees every record as soon as it's timed
pub fn write_measurement<W: Write>(
    writer: &mut W,
    format: RecordFormat,
    measurement: &Measurement,
) -> Result<()> {
    let line = format.render(measurement)?;
    writeln!(writer, "{line}").with_context(|| error_messages::FAILURE_WRITING_MEASUREMENT)?;
    writer
        .flush()
        .with_context(|| error_messages::FAILURE_WRITING_MEASUREMENT)
}

/// Reads every measurement of the stream. Blank lines are skipped, and any
/// other line that can't be parsed aborts the reading
pub fn read_measurements<R: BufRead>(reader: R, format: RecordFormat) -> Result<Vec<Measurement>> {
    let mut measurements = Vec::new();

    for (idx, line) in reader.lines().enumerate() {
        let line = line.with_context(|| error_messages::FAILURE_READING_MEASUREMENTS)?;
        if line.trim().is_empty() {
            continue;
        }
        let measurement = format
            .parse(&line)
            .with_context(|| format!("Malformed measurement at line {}", idx + 1))?;
        measurements.push(measurement);
    }

    log::debug!("Read {} measurements", measurements.len());
    Ok(measurements)
}

#[cfg(test)]
mod tests {
    use std::io::Cursor;

    use super::*;
    use crate::domain::suite::Configuration;

    #[test]
    fn test_read_text_stream() -> Result<()> {
        let input = "0 0 25 1.20\n\n0 1 31 1.42\n   \n3 2 400 9.99\n";
        let measurements = read_measurements(Cursor::new(input), RecordFormat::Text)?;

        assert_eq!(measurements.len(), 3);
        assert_eq!(
            measurements[1],
            Measurement::new(Configuration::new(0, 1), 31, 1.42)
        );
        assert_eq!(measurements[2].size, 400);
        Ok(())
    }

    #[test]
    fn test_malformed_line_reports_its_number() {
        let input = "0 0 25 1.20\n0 0 twenty 1.20\n";
        let err = read_measurements(Cursor::new(input), RecordFormat::Text).unwrap_err();
        assert!(format!("{err:#}").contains("line 2"));
    }

    #[test]
    fn test_written_lines_read_back() -> Result<()> {
        let measurements = [
            Measurement::new(Configuration::new(0, 0), 10, 0.25),
            Measurement::new(Configuration::new(6, 0), 90_000, 12.5),
        ];
        for format in [RecordFormat::Text, RecordFormat::Json] {
            let mut buffer = Vec::new();
            for m in &measurements {
                write_measurement(&mut buffer, format, m)?;
            }
            let read = read_measurements(Cursor::new(buffer), format)?;
            assert_eq!(read, measurements);
        }
        Ok(())
    }
}
