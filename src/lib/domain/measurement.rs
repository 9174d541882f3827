//! The record produced by timing one configuration of a suite

use core::fmt;
use std::str::FromStr;

use color_eyre::{
    eyre::{eyre, Context},
    Report, Result,
};
use serde::{Deserialize, Serialize};

use super::suite::Configuration;

/// One configuration compiled `iterations` times, with the average wall-clock
/// duration of those compiler invocations
///
/// The textual form is `<strategy> <variant> <size> <average_seconds>`
///
/// ```rust
/// use cxxbench::domain::measurement::Measurement;
///
/// let m: Measurement = "0 1 250 1.23".parse().unwrap();
/// assert_eq!((m.strategy, m.variant, m.size, m.seconds), (0, 1, 250, 1.23));
/// assert_eq!(m.to_string(), "0 1 250 1.23");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Measurement {
    pub strategy: u8,
    pub variant: u8,
    pub size: usize,
    pub seconds: f64,
}

impl Measurement {
    pub fn new(configuration: Configuration, size: usize, seconds: f64) -> Self {
        Self {
            strategy: configuration.strategy,
            variant: configuration.variant,
            size,
            seconds,
        }
    }

    pub fn configuration(&self) -> Configuration {
        Configuration::new(self.strategy, self.variant)
    }
}

impl fmt::Display for Measurement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} {} {:.2}",
            self.strategy, self.variant, self.size, self.seconds
        )
    }
}

impl FromStr for Measurement {
    type Err = Report;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let fields: Vec<&str> = s.split_whitespace().collect();
        let [strategy, variant, size, seconds] = fields.as_slice() else {
            return Err(eyre!(
                "Expected 4 whitespace separated fields, found {}: {s:?}",
                fields.len()
            ));
        };

        Ok(Self {
            strategy: strategy
                .parse()
                .with_context(|| format!("Invalid strategy: {strategy:?}"))?,
            variant: variant
                .parse()
                .with_context(|| format!("Invalid variant: {variant:?}"))?,
            size: size
                .parse()
                .with_context(|| format!("Invalid size: {size:?}"))?,
            seconds: seconds
                .parse()
                .with_context(|| format!("Invalid elapsed seconds: {seconds:?}"))?,
        })
    }
}

/// The line formats in which measurements are emitted and read back
#[derive(Debug, Default, PartialEq, Eq, Copy, Clone, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum RecordFormat {
    /// `<strategy> <variant> <size> <average_seconds>`
    #[default]
    Text,
    /// One JSON object per line
    Json,
}

impl RecordFormat {
    pub fn render(&self, measurement: &Measurement) -> Result<String> {
        match *self {
            RecordFormat::Text => Ok(measurement.to_string()),
            RecordFormat::Json => serde_json::to_string(measurement)
                .with_context(|| "Could not serialize the measurement to JSON"),
        }
    }

    pub fn parse(&self, line: &str) -> Result<Measurement> {
        match *self {
            RecordFormat::Text => line.parse(),
            RecordFormat::Json => serde_json::from_str(line.trim())
                .with_context(|| format!("Invalid JSON measurement: {line:?}")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_text_line() -> Result<()> {
        let m: Measurement = "0 1 250 1.23".parse()?;
        assert_eq!(m.strategy, 0);
        assert_eq!(m.variant, 1);
        assert_eq!(m.size, 250);
        assert_eq!(m.seconds, 1.23);
        assert_eq!(m.configuration(), Configuration::new(0, 1));
        assert_eq!(m.to_string(), "0 1 250 1.23");
        Ok(())
    }

    #[test]
    fn test_parse_tolerates_tabs_and_trailing_newline() -> Result<()> {
        let m: Measurement = "3\t2  17\t0.5\n".parse()?;
        assert_eq!(m, Measurement::new(Configuration::new(3, 2), 17, 0.5));
        Ok(())
    }

    #[test]
    fn test_malformed_lines_are_rejected() {
        assert!("0 1 250".parse::<Measurement>().is_err());
        assert!("0 1 250 1.23 9".parse::<Measurement>().is_err());
        assert!("a 1 250 1.23".parse::<Measurement>().is_err());
        assert!("0 1 -250 1.23".parse::<Measurement>().is_err());
        assert!("0 1 250 fast".parse::<Measurement>().is_err());
        assert!("".parse::<Measurement>().is_err());
    }

    #[test]
    fn test_text_rendering_rounds_to_centiseconds() {
        let m = Measurement::new(Configuration::new(2, 0), 900, 0.126);
        assert_eq!(RecordFormat::Text.render(&m).unwrap(), "2 0 900 0.13");
    }

    #[test]
    fn test_json_format() -> Result<()> {
        let m = Measurement::new(Configuration::new(0, 3), 42, 0.75);
        let line = RecordFormat::Json.render(&m)?;
        assert_eq!(
            line,
            r#"{"strategy":0,"variant":3,"size":42,"seconds":0.75}"#
        );
        assert_eq!(RecordFormat::Json.parse(&line)?, m);
        assert!(RecordFormat::Json.parse("0 3 42 0.75").is_err());
        Ok(())
    }
}
