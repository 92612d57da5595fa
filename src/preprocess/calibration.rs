//! Reading and calibrating mass-spectrometer traces
//!
//! Input files carry one header line followed by `timestamp;signal` rows.
//! Extra fields after the second are ignored.

use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{SorptionError, SorptionResult};

/// One raw row of a measured trace
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CalibrationSample {
    /// Time stamp \[s\]
    pub timestamp: f64,
    /// Detector signal, instrument units
    pub raw_signal: f64,
}

/// Two-point linear calibration: `concentration = (signal − offset)·scale`
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Calibration {
    pub scale: f64,
    pub offset: f64,
}

impl Default for Calibration {
    fn default() -> Self {
        Self {
            scale: 1.0,
            offset: 0.0,
        }
    }
}

impl Calibration {
    pub fn new(scale: f64, offset: f64) -> Self {
        Self { scale, offset }
    }

    /// Concentration for a single raw signal
    #[inline]
    pub fn concentration(&self, raw_signal: f64) -> f64 {
        (raw_signal - self.offset) * self.scale
    }

    /// Convert every sample to a `(timestamp, concentration)` pair
    pub fn apply(&self, samples: &[CalibrationSample]) -> Vec<(f64, f64)> {
        samples
            .iter()
            .map(|s| (s.timestamp, self.concentration(s.raw_signal)))
            .collect()
    }
}

/// Read a semicolon-delimited trace from `path`
///
/// # Errors
///
/// - [`SorptionError::Csv`] if the file cannot be opened or read
/// - [`SorptionError::Parse`] for a row with fewer than two fields, a
///   non-numeric cell, or a timestamp not greater than the previous one
pub fn read_samples<P: AsRef<Path>>(path: P) -> SorptionResult<Vec<CalibrationSample>> {
    let path = path.as_ref();
    let reader = builder().from_path(path)?;
    let samples = collect_samples(reader)?;

    info!("Read {} samples from {}", samples.len(), path.display());
    Ok(samples)
}

/// Same as [`read_samples`] for any byte source
pub fn read_samples_from_reader<R: Read>(source: R) -> SorptionResult<Vec<CalibrationSample>> {
    collect_samples(builder().from_reader(source))
}

fn builder() -> ReaderBuilder {
    let mut builder = ReaderBuilder::new();
    builder
        .delimiter(b';')
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All);
    builder
}

fn collect_samples<R: Read>(mut reader: csv::Reader<R>) -> SorptionResult<Vec<CalibrationSample>> {
    let mut samples: Vec<CalibrationSample> = Vec::new();

    for record in reader.records() {
        let record = record?;
        let line = record.position().map(|p| p.line()).unwrap_or(0);

        if record.len() < 2 {
            return Err(SorptionError::Parse {
                line,
                message: format!("expected 2 fields, found {}", record.len()),
            });
        }

        let timestamp = parse_cell(&record[0], line, "timestamp")?;
        let raw_signal = parse_cell(&record[1], line, "signal")?;

        if let Some(previous) = samples.last()
            && timestamp <= previous.timestamp
        {
            return Err(SorptionError::Parse {
                line,
                message: format!(
                    "timestamp {} does not follow {}",
                    timestamp, previous.timestamp
                ),
            });
        }

        samples.push(CalibrationSample {
            timestamp,
            raw_signal,
        });
    }

    Ok(samples)
}

fn parse_cell(cell: &str, line: u64, field: &str) -> SorptionResult<f64> {
    let value: f64 = cell.parse().map_err(|_| SorptionError::Parse {
        line,
        message: format!("{} '{}' is not a number", field, cell),
    })?;

    if !value.is_finite() {
        return Err(SorptionError::Parse {
            line,
            message: format!("{} '{}' is not finite", field, cell),
        });
    }
    Ok(value)
}
