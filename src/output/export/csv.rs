//! CSV export of simulation results
//!
//! One row per retained sample:
//!
//! ```text
//! time;concentration·scale;occupancy
//! 0.0000;4400.0000000;0.000000
//! 0.0010;4399.9981234;0.000012
//! ```
//!
//! Time is written with 4 decimals, the scaled concentration with 7 and the
//! occupancy with 6. Rows are downsampled by keeping every `stride`-th
//! sample starting with the first. An existing file is replaced only once the
//! new content is fully written.
//!
//! # With Metadata
//!
//! ```rust,ignore
//! let config = CsvConfig::default()
//!     .stride(100)
//!     .with_metadata(CsvMetadata::from_state(&state));
//!
//! CsvExporter::new(config).export(&state, Path::new("run.csv"))?;
//! ```
//!
//! **Output**:
//! ```text
//! # Photo-sorption Simulation Data
//! # Generated: 2026-10-18T09:12:44+00:00
//! # Model: Desorption
//! # Solver: Forward Euler
//! # Time Step: 0.0001 s
//! # Samples: 1000000
//! #
//! 0.0000;0.0000000;0.800000
//! ...
//! ```

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use log::info;
use tempfile::NamedTempFile;
use thiserror::Error;

use super::Exporter;
use crate::solver::SimulationState;

// =============================================================================
// Errors
// =============================================================================

#[derive(Error, Debug)]
pub enum CsvError {
    #[error("Empty data: the simulation holds no samples")]
    EmptyData,

    #[error("Data length mismatch: {time} time points, {concentration} concentrations, {occupancy} occupancies")]
    LengthMismatch {
        time: usize,
        concentration: usize,
        occupancy: usize,
    },

    #[error("Invalid data: non-finite {column} at sample {index}")]
    NonFinite { column: &'static str, index: usize },

    #[error("Invalid stride: must be at least 1")]
    ZeroStride,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

// =============================================================================
// Configuration Structures
// =============================================================================

/// Configuration for CSV export
///
/// # Example
///
/// ```rust
/// use photosorb_rs::output::export::CsvConfig;
///
/// let config = CsvConfig::default().stride(1000).concentration_scale(1.0);
/// assert_eq!(config.delimiter, ';');
/// assert_eq!(config.stride, 1000);
/// ```
#[derive(Clone, Debug)]
pub struct CsvConfig {
    /// Column delimiter (default: ';')
    pub delimiter: char,

    /// Decimal places for the time column (default: 4)
    pub time_precision: usize,

    /// Decimal places for the scaled concentration (default: 7)
    pub concentration_precision: usize,

    /// Decimal places for the occupancy (default: 6)
    pub occupancy_precision: usize,

    /// Factor applied to the concentration before writing (default: 1e6)
    pub concentration_scale: f64,

    /// Keep every `stride`-th sample (default: 1)
    pub stride: usize,

    /// Refuse to write NaN or infinite values (default: false)
    pub strict: bool,

    /// Include metadata header comments (default: false)
    pub include_metadata: bool,

    /// Metadata to include in header, taken from the state when unset
    pub metadata: Option<CsvMetadata>,
}

impl Default for CsvConfig {
    fn default() -> Self {
        Self {
            delimiter: ';',
            time_precision: 4,
            concentration_precision: 7,
            occupancy_precision: 6,
            concentration_scale: 1e6,
            stride: 1,
            strict: false,
            include_metadata: false,
            metadata: None,
        }
    }
}

impl CsvConfig {
    /// Builder pattern: set delimiter
    pub fn delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    /// Builder pattern: set downsampling stride
    pub fn stride(mut self, stride: usize) -> Self {
        self.stride = stride;
        self
    }

    /// Builder pattern: set concentration scale
    pub fn concentration_scale(mut self, scale: f64) -> Self {
        self.concentration_scale = scale;
        self
    }

    /// Builder pattern: reject non-finite values
    pub fn strict(mut self, strict: bool) -> Self {
        self.strict = strict;
        self
    }

    /// Builder pattern: enable metadata
    pub fn with_metadata(mut self, metadata: CsvMetadata) -> Self {
        self.include_metadata = true;
        self.metadata = Some(metadata);
        self
    }
}

/// Metadata for CSV header comments
///
/// Only fields that are set appear in the header.
#[derive(Clone, Debug, Default)]
pub struct CsvMetadata {
    pub model_name: Option<String>,
    pub solver_name: Option<String>,
    /// Integration step \[s\]
    pub time_step: Option<f64>,
    pub samples: Option<usize>,
}

impl CsvMetadata {
    /// Collect what the solver recorded on the state
    pub fn from_state(state: &SimulationState) -> Self {
        Self {
            model_name: state.get_metadata("model").map(str::to_string),
            solver_name: state.get_metadata("solver").map(str::to_string),
            time_step: state.get_metadata("dt").and_then(|v| v.parse().ok()),
            samples: Some(state.len()),
        }
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Indices kept after downsampling `len` samples by `stride`
///
/// Sample 0 is always kept.
pub fn retained_indices(len: usize, stride: usize) -> impl Iterator<Item = usize> {
    (0..len).step_by(stride.max(1))
}

fn write_metadata_header<W: Write>(out: &mut W, metadata: &CsvMetadata) -> std::io::Result<()> {
    writeln!(out, "# Photo-sorption Simulation Data")?;

    let now = chrono::Utc::now();
    writeln!(out, "# Generated: {}", now.to_rfc3339())?;

    if let Some(model) = &metadata.model_name {
        writeln!(out, "# Model: {}", model)?;
    }
    if let Some(solver) = &metadata.solver_name {
        writeln!(out, "# Solver: {}", solver)?;
    }
    if let Some(dt) = metadata.time_step {
        writeln!(out, "# Time Step: {} s", dt)?;
    }
    if let Some(samples) = metadata.samples {
        writeln!(out, "# Samples: {}", samples)?;
    }

    writeln!(out, "#")?;
    Ok(())
}

fn validate(state: &SimulationState, config: &CsvConfig) -> Result<(), CsvError> {
    if config.stride == 0 {
        return Err(CsvError::ZeroStride);
    }

    if state.is_empty() {
        return Err(CsvError::EmptyData);
    }

    let n = state.time.len();
    if state.concentration.len() != n || state.occupancy.len() != n {
        return Err(CsvError::LengthMismatch {
            time: n,
            concentration: state.concentration.len(),
            occupancy: state.occupancy.len(),
        });
    }

    if config.strict {
        let columns: [(&'static str, &[f64]); 3] = [
            ("time", &state.time),
            ("concentration", &state.concentration),
            ("occupancy", &state.occupancy),
        ];
        for (column, values) in columns {
            if let Some(index) = values.iter().position(|v| !v.is_finite()) {
                return Err(CsvError::NonFinite { column, index });
            }
        }
    }

    Ok(())
}

/// Write `path` through a temporary file in the same directory
///
/// `path` is replaced only after `write` succeeded and the buffer is
/// flushed. On error the previous content is untouched and the temporary
/// file is removed.
fn write_replacing<T>(
    path: &Path,
    write: impl FnOnce(&mut BufWriter<&mut File>) -> Result<T, CsvError>,
) -> Result<T, CsvError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp = NamedTempFile::new_in(dir)?;
    let value = {
        let mut out = BufWriter::new(tmp.as_file_mut());
        let value = write(&mut out)?;
        out.flush()?;
        value
    };
    tmp.persist(path).map_err(|e| e.error)?;

    Ok(value)
}

// =============================================================================
// Exporter
// =============================================================================

/// Writes a [`SimulationState`] as delimited text
#[derive(Clone, Debug, Default)]
pub struct CsvExporter {
    pub config: CsvConfig,
}

impl CsvExporter {
    pub fn new(config: CsvConfig) -> Self {
        Self { config }
    }

    /// Write the rows to any sink
    pub fn write_to<W: Write>(&self, state: &SimulationState, out: &mut W) -> Result<usize, CsvError> {
        let config = &self.config;
        validate(state, config)?;

        if config.include_metadata {
            match &config.metadata {
                Some(metadata) => write_metadata_header(out, metadata)?,
                None => write_metadata_header(out, &CsvMetadata::from_state(state))?,
            }
        }

        let mut rows = 0;
        for i in retained_indices(state.len(), config.stride) {
            writeln!(
                out,
                "{:.tp$}{d}{:.cp$}{d}{:.op$}",
                state.time[i],
                state.concentration[i] * config.concentration_scale,
                state.occupancy[i],
                d = config.delimiter,
                tp = config.time_precision,
                cp = config.concentration_precision,
                op = config.occupancy_precision,
            )?;
            rows += 1;
        }

        Ok(rows)
    }
}

impl Exporter for CsvExporter {
    type Error = CsvError;

    fn export(&self, state: &SimulationState, path: &Path) -> Result<(), CsvError> {
        let rows = write_replacing(path, |out| self.write_to(state, out))?;

        info!("Wrote {} of {} samples to {}", rows, state.len(), path.display());
        Ok(())
    }
}

// =================================================================================================
// Tests
// =================================================================================================
