//! Export module for simulation results.
//!
//! # Architecture
//!
//! This module defines the [`Exporter`] trait that abstracts the export format.
//! Each format is an independent implementation in its own sub-module.
//!
//! # Available formats
//!
//! | Format  | Module  |
//! |---------|---------|
//! | CSV     | [`csv`] |
//!
//! # Usage example
//!
//! ```rust,no_run
//! use std::path::Path;
//! use photosorb_rs::output::export::{CsvConfig, CsvExporter, Exporter};
//! # use photosorb_rs::solver::SimulationState;
//! # let state = SimulationState::default();
//!
//! // Every 1000th sample, concentration in ppm
//! let exporter = CsvExporter::new(CsvConfig::default().stride(1000));
//! exporter.export(&state, Path::new("desorption.csv"))?;
//! # Ok::<(), photosorb_rs::output::export::CsvError>(())
//! ```

pub mod csv;

pub use csv::{retained_indices, CsvConfig, CsvError, CsvExporter, CsvMetadata};

use std::path::Path;

use crate::solver::SimulationState;

/// Abstraction trait for all export formats.
///
/// # Associated type `Error`
///
/// Each format manages its own errors via the associated type.
/// This avoids systematic boxing (`Box<dyn Error>`) and allows
/// the caller to react precisely based on the error type.
pub trait Exporter {
    /// Error type specific to this export format.
    type Error: std::error::Error;

    /// Writes the time, concentration and occupancy sequences to `path`.
    ///
    /// Any existing file at `path` is replaced.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - the path is invalid or the directory does not exist
    /// - `state` contains no data
    fn export(&self, state: &SimulationState, path: &Path) -> Result<(), Self::Error>;
}
