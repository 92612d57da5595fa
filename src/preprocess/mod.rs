//! Experimental-data preprocessing
//!
//! Turns a raw mass-spectrometer trace into a concentration sequence on
//! the integration grid, ready to drive a
//! [`Scenario::with_measured_concentration`](crate::solver::Scenario::with_measured_concentration).
//!
//! # Pipeline
//!
//! ```text
//! file ─► read_samples ─► Calibration::apply ─► select_window ─► interpolate ─► correct_drift
//!         (t, signal)       (t, concentration)    window + anchors   start + k·Δt   linear baseline
//! ```
//!
//! Grid sample `k` sits at `start_time + k·Δt`, so index 0 of the result is
//! the window start even when no raw sample falls exactly on it.
//!
//! Every stage is a plain function and can be used on its own.

mod baseline;
mod calibration;
mod resample;

use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{SorptionError, SorptionResult};
use crate::physics::parameters::{check_finite, check_positive};

pub use baseline::correct_drift;
pub use calibration::{read_samples, read_samples_from_reader, Calibration, CalibrationSample};
pub use resample::{interpolate, select_window};

/// Settings for [`prepare`]
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PreprocessConfig {
    /// Signal-to-concentration conversion
    #[serde(flatten)]
    pub calibration: Calibration,

    /// Start of the experimental window \[s\]
    #[serde(default)]
    pub start_time: f64,

    /// Length of the experimental window \[s\]
    pub window_duration: f64,
}

impl PreprocessConfig {
    pub fn new(calibration: Calibration, start_time: f64, window_duration: f64) -> Self {
        Self {
            calibration,
            start_time,
            window_duration,
        }
    }

    pub fn validate(&self) -> SorptionResult<()> {
        check_finite("scale", self.calibration.scale)?;
        check_finite("offset", self.calibration.offset)?;
        check_finite("start_time", self.start_time)?;
        check_positive("window_duration", self.window_duration)?;
        Ok(())
    }
}

/// Run the full pipeline on samples already in memory
///
/// # Errors
///
/// - [`SorptionError::Configuration`] for a non-positive `dt`, invalid
///   settings or a grid beyond [`MAX_SAMPLES`](crate::solver::MAX_SAMPLES)
/// - [`SorptionError::InsufficientData`] when fewer than two samples,
///   anchors included, cover the window
pub fn prepare_samples(
    samples: &[CalibrationSample],
    config: &PreprocessConfig,
    dt: f64,
) -> SorptionResult<Vec<f64>> {
    config.validate()?;
    check_positive("time_step", dt)?;

    let calibrated = config.calibration.apply(samples);
    let windowed = select_window(&calibrated, config.start_time, config.window_duration);
    let end = config.start_time + config.window_duration;

    if windowed.len() < 2 {
        return Err(SorptionError::InsufficientData {
            retained: windowed.len(),
        });
    }

    let mut concentration = interpolate(&windowed, config.start_time, end, dt)?;
    correct_drift(&mut concentration)?;

    info!(
        "Preprocessed trace: {} raw, {} retained, {} grid samples",
        samples.len(),
        windowed.len(),
        concentration.len()
    );

    Ok(concentration)
}

/// Read, calibrate, window, resample and baseline-correct the trace at `path`
///
/// # Errors
///
/// Any error of [`read_samples`] or [`prepare_samples`].
pub fn prepare<P: AsRef<Path>>(
    path: P,
    config: &PreprocessConfig,
    dt: f64,
) -> SorptionResult<Vec<f64>> {
    let samples = read_samples(path)?;
    prepare_samples(&samples, config, dt)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn samples(points: &[(f64, f64)]) -> Vec<CalibrationSample> {
        points
            .iter()
            .map(|&(timestamp, raw_signal)| CalibrationSample {
                timestamp,
                raw_signal,
            })
            .collect()
    }

    #[test]
    fn test_pipeline_on_aligned_flat_trace() {
        let raw = samples(&[(0.0, 12.0), (0.1, 12.0), (0.2, 12.0), (0.3, 12.0)]);
        let config = PreprocessConfig::new(Calibration::new(0.5, 2.0), 0.0, 1.0);

        let concentration = prepare_samples(&raw, &config, 0.1).unwrap();

        assert_eq!(concentration.len(), 4);
        for value in concentration {
            assert!((value - 5.0).abs() < 1e-12);
        }
    }

    #[test]
    fn test_window_shortens_trace() {
        let raw = samples(&[(0.0, 1.0), (1.0, 1.0), (2.0, 1.0), (3.0, 1.0)]);
        let config = PreprocessConfig::new(Calibration::default(), 1.0, 1.0);

        let concentration = prepare_samples(&raw, &config, 0.5).unwrap();

        assert_eq!(concentration.len(), 3);
    }

    #[test]
    fn test_window_start_between_samples() {
        let raw: Vec<CalibrationSample> = samples(
            &(0..10).map(|i| (i as f64, i as f64)).collect::<Vec<_>>(),
        );
        let config = PreprocessConfig::new(Calibration::default(), 0.5, 3.0);

        let concentration = prepare_samples(&raw, &config, 0.25).unwrap();

        // 0.5 ..= 3.5; the ramp is pure drift and flattens to its start value
        assert_eq!(concentration.len(), 13);
        assert_eq!(concentration[0], 0.5);
        for value in &concentration {
            assert!((value - 0.5).abs() < 1e-12, "{}", value);
        }
    }

    #[test]
    fn test_samples_between_anchors() {
        let raw = samples(&[(0.0, 1.0), (10.0, 1.0)]);
        let config = PreprocessConfig::new(Calibration::default(), 5.0, 2.0);

        let concentration = prepare_samples(&raw, &config, 0.5).unwrap();

        assert_eq!(concentration, vec![1.0; 5]);
    }

    #[test]
    fn test_trace_ends_before_window() {
        let raw = samples(&[(0.0, 1.0), (1.0, 1.0)]);
        let config = PreprocessConfig::new(Calibration::default(), 5.0, 6.0);

        let result = prepare_samples(&raw, &config, 0.1);

        assert!(matches!(
            result,
            Err(SorptionError::InsufficientData { retained: 1 })
        ));
    }

    #[test]
    fn test_invalid_time_step() {
        let raw = samples(&[(0.0, 1.0), (1.0, 1.0)]);
        let config = PreprocessConfig::new(Calibration::default(), 0.0, 1.0);

        assert!(matches!(
            prepare_samples(&raw, &config, 0.0),
            Err(SorptionError::Configuration(_))
        ));
    }

    #[test]
    fn test_time_step_too_fine_for_window() {
        let raw = samples(&[(0.0, 1.0), (1.0, 1.0)]);
        let config = PreprocessConfig::new(Calibration::default(), 0.0, 1.0);

        assert!(matches!(
            prepare_samples(&raw, &config, 1e-300),
            Err(SorptionError::Configuration(_))
        ));
    }

    #[test]
    fn test_config_from_json() {
        let json = r#"{ "scale": 2.0, "offset": 0.1, "start_time": 5.0, "window_duration": 60.0 }"#;
        let config: PreprocessConfig = serde_json::from_str(json).unwrap();

        assert_eq!(config.calibration, Calibration::new(2.0, 0.1));
        assert_eq!(config.start_time, 5.0);
        assert!(config.validate().is_ok());
    }
}
