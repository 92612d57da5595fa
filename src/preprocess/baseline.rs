//! Linear baseline drift correction

use log::debug;

use crate::error::{SorptionError, SorptionResult};

/// Remove a linear drift so the trace ends where it started
///
/// With `m` samples, `drift = (c₀ − c_{m−1})/(m − 1)` and every sample
/// `c_j` becomes `c_j + drift·j`. The first sample is unchanged.
///
/// # Errors
///
/// [`SorptionError::InsufficientData`] with fewer than two samples.
pub fn correct_drift(samples: &mut [f64]) -> SorptionResult<()> {
    let m = samples.len();
    if m < 2 {
        return Err(SorptionError::InsufficientData { retained: m });
    }

    let drift = (samples[0] - samples[m - 1]) / (m - 1) as f64;
    debug!("Baseline drift {:.6e} per sample over {} samples", drift, m);

    for (j, value) in samples.iter_mut().enumerate() {
        *value += drift * j as f64;
    }
    Ok(())
}
