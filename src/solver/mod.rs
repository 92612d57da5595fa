//! Numerical solvers
//!
//! This module provides the traits and implementation of the time
//! integrator. A solver applies a numerical method to the equations
//! provided by a kinetic model within a specific scenario.
//!
//! # Core Concepts
//!
//! ## The Architecture (WHAT vs HOW)
//!
//! 1. **Scenario** (`Scenario`) - WHAT to solve
//!    - Kinetic model (equations)
//!    - Concentration source (simulated or measured)
//!
//! 2. **Configuration** (`SolverConfiguration`) - HOW to solve
//!    - Time step Δt
//!    - Duration
//!    - Progress cadence
//!
//! 3. **Solver** (`Solver` trait) - The numerical method
//!    - Applies the numerical scheme
//!    - Returns the solution as a `SimulationState`
//!    - Independent of physics
//!
//! # Workflow Diagram
//!
//! ```text
//! ┌─────────────────┐     ┌──────────────────────┐
//! │  Kinetic Model  │     │ Measured data        │
//! │  (rate law)     │     │ (preprocess, opt.)   │
//! └────────┬────────┘     └──────────┬───────────┘
//!          │                         │
//!          └──────────┬──────────────┘
//!                     │
//!            ┌────────▼────────┐
//!            │ Scenario        │ ← WHAT to solve
//!            └────────┬────────┘
//!                     │
//!            ┌────────▼─────────────┐
//!            │ Solver Configuration │ ← HOW to solve
//!            └────────┬─────────────┘
//!                     │
//!            ┌────────▼────────┐
//!            │ EulerSolver     │ ← The method
//!            └────────┬────────┘
//!                     │
//!            ┌────────▼────────────────────────┐
//!            │ SimulationState                 │ ← The solution
//!            │ (time, concentration, occupancy)│
//!            └─────────────────────────────────┘
//! ```
//!
//! # Sample Count
//!
//! A run of duration `T` with step `Δt` holds `n = max(1, ⌊T/Δt⌋)` samples.
//! A duration shorter than one step yields the initial sample only. A grid
//! longer than [`MAX_SAMPLES`] is a configuration error.
//!
//! # Error Handling
//!
//! Invalid configurations fail before any stepping. Numerical trouble
//! (θ leaving [0, 1], negative or non-finite concentration) is NOT an
//! error: it is logged and left in the trajectory.

// =================================================================================================
// Module Declarations
// =================================================================================================
mod traits;
mod scenario;
mod methods;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use traits::{
    Progress,
    SimulationState,
    Solver,
    SolverConfiguration,
    DEFAULT_PROGRESS_INTERVAL,
    DEFAULT_TIME_STEP,
};

pub use scenario::{ConcentrationSource, Scenario};

pub use methods::EulerSolver;

use crate::error::{SorptionError, SorptionResult};

// =================================================================================================
// Helper Functions
// =================================================================================================

/// Relative slack applied before rounding a ratio of times to a step count
///
/// 0.3 / 0.1 evaluates to 2.9999999999999996; without slack the floor
/// would drop a sample the caller clearly asked for.
pub(crate) const GRID_TOLERANCE: f64 = 1e-9;

/// Largest grid a run or a resampled trace may allocate
///
/// Three sequences of 10⁸ samples already take 2.4 GB.
pub const MAX_SAMPLES: usize = 100_000_000;

/// Number of samples covering `duration` at step `dt`
///
/// `max(1, ⌊duration/dt⌋)`, computed with a relative slack of 1e-9: a
/// duration that falls short of a whole number of steps by less than one
/// part in 10⁹ counts that last step. `10·dt·(1 − 10⁻¹⁰)` gives 10 samples
/// where a plain floor would give 9; `10·dt·(1 − 10⁻⁸)` gives 9.
///
/// The result is not capped by [`MAX_SAMPLES`]; configuration validation
/// enforces it.
///
/// # Example
///
/// ```rust
/// use photosorb_rs::solver::sample_count;
///
/// assert_eq!(sample_count(1e-3, 1e-4), 10);
/// assert_eq!(sample_count(0.3, 0.1), 3);
/// assert_eq!(sample_count(0.5, 1.0), 1);
/// ```
pub fn sample_count(duration: f64, dt: f64) -> usize {
    let ratio = duration / dt;
    let n = (ratio * (1.0 + GRID_TOLERANCE)).floor();
    if n.is_finite() && n >= 1.0 { n as usize } else { 1 }
}

/// Ensure `span/dt` steps fit within [`MAX_SAMPLES`]
///
/// `what` names the grid in the error message.
///
/// # Errors
///
/// [`SorptionError::Configuration`] when the ratio is not finite or
/// exceeds the cap.
pub(crate) fn check_grid(what: &str, span: f64, dt: f64) -> SorptionResult<()> {
    let ratio = span / dt;
    if !ratio.is_finite() || ratio > MAX_SAMPLES as f64 {
        return Err(SorptionError::Configuration(format!(
            "{} of {} s at step {} s exceeds {} samples",
            what, span, dt, MAX_SAMPLES
        )));
    }
    Ok(())
}

// =================================================================================================
// Tests
// =================================================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sample_count_exact_ratio() {
        assert_eq!(sample_count(1.0, 1e-3), 1000);
        assert_eq!(sample_count(100.0, 1e-4), 1_000_000);
    }

    #[test]
    fn test_sample_count_absorbs_representation_error() {
        assert_eq!(sample_count(0.3, 0.1), 3);
        assert_eq!(sample_count(0.7, 0.1), 7);
    }

    #[test]
    fn test_sample_count_truncates_partial_step() {
        assert_eq!(sample_count(1.05, 0.1), 10);
        assert_eq!(sample_count(0.99, 0.1), 9);
    }

    #[test]
    fn test_sample_count_rounds_up_within_slack() {
        assert_eq!(sample_count(1.0 * (1.0 - 1e-10), 0.1), 10);
        assert_eq!(sample_count(1.0 * (1.0 - 1e-8), 0.1), 9);
    }

    #[test]
    fn test_check_grid_bounds() {
        assert!(check_grid("Run", 1.0, 1e-8).is_ok());
        assert!(matches!(
            check_grid("Run", 1.0, 1e-300),
            Err(SorptionError::Configuration(_))
        ));
        assert!(check_grid("Run", f64::MAX, 1e-10).is_err());
    }

    #[test]
    fn test_sample_count_clamps_to_one() {
        assert_eq!(sample_count(1e-5, 1e-3), 1);
        assert_eq!(sample_count(0.0, 1e-3), 1);
    }
}
