//! Forward Euler numerical solver
//!
//! # Mathematical Background
//!
//! The Forward Euler method is the simplest explicit time-stepping scheme
//! for solving ordinary differential equations (ODEs):
//!
//! ```text
//! dy/dt = f(y)
//! ```
//!
//! with y = (θ, A). The scheme approximates the solution at t_{i+1} = t_i + dt using:
//!
//! ```text
//! y_{i+1} = y_i + dt * f(y_i)
//! ```
//!
//! # Characteristics
//!
//! - **Order**: First-order accurate (error ~ O(dt))
//! - **Stability**: Conditionally stable (requires small time steps)
//! - **Complexity**: 1 rate evaluation per step
//! - **Memory**: three preallocated sequences of `n` samples
//!
//! # Limitations
//!
//! ⚠️ Nothing keeps θ inside [0, 1] or A non-negative. With rate constants
//! too stiff for the chosen dt the trajectory overshoots or diverges; the
//! solver reports the first non-finite sample as a warning and returns the
//! trajectory unchanged. Validate results post hoc or reduce dt.
//!
//! # Example
//!
//! ```rust
//! use photosorb_rs::models::{KineticVariant, ReactorModel};
//! use photosorb_rs::solver::{EulerSolver, Scenario, Solver, SolverConfiguration};
//! use photosorb_rs::presets;
//!
//! let model = ReactorModel::build(KineticVariant::Desorption, &presets::thermal_desorption()).unwrap();
//! let scenario = Scenario::new(model);
//! let config = SolverConfiguration::new(1e-4, 1e-3);
//!
//! let result = EulerSolver::new().solve(&scenario, &config).unwrap();
//! assert_eq!(result.len(), 10);
//! ```

use log::{debug, info, warn};

use crate::error::{SorptionError, SorptionResult};
use crate::physics::{KineticModel, SurfaceState};
use crate::solver::{
    ConcentrationSource, Progress, Scenario, SimulationState, Solver, SolverConfiguration,
};

// =================================================================================================
// Forward Euler Solver
// =================================================================================================

/// Forward Euler time-stepping solver
///
/// # Algorithm
///
/// 1. `n = sample_count(duration, dt)`, three sequences of length `n`
/// 2. `time[i] = i·dt`, sample 0 from the model's initial condition
/// 3. For i = 0 .. n−2: evaluate the model at sample i and write sample i+1
///
/// With a measured concentration source the concentration sequence is
/// copied in and only θ follows the recurrence.
#[derive(Debug, Clone, Copy, Default)]
pub struct EulerSolver;

impl EulerSolver {
    /// Create a new Forward Euler solver
    ///
    /// # Example
    ///
    /// ```rust
    /// use photosorb_rs::solver::{EulerSolver, Solver};
    ///
    /// let solver = EulerSolver::new();
    /// assert_eq!(solver.name(), "Forward Euler");
    /// ```
    pub fn new() -> Self {
        Self
    }

    /// Coupled recurrence on both channels
    fn integrate_coupled<M, F>(
        model: &M,
        result: &mut SimulationState,
        dt: f64,
        interval: usize,
        on_progress: &mut F,
    ) where
        M: KineticModel,
        F: FnMut(Progress),
    {
        let n = result.len();
        let mut state = model.initial_condition();
        result.occupancy[0] = state.occupancy();
        result.concentration[0] = state.concentration();

        for i in 0..n.saturating_sub(1) {
            state = state + model.rate(&state) * dt;

            result.occupancy[i + 1] = state.occupancy();
            result.concentration[i + 1] = state.concentration();

            notify(i + 1, n, result.time[i + 1], interval, on_progress);
        }
    }

    /// Occupancy-only recurrence against an injected concentration
    fn integrate_driven<M, F>(
        model: &M,
        result: &mut SimulationState,
        measured: &[f64],
        dt: f64,
        interval: usize,
        on_progress: &mut F,
    ) where
        M: KineticModel,
        F: FnMut(Progress),
    {
        let n = result.len();
        result.concentration.copy_from_slice(&measured[..n]);
        result.occupancy[0] = model.initial_condition().occupancy();

        for i in 0..n.saturating_sub(1) {
            let state = SurfaceState::new(result.occupancy[i], result.concentration[i]);
            result.occupancy[i + 1] = result.occupancy[i] + model.occupancy_rate(&state) * dt;

            notify(i + 1, n, result.time[i + 1], interval, on_progress);
        }
    }
}

#[inline]
fn notify<F: FnMut(Progress)>(step: usize, n: usize, time: f64, interval: usize, on_progress: &mut F) {
    if step % interval == 0 {
        debug!("step {}/{} (t = {:.4} s)", step, n - 1, time);
        on_progress(Progress {
            step,
            total_steps: n - 1,
            time,
        });
    }
}

impl Solver for EulerSolver {
    fn solve_with_progress<M, F>(
        &self,
        scenario: &Scenario<M>,
        config: &SolverConfiguration,
        mut on_progress: F,
    ) -> SorptionResult<SimulationState>
    where
        M: KineticModel,
        F: FnMut(Progress),
    {
        // ====== Step 1: Validation ======

        config.validate()?;

        let dt = config.time_step;
        let mut n = config.sample_count();

        if let ConcentrationSource::Measured(measured) = &scenario.concentration {
            if measured.is_empty() {
                return Err(SorptionError::InsufficientData { retained: 0 });
            }
            if measured.len() < n {
                warn!(
                    "Measured concentration covers {} samples, {} requested; truncating run",
                    measured.len(),
                    n
                );
                n = measured.len();
            }
        }

        info!(
            "{}: {} samples, dt = {} s, {} concentration",
            scenario.get_model_name(),
            n,
            dt,
            if scenario.is_data_driven() { "measured" } else { "simulated" }
        );

        // ====== Step 2: Time Integration ======

        let mut result = SimulationState::on_grid(n, dt);

        match &scenario.concentration {
            ConcentrationSource::Simulated => Self::integrate_coupled(
                &scenario.model,
                &mut result,
                dt,
                config.progress_interval,
                &mut on_progress,
            ),
            ConcentrationSource::Measured(measured) => Self::integrate_driven(
                &scenario.model,
                &mut result,
                measured,
                dt,
                config.progress_interval,
                &mut on_progress,
            ),
        }

        // ====== Step 3: Diagnostics ======

        if let Some(index) = result.first_non_finite() {
            warn!(
                "{}: non-finite value at sample {} (t = {} s); dt may be too large for these rate constants",
                scenario.get_model_name(),
                index,
                result.time[index]
            );
        }

        result.add_metadata("solver", self.name());
        result.add_metadata("model", scenario.get_model_name());
        result.add_metadata("dt", &dt.to_string());
        result.add_metadata("samples", &n.to_string());

        info!(
            "{}: done, final occupancy {:?}",
            scenario.get_model_name(),
            result.final_occupancy()
        );

        Ok(result)
    }

    fn name(&self) -> &'static str {
        "Forward Euler"
    }
}

// =================================================================================================
// Tests
// =================================================================================================
