//! Numerical solver traits and types
//!
//! # Design Philosophy
//!
//! - `SolverConfiguration` holds HOW to integrate (time step, duration)
//! - `SimulationState` holds the solution (three index-aligned sequences)
//! - `Solver` is the stable seam every integrator implements

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{SorptionError, SorptionResult};
use crate::physics::KineticModel;
use crate::solver::Scenario;

/// Default time step \[s\]
pub const DEFAULT_TIME_STEP: f64 = 1e-3;

/// Default progress cadence \[steps\]
pub const DEFAULT_PROGRESS_INTERVAL: usize = 10_000;

// =================================================================================================
// Solver configuration
// =================================================================================================

/// Configuration for the time integration
///
/// # Example
///
/// ```rust
/// use photosorb_rs::solver::SolverConfiguration;
///
/// let config = SolverConfiguration::new(1e-4, 1e-3);
/// assert!(config.validate().is_ok());
/// assert_eq!(config.sample_count(), 10);
/// ```
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SolverConfiguration {
    /// Fixed time step Δt \[s\]
    #[serde(default = "default_time_step")]
    pub time_step: f64,

    /// Simulated duration \[s\]
    pub duration: f64,

    /// Steps between two progress notifications
    #[serde(default = "default_progress_interval")]
    pub progress_interval: usize,
}

fn default_time_step() -> f64 {
    DEFAULT_TIME_STEP
}

fn default_progress_interval() -> usize {
    DEFAULT_PROGRESS_INTERVAL
}

impl SolverConfiguration {
    /// Create a configuration with the default progress cadence
    pub fn new(time_step: f64, duration: f64) -> Self {
        Self {
            time_step,
            duration,
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }

    /// Configuration with the default time step of 1 ms
    pub fn with_duration(duration: f64) -> Self {
        Self::new(DEFAULT_TIME_STEP, duration)
    }

    /// Builder pattern: set progress cadence
    pub fn progress_interval(mut self, steps: usize) -> Self {
        self.progress_interval = steps;
        self
    }

    /// Number of samples a run produces, see [`sample_count`](crate::solver::sample_count)
    pub fn sample_count(&self) -> usize {
        super::sample_count(self.duration, self.time_step)
    }

    /// Validate configuration
    pub fn validate(&self) -> SorptionResult<()> {
        if !self.time_step.is_finite() || self.time_step <= 0.0 {
            return Err(SorptionError::Configuration(format!(
                "Time step must be positive, got {}",
                self.time_step
            )));
        }
        if !self.duration.is_finite() || self.duration <= 0.0 {
            return Err(SorptionError::Configuration(format!(
                "Duration must be positive, got {}",
                self.duration
            )));
        }
        if self.progress_interval == 0 {
            return Err(SorptionError::Configuration(
                "Progress interval must be at least 1 step".to_string(),
            ));
        }
        super::check_grid("Run", self.duration, self.time_step)
    }
}

// =================================================================================================
// Simulation state (result)
// =================================================================================================

/// Solution of one integration run
///
/// `time`, `concentration` and `occupancy` always share the same length and
/// sample `i` of each refers to the same instant `i·Δt`.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SimulationState {
    /// Time stamps \[s\]
    pub time: Vec<f64>,

    /// Adsorbate concentration
    pub concentration: Vec<f64>,

    /// Occupied-site fraction
    pub occupancy: Vec<f64>,

    /// Diagnostic metadata (solver, model, dt, ...)
    pub metadata: HashMap<String, String>,
}

impl SimulationState {
    /// Preallocate `n` zeroed samples on the grid `i·dt`
    pub(crate) fn on_grid(n: usize, dt: f64) -> Self {
        Self {
            time: (0..n).map(|i| i as f64 * dt).collect(),
            concentration: vec![0.0; n],
            occupancy: vec![0.0; n],
            metadata: HashMap::new(),
        }
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.time.len()
    }

    /// True when no sample is stored
    pub fn is_empty(&self) -> bool {
        self.time.is_empty()
    }

    /// Occupancy at the last sample
    pub fn final_occupancy(&self) -> Option<f64> {
        self.occupancy.last().copied()
    }

    /// Concentration at the last sample
    pub fn final_concentration(&self) -> Option<f64> {
        self.concentration.last().copied()
    }

    /// Add a metadata entry
    pub fn add_metadata(&mut self, key: &str, value: &str) {
        self.metadata.insert(key.to_string(), value.to_string());
    }

    /// Get a metadata entry
    pub fn get_metadata(&self, key: &str) -> Option<&str> {
        self.metadata.get(key).map(String::as_str)
    }

    /// Index of the first sample holding a NaN or infinite value
    pub fn first_non_finite(&self) -> Option<usize> {
        (0..self.len()).find(|&i| {
            !self.concentration[i].is_finite() || !self.occupancy[i].is_finite()
        })
    }
}

// =================================================================================================
// Progress notification
// =================================================================================================

/// Snapshot handed to a progress callback
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Progress {
    /// Index of the sample just computed
    pub step: usize,
    /// Index of the last sample of the run
    pub total_steps: usize,
    /// Simulated time at `step`
    pub time: f64,
}

impl Progress {
    /// Completed fraction in [0, 1]
    pub fn fraction(&self) -> f64 {
        if self.total_steps == 0 {
            1.0
        } else {
            self.step as f64 / self.total_steps as f64
        }
    }
}

// =================================================================================================
// Solver trait
// =================================================================================================

/// Trait for numerical solvers
///
/// # Responsibility
/// Applies a time-stepping scheme to the equations of a [`Scenario`].
/// The solver is independent of the physics.
pub trait Solver {
    /// Integrate `scenario` with `config`, reporting progress to `on_progress`
    ///
    /// The callback is invoked synchronously, at most once per completed
    /// step and in increasing step order; it cannot alter the result.
    fn solve_with_progress<M, F>(
        &self,
        scenario: &Scenario<M>,
        config: &SolverConfiguration,
        on_progress: F,
    ) -> SorptionResult<SimulationState>
    where
        M: KineticModel,
        F: FnMut(Progress);

    /// Integrate `scenario` with `config`
    fn solve<M: KineticModel>(
        &self,
        scenario: &Scenario<M>,
        config: &SolverConfiguration,
    ) -> SorptionResult<SimulationState> {
        self.solve_with_progress(scenario, config, |_| {})
    }

    /// Solver name (used to display and logging)
    fn name(&self) -> &'static str;
}

// =================================================================================================
// Tests
// =================================================================================================
