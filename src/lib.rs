//! photosorb-rs: Photo-sorption Kinetics Simulation
//!
//! Simulates adsorption, desorption and their photo-activated variants of
//! a gas on a semiconductor surface inside a continuously flushed reactor,
//! and prepares measured mass-spectrometer traces to drive those runs.
//!
//! # Architecture
//!
//! photosorb-rs is built on two core principles:
//!
//! 1. **Separation of Physics and Numerics**
//!    - Kinetic models define rate laws (what to solve)
//!    - The solver provides the method (how to solve)
//!
//! 2. **Closed set of rate laws**
//!    - Four variants selected once per run ([`models::ReactorModel`])
//!    - Parameters validated before any stepping
//!
//! # Quick Start
//!
//! ```rust
//! use photosorb_rs::prelude::*;
//! use photosorb_rs::presets;
//!
//! # fn main() -> Result<(), SorptionError> {
//! // 1. Resolve the rate law
//! let model = ReactorModel::build(KineticVariant::Desorption, &presets::thermal_desorption())?;
//! let scenario = Scenario::new(model);
//!
//! // 2. Configure solver: Δt = 0.1 ms over 10 ms
//! let config = SolverConfiguration::new(1e-4, 1e-2);
//!
//! // 3. Run simulation
//! let result = EulerSolver::new().solve(&scenario, &config)?;
//!
//! // 4. Access results
//! assert_eq!(result.len(), 100);
//! assert!(result.final_occupancy().unwrap() < 0.8);
//! # Ok(())
//! # }
//! ```
//!
//! # Modules
//!
//! - [`physics`]: State vector, kinetic model trait, shared reactor physics
//! - [`models`]: The four rate laws
//! - [`solver`]: Explicit Euler integrator
//! - [`preprocess`]: Measured-trace calibration, windowing and resampling
//! - [`output`]: CSV export
//! - [`config`]: JSON experiment description
//! - [`presets`]: Reference experiments

pub mod error;

// Core modules
pub mod physics;
pub mod models;
pub mod solver;

pub mod preprocess;
pub mod output;
pub mod config;
pub mod presets;

pub use error::{SorptionError, SorptionResult};

pub mod prelude {
    //! Convenient imports for common usage
    //!
    //! ```rust
    //! use photosorb_rs::prelude::*;
    //! ```
    pub use crate::error::{SorptionError, SorptionResult};
    pub use crate::physics::{KineticModel,
                             ReactorParameters,
                             SurfaceState};
    pub use crate::models::{KineticVariant, ReactorModel};
    pub use crate::solver::{EulerSolver,
                            Scenario,
                            SimulationState,
                            Solver,
                            SolverConfiguration};
    pub use crate::output::{CsvExporter, Exporter};
    pub use crate::config::ExperimentConfig;
}
