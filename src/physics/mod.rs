//! Physical models
//!
//! This module provides the traits and shared physics of the reactor.
//! A kinetic model encapsulates the rate equations of the system; it does
//! not integrate them.
//!
//! # Core Concepts
//!
//! - **Kinetic Model**: Computes (dθ/dt, dA/dt) at a given state
//! - **Surface State**: Occupied-site fraction θ and adsorbate concentration A
//! - **Reactor Parameters**: Physical constants of one experiment
//!
//! # Architecture
//!
//! Kinetic models are **separate from numerical solvers**:
//! - The model provides the **equations** (physics)
//! - The solver provides the **method** to solve them (numerics)
//!
//! # Example
//!
//! ```rust
//! use photosorb_rs::physics::{KineticModel, SurfaceState};
//!
//! struct Frozen;
//!
//! impl KineticModel for Frozen {
//!     fn initial_condition(&self) -> SurfaceState { SurfaceState::new(0.5, 1.0) }
//!     fn occupancy_rate(&self, _state: &SurfaceState) -> f64 { 0.0 }
//!     fn rate(&self, _state: &SurfaceState) -> SurfaceState { SurfaceState::zeros() }
//!     fn name(&self) -> &str { "Frozen" }
//! }
//!
//! let model = Frozen;
//! let state = model.initial_condition();
//! assert_eq!(model.rate(&state), SurfaceState::zeros());
//! ```

// module declaration
pub mod traits;
pub mod parameters;
pub mod kinetics;

// re-export commonly used types for convenience
pub use kinetics::{FlowReactor, SurfaceCharge};
pub use parameters::ReactorParameters;
pub use traits::{KineticModel, SurfaceState};
