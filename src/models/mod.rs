//! Kinetic models of the flushed reactor
//!
//! All models implement the [`KineticModel`](crate::physics::KineticModel) trait.
//! The solver calls `rate` at each time step: models are responsible for
//! the physics (rate law + mass balance), the solver for the time integration.
//!
//! # Available Models
//!
//! | Variant            | Rate law dθ/dt                                   | Gas phase        | A(0) |
//! |--------------------|--------------------------------------------------|------------------|------|
//! | [`Adsorption`]     | `k_a·A·(1−θ)·(n_e − θ·N₀/L_D)`                    | `+Q·(A₀ − A)/V`  | A₀   |
//! | [`PhotoAdsorption`]| `k_a·A·(1−θ)·(n_e+G)·β`                           | `+Q·(A₀ − A)/V`  | A₀   |
//! | [`Desorption`]     | `k_a·A·(1−θ)·(n_e − θN₀/L_D) − k_d·θ·(n_e + θN₀/L_D)` | `−Q·A/V`     | 0    |
//! | [`PhotoDesorption`]| `k_a·A·(1−θ)·n_e·β − k_d·θ·G/β`                   | `−Q·A/V`         | 0    |
//!
//! with `β = exp(−N₀·θ/(L_D·n_e))`.
//!
//! # Selecting a model
//!
//! [`ReactorModel`] is the closed set of the four variants. It is built once
//! per run from a [`KineticVariant`] and a
//! [`ReactorParameters`](crate::physics::ReactorParameters) record, and the
//! solver is generic over it, so the per-step dispatch is a plain `match`.

// =================================================================================================
// Module Declarations
// =================================================================================================

pub mod adsorption;
pub mod photo_adsorption;
pub mod desorption;
pub mod photo_desorption;

// =================================================================================================
// Public Re-exports
// =================================================================================================

pub use adsorption::Adsorption;
pub use desorption::Desorption;
pub use photo_adsorption::PhotoAdsorption;
pub use photo_desorption::PhotoDesorption;

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{SorptionError, SorptionResult};
use crate::physics::{KineticModel, ReactorParameters, SurfaceState};

// =================================================================================================
// Variant tag
// =================================================================================================

/// Which rate law a run uses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KineticVariant {
    Adsorption,
    PhotoAdsorption,
    Desorption,
    PhotoDesorption,
}

impl KineticVariant {
    pub const ALL: [KineticVariant; 4] = [
        KineticVariant::Adsorption,
        KineticVariant::PhotoAdsorption,
        KineticVariant::Desorption,
        KineticVariant::PhotoDesorption,
    ];

    /// Display name, identical to the model's `name()`
    pub fn name(&self) -> &'static str {
        match self {
            KineticVariant::Adsorption => Adsorption::NAME,
            KineticVariant::PhotoAdsorption => PhotoAdsorption::NAME,
            KineticVariant::Desorption => Desorption::NAME,
            KineticVariant::PhotoDesorption => PhotoDesorption::NAME,
        }
    }

    /// True for the variants fed with fresh adsorbate
    pub fn has_inflow(&self) -> bool {
        matches!(self, KineticVariant::Adsorption | KineticVariant::PhotoAdsorption)
    }
}

impl fmt::Display for KineticVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for KineticVariant {
    type Err = SorptionError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().replace('_', "-").as_str() {
            "adsorption" => Ok(KineticVariant::Adsorption),
            "photo-adsorption" => Ok(KineticVariant::PhotoAdsorption),
            "desorption" => Ok(KineticVariant::Desorption),
            "photo-desorption" => Ok(KineticVariant::PhotoDesorption),
            other => Err(SorptionError::Configuration(format!(
                "Unknown kinetic variant '{}'",
                other
            ))),
        }
    }
}

// =================================================================================================
// Closed model set
// =================================================================================================

/// One of the four rate laws, with its constants resolved
#[derive(Debug, Clone, PartialEq)]
pub enum ReactorModel {
    Adsorption(Adsorption),
    PhotoAdsorption(PhotoAdsorption),
    Desorption(Desorption),
    PhotoDesorption(PhotoDesorption),
}

impl ReactorModel {
    /// Validate `parameters` for `variant` and resolve the rate law
    ///
    /// # Errors
    ///
    /// - [`SorptionError::MissingParameter`] when a field the variant needs is absent
    /// - [`SorptionError::Configuration`] for non-finite or out-of-range values
    pub fn build(variant: KineticVariant, parameters: &ReactorParameters) -> SorptionResult<Self> {
        Ok(match variant {
            KineticVariant::Adsorption => {
                ReactorModel::Adsorption(Adsorption::from_parameters(parameters)?)
            }
            KineticVariant::PhotoAdsorption => {
                ReactorModel::PhotoAdsorption(PhotoAdsorption::from_parameters(parameters)?)
            }
            KineticVariant::Desorption => {
                ReactorModel::Desorption(Desorption::from_parameters(parameters)?)
            }
            KineticVariant::PhotoDesorption => {
                ReactorModel::PhotoDesorption(PhotoDesorption::from_parameters(parameters)?)
            }
        })
    }

    /// Variant tag of this model
    pub fn variant(&self) -> KineticVariant {
        match self {
            ReactorModel::Adsorption(_) => KineticVariant::Adsorption,
            ReactorModel::PhotoAdsorption(_) => KineticVariant::PhotoAdsorption,
            ReactorModel::Desorption(_) => KineticVariant::Desorption,
            ReactorModel::PhotoDesorption(_) => KineticVariant::PhotoDesorption,
        }
    }
}

impl KineticModel for ReactorModel {
    fn initial_condition(&self) -> SurfaceState {
        match self {
            ReactorModel::Adsorption(m) => m.initial_condition(),
            ReactorModel::PhotoAdsorption(m) => m.initial_condition(),
            ReactorModel::Desorption(m) => m.initial_condition(),
            ReactorModel::PhotoDesorption(m) => m.initial_condition(),
        }
    }

    #[inline]
    fn occupancy_rate(&self, state: &SurfaceState) -> f64 {
        match self {
            ReactorModel::Adsorption(m) => m.occupancy_rate(state),
            ReactorModel::PhotoAdsorption(m) => m.occupancy_rate(state),
            ReactorModel::Desorption(m) => m.occupancy_rate(state),
            ReactorModel::PhotoDesorption(m) => m.occupancy_rate(state),
        }
    }

    #[inline]
    fn rate(&self, state: &SurfaceState) -> SurfaceState {
        match self {
            ReactorModel::Adsorption(m) => m.rate(state),
            ReactorModel::PhotoAdsorption(m) => m.rate(state),
            ReactorModel::Desorption(m) => m.rate(state),
            ReactorModel::PhotoDesorption(m) => m.rate(state),
        }
    }

    fn name(&self) -> &str {
        self.variant().name()
    }

    fn description(&self) -> Option<&str> {
        match self {
            ReactorModel::Adsorption(m) => m.description(),
            ReactorModel::PhotoAdsorption(m) => m.description(),
            ReactorModel::Desorption(m) => m.description(),
            ReactorModel::PhotoDesorption(m) => m.description(),
        }
    }
}

// =================================================================================================
// Tests
// =================================================================================================
