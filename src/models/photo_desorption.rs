//! Desorption driven by illumination
//!
//! Photogenerated holes neutralise ionosorbed species, so the desorption
//! channel is proportional to the photogeneration term G instead of the
//! bulk electrons, and both channels carry the Boltzmann factor (inverted
//! for desorption):
//!
//! ```text
//! β     = exp(−N₀·θ/(L_D·n_e))
//! dθ/dt = k_a·A·(1−θ)·n_e·β − k_d·θ·G/β
//! dA/dt = −N₀·S·dθ/dt − Q·A/V
//! ```

use crate::error::SorptionResult;
use crate::physics::parameters::check_non_negative;
use crate::physics::{FlowReactor, KineticModel, ReactorParameters, SurfaceCharge, SurfaceState};

/// Photo-desorption rate law without inflow
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoDesorption {
    adsorption_constant: f64,
    desorption_constant: f64,
    initial_occupancy: f64,
    generation_product: f64,
    charge: SurfaceCharge,
    reactor: FlowReactor,
}

impl PhotoDesorption {
    pub const NAME: &'static str = "Photo-Desorption";

    /// Build from a parameter record
    ///
    /// Requires `desorption_constant` and `generation_product`.
    pub fn from_parameters(parameters: &ReactorParameters) -> SorptionResult<Self> {
        parameters.validate_common()?;
        let desorption_constant = ReactorParameters::require(
            parameters.desorption_constant,
            Self::NAME,
            "desorption_constant",
        )?;
        let generation_product = ReactorParameters::require(
            parameters.generation_product,
            Self::NAME,
            "generation_product",
        )?;
        check_non_negative("desorption_constant", desorption_constant)?;
        check_non_negative("generation_product", generation_product)?;

        Ok(Self {
            adsorption_constant: parameters.adsorption_constant,
            desorption_constant,
            initial_occupancy: parameters.initial_occupied_fraction,
            generation_product,
            charge: SurfaceCharge::from_parameters(parameters),
            reactor: FlowReactor::from_parameters(parameters),
        })
    }
}

impl KineticModel for PhotoDesorption {
    fn initial_condition(&self) -> SurfaceState {
        SurfaceState::new(self.initial_occupancy, 0.0)
    }

    fn occupancy_rate(&self, state: &SurfaceState) -> f64 {
        let theta = state.occupancy();
        let factor = self.charge.boltzmann_factor(theta);

        let adsorption = self.adsorption_constant
            * state.concentration()
            * (1.0 - theta)
            * self.charge.bulk_electron_concentration
            * factor;
        let desorption = self.desorption_constant * theta * self.generation_product / factor;

        adsorption - desorption
    }

    fn rate(&self, state: &SurfaceState) -> SurfaceState {
        let d_theta = self.occupancy_rate(state);
        let d_conc = self.reactor.mass_balance(
            self.charge.site_concentration,
            d_theta,
            -state.concentration(),
        );
        SurfaceState::new(d_theta, d_conc)
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some("Photo-desorption by photogenerated carriers, Boltzmann-screened")
    }
}
