//! Adsorption under illumination
//!
//! Photogenerated carriers add to the bulk electrons available for
//! ionosorption, and the surface potential is screened through a
//! Boltzmann factor instead of the linear space-charge term:
//!
//! ```text
//! dθ/dt = k_a·A·(1−θ)·(n_e + G)·exp(−N₀·θ/(L_D·n_e))
//! dA/dt = −N₀·S·dθ/dt + Q·(A₀ − A)/V
//! ```

use crate::error::SorptionResult;
use crate::physics::parameters::check_non_negative;
use crate::physics::{FlowReactor, KineticModel, ReactorParameters, SurfaceCharge, SurfaceState};

/// Photo-adsorption rate law with inflow of fresh adsorbate
#[derive(Debug, Clone, PartialEq)]
pub struct PhotoAdsorption {
    adsorption_constant: f64,
    inlet_concentration: f64,
    initial_occupancy: f64,
    /// Photogeneration term G
    generation_product: f64,
    charge: SurfaceCharge,
    reactor: FlowReactor,
}

impl PhotoAdsorption {
    pub const NAME: &'static str = "Photo-Adsorption";

    /// Build from a parameter record
    ///
    /// Requires `initial_adsorbate_concentration` and `generation_product`.
    pub fn from_parameters(parameters: &ReactorParameters) -> SorptionResult<Self> {
        parameters.validate_common()?;
        let inlet_concentration = ReactorParameters::require(
            parameters.initial_adsorbate_concentration,
            Self::NAME,
            "initial_adsorbate_concentration",
        )?;
        let generation_product = ReactorParameters::require(
            parameters.generation_product,
            Self::NAME,
            "generation_product",
        )?;
        check_non_negative("initial_adsorbate_concentration", inlet_concentration)?;
        check_non_negative("generation_product", generation_product)?;

        Ok(Self {
            adsorption_constant: parameters.adsorption_constant,
            inlet_concentration,
            initial_occupancy: parameters.initial_occupied_fraction,
            generation_product,
            charge: SurfaceCharge::from_parameters(parameters),
            reactor: FlowReactor::from_parameters(parameters),
        })
    }
}

impl KineticModel for PhotoAdsorption {
    fn initial_condition(&self) -> SurfaceState {
        SurfaceState::new(self.initial_occupancy, self.inlet_concentration)
    }

    fn occupancy_rate(&self, state: &SurfaceState) -> f64 {
        let theta = state.occupancy();
        self.adsorption_constant
            * state.concentration()
            * (1.0 - theta)
            * (self.charge.bulk_electron_concentration + self.generation_product)
            * self.charge.boltzmann_factor(theta)
    }

    fn rate(&self, state: &SurfaceState) -> SurfaceState {
        let d_theta = self.occupancy_rate(state);
        let d_conc = self.reactor.mass_balance(
            self.charge.site_concentration,
            d_theta,
            self.inlet_concentration - state.concentration(),
        );
        SurfaceState::new(d_theta, d_conc)
    }

    fn name(&self) -> &str {
        Self::NAME
    }

    fn description(&self) -> Option<&str> {
        Some("Langmuir adsorption enhanced by photogenerated carriers, Boltzmann-screened")
    }
}
