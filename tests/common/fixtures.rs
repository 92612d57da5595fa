//! Parameter sets and mock models shared by the integration tests

use photosorb_rs::physics::{KineticModel, ReactorParameters, SurfaceState};
use photosorb_rs::presets::{self, AVOGADRO_NUMBER};

/// Thermal desorption with the adsorption channel switched off
pub fn desorption_parameters() -> ReactorParameters {
    ReactorParameters {
        adsorption_constant: 0.0,
        ..presets::thermal_desorption()
    }
}

/// Dark adsorption in a closed reactor, weak enough screening that the
/// rate law stays non-negative over the whole run
pub fn accumulation_parameters() -> ReactorParameters {
    ReactorParameters {
        debye_length: 2e-6,
        volume_flow_rate: 0.0,
        initial_occupied_fraction: 0.0,
        initial_site_concentration: 1e18 / AVOGADRO_NUMBER,
        ..presets::oxygen_adsorption()
    }
}

/// Every optional field set and every rate constant zero
pub fn frozen_parameters() -> ReactorParameters {
    ReactorParameters {
        adsorption_constant: 0.0,
        desorption_constant: Some(0.0),
        initial_occupied_fraction: 0.3,
        initial_adsorbate_concentration: Some(0.0044),
        generation_product: Some(0.0),
        ..presets::oxygen_adsorption()
    }
}

/// dθ/dt = −k·θ, concentration held constant
///
/// Analytical solution: θ(t) = θ₀·exp(−k·t)
pub struct ExponentialRelaxation {
    pub rate_constant: f64,
    pub initial_occupancy: f64,
}

impl ExponentialRelaxation {
    pub fn new(rate_constant: f64, initial_occupancy: f64) -> Self {
        Self {
            rate_constant,
            initial_occupancy,
        }
    }

    pub fn exact(&self, t: f64) -> f64 {
        self.initial_occupancy * (-self.rate_constant * t).exp()
    }
}

impl KineticModel for ExponentialRelaxation {
    fn initial_condition(&self) -> SurfaceState {
        SurfaceState::new(self.initial_occupancy, 1.0)
    }

    fn occupancy_rate(&self, state: &SurfaceState) -> f64 {
        -self.rate_constant * state.occupancy()
    }

    fn rate(&self, state: &SurfaceState) -> SurfaceState {
        SurfaceState::new(self.occupancy_rate(state), 0.0)
    }

    fn name(&self) -> &str {
        "ExponentialRelaxation"
    }
}
