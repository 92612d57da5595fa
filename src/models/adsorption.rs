//! Dark adsorption from a continuously fed gas stream
//!
//! Langmuir kinetics with a linear space-charge correction:
//!
//! ```text
//! dθ/dt = k_a·A·(1−θ)·(n_e − θ·N₀/L_D)
//! dA/dt = −N₀·S·dθ/dt + Q·(A₀ − A)/V
//! ```
//!
//! The reactor starts filled with the inlet gas, `A(0) = A₀`.
//!
//! # Example
//!
//! ```rust
//! use photosorb_rs::models::Adsorption;
//! use photosorb_rs::physics::KineticModel;
//! use photosorb_rs::presets;
//!
//! let model = Adsorption::from_parameters(&presets::oxygen_adsorption()).unwrap();
//! let start = model.initial_condition();
//! assert!(model.rate(&start).occupancy() > 0.0);
//! ```

use crate::error::SorptionResult;
use crate::physics::parameters::check_non_negative;
use crate::physics::{FlowReactor, KineticModel, ReactorParameters, SurfaceCharge, SurfaceState};

/// Adsorption rate law with inflow of fresh adsorbate
#[derive(Debug, Clone, PartialEq)]
pub struct Adsorption {
    /// Adsorption rate constant k_a
    adsorption_constant: f64,
    /// Inlet concentration A₀
    inlet_concentration: f64,
    /// Initial occupied fraction θ₀
    initial_occupancy: f64,
    charge: SurfaceCharge,
    reactor: FlowReactor,
}

impl Adsorption {
    pub const NAME: &'static str = "Adsorption";

    /// Build from a parameter record
    ///
    /// Requires `initial_adsorbate_concentration`.
    pub fn from_parameters(parameters: &ReactorParameters) -> SorptionResult<Self> {
        parameters.validate_common()?;
        let inlet_concentration = ReactorParameters::require(
            parameters.initial_adsorbate_concentration,
            Self::NAME,
            "initial_adsorbate_concentration",
        )?;
        check_non_negative("initial_adsorbate_concentration", inlet_concentration)?;

        Ok(Self {
            adsorption_constant: parameters.adsorption_constant,
            inlet_concentration,
            initial_occupancy: parameters.initial_occupied_fraction,
            charge: SurfaceCharge::from_parameters(parameters),
            reactor: FlowReactor::from_parameters(parameters),
        })
    }
}

impl KineticModel for Adsorption {
    fn initial_condition(&self) -> SurfaceState {
        SurfaceState::new(self.initial_occupancy, self.inlet_concentration)
    }

    fn occupancy_rate(&self, state: &SurfaceState) -> f64 {
        let theta = state.occupancy();
        self.adsorption_constant
            * state.concentration()
            * (1.0 - theta)
            * (self.charge.bulk_electron_concentration - self.charge.space_charge(theta))
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
        Some("Langmuir adsorption with linear space-charge screening, fed by the inlet gas")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SorptionError;
    use crate::presets;

    #[test]
    fn test_initial_condition_uses_inlet_concentration() {
        let model = Adsorption::from_parameters(&presets::oxygen_adsorption()).unwrap();
        let start = model.initial_condition();

        assert_eq!(start.concentration(), 0.0044);
        assert_eq!(start.occupancy(), 0.0);
    }

    #[test]
    fn test_missing_inlet_concentration() {
        let mut p = presets::oxygen_adsorption();
        p.initial_adsorbate_concentration = None;

        assert!(matches!(
            Adsorption::from_parameters(&p),
            Err(SorptionError::MissingParameter {
                parameter: "initial_adsorbate_concentration",
                ..
            })
        ));
    }

    #[test]
    fn test_rate_matches_closed_form() {
        let p = presets::oxygen_adsorption();
        let model = Adsorption::from_parameters(&p).unwrap();
        let state = SurfaceState::new(0.1, 0.004);

        let n0 = p.initial_site_concentration;
        let expected_theta = p.adsorption_constant
            * 0.004
            * 0.9
            * (p.bulk_electron_concentration - 0.1 * n0 / p.debye_length);
        let expected_conc = -n0 * p.surface_area * expected_theta
            + p.volume_flow_rate * (0.0044 - 0.004) / p.reactor_volume;

        let rate = model.rate(&state);
        assert!((rate.occupancy() - expected_theta).abs() <= 1e-12 * expected_theta.abs());
        assert!((rate.concentration() - expected_conc).abs() <= 1e-12 * expected_conc.abs());
    }

    #[test]
    fn test_full_coverage_stops_adsorption() {
        let model = Adsorption::from_parameters(&presets::oxygen_adsorption()).unwrap();
        let state = SurfaceState::new(1.0, 0.0044);

        assert_eq!(model.occupancy_rate(&state), 0.0);
    }
}
