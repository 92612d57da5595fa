//! Thermal desorption into a flushing carrier gas
//!
//! The reactor is swept by adsorbate-free gas, so desorbed molecules are
//! carried away and re-adsorption competes only with what is still in the
//! gas phase:
//!
//! ```text
//! dθ/dt = k_a·A·(1−θ)·(n_e − θ·N₀/L_D) − k_d·θ·(n_e + θ·N₀/L_D)
//! dA/dt = −N₀·S·dθ/dt − Q·A/V
//! ```
//!
//! The gas phase starts empty, `A(0) = 0`.

use crate::error::SorptionResult;
use crate::physics::parameters::check_non_negative;
use crate::physics::{FlowReactor, KineticModel, ReactorParameters, SurfaceCharge, SurfaceState};

/// Desorption rate law without inflow
#[derive(Debug, Clone, PartialEq)]
pub struct Desorption {
    adsorption_constant: f64,
    /// Desorption rate constant k_d
    desorption_constant: f64,
    initial_occupancy: f64,
    charge: SurfaceCharge,
    reactor: FlowReactor,
}

impl Desorption {
    pub const NAME: &'static str = "Desorption";

    /// Build from a parameter record
    ///
    /// Requires `desorption_constant`.
    pub fn from_parameters(parameters: &ReactorParameters) -> SorptionResult<Self> {
        parameters.validate_common()?;
        let desorption_constant = ReactorParameters::require(
            parameters.desorption_constant,
            Self::NAME,
            "desorption_constant",
        )?;
        check_non_negative("desorption_constant", desorption_constant)?;

        Ok(Self {
            adsorption_constant: parameters.adsorption_constant,
            desorption_constant,
            initial_occupancy: parameters.initial_occupied_fraction,
            charge: SurfaceCharge::from_parameters(parameters),
            reactor: FlowReactor::from_parameters(parameters),
        })
    }
}

impl KineticModel for Desorption {
    fn initial_condition(&self) -> SurfaceState {
        SurfaceState::new(self.initial_occupancy, 0.0)
    }

    fn occupancy_rate(&self, state: &SurfaceState) -> f64 {
        let theta = state.occupancy();
        let n_e = self.charge.bulk_electron_concentration;
        let space_charge = self.charge.space_charge(theta);

        let adsorption =
            self.adsorption_constant * state.concentration() * (1.0 - theta) * (n_e - space_charge);
        let desorption = self.desorption_constant * theta * (n_e + space_charge);

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
        Some("Thermal desorption against re-adsorption, flushed by adsorbate-free gas")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presets;

    #[test]
    fn test_initial_gas_phase_is_empty() {
        let model = Desorption::from_parameters(&presets::thermal_desorption()).unwrap();
        let start = model.initial_condition();

        assert_eq!(start.concentration(), 0.0);
        assert_eq!(start.occupancy(), 0.8);
    }

    #[test]
    fn test_requires_desorption_constant() {
        let mut p = presets::thermal_desorption();
        p.desorption_constant = None;

        assert!(Desorption::from_parameters(&p).is_err());
    }

    #[test]
    fn test_covered_surface_releases_adsorbate() {
        let model = Desorption::from_parameters(&presets::thermal_desorption()).unwrap();
        let rate = model.rate(&model.initial_condition());

        assert!(rate.occupancy() < 0.0);
        assert!(rate.concentration() > 0.0);
    }

    #[test]
    fn test_released_sites_feed_gas_phase_exactly() {
        let p = presets::thermal_desorption();
        let model = Desorption::from_parameters(&p).unwrap();
        let rate = model.rate(&model.initial_condition());

        // With A = 0 the flush term vanishes
        let expected = -p.initial_site_concentration * p.surface_area * rate.occupancy();
        assert!((rate.concentration() - expected).abs() <= 1e-12 * expected.abs());
    }
}
