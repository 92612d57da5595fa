//! Terms shared by the four rate laws
//!
//! Every variant balances the same two ingredients:
//!
//! ```text
//! dA/dt = −N₀·S·dθ/dt ± Q·(driving term)/V
//! ```
//!
//! and builds its rate law from the space-charge term θ·N₀/L_D or the
//! Boltzmann factor exp(−N₀·θ/(L_D·n_e)) describing band bending.
//!
//! No guard is applied against a vanishing L_D·n_e product: such inputs
//! are rejected at configuration time, and anything that slips past
//! surfaces as a non-finite sample.

use crate::physics::ReactorParameters;

/// Surface electronics: sites and screening
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SurfaceCharge {
    /// Debye length L_D
    pub debye_length: f64,
    /// Bulk electron concentration n_e
    pub bulk_electron_concentration: f64,
    /// Initial site concentration N₀
    pub site_concentration: f64,
}

impl SurfaceCharge {
    pub fn from_parameters(parameters: &ReactorParameters) -> Self {
        Self {
            debye_length: parameters.debye_length,
            bulk_electron_concentration: parameters.bulk_electron_concentration,
            site_concentration: parameters.initial_site_concentration,
        }
    }

    /// Space-charge density θ·N₀/L_D
    #[inline]
    pub fn space_charge(&self, occupancy: f64) -> f64 {
        occupancy * self.site_concentration / self.debye_length
    }

    /// Boltzmann factor exp(−N₀·θ/(L_D·n_e))
    #[inline]
    pub fn boltzmann_factor(&self, occupancy: f64) -> f64 {
        (-self.site_concentration * occupancy
            / (self.debye_length * self.bulk_electron_concentration))
            .exp()
    }
}

/// Flushed reactor: flow, volume and the sample's surface
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlowReactor {
    /// Volumetric flow rate Q
    pub volume_flow_rate: f64,
    /// Reactor volume V
    pub reactor_volume: f64,
    /// Surface area S
    pub surface_area: f64,
}

impl FlowReactor {
    pub fn from_parameters(parameters: &ReactorParameters) -> Self {
        Self {
            volume_flow_rate: parameters.volume_flow_rate,
            reactor_volume: parameters.reactor_volume,
            surface_area: parameters.surface_area,
        }
    }

    /// dA/dt = −N₀·S·dθ/dt + Q·drive/V
    ///
    /// `drive` is (A₀ − A) when fresh adsorbate flows in, −A when the
    /// carrier gas only flushes the reactor.
    #[inline]
    pub fn mass_balance(&self, site_concentration: f64, occupancy_rate: f64, drive: f64) -> f64 {
        -site_concentration * self.surface_area * occupancy_rate
            + self.volume_flow_rate * drive / self.reactor_volume
    }
}
