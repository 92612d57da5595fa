//! Literature experiments
//!
//! Parameter sets for the three reference runs: dark O₂ adsorption at
//! 100 ppm, thermal desorption of a 80 % covered surface and
//! photo-desorption of a lightly doped sample. All use a 32 mL reactor
//! flushed at 10 mL/min and a 300 m² sample, with Δt = 1e-4 s.

use crate::models::KineticVariant;
use crate::physics::ReactorParameters;

/// Avogadro's number as used in the reference experiments \[1/mol\]
pub const AVOGADRO_NUMBER: f64 = 6.02e23;

/// Time step of the reference runs \[s\]
pub const REFERENCE_TIME_STEP: f64 = 1e-4;

const FLOW_RATE: f64 = 10e-6 / 60.0; // m³/s
const REACTOR_VOLUME: f64 = 32e-6; // m³
const SURFACE_AREA: f64 = 300.0; // m²

/// O₂ adsorption from a 100 ppm stream
pub fn oxygen_adsorption() -> ReactorParameters {
    ReactorParameters {
        debye_length: 20e-9,
        bulk_electron_concentration: 1e18 * 1e6 / AVOGADRO_NUMBER,
        adsorption_constant: 1.0,
        desorption_constant: None,
        volume_flow_rate: FLOW_RATE,
        surface_area: SURFACE_AREA,
        reactor_volume: REACTOR_VOLUME,
        initial_occupied_fraction: 0.0,
        initial_site_concentration: 1e18 / AVOGADRO_NUMBER,
        initial_adsorbate_concentration: Some(0.0044),
        generation_product: None,
    }
}

/// Thermal desorption from an 80 % covered surface
pub fn thermal_desorption() -> ReactorParameters {
    ReactorParameters {
        debye_length: 20e-9,
        bulk_electron_concentration: 1e18 * 1e6 / AVOGADRO_NUMBER,
        adsorption_constant: 1.0,
        desorption_constant: Some(0.01),
        volume_flow_rate: FLOW_RATE,
        surface_area: SURFACE_AREA,
        reactor_volume: REACTOR_VOLUME,
        initial_occupied_fraction: 0.8,
        initial_site_concentration: 1e18 / AVOGADRO_NUMBER,
        initial_adsorbate_concentration: None,
        generation_product: None,
    }
}

/// Photo-desorption under illumination, low doping and long Debye length
pub fn photo_desorption() -> ReactorParameters {
    ReactorParameters {
        debye_length: 2e-6,
        bulk_electron_concentration: 1e13 * 1e6 / AVOGADRO_NUMBER,
        adsorption_constant: 1e6,
        desorption_constant: Some(1e6),
        volume_flow_rate: FLOW_RATE,
        surface_area: SURFACE_AREA,
        reactor_volume: REACTOR_VOLUME,
        initial_occupied_fraction: 0.8,
        initial_site_concentration: 7e10 / AVOGADRO_NUMBER,
        initial_adsorbate_concentration: None,
        generation_product: Some(1e11 * 1e6 / AVOGADRO_NUMBER),
    }
}

/// Preset selectable from the command line
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Preset {
    OxygenAdsorption,
    ThermalDesorption,
    PhotoDesorption,
}

impl Preset {
    pub fn variant(&self) -> KineticVariant {
        match self {
            Preset::OxygenAdsorption => KineticVariant::Adsorption,
            Preset::ThermalDesorption => KineticVariant::Desorption,
            Preset::PhotoDesorption => KineticVariant::PhotoDesorption,
        }
    }

    pub fn parameters(&self) -> ReactorParameters {
        match self {
            Preset::OxygenAdsorption => oxygen_adsorption(),
            Preset::ThermalDesorption => thermal_desorption(),
            Preset::PhotoDesorption => photo_desorption(),
        }
    }
}
