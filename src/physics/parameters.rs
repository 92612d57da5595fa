//! Reactor parameters
//!
//! A flat record of the physical constants describing the surface, the
//! carrier gas flow and the reactor. Fields that only some kinetic variants
//! need are optional; [`ReactorParameters::require`] turns an absent one into
//! a [`SorptionError::MissingParameter`].
//!
//! Units follow the literature experiments: lengths in m, concentrations in
//! mol/m³ (bulk) or mol/m² (sites), flow in m³/s, rate constants in s⁻¹.

use serde::{Deserialize, Serialize};

use crate::error::{SorptionError, SorptionResult};

/// Physical constants of one reactor experiment
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReactorParameters {
    /// Debye length L_D \[m\]
    pub debye_length: f64,

    /// Bulk electron concentration n_e \[mol/m³\]
    pub bulk_electron_concentration: f64,

    /// Adsorption rate constant k_a
    pub adsorption_constant: f64,

    /// Desorption rate constant k_d (desorption variants only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desorption_constant: Option<f64>,

    /// Volumetric flow rate Q \[m³/s\]
    pub volume_flow_rate: f64,

    /// Surface area S \[m²\]
    pub surface_area: f64,

    /// Reactor volume V \[m³\]
    pub reactor_volume: f64,

    /// Initial occupied-site fraction θ₀
    pub initial_occupied_fraction: f64,

    /// Initial site concentration N₀ \[mol/m²\]
    pub initial_site_concentration: f64,

    /// Inlet adsorbate concentration A₀ \[mol/m³\] (adsorption variants only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub initial_adsorbate_concentration: Option<f64>,

    /// Photogeneration term G (photo variants only)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generation_product: Option<f64>,
}

impl ReactorParameters {
    /// Unwrap an optional parameter or report it missing for `variant`
    pub fn require(
        value: Option<f64>,
        variant: &'static str,
        parameter: &'static str,
    ) -> SorptionResult<f64> {
        value.ok_or(SorptionError::MissingParameter { variant, parameter })
    }

    /// Check the parameters every variant shares
    ///
    /// Rate constants may be zero (a frozen system is a valid experiment);
    /// geometric and electronic constants must be strictly positive.
    pub fn validate_common(&self) -> SorptionResult<()> {
        check_positive("debye_length", self.debye_length)?;
        check_positive("bulk_electron_concentration", self.bulk_electron_concentration)?;
        check_non_negative("adsorption_constant", self.adsorption_constant)?;
        check_non_negative("volume_flow_rate", self.volume_flow_rate)?;
        check_positive("surface_area", self.surface_area)?;
        check_positive("reactor_volume", self.reactor_volume)?;
        check_finite("initial_occupied_fraction", self.initial_occupied_fraction)?;
        check_positive("initial_site_concentration", self.initial_site_concentration)?;
        Ok(())
    }
}

pub(crate) fn check_finite(name: &str, value: f64) -> SorptionResult<()> {
    if !value.is_finite() {
        return Err(SorptionError::Configuration(format!(
            "{} must be finite, got {}",
            name, value
        )));
    }
    Ok(())
}

pub(crate) fn check_positive(name: &str, value: f64) -> SorptionResult<()> {
    check_finite(name, value)?;
    if value <= 0.0 {
        return Err(SorptionError::Configuration(format!(
            "{} must be positive, got {}",
            name, value
        )));
    }
    Ok(())
}

pub(crate) fn check_non_negative(name: &str, value: f64) -> SorptionResult<()> {
    check_finite(name, value)?;
    if value < 0.0 {
        return Err(SorptionError::Configuration(format!(
            "{} must not be negative, got {}",
            name, value
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parameters() -> ReactorParameters {
        ReactorParameters {
            debye_length: 20e-9,
            bulk_electron_concentration: 1e18 * 1e6 / 6.02e23,
            adsorption_constant: 1.0,
            desorption_constant: None,
            volume_flow_rate: 10e-6 / 60.0,
            surface_area: 300.0,
            reactor_volume: 32e-6,
            initial_occupied_fraction: 0.0,
            initial_site_concentration: 1e18 / 6.02e23,
            initial_adsorbate_concentration: Some(0.0044),
            generation_product: None,
        }
    }

    #[test]
    fn test_valid_common_parameters() {
        assert!(parameters().validate_common().is_ok());
    }

    #[test]
    fn test_zero_debye_length_rejected() {
        let mut p = parameters();
        p.debye_length = 0.0;

        let err = p.validate_common().unwrap_err();
        assert!(err.to_string().contains("debye_length must be positive"));
    }

    #[test]
    fn test_nan_rejected() {
        let mut p = parameters();
        p.reactor_volume = f64::NAN;

        assert!(matches!(
            p.validate_common(),
            Err(SorptionError::Configuration(_))
        ));
    }

    #[test]
    fn test_require_missing() {
        let err = ReactorParameters::require(None, "Photo-Desorption", "generation_product")
            .unwrap_err();

        assert!(matches!(
            err,
            SorptionError::MissingParameter { parameter: "generation_product", .. }
        ));
    }

    #[test]
    fn test_deserialize_without_optional_fields() {
        let json = r#"{
            "debye_length": 2e-8,
            "bulk_electron_concentration": 1.66,
            "adsorption_constant": 1.0,
            "volume_flow_rate": 1.6e-7,
            "surface_area": 300.0,
            "reactor_volume": 3.2e-5,
            "initial_occupied_fraction": 0.8,
            "initial_site_concentration": 1.66e-6
        }"#;

        let p: ReactorParameters = serde_json::from_str(json).unwrap();
        assert_eq!(p.desorption_constant, None);
        assert_eq!(p.generation_product, None);
        assert_eq!(p.initial_occupied_fraction, 0.8);
    }
}
