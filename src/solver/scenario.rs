//! Simulation scenario definition
//!
//! A scenario combines a kinetic model with the source of the
//! concentration channel.
use crate::physics::KineticModel;

/// Where the concentration channel comes from
#[derive(Clone, Debug, Default, PartialEq)]
pub enum ConcentrationSource {
    /// Integrated together with the occupancy
    #[default]
    Simulated,

    /// Injected from preprocessed measurements, one value per grid point
    ///
    /// Only the occupancy is integrated; the rate law is evaluated against
    /// these values.
    Measured(Vec<f64>),
}

/// Simulation scenario
///
/// Defines a specific case to simulate:
/// - Kinetic model (equations)
/// - Concentration source (forward model or measured data)
///
/// # Design
///
/// The same scenario can be solved with different configurations.
/// This is the "WHAT to solve" (not "HOW to solve").
///
/// # Examples
///
/// ```rust
/// use photosorb_rs::models::{KineticVariant, ReactorModel};
/// use photosorb_rs::solver::Scenario;
/// use photosorb_rs::presets;
///
/// let model = ReactorModel::build(KineticVariant::Desorption, &presets::thermal_desorption()).unwrap();
/// let scenario = Scenario::new(model);
/// assert!(!scenario.is_data_driven());
/// ```
#[derive(Clone, Debug)]
pub struct Scenario<M> {
    /// Kinetic model (equations)
    pub model: M,

    /// Concentration channel
    pub concentration: ConcentrationSource,
}

impl<M: KineticModel> Scenario<M> {
    /// Scenario integrating both channels
    pub fn new(model: M) -> Self {
        Self {
            model,
            concentration: ConcentrationSource::Simulated,
        }
    }

    /// Scenario driven by a measured concentration sequence
    pub fn with_measured_concentration(model: M, concentration: Vec<f64>) -> Self {
        Self {
            model,
            concentration: ConcentrationSource::Measured(concentration),
        }
    }

    /// Get model name
    pub fn get_model_name(&self) -> &str {
        self.model.name()
    }

    /// True when the concentration channel is injected
    pub fn is_data_driven(&self) -> bool {
        matches!(self.concentration, ConcentrationSource::Measured(_))
    }
}

// ================================================================================================
// Tests
// ================================================================================================
