//! Experiment configuration
//!
//! An experiment is described by a single JSON document:
//!
//! ```json
//! {
//!   "variant": "desorption",
//!   "parameters": {
//!     "debye_length": 2e-8,
//!     "bulk_electron_concentration": 1.661e0,
//!     "adsorption_constant": 0.0,
//!     "desorption_constant": 0.01,
//!     "volume_flow_rate": 1.6667e-7,
//!     "surface_area": 300.0,
//!     "reactor_volume": 3.2e-5,
//!     "initial_occupied_fraction": 0.8,
//!     "initial_site_concentration": 1.661e-6
//!   },
//!   "solver": { "time_step": 1e-4, "duration": 100.0 },
//!   "output": { "path": "desorption.csv", "stride": 1000 },
//!   "measured": {
//!     "path": "trace.csv",
//!     "scale": 1.2e-9, "offset": 3.0e-11,
//!     "start_time": 120.0, "window_duration": 100.0
//!   }
//! }
//! ```
//!
//! `output` and `measured` are optional.

use std::fs;
use std::path::{Path, PathBuf};

use log::info;
use serde::{Deserialize, Serialize};

use crate::error::{SorptionError, SorptionResult};
use crate::models::{KineticVariant, ReactorModel};
use crate::output::CsvConfig;
use crate::physics::ReactorParameters;
use crate::preprocess::{self, PreprocessConfig};
use crate::presets::{Preset, REFERENCE_TIME_STEP};
use crate::solver::{Scenario, SolverConfiguration};

/// Default concentration factor for the exported file (mol/m³ → µmol/m³)
pub const DEFAULT_CONCENTRATION_SCALE: f64 = 1e6;

fn default_output_path() -> PathBuf {
    PathBuf::from("results.csv")
}

fn default_stride() -> usize {
    1
}

fn default_concentration_scale() -> f64 {
    DEFAULT_CONCENTRATION_SCALE
}

/// Where and how the result file is written
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_output_path")]
    pub path: PathBuf,

    /// Keep every `stride`-th sample
    #[serde(default = "default_stride")]
    pub stride: usize,

    #[serde(default = "default_concentration_scale")]
    pub concentration_scale: f64,

    /// Prefix the rows with a `#` comment header
    #[serde(default)]
    pub include_metadata: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            path: default_output_path(),
            stride: default_stride(),
            concentration_scale: DEFAULT_CONCENTRATION_SCALE,
            include_metadata: false,
        }
    }
}

impl OutputConfig {
    /// Exporter settings matching this section
    pub fn csv_config(&self) -> CsvConfig {
        CsvConfig {
            include_metadata: self.include_metadata,
            ..CsvConfig::default()
                .stride(self.stride)
                .concentration_scale(self.concentration_scale)
        }
    }
}

/// Measured concentration trace driving the run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MeasuredConfig {
    pub path: PathBuf,

    #[serde(flatten)]
    pub preprocess: PreprocessConfig,
}

/// Complete description of one run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExperimentConfig {
    pub variant: KineticVariant,
    pub parameters: ReactorParameters,
    pub solver: SolverConfiguration,

    #[serde(default)]
    pub output: OutputConfig,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub measured: Option<MeasuredConfig>,
}

impl ExperimentConfig {
    /// Load a configuration from a JSON file
    ///
    /// The file is parsed only; call [`validate`](Self::validate) before running.
    pub fn from_file<P: AsRef<Path>>(path: P) -> SorptionResult<Self> {
        let path = path.as_ref();
        let text = fs::read_to_string(path)?;
        let config: Self = serde_json::from_str(&text)?;

        info!("Loaded {} experiment from {}", config.variant, path.display());
        Ok(config)
    }

    /// Write the configuration as pretty-printed JSON
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> SorptionResult<()> {
        let text = serde_json::to_string_pretty(self)?;
        fs::write(path, text)?;
        Ok(())
    }

    /// Reference experiment at Δt = 1e-4 s
    pub fn from_preset(preset: Preset, duration: f64) -> Self {
        Self {
            variant: preset.variant(),
            parameters: preset.parameters(),
            solver: SolverConfiguration::new(REFERENCE_TIME_STEP, duration),
            output: OutputConfig::default(),
            measured: None,
        }
    }

    /// Check every setting before any stepping happens
    pub fn validate(&self) -> SorptionResult<()> {
        self.solver.validate()?;
        ReactorModel::build(self.variant, &self.parameters)?;

        if self.output.stride == 0 {
            return Err(SorptionError::Configuration(
                "Output stride must be at least 1".to_string(),
            ));
        }
        if !self.output.concentration_scale.is_finite() {
            return Err(SorptionError::Configuration(format!(
                "Concentration scale must be finite, got {}",
                self.output.concentration_scale
            )));
        }
        if let Some(measured) = &self.measured {
            measured.preprocess.validate()?;
        }
        Ok(())
    }

    /// Resolve the rate law for the configured variant
    pub fn build_model(&self) -> SorptionResult<ReactorModel> {
        ReactorModel::build(self.variant, &self.parameters)
    }

    /// Model plus concentration source, preprocessing the measured trace if any
    pub fn scenario(&self) -> SorptionResult<Scenario<ReactorModel>> {
        let model = self.build_model()?;

        match &self.measured {
            None => Ok(Scenario::new(model)),
            Some(measured) => {
                let concentration =
                    preprocess::prepare(&measured.path, &measured.preprocess, self.solver.time_step)?;
                Ok(Scenario::with_measured_concentration(model, concentration))
            }
        }
    }
}
