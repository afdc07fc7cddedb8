//! Configuration types for loading beam scenarios from YAML.
//!
//! A scenario consists of:
//!
//! - [`VariantConfig`]      – classic or enhanced behaviour
//! - [`SliderValuesConfig`] – initial slider positions
//! - [`BodiesConfig`]       – initial positions of cathode, anode and deflector
//! - [`ParametersConfig`]   – electron mass, softening, frame pacing
//! - [`ScenarioConfig`]     – top-level wrapper used to load a scenario from YAML
//!
//! Every section except `variant` is optional.
//!
//! # YAML format
//!
//! ```yaml
//! variant: enhanced         # or "classic"
//!
//! sliders:
//!   anode_charge: 20000
//!   deflector_charge: -400
//!   flow_rate: 5            # enhanced only; classic uses beam_density
//!   anode_size: 80          # enhanced only
//!
//! bodies:
//!   cathode: [600.0, 100.0]
//!   anode: [600.0, 700.0]
//!   deflector: [500.0, 300.0]
//!
//! parameters:
//!   electron_mass: 1.0
//!   eps2: 0.0               # softening, 0 = bare inverse-square law
//!   frame_pause_ms: 10
//! ```

use std::fs;
use std::path::Path;

use serde::Deserialize;

use crate::configuration::error::ConfigError;

/// Which flavour of the simulator to run
#[derive(Deserialize, Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VariantConfig {
    #[serde(rename = "classic")] // fixed anode, deflector follows the pointer, frame-count spawning
    Classic,
    #[serde(rename = "enhanced")] // everything draggable, flow-rate spawning, anode size slider
    #[default]
    Enhanced,
}

/// Initial slider positions; absent values take the slider default
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SliderValuesConfig {
    pub anode_charge: Option<f64>,
    pub deflector_charge: Option<f64>,
    pub beam_density: Option<f64>, // classic
    pub flow_rate: Option<f64>,    // enhanced
    pub anode_size: Option<f64>,   // enhanced
}

/// Initial body positions in canvas pixels
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct BodiesConfig {
    pub cathode: [f64; 2],
    pub anode: [f64; 2],
    pub deflector: [f64; 2],
}

impl Default for BodiesConfig {
    fn default() -> Self {
        Self {
            cathode: [600.0, 100.0],
            anode: [600.0, 700.0],
            deflector: [500.0, 300.0],
        }
    }
}

#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default)]
pub struct ParametersConfig {
    pub electron_mass: f64, // mass of one electron
    pub eps2: f64,          // softening added to squared distances
    pub frame_pause_ms: u64, // sleep between frames
}

impl Default for ParametersConfig {
    fn default() -> Self {
        Self {
            electron_mass: 1.0,
            eps2: 0.0,
            frame_pause_ms: 10,
        }
    }
}

/// Top-level scenario configuration loaded from YAML.
#[derive(Deserialize, Debug, Clone, Default, PartialEq)]
pub struct ScenarioConfig {
    pub variant: VariantConfig,
    #[serde(default)]
    pub sliders: SliderValuesConfig,
    #[serde(default)]
    pub bodies: BodiesConfig,
    #[serde(default)]
    pub parameters: ParametersConfig,
}

impl ScenarioConfig {
    /// Default scenario for a variant
    pub fn for_variant(variant: VariantConfig) -> Self {
        Self {
            variant,
            ..Default::default()
        }
    }

    pub fn from_yaml_str(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml_str(&text)
    }
}
