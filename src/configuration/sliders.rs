//! Slider models
//!
//! Each slider has a fixed range and resolution; a value set on it snaps to
//! the nearest step and clamps to the range, the way a toolkit scale widget
//! does. The ranges here are the ones the beam's controls expose.

use crate::configuration::config::{SliderValuesConfig, VariantConfig};
use crate::configuration::error::ConfigError;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SliderSpec {
    pub name: &'static str,  // key in scenario files
    pub label: &'static str, // shown next to the control
    pub min: f64,
    pub max: f64,
    pub step: f64,
    pub default: f64,
}

pub const ANODE_CHARGE: SliderSpec = SliderSpec {
    name: "anode_charge",
    label: "Anode charge",
    min: 0.0,
    max: 50_000.0,
    step: 1_000.0,
    default: 20_000.0,
};

pub const DEFLECTOR_CHARGE_CLASSIC: SliderSpec = SliderSpec {
    name: "deflector_charge",
    label: "Deflector charge",
    min: -1_000.0,
    max: 1_000.0,
    step: 20.0,
    default: -400.0,
};

pub const DEFLECTOR_CHARGE_ENHANCED: SliderSpec = SliderSpec {
    step: 50.0,
    ..DEFLECTOR_CHARGE_CLASSIC
};

pub const BEAM_DENSITY: SliderSpec = SliderSpec {
    name: "beam_density",
    label: "Beam density",
    min: 1.0,
    max: 10.0,
    step: 1.0,
    default: 5.0,
};

pub const FLOW_RATE: SliderSpec = SliderSpec {
    name: "flow_rate",
    label: "Electron flow rate",
    min: 0.0,
    max: 20.0,
    step: 1.0,
    default: 5.0,
};

pub const ANODE_SIZE: SliderSpec = SliderSpec {
    name: "anode_size",
    label: "Anode size",
    min: 10.0,
    max: 150.0,
    step: 5.0,
    default: 80.0,
};

impl SliderSpec {
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.step > 0.0) {
            return Err(ConfigError::InvalidSlider {
                name: self.name,
                reason: "step must be positive",
            });
        }
        if !(self.min < self.max) {
            return Err(ConfigError::InvalidSlider {
                name: self.name,
                reason: "empty range",
            });
        }
        if self.max_magnitude() == 0.0 {
            return Err(ConfigError::InvalidSlider {
                name: self.name,
                reason: "zero magnitude",
            });
        }
        if !self.in_range(self.default) {
            return Err(ConfigError::InvalidSlider {
                name: self.name,
                reason: "default outside range",
            });
        }
        Ok(())
    }

    pub fn in_range(&self, v: f64) -> bool {
        (self.min..=self.max).contains(&v)
    }

    /// Nearest step from `min`, clamped to the range
    pub fn snap(&self, v: f64) -> f64 {
        let steps = ((v - self.min) / self.step).round();
        (self.min + steps * self.step).clamp(self.min, self.max)
    }

    /// Largest absolute value the slider can reach
    pub fn max_magnitude(&self) -> f64 {
        self.min.abs().max(self.max.abs())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slider {
    spec: SliderSpec,
    value: f64,
}

impl Slider {
    /// A slider at its default position
    pub fn new(spec: SliderSpec) -> Self {
        Self {
            value: spec.snap(spec.default),
            spec,
        }
    }

    /// A slider at `value`, which must lie in the range
    pub fn with_value(spec: SliderSpec, value: Option<f64>) -> Result<Self, ConfigError> {
        spec.validate()?;
        let mut slider = Self::new(spec);
        if let Some(v) = value {
            if !spec.in_range(v) {
                return Err(ConfigError::SliderOutOfRange {
                    name: spec.name,
                    value: v,
                    min: spec.min,
                    max: spec.max,
                });
            }
            slider.set(v);
        }
        Ok(slider)
    }

    pub fn spec(&self) -> &SliderSpec {
        &self.spec
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Move the slider; returns whether its value changed
    pub fn set(&mut self, v: f64) -> bool {
        let snapped = self.spec.snap(v);
        let changed = snapped != self.value;
        self.value = snapped;
        changed
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SliderId {
    AnodeCharge,
    DeflectorCharge,
    /// Beam density (classic) or flow rate (enhanced)
    Spawn,
    AnodeSize,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Sliders {
    pub anode_charge: Slider,
    pub deflector_charge: Slider,
    pub spawn: Slider,
    pub anode_size: Option<Slider>, // enhanced only
}

impl Sliders {
    /// The variant's sliders, positioned from `values` or their defaults.
    /// A value for a slider the variant does not have is an error
    pub fn for_variant(variant: VariantConfig, values: &SliderValuesConfig) -> Result<Self, ConfigError> {
        let foreign = match variant {
            VariantConfig::Classic => [(FLOW_RATE.name, values.flow_rate), (ANODE_SIZE.name, values.anode_size)]
                .into_iter()
                .find(|(_, v)| v.is_some()),
            VariantConfig::Enhanced => [(BEAM_DENSITY.name, values.beam_density)]
                .into_iter()
                .find(|(_, v)| v.is_some()),
        };
        if let Some((name, _)) = foreign {
            return Err(ConfigError::InvalidSlider {
                name,
                reason: "not available in this variant",
            });
        }

        let anode_charge = Slider::with_value(ANODE_CHARGE, values.anode_charge)?;

        let sliders = match variant {
            VariantConfig::Classic => Self {
                anode_charge,
                deflector_charge: Slider::with_value(DEFLECTOR_CHARGE_CLASSIC, values.deflector_charge)?,
                spawn: Slider::with_value(BEAM_DENSITY, values.beam_density)?,
                anode_size: None,
            },
            VariantConfig::Enhanced => Self {
                anode_charge,
                deflector_charge: Slider::with_value(DEFLECTOR_CHARGE_ENHANCED, values.deflector_charge)?,
                spawn: Slider::with_value(FLOW_RATE, values.flow_rate)?,
                anode_size: Some(Slider::with_value(ANODE_SIZE, values.anode_size)?),
            },
        };
        Ok(sliders)
    }

    /// Sliders present for this variant, in display order
    pub fn ids(&self) -> Vec<SliderId> {
        let mut ids = vec![SliderId::AnodeCharge, SliderId::DeflectorCharge, SliderId::Spawn];
        if self.anode_size.is_some() {
            ids.push(SliderId::AnodeSize);
        }
        ids
    }

    pub fn get(&self, id: SliderId) -> Option<&Slider> {
        match id {
            SliderId::AnodeCharge => Some(&self.anode_charge),
            SliderId::DeflectorCharge => Some(&self.deflector_charge),
            SliderId::Spawn => Some(&self.spawn),
            SliderId::AnodeSize => self.anode_size.as_ref(),
        }
    }

    pub fn get_mut(&mut self, id: SliderId) -> Option<&mut Slider> {
        match id {
            SliderId::AnodeCharge => Some(&mut self.anode_charge),
            SliderId::DeflectorCharge => Some(&mut self.deflector_charge),
            SliderId::Spawn => Some(&mut self.spawn),
            SliderId::AnodeSize => self.anode_size.as_mut(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snaps_to_resolution() {
        let mut s = Slider::new(ANODE_CHARGE);
        assert_eq!(s.value(), 20_000.0);
        assert!(s.set(21_400.0));
        assert_eq!(s.value(), 21_000.0);
        assert!(!s.set(20_900.0));
        s.set(99_999.0);
        assert_eq!(s.value(), 50_000.0);
    }

    #[test]
    fn deflector_steps_differ_by_variant() {
        let mut classic = Slider::new(DEFLECTOR_CHARGE_CLASSIC);
        let mut enhanced = Slider::new(DEFLECTOR_CHARGE_ENHANCED);
        classic.set(-335.0);
        enhanced.set(-335.0);
        assert_eq!(classic.value(), -340.0);
        assert_eq!(enhanced.value(), -350.0);
    }

    #[test]
    fn builtin_specs_are_valid() {
        for spec in [
            ANODE_CHARGE,
            DEFLECTOR_CHARGE_CLASSIC,
            DEFLECTOR_CHARGE_ENHANCED,
            BEAM_DENSITY,
            FLOW_RATE,
            ANODE_SIZE,
        ] {
            spec.validate().unwrap();
        }
    }

    #[test]
    fn zero_magnitude_rejected() {
        let spec = SliderSpec {
            min: 0.0,
            max: 0.0,
            ..ANODE_CHARGE
        };
        assert!(spec.validate().is_err());
    }

    #[test]
    fn initial_value_out_of_range() {
        let err = Slider::with_value(FLOW_RATE, Some(25.0)).unwrap_err();
        assert!(matches!(err, ConfigError::SliderOutOfRange { name: "flow_rate", .. }));
    }

    #[test]
    fn foreign_slider_values_are_rejected() {
        let classic = SliderValuesConfig {
            anode_size: Some(60.0),
            ..Default::default()
        };
        let err = Sliders::for_variant(VariantConfig::Classic, &classic).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSlider { name: "anode_size", .. }), "{}", err);

        let enhanced = SliderValuesConfig {
            beam_density: Some(3.0),
            ..Default::default()
        };
        let err = Sliders::for_variant(VariantConfig::Enhanced, &enhanced).unwrap_err();
        assert!(matches!(err, ConfigError::InvalidSlider { name: "beam_density", .. }), "{}", err);

        let shared = SliderValuesConfig {
            anode_charge: Some(10_000.0),
            ..Default::default()
        };
        assert!(Sliders::for_variant(VariantConfig::Classic, &shared).is_ok());
        assert!(Sliders::for_variant(VariantConfig::Enhanced, &shared).is_ok());
    }
}
