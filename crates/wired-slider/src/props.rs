//! Public configuration surface.
//!
//! [`SliderProps`] is the typed view (serde friendly, all fields optional in
//! the serialized form). [`Slider::set_attribute`] is the string view, the
//! way markup hands attributes over.

use serde::{Deserialize, Serialize};
use wired_core::WiredError;

use crate::Slider;
use crate::track::DEFAULT_KNOB_RADIUS;

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderProps {
    pub value: f32,
    pub min: f32,
    pub max: f32,
    #[serde(alias = "knobradius", alias = "knobRadius")]
    pub knob_radius: f32,
    pub disabled: bool,
}

impl Default for SliderProps {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: 0.0,
            max: 100.0,
            knob_radius: DEFAULT_KNOB_RADIUS,
            disabled: false,
        }
    }
}

impl Slider {
    pub fn with_props(props: SliderProps) -> Self {
        let mut s = Slider::new();
        s.apply_props(&props);
        s
    }

    pub fn apply_props(&mut self, props: &SliderProps) {
        self.set_min(props.min);
        self.set_max(props.max);
        self.set_value(props.value);
        self.set_knob_radius(props.knob_radius);
        self.set_disabled(props.disabled);
    }

    pub fn props(&self) -> SliderProps {
        SliderProps {
            value: self.value(),
            min: self.min(),
            max: self.max(),
            knob_radius: self.knob_radius(),
            disabled: self.disabled(),
        }
    }

    /// Sets a property from its attribute form. `None` means the attribute was
    /// removed: numbers go back to their defaults, `disabled` turns off.
    pub fn set_attribute(&mut self, name: &str, raw: Option<&str>) -> Result<(), WiredError> {
        let defaults = SliderProps::default();
        match name {
            "disabled" => {
                self.set_disabled(raw.is_some());
                Ok(())
            }
            "value" => {
                let v = parse_number(name, raw, defaults.value)?;
                self.set_value(v);
                Ok(())
            }
            "min" => {
                let v = parse_number(name, raw, defaults.min)?;
                self.set_min(v);
                Ok(())
            }
            "max" => {
                let v = parse_number(name, raw, defaults.max)?;
                self.set_max(v);
                Ok(())
            }
            "knobradius" => {
                let v = parse_number(name, raw, defaults.knob_radius)?;
                self.set_knob_radius(v);
                Ok(())
            }
            _ => Err(WiredError::UnknownAttribute(name.to_string())),
        }
    }
}

fn parse_number(name: &str, raw: Option<&str>, default: f32) -> Result<f32, WiredError> {
    let Some(raw) = raw else {
        return Ok(default);
    };
    raw.trim()
        .parse::<f32>()
        .map_err(|_| WiredError::InvalidNumber {
            name: name.to_string(),
            value: raw.to_string(),
        })
}
