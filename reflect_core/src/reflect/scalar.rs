// reflect_core/src/reflect/scalar.rs
use crate::reflect::value::ValueProperty;
use serde::{Deserialize, Serialize};

/// Integer field, optionally limited for editor widgets.
pub struct IntProperty {
    pub(crate) value: ValueProperty<i32>,
    limits: Option<(i32, i32)>,
}

impl IntProperty {
    pub fn new(value: ValueProperty<i32>) -> Self {
        Self { value, limits: None }
    }

    pub fn value(&self) -> &ValueProperty<i32> {
        &self.value
    }

    /// Inclusive `(min, max)` shown by the editor. Never enforced on read.
    pub fn limits(&self) -> Option<(i32, i32)> {
        self.limits
    }

    pub(crate) fn set_limits(&mut self, min: i32, max: i32) {
        assert!(min <= max, "Int limits are inverted: {min} > {max}.");
        self.limits = Some((min, max));
    }
}

/// Slider range of a decimal field.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct DecimalRange {
    pub min: f32,
    pub max: f32,
    pub step: f32,
}

impl DecimalRange {
    pub fn new(min: f32, max: f32, step: f32) -> Self {
        Self { min, max, step }
    }
}

impl Default for DecimalRange {
    fn default() -> Self {
        Self {
            min: f32::MIN,
            max: f32::MAX,
            step: 0.1,
        }
    }
}

/// Float field with a presentation range.
pub struct DecimalProperty {
    pub(crate) value: ValueProperty<f32>,
    range: DecimalRange,
}

impl DecimalProperty {
    pub fn new(value: ValueProperty<f32>, range: DecimalRange) -> Self {
        Self { value, range }
    }

    pub fn value(&self) -> &ValueProperty<f32> {
        &self.value
    }

    pub fn range(&self) -> DecimalRange {
        self.range
    }
}
