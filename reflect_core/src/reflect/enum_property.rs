// reflect_core/src/reflect/enum_property.rs
use crate::ecs::scene::Scene;
use crate::reflect::accessor::EnumLabels;
use crate::reflect::value::ValueProperty;

/// Integer on the wire, a labelled dropdown in the editor.
pub struct EnumProperty {
    pub(crate) value: ValueProperty<i32>,
    labels: Box<dyn EnumLabels>,
}

impl EnumProperty {
    pub fn new(value: ValueProperty<i32>, labels: impl EnumLabels + 'static) -> Self {
        Self {
            value,
            labels: Box::new(labels),
        }
    }

    pub fn value(&self) -> &ValueProperty<i32> {
        &self.value
    }

    /// Number of variants the scene offers.
    pub fn enum_count(&self, scene: &dyn Scene) -> usize {
        self.labels.count(scene)
    }

    pub fn enum_label<'a>(&self, scene: &'a dyn Scene, index: usize) -> &'a str {
        self.labels.label(scene, index)
    }

    /// Every label in variant order.
    pub fn enum_labels<'a>(&self, scene: &'a dyn Scene) -> Vec<&'a str> {
        (0..self.enum_count(scene))
            .map(|i| self.enum_label(scene, i))
            .collect()
    }
}
