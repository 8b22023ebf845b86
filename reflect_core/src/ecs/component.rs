// reflect_core/src/ecs/component.rs
use crate::ecs::scene::Scene;
use serde::{Deserialize, Serialize};

/// Identifies one component inside its scene.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ComponentIndex(pub usize);

impl std::ops::Deref for ComponentIndex {
    type Target = usize;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

/// Read-only reference to one component instance.
#[derive(Clone, Copy)]
pub struct ComponentRef<'a> {
    pub scene: &'a dyn Scene,
    pub index: ComponentIndex,
}

impl<'a> ComponentRef<'a> {
    pub fn new(scene: &'a dyn Scene, index: ComponentIndex) -> Self {
        Self { scene, index }
    }
}

/// Mutable reference to one component instance.
pub struct ComponentMut<'a> {
    pub scene: &'a mut dyn Scene,
    pub index: ComponentIndex,
}

impl<'a> ComponentMut<'a> {
    pub fn new(scene: &'a mut dyn Scene, index: ComponentIndex) -> Self {
        Self { scene, index }
    }

    /// Shorter-lived copy of this reference, so it can be handed to
    /// several descriptors in turn.
    pub fn reborrow(&mut self) -> ComponentMut<'_> {
        ComponentMut {
            scene: &mut *self.scene,
            index: self.index,
        }
    }

    pub fn shared(&self) -> ComponentRef<'_> {
        ComponentRef {
            scene: &*self.scene,
            index: self.index,
        }
    }
}

/// Which part of a property a read or write addresses.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug)]
pub enum PropertyIndex {
    /// The field itself.
    Scalar,
    /// Element `n` of an array-typed field.
    Element(usize),
}

impl PropertyIndex {
    /// Converts the `-1 / n` convention used by older tooling.
    pub fn from_sentinel(index: i32) -> Self {
        match index {
            -1 => PropertyIndex::Scalar,
            i if i >= 0 => PropertyIndex::Element(i as usize),
            i => panic!("Invalid property index {i}, expected -1 or a non-negative element."),
        }
    }

    pub fn to_sentinel(self) -> i32 {
        match self {
            PropertyIndex::Scalar => -1,
            PropertyIndex::Element(i) => match i32::try_from(i) {
                Ok(i) => i,
                Err(_) => panic!("Element index {i} does not fit the i32 convention."),
            },
        }
    }
}
