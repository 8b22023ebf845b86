// reflect_core/src/ecs/component_registry.rs
use crate::reflect::descriptor::{PropertyBody, PropertyDescriptor};
use crate::reflect::record::schema_fingerprint;
use once_cell::sync::Lazy;
use std::collections::HashSet;

/// Every component type that has been registered with `register_component_type!`.
pub static COMPONENT_TYPES: Lazy<Vec<ComponentType>> = Lazy::new(|| {
    let mut types: Vec<ComponentType> = inventory::iter::<ComponentTypeEntry>
        .into_iter()
        .map(|entry| ComponentType::new(entry.type_name, (entry.properties)()))
        .collect();
    types.sort_by_key(|t| t.type_name);
    log::info!("Registered {} component types.", types.len());
    types
});

/// One registration for a concrete component type.
pub struct ComponentTypeEntry {
    /// Human‑readable identifier that will appear in save files.
    pub type_name: &'static str,
    /// Builds the ordered descriptor list of the type.
    pub properties: fn() -> Vec<PropertyDescriptor>,
}

inventory::collect!(ComponentTypeEntry);

/// A component type together with its built descriptors.
#[derive(Debug)]
pub struct ComponentType {
    type_name: &'static str,
    properties: Vec<PropertyDescriptor>,
    fingerprint: u64,
}

impl ComponentType {
    /// Panics when two descriptors of the same list share a name.
    pub fn new(type_name: &'static str, properties: Vec<PropertyDescriptor>) -> Self {
        check_unique_names(type_name, &properties);
        let fingerprint = schema_fingerprint(&properties);
        Self {
            type_name,
            properties,
            fingerprint,
        }
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn properties(&self) -> &[PropertyDescriptor] {
        &self.properties
    }

    pub fn property(&self, name: &str) -> Option<&PropertyDescriptor> {
        self.properties.iter().find(|p| p.name() == name)
    }

    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

fn check_unique_names(type_name: &str, properties: &[PropertyDescriptor]) {
    let mut seen = HashSet::new();
    for property in properties {
        if !seen.insert(property.name()) {
            panic!("Component type '{type_name}' declares property '{}' twice.", property.name());
        }
        if let PropertyBody::Array(array) = property.body() {
            check_unique_names(type_name, array.children());
        }
    }
}

/// Looks up a registered component type by name.
pub fn component_type(type_name: &str) -> Option<&'static ComponentType> {
    COMPONENT_TYPES.iter().find(|t| t.type_name == type_name)
}

/// Registers the descriptor list of a component type.
#[macro_export]
macro_rules! register_component_type {
    ($name:expr, $properties:path) => {
        $crate::inventory::submit! {
            $crate::ecs::component_registry::ComponentTypeEntry {
                type_name: $name,
                properties: $properties,
            }
        }
    };
}
