// reflect_core/src/reflect/kind.rs
use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumIter};

/// Kind tag of a property descriptor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, EnumIter, Display)]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum PropertyKind {
    Integer,
    Bool,
    String,
    Vec2,
    Vec3,
    Vec4,
    Color,
    Decimal,
    Enum,
    File,
    Resource,
    SampledFunction,
    Array,
}

impl PropertyKind {
    /// Stable numeric code, used when fingerprinting descriptor lists.
    pub fn code(self) -> u8 {
        match self {
            PropertyKind::Integer => 0,
            PropertyKind::Bool => 1,
            PropertyKind::String => 2,
            PropertyKind::Vec2 => 3,
            PropertyKind::Vec3 => 4,
            PropertyKind::Vec4 => 5,
            PropertyKind::Color => 6,
            PropertyKind::Decimal => 7,
            PropertyKind::Enum => 8,
            PropertyKind::File => 9,
            PropertyKind::Resource => 10,
            PropertyKind::SampledFunction => 11,
            PropertyKind::Array => 12,
        }
    }
}
