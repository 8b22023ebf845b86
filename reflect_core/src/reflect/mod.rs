pub mod accessor;
pub mod array;
pub mod descriptor;
pub mod enum_property;
pub mod kind;
pub mod record;
pub mod sampled;
pub mod scalar;
pub mod string;
pub mod value;

pub use descriptor::{PropertyBody, PropertyDescriptor};
pub use kind::PropertyKind;
