// reflect_core/src/ecs/scene.rs
use std::any::{type_name, Any};

/// Polymorphic handle to the subsystem that owns component data.
///
/// Descriptors are bound to one concrete scene type at registration time and
/// downcast the handle back to it on every call.
pub trait Scene: Any {
    fn as_any(&self) -> &dyn Any;
    fn as_any_mut(&mut self) -> &mut dyn Any;
}

/// Implements `Scene` for a concrete type.
#[macro_export]
macro_rules! impl_scene {
    ($ty:ty) => {
        impl $crate::ecs::scene::Scene for $ty {
            fn as_any(&self) -> &dyn ::std::any::Any {
                self
            }
            fn as_any_mut(&mut self) -> &mut dyn ::std::any::Any {
                self
            }
        }
    };
}

/// Downcasts a scene handle to the type a descriptor was bound to.
///
/// Panics when the handle belongs to another scene type.
pub fn scene_ref<S: Scene>(scene: &dyn Scene) -> &S {
    match scene.as_any().downcast_ref::<S>() {
        Some(scene) => scene,
        None => panic!("Property bound to `{}` was used with another scene type.", type_name::<S>()),
    }
}

/// Mutable counterpart of [`scene_ref`].
pub fn scene_mut<S: Scene>(scene: &mut dyn Scene) -> &mut S {
    match scene.as_any_mut().downcast_mut::<S>() {
        Some(scene) => scene,
        None => panic!("Property bound to `{}` was used with another scene type.", type_name::<S>()),
    }
}
