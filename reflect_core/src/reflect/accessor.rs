// reflect_core/src/reflect/accessor.rs
//! Bound host entry points.
//!
//! Every accessor holds plain `fn` pointers into one concrete scene type `S`
//! and exposes them through a trait object that only knows about `dyn Scene`.
//! This is the single place where descriptors lose track of the host type.
use crate::ecs::component::{ComponentIndex, ComponentMut, ComponentRef, PropertyIndex};
use crate::ecs::scene::{scene_mut, scene_ref, Scene};

/// Whether an accessor addresses the field itself or one of its elements.
#[derive(Copy, Clone, Eq, PartialEq, Debug)]
pub enum Binding {
    Scalar,
    Element,
}

impl Binding {
    pub fn accepts(self, index: PropertyIndex) -> bool {
        matches!(
            (self, index),
            (Binding::Scalar, PropertyIndex::Scalar) | (Binding::Element, PropertyIndex::Element(_))
        )
    }
}

fn element_of(index: PropertyIndex) -> usize {
    match index {
        PropertyIndex::Element(i) => i,
        PropertyIndex::Scalar => panic!("Element accessor called without an element index."),
    }
}

fn expect_scalar(index: PropertyIndex) {
    if let PropertyIndex::Element(i) = index {
        panic!("Scalar accessor called with element index {i}.");
    }
}

/// Erased getter/setter pair for a fixed-width value.
pub trait ValueAccess<T>: Send + Sync {
    fn binding(&self) -> Binding;
    fn get(&self, cmp: ComponentRef<'_>, index: PropertyIndex) -> T;
    fn set(&self, cmp: ComponentMut<'_>, index: PropertyIndex, value: T);
}

/// Getter/setter for a field stored once per component.
pub struct ScalarAccessor<S, T> {
    getter: fn(&S, ComponentIndex) -> T,
    setter: fn(&mut S, ComponentIndex, T),
}

impl<S, T> ScalarAccessor<S, T> {
    pub fn new(getter: fn(&S, ComponentIndex) -> T, setter: fn(&mut S, ComponentIndex, T)) -> Self {
        Self { getter, setter }
    }
}

impl<S: Scene, T: 'static> ValueAccess<T> for ScalarAccessor<S, T> {
    fn binding(&self) -> Binding {
        Binding::Scalar
    }

    fn get(&self, cmp: ComponentRef<'_>, index: PropertyIndex) -> T {
        expect_scalar(index);
        (self.getter)(scene_ref::<S>(cmp.scene), cmp.index)
    }

    fn set(&self, cmp: ComponentMut<'_>, index: PropertyIndex, value: T) {
        expect_scalar(index);
        (self.setter)(scene_mut::<S>(cmp.scene), cmp.index, value)
    }
}

/// Getter/setter for one element of an array-typed field.
pub struct ElementAccessor<S, T> {
    getter: fn(&S, ComponentIndex, usize) -> T,
    setter: fn(&mut S, ComponentIndex, usize, T),
}

impl<S, T> ElementAccessor<S, T> {
    pub fn new(
        getter: fn(&S, ComponentIndex, usize) -> T,
        setter: fn(&mut S, ComponentIndex, usize, T),
    ) -> Self {
        Self { getter, setter }
    }
}

impl<S: Scene, T: 'static> ValueAccess<T> for ElementAccessor<S, T> {
    fn binding(&self) -> Binding {
        Binding::Element
    }

    fn get(&self, cmp: ComponentRef<'_>, index: PropertyIndex) -> T {
        (self.getter)(scene_ref::<S>(cmp.scene), cmp.index, element_of(index))
    }

    fn set(&self, cmp: ComponentMut<'_>, index: PropertyIndex, value: T) {
        (self.setter)(scene_mut::<S>(cmp.scene), cmp.index, element_of(index), value)
    }
}

/// Erased getter/setter pair for a text field. The getter borrows from the scene.
pub trait TextAccess: Send + Sync {
    fn binding(&self) -> Binding;
    fn get<'a>(&self, cmp: ComponentRef<'a>, index: PropertyIndex) -> &'a str;
    fn set(&self, cmp: ComponentMut<'_>, index: PropertyIndex, value: &str);
}

pub struct ScalarTextAccessor<S> {
    getter: fn(&S, ComponentIndex) -> &str,
    setter: fn(&mut S, ComponentIndex, &str),
}

impl<S> ScalarTextAccessor<S> {
    pub fn new(getter: fn(&S, ComponentIndex) -> &str, setter: fn(&mut S, ComponentIndex, &str)) -> Self {
        Self { getter, setter }
    }
}

impl<S: Scene> TextAccess for ScalarTextAccessor<S> {
    fn binding(&self) -> Binding {
        Binding::Scalar
    }

    fn get<'a>(&self, cmp: ComponentRef<'a>, index: PropertyIndex) -> &'a str {
        expect_scalar(index);
        (self.getter)(scene_ref::<S>(cmp.scene), cmp.index)
    }

    fn set(&self, cmp: ComponentMut<'_>, index: PropertyIndex, value: &str) {
        expect_scalar(index);
        (self.setter)(scene_mut::<S>(cmp.scene), cmp.index, value)
    }
}

pub struct ElementTextAccessor<S> {
    getter: fn(&S, ComponentIndex, usize) -> &str,
    setter: fn(&mut S, ComponentIndex, usize, &str),
}

impl<S> ElementTextAccessor<S> {
    pub fn new(
        getter: fn(&S, ComponentIndex, usize) -> &str,
        setter: fn(&mut S, ComponentIndex, usize, &str),
    ) -> Self {
        Self { getter, setter }
    }
}

impl<S: Scene> TextAccess for ElementTextAccessor<S> {
    fn binding(&self) -> Binding {
        Binding::Element
    }

    fn get<'a>(&self, cmp: ComponentRef<'a>, index: PropertyIndex) -> &'a str {
        (self.getter)(scene_ref::<S>(cmp.scene), cmp.index, element_of(index))
    }

    fn set(&self, cmp: ComponentMut<'_>, index: PropertyIndex, value: &str) {
        (self.setter)(scene_mut::<S>(cmp.scene), cmp.index, element_of(index), value)
    }
}

/// Scene-level queries behind an enum dropdown.
pub trait EnumLabels: Send + Sync {
    fn count(&self, scene: &dyn Scene) -> usize;
    fn label<'a>(&self, scene: &'a dyn Scene, index: usize) -> &'a str;
}

pub struct SceneEnumLabels<S> {
    counter: fn(&S) -> usize,
    namer: fn(&S, usize) -> &str,
}

impl<S> SceneEnumLabels<S> {
    pub fn new(counter: fn(&S) -> usize, namer: fn(&S, usize) -> &str) -> Self {
        Self { counter, namer }
    }
}

impl<S: Scene> EnumLabels for SceneEnumLabels<S> {
    fn count(&self, scene: &dyn Scene) -> usize {
        (self.counter)(scene_ref::<S>(scene))
    }

    fn label<'a>(&self, scene: &'a dyn Scene, index: usize) -> &'a str {
        (self.namer)(scene_ref::<S>(scene), index)
    }
}

/// Count/add/remove entry points of a host-owned list.
pub trait ArrayHost: Send + Sync {
    fn count(&self, cmp: ComponentRef<'_>) -> usize;
    /// Appends a default item at the end.
    fn add(&self, cmp: ComponentMut<'_>);
    fn remove(&self, cmp: ComponentMut<'_>, item: usize);
}

pub struct SceneArrayHost<S> {
    counter: fn(&S, ComponentIndex) -> usize,
    adder: fn(&mut S, ComponentIndex),
    remover: fn(&mut S, ComponentIndex, usize),
}

impl<S> SceneArrayHost<S> {
    pub fn new(
        counter: fn(&S, ComponentIndex) -> usize,
        adder: fn(&mut S, ComponentIndex),
        remover: fn(&mut S, ComponentIndex, usize),
    ) -> Self {
        Self { counter, adder, remover }
    }
}

impl<S: Scene> ArrayHost for SceneArrayHost<S> {
    fn count(&self, cmp: ComponentRef<'_>) -> usize {
        (self.counter)(scene_ref::<S>(cmp.scene), cmp.index)
    }

    fn add(&self, cmp: ComponentMut<'_>) {
        (self.adder)(scene_mut::<S>(cmp.scene), cmp.index)
    }

    fn remove(&self, cmp: ComponentMut<'_>, item: usize) {
        (self.remover)(scene_mut::<S>(cmp.scene), cmp.index, item)
    }
}
