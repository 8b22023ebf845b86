// reflect_core/src/reflect/value.rs
use crate::blob::{BlobError, InputBlob, OutputBlob};
use crate::ecs::component::{ComponentMut, ComponentRef, PropertyIndex};
use crate::reflect::accessor::{Binding, ValueAccess};
use glam::{Vec2, Vec3, Vec4};

/// A value with a fixed-width wire representation.
pub trait WireValue: Copy + 'static {
    fn encode(self, out: &mut OutputBlob);
    fn decode(input: &mut InputBlob<'_>) -> Result<Self, BlobError>;
}

impl WireValue for i32 {
    fn encode(self, out: &mut OutputBlob) {
        out.write_i32(self);
    }
    fn decode(input: &mut InputBlob<'_>) -> Result<Self, BlobError> {
        input.read_i32()
    }
}

impl WireValue for f32 {
    fn encode(self, out: &mut OutputBlob) {
        out.write_f32(self);
    }
    fn decode(input: &mut InputBlob<'_>) -> Result<Self, BlobError> {
        input.read_f32()
    }
}

impl WireValue for bool {
    fn encode(self, out: &mut OutputBlob) {
        out.write_bool(self);
    }
    fn decode(input: &mut InputBlob<'_>) -> Result<Self, BlobError> {
        input.read_bool()
    }
}

impl WireValue for Vec2 {
    fn encode(self, out: &mut OutputBlob) {
        out.write_vec2(self);
    }
    fn decode(input: &mut InputBlob<'_>) -> Result<Self, BlobError> {
        input.read_vec2()
    }
}

impl WireValue for Vec3 {
    fn encode(self, out: &mut OutputBlob) {
        out.write_vec3(self);
    }
    fn decode(input: &mut InputBlob<'_>) -> Result<Self, BlobError> {
        input.read_vec3()
    }
}

impl WireValue for Vec4 {
    fn encode(self, out: &mut OutputBlob) {
        out.write_vec4(self);
    }
    fn decode(input: &mut InputBlob<'_>) -> Result<Self, BlobError> {
        input.read_vec4()
    }
}

/// Moves one fixed-width value between a bound accessor and a stream.
pub struct ValueProperty<T> {
    accessor: Box<dyn ValueAccess<T>>,
}

impl<T: WireValue> ValueProperty<T> {
    pub fn new(accessor: impl ValueAccess<T> + 'static) -> Self {
        Self {
            accessor: Box::new(accessor),
        }
    }

    pub fn binding(&self) -> Binding {
        self.accessor.binding()
    }

    /// Current value, straight from the host.
    pub fn get(&self, cmp: ComponentRef<'_>, index: PropertyIndex) -> T {
        self.accessor.get(cmp, index)
    }

    pub fn write_from(&self, cmp: ComponentRef<'_>, index: PropertyIndex, out: &mut OutputBlob) {
        self.accessor.get(cmp, index).encode(out);
    }

    pub fn read_into(
        &self,
        cmp: ComponentMut<'_>,
        index: PropertyIndex,
        input: &mut InputBlob<'_>,
    ) -> Result<(), BlobError> {
        let value = T::decode(input)?;
        self.accessor.set(cmp, index, value);
        Ok(())
    }
}
