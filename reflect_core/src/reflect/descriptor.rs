// reflect_core/src/reflect/descriptor.rs
use crate::blob::{BlobError, InputBlob, OutputBlob};
use crate::ecs::component::{ComponentIndex, ComponentMut, ComponentRef, PropertyIndex};
use crate::ecs::scene::Scene;
use crate::reflect::accessor::*;
use crate::reflect::array::ArrayProperty;
use crate::reflect::enum_property::EnumProperty;
use crate::reflect::kind::PropertyKind;
use crate::reflect::sampled::SampledFunctionProperty;
use crate::reflect::scalar::{DecimalProperty, DecimalRange, IntProperty};
use crate::reflect::string::{FileProperty, ResourceProperty, ResourceType, StringProperty};
use crate::reflect::value::ValueProperty;
use glam::{Vec2, Vec3, Vec4};

/// The concrete behavior behind a descriptor. One variant per kind tag.
pub enum PropertyBody {
    Int(IntProperty),
    Bool(ValueProperty<bool>),
    String(StringProperty),
    Vec2(ValueProperty<Vec2>),
    Vec3(ValueProperty<Vec3>),
    Vec4(ValueProperty<Vec4>),
    /// RGB, stored as three floats.
    Color(ValueProperty<Vec3>),
    Decimal(DecimalProperty),
    Enum(EnumProperty),
    File(FileProperty),
    Resource(ResourceProperty),
    SampledFunction(SampledFunctionProperty),
    Array(ArrayProperty),
}

/// Knows how to move one field between a component and a byte stream.
///
/// Built once when a component type registers its properties and shared by
/// every instance of that type afterwards.
pub struct PropertyDescriptor {
    name: &'static str,
    body: PropertyBody,
}

impl PropertyDescriptor {
    pub fn new(name: &'static str, body: PropertyBody) -> Self {
        if let PropertyBody::Array(array) = &body {
            for child in array.children() {
                assert!(
                    child.supports_elements(),
                    "Array '{name}': child '{}' ({}) has no element binding.",
                    child.name,
                    child.kind(),
                );
            }
        }
        Self { name, body }
    }

    pub fn int<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> i32,
        setter: fn(&mut S, ComponentIndex, i32),
    ) -> Self {
        let value = ValueProperty::new(ScalarAccessor::new(getter, setter));
        Self::new(name, PropertyBody::Int(IntProperty::new(value)))
    }

    pub fn int_element<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex, usize) -> i32,
        setter: fn(&mut S, ComponentIndex, usize, i32),
    ) -> Self {
        let value = ValueProperty::new(ElementAccessor::new(getter, setter));
        Self::new(name, PropertyBody::Int(IntProperty::new(value)))
    }

    /// Editor limits of an int property.
    pub fn with_limits(mut self, min: i32, max: i32) -> Self {
        let kind = self.kind();
        match &mut self.body {
            PropertyBody::Int(int) => int.set_limits(min, max),
            _ => panic!("Limits only apply to int properties, '{}' is {kind}.", self.name),
        }
        self
    }

    pub fn bool<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> bool,
        setter: fn(&mut S, ComponentIndex, bool),
    ) -> Self {
        Self::new(name, PropertyBody::Bool(ValueProperty::new(ScalarAccessor::new(getter, setter))))
    }

    pub fn string<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> &str,
        setter: fn(&mut S, ComponentIndex, &str),
    ) -> Self {
        let text = StringProperty::new(ScalarTextAccessor::new(getter, setter));
        Self::new(name, PropertyBody::String(text))
    }

    pub fn string_element<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex, usize) -> &str,
        setter: fn(&mut S, ComponentIndex, usize, &str),
    ) -> Self {
        let text = StringProperty::new(ElementTextAccessor::new(getter, setter));
        Self::new(name, PropertyBody::String(text))
    }

    pub fn vec2<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> Vec2,
        setter: fn(&mut S, ComponentIndex, Vec2),
    ) -> Self {
        Self::new(name, PropertyBody::Vec2(ValueProperty::new(ScalarAccessor::new(getter, setter))))
    }

    pub fn vec3<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> Vec3,
        setter: fn(&mut S, ComponentIndex, Vec3),
    ) -> Self {
        Self::new(name, PropertyBody::Vec3(ValueProperty::new(ScalarAccessor::new(getter, setter))))
    }

    pub fn vec4<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> Vec4,
        setter: fn(&mut S, ComponentIndex, Vec4),
    ) -> Self {
        Self::new(name, PropertyBody::Vec4(ValueProperty::new(ScalarAccessor::new(getter, setter))))
    }

    pub fn color<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> Vec3,
        setter: fn(&mut S, ComponentIndex, Vec3),
    ) -> Self {
        Self::new(name, PropertyBody::Color(ValueProperty::new(ScalarAccessor::new(getter, setter))))
    }

    pub fn decimal<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> f32,
        setter: fn(&mut S, ComponentIndex, f32),
        range: DecimalRange,
    ) -> Self {
        let value = ValueProperty::new(ScalarAccessor::new(getter, setter));
        Self::new(name, PropertyBody::Decimal(DecimalProperty::new(value, range)))
    }

    pub fn decimal_element<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex, usize) -> f32,
        setter: fn(&mut S, ComponentIndex, usize, f32),
        range: DecimalRange,
    ) -> Self {
        let value = ValueProperty::new(ElementAccessor::new(getter, setter));
        Self::new(name, PropertyBody::Decimal(DecimalProperty::new(value, range)))
    }

    pub fn enumeration<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> i32,
        setter: fn(&mut S, ComponentIndex, i32),
        count: fn(&S) -> usize,
        label: fn(&S, usize) -> &str,
    ) -> Self {
        let value = ValueProperty::new(ScalarAccessor::new(getter, setter));
        let labels = SceneEnumLabels::new(count, label);
        Self::new(name, PropertyBody::Enum(EnumProperty::new(value, labels)))
    }

    pub fn file<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> &str,
        setter: fn(&mut S, ComponentIndex, &str),
        file_type: &'static str,
    ) -> Self {
        let text = StringProperty::new(ScalarTextAccessor::new(getter, setter));
        Self::new(name, PropertyBody::File(FileProperty::new(text, file_type)))
    }

    pub fn file_element<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex, usize) -> &str,
        setter: fn(&mut S, ComponentIndex, usize, &str),
        file_type: &'static str,
    ) -> Self {
        let text = StringProperty::new(ElementTextAccessor::new(getter, setter));
        Self::new(name, PropertyBody::File(FileProperty::new(text, file_type)))
    }

    pub fn resource<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex) -> &str,
        setter: fn(&mut S, ComponentIndex, &str),
        file_type: &'static str,
        resource_type: ResourceType,
    ) -> Self {
        let text = StringProperty::new(ScalarTextAccessor::new(getter, setter));
        let file = FileProperty::new(text, file_type);
        Self::new(name, PropertyBody::Resource(ResourceProperty::new(file, resource_type)))
    }

    pub fn resource_element<S: Scene>(
        name: &'static str,
        getter: fn(&S, ComponentIndex, usize) -> &str,
        setter: fn(&mut S, ComponentIndex, usize, &str),
        file_type: &'static str,
        resource_type: ResourceType,
    ) -> Self {
        let text = StringProperty::new(ElementTextAccessor::new(getter, setter));
        let file = FileProperty::new(text, file_type);
        Self::new(name, PropertyBody::Resource(ResourceProperty::new(file, resource_type)))
    }

    /// Curve of `N` samples, each reached through its own index.
    pub fn sampled_function<S: Scene, const N: usize>(
        name: &'static str,
        getter: fn(&S, ComponentIndex, usize) -> f32,
        setter: fn(&mut S, ComponentIndex, usize, f32),
        min: f32,
        max: f32,
    ) -> Self {
        let accessor = ElementAccessor::new(getter, setter);
        Self::new(
            name,
            PropertyBody::SampledFunction(SampledFunctionProperty::new(accessor, N, min, max)),
        )
    }

    /// List property. `children` describe one item, in wire order.
    pub fn array<S: Scene>(
        name: &'static str,
        counter: fn(&S, ComponentIndex) -> usize,
        adder: fn(&mut S, ComponentIndex),
        remover: fn(&mut S, ComponentIndex, usize),
        children: Vec<PropertyDescriptor>,
    ) -> Self {
        let host = SceneArrayHost::new(counter, adder, remover);
        Self::new(name, PropertyBody::Array(ArrayProperty::new(host, children)))
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    pub fn body(&self) -> &PropertyBody {
        &self.body
    }

    pub fn kind(&self) -> PropertyKind {
        match &self.body {
            PropertyBody::Int(_) => PropertyKind::Integer,
            PropertyBody::Bool(_) => PropertyKind::Bool,
            PropertyBody::String(_) => PropertyKind::String,
            PropertyBody::Vec2(_) => PropertyKind::Vec2,
            PropertyBody::Vec3(_) => PropertyKind::Vec3,
            PropertyBody::Vec4(_) => PropertyKind::Vec4,
            PropertyBody::Color(_) => PropertyKind::Color,
            PropertyBody::Decimal(_) => PropertyKind::Decimal,
            PropertyBody::Enum(_) => PropertyKind::Enum,
            PropertyBody::File(_) => PropertyKind::File,
            PropertyBody::Resource(_) => PropertyKind::Resource,
            PropertyBody::SampledFunction(_) => PropertyKind::SampledFunction,
            PropertyBody::Array(_) => PropertyKind::Array,
        }
    }

    /// Which `PropertyIndex` case this descriptor accepts.
    pub fn binding(&self) -> Binding {
        match &self.body {
            PropertyBody::Int(int) => int.value.binding(),
            PropertyBody::Decimal(decimal) => decimal.value.binding(),
            PropertyBody::String(text) => text.binding(),
            PropertyBody::File(file) => file.text.binding(),
            PropertyBody::Resource(resource) => resource.file.text.binding(),
            _ => Binding::Scalar,
        }
    }

    /// True when the descriptor can be a child of an array.
    pub fn supports_elements(&self) -> bool {
        self.binding() == Binding::Element
    }

    fn check_index(&self, index: PropertyIndex) {
        let binding = self.binding();
        if !binding.accepts(index) {
            panic!(
                "Property '{}' ({}) has a {:?} binding and cannot be addressed with {:?}.",
                self.name,
                self.kind(),
                binding,
                index,
            );
        }
    }

    /// Serializes the current value of this field into `out`.
    pub fn write_from(&self, cmp: ComponentRef<'_>, index: PropertyIndex, out: &mut OutputBlob) {
        self.check_index(index);
        match &self.body {
            PropertyBody::Int(int) => int.value.write_from(cmp, index, out),
            PropertyBody::Bool(value) => value.write_from(cmp, index, out),
            PropertyBody::String(text) => text.write_from(cmp, index, out),
            PropertyBody::Vec2(value) => value.write_from(cmp, index, out),
            PropertyBody::Vec3(value) => value.write_from(cmp, index, out),
            PropertyBody::Vec4(value) => value.write_from(cmp, index, out),
            PropertyBody::Color(value) => value.write_from(cmp, index, out),
            PropertyBody::Decimal(decimal) => decimal.value.write_from(cmp, index, out),
            PropertyBody::Enum(enumeration) => enumeration.value.write_from(cmp, index, out),
            PropertyBody::File(file) => file.text.write_from(cmp, index, out),
            PropertyBody::Resource(resource) => resource.file.text.write_from(cmp, index, out),
            PropertyBody::SampledFunction(function) => function.write_from(cmp, out),
            PropertyBody::Array(array) => array.write_from(cmp, out),
        }
    }

    /// Deserializes a value from `input` and hands it to the bound setter.
    pub fn read_into(
        &self,
        cmp: ComponentMut<'_>,
        index: PropertyIndex,
        input: &mut InputBlob<'_>,
    ) -> Result<(), BlobError> {
        self.check_index(index);
        match &self.body {
            PropertyBody::Int(int) => int.value.read_into(cmp, index, input),
            PropertyBody::Bool(value) => value.read_into(cmp, index, input),
            PropertyBody::String(text) => text.read_into(cmp, index, input),
            PropertyBody::Vec2(value) => value.read_into(cmp, index, input),
            PropertyBody::Vec3(value) => value.read_into(cmp, index, input),
            PropertyBody::Vec4(value) => value.read_into(cmp, index, input),
            PropertyBody::Color(value) => value.read_into(cmp, index, input),
            PropertyBody::Decimal(decimal) => decimal.value.read_into(cmp, index, input),
            PropertyBody::Enum(enumeration) => enumeration.value.read_into(cmp, index, input),
            PropertyBody::File(file) => file.text.read_into(cmp, index, input),
            PropertyBody::Resource(resource) => resource.file.text.read_into(cmp, index, input),
            PropertyBody::SampledFunction(function) => function.read_into(cmp, input),
            PropertyBody::Array(array) => array.read_into(self.name, cmp, input),
        }
    }

    /// Encodes the field on its own, e.g. for an undo entry.
    pub fn encode(&self, cmp: ComponentRef<'_>, index: PropertyIndex) -> Vec<u8> {
        let mut out = OutputBlob::new();
        self.write_from(cmp, index, &mut out);
        out.into_bytes()
    }

    /// Applies bytes produced by [`PropertyDescriptor::encode`].
    pub fn decode(&self, cmp: ComponentMut<'_>, index: PropertyIndex, bytes: &[u8]) -> Result<(), BlobError> {
        let mut input = InputBlob::new(bytes);
        self.read_into(cmp, index, &mut input)
    }
}

impl std::fmt::Debug for PropertyDescriptor {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PropertyDescriptor")
            .field("name", &self.name)
            .field("kind", &self.kind())
            .finish()
    }
}
