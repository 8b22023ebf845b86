// reflect_core/tests/scalar_properties.rs
use glam::{Vec3, Vec4};
use reflect_core::blob::{InputBlob, OutputBlob};
use reflect_core::ecs::component::{ComponentIndex, ComponentMut, ComponentRef, PropertyIndex};
use reflect_core::reflect::descriptor::{PropertyBody, PropertyDescriptor};
use reflect_core::reflect::PropertyKind;
use reflect_core::test_utils::*;

fn property(name: &str) -> PropertyDescriptor {
    test_properties()
        .into_iter()
        .find(|p| p.name() == name)
        .expect("property exists")
}

/// Writes `name` from a scene holding the sample component and reads it into
/// a default one.
fn copy_property(name: &str) -> (TestComponent, TestComponent) {
    let descriptor = property(name);
    let mut source = TestScene::with_components(1);
    source.components[0] = sample_component();

    let bytes = descriptor.encode(ComponentRef::new(&source, ComponentIndex(0)), PropertyIndex::Scalar);

    let mut target = TestScene::with_components(1);
    descriptor
        .decode(ComponentMut::new(&mut target, ComponentIndex(0)), PropertyIndex::Scalar, &bytes)
        .unwrap();

    (source.components.remove(0), target.components.remove(0))
}

#[test]
fn int_round_trip() {
    let (source, target) = copy_property("count");
    assert_eq!(target.count, source.count);
}

#[test]
fn bool_round_trip() {
    let (source, target) = copy_property("visible");
    assert_eq!(target.visible, source.visible);
}

#[test]
fn vector_round_trips_are_bit_exact() {
    let (source, target) = copy_property("offset");
    assert_eq!(target.offset.x.to_bits(), source.offset.x.to_bits());
    assert_eq!(target.offset.y.to_bits(), source.offset.y.to_bits());

    let (source, target) = copy_property("position");
    assert_eq!(target.position.to_array().map(f32::to_bits), source.position.to_array().map(f32::to_bits));

    let (source, target) = copy_property("rect");
    assert_eq!(target.rect, source.rect);
}

#[test]
fn color_round_trip() {
    let (source, target) = copy_property("tint");
    assert_eq!(target.tint, source.tint);
}

#[test]
fn enum_round_trip() {
    let (source, target) = copy_property("mode");
    assert_eq!(target.mode, source.mode);
}

#[test]
fn widths_match_natural_representation() {
    let scene = TestScene::with_components(1);
    let cmp = ComponentRef::new(&scene, ComponentIndex(0));
    let width = |name: &str| property(name).encode(cmp, PropertyIndex::Scalar).len();

    assert_eq!(width("count"), 4);
    assert_eq!(width("visible"), 1);
    assert_eq!(width("offset"), 8);
    assert_eq!(width("position"), 12);
    assert_eq!(width("rect"), 16);
    assert_eq!(width("tint"), 12);
    assert_eq!(width("speed"), 4);
    assert_eq!(width("mode"), 4);
}

#[test]
fn decimal_write_emits_the_stored_value() {
    let mut scene = TestScene::with_components(1);
    scene.components[0].speed = 3.75;

    let bytes = property("speed").encode(ComponentRef::new(&scene, ComponentIndex(0)), PropertyIndex::Scalar);
    assert_eq!(bytes, 3.75f32.to_le_bytes());
}

#[test]
fn decimal_round_trip_is_bit_exact() {
    let (source, target) = copy_property("speed");
    assert_eq!(target.speed.to_bits(), source.speed.to_bits());
}

#[test]
fn enum_and_int_share_the_wire_format() {
    let mut scene = TestScene::with_components(1);
    scene.components[0].mode = 2;
    let cmp = ComponentRef::new(&scene, ComponentIndex(0));

    let as_int = PropertyDescriptor::int("mode", TestScene::mode, TestScene::set_mode);
    assert_eq!(
        property("mode").encode(cmp, PropertyIndex::Scalar),
        as_int.encode(cmp, PropertyIndex::Scalar)
    );
}

#[test]
fn enum_labels_come_from_the_scene() {
    let scene = TestScene::with_components(1);
    let descriptor = property("mode");
    let PropertyBody::Enum(enumeration) = descriptor.body() else {
        panic!("mode is an enum");
    };
    assert_eq!(enumeration.enum_count(&scene), 3);
    assert_eq!(enumeration.enum_label(&scene, 1), "Loop");
    assert_eq!(enumeration.enum_labels(&scene), vec!["Off", "Loop", "PingPong"]);
}

#[test]
fn presentation_metadata_is_kept() {
    let count = property("count");
    let PropertyBody::Int(int) = count.body() else {
        panic!("count is an int");
    };
    assert_eq!(int.limits(), Some((0, 100)));

    let speed = property("speed");
    let PropertyBody::Decimal(decimal) = speed.body() else {
        panic!("speed is a decimal");
    };
    assert_eq!(decimal.range().step, 0.5);
    assert_eq!(speed.kind(), PropertyKind::Decimal);
}

#[test]
fn limits_do_not_clamp_values() {
    let mut scene = TestScene::with_components(1);
    let mut out = OutputBlob::new();
    out.write_i32(500);

    let mut input = InputBlob::new(out.as_bytes());
    property("count")
        .read_into(ComponentMut::new(&mut scene, ComponentIndex(0)), PropertyIndex::Scalar, &mut input)
        .unwrap();
    assert_eq!(scene.components[0].count, 500);
}

#[test]
fn element_binding_addresses_one_element() {
    let mut scene = TestScene::with_components(1);
    scene.components[0].layers = vec![3, 1, 4];
    let layer = PropertyDescriptor::int_element("layer", TestScene::layer, TestScene::set_layer);
    assert!(layer.supports_elements());

    let bytes = layer.encode(ComponentRef::new(&scene, ComponentIndex(0)), PropertyIndex::Element(2));
    assert_eq!(bytes, 4i32.to_le_bytes());

    layer
        .decode(ComponentMut::new(&mut scene, ComponentIndex(0)), PropertyIndex::Element(0), &9i32.to_le_bytes())
        .unwrap();
    assert_eq!(scene.components[0].layers, vec![9, 1, 4]);
}

#[test]
fn components_are_addressed_by_index() {
    let mut scene = TestScene::with_components(2);
    scene.components[1].position = Vec3::new(4.0, 5.0, 6.0);

    let bytes = property("position").encode(ComponentRef::new(&scene, ComponentIndex(1)), PropertyIndex::Scalar);
    property("position")
        .decode(ComponentMut::new(&mut scene, ComponentIndex(0)), PropertyIndex::Scalar, &bytes)
        .unwrap();
    assert_eq!(scene.components[0].position, Vec3::new(4.0, 5.0, 6.0));
}

#[test]
fn short_stream_leaves_the_field_untouched() {
    let mut scene = TestScene::with_components(1);
    scene.components[0].rect = Vec4::ONE;

    let result = property("rect").decode(
        ComponentMut::new(&mut scene, ComponentIndex(0)),
        PropertyIndex::Scalar,
        &[0u8; 10],
    );
    assert!(result.is_err());
    assert_eq!(scene.components[0].rect, Vec4::ONE);
}

#[test]
#[should_panic(expected = "cannot be addressed with Element")]
fn scalar_property_rejects_element_index() {
    let scene = TestScene::with_components(1);
    property("visible").encode(ComponentRef::new(&scene, ComponentIndex(0)), PropertyIndex::Element(0));
}

#[test]
#[should_panic(expected = "cannot be addressed with Scalar")]
fn element_property_rejects_scalar_index() {
    let scene = TestScene::with_components(1);
    let layer = PropertyDescriptor::int_element("layer", TestScene::layer, TestScene::set_layer);
    layer.encode(ComponentRef::new(&scene, ComponentIndex(0)), PropertyIndex::Scalar);
}

#[test]
#[should_panic(expected = "Limits only apply to int properties")]
fn limits_on_a_vector_panic() {
    let _ = PropertyDescriptor::vec2("offset", TestScene::offset, TestScene::set_offset).with_limits(0, 1);
}

struct OtherScene;
reflect_core::impl_scene!(OtherScene);

#[test]
#[should_panic(expected = "used with another scene type")]
fn wrong_scene_type_panics() {
    let other = OtherScene;
    property("offset").encode(ComponentRef::new(&other, ComponentIndex(0)), PropertyIndex::Scalar);
}

#[test]
fn default_vectors_encode_as_zeroes() {
    let scene = TestScene::with_components(1);
    let bytes = property("offset").encode(ComponentRef::new(&scene, ComponentIndex(0)), PropertyIndex::Scalar);
    assert_eq!(bytes, [0u8; 8]);
}
