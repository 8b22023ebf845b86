// reflect_core/tests/string_properties.rs
use reflect_core::blob::{InputBlob, OutputBlob};
use reflect_core::constants::MAX_STRING_SIZE;
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

fn round_trip_label(label: &str) -> (Vec<u8>, String) {
    let descriptor = property("label");
    let mut source = TestScene::with_components(1);
    source.components[0].label = label.to_string();
    let bytes = descriptor.encode(ComponentRef::new(&source, ComponentIndex(0)), PropertyIndex::Scalar);

    let mut target = TestScene::with_components(1);
    descriptor
        .decode(ComponentMut::new(&mut target, ComponentIndex(0)), PropertyIndex::Scalar, &bytes)
        .unwrap();
    (bytes, target.components[0].label.clone())
}

#[test]
fn string_is_bytes_plus_terminator() {
    let (bytes, label) = round_trip_label("crate");
    assert_eq!(bytes, b"crate\0");
    assert_eq!(label, "crate");
}

#[test]
fn empty_string_is_a_lone_terminator() {
    let (bytes, label) = round_trip_label("");
    assert_eq!(bytes, [0u8]);
    assert_eq!(label, "");
}

#[test]
fn strings_below_the_cap_round_trip() {
    for len in [1, 150, MAX_STRING_SIZE - 1] {
        let text = "a".repeat(len);
        let (bytes, label) = round_trip_label(&text);
        assert_eq!(bytes.len(), len + 1);
        assert_eq!(label, text);
    }
}

#[test]
fn long_strings_are_truncated_to_the_cap() {
    for len in [MAX_STRING_SIZE, MAX_STRING_SIZE + 1, 1000] {
        let text = "b".repeat(len);
        let (bytes, label) = round_trip_label(&text);
        assert_eq!(bytes.len(), MAX_STRING_SIZE);
        assert_eq!(bytes.last(), Some(&0));
        assert_eq!(label, "b".repeat(MAX_STRING_SIZE - 1));
    }
}

#[test]
fn unterminated_stream_is_force_terminated() {
    // A foreign writer that ignored the cap, followed by another field.
    let mut out = OutputBlob::new();
    out.write_bytes(&[b'z'; MAX_STRING_SIZE]);
    out.write_i32(77);

    let mut scene = TestScene::with_components(1);
    let mut input = InputBlob::new(out.as_bytes());
    property("label")
        .read_into(ComponentMut::new(&mut scene, ComponentIndex(0)), PropertyIndex::Scalar, &mut input)
        .unwrap();

    assert_eq!(scene.components[0].label, "z".repeat(MAX_STRING_SIZE - 1));
    assert_eq!(input.position(), MAX_STRING_SIZE);
    assert_eq!(input.read_i32(), Ok(77));
}

#[test]
fn file_and_resource_use_the_string_wire_format() {
    let mut scene = TestScene::with_components(1);
    scene.components[0].label = "textures/crate.png".into();
    scene.components[0].script = "textures/crate.png".into();
    scene.components[0].texture = "textures/crate.png".into();
    let cmp = ComponentRef::new(&scene, ComponentIndex(0));

    let plain = property("label").encode(cmp, PropertyIndex::Scalar);
    assert_eq!(property("script").encode(cmp, PropertyIndex::Scalar), plain);
    assert_eq!(property("texture").encode(cmp, PropertyIndex::Scalar), plain);
}

#[test]
fn file_and_resource_expose_their_tags() {
    let script = property("script");
    assert_eq!(script.kind(), PropertyKind::File);
    let PropertyBody::File(file) = script.body() else {
        panic!("script is a file");
    };
    assert_eq!(file.file_type(), "*.lua");

    let texture = property("texture");
    assert_eq!(texture.kind(), PropertyKind::Resource);
    let PropertyBody::Resource(resource) = texture.body() else {
        panic!("texture is a resource");
    };
    assert_eq!(resource.resource_type(), TEXTURE_RESOURCE);
    assert_eq!(resource.file().file_type(), "*.png");
}

#[test]
fn invalid_utf8_is_replaced() {
    let mut scene = TestScene::with_components(1);
    property("label")
        .decode(
            ComponentMut::new(&mut scene, ComponentIndex(0)),
            PropertyIndex::Scalar,
            &[b'o', 0xff, b'k', 0],
        )
        .unwrap();
    assert_eq!(scene.components[0].label, "o\u{fffd}k");
}
