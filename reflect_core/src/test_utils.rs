// reflect_core/src/test_utils.rs
//! Small host scene used by the tests of this crate and of the editor.
use crate::ecs::component::ComponentIndex;
use crate::impl_scene;
use crate::reflect::descriptor::PropertyDescriptor;
use crate::reflect::scalar::DecimalRange;
use crate::reflect::string::ResourceType;
use glam::{Vec2, Vec3, Vec4};

pub const CURVE_SAMPLES: usize = 8;
pub const TEXTURE_RESOURCE: ResourceType = ResourceType(7);

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestItem {
    pub id: i32,
    pub tag: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct TestComponent {
    pub count: i32,
    pub visible: bool,
    pub label: String,
    pub offset: Vec2,
    pub position: Vec3,
    pub rect: Vec4,
    pub tint: Vec3,
    pub speed: f32,
    pub mode: i32,
    pub script: String,
    pub texture: String,
    pub curve: [f32; CURVE_SAMPLES],
    pub layers: Vec<i32>,
    pub items: Vec<TestItem>,
}

/// Change made to an item list, in call order.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ItemOp {
    Add,
    Remove(usize),
}

#[derive(Debug, Default)]
pub struct TestScene {
    pub components: Vec<TestComponent>,
    pub modes: Vec<String>,
    pub item_ops: Vec<ItemOp>,
}

impl_scene!(TestScene);

impl TestScene {
    pub fn with_components(count: usize) -> Self {
        Self {
            components: vec![TestComponent::default(); count],
            modes: vec!["Off".into(), "Loop".into(), "PingPong".into()],
            item_ops: Vec::new(),
        }
    }

    fn component(&self, cmp: ComponentIndex) -> &TestComponent {
        &self.components[*cmp]
    }

    fn component_mut(&mut self, cmp: ComponentIndex) -> &mut TestComponent {
        &mut self.components[*cmp]
    }

    pub fn count(&self, cmp: ComponentIndex) -> i32 {
        self.component(cmp).count
    }
    pub fn set_count(&mut self, cmp: ComponentIndex, value: i32) {
        self.component_mut(cmp).count = value;
    }

    pub fn visible(&self, cmp: ComponentIndex) -> bool {
        self.component(cmp).visible
    }
    pub fn set_visible(&mut self, cmp: ComponentIndex, value: bool) {
        self.component_mut(cmp).visible = value;
    }

    pub fn label(&self, cmp: ComponentIndex) -> &str {
        &self.component(cmp).label
    }
    pub fn set_label(&mut self, cmp: ComponentIndex, value: &str) {
        self.component_mut(cmp).label = value.to_string();
    }

    pub fn offset(&self, cmp: ComponentIndex) -> Vec2 {
        self.component(cmp).offset
    }
    pub fn set_offset(&mut self, cmp: ComponentIndex, value: Vec2) {
        self.component_mut(cmp).offset = value;
    }

    pub fn position(&self, cmp: ComponentIndex) -> Vec3 {
        self.component(cmp).position
    }
    pub fn set_position(&mut self, cmp: ComponentIndex, value: Vec3) {
        self.component_mut(cmp).position = value;
    }

    pub fn rect(&self, cmp: ComponentIndex) -> Vec4 {
        self.component(cmp).rect
    }
    pub fn set_rect(&mut self, cmp: ComponentIndex, value: Vec4) {
        self.component_mut(cmp).rect = value;
    }

    pub fn tint(&self, cmp: ComponentIndex) -> Vec3 {
        self.component(cmp).tint
    }
    pub fn set_tint(&mut self, cmp: ComponentIndex, value: Vec3) {
        self.component_mut(cmp).tint = value;
    }

    pub fn speed(&self, cmp: ComponentIndex) -> f32 {
        self.component(cmp).speed
    }
    pub fn set_speed(&mut self, cmp: ComponentIndex, value: f32) {
        self.component_mut(cmp).speed = value;
    }

    pub fn mode(&self, cmp: ComponentIndex) -> i32 {
        self.component(cmp).mode
    }
    pub fn set_mode(&mut self, cmp: ComponentIndex, value: i32) {
        self.component_mut(cmp).mode = value;
    }
    pub fn mode_count(&self) -> usize {
        self.modes.len()
    }
    pub fn mode_name(&self, index: usize) -> &str {
        &self.modes[index]
    }

    pub fn script(&self, cmp: ComponentIndex) -> &str {
        &self.component(cmp).script
    }
    pub fn set_script(&mut self, cmp: ComponentIndex, value: &str) {
        self.component_mut(cmp).script = value.to_string();
    }

    pub fn texture(&self, cmp: ComponentIndex) -> &str {
        &self.component(cmp).texture
    }
    pub fn set_texture(&mut self, cmp: ComponentIndex, value: &str) {
        self.component_mut(cmp).texture = value.to_string();
    }

    pub fn curve_sample(&self, cmp: ComponentIndex, index: usize) -> f32 {
        self.component(cmp).curve[index]
    }
    pub fn set_curve_sample(&mut self, cmp: ComponentIndex, index: usize, value: f32) {
        self.component_mut(cmp).curve[index] = value;
    }

    pub fn layer(&self, cmp: ComponentIndex, index: usize) -> i32 {
        self.component(cmp).layers[index]
    }
    pub fn set_layer(&mut self, cmp: ComponentIndex, index: usize, value: i32) {
        self.component_mut(cmp).layers[index] = value;
    }

    pub fn item_count(&self, cmp: ComponentIndex) -> usize {
        self.component(cmp).items.len()
    }
    pub fn add_item(&mut self, cmp: ComponentIndex) {
        self.item_ops.push(ItemOp::Add);
        self.component_mut(cmp).items.push(TestItem::default());
    }
    pub fn remove_item(&mut self, cmp: ComponentIndex, index: usize) {
        self.item_ops.push(ItemOp::Remove(index));
        self.component_mut(cmp).items.remove(index);
    }
    pub fn item_id(&self, cmp: ComponentIndex, index: usize) -> i32 {
        self.component(cmp).items[index].id
    }
    pub fn set_item_id(&mut self, cmp: ComponentIndex, index: usize, value: i32) {
        self.component_mut(cmp).items[index].id = value;
    }
    pub fn item_tag(&self, cmp: ComponentIndex, index: usize) -> &str {
        &self.component(cmp).items[index].tag
    }
    pub fn set_item_tag(&mut self, cmp: ComponentIndex, index: usize, value: &str) {
        self.component_mut(cmp).items[index].tag = value.to_string();
    }
}

/// `id` then `tag`, the layout of one item.
pub fn item_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::int_element("id", TestScene::item_id, TestScene::set_item_id),
        PropertyDescriptor::string_element("tag", TestScene::item_tag, TestScene::set_item_tag),
    ]
}

pub fn items_property() -> PropertyDescriptor {
    PropertyDescriptor::array(
        "items",
        TestScene::item_count,
        TestScene::add_item,
        TestScene::remove_item,
        item_properties(),
    )
}

/// One descriptor of every kind.
pub fn test_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::int("count", TestScene::count, TestScene::set_count).with_limits(0, 100),
        PropertyDescriptor::bool("visible", TestScene::visible, TestScene::set_visible),
        PropertyDescriptor::string("label", TestScene::label, TestScene::set_label),
        PropertyDescriptor::vec2("offset", TestScene::offset, TestScene::set_offset),
        PropertyDescriptor::vec3("position", TestScene::position, TestScene::set_position),
        PropertyDescriptor::vec4("rect", TestScene::rect, TestScene::set_rect),
        PropertyDescriptor::color("tint", TestScene::tint, TestScene::set_tint),
        PropertyDescriptor::decimal(
            "speed",
            TestScene::speed,
            TestScene::set_speed,
            DecimalRange::new(0.0, 10.0, 0.5),
        ),
        PropertyDescriptor::enumeration(
            "mode",
            TestScene::mode,
            TestScene::set_mode,
            TestScene::mode_count,
            TestScene::mode_name,
        ),
        PropertyDescriptor::file("script", TestScene::script, TestScene::set_script, "*.lua"),
        PropertyDescriptor::resource(
            "texture",
            TestScene::texture,
            TestScene::set_texture,
            "*.png",
            TEXTURE_RESOURCE,
        ),
        PropertyDescriptor::sampled_function::<TestScene, CURVE_SAMPLES>(
            "curve",
            TestScene::curve_sample,
            TestScene::set_curve_sample,
            0.0,
            1.0,
        ),
        items_property(),
    ]
}

/// A component with every field set to something other than its default.
pub fn sample_component() -> TestComponent {
    TestComponent {
        count: 42,
        visible: true,
        label: "crate".into(),
        offset: Vec2::new(1.5, -2.0),
        position: Vec3::new(0.1, 0.2, 0.3),
        rect: Vec4::new(1.0, 2.0, 3.0, 4.0),
        tint: Vec3::new(1.0, 0.5, 0.25),
        speed: 3.75,
        mode: 2,
        script: "scripts/crate.lua".into(),
        texture: "textures/crate.png".into(),
        curve: [0.0, 0.125, 0.25, 0.375, 0.5, 0.625, 0.75, 1.0],
        layers: vec![3, 1, 4],
        items: vec![
            TestItem { id: 7, tag: "lid".into() },
            TestItem { id: 9, tag: "hinge".into() },
        ],
    }
}
