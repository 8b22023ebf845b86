// editor/src/demo_scene.rs
//! Particle emitters, the component type the editor binary works on.
use glam::{Vec2, Vec3};
use reflect_core::ecs::component::ComponentIndex;
use reflect_core::reflect::descriptor::PropertyDescriptor;
use reflect_core::reflect::scalar::DecimalRange;
use reflect_core::reflect::string::ResourceType;
use reflect_core::{impl_scene, register_component_type};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter};

pub const EMITTER_TYPE: &str = "particle_emitter";
pub const FADE_SAMPLES: usize = 8;
pub const TEXTURE_RESOURCE: ResourceType = ResourceType(1);

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum BlendMode {
    Alpha,
    Additive,
    Multiply,
}

/// Extra particles spawned at a fixed time of the cycle.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Burst {
    pub time: f32,
    pub count: i32,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Emitter {
    pub spawn_rate: i32,
    pub looping: bool,
    pub name: String,
    pub size: Vec2,
    pub gravity: Vec3,
    pub start_color: Vec3,
    pub lifetime: f32,
    pub blend_mode: i32,
    pub script: String,
    pub texture: String,
    pub fade: [f32; FADE_SAMPLES],
    pub bursts: Vec<Burst>,
}

impl Default for Emitter {
    fn default() -> Self {
        Self {
            spawn_rate: 10,
            looping: true,
            name: String::new(),
            size: Vec2::ONE,
            gravity: Vec3::new(0.0, -9.81, 0.0),
            start_color: Vec3::ONE,
            lifetime: 1.0,
            blend_mode: BlendMode::Alpha as i32,
            script: String::new(),
            texture: String::new(),
            fade: [1.0; FADE_SAMPLES],
            bursts: Vec::new(),
        }
    }
}

impl Emitter {
    /// Slow grey smoke that fades out linearly.
    pub fn smoke() -> Self {
        let mut fade = [0.0; FADE_SAMPLES];
        for (i, sample) in fade.iter_mut().enumerate() {
            *sample = 1.0 - i as f32 / (FADE_SAMPLES - 1) as f32;
        }
        Self {
            spawn_rate: 40,
            name: "chimney_smoke".into(),
            size: Vec2::new(0.5, 0.5),
            gravity: Vec3::new(0.0, 0.4, 0.0),
            start_color: Vec3::splat(0.6),
            lifetime: 4.5,
            script: "scripts/smoke.lua".into(),
            texture: "textures/smoke.png".into(),
            fade,
            bursts: vec![
                Burst { time: 0.0, count: 12 },
                Burst { time: 2.5, count: 4 },
            ],
            ..Self::default()
        }
    }
}

pub struct EmitterScene {
    pub emitters: Vec<Emitter>,
    blend_modes: Vec<String>,
}

impl_scene!(EmitterScene);

impl Default for EmitterScene {
    fn default() -> Self {
        Self::new()
    }
}

impl EmitterScene {
    pub fn new() -> Self {
        Self {
            emitters: Vec::new(),
            blend_modes: BlendMode::iter().map(|mode| mode.to_string()).collect(),
        }
    }

    pub fn add_emitter(&mut self, emitter: Emitter) -> ComponentIndex {
        self.emitters.push(emitter);
        ComponentIndex(self.emitters.len() - 1)
    }

    fn emitter(&self, cmp: ComponentIndex) -> &Emitter {
        &self.emitters[*cmp]
    }

    fn emitter_mut(&mut self, cmp: ComponentIndex) -> &mut Emitter {
        &mut self.emitters[*cmp]
    }

    fn spawn_rate(&self, cmp: ComponentIndex) -> i32 {
        self.emitter(cmp).spawn_rate
    }
    fn set_spawn_rate(&mut self, cmp: ComponentIndex, value: i32) {
        self.emitter_mut(cmp).spawn_rate = value;
    }

    fn looping(&self, cmp: ComponentIndex) -> bool {
        self.emitter(cmp).looping
    }
    fn set_looping(&mut self, cmp: ComponentIndex, value: bool) {
        self.emitter_mut(cmp).looping = value;
    }

    fn name(&self, cmp: ComponentIndex) -> &str {
        &self.emitter(cmp).name
    }
    fn set_name(&mut self, cmp: ComponentIndex, value: &str) {
        self.emitter_mut(cmp).name = value.to_string();
    }

    fn size(&self, cmp: ComponentIndex) -> Vec2 {
        self.emitter(cmp).size
    }
    fn set_size(&mut self, cmp: ComponentIndex, value: Vec2) {
        self.emitter_mut(cmp).size = value;
    }

    fn gravity(&self, cmp: ComponentIndex) -> Vec3 {
        self.emitter(cmp).gravity
    }
    fn set_gravity(&mut self, cmp: ComponentIndex, value: Vec3) {
        self.emitter_mut(cmp).gravity = value;
    }

    fn start_color(&self, cmp: ComponentIndex) -> Vec3 {
        self.emitter(cmp).start_color
    }
    fn set_start_color(&mut self, cmp: ComponentIndex, value: Vec3) {
        self.emitter_mut(cmp).start_color = value;
    }

    fn lifetime(&self, cmp: ComponentIndex) -> f32 {
        self.emitter(cmp).lifetime
    }
    fn set_lifetime(&mut self, cmp: ComponentIndex, value: f32) {
        self.emitter_mut(cmp).lifetime = value;
    }

    fn blend_mode(&self, cmp: ComponentIndex) -> i32 {
        self.emitter(cmp).blend_mode
    }
    fn set_blend_mode(&mut self, cmp: ComponentIndex, value: i32) {
        self.emitter_mut(cmp).blend_mode = value;
    }
    fn blend_mode_count(&self) -> usize {
        self.blend_modes.len()
    }
    fn blend_mode_name(&self, index: usize) -> &str {
        &self.blend_modes[index]
    }

    fn script(&self, cmp: ComponentIndex) -> &str {
        &self.emitter(cmp).script
    }
    fn set_script(&mut self, cmp: ComponentIndex, value: &str) {
        self.emitter_mut(cmp).script = value.to_string();
    }

    fn texture(&self, cmp: ComponentIndex) -> &str {
        &self.emitter(cmp).texture
    }
    fn set_texture(&mut self, cmp: ComponentIndex, value: &str) {
        self.emitter_mut(cmp).texture = value.to_string();
    }

    fn fade_sample(&self, cmp: ComponentIndex, index: usize) -> f32 {
        self.emitter(cmp).fade[index]
    }
    fn set_fade_sample(&mut self, cmp: ComponentIndex, index: usize, value: f32) {
        self.emitter_mut(cmp).fade[index] = value;
    }

    fn burst_count(&self, cmp: ComponentIndex) -> usize {
        self.emitter(cmp).bursts.len()
    }
    fn add_burst(&mut self, cmp: ComponentIndex) {
        self.emitter_mut(cmp).bursts.push(Burst::default());
    }
    fn remove_burst(&mut self, cmp: ComponentIndex, index: usize) {
        self.emitter_mut(cmp).bursts.remove(index);
    }
    fn burst_time(&self, cmp: ComponentIndex, index: usize) -> f32 {
        self.emitter(cmp).bursts[index].time
    }
    fn set_burst_time(&mut self, cmp: ComponentIndex, index: usize, value: f32) {
        self.emitter_mut(cmp).bursts[index].time = value;
    }
    fn burst_particles(&self, cmp: ComponentIndex, index: usize) -> i32 {
        self.emitter(cmp).bursts[index].count
    }
    fn set_burst_particles(&mut self, cmp: ComponentIndex, index: usize, value: i32) {
        self.emitter_mut(cmp).bursts[index].count = value;
    }
}

/// Wire layout of a particle emitter.
pub fn emitter_properties() -> Vec<PropertyDescriptor> {
    vec![
        PropertyDescriptor::int("spawn_rate", EmitterScene::spawn_rate, EmitterScene::set_spawn_rate)
            .with_limits(0, 1000),
        PropertyDescriptor::bool("looping", EmitterScene::looping, EmitterScene::set_looping),
        PropertyDescriptor::string("name", EmitterScene::name, EmitterScene::set_name),
        PropertyDescriptor::vec2("size", EmitterScene::size, EmitterScene::set_size),
        PropertyDescriptor::vec3("gravity", EmitterScene::gravity, EmitterScene::set_gravity),
        PropertyDescriptor::color("start_color", EmitterScene::start_color, EmitterScene::set_start_color),
        PropertyDescriptor::decimal(
            "lifetime",
            EmitterScene::lifetime,
            EmitterScene::set_lifetime,
            DecimalRange::new(0.0, 60.0, 0.1),
        ),
        PropertyDescriptor::enumeration(
            "blend_mode",
            EmitterScene::blend_mode,
            EmitterScene::set_blend_mode,
            EmitterScene::blend_mode_count,
            EmitterScene::blend_mode_name,
        ),
        PropertyDescriptor::file("script", EmitterScene::script, EmitterScene::set_script, "*.lua"),
        PropertyDescriptor::resource(
            "texture",
            EmitterScene::texture,
            EmitterScene::set_texture,
            "*.png",
            TEXTURE_RESOURCE,
        ),
        PropertyDescriptor::sampled_function::<EmitterScene, FADE_SAMPLES>(
            "fade",
            EmitterScene::fade_sample,
            EmitterScene::set_fade_sample,
            0.0,
            1.0,
        ),
        PropertyDescriptor::array(
            "bursts",
            EmitterScene::burst_count,
            EmitterScene::add_burst,
            EmitterScene::remove_burst,
            vec![
                PropertyDescriptor::decimal_element(
                    "time",
                    EmitterScene::burst_time,
                    EmitterScene::set_burst_time,
                    DecimalRange::new(0.0, 60.0, 0.05),
                ),
                PropertyDescriptor::int_element(
                    "count",
                    EmitterScene::burst_particles,
                    EmitterScene::set_burst_particles,
                ),
            ],
        ),
    ]
}

register_component_type!(EMITTER_TYPE, emitter_properties);
