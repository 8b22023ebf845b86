// editor/src/main.rs
use crate::commands::command_manager::CommandManager;
use crate::commands::property_commands::{RestoreComponentCmd, SetPropertyCmd};
use crate::demo_scene::{EMITTER_TYPE, Emitter, EmitterScene};
use crate::gui::inspector::property_grid::{build_rows, format_rows};
use crate::storage::component_storage::{capture_component, load_snapshots, restore_component, save_snapshots};
use reflect_core::blob::OutputBlob;
use reflect_core::ecs::component::{ComponentMut, ComponentRef, PropertyIndex};
use reflect_core::ecs::component_registry::component_type;
use reflect_core::logging::logging::{init_file_logger, last_log};
use reflect_core::reflect::record::write_record;
use reflect_core::storage::editor_config::get_config;
use reflect_core::onscreen_info;
use std::error::Error;

mod commands;
mod demo_scene;
mod gui;
mod storage;

fn main() -> Result<(), Box<dyn Error>> {
    let config = get_config();
    let _logger = init_file_logger(&config)?;

    let emitter_type = component_type(EMITTER_TYPE).ok_or("Particle emitters are not registered.")?;
    let mut scene = EmitterScene::new();
    let smoke = scene.add_emitter(Emitter::smoke());

    println!("{}", format_rows(&build_rows(emitter_type.properties(), ComponentRef::new(&scene, smoke))));

    // Keep the original so it can be restored at the end.
    let mut original = OutputBlob::new();
    write_record(emitter_type.properties(), ComponentRef::new(&scene, smoke), &mut original);

    let spawn_rate = emitter_type.property("spawn_rate").ok_or("Emitters have no spawn rate.")?;
    let name = emitter_type.property("name").ok_or("Emitters have no name.")?;

    let mut commands = CommandManager::new();
    commands.push(Box::new(SetPropertyCmd::with_value(
        spawn_rate,
        smoke,
        PropertyIndex::Scalar,
        |out| out.write_i32(250),
    )));
    commands.push(Box::new(SetPropertyCmd::with_value(name, smoke, PropertyIndex::Scalar, |out| {
        out.write_bytes(b"factory_smoke\0")
    })));
    commands.apply_all(&mut scene);
    onscreen_info!("Edited '{}': {} particles/s.", scene.emitters[0].name, scene.emitters[0].spawn_rate);

    commands.undo(&mut scene);
    onscreen_info!("After undo: '{}'.", scene.emitters[0].name);
    commands.redo(&mut scene);
    if commands.can_undo() {
        onscreen_info!("After redo: '{}'.", scene.emitters[0].name);
    }

    let stored = capture_component(EMITTER_TYPE, ComponentRef::new(&scene, smoke), config.fingerprint_records)?;
    save_snapshots("demo", &[stored])?;
    let loaded = load_snapshots("demo")?;
    for stored in &loaded {
        let copy = scene.add_emitter(Emitter::default());
        restore_component(stored, ComponentMut::new(&mut scene, copy))?;
    }
    onscreen_info!("Reloaded {} stored components.", loaded.len());

    commands.push(Box::new(RestoreComponentCmd::new(emitter_type, smoke, original.into_bytes())));
    commands.apply_all(&mut scene);

    println!("{}", format_rows(&build_rows(emitter_type.properties(), ComponentRef::new(&scene, smoke))));
    println!("{}", last_log());
    Ok(())
}
