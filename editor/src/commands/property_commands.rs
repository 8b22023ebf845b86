// editor/src/commands/property_commands.rs
use crate::commands::command_manager::EditorCommand;
use reflect_core::blob::{BlobError, InputBlob, OutputBlob};
use reflect_core::ecs::component::{ComponentIndex, ComponentMut, ComponentRef, PropertyIndex};
use reflect_core::ecs::component_registry::ComponentType;
use reflect_core::ecs::scene::Scene;
use reflect_core::reflect::descriptor::PropertyDescriptor;
use reflect_core::reflect::record::{read_record, write_record};

/// Writes new bytes into one property and keeps the old bytes for undo.
#[derive(Debug)]
pub struct SetPropertyCmd {
    property: &'static PropertyDescriptor,
    cmp: ComponentIndex,
    index: PropertyIndex,
    new_value: Vec<u8>,
    old_value: Option<Vec<u8>>,
}

impl SetPropertyCmd {
    /// `new_value` must be in the wire format of `property`.
    pub fn new(
        property: &'static PropertyDescriptor,
        cmp: ComponentIndex,
        index: PropertyIndex,
        new_value: Vec<u8>,
    ) -> Self {
        Self {
            property,
            cmp,
            index,
            new_value,
            old_value: None,
        }
    }

    /// Builds the new value with a blob writer.
    pub fn with_value(
        property: &'static PropertyDescriptor,
        cmp: ComponentIndex,
        index: PropertyIndex,
        write: impl FnOnce(&mut OutputBlob),
    ) -> Self {
        let mut out = OutputBlob::new();
        write(&mut out);
        Self::new(property, cmp, index, out.into_bytes())
    }
}

impl EditorCommand for SetPropertyCmd {
    fn execute(&mut self, scene: &mut dyn Scene) -> Result<(), BlobError> {
        let old_value = match self.old_value.take() {
            Some(bytes) => bytes,
            None => self.property.encode(ComponentRef::new(&*scene, self.cmp), self.index),
        };

        let applied = self
            .property
            .decode(ComponentMut::new(&mut *scene, self.cmp), self.index, &self.new_value);
        let rollback = match applied {
            // Put back whatever the failed read already changed.
            Err(_) => self.property.decode(ComponentMut::new(scene, self.cmp), self.index, &old_value),
            Ok(()) => Ok(()),
        };
        self.old_value = Some(old_value);
        rollback.and(applied)
    }

    fn undo(&mut self, scene: &mut dyn Scene) -> Result<(), BlobError> {
        match &self.old_value {
            Some(bytes) => self.property.decode(ComponentMut::new(scene, self.cmp), self.index, bytes),
            None => Ok(()),
        }
    }
}

/// Replaces a whole component with a stored record.
#[derive(Debug)]
pub struct RestoreComponentCmd {
    component_type: &'static ComponentType,
    cmp: ComponentIndex,
    record: Vec<u8>,
    previous: Option<Vec<u8>>,
}

impl RestoreComponentCmd {
    pub fn new(component_type: &'static ComponentType, cmp: ComponentIndex, record: Vec<u8>) -> Self {
        Self {
            component_type,
            cmp,
            record,
            previous: None,
        }
    }
}

fn apply_record(
    component_type: &ComponentType,
    scene: &mut dyn Scene,
    cmp: ComponentIndex,
    bytes: &[u8],
) -> Result<(), BlobError> {
    let mut input = InputBlob::new(bytes);
    read_record(component_type.properties(), ComponentMut::new(scene, cmp), &mut input)
}

impl EditorCommand for RestoreComponentCmd {
    fn execute(&mut self, scene: &mut dyn Scene) -> Result<(), BlobError> {
        let previous = match self.previous.take() {
            Some(bytes) => bytes,
            None => {
                let mut out = OutputBlob::new();
                write_record(
                    self.component_type.properties(),
                    ComponentRef::new(&*scene, self.cmp),
                    &mut out,
                );
                out.into_bytes()
            }
        };

        let applied = apply_record(self.component_type, &mut *scene, self.cmp, &self.record);
        let rollback = match applied {
            Err(_) => apply_record(self.component_type, scene, self.cmp, &previous),
            Ok(()) => Ok(()),
        };
        self.previous = Some(previous);
        rollback.and(applied)
    }

    fn undo(&mut self, scene: &mut dyn Scene) -> Result<(), BlobError> {
        match &self.previous {
            Some(bytes) => apply_record(self.component_type, scene, self.cmp, bytes),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::commands::command_manager::CommandManager;
    use crate::demo_scene::{Burst, EMITTER_TYPE, Emitter, EmitterScene};
    use reflect_core::ecs::component_registry::component_type;

    fn emitter_type() -> &'static ComponentType {
        component_type(EMITTER_TYPE).expect("emitter registered")
    }

    fn property(name: &str) -> &'static PropertyDescriptor {
        emitter_type().property(name).expect("emitter property")
    }

    #[test]
    fn set_property_applies_and_undoes() {
        let mut scene = EmitterScene::new();
        let smoke = scene.add_emitter(Emitter::smoke());
        let mut manager = CommandManager::new();

        manager.push(Box::new(SetPropertyCmd::with_value(
            property("spawn_rate"),
            smoke,
            PropertyIndex::Scalar,
            |out| out.write_i32(250),
        )));
        manager.apply_all(&mut scene);
        assert_eq!(scene.emitters[0].spawn_rate, 250);

        manager.undo(&mut scene);
        assert_eq!(scene.emitters[0].spawn_rate, 40);

        manager.redo(&mut scene);
        assert_eq!(scene.emitters[0].spawn_rate, 250);
    }

    #[test]
    fn set_array_item_through_element_index() {
        let mut scene = EmitterScene::new();
        let smoke = scene.add_emitter(Emitter::smoke());
        let bursts = property("bursts");
        let reflect_core::reflect::PropertyBody::Array(array) = bursts.body() else {
            panic!("bursts is an array");
        };
        let count: &'static PropertyDescriptor = &array.children()[1];

        let mut cmd = SetPropertyCmd::with_value(count, smoke, PropertyIndex::Element(1), |out| {
            out.write_i32(99)
        });
        cmd.execute(&mut scene).unwrap();
        assert_eq!(scene.emitters[0].bursts[1].count, 99);
        assert_eq!(scene.emitters[0].bursts[0].count, 12);

        cmd.undo(&mut scene).unwrap();
        assert_eq!(scene.emitters[0].bursts[1].count, 4);
    }

    #[test]
    fn truncated_value_leaves_the_array_unchanged() {
        let mut scene = EmitterScene::new();
        let smoke = scene.add_emitter(Emitter::smoke());

        // Announces three bursts but carries only one.
        let mut cmd = SetPropertyCmd::with_value(property("bursts"), smoke, PropertyIndex::Scalar, |out| {
            out.write_i32(3);
            out.write_f32(1.0);
            out.write_i32(5);
        });
        assert!(cmd.execute(&mut scene).is_err());
        assert_eq!(scene.emitters[0].bursts, Emitter::smoke().bursts);
    }

    #[test]
    fn failed_execute_keeps_the_old_value_for_undo() {
        let mut scene = EmitterScene::new();
        let smoke = scene.add_emitter(Emitter::smoke());

        let mut cmd = SetPropertyCmd::with_value(property("spawn_rate"), smoke, PropertyIndex::Scalar, |out| {
            out.write_u8(1)
        });
        assert!(cmd.execute(&mut scene).is_err());
        assert_eq!(cmd.old_value, Some(40i32.to_le_bytes().to_vec()));

        scene.emitters[0].spawn_rate = 7;
        cmd.undo(&mut scene).unwrap();
        assert_eq!(scene.emitters[0].spawn_rate, 40);
    }

    #[test]
    fn failed_restore_keeps_the_previous_record() {
        let mut scene = EmitterScene::new();
        let smoke = scene.add_emitter(Emitter::smoke());

        let mut cmd = RestoreComponentCmd::new(emitter_type(), smoke, vec![0u8; 3]);
        assert!(cmd.execute(&mut scene).is_err());
        assert_eq!(scene.emitters[0], Emitter::smoke());
        assert!(cmd.previous.is_some());
    }

    #[test]
    fn restore_component_swaps_whole_records() {
        let mut scene = EmitterScene::new();
        let target = scene.add_emitter(Emitter::default());

        let mut donor = EmitterScene::new();
        let smoke = donor.add_emitter(Emitter::smoke());
        let mut out = OutputBlob::new();
        write_record(emitter_type().properties(), ComponentRef::new(&donor, smoke), &mut out);

        let mut cmd = RestoreComponentCmd::new(emitter_type(), target, out.into_bytes());
        cmd.execute(&mut scene).unwrap();
        assert_eq!(scene.emitters[0], Emitter::smoke());

        cmd.undo(&mut scene).unwrap();
        assert_eq!(scene.emitters[0], Emitter::default());
        assert!(scene.emitters[0].bursts.is_empty());

        cmd.execute(&mut scene).unwrap();
        assert_eq!(scene.emitters[0].bursts[0], Burst { time: 0.0, count: 12 });
    }
}
