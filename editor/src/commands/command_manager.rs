// editor/src/commands/command_manager.rs
use reflect_core::blob::BlobError;
use reflect_core::ecs::scene::Scene;
use reflect_core::onscreen_error;
use std::fmt::Debug;

/// Trait for every undoable command.
pub trait EditorCommand: Debug {
    fn execute(&mut self, scene: &mut dyn Scene) -> Result<(), BlobError>;
    fn undo(&mut self, scene: &mut dyn Scene) -> Result<(), BlobError>;
}

/// Stores and manages undo/redo stacks.
#[derive(Default)]
pub struct CommandManager {
    pending: Vec<Box<dyn EditorCommand>>,
    undo_stack: Vec<Box<dyn EditorCommand>>,
    redo_stack: Vec<Box<dyn EditorCommand>>,
}

impl CommandManager {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queues the command until the next `apply_all`.
    pub fn push(&mut self, command: Box<dyn EditorCommand>) {
        self.redo_stack.clear();
        self.pending.push(command);
    }

    /// Executes queued commands in the order they were pushed.
    /// A command that fails is logged and dropped.
    pub fn apply_all(&mut self, scene: &mut dyn Scene) {
        for mut command in std::mem::take(&mut self.pending) {
            match command.execute(scene) {
                Ok(()) => self.undo_stack.push(command),
                Err(e) => onscreen_error!("Could not apply {command:?}: {e}."),
            }
        }
    }

    /// Undo a command on the undo stack and push it onto the redo stack.
    pub fn undo(&mut self, scene: &mut dyn Scene) {
        if let Some(mut command) = self.undo_stack.pop() {
            match command.undo(scene) {
                Ok(()) => self.redo_stack.push(command),
                Err(e) => onscreen_error!("Could not undo {command:?}: {e}."),
            }
        }
    }

    /// Redo a command on the redo stack and push it onto the undo stack.
    pub fn redo(&mut self, scene: &mut dyn Scene) {
        if let Some(mut command) = self.redo_stack.pop() {
            match command.execute(scene) {
                Ok(()) => self.undo_stack.push(command),
                Err(e) => onscreen_error!("Could not redo {command:?}: {e}."),
            }
        }
    }

    pub fn can_undo(&self) -> bool {
        !self.undo_stack.is_empty()
    }

    pub fn can_redo(&self) -> bool {
        !self.redo_stack.is_empty()
    }
}
