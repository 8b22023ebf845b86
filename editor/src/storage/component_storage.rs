// editor/src/storage/component_storage.rs
use reflect_core::blob::{BlobError, InputBlob, OutputBlob};
use reflect_core::ecs::component::{ComponentMut, ComponentRef};
use reflect_core::ecs::component_registry::component_type;
use reflect_core::reflect::record::{read_record, write_record};
use reflect_core::storage::editor_config::{app_dir, get_save_root};
use reflect_core::onscreen_info;
use ron::ser::{to_string_pretty, PrettyConfig};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Could not serialize snapshot: {0}")]
    Serialize(#[from] ron::Error),

    #[error("Could not parse snapshot: {0}")]
    Parse(#[from] ron::error::SpannedError),

    #[error("Unknown component type '{0}'")]
    UnknownType(String),

    #[error(transparent)]
    Blob(#[from] BlobError),

    #[error("Record of '{type_name}' left {remaining} bytes unread")]
    TrailingBytes { type_name: String, remaining: usize },
}

/// A component record tagged with its type, as saved on disk.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StoredComponent {
    pub type_name: String,
    /// Schema fingerprint of the type when the record was taken.
    #[serde(default)]
    pub fingerprint: Option<u64>,
    pub data: Vec<u8>,
}

/// Records every property of a component through the registered descriptors.
pub fn capture_component(
    type_name: &str,
    cmp: ComponentRef<'_>,
    fingerprint: bool,
) -> Result<StoredComponent, StorageError> {
    let ty = component_type(type_name).ok_or_else(|| StorageError::UnknownType(type_name.to_string()))?;

    let mut out = OutputBlob::new();
    write_record(ty.properties(), cmp, &mut out);

    Ok(StoredComponent {
        type_name: ty.type_name().to_string(),
        fingerprint: fingerprint.then(|| ty.fingerprint()),
        data: out.into_bytes(),
    })
}

/// Writes a stored record back into a component of the same type.
///
/// A stored fingerprint is checked before anything is written. A record that
/// fails to read leaves the component as it was.
pub fn restore_component(stored: &StoredComponent, mut cmp: ComponentMut<'_>) -> Result<(), StorageError> {
    let ty = component_type(&stored.type_name)
        .ok_or_else(|| StorageError::UnknownType(stored.type_name.clone()))?;

    if let Some(found) = stored.fingerprint {
        if found != ty.fingerprint() {
            return Err(BlobError::SchemaMismatch { expected: ty.fingerprint(), found }.into());
        }
    }

    let mut previous = OutputBlob::new();
    write_record(ty.properties(), cmp.shared(), &mut previous);

    let mut input = InputBlob::new(&stored.data);
    let restored = match read_record(ty.properties(), cmp.reborrow(), &mut input) {
        Ok(()) if input.is_at_end() => return Ok(()),
        Ok(()) => StorageError::TrailingBytes {
            type_name: stored.type_name.clone(),
            remaining: input.remaining(),
        },
        Err(e) => e.into(),
    };

    // Put the component back the way it was.
    read_record(ty.properties(), cmp, &mut InputBlob::new(previous.as_bytes()))?;
    Err(restored)
}

/// Folder snapshots go into: the configured save root, or `snapshots/`
/// next to the editor config.
pub fn snapshot_dir() -> PathBuf {
    get_save_root().unwrap_or_else(|| app_dir().join("snapshots"))
}

/// Saves snapshots as `<name>.ron` in the snapshot folder.
pub fn save_snapshots(name: &str, components: &[StoredComponent]) -> Result<PathBuf, StorageError> {
    let path = snapshot_dir().join(format!("{name}.ron"));
    save_snapshots_to(&path, components)?;
    onscreen_info!("Saved {} components to {}.", components.len(), path.display());
    Ok(path)
}

pub fn save_snapshots_to(path: &Path, components: &[StoredComponent]) -> Result<(), StorageError> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let ron = to_string_pretty(components, PrettyConfig::new())?;
    fs::write(path, ron)?;
    Ok(())
}

/// Loads `<name>.ron` from the snapshot folder.
pub fn load_snapshots(name: &str) -> Result<Vec<StoredComponent>, StorageError> {
    load_snapshots_from(&snapshot_dir().join(format!("{name}.ron")))
}

pub fn load_snapshots_from(path: &Path) -> Result<Vec<StoredComponent>, StorageError> {
    let ron = fs::read_to_string(path)?;
    Ok(ron::from_str(&ron)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::demo_scene::{EMITTER_TYPE, Emitter, EmitterScene};

    fn temp_snapshot_path(name: &str) -> PathBuf {
        std::env::temp_dir()
            .join(format!("reflect_editor_{}_{name}", std::process::id()))
            .join("snapshot.ron")
    }

    fn captured_smoke(fingerprint: bool) -> StoredComponent {
        let mut scene = EmitterScene::new();
        let smoke = scene.add_emitter(Emitter::smoke());
        capture_component(EMITTER_TYPE, ComponentRef::new(&scene, smoke), fingerprint).unwrap()
    }

    #[test]
    fn capture_then_restore() {
        let stored = captured_smoke(true);
        assert_eq!(stored.type_name, EMITTER_TYPE);
        assert!(stored.fingerprint.is_some());

        let mut scene = EmitterScene::new();
        let target = scene.add_emitter(Emitter::default());
        restore_component(&stored, ComponentMut::new(&mut scene, target)).unwrap();
        assert_eq!(scene.emitters[0], Emitter::smoke());
    }

    #[test]
    fn unknown_type_is_reported() {
        let scene = EmitterScene::new();
        let result = capture_component(
            "no_such_type",
            ComponentRef::new(&scene, reflect_core::ecs::component::ComponentIndex(0)),
            false,
        );
        assert!(matches!(result, Err(StorageError::UnknownType(name)) if name == "no_such_type"));
    }

    #[test]
    fn stale_fingerprint_is_rejected_untouched() {
        let mut stored = captured_smoke(true);
        stored.fingerprint = stored.fingerprint.map(|f| f ^ 1);

        let mut scene = EmitterScene::new();
        let target = scene.add_emitter(Emitter::default());
        let result = restore_component(&stored, ComponentMut::new(&mut scene, target));

        assert!(matches!(result, Err(StorageError::Blob(BlobError::SchemaMismatch { .. }))));
        assert_eq!(scene.emitters[0], Emitter::default());
    }

    #[test]
    fn trailing_bytes_are_reported() {
        let mut stored = captured_smoke(false);
        stored.data.extend_from_slice(&[1, 2, 3]);

        let mut scene = EmitterScene::new();
        let target = scene.add_emitter(Emitter::default());
        let result = restore_component(&stored, ComponentMut::new(&mut scene, target));
        assert!(matches!(result, Err(StorageError::TrailingBytes { remaining: 3, .. })));
        assert_eq!(scene.emitters[0], Emitter::default());
    }

    #[test]
    fn truncated_record_leaves_the_component_untouched() {
        let mut stored = captured_smoke(false);
        let len = stored.data.len();
        stored.data.truncate(len - 3);

        let mut scene = EmitterScene::new();
        let target = scene.add_emitter(Emitter::default());
        let result = restore_component(&stored, ComponentMut::new(&mut scene, target));

        assert!(matches!(result, Err(StorageError::Blob(BlobError::UnexpectedEnd { .. }))));
        assert_eq!(scene.emitters[0], Emitter::default());
    }

    #[test]
    fn snapshots_round_trip_through_ron() {
        let path = temp_snapshot_path("round_trip");
        let components = vec![captured_smoke(true), captured_smoke(false)];

        save_snapshots_to(&path, &components).unwrap();
        assert_eq!(load_snapshots_from(&path).unwrap(), components);
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }

    #[test]
    fn corrupt_snapshot_is_a_parse_error() {
        let path = temp_snapshot_path("corrupt");
        fs::create_dir_all(path.parent().unwrap()).unwrap();
        fs::write(&path, "[(type_name: 3").unwrap();

        assert!(matches!(load_snapshots_from(&path), Err(StorageError::Parse(_))));
        let _ = fs::remove_dir_all(path.parent().unwrap());
    }
}
