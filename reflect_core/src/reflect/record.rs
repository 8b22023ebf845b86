// reflect_core/src/reflect/record.rs
//! Whole-component records.
//!
//! A record is every descriptor of a component type written in list order,
//! with no per-field tag. Reader and writer must share the same list; the
//! fingerprinted variants prefix the record with a hash of that list so a
//! mismatch is caught before the host is touched.
use crate::blob::{BlobError, InputBlob, OutputBlob};
use crate::constants::FINGERPRINT_SIZE;
use crate::ecs::component::{ComponentMut, ComponentRef, PropertyIndex};
use crate::reflect::descriptor::{PropertyBody, PropertyDescriptor};

pub fn write_record(descriptors: &[PropertyDescriptor], cmp: ComponentRef<'_>, out: &mut OutputBlob) {
    for descriptor in descriptors {
        descriptor.write_from(cmp, PropertyIndex::Scalar, out);
    }
}

pub fn read_record(
    descriptors: &[PropertyDescriptor],
    mut cmp: ComponentMut<'_>,
    input: &mut InputBlob<'_>,
) -> Result<(), BlobError> {
    for descriptor in descriptors {
        descriptor.read_into(cmp.reborrow(), PropertyIndex::Scalar, input)?;
    }
    Ok(())
}

/// Hash of the names, kinds and shapes of a descriptor list.
pub fn schema_fingerprint(descriptors: &[PropertyDescriptor]) -> u64 {
    let mut hasher = blake3::Hasher::new();
    hash_descriptors(&mut hasher, descriptors);

    let hash = hasher.finalize();
    let mut head = [0u8; FINGERPRINT_SIZE];
    head.copy_from_slice(&hash.as_bytes()[..FINGERPRINT_SIZE]);
    u64::from_le_bytes(head)
}

fn hash_descriptors(hasher: &mut blake3::Hasher, descriptors: &[PropertyDescriptor]) {
    hasher.update(&(descriptors.len() as u32).to_le_bytes());
    for descriptor in descriptors {
        let name = descriptor.name().as_bytes();
        hasher.update(&(name.len() as u32).to_le_bytes());
        hasher.update(name);
        hasher.update(&[descriptor.kind().code()]);

        match descriptor.body() {
            PropertyBody::SampledFunction(function) => {
                hasher.update(&(function.count() as u32).to_le_bytes());
            }
            PropertyBody::Array(array) => hash_descriptors(hasher, array.children()),
            _ => {}
        }
    }
}

pub fn write_fingerprinted_record(
    descriptors: &[PropertyDescriptor],
    cmp: ComponentRef<'_>,
    out: &mut OutputBlob,
) {
    out.write_u64(schema_fingerprint(descriptors));
    write_record(descriptors, cmp, out);
}

pub fn read_fingerprinted_record(
    descriptors: &[PropertyDescriptor],
    cmp: ComponentMut<'_>,
    input: &mut InputBlob<'_>,
) -> Result<(), BlobError> {
    let expected = schema_fingerprint(descriptors);
    let found = input.read_u64()?;
    if found != expected {
        log::warn!("Rejected record: fingerprint {found:#018x} does not match {expected:#018x}.");
        return Err(BlobError::SchemaMismatch { expected, found });
    }
    read_record(descriptors, cmp, input)
}
