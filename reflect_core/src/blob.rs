// reflect_core/src/blob.rs
use glam::{Vec2, Vec3, Vec4};
use thiserror::Error;

/// Errors that can occur while reading a property stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BlobError {
    /// The stream ended before a value could be read.
    #[error("Unexpected end of blob: needed {needed} bytes at offset {offset}, only {remaining} left")]
    UnexpectedEnd {
        offset: usize,
        needed: usize,
        remaining: usize,
    },

    /// An array record announced a negative item count.
    #[error("Array '{property}' announced a negative item count ({count})")]
    NegativeCount {
        property: &'static str,
        count: i32,
    },

    /// A fingerprinted record was written by a different descriptor list.
    #[error("Record schema mismatch: expected fingerprint {expected:#018x}, found {found:#018x}")]
    SchemaMismatch {
        expected: u64,
        found: u64,
    },
}

/// Append-only byte sink that properties are written into.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct OutputBlob {
    buffer: Vec<u8>,
}

impl OutputBlob {
    pub fn new() -> Self {
        Self { buffer: Vec::new() }
    }

    pub fn write_bytes(&mut self, bytes: &[u8]) {
        self.buffer.extend_from_slice(bytes);
    }

    pub fn write_u8(&mut self, value: u8) {
        self.buffer.push(value);
    }

    /// Bools take a single byte, `1` for true.
    pub fn write_bool(&mut self, value: bool) {
        self.buffer.push(value as u8);
    }

    pub fn write_i32(&mut self, value: i32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_u64(&mut self, value: u64) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_f32(&mut self, value: f32) {
        self.write_bytes(&value.to_le_bytes());
    }

    pub fn write_vec2(&mut self, value: Vec2) {
        self.write_f32(value.x);
        self.write_f32(value.y);
    }

    pub fn write_vec3(&mut self, value: Vec3) {
        self.write_f32(value.x);
        self.write_f32(value.y);
        self.write_f32(value.z);
    }

    pub fn write_vec4(&mut self, value: Vec4) {
        self.write_f32(value.x);
        self.write_f32(value.y);
        self.write_f32(value.z);
        self.write_f32(value.w);
    }

    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.buffer
    }
}

/// Sequential read cursor over a borrowed byte buffer.
#[derive(Debug, Clone)]
pub struct InputBlob<'a> {
    data: &'a [u8],
    pos: usize,
}

impl<'a> InputBlob<'a> {
    pub fn new(data: &'a [u8]) -> Self {
        Self { data, pos: 0 }
    }

    /// Consumes `count` bytes and returns them.
    pub fn read_bytes(&mut self, count: usize) -> Result<&'a [u8], BlobError> {
        if self.remaining() < count {
            return Err(BlobError::UnexpectedEnd {
                offset: self.pos,
                needed: count,
                remaining: self.remaining(),
            });
        }
        let bytes = &self.data[self.pos..self.pos + count];
        self.pos += count;
        Ok(bytes)
    }

    fn read_array<const N: usize>(&mut self) -> Result<[u8; N], BlobError> {
        let mut out = [0u8; N];
        out.copy_from_slice(self.read_bytes(N)?);
        Ok(out)
    }

    pub fn read_u8(&mut self) -> Result<u8, BlobError> {
        Ok(self.read_array::<1>()?[0])
    }

    /// Any non-zero byte reads back as true.
    pub fn read_bool(&mut self) -> Result<bool, BlobError> {
        Ok(self.read_u8()? != 0)
    }

    pub fn read_i32(&mut self) -> Result<i32, BlobError> {
        Ok(i32::from_le_bytes(self.read_array()?))
    }

    pub fn read_u64(&mut self) -> Result<u64, BlobError> {
        Ok(u64::from_le_bytes(self.read_array()?))
    }

    pub fn read_f32(&mut self) -> Result<f32, BlobError> {
        Ok(f32::from_le_bytes(self.read_array()?))
    }

    pub fn read_vec2(&mut self) -> Result<Vec2, BlobError> {
        Ok(Vec2::new(self.read_f32()?, self.read_f32()?))
    }

    pub fn read_vec3(&mut self) -> Result<Vec3, BlobError> {
        Ok(Vec3::new(self.read_f32()?, self.read_f32()?, self.read_f32()?))
    }

    pub fn read_vec4(&mut self) -> Result<Vec4, BlobError> {
        Ok(Vec4::new(
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
            self.read_f32()?,
        ))
    }

    pub fn position(&self) -> usize {
        self.pos
    }

    pub fn remaining(&self) -> usize {
        self.data.len() - self.pos
    }

    pub fn is_at_end(&self) -> bool {
        self.pos >= self.data.len()
    }
}
