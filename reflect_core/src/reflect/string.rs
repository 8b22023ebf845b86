// reflect_core/src/reflect/string.rs
use crate::blob::{BlobError, InputBlob, OutputBlob};
use crate::constants::MAX_STRING_SIZE;
use crate::ecs::component::{ComponentMut, ComponentRef, PropertyIndex};
use crate::reflect::accessor::{Binding, TextAccess};
use serde::{Deserialize, Serialize};

/// Zero-terminated text field.
pub struct StringProperty {
    accessor: Box<dyn TextAccess>,
}

impl StringProperty {
    pub fn new(accessor: impl TextAccess + 'static) -> Self {
        Self {
            accessor: Box::new(accessor),
        }
    }

    pub fn binding(&self) -> Binding {
        self.accessor.binding()
    }

    pub fn get<'a>(&self, cmp: ComponentRef<'a>, index: PropertyIndex) -> &'a str {
        self.accessor.get(cmp, index)
    }

    pub fn write_from(&self, cmp: ComponentRef<'_>, index: PropertyIndex, out: &mut OutputBlob) {
        let content = wire_content(self.accessor.get(cmp, index));
        out.write_bytes(content.as_bytes());
        out.write_u8(0);
    }

    pub fn read_into(
        &self,
        cmp: ComponentMut<'_>,
        index: PropertyIndex,
        input: &mut InputBlob<'_>,
    ) -> Result<(), BlobError> {
        let text = read_terminated(input)?;
        self.accessor.set(cmp, index, &text);
        Ok(())
    }
}

/// Part of `value` that fits on the wire: stops at an interior NUL and keeps
/// at most `MAX_STRING_SIZE - 1` bytes, cut on a character boundary.
pub fn wire_content(value: &str) -> &str {
    let mut end = value.find('\0').unwrap_or(value.len());
    if end > MAX_STRING_SIZE - 1 {
        end = MAX_STRING_SIZE - 1;
        while !value.is_char_boundary(end) {
            end -= 1;
        }
        log::debug!("String of {} bytes truncated to {end} bytes.", value.len());
    }
    &value[..end]
}

/// Reads bytes up to and including a zero terminator, consuming at most
/// `MAX_STRING_SIZE` bytes. Without a terminator the last byte is dropped.
pub fn read_terminated(input: &mut InputBlob<'_>) -> Result<String, BlobError> {
    let mut bytes = Vec::with_capacity(MAX_STRING_SIZE);
    let mut terminated = false;

    while bytes.len() < MAX_STRING_SIZE {
        let byte = input.read_u8()?;
        if byte == 0 {
            terminated = true;
            break;
        }
        bytes.push(byte);
    }

    if !terminated {
        // Cap reached: force the terminator into the last slot.
        bytes.truncate(MAX_STRING_SIZE - 1);
        log::debug!("Unterminated string truncated to {} bytes.", bytes.len());
    }

    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

/// Path field filtered by file type in the asset picker.
pub struct FileProperty {
    pub(crate) text: StringProperty,
    file_type: &'static str,
}

impl FileProperty {
    pub fn new(text: StringProperty, file_type: &'static str) -> Self {
        Self { text, file_type }
    }

    pub fn text(&self) -> &StringProperty {
        &self.text
    }

    /// Filter such as `"*.png"` handed to the file dialog.
    pub fn file_type(&self) -> &'static str {
        self.file_type
    }
}

/// Numeric tag of a resource manager.
#[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Serialize, Deserialize, Default)]
pub struct ResourceType(pub u32);

/// File field that refers to a resource of a known kind.
pub struct ResourceProperty {
    pub(crate) file: FileProperty,
    resource_type: ResourceType,
}

impl ResourceProperty {
    pub fn new(file: FileProperty, resource_type: ResourceType) -> Self {
        Self { file, resource_type }
    }

    pub fn file(&self) -> &FileProperty {
        &self.file
    }

    pub fn resource_type(&self) -> ResourceType {
        self.resource_type
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_content_respects_char_boundaries() {
        // 'é' is two bytes, so 150 of them straddle the 299 byte cap.
        let text = "é".repeat(150);
        let content = wire_content(&text);
        assert_eq!(content.len(), 298);
        assert!(content.chars().all(|c| c == 'é'));
    }

    #[test]
    fn wire_content_stops_at_nul() {
        assert_eq!(wire_content("abc\0def"), "abc");
    }

    #[test]
    fn unterminated_cap_is_forced() {
        let raw = vec![b'x'; MAX_STRING_SIZE + 5];
        let mut input = InputBlob::new(&raw);
        let text = read_terminated(&mut input).unwrap();
        assert_eq!(text.len(), MAX_STRING_SIZE - 1);
        assert_eq!(input.position(), MAX_STRING_SIZE);
    }

    #[test]
    fn missing_terminator_is_an_error() {
        let raw = b"abc";
        let mut input = InputBlob::new(raw);
        assert!(matches!(
            read_terminated(&mut input),
            Err(BlobError::UnexpectedEnd { .. })
        ));
    }
}
