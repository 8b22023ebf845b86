// reflect_core/src/reflect/array.rs
use crate::blob::{BlobError, InputBlob, OutputBlob};
use crate::ecs::component::{ComponentMut, ComponentRef, PropertyIndex};
use crate::reflect::accessor::ArrayHost;
use crate::reflect::descriptor::PropertyDescriptor;

/// Variable-length list of structured items.
///
/// Items are serialized item-major: every child of item 0, then every child
/// of item 1, and so on. The child order given at construction is the wire
/// layout of one item.
pub struct ArrayProperty {
    host: Box<dyn ArrayHost>,
    children: Vec<PropertyDescriptor>,
}

impl ArrayProperty {
    pub fn new(host: impl ArrayHost + 'static, children: Vec<PropertyDescriptor>) -> Self {
        Self {
            host: Box::new(host),
            children,
        }
    }

    pub fn children(&self) -> &[PropertyDescriptor] {
        &self.children
    }

    pub fn count(&self, cmp: ComponentRef<'_>) -> usize {
        self.host.count(cmp)
    }

    pub fn write_from(&self, cmp: ComponentRef<'_>, out: &mut OutputBlob) {
        let count = self.host.count(cmp);
        let Ok(wire_count) = i32::try_from(count) else {
            panic!("Array has {count} items, more than an i32 count can hold.");
        };
        out.write_i32(wire_count);
        for item in 0..count {
            for child in &self.children {
                child.write_from(cmp, PropertyIndex::Element(item), out);
            }
        }
    }

    /// Reads the count, resizes the host and reads every item. On failure
    /// the items the host held before the call are written back.
    pub fn read_into(
        &self,
        name: &'static str,
        mut cmp: ComponentMut<'_>,
        input: &mut InputBlob<'_>,
    ) -> Result<(), BlobError> {
        let count = input.read_i32()?;
        if count < 0 {
            return Err(BlobError::NegativeCount { property: name, count });
        }
        let count = count as usize;

        // Every child takes at least one byte, so a count the stream cannot
        // hold is rejected before the host grows.
        if !self.children.is_empty() && count > input.remaining() {
            return Err(BlobError::UnexpectedEnd {
                offset: input.position(),
                needed: count,
                remaining: input.remaining(),
            });
        }

        let mut previous = OutputBlob::new();
        self.write_from(cmp.shared(), &mut previous);

        let read = self.read_items(name, cmp.reborrow(), count, input);
        if read.is_err() {
            let mut restore = InputBlob::new(previous.as_bytes());
            let previous_count = restore.read_i32()? as usize;
            self.read_items(name, cmp, previous_count, &mut restore)?;
        }
        read
    }

    fn read_items(
        &self,
        name: &'static str,
        mut cmp: ComponentMut<'_>,
        count: usize,
        input: &mut InputBlob<'_>,
    ) -> Result<(), BlobError> {
        self.resize(name, cmp.reborrow(), count);

        for item in 0..count {
            for child in &self.children {
                child.read_into(cmp.reborrow(), PropertyIndex::Element(item), input)?;
            }
        }
        Ok(())
    }

    /// Grows at the end or shrinks from the end, one item at a time.
    pub fn resize(&self, name: &'static str, mut cmp: ComponentMut<'_>, target: usize) {
        let mut current = self.host.count(cmp.shared());
        if current != target {
            log::trace!("Resizing array '{name}' from {current} to {target} items.");
        }

        while current < target {
            self.host.add(cmp.reborrow());
            let grown = self.host.count(cmp.shared());
            assert!(grown > current, "Array '{name}': adder did not append an item.");
            current = grown;
        }

        while current > target {
            self.host.remove(cmp.reborrow(), current - 1);
            let shrunk = self.host.count(cmp.shared());
            assert!(shrunk < current, "Array '{name}': remover did not remove an item.");
            current = shrunk;
        }
    }
}
