// reflect_core/src/reflect/sampled.rs
use crate::blob::{BlobError, InputBlob, OutputBlob};
use crate::ecs::component::{ComponentMut, ComponentRef, PropertyIndex};
use crate::reflect::accessor::ValueAccess;
use crate::reflect::value::WireValue;

/// Curve stored as a fixed number of float samples.
pub struct SampledFunctionProperty {
    accessor: Box<dyn ValueAccess<f32>>,
    count: usize,
    min: f32,
    max: f32,
}

impl SampledFunctionProperty {
    pub fn new(accessor: impl ValueAccess<f32> + 'static, count: usize, min: f32, max: f32) -> Self {
        Self {
            accessor: Box::new(accessor),
            count,
            min,
            max,
        }
    }

    /// Number of samples, fixed when the descriptor was built.
    pub fn count(&self) -> usize {
        self.count
    }

    pub fn min(&self) -> f32 {
        self.min
    }

    pub fn max(&self) -> f32 {
        self.max
    }

    pub fn samples(&self, cmp: ComponentRef<'_>) -> Vec<f32> {
        (0..self.count)
            .map(|i| self.accessor.get(cmp, PropertyIndex::Element(i)))
            .collect()
    }

    pub fn write_from(&self, cmp: ComponentRef<'_>, out: &mut OutputBlob) {
        for i in 0..self.count {
            self.accessor.get(cmp, PropertyIndex::Element(i)).encode(out);
        }
    }

    /// Decodes every sample before touching the host, so a short stream
    /// leaves the curve as it was.
    pub fn read_into(&self, mut cmp: ComponentMut<'_>, input: &mut InputBlob<'_>) -> Result<(), BlobError> {
        let samples = (0..self.count)
            .map(|_| f32::decode(input))
            .collect::<Result<Vec<_>, _>>()?;

        for (i, sample) in samples.into_iter().enumerate() {
            self.accessor.set(cmp.reborrow(), PropertyIndex::Element(i), sample);
        }
        Ok(())
    }
}
