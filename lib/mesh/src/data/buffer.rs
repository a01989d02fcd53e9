use num_traits::AsPrimitive;

use crate::{AttributeComponent, Component, UnknownCode};

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    #[error("byte range {offset}..+{len} out of bounds of buffer of length {available}")]
    RangeOverflow {
        offset: usize,
        len: usize,
        available: usize,
    },
    #[error("no buffer at index {0}")]
    NoSuchBuffer(usize),
}

/// The kind of data a buffer view holds, as hinted by its `target`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(try_from = "u32"))]
pub enum BufferTarget {
    /// Vertex attribute data
    Array,
    /// Vertex indices
    ElementArray,
}

impl BufferTarget {
    pub fn from_gltf(val: u32) -> Result<Self, UnknownCode> {
        match val {
            34962 => Ok(Self::Array),
            34963 => Ok(Self::ElementArray),
            code => Err(UnknownCode {
                kind: "buffer target",
                code,
            }),
        }
    }
}

impl TryFrom<u32> for BufferTarget {
    type Error = UnknownCode;
    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_gltf(value)
    }
}

/// An owned data blob, read from a glTF buffer.
///
/// All multi-byte values are decoded little-endian, regardless of host.
#[derive(Default, Clone, PartialEq, Eq)]
pub struct Buffer {
    pub data: Vec<u8>,
}

impl std::fmt::Debug for Buffer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Buffer")
            .field("len", &self.data.len())
            .finish()
    }
}

impl Buffer {
    #[inline]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    #[inline]
    pub fn as_slice(&self) -> &[u8] {
        self.data.as_slice()
    }

    /// Borrow `len` bytes starting at `offset`.
    pub fn range(&self, offset: usize, len: usize) -> Result<&[u8], Error> {
        offset
            .checked_add(len)
            .and_then(|end| self.data.get(offset..end))
            .ok_or(Error::RangeOverflow {
                offset,
                len,
                available: self.data.len(),
            })
    }

    /// Copy `count` tightly-packed values of type `T` out of this buffer, starting at `offset`.
    pub fn read<T: Component>(&self, offset: usize, count: usize) -> Result<Vec<T>, Error> {
        let len = count.checked_mul(T::SIZE).ok_or(Error::RangeOverflow {
            offset,
            len: usize::MAX,
            available: self.data.len(),
        })?;
        Ok(self
            .range(offset, len)?
            .chunks_exact(T::SIZE)
            .map(T::from_le_slice)
            .collect())
    }

    /// Copy `count` values of a runtime-determined component type, converting each to `f32`.
    ///
    /// Integer components are converted by value; no normalization is applied.
    pub fn read_f32(
        &self,
        component: AttributeComponent,
        offset: usize,
        count: usize,
    ) -> Result<Vec<f32>, Error> {
        match component {
            AttributeComponent::I8 => self.read_as::<i8>(offset, count),
            AttributeComponent::U8 => self.read_as::<u8>(offset, count),
            AttributeComponent::I16 => self.read_as::<i16>(offset, count),
            AttributeComponent::U16 => self.read_as::<u16>(offset, count),
            AttributeComponent::U32 => self.read_as::<u32>(offset, count),
            AttributeComponent::F32 => self.read::<f32>(offset, count),
        }
    }

    fn read_as<T: Component + AsPrimitive<f32>>(
        &self,
        offset: usize,
        count: usize,
    ) -> Result<Vec<f32>, Error> {
        Ok(self
            .read::<T>(offset, count)?
            .into_iter()
            .map(AsPrimitive::<f32>::as_)
            .collect())
    }
}

impl From<Vec<u8>> for Buffer {
    fn from(data: Vec<u8>) -> Self {
        Self { data }
    }
}
