use crate::UnknownCode;

/// The semantic meaning of a vertex attribute.
#[non_exhaustive]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AttributeUsage {
    Position,
    Normal,
}

/// The inner components of an [AttributeType]
///
/// Values taken from the [glTF specification](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html#accessor-data-types).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(try_from = "u32"))]
pub enum AttributeComponent {
    I8,
    U8,
    I16,
    U16,
    U32,
    F32,
}

impl AttributeComponent {
    pub const fn size(self) -> usize {
        use std::mem::size_of;
        match self {
            AttributeComponent::I8 => size_of::<i8>(),
            AttributeComponent::U8 => size_of::<u8>(),
            AttributeComponent::I16 => size_of::<i16>(),
            AttributeComponent::U16 => size_of::<u16>(),
            AttributeComponent::U32 => size_of::<u32>(),
            AttributeComponent::F32 => size_of::<f32>(),
        }
    }

    pub fn from_gltf(val: u32) -> Result<Self, UnknownCode> {
        match val {
            5120 => Ok(Self::I8),
            5121 => Ok(Self::U8),
            5122 => Ok(Self::I16),
            5123 => Ok(Self::U16),
            5125 => Ok(Self::U32),
            5126 => Ok(Self::F32),
            code => Err(UnknownCode {
                kind: "component type",
                code,
            }),
        }
    }
}

impl TryFrom<u32> for AttributeComponent {
    type Error = UnknownCode;
    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_gltf(value)
    }
}

/// The shape of each element an accessor describes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize))]
pub enum AttributeType {
    #[cfg_attr(feature = "serde", serde(rename = "SCALAR"))]
    Scalar,
    #[cfg_attr(feature = "serde", serde(rename = "VEC2"))]
    Vec2,
    #[cfg_attr(feature = "serde", serde(rename = "VEC3"))]
    Vec3,
    #[cfg_attr(feature = "serde", serde(rename = "VEC4"))]
    Vec4,
    #[cfg_attr(feature = "serde", serde(rename = "MAT2"))]
    Mat2,
    #[cfg_attr(feature = "serde", serde(rename = "MAT3"))]
    Mat3,
    #[cfg_attr(feature = "serde", serde(rename = "MAT4"))]
    Mat4,
}

impl AttributeType {
    /// Number of components in a vector attribute; `None` for scalars & matrices.
    pub const fn vector_width(self) -> Option<usize> {
        match self {
            AttributeType::Vec2 => Some(2),
            AttributeType::Vec3 => Some(3),
            AttributeType::Vec4 => Some(4),
            _ => None,
        }
    }
}

/// Where and how to read a run of attribute data out of a [Buffer](crate::Buffer).
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ComponentInfo {
    /// Index of the buffer holding the data
    pub buffer: usize,
    /// Absolute offset of the first element within the buffer
    pub byte_offset: usize,
    pub component_type: AttributeComponent,
    /// Components per element
    pub component_count: usize,
    /// Number of elements
    pub count: usize,
    pub min_bounds: [f64; 3],
    pub max_bounds: [f64; 3],
}

impl ComponentInfo {
    /// Total number of components covered by this run.
    #[inline]
    pub fn len_components(&self) -> usize {
        self.count.saturating_mul(self.component_count)
    }
}

/// Numeric types that can be stored in a glTF buffer.
pub trait Component: Copy {
    const COMPONENT: AttributeComponent;
    const SIZE: usize = Self::COMPONENT.size();
    /// Decode a value from exactly `SIZE` little-endian bytes.
    fn from_le_slice(bytes: &[u8]) -> Self;
}

mod _impl_component {
    use super::{AttributeComponent, Component};

    macro_rules! impl_component {
        ($Target:ident: $comp:expr) => {
            impl Component for $Target {
                const COMPONENT: AttributeComponent = $comp;
                #[inline]
                fn from_le_slice(bytes: &[u8]) -> Self {
                    let mut raw = [0u8; std::mem::size_of::<$Target>()];
                    raw.copy_from_slice(bytes);
                    $Target::from_le_bytes(raw)
                }
            }
        };
    }

    impl_component!(i8: AttributeComponent::I8);
    impl_component!(u8: AttributeComponent::U8);
    impl_component!(i16: AttributeComponent::I16);
    impl_component!(u16: AttributeComponent::U16);
    impl_component!(u32: AttributeComponent::U32);
    impl_component!(f32: AttributeComponent::F32);
}
