use std::collections::HashMap;

use crate::{primitive::attribute::AttributeUsage, ComponentInfo, UnknownCode};

pub mod attribute;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Deserialize), serde(try_from = "u32"))]
pub enum Mode {
    Points = 0,
    Lines = 1,
    LineLoop = 2,
    LineStrip = 3,
    #[default]
    Triangles = 4,
    TriangleStrip = 5,
    TriangleFan = 6,
}

impl Mode {
    pub fn from_gltf(val: u32) -> Result<Self, UnknownCode> {
        match val {
            0 => Ok(Self::Points),
            1 => Ok(Self::Lines),
            2 => Ok(Self::LineLoop),
            3 => Ok(Self::LineStrip),
            4 => Ok(Self::Triangles),
            5 => Ok(Self::TriangleStrip),
            6 => Ok(Self::TriangleFan),
            code => Err(UnknownCode {
                kind: "primitive mode",
                code,
            }),
        }
    }
}

impl TryFrom<u32> for Mode {
    type Error = UnknownCode;
    #[inline]
    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::from_gltf(value)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Primitive {
    /// The method by which vertices are interpreted as topological primitives
    mode: Mode,
    /// Indices of each vertex within each attribute. If empty, equivalent to [0, 1, 2, 3, ...]
    indices: Vec<u16>,
    /// Where to find vertex attribute data within the owning [Mesh](crate::Mesh)'s buffers
    attributes: HashMap<AttributeUsage, ComponentInfo>,
    /// Index of the material with which this primitive is rendered
    material: Option<usize>,
}

impl Primitive {
    pub fn new(mode: Mode, indices: Vec<u16>, material: Option<usize>) -> Self {
        Self {
            mode,
            indices,
            attributes: HashMap::new(),
            material,
        }
    }

    /// Builder-style [Self::set_attr].
    #[inline]
    pub fn with_attr(mut self, usage: AttributeUsage, info: Option<ComponentInfo>) -> Self {
        if let Some(info) = info {
            self.set_attr(usage, info);
        }
        self
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    pub fn indices(&self) -> &[u16] {
        &self.indices
    }

    pub fn material(&self) -> Option<usize> {
        self.material
    }

    pub fn get_attr(&self, attr: &AttributeUsage) -> Option<&ComponentInfo> {
        self.attributes.get(attr)
    }

    pub fn set_attr(&mut self, attr: AttributeUsage, info: ComponentInfo) -> Option<ComponentInfo> {
        self.attributes.insert(attr, info)
    }

    #[inline]
    pub fn position(&self) -> Option<&ComponentInfo> {
        self.get_attr(&AttributeUsage::Position)
    }

    #[inline]
    pub fn normal(&self) -> Option<&ComponentInfo> {
        self.get_attr(&AttributeUsage::Normal)
    }
}
