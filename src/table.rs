//! Descriptor tables, exactly as a document declares them.
//!
//! Each table is ordered as its document section; an entry's position is the index by which
//! other entries refer to it. References are not validated until they're followed.

use tessera_mesh::{AttributeComponent, AttributeType, BufferTarget, Material, Mode};

use crate::error::Error;

/// Names a table, for reporting dangling references.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Table {
    Buffers,
    BufferViews,
    Accessors,
    Materials,
    Meshes,
}

impl std::fmt::Display for Table {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Table::Buffers => f.write_str("buffers"),
            Table::BufferViews => f.write_str("bufferViews"),
            Table::Accessors => f.write_str("accessors"),
            Table::Materials => f.write_str("materials"),
            Table::Meshes => f.write_str("meshes"),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Asset {
    pub generator: String,
    pub version: String,
}

#[derive(Debug, Clone, Default)]
pub struct Buffer {
    pub byte_length: usize,
    /// Location of the payload, relative to the document
    pub uri: String,
    /// Empty until loaded
    pub payload: tessera_mesh::Buffer,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BufferView {
    pub buffer: usize,
    pub byte_length: usize,
    pub byte_offset: usize,
    pub target: Option<BufferTarget>,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub min: [f64; 3],
    pub max: [f64; 3],
}

#[derive(Debug, Clone, PartialEq)]
pub struct Accessor {
    pub buffer_view: Option<usize>,
    pub byte_offset: usize,
    pub component_type: AttributeComponent,
    pub count: usize,
    pub attr_type: AttributeType,
    /// Only recorded for non-scalar accessors
    pub bounds: Option<Bounds>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Primitive {
    pub position: Option<usize>,
    pub normal: Option<usize>,
    pub indices: Option<usize>,
    pub material: Option<usize>,
    pub mode: Mode,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mesh {
    pub name: String,
    pub primitives: Vec<Primitive>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub mesh: Option<usize>,
    /// `[x, y, z, w]`
    pub rotation: Option<[f64; 4]>,
    pub translation: Option<[f64; 3]>,
    pub scale: Option<[f64; 3]>,
}

/// Every table of a document.
#[derive(Debug, Clone, Default)]
pub struct Tables {
    pub asset: Asset,
    pub buffers: Vec<Buffer>,
    pub buffer_views: Vec<BufferView>,
    pub accessors: Vec<Accessor>,
    pub materials: Vec<Material>,
    pub meshes: Vec<Mesh>,
    pub nodes: Vec<Node>,
}

/// Follow a reference into `entries`.
///
/// # Errors
///
/// * [Error::ReferentialIntegrity] if `index` ∉ `0..entries.len()`
fn fetch<T>(entries: &[T], table: Table, index: usize) -> Result<&T, Error> {
    entries.get(index).ok_or(Error::ReferentialIntegrity {
        table,
        index,
        len: entries.len(),
    })
}

impl Tables {
    #[inline]
    pub fn buffer(&self, index: usize) -> Result<&Buffer, Error> {
        fetch(&self.buffers, Table::Buffers, index)
    }

    #[inline]
    pub fn buffer_view(&self, index: usize) -> Result<&BufferView, Error> {
        fetch(&self.buffer_views, Table::BufferViews, index)
    }

    #[inline]
    pub fn accessor(&self, index: usize) -> Result<&Accessor, Error> {
        fetch(&self.accessors, Table::Accessors, index)
    }

    #[inline]
    pub fn material(&self, index: usize) -> Result<&Material, Error> {
        fetch(&self.materials, Table::Materials, index)
    }

    #[inline]
    pub fn mesh(&self, index: usize) -> Result<&Mesh, Error> {
        fetch(&self.meshes, Table::Meshes, index)
    }

    /// The first node named exactly `name`.
    pub fn find_node(&self, name: &str) -> Option<&Node> {
        self.nodes.iter().find(|n| n.name == name)
    }
}
