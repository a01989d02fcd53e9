//! The subset of the glTF document schema read by this crate.
//!
//! # Notes
//!
//! * Fields missing from a document take the defaults declared here; enumerated codes & tags
//!   which aren't recognized fail deserialization.
//! * Unknown sections and fields are ignored.
//!
//! # See Also
//!
//! * [glTF 2.0 Spec](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html)
//! * [glTF Reference Guide](https://www.khronos.org/files/gltf20-reference-guide.pdf)

use serde::Deserialize;
use tessera_mesh::{AttributeComponent, AttributeType, BufferTarget, Material as MeshMaterial, Mode};

use super::optional_index;
use crate::table::{self, Bounds, Tables};

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub(crate) struct Document {
    asset: Asset,
    buffers: Vec<Buffer>,
    buffer_views: Vec<BufferView>,
    accessors: Vec<Accessor>,
    materials: Vec<Material>,
    meshes: Vec<Mesh>,
    nodes: Vec<Node>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct Asset {
    generator: String,
    version: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Buffer {
    #[serde(default)]
    byte_length: usize,
    #[serde(default)]
    uri: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct BufferView {
    #[serde(default)]
    buffer: usize,
    #[serde(default)]
    byte_length: usize,
    #[serde(default)]
    byte_offset: usize,
    #[serde(default)]
    target: Option<BufferTarget>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Accessor {
    #[serde(default, deserialize_with = "optional_index")]
    buffer_view: Option<usize>,
    #[serde(default)]
    byte_offset: usize,
    component_type: AttributeComponent,
    #[serde(default)]
    count: usize,
    #[serde(rename = "type")]
    attr_type: AttributeType,
    #[serde(default)]
    min: Option<Vec<f64>>,
    #[serde(default)]
    max: Option<Vec<f64>>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct Material {
    #[serde(default)]
    name: String,
    #[serde(default)]
    pbr_metallic_roughness: Option<PbrMetallicRoughness>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
struct PbrMetallicRoughness {
    base_color_factor: [f64; 4],
    metallic_factor: f64,
    roughness_factor: f64,
}

#[derive(Debug, Deserialize)]
struct Mesh {
    #[serde(default)]
    name: String,
    #[serde(default)]
    primitives: Vec<Primitive>,
}

#[derive(Debug, Deserialize)]
struct Primitive {
    #[serde(default)]
    attributes: Attributes,
    #[serde(default, deserialize_with = "optional_index")]
    indices: Option<usize>,
    #[serde(default, deserialize_with = "optional_index")]
    material: Option<usize>,
    #[serde(default)]
    mode: Mode,
}

#[derive(Debug, Default, Deserialize)]
struct Attributes {
    #[serde(rename = "POSITION", default, deserialize_with = "optional_index")]
    position: Option<usize>,
    #[serde(rename = "NORMAL", default, deserialize_with = "optional_index")]
    normal: Option<usize>,
}

#[derive(Debug, Deserialize)]
struct Node {
    #[serde(default)]
    name: String,
    #[serde(default, deserialize_with = "optional_index")]
    mesh: Option<usize>,
    #[serde(default)]
    rotation: Option<[f64; 4]>,
    #[serde(default)]
    translation: Option<[f64; 3]>,
    #[serde(default)]
    scale: Option<[f64; 3]>,
}

/// The first three components of a bounds array; missing components are zero.
fn triple(values: &[f64]) -> [f64; 3] {
    if values.len() != 3 {
        tracing::debug!(
            len = values.len(),
            "accessor bounds don't have 3 components; truncating or zero-filling"
        );
    }
    let mut res = [0.0; 3];
    for (dst, src) in res.iter_mut().zip(values) {
        *dst = *src;
    }
    res
}

impl From<Accessor> for table::Accessor {
    fn from(acc: Accessor) -> Self {
        let bounds = match (acc.attr_type, acc.min) {
            (AttributeType::Scalar, _) | (_, None) => None,
            (_, Some(min)) => Some(Bounds {
                min: triple(&min),
                max: acc.max.as_deref().map(triple).unwrap_or_default(),
            }),
        };
        Self {
            buffer_view: acc.buffer_view,
            byte_offset: acc.byte_offset,
            component_type: acc.component_type,
            count: acc.count,
            attr_type: acc.attr_type,
            bounds,
        }
    }
}

impl From<Material> for MeshMaterial {
    fn from(mat: Material) -> Self {
        let pbr = mat.pbr_metallic_roughness.unwrap_or_default();
        Self {
            name: mat.name,
            base_color_factor: pbr.base_color_factor,
            metallic_factor: pbr.metallic_factor,
            roughness_factor: pbr.roughness_factor,
        }
    }
}

impl From<Mesh> for table::Mesh {
    fn from(mesh: Mesh) -> Self {
        Self {
            name: mesh.name,
            primitives: mesh
                .primitives
                .into_iter()
                .map(|p| table::Primitive {
                    position: p.attributes.position,
                    normal: p.attributes.normal,
                    indices: p.indices,
                    material: p.material,
                    mode: p.mode,
                })
                .collect(),
        }
    }
}

impl From<Document> for Tables {
    fn from(doc: Document) -> Self {
        Self {
            asset: table::Asset {
                generator: doc.asset.generator,
                version: doc.asset.version,
            },
            buffers: doc
                .buffers
                .into_iter()
                .map(|b| table::Buffer {
                    byte_length: b.byte_length,
                    uri: b.uri,
                    payload: Default::default(),
                })
                .collect(),
            buffer_views: doc
                .buffer_views
                .into_iter()
                .map(|v| table::BufferView {
                    buffer: v.buffer,
                    byte_length: v.byte_length,
                    byte_offset: v.byte_offset,
                    target: v.target,
                })
                .collect(),
            accessors: doc.accessors.into_iter().map(Into::into).collect(),
            materials: doc.materials.into_iter().map(Into::into).collect(),
            meshes: doc.meshes.into_iter().map(Into::into).collect(),
            nodes: doc
                .nodes
                .into_iter()
                .map(|n| table::Node {
                    name: n.name,
                    mesh: n.mesh,
                    rotation: n.rotation,
                    translation: n.translation,
                    scale: n.scale,
                })
                .collect(),
        }
    }
}
