//! Deserialization of scene documents into [Tables].

mod gltf;

use std::path::Path;

use serde::{de::Error as _, Deserialize, Deserializer};

use crate::{buffer, error::Error, table::Tables};

/// Index fields may be absent, `null`, or `-1`, all meaning "no reference".
fn optional_index<'de, D: Deserializer<'de>>(de: D) -> Result<Option<usize>, D::Error> {
    match Option::<i64>::deserialize(de)? {
        None | Some(-1) => Ok(None),
        Some(i) => usize::try_from(i)
            .map(Some)
            .map_err(|_| D::Error::custom(format!("invalid index: {i}"))),
    }
}

/// Build every table of a document, without loading buffer payloads.
pub(crate) fn parse(json: &[u8]) -> Result<Tables, Error> {
    let doc: gltf::Document = serde_json::from_slice(json)?;
    Ok(doc.into())
}

/// Build every table of a document, then load each buffer's payload from `base_dir`.
pub(crate) fn read(json: &[u8], base_dir: &Path) -> Result<Tables, Error> {
    let mut tables = parse(json)?;
    buffer::load_payloads(&mut tables, base_dir)?;
    tracing::debug!(
        buffers = tables.buffers.len(),
        buffer_views = tables.buffer_views.len(),
        accessors = tables.accessors.len(),
        materials = tables.materials.len(),
        meshes = tables.meshes.len(),
        nodes = tables.nodes.len(),
        "read scene document"
    );
    Ok(tables)
}
