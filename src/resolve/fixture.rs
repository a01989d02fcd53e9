//! A small, fully loaded document shared by resolver tests.
//!
//! Buffer 0 holds, in order: `u16` values `0..6`, `f32` values `1, 2, 3`, and the `u32` value `7`.

use serde_json::json;

use crate::{de, table::Tables};

pub(crate) const INDICES: usize = 0;
pub(crate) const POSITIONS: usize = 1;
pub(crate) const WIDE_INDICES: usize = 2;
pub(crate) const SHIFTED_INDICES: usize = 3;
pub(crate) const DANGLING_VIEW: usize = 4;
pub(crate) const DANGLING_BUFFER: usize = 5;
pub(crate) const DETACHED: usize = 6;
pub(crate) const MATRIX: usize = 7;
pub(crate) const UNBOUNDED_NORMALS: usize = 8;

pub(crate) fn payload() -> Vec<u8> {
    let mut data: Vec<u8> = (0u16..6).flat_map(u16::to_le_bytes).collect();
    data.extend([1.0f32, 2.0, 3.0].iter().flat_map(|f| f.to_le_bytes()));
    data.extend(7u32.to_le_bytes());
    data
}

pub(crate) fn document() -> serde_json::Value {
    json!({
        "asset": { "generator": "fixture", "version": "2.0" },
        "buffers": [{ "byteLength": 28, "uri": "fixture.bin" }],
        "bufferViews": [
            { "buffer": 0, "byteLength": 12, "target": 34963 },
            { "buffer": 0, "byteLength": 12, "byteOffset": 12, "target": 34962 },
            { "buffer": 0, "byteLength": 4, "byteOffset": 24 },
            { "buffer": 5, "byteLength": 4 },
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5123, "count": 6, "type": "SCALAR" },
            { "bufferView": 1, "componentType": 5126, "count": 1, "type": "VEC3",
              "min": [1, 2, 3], "max": [1, 2, 3] },
            { "bufferView": 2, "componentType": 5125, "count": 1, "type": "SCALAR" },
            { "bufferView": 0, "byteOffset": 4, "componentType": 5123, "count": 2, "type": "SCALAR" },
            { "bufferView": 9, "componentType": 5126, "count": 1, "type": "VEC3" },
            { "bufferView": 3, "componentType": 5126, "count": 1, "type": "VEC3" },
            { "componentType": 5126, "count": 1, "type": "VEC3" },
            { "bufferView": 1, "componentType": 5126, "count": 1, "type": "MAT4" },
            { "bufferView": 1, "componentType": 5126, "count": 1, "type": "VEC3" },
        ],
        "materials": [
            { "name": "red", "pbrMetallicRoughness": {
                "baseColorFactor": [1, 0, 0, 1], "metallicFactor": 0.5, "roughnessFactor": 0.5 } },
            { "name": "plain" },
        ],
        "meshes": [
            { "name": "quad", "primitives": [
                { "attributes": { "POSITION": POSITIONS, "NORMAL": UNBOUNDED_NORMALS },
                  "indices": INDICES, "material": 0 },
                { "attributes": { "POSITION": POSITIONS }, "indices": SHIFTED_INDICES, "mode": 1 },
            ] },
            { "name": "wide", "primitives": [
                { "attributes": { "POSITION": POSITIONS }, "indices": WIDE_INDICES },
            ] },
            { "name": "dangling", "primitives": [
                { "attributes": { "POSITION": POSITIONS }, "indices": INDICES, "material": 4 },
            ] },
            { "name": "loose", "primitives": [
                { "attributes": { "POSITION": POSITIONS }, "material": 1, "mode": 0 },
            ] },
            { "name": "flat", "primitives": [
                { "attributes": { "POSITION": INDICES }, "indices": INDICES },
            ] },
        ],
        "nodes": [
            { "name": "root" },
            { "name": "quad", "mesh": 0, "translation": [1, 2, 3],
              "rotation": [0, 0, 1, 0], "scale": [2, 2, 2] },
            { "name": "wide", "mesh": 1 },
            { "name": "dangling", "mesh": 2 },
            { "name": "missing", "mesh": 7 },
            { "name": "quad", "mesh": -1 },
            { "name": "loose", "mesh": 3 },
            { "name": "flat", "mesh": 4 },
        ],
    })
}

/// The fixture document with its payload in place.
pub(crate) fn tables() -> Tables {
    let mut tables = de::parse(document().to_string().as_bytes()).unwrap();
    tables.buffers[0].payload = payload().into();
    tables
}
