use std::path::{Path, PathBuf};

use quickcheck_macros::quickcheck;
use serde_json::json;
use tempfile::TempDir;
use tessera::{Error, Model};

fn write_document(dir: &Path, file: &str, doc: &serde_json::Value) -> PathBuf {
    let path = dir.join(file);
    std::fs::write(&path, doc.to_string()).unwrap();
    path
}

/// A single triangle, indexed `[0, 1, 2]`, under a node named `node`.
fn triangle(node: &str, bin: &str) -> serde_json::Value {
    json!({
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": 42, "uri": bin }],
        "bufferViews": [
            { "buffer": 0, "byteLength": 6, "target": 34963 },
            { "buffer": 0, "byteLength": 36, "byteOffset": 6, "target": 34962 },
        ],
        "accessors": [
            { "bufferView": 0, "componentType": 5123, "count": 3, "type": "SCALAR" },
            { "bufferView": 1, "componentType": 5126, "count": 3, "type": "VEC3",
              "min": [0, 0, 0], "max": [1, 1, 0] },
        ],
        "meshes": [{ "name": "tri", "primitives": [{ "attributes": { "POSITION": 1 }, "indices": 0 }] }],
        "nodes": [{ "name": node, "mesh": 0, "translation": [0, 0, -5] }],
    })
}

fn triangle_payload() -> Vec<u8> {
    let mut data: Vec<u8> = [0u16, 1, 2].iter().flat_map(|i| i.to_le_bytes()).collect();
    let positions = [0.0f32, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0];
    data.extend(positions.iter().flat_map(|f| f.to_le_bytes()));
    data
}

fn triangle_dir(node: &str) -> (TempDir, PathBuf) {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tri.bin"), triangle_payload()).unwrap();
    let path = write_document(dir.path(), "tri.gltf", &triangle(node, "tri.bin"));
    (dir, path)
}

#[test]
fn load_triangle() {
    let (_dir, path) = triangle_dir("Triangle");
    let node = tessera::load_node(&path, "Triangle").unwrap();
    assert_eq!(node.transform.translation.z, -5.0);
    let mesh = node.mesh.unwrap();
    let prim = &mesh.primitives[0];
    assert_eq!(prim.indices(), [0, 1, 2]);
    let position = prim.position().unwrap();
    assert_eq!(position.component_count, 3);
    assert_eq!(position.max_bounds, [1.0, 1.0, 0.0]);
    assert_eq!(
        mesh.read_attribute(position).unwrap(),
        [0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0, 0.0]
    );
}

#[test]
fn missing_payload_keeps_previous_document() {
    let (dir, path) = triangle_dir("Triangle");
    let mut model = Model::open(&path).unwrap();

    let broken = write_document(dir.path(), "broken.gltf", &triangle("Other", "absent.bin"));
    assert!(matches!(model.load(&broken), Err(Error::Io { .. })));
    assert!(model.has_node("Triangle"));
    assert!(!model.has_node("Other"));
    assert_eq!(model.path(), Some(path.as_path()));

    let mut fresh = Model::new();
    assert!(fresh.load(&broken).is_err());
    assert_eq!(fresh.node_names().count(), 0);
}

#[test]
fn truncated_payload() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("tri.bin"), &triangle_payload()[..20]).unwrap();
    let path = write_document(dir.path(), "tri.gltf", &triangle("Triangle", "tri.bin"));
    assert!(matches!(
        tessera::load_node(&path, "Triangle"),
        Err(Error::TruncatedRead {
            expected: 42,
            actual: 20,
            ..
        })
    ));
}

#[test]
fn malformed_document() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("bad.gltf");
    std::fs::write(&path, "{ \"nodes\": [ { \"name\": 4 } ] }").unwrap();
    assert!(matches!(Model::open(&path), Err(Error::Parse(_))));
}

#[test]
fn reload_replaces_tables() {
    let (dir, first) = triangle_dir("First");
    let second = write_document(dir.path(), "second.gltf", &triangle("Second", "tri.bin"));

    let mut model = Model::open(&first).unwrap();
    let snapshot = model.build_node("First").unwrap();
    model.load(&second).unwrap();

    assert!(!model.has_node("First"));
    assert!(model.has_node("Second"));
    assert!(matches!(model.build_node("First"), Err(Error::NotFound(_))));
    // resolved nodes own their data
    assert_eq!(snapshot.mesh.unwrap().buffers[0].as_slice(), triangle_payload());
}

#[test]
fn percent_encoded_payload_name() {
    let dir = TempDir::new().unwrap();
    std::fs::write(dir.path().join("my tri.bin"), triangle_payload()).unwrap();
    let path = write_document(dir.path(), "tri.gltf", &triangle("Triangle", "my%20tri.bin"));
    let node = tessera::load_node(&path, "Triangle").unwrap();
    assert_eq!(node.mesh.unwrap().primitives[0].indices(), [0, 1, 2]);
}

#[test]
fn payload_outside_document_directory() {
    let dir = TempDir::new().unwrap();
    let elsewhere = TempDir::new().unwrap();
    let secret = elsewhere.path().join("secret.bin");
    std::fs::write(&secret, triangle_payload()).unwrap();
    let doc = triangle("Triangle", secret.to_str().unwrap());

    let path = write_document(dir.path(), "tri.gltf", &doc);
    assert!(matches!(
        Model::open(&path),
        Err(Error::OutsideDocumentDir { .. })
    ));

    let mut model = Model::new();
    assert!(matches!(
        model.load_str(&doc.to_string(), dir.path()),
        Err(Error::OutsideDocumentDir { .. })
    ));
    assert_eq!(model.node_names().count(), 0);
}

#[quickcheck]
fn has_node_is_exact(names: Vec<String>, query: String) -> bool {
    let nodes: Vec<_> = names.iter().map(|n| json!({ "name": n })).collect();
    let mut model = Model::new();
    model
        .load_str(&json!({ "nodes": nodes }).to_string(), "")
        .unwrap();
    names.iter().all(|n| model.has_node(n)) && model.has_node(&query) == names.contains(&query)
}

#[quickcheck]
fn node_order_is_document_order(names: Vec<String>) -> bool {
    let nodes: Vec<_> = names.iter().map(|n| json!({ "name": n })).collect();
    let mut model = Model::new();
    model
        .load_str(&json!({ "nodes": nodes }).to_string(), "")
        .unwrap();
    model.node_names().eq(names.iter().map(String::as_str))
}
