use std::path::{Path, PathBuf};

use tessera_mesh::Node;

use crate::{
    de,
    error::{Error, LoadError},
    table::{Asset, Tables},
};

/// A scene document, with every buffer payload it declares.
///
/// # Characteristics
///
/// * Loading replaces the whole document or nothing: a failed [Model::load] leaves the tables of
///   the previous document in place
/// * Nodes resolved from a model own their data, so they outlive any later reload
#[derive(Debug, Default)]
pub struct Model {
    tables: Tables,
    path: Option<PathBuf>,
}

impl Model {
    /// An empty model, holding no nodes.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load the document at `path` into a new model.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, Error> {
        let mut res = Self::new();
        res.load(path)?;
        Ok(res)
    }

    /// Replace this model's contents with the document at `path`.
    ///
    /// Buffer URIs are resolved relative to the directory containing `path`.
    #[tracing::instrument(skip_all, fields(path = ?path.as_ref()))]
    pub fn load(&mut self, path: impl AsRef<Path>) -> Result<(), Error> {
        let path = path.as_ref();
        let json = std::fs::read(path).map_err(Error::io(path))?;
        let base_dir = path.parent().unwrap_or_else(|| Path::new(""));
        self.tables = de::read(&json, base_dir)?;
        self.path = Some(path.to_owned());
        tracing::info!(nodes = self.tables.nodes.len(), "loaded model");
        Ok(())
    }

    /// Replace this model's contents with an in-memory document, whose buffers live in
    /// `base_dir`.
    pub fn load_str(&mut self, json: &str, base_dir: impl AsRef<Path>) -> Result<(), Error> {
        self.tables = de::read(json.as_bytes(), base_dir.as_ref())?;
        self.path = None;
        Ok(())
    }

    /// Whether the model has a node named exactly `name`.
    #[inline]
    pub fn has_node(&self, name: &str) -> bool {
        self.tables.has_node(name)
    }

    /// See [Tables::build_node].
    #[inline]
    pub fn build_node(&self, name: &str) -> Result<Node, Error> {
        self.tables.build_node(name)
    }

    #[inline]
    pub fn tables(&self) -> &Tables {
        &self.tables
    }

    #[inline]
    pub fn asset(&self) -> &Asset {
        &self.tables.asset
    }

    /// The document most recently loaded from a file, if any.
    #[inline]
    pub fn path(&self) -> Option<&Path> {
        self.path.as_deref()
    }

    /// Names of every node, in document order. Names may repeat.
    pub fn node_names(&self) -> impl Iterator<Item = &str> + '_ {
        self.tables.nodes.iter().map(|n| n.name.as_str())
    }
}

/// Load the document at `model_path` and resolve its first node named `node_name`.
///
/// ```no_run
/// let node = tessera::load_node("assets/box.gltf", "Box")?;
/// println!("{:?}", node.transform.matrix());
/// # Ok::<(), tessera::LoadError>(())
/// ```
pub fn load_node(model_path: impl AsRef<Path>, node_name: &str) -> Result<Node, LoadError> {
    Model::open(model_path)?.build_node(node_name)
}
