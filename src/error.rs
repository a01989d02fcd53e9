use std::{io, path::PathBuf};

use tessera_mesh::{AttributeComponent, AttributeType};

use crate::table::Table;

/// Errors related to loading [Models](crate::Model) and resolving their nodes.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("could not read {path:?}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("{path:?} holds only {actual} bytes; its buffer declares {expected}")]
    TruncatedRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
    #[error("malformed buffer uri {uri:?}: {source}")]
    InvalidUri {
        uri: String,
        #[source]
        source: url::ParseError,
    },
    #[error("buffer uri {uri:?} has unsupported scheme {scheme:?}; only relative & file uris are supported")]
    UnsupportedUriScheme { uri: String, scheme: String },
    #[error("buffer uri {uri:?} does not name a local file")]
    UnresolvableUri { uri: String },
    #[error("buffer uri {uri:?} resolves to {path:?}, outside of the document's directory")]
    OutsideDocumentDir { uri: String, path: PathBuf },
    #[error("malformed document: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("accessor {accessor} has element type {attr_type:?}; expected VEC2, VEC3, or VEC4")]
    UnsupportedShape {
        accessor: usize,
        attr_type: AttributeType,
    },
    #[error("indices accessor {accessor} has component type {component:?}; only U16 indices are supported")]
    UnsupportedIndexType {
        accessor: usize,
        component: AttributeComponent,
    },
    #[error("no node named {0:?}")]
    NotFound(String),
    #[error("reference to {table}[{index}] out of bounds: 0..{len} ∌ {index}")]
    ReferentialIntegrity {
        table: Table,
        index: usize,
        len: usize,
    },
    #[error("accessor {0} does not reference a buffer view")]
    DetachedAccessor(usize),
    #[error(transparent)]
    Buffer(#[from] tessera_mesh::buffer::Error),
}

/// Any failure of [load_node](crate::load_node).
pub type LoadError = Error;

impl Error {
    pub(crate) fn io(path: impl Into<PathBuf>) -> impl FnOnce(io::Error) -> Self {
        let path = path.into();
        move |source| Self::Io { path, source }
    }
}
