#![doc = include_str!("../README.md")]
#![cfg_attr(not(debug_assertions), warn(missing_docs))]

mod buffer;
mod de;
pub mod error;
mod model;
mod resolve;
pub mod table;

pub use error::{Error, LoadError};
pub use model::{load_node, Model};
pub use table::Tables;

/// Output types of node resolution.
pub use tessera_mesh as mesh;
pub use tessera_mesh::{Material, Mesh, Node, Primitive, Transform};

pub use nalgebra;
