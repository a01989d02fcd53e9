//! Resolution of named nodes into owned [Nodes](tessera_mesh::Node).

mod accessor;
mod indices;

#[cfg(test)]
pub(crate) mod fixture;

use tessera_mesh::{AttributeUsage, Mesh, Node, Primitive, Transform};

use crate::{error::Error, table, table::Tables};

impl Tables {
    /// Whether any node is named exactly `name`.
    #[inline]
    pub fn has_node(&self, name: &str) -> bool {
        self.find_node(name).is_some()
    }

    /// Resolve the first node named `name`, together with its mesh, into an owned [Node].
    ///
    /// # Errors
    ///
    /// * [Error::NotFound] if no node is named `name`
    /// * Any error encountered resolving the node's mesh
    #[tracing::instrument(skip(self))]
    pub fn build_node(&self, name: &str) -> Result<Node, Error> {
        let node = self
            .find_node(name)
            .ok_or_else(|| Error::NotFound(name.to_owned()))?;
        let transform = Transform::from_gltf(node.translation, node.rotation, node.scale);
        let mesh = node.mesh.map(|m| self.build_mesh(m)).transpose()?;
        Ok(Node {
            name: node.name.clone(),
            transform,
            mesh,
        })
    }

    fn build_mesh(&self, index: usize) -> Result<Mesh, Error> {
        let mesh = self.mesh(index)?;
        let primitives = mesh
            .primitives
            .iter()
            .map(|p| self.build_primitive(p))
            .collect::<Result<Vec<_>, _>>()?;
        tracing::debug!(mesh = index, primitives = primitives.len(), "resolved mesh");
        Ok(Mesh {
            name: mesh.name.clone(),
            materials: self.materials.clone(),
            buffers: self.buffers.iter().map(|b| b.payload.clone()).collect(),
            primitives,
        })
    }

    fn build_primitive(&self, prim: &table::Primitive) -> Result<Primitive, Error> {
        let indices = self.indices(prim)?;
        let position = prim.position.map(|a| self.component_info(a)).transpose()?;
        let normal = prim.normal.map(|a| self.component_info(a)).transpose()?;
        if let Some(m) = prim.material {
            self.material(m)?;
        }
        tracing::trace!(
            mode = ?prim.mode,
            indices = indices.len(),
            position = position.is_some(),
            normal = normal.is_some(),
            "resolved primitive"
        );
        Ok(Primitive::new(prim.mode, indices, prim.material)
            .with_attr(AttributeUsage::Position, position)
            .with_attr(AttributeUsage::Normal, normal))
    }
}
