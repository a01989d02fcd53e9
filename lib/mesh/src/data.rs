//! # See Also
//!
//! * [glTF 2.0 Spec](https://registry.khronos.org/glTF/specs/2.0/glTF-2.0.html)

pub mod buffer;
mod material;
mod mesh;

pub use buffer::{Buffer, BufferTarget};
pub use material::*;
pub use mesh::*;

use nalgebra::{Matrix4, Quaternion, UnitQuaternion, Vector3};

/// A numeric glTF enumeration value which doesn't name any known variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized {kind} code: {code}")]
pub struct UnknownCode {
    pub kind: &'static str,
    pub code: u32,
}

/// Local transformation of a [Node], relative to its parent.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Transform {
    pub translation: Vector3<f64>,
    /// Unit quaternion; `coords` are stored `[x, y, z, w]`, as in glTF.
    pub rotation: Quaternion<f64>,
    pub scale: Vector3<f64>,
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl Transform {
    pub fn identity() -> Self {
        Self {
            translation: Vector3::zeros(),
            rotation: Quaternion::identity(),
            scale: Vector3::repeat(1.0),
        }
    }

    /// Construct a transform from glTF node properties, substituting identity for each absent
    /// property.
    pub fn from_gltf(
        translation: Option<[f64; 3]>,
        rotation: Option<[f64; 4]>,
        scale: Option<[f64; 3]>,
    ) -> Self {
        let identity = Self::identity();
        Self {
            translation: translation.map_or(identity.translation, Vector3::from),
            rotation: rotation.map_or(identity.rotation, |[x, y, z, w]| {
                Quaternion::new(w, x, y, z)
            }),
            scale: scale.map_or(identity.scale, Vector3::from),
        }
    }

    /// The rotation as glTF stores it: `[x, y, z, w]`.
    #[inline]
    pub fn rotation_xyzw(&self) -> [f64; 4] {
        let q = &self.rotation;
        [q.i, q.j, q.k, q.w]
    }

    /// `T * R * S`, the order in which glTF applies node transformations.
    pub fn matrix(&self) -> Matrix4<f64> {
        Matrix4::new_translation(&self.translation)
            * UnitQuaternion::from_quaternion(self.rotation).to_homogeneous()
            * Matrix4::new_nonuniform_scaling(&self.scale)
    }
}

/// A resolved scene node. Owns everything it refers to.
#[derive(Debug, Clone, PartialEq)]
pub struct Node {
    pub name: String,
    pub transform: Transform,
    /// If extant, the node's mesh, with its materials & buffer payloads
    pub mesh: Option<Mesh>,
}

impl Node {
    #[inline]
    pub fn has_mesh(&self) -> bool {
        self.mesh.is_some()
    }
}
