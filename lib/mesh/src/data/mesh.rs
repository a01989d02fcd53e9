pub mod primitive;

pub use primitive::attribute::{AttributeComponent, AttributeType, AttributeUsage, Component, ComponentInfo};
pub use primitive::{Mode, Primitive};

use crate::{buffer, Buffer, Material};

/// A set of primitives, together with every material & buffer they may refer to.
///
/// # Characteristics
///
/// * `materials` and `buffers` are copies of the entire tables of the source document, so
///   material and buffer indices held by primitives are valid here unchanged
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Mesh {
    pub name: String,
    pub materials: Vec<Material>,
    pub buffers: Vec<Buffer>,
    pub primitives: Vec<Primitive>,
}

impl Mesh {
    /// The material with which `prim` is rendered, if it has one.
    pub fn material_of(&self, prim: &Primitive) -> Option<&Material> {
        prim.material().and_then(|i| self.materials.get(i))
    }

    /// Decode the attribute run described by `info` into a flat list of components.
    pub fn read_attribute(&self, info: &ComponentInfo) -> Result<Vec<f32>, buffer::Error> {
        self.buffers
            .get(info.buffer)
            .ok_or(buffer::Error::NoSuchBuffer(info.buffer))?
            .read_f32(info.component_type, info.byte_offset, info.len_components())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn info(buffer: usize, byte_offset: usize, count: usize) -> ComponentInfo {
        ComponentInfo {
            buffer,
            byte_offset,
            component_type: AttributeComponent::F32,
            component_count: 2,
            count,
            min_bounds: [0.0; 3],
            max_bounds: [0.0; 3],
        }
    }

    #[test]
    fn read_attribute() {
        let floats = [1.0f32, 2.0, 3.0, 4.0];
        let mesh = Mesh {
            buffers: vec![Buffer::from(
                floats.iter().flat_map(|f| f.to_le_bytes()).collect::<Vec<u8>>(),
            )],
            ..Default::default()
        };
        assert_eq!(mesh.read_attribute(&info(0, 0, 2)).unwrap(), floats);
        assert_eq!(mesh.read_attribute(&info(0, 8, 1)).unwrap(), [3.0, 4.0]);
        assert_eq!(
            mesh.read_attribute(&info(1, 0, 1)),
            Err(buffer::Error::NoSuchBuffer(1))
        );
        assert!(mesh.read_attribute(&info(0, 8, 2)).is_err());
    }

    #[test]
    fn material_lookup() {
        let mesh = Mesh {
            materials: vec![Material {
                name: "red".into(),
                ..Default::default()
            }],
            ..Default::default()
        };
        let with = Primitive::new(Mode::Triangles, vec![], Some(0));
        let without = Primitive::new(Mode::Triangles, vec![], None);
        let dangling = Primitive::new(Mode::Triangles, vec![], Some(3));
        assert_eq!(mesh.material_of(&with).map(|m| m.name.as_str()), Some("red"));
        assert!(mesh.material_of(&without).is_none());
        assert!(mesh.material_of(&dangling).is_none());
    }
}
