use tessera_mesh::AttributeComponent;

use crate::{
    error::Error,
    table::{Primitive, Tables},
};

impl Tables {
    /// Copy the index list of `prim` out of its buffer.
    ///
    /// A primitive without an indices accessor yields an empty list.
    ///
    /// # Errors
    ///
    /// * [Error::UnsupportedIndexType] unless the accessor's components are `U16`
    /// * [Error::Buffer] if the run extends past the end of the buffer payload
    pub fn indices(&self, prim: &Primitive) -> Result<Vec<u16>, Error> {
        let Some(index) = prim.indices else {
            return Ok(Vec::new());
        };
        let loc = self.locate(index)?;
        match loc.accessor.component_type {
            AttributeComponent::U16 => {}
            component => {
                return Err(Error::UnsupportedIndexType {
                    accessor: index,
                    component,
                })
            }
        }
        let payload = &self.buffer(loc.buffer)?.payload;
        Ok(payload.read::<u16>(loc.byte_offset, loc.accessor.count)?)
    }
}

#[cfg(test)]
mod tests {
    use crate::{error::Error, resolve::fixture, table::Primitive};
    use tessera_mesh::{buffer, AttributeComponent, Mode};

    fn with_indices(indices: Option<usize>) -> Primitive {
        Primitive {
            position: None,
            normal: None,
            indices,
            material: None,
            mode: Mode::Triangles,
        }
    }

    #[test]
    fn reads_u16_run() {
        let tables = fixture::tables();
        let indices = tables.indices(&with_indices(Some(fixture::INDICES))).unwrap();
        assert_eq!(indices, [0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn honours_accessor_offset() {
        let tables = fixture::tables();
        let indices = tables
            .indices(&with_indices(Some(fixture::SHIFTED_INDICES)))
            .unwrap();
        assert_eq!(indices, [2, 3]);
    }

    #[test]
    fn absent_accessor() {
        let tables = fixture::tables();
        assert!(tables.indices(&with_indices(None)).unwrap().is_empty());
    }

    #[test]
    fn only_u16() {
        let tables = fixture::tables();
        assert!(matches!(
            tables.indices(&with_indices(Some(fixture::WIDE_INDICES))),
            Err(Error::UnsupportedIndexType {
                accessor: fixture::WIDE_INDICES,
                component: AttributeComponent::U32
            })
        ));
        assert!(matches!(
            tables.indices(&with_indices(Some(fixture::POSITIONS))),
            Err(Error::UnsupportedIndexType {
                component: AttributeComponent::F32,
                ..
            })
        ));
    }

    #[test]
    fn past_end_of_payload() {
        let mut tables = fixture::tables();
        tables.accessors[fixture::INDICES].count = 15;
        assert!(matches!(
            tables.indices(&with_indices(Some(fixture::INDICES))),
            Err(Error::Buffer(buffer::Error::RangeOverflow { .. }))
        ));
    }

    #[test]
    fn dangling_accessor() {
        let tables = fixture::tables();
        assert!(matches!(
            tables.indices(&with_indices(Some(42))),
            Err(Error::ReferentialIntegrity { index: 42, .. })
        ));
    }
}
