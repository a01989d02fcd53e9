use tessera_mesh::ComponentInfo;

use crate::{
    error::Error,
    table::{Accessor, Tables},
};

/// Where an accessor's data starts.
#[derive(Debug, Clone, Copy)]
pub(crate) struct Location<'t> {
    pub(crate) accessor: &'t Accessor,
    pub(crate) buffer: usize,
    /// `accessor.byte_offset + view.byte_offset`
    pub(crate) byte_offset: usize,
}

impl Tables {
    /// Follow an accessor through its buffer view to the buffer holding its data.
    pub(crate) fn locate(&self, index: usize) -> Result<Location<'_>, Error> {
        let accessor = self.accessor(index)?;
        let view_index = accessor
            .buffer_view
            .ok_or(Error::DetachedAccessor(index))?;
        let view = self.buffer_view(view_index)?;
        self.buffer(view.buffer)?;
        Ok(Location {
            accessor,
            buffer: view.buffer,
            byte_offset: accessor.byte_offset.saturating_add(view.byte_offset),
        })
    }

    /// Everything needed to read the vector attribute described by the accessor at `index`.
    ///
    /// # Errors
    ///
    /// * [Error::UnsupportedShape] if the accessor isn't `VEC2`, `VEC3`, or `VEC4`
    /// * [Error::ReferentialIntegrity] if the accessor, its view, or its buffer don't exist
    pub fn component_info(&self, index: usize) -> Result<ComponentInfo, Error> {
        let loc = self.locate(index)?;
        let acc = loc.accessor;
        let component_count = acc
            .attr_type
            .vector_width()
            .ok_or(Error::UnsupportedShape {
                accessor: index,
                attr_type: acc.attr_type,
            })?;
        let (min_bounds, max_bounds) = acc.bounds.map_or(([0.0; 3], [0.0; 3]), |b| (b.min, b.max));
        Ok(ComponentInfo {
            buffer: loc.buffer,
            byte_offset: loc.byte_offset,
            component_type: acc.component_type,
            component_count,
            count: acc.count,
            min_bounds,
            max_bounds,
        })
    }
}
