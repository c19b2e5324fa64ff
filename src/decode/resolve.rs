use crate::data::document::{ComponentKind, Document, ElementType};
use crate::error::ResolveError;

/// Location and layout of an accessor's data, borrowing the owning buffer.
#[derive(Debug, Clone, Copy)]
pub struct ResolvedView<'a> {
    pub accessor: usize,
    pub count: usize,
    /// Bytes available to the accessor, from `byte_offset` to the end of its buffer view.
    pub byte_length: usize,
    /// Absolute offset of the first element within `buffer`.
    pub byte_offset: usize,
    pub byte_stride: Option<usize>,
    pub element_type: ElementType,
    pub component_kind: ComponentKind,
    pub buffer: &'a [u8],
}

impl<'a> ResolvedView<'a> {
    /// The accessor's byte range. Always in bounds once resolved.
    pub fn bytes(&self) -> &'a [u8] {
        let buffer: &'a [u8] = self.buffer;
        &buffer[self.byte_offset..self.byte_offset + self.byte_length]
    }
}

fn out_of_range(table: &'static str, index: usize, count: usize) -> ResolveError {
    ResolveError::IndexOutOfRange {
        table,
        index,
        count,
    }
}

pub fn resolve(
    document: &Document,
    accessor_id: usize,
) -> Result<ResolvedView<'_>, ResolveError> {
    let accessor = match document.accessors.get(accessor_id) {
        Some(accessor) => accessor,
        None => {
            return Err(out_of_range("accessor", accessor_id, document.accessors.len()))
        }
    };

    let view_id = match accessor.buffer_view {
        Some(view_id) => view_id,
        None => {
            return Err(ResolveError::MissingBufferView {
                accessor: accessor_id,
            })
        }
    };

    let view = match document.buffer_views.get(view_id) {
        Some(view) => view,
        None => {
            return Err(out_of_range("buffer view", view_id, document.buffer_views.len()))
        }
    };

    let buffer = match document.buffers.get(view.buffer) {
        Some(buffer) => buffer,
        None => {
            return Err(out_of_range("buffer", view.buffer, document.buffers.len()))
        }
    };

    let start = view.byte_offset.checked_add(accessor.byte_offset);
    let view_end = view.byte_offset.checked_add(view.byte_length);

    let (start, end) = match (start, view_end) {
        (Some(start), Some(end)) if start <= end && end <= buffer.data.len() => (start, end),
        _ => {
            return Err(ResolveError::ViewOutOfBounds {
                accessor: accessor_id,
                start: start.unwrap_or(usize::MAX),
                end: view_end.unwrap_or(usize::MAX),
                buffer_length: buffer.data.len(),
            })
        }
    };

    let byte_length = end - start;

    // Past this count the stride shrinks to zero and no element can be read.
    let capacity = match view.byte_stride {
        Some(stride) if stride > 0 => byte_length.div_ceil(stride),
        _ => byte_length,
    };

    if accessor.count > capacity {
        return Err(ResolveError::CountExceedsView {
            accessor: accessor_id,
            count: accessor.count,
            capacity,
        });
    }

    Ok(ResolvedView {
        accessor: accessor_id,
        count: accessor.count,
        byte_length,
        byte_offset: start,
        byte_stride: view.byte_stride,
        element_type: accessor.element_type,
        component_kind: ComponentKind::from_gl_code(accessor.component_type),
        buffer: &buffer.data,
    })
}
