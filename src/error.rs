#[derive(Debug, thiserror::Error)]
#[error("{message}")]
pub struct Error {
    message: String,
}

impl Error {
    pub fn new(message: String) -> Self {
        Self { message }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum CodecError {
    #[error("Cannot decode {actual} bytes, exactly {expected} bytes are required")]
    LengthMismatch { expected: usize, actual: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ResolveError {
    #[error("The given {table} index is out of range: {index} (count: {count})")]
    IndexOutOfRange {
        table: &'static str,
        index: usize,
        count: usize,
    },

    #[error("The specified accessor has no buffer view: {accessor}")]
    MissingBufferView { accessor: usize },

    #[error(
        "The byte range {start}..{end} of accessor {accessor} lies outside of its buffer \
         ({buffer_length} bytes)"
    )]
    ViewOutOfBounds {
        accessor: usize,
        start: usize,
        end: usize,
        buffer_length: usize,
    },

    #[error("Accessor {accessor} claims {count} elements but its view holds at most {capacity}")]
    CountExceedsView {
        accessor: usize,
        count: usize,
        capacity: usize,
    },
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ExtractError {
    #[error(transparent)]
    Resolve(#[from] ResolveError),

    #[error("Failed to decode element {element}: {source}")]
    Decode {
        element: usize,
        #[source]
        source: CodecError,
    },

    #[error(
        "Unsupported combination of element type {element_type:?} and component type \
         {component_kind:?}"
    )]
    UnsupportedType {
        element_type: crate::data::document::ElementType,
        component_kind: crate::data::document::ComponentKind,
    },

    #[error("The output array holds {actual} values but {expected} are required")]
    OutputSizeMismatch { expected: usize, actual: usize },

    #[error("{count} elements of {components} components do not fit in memory")]
    LengthOverflow { count: usize, components: usize },
}
