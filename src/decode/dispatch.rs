use std::collections::HashMap;
use std::sync::mpsc;

use crate::data::document::{Document, ElementType};
use crate::decode::extract::{extract, DecodedArray};
use crate::decode::resolve::resolve;
use crate::error::ExtractError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Attribute {
    Position,
    Normal,
    TexCoord0,
    Indices,
}

impl Attribute {
    fn element_type(self) -> ElementType {
        match self {
            Attribute::Position | Attribute::Normal => ElementType::Vec3,
            Attribute::TexCoord0 => ElementType::Vec2,
            Attribute::Indices => ElementType::Scalar,
        }
    }

    fn empty_array(self) -> DecodedArray {
        match self {
            Attribute::Indices => DecodedArray::U16(Vec::new()),
            _ => DecodedArray::F32(Vec::new()),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AttributeRequest {
    pub attribute: Attribute,
    pub accessor: usize,
}

/// Optional attributes decoded next to positions and indices.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DecodeOptions {
    pub normals: bool,
    pub tex_coords: bool,
}

struct Completion {
    attribute: Attribute,
    accessor: usize,
    array: DecodedArray,
    result: Result<(), ExtractError>,
}

fn decode_attribute(document: &Document, request: AttributeRequest) -> Completion {
    let mut array = request.attribute.empty_array();
    let result = decode_into(document, request, &mut array);

    Completion {
        attribute: request.attribute,
        accessor: request.accessor,
        array,
        result,
    }
}

fn decode_into(
    document: &Document,
    request: AttributeRequest,
    array: &mut DecodedArray,
) -> Result<(), ExtractError> {
    let view = resolve(document, request.accessor)?;

    if view.element_type != request.attribute.element_type() {
        return Err(ExtractError::UnsupportedType {
            element_type: view.element_type,
            component_kind: view.component_kind,
        });
    }

    *array = DecodedArray::for_view(&view)?;
    extract(&view, array)
}

/// Decodes each requested attribute on its own thread and waits for all of them.
///
/// Failed attributes are logged and come back empty or partially filled, so the
/// result always holds one entry per distinct requested attribute.
pub fn dispatch(
    document: &Document,
    requests: &[AttributeRequest],
) -> HashMap<Attribute, DecodedArray> {
    let mut decoded = HashMap::with_capacity(requests.len());
    let (sender, receiver) = mpsc::sync_channel::<Completion>(requests.len());

    std::thread::scope(|scope| {
        for &request in requests {
            let sender = sender.clone();
            scope.spawn(move || {
                let completion = decode_attribute(document, request);
                // The receiver outlives every task inside the scope.
                let _ = sender.send(completion);
            });
        }
        drop(sender);

        for _ in 0..requests.len() {
            let completion = match receiver.recv() {
                Ok(completion) => completion,
                Err(_) => {
                    log::error!("An attribute decode task exited without reporting completion");
                    break;
                }
            };

            if let Err(err) = &completion.result {
                log::error!(
                    "Failed to decode {:?} from accessor {}: {err}",
                    completion.attribute,
                    completion.accessor,
                );
            }

            decoded.insert(completion.attribute, completion.array);
        }
    });

    decoded
}
