use std::collections::HashMap;

use crate::data::model::{Mesh, RenderHandles};
use crate::decode::dispatch::Attribute;
use crate::decode::extract::DecodedArray;

fn take_f32(decoded: &mut HashMap<Attribute, DecodedArray>, attribute: Attribute) -> Vec<f32> {
    match decoded.remove(&attribute) {
        Some(DecodedArray::F32(values)) => values,
        Some(DecodedArray::U16(_)) => {
            log::warn!("Decoded {attribute:?} holds integers, leaving it empty");
            Vec::new()
        }
        None => Vec::new(),
    }
}

/// Builds a mesh from the decoded attributes of one primitive.
///
/// Index values are passed through as decoded, without checking them against the
/// vertex count.
pub fn assemble(mut decoded: HashMap<Attribute, DecodedArray>) -> Mesh {
    let vertices = take_f32(&mut decoded, Attribute::Position);
    let normals = take_f32(&mut decoded, Attribute::Normal);
    let tex_coords = take_f32(&mut decoded, Attribute::TexCoord0);

    let indices = match decoded.remove(&Attribute::Indices) {
        Some(DecodedArray::U16(values)) => values,
        Some(DecodedArray::F32(_)) => {
            log::warn!("Decoded indices hold floats, leaving them empty");
            Vec::new()
        }
        None => Vec::new(),
    };

    if vertices.len() % 3 != 0 {
        log::warn!(
            "Vertex buffer holds {} floats which is not a whole number of positions",
            vertices.len()
        );
    }

    Mesh {
        vertices,
        indices,
        normals,
        tex_coords,
        handles: RenderHandles::default(),
    }
}
