use serde_json::{json, Value};

pub const TRIANGLE_POSITIONS: [f32; 9] = [0.0, 0.5, 0.0, -0.5, -0.5, 0.0, 0.5, -0.5, 0.0];
pub const TRIANGLE_INDICES: [u16; 3] = [0, 1, 2];

pub fn f32_bytes(values: &[f32]) -> Vec<u8> {
    values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

pub fn u16_bytes(values: &[u16]) -> Vec<u8> {
    values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

/// Wraps a glTF JSON document and its binary chunk into a GLB container.
pub fn assemble_glb(root: &Value, buffer_data: &[u8]) -> Vec<u8> {
    let json_bytes = serde_json::to_vec(root).expect("Failed to serialize glTF JSON");

    let json_padding = (4 - (json_bytes.len() % 4)) % 4;
    let json_chunk_length = json_bytes.len() + json_padding;

    let buffer_padding = (4 - (buffer_data.len() % 4)) % 4;
    let buffer_chunk_length = buffer_data.len() + buffer_padding;

    let total_length = 12 + 8 + json_chunk_length + 8 + buffer_chunk_length;

    let mut glb = Vec::with_capacity(total_length);
    glb.extend_from_slice(b"glTF");
    glb.extend_from_slice(&2u32.to_le_bytes());
    glb.extend_from_slice(&(total_length as u32).to_le_bytes());

    glb.extend_from_slice(&(json_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&0x4E4F534Au32.to_le_bytes()); // "JSON"
    glb.extend_from_slice(&json_bytes);
    glb.resize(glb.len() + json_padding, b' ');

    glb.extend_from_slice(&(buffer_chunk_length as u32).to_le_bytes());
    glb.extend_from_slice(&0x004E4942u32.to_le_bytes()); // "BIN\0"
    glb.extend_from_slice(buffer_data);
    glb.resize(glb.len() + buffer_padding, 0);

    glb
}

/// One triangle: 3 vec3 positions followed by 3 u16 indices in a single buffer.
pub fn triangle_gltf(position_count: usize, buffer_length: usize) -> Value {
    json!({
        "asset": { "version": "2.0" },
        "buffers": [{ "byteLength": buffer_length }],
        "bufferViews": [
            { "buffer": 0, "byteOffset": 0, "byteLength": 36 },
            { "buffer": 0, "byteOffset": 36, "byteLength": 6 }
        ],
        "accessors": [
            {
                "bufferView": 0,
                "componentType": 5126,
                "count": position_count,
                "type": "VEC3",
                "min": [-0.5, -0.5, 0.0],
                "max": [0.5, 0.5, 0.0]
            },
            {
                "bufferView": 1,
                "componentType": 5123,
                "count": 3,
                "type": "SCALAR"
            }
        ],
        "meshes": [{
            "name": "Triangle",
            "primitives": [{ "attributes": { "POSITION": 0 }, "indices": 1 }]
        }]
    })
}

pub fn triangle_buffer() -> Vec<u8> {
    let mut buffer = f32_bytes(&TRIANGLE_POSITIONS);
    buffer.extend(u16_bytes(&TRIANGLE_INDICES));
    buffer
}

pub fn triangle_glb() -> Vec<u8> {
    let buffer = triangle_buffer();
    assemble_glb(&triangle_gltf(3, buffer.len()), &buffer)
}
