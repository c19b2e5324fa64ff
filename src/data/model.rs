use serde::Serialize;

/// Handles filled in by the GPU upload stage. Always zero when produced by the decoder.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RenderHandles {
    pub vertex_array: u32,
    pub vertex_buffer: u32,
    pub index_buffer: u32,
    pub vertex_shader: u32,
    pub fragment_shader: u32,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Mesh {
    pub vertices: Vec<f32>,
    pub indices: Vec<u16>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub normals: Vec<f32>,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tex_coords: Vec<f32>,
    pub handles: RenderHandles,
}

impl Mesh {
    pub fn vertex_count(&self) -> usize {
        self.vertices.len() / 3
    }

    pub fn vertex_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.vertices)
    }

    pub fn index_bytes(&self) -> &[u8] {
        bytemuck::cast_slice(&self.indices)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct Model {
    pub name: String,
    pub meshes: Vec<Mesh>,
}
