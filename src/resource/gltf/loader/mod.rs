use anyhow::Result;

use crate::resource::gltf::asset::GltfAsset;

pub mod file;

pub trait GltfLoader {
    fn asset(&self) -> &impl GltfAsset;
    fn load_buffer_data(&mut self, buffer_id: usize) -> Result<Vec<u8>>;
}
