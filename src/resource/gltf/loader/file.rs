use std::collections::HashMap;

use anyhow::Result;

use crate::error::Error;
use crate::resource::gltf::asset::file::FileSystemGltfAsset;
use crate::resource::gltf::asset::GltfAsset;
use crate::resource::gltf::loader::GltfLoader;

pub struct FileSystemGltfLoader<'a> {
    asset: &'a FileSystemGltfAsset,
    buffer_registry: HashMap<String, Vec<u8>>,
}

impl<'a> FileSystemGltfLoader<'a> {
    pub fn new(asset: &'a FileSystemGltfAsset) -> Self {
        Self {
            asset,
            buffer_registry: HashMap::new(),
        }
    }

    fn read_binary_chunk(&self) -> Result<Vec<u8>> {
        match &self.asset.gltf().blob {
            Some(blob) => Ok(blob.clone()),
            None => Err(Error::new(String::from(
                "The asset references its binary chunk but has none.",
            ))
            .into()),
        }
    }

    fn read_uri(&mut self, uri: &str) -> Result<Vec<u8>> {
        if uri.starts_with("data:") {
            return Err(
                Error::new(String::from("Loading data URI buffers is not supported.")).into(),
            );
        }

        if let Some(data) = self.buffer_registry.get(uri) {
            log::debug!("Skipping duplicate read of glTF buffer file: {uri}");
            return Ok(data.clone());
        }

        let buffer_path = self.asset.root.join(uri);
        let data = std::fs::read(&buffer_path)?;

        self.buffer_registry.insert(uri.to_string(), data.clone());

        Ok(data)
    }
}

impl<'a> GltfLoader for FileSystemGltfLoader<'a> {
    fn asset(&self) -> &impl GltfAsset {
        self.asset
    }

    fn load_buffer_data(&mut self, buffer_id: usize) -> Result<Vec<u8>> {
        let asset = self.asset;
        let (source, length) = match asset.gltf().buffers().nth(buffer_id) {
            Some(buffer) => (buffer.source(), buffer.length()),
            None => {
                return Err(
                    Error::new(format!("The given buffer ID is invalid: {buffer_id}")).into(),
                )
            }
        };

        let data = match source {
            gltf::buffer::Source::Bin => self.read_binary_chunk()?,
            gltf::buffer::Source::Uri(uri) => self.read_uri(uri)?,
        };

        if data.len() < length {
            log::warn!(
                "glTF buffer {buffer_id} holds {} bytes but declares {length}",
                data.len()
            );
        }

        Ok(data)
    }
}
