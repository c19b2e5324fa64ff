use std::path::{Path, PathBuf};

use anyhow::{Context, Result};

use crate::resource::gltf::asset::GltfAsset;

pub struct FileSystemGltfAsset {
    gltf: gltf::Gltf,
    /// Directory that external buffer URIs are resolved against.
    pub root: PathBuf,
}

impl FileSystemGltfAsset {
    pub fn from_path(gltf_path: &Path) -> Result<Self> {
        if !gltf_path.is_file() {
            return Err(std::io::Error::new(
                std::io::ErrorKind::InvalidInput,
                format!("The given path is not a file: {}", gltf_path.display()),
            )
            .into());
        }

        let root = match gltf_path.parent() {
            Some(root) => root.to_path_buf(),
            None => {
                return Err(std::io::Error::new(
                    std::io::ErrorKind::InvalidInput,
                    format!(
                        "Unable to find the parent directory of the given path: {}",
                        gltf_path.display()
                    ),
                )
                .into())
            }
        };

        let data = std::fs::read(gltf_path)
            .with_context(|| format!("Could not read glTF file from {}", gltf_path.display()))?;

        Self::from_slice(&data, root)
    }

    pub fn from_slice(data: &[u8], root: PathBuf) -> Result<Self> {
        let parsed_gltf = gltf::Gltf::from_slice(data).context("Could not parse glTF document")?;

        Ok(Self {
            gltf: parsed_gltf,
            root,
        })
    }
}

impl GltfAsset for FileSystemGltfAsset {
    fn gltf(&self) -> &gltf::Gltf {
        &self.gltf
    }
}
