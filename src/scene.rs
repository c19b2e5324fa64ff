use std::path::{Path, PathBuf};

use anyhow::Result;

use crate::data::document::{Document, MeshDescriptor, PrimitiveDescriptor};
use crate::data::model::{Mesh, Model};
use crate::decode::assemble::assemble;
use crate::decode::dispatch::{dispatch, Attribute, AttributeRequest, DecodeOptions};
use crate::resource::gltf::asset::file::FileSystemGltfAsset;
use crate::resource::gltf::loader::file::FileSystemGltfLoader;

pub struct ModelLoader<'a> {
    document: &'a Document,
    options: DecodeOptions,
}

impl<'a> ModelLoader<'a> {
    pub fn load(document: &'a Document, options: DecodeOptions) -> Vec<Model> {
        let model_loader = Self { document, options };
        model_loader.load_models()
    }

    fn load_models(&self) -> Vec<Model> {
        log::info!(
            "Processing glTF document with {} meshes and {} accessors",
            self.document.meshes.len(),
            self.document.accessors.len(),
        );

        self.document
            .meshes
            .iter()
            .map(|mesh| self.load_mesh(mesh))
            .collect()
    }

    fn load_mesh(&self, mesh: &MeshDescriptor) -> Model {
        let mesh_log_name = format!(
            "{} - [{}]",
            mesh.name.as_deref().unwrap_or("<UNNAMED>"),
            mesh.index,
        );

        log::debug!("Loading glTF mesh: {mesh_log_name}");

        let mut meshes = Vec::with_capacity(mesh.primitives.len());
        for primitive in &mesh.primitives {
            log::debug!(
                "Loading glTF primitive {} for glTF mesh: {mesh_log_name}",
                primitive.index
            );

            match self.load_primitive(primitive) {
                Some(loaded) => meshes.push(loaded),
                None => log::error!(
                    "Skipping glTF primitive {} of mesh {mesh_log_name}: \
                     it has no position attribute",
                    primitive.index
                ),
            }
        }

        Model {
            name: mesh.name.clone().unwrap_or_default(),
            meshes,
        }
    }

    fn attribute_requests(&self, primitive: &PrimitiveDescriptor) -> Option<Vec<AttributeRequest>> {
        let mut requests = vec![AttributeRequest {
            attribute: Attribute::Position,
            accessor: primitive.position?,
        }];

        match primitive.indices {
            Some(accessor) => requests.push(AttributeRequest {
                attribute: Attribute::Indices,
                accessor,
            }),
            None => log::warn!(
                "glTF primitive {} has no index accessor, its index list stays empty",
                primitive.index
            ),
        }

        if self.options.normals {
            if let Some(accessor) = primitive.normal {
                requests.push(AttributeRequest {
                    attribute: Attribute::Normal,
                    accessor,
                });
            }
        }

        if self.options.tex_coords {
            if let Some(accessor) = primitive.tex_coord_0 {
                requests.push(AttributeRequest {
                    attribute: Attribute::TexCoord0,
                    accessor,
                });
            }
        }

        Some(requests)
    }

    fn load_primitive(&self, primitive: &PrimitiveDescriptor) -> Option<Mesh> {
        let requests = self.attribute_requests(primitive)?;
        let mesh = assemble(dispatch(self.document, &requests));

        log::debug!(
            "Decoded {} vertices and {} indices for glTF primitive {}",
            mesh.vertex_count(),
            mesh.indices.len(),
            primitive.index,
        );

        Some(mesh)
    }
}

fn load_asset(asset: &FileSystemGltfAsset, options: DecodeOptions) -> Vec<Model> {
    let mut gltf_loader = FileSystemGltfLoader::new(asset);
    let document = Document::load(&mut gltf_loader);

    ModelLoader::load(&document, options)
}

/// Reads and decodes every mesh of the glTF asset at `path`.
///
/// Only an unreadable file or an unparsable document is an error; broken
/// accessors degrade the affected meshes instead.
pub fn load_models(path: &Path, options: DecodeOptions) -> Result<Vec<Model>> {
    log::info!("Reading glTF file from path: {}", path.display());

    let asset = FileSystemGltfAsset::from_path(path)?;

    Ok(load_asset(&asset, options))
}

/// Decodes an in-memory glTF asset. External buffers are resolved against `root`.
pub fn load_models_from_slice(
    data: &[u8],
    root: PathBuf,
    options: DecodeOptions,
) -> Result<Vec<Model>> {
    let asset = FileSystemGltfAsset::from_slice(data, root)?;

    Ok(load_asset(&asset, options))
}
