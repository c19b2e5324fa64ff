use std::path::Path;

use anyhow::Result;

use crate::args::Args;

pub mod args;
pub mod data;
pub mod decode;
mod error;
pub mod resource;
pub mod scene;

pub use crate::data::model::{Mesh, Model, RenderHandles};
pub use crate::decode::dispatch::DecodeOptions;
pub use crate::error::{CodecError, ExtractError, ResolveError};
pub use crate::scene::{load_models, load_models_from_slice};

pub fn run(args: Args) -> Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

    let models = load_models(Path::new(&args.gltf), args.options);
    log::logger().flush();
    let models = models?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&models)?);
        return Ok(());
    }

    for (model_index, model) in models.iter().enumerate() {
        log::info!(
            "Model {model_index} '{}' has {} meshes",
            model.name,
            model.meshes.len()
        );

        for (mesh_index, mesh) in model.meshes.iter().enumerate() {
            log::info!(
                "  Mesh {mesh_index}: {} vertices ({} bytes), {} indices ({} bytes)",
                mesh.vertex_count(),
                mesh.vertex_bytes().len(),
                mesh.indices.len(),
                mesh.index_bytes().len(),
            );
        }
    }
    log::logger().flush();

    Ok(())
}
