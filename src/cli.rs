use clap::{Args, Parser};

/// Decodes the mesh geometry of a binary glTF asset
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Path to the .glb (or .gltf) file whose meshes should be decoded
    pub gltf: String,

    #[command(flatten)]
    pub attributes: OptionalAttributes,

    /// Print the decoded models as JSON instead of a summary
    #[arg(long)]
    pub json: bool,
}

#[derive(Args, Debug, Clone)]
pub struct OptionalAttributes {
    /// Also decode the NORMAL attribute of every primitive
    #[arg(short = 'n', long)]
    pub normals: bool,

    /// Also decode the TEXCOORD_0 attribute of every primitive
    #[arg(short = 't', long)]
    pub tex_coords: bool,
}

impl From<OptionalAttributes> for glb_mesh_decoder::DecodeOptions {
    fn from(value: OptionalAttributes) -> Self {
        glb_mesh_decoder::DecodeOptions {
            normals: value.normals,
            tex_coords: value.tex_coords,
        }
    }
}
