pub mod file;

pub trait GltfAsset {
    fn gltf(&self) -> &gltf::Gltf;
}
