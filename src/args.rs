use crate::decode::dispatch::DecodeOptions;

pub struct Args {
    pub gltf: String,
    pub options: DecodeOptions,
    pub json: bool,
}
