pub mod asset;
pub mod loader;
