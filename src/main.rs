use clap::Parser;

use crate::cli::Cli;
use glb_mesh_decoder::args::Args;
use glb_mesh_decoder::run;

mod cli;

fn main() {
    let cli = Cli::parse();
    let result = run(Args {
        gltf: cli.gltf,
        options: cli.attributes.into(),
        json: cli.json,
    });

    if let Err(err) = result {
        log::error!("Error: {err:#}");
        log::logger().flush();
        std::process::exit(1);
    }
}
