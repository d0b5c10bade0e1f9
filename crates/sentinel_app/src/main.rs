mod config;
mod desktop;
mod effects;
mod logging;
mod shell;

use std::path::Path;

use anyhow::Result;

const CONFIG_PATH: &str = "./sentinel.ron";

fn main() -> Result<()> {
    logging::initialize();

    let startup = std::env::args().skip(1).any(|arg| arg == "--startup");
    let config = config::load(Path::new(CONFIG_PATH));

    shell::run(config, startup)
}
