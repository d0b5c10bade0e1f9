//! Logging initialization for sentinel_app.
//!
//! The controller always logs to the terminal and, best-effort, to
//! `./sentinel.log` in the current working directory. The file logger is
//! optional: a read-only working directory must not keep the controller
//! from starting.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, CombinedLogger, ConfigBuilder, SharedLogger, TermLogger, TerminalMode,
    WriteLogger,
};

const LOG_PATH: &str = "./sentinel.log";

pub fn initialize() {
    let level = LevelFilter::Info;
    let config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build();

    let mut loggers: Vec<Box<dyn SharedLogger>> = vec![TermLogger::new(
        level,
        config.clone(),
        TerminalMode::Mixed,
        ColorChoice::Auto,
    )];

    let log_path = PathBuf::from(LOG_PATH);
    match File::create(&log_path) {
        Ok(file) => loggers.push(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
        }
    }

    let _ = CombinedLogger::init(loggers);
}
