//! Logging initialization for byline_app.
//!
//! Writes logs to `./byline.log` in the current working directory so the
//! terminal stays free for the dashboard itself.

use std::fs::File;
use std::path::PathBuf;

use log::LevelFilter;
use simplelog::{
    ColorChoice, Config, ConfigBuilder, SharedLogger, TermLogger, TerminalMode, WriteLogger,
};

/// Destination for log output.
#[allow(dead_code)]
pub enum LogDestination {
    /// Write to ./byline.log in the current directory.
    File,
    /// Write to terminal (stderr). Only useful when the TUI is not running.
    Terminal,
}

/// Initialize the logger with the specified destination.
///
/// For `LogDestination::File`, creates `./byline.log` in the current
/// working directory; if the file cannot be created the app runs unlogged
/// rather than failing.
pub fn initialize(destination: LogDestination) {
    let level = LevelFilter::Debug;
    let config = build_config();

    let logger: Box<dyn SharedLogger> = match destination {
        LogDestination::File => match create_file_logger(level, config) {
            Some(file_logger) => file_logger,
            None => return,
        },
        LogDestination::Terminal => TermLogger::new(
            level,
            config,
            TerminalMode::Stderr,
            ColorChoice::Auto,
        ),
    };

    let _ = simplelog::CombinedLogger::init(vec![logger]);
}

fn build_config() -> Config {
    ConfigBuilder::new()
        .set_time_format_rfc3339()
        .set_target_level(LevelFilter::Error)
        .build()
}

fn create_file_logger(level: LevelFilter, config: Config) -> Option<Box<WriteLogger<File>>> {
    let log_path = PathBuf::from("./byline.log");
    match File::create(&log_path) {
        Ok(file) => Some(WriteLogger::new(level, config, file)),
        Err(err) => {
            eprintln!("Warning: Could not create log file at {:?}: {}", log_path, err);
            None
        }
    }
}
