use std::process;
use log::{error, LevelFilter};

use geokit::GeokitConfig;
use geokit::utils::logger::Logger;
use geokit::commands::{build_cli, CommandFactory, GeokitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let config = match matches.get_one::<String>("config") {
        Some(path) => match GeokitConfig::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading configuration {}: {}", path, e);
                process::exit(1);
            }
        },
        None => GeokitConfig::default(),
    };

    let level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        config.log_level
    };

    let log_file = matches.get_one::<String>("log-file").cloned().or_else(|| config.log_file.clone());
    match log_file {
        Some(path) => {
            if let Err(e) = Logger::init_global_logger(&path, level) {
                eprintln!("Error setting up global logger: {}", e);
                process::exit(1);
            }
        },
        None => {
            env_logger::Builder::new()
                .filter_level(level)
                .parse_default_env()
                .init();
        }
    }

    let factory = GeokitCommandFactory::new();

    match factory.create_command(&matches, &config) {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    };
}
