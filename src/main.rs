use std::process;
use log::{debug, error, LevelFilter};

use onedeefy::cli::build_cli;
use onedeefy::commands::{usage, CommandFactory, OnedeefyCommandFactory};
use onedeefy::config::Settings;
use onedeefy::errors::LinearizeError;
use onedeefy::utils::logger::Logger;

fn main() {
    let matches = build_cli().get_matches();

    let mut settings = match matches.get_one::<String>("config") {
        Some(path) => match Settings::load(path) {
            Ok(s) => s,
            Err(e) => {
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        None => Settings::default(),
    };
    if let Some(path) = matches.get_one::<String>("log-file") {
        settings.log_file = Some(path.clone());
    }
    if matches.get_flag("verbose") {
        settings.raise_level(LevelFilter::Debug);
    }

    if let Err(e) = Logger::init_global_logger(settings.log_file.as_deref(), settings.log_level) {
        eprintln!("Error setting up global logger: {}", e);
        process::exit(1);
    }
    debug!("Effective settings: {:?}", settings);

    let logger = match settings.history_file.as_deref() {
        Some(path) => match Logger::new(path) {
            Ok(l) => l,
            Err(e) => {
                eprintln!("Error initializing logger: {}", e);
                process::exit(1);
            }
        },
        None => Logger::disabled(),
    };

    let factory = OnedeefyCommandFactory::new();

    let command_result = factory.create_command(&matches, &logger);
    match command_result {
        Ok(command) => {
            if let Err(e) = command.execute() {
                error!("Command execution error: {}", e);
                eprintln!("Error: {}", e);
                process::exit(1);
            }
        },
        Err(e) => {
            error!("Failed to create command: {}", e);
            match e {
                LinearizeError::UnknownAlgorithm(_) | LinearizeError::InvalidArgument(_) => {
                    println!("{}", e);
                    print!("{}", usage());
                }
                _ => eprintln!("Error: {}", e),
            }
            process::exit(1);
        }
    };
}
