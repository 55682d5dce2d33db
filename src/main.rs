use std::process;
use log::{error, LevelFilter};

use utmkit::utils::logger::Logger;
use utmkit::commands::{build_cli, CommandFactory, UtmkitCommandFactory};

fn main() {
    let matches = build_cli().get_matches();

    let level = if matches.get_flag("verbose") { LevelFilter::Debug } else { LevelFilter::Info };
    let log_file = matches.get_one::<String>("log-file")
        .map(|s| s.as_str())
        .unwrap_or("utmkit.log");

    let logger = match Logger::new(log_file) {
        Ok(l) => l,
        Err(e) => {
            eprintln!("Warning: cannot open log file {}: {}", log_file, e);
            Logger::console_only()
        }
    };

    if let Err(e) = Logger::init_global_logger("utmkit-global.log", level) {
        eprintln!("Warning: global log file unavailable ({}), logging to stderr", e);
        env_logger::Builder::new().filter_level(level).init();
    }

    let factory = UtmkitCommandFactory::new();

    match factory.create_command(&matches, &logger) {
        Ok(command) => match command.execute() {
            Ok(output) => println!("{}", output),
            Err(e) => {
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
