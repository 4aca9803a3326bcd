// move-args - CLI

use clap::Parser;
use move_args::{Cli, CliHandler};

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let handler = match CliHandler::new(cli.config.clone(), cli.network) {
        Ok(h) => h,
        Err(e) => {
            eprintln!("Error initializing: {}", e);
            std::process::exit(1);
        }
    };

    if let Err(e) = handler.handle(cli) {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}
