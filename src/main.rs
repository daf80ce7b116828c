use std::path::Path;

use clap::Parser;
use reveal::cli::commands::Cli;
use reveal::cli::handlers;

fn main() {
    let cli = Cli::parse();

    match cli.command {
        None => {
            // No subcommand → launch TUI. No logger: stderr would tear the screen.
            if let Err(e) = reveal::tui::run(Path::new(&cli.tasks), Path::new(&cli.config)) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
                .init();
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
