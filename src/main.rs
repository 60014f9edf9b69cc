use clap::Parser;
use muxref::cli::commands::Cli;
use muxref::cli::handlers;

fn main() {
    let cli = Cli::parse();
    let catalog_path = cli.catalog.clone();

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = muxref::tui::run(catalog_path.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
