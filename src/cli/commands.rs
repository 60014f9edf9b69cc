use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "mxr", about = concat!("[>] muxref v", env!("CARGO_PKG_VERSION"), " - a tmux quick reference for your terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Load the reference catalog from a TOML file instead of the built-in one
    #[arg(short = 'c', long = "catalog", global = true)]
    pub catalog: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// List categories, or the commands in one category
    List(ListArgs),
    /// Search commands by keyword
    Search(SearchArgs),
    /// Show one command in full
    Show(ShowArgs),
    /// Copy a command's shell text to the clipboard
    Copy(CopyArgs),
    /// Validate the catalog
    Check,
}

#[derive(Args)]
pub struct ListArgs {
    /// Category to list (default: all categories)
    pub category: Option<String>,
}

#[derive(Args)]
pub struct SearchArgs {
    /// Keyword to search for (literal, case-insensitive)
    pub query: String,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Command ID to show
    pub id: String,
}

#[derive(Args)]
pub struct CopyArgs {
    /// Command ID to copy
    pub id: String,
}
