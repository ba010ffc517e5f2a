use clap::{Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(name = "itui")]
#[command(about = "A terminal-based tracker for short text items", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Add an item directly to the store
    Add {
        text: String,
    },
    /// Print the stored items in the current sort order
    Show,
    /// Delete every stored item and reset the sort order
    Reset,
}
