use crate::commands::{self, Status};
use crate::storage::database::Database;
use anyhow::Result;
use clap::{Parser, Subcommand};
use std::io::Write;

#[derive(Debug, Parser)]
#[command(name = "snippets")]
#[command(about = "Store and retrieve snippets of text", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Store a snippet, replacing any snippet with the same name
    Put {
        /// Name of the snippet
        name: String,
        /// Snippet text
        snippet: String,
    },
    /// Retrieve a snippet
    Get {
        /// Name of the snippet
        name: String,
    },
    /// List the names of all snippets
    Catalog,
    /// List snippets whose text contains a string
    Search {
        /// String to look for
        name: String,
    },
}

pub fn run(command: Commands, db: &Database, out: &mut impl Write) -> Result<Status> {
    match command {
        Commands::Put { name, snippet } => commands::put::put_snippet(db, out, &name, &snippet),
        Commands::Get { name } => commands::get::get_snippet(db, out, &name),
        Commands::Catalog => commands::catalog::list_names(db, out),
        Commands::Search { name } => commands::search::search_snippets(db, out, &name),
    }
}
