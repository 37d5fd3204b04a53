use anyhow::Result;
use clap::Parser;
use snippets::cli::{self, Cli};
use snippets::commands::Status;
use snippets::config::Config;
use snippets::logging;
use snippets::storage::database::Database;
use std::io::{self, Write};

fn main() -> Result<()> {
    // Usage errors exit here, before any storage is touched.
    let cli = Cli::parse();

    let config = Config::init()?;
    logging::init(&config.log_path())?;

    let status = {
        let db = Database::new(&config.db_path())?;
        let mut out = io::stdout().lock();
        let status = cli::run(cli.command, &db, &mut out)?;
        out.flush()?;
        status
    };

    if status != Status::Found {
        std::process::exit(status.exit_code());
    }

    Ok(())
}
