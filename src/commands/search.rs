use super::Status;
use crate::storage::database::Database;
use anyhow::Result;
use log::{debug, info};
use std::io::Write;

pub const NOT_FOUND: &str = "404: string not found in any message";

pub fn search_snippets(db: &Database, out: &mut impl Write, substring: &str) -> Result<Status> {
    info!("Searching snippets for {:?}", substring);

    let matches = db.search(substring)?;
    debug!("Search for {:?} matched {} snippet(s).", substring, matches.len());

    if matches.is_empty() {
        writeln!(out, "{}", NOT_FOUND)?;
        return Ok(Status::NotFound);
    }

    let names: Vec<&str> = matches.iter().map(|s| s.name.as_str()).collect();
    writeln!(out, "{:?}", names)?;
    Ok(Status::Found)
}
