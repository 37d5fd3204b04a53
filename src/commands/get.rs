use super::Status;
use crate::storage::database::Database;
use anyhow::Result;
use log::{debug, info};
use std::io::Write;

pub const NOT_FOUND: &str = "404: Snippet Not Found";

pub fn get_snippet(db: &Database, out: &mut impl Write, name: &str) -> Result<Status> {
    info!("Retrieving snippet {:?}", name);

    match db.get(name)? {
        Some(snippet) => {
            debug!("Snippet {:?} retrieved successfully.", name);
            writeln!(out, "Retrieved snippet: {:?}", snippet.content)?;
            Ok(Status::Found)
        }
        None => {
            debug!("No snippet named {:?}.", name);
            writeln!(out, "Retrieved snippet: {}", NOT_FOUND)?;
            Ok(Status::NotFound)
        }
    }
}
