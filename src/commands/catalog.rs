use super::Status;
use crate::storage::database::Database;
use anyhow::Result;
use log::{debug, info};
use std::io::Write;

/// An empty store is still a successful listing.
pub fn list_names(db: &Database, out: &mut impl Write) -> Result<Status> {
    info!("Listing snippet names");

    let names = db.catalog()?;
    debug!("Listed {} snippet name(s).", names.len());

    writeln!(out, "{:?}", names)?;
    Ok(Status::Found)
}
