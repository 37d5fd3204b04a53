use super::Status;
use crate::storage::database::{Database, Stored};
use anyhow::Result;
use log::{debug, info};
use std::io::Write;

pub fn put_snippet(db: &Database, out: &mut impl Write, name: &str, snippet: &str) -> Result<Status> {
    info!("Storing snippet {:?}: {:?}", name, snippet);

    match db.put(name, snippet)? {
        Stored::Inserted => debug!("Snippet {:?} stored successfully.", name),
        Stored::Updated => debug!("Snippet {:?} already existed, content replaced.", name),
    }

    writeln!(out, "Stored {:?} as {:?}", snippet, name)?;
    Ok(Status::Found)
}
