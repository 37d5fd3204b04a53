use anyhow::{Context, Result};
use log::debug;
use rusqlite::{params, Connection};
use std::path::Path;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Snippet {
    pub name: String,
    pub content: String,
}

/// Which path a `put` took.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stored {
    Inserted,
    Updated,
}

/// Handle over the `snippets` table. The connection closes when this is dropped.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn new(db_path: &Path) -> Result<Self> {
        debug!("Connecting to database {:?}", db_path);
        let conn = Connection::open(db_path)
            .with_context(|| format!("Failed to open database: {:?}", db_path))?;

        let db = Self::from_connection(conn)?;
        debug!("Database connection established.");
        Ok(db)
    }

    pub fn open_in_memory() -> Result<Self> {
        let conn = Connection::open_in_memory().context("Failed to open in-memory database")?;
        Self::from_connection(conn)
    }

    fn from_connection(conn: Connection) -> Result<Self> {
        let db = Self { conn };
        db.init_schema()?;
        Ok(db)
    }

    fn init_schema(&self) -> Result<()> {
        self.conn.execute(
            "CREATE TABLE IF NOT EXISTS snippets (
                keyword TEXT NOT NULL UNIQUE,
                message TEXT NOT NULL
            )",
            [],
        )
        .context("Failed to create snippets table")?;

        Ok(())
    }

    /// Inserts `name`, or overwrites its content if it is already stored.
    pub fn put(&self, name: &str, content: &str) -> Result<Stored> {
        let tx = self
            .conn
            .unchecked_transaction()
            .context("Failed to begin transaction")?;

        let exists: bool = tx
            .query_row(
                "SELECT EXISTS(SELECT 1 FROM snippets WHERE keyword = ?1)",
                params![name],
                |row| row.get(0),
            )
            .context("Failed to look up existing snippet")?;

        tx.execute(
            "INSERT INTO snippets (keyword, message) VALUES (?1, ?2)
             ON CONFLICT(keyword) DO UPDATE SET message = excluded.message",
            params![name, content],
        )
        .context("Failed to store snippet")?;

        tx.commit().context("Failed to commit snippet")?;

        Ok(if exists { Stored::Updated } else { Stored::Inserted })
    }

    pub fn get(&self, name: &str) -> Result<Option<Snippet>> {
        let mut stmt = self
            .conn
            .prepare("SELECT keyword, message FROM snippets WHERE keyword = ?1")?;

        let snippet = stmt.query_row(params![name], |row| {
            Ok(Snippet {
                name: row.get(0)?,
                content: row.get(1)?,
            })
        });

        match snippet {
            Ok(s) => Ok(Some(s)),
            Err(rusqlite::Error::QueryReturnedNoRows) => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    /// Every stored name, ascending.
    pub fn catalog(&self) -> Result<Vec<String>> {
        let mut stmt = self
            .conn
            .prepare("SELECT keyword FROM snippets ORDER BY keyword")?;
        let names = stmt.query_map([], |row| row.get::<_, String>(0))?;

        let mut result = Vec::new();
        for name in names {
            result.push(name?);
        }

        Ok(result)
    }

    /// Every snippet whose content contains `substring`, case-sensitive, ordered by name.
    pub fn search(&self, substring: &str) -> Result<Vec<Snippet>> {
        // instr is an exact, case-sensitive match with no pattern length limit.
        let mut stmt = self.conn.prepare(
            "SELECT keyword, message FROM snippets
             WHERE instr(message, ?1) > 0
             ORDER BY keyword",
        )?;

        let snippets = stmt.query_map(params![substring], |row| {
            Ok(Snippet {
                name: row.get(0)?,
                content: row.get(1)?,
            })
        })?;

        let mut result = Vec::new();
        for snippet in snippets {
            result.push(snippet?);
        }

        Ok(result)
    }
}
