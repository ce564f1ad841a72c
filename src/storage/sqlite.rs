//! SQLite storage implementation.
//!
//! The record store behind `init`, `commit`, `start` and `stop`. Rows are
//! keyed by project id; lookups and updates go by name.

use crate::error::{Error, Result};
use crate::model::Project;
use rusqlite::{Connection, OptionalExtension, Transaction};
use std::path::Path;
use std::time::Duration;
use tracing::debug;

const PROJECT_COLUMNS: &str = "Id, Name, Path, Command, TearDown";

/// SQLite-based storage backend.
#[derive(Debug)]
pub struct SqliteStorage {
    conn: Connection,
}

impl SqliteStorage {
    /// Open a database at the given path.
    ///
    /// Creates the parent directory, the database file and the table if they
    /// don't exist.
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established or schema fails.
    pub fn open(path: &Path) -> Result<Self> {
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let conn = Connection::open(path)?;
        conn.busy_timeout(Duration::from_secs(5))?;

        super::schema::apply_schema(&conn)?;
        debug!(path = %path.display(), "Opened project database");
        Ok(Self { conn })
    }

    /// Open an in-memory database (for testing).
    ///
    /// # Errors
    ///
    /// Returns an error if the connection cannot be established.
    pub fn open_memory() -> Result<Self> {
        let conn = Connection::open_in_memory()?;
        super::schema::apply_schema(&conn)?;
        Ok(Self { conn })
    }

    /// Get a reference to the underlying connection (for read operations).
    #[must_use]
    pub fn conn(&self) -> &Connection {
        &self.conn
    }

    /// Run a write inside an IMMEDIATE transaction.
    ///
    /// Commits when the closure succeeds; the transaction is rolled back on
    /// drop otherwise.
    fn mutate<F, R>(&mut self, op: &str, f: F) -> Result<R>
    where
        F: FnOnce(&Transaction) -> Result<R>,
    {
        let tx = self
            .conn
            .transaction_with_behavior(rusqlite::TransactionBehavior::Immediate)?;

        let result = f(&tx)?;
        tx.commit()?;

        debug!(op, "Committed");
        Ok(result)
    }

    /// Save a project, replacing any row with the same ID.
    ///
    /// Uniqueness is by ID only: saving a record whose name already exists
    /// under a different ID adds a second row with that name.
    ///
    /// # Errors
    ///
    /// Returns an error if the insert fails.
    pub fn save_project(&mut self, project: &Project) -> Result<()> {
        let created_at = chrono::Utc::now().format("%Y-%m-%d %H:%M:%S").to_string();

        self.mutate("save_project", |tx| {
            tx.execute(
                "INSERT OR REPLACE INTO projects (Id, Name, Path, Command, TearDown, CreatedAt)
                 VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
                rusqlite::params![
                    project.id,
                    project.name,
                    project.path,
                    project.command,
                    project.teardown,
                    created_at,
                ],
            )?;
            Ok(())
        })
    }

    /// Overwrite the stored fields of the project with the same name.
    ///
    /// The stored ID is left untouched, whatever `project.id` holds.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no row has this name, or an error if the
    /// update fails.
    pub fn update_project(&mut self, project: &Project) -> Result<()> {
        let affected = self.mutate("update_project", |tx| {
            let affected = tx.execute(
                "UPDATE projects SET Name = ?1, Path = ?2, Command = ?3, TearDown = ?4
                 WHERE Name = ?1",
                rusqlite::params![project.name, project.path, project.command, project.teardown],
            )?;

            if affected == 0 {
                return Err(Error::ProjectNotFound {
                    name: project.name.clone(),
                });
            }
            Ok(affected)
        })?;

        debug!(name = %project.name, rows = affected, "Updated project");
        Ok(())
    }

    /// Load a project by exact name.
    ///
    /// # Errors
    ///
    /// Returns `ProjectNotFound` if no row has this name, or an error if the
    /// query fails.
    pub fn load_project(&self, name: &str) -> Result<Project> {
        self.find_project(name)?.ok_or_else(|| Error::ProjectNotFound {
            name: name.to_string(),
        })
    }

    /// Get a project by exact name.
    ///
    /// When several rows share the name, the most recently saved one wins.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn find_project(&self, name: &str) -> Result<Option<Project>> {
        let project = self
            .conn
            .query_row(
                &format!(
                    "SELECT {PROJECT_COLUMNS} FROM projects WHERE Name = ?1
                     ORDER BY CreatedAt DESC, rowid DESC LIMIT 1"
                ),
                [name],
                map_project_row,
            )
            .optional()?;
        Ok(project)
    }

    /// Count rows with the given name.
    ///
    /// # Errors
    ///
    /// Returns an error if the query fails.
    pub fn count_projects_named(&self, name: &str) -> Result<usize> {
        let count: i64 = self.conn.query_row(
            "SELECT COUNT(*) FROM projects WHERE Name = ?1",
            [name],
            |row| row.get(0),
        )?;
        Ok(usize::try_from(count).unwrap_or_default())
    }
}

// NULL columns come back as empty strings so rows written by other tools
// still load.
fn map_project_row(row: &rusqlite::Row) -> rusqlite::Result<Project> {
    Ok(Project {
        id: row.get(0)?,
        name: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
        path: row.get::<_, Option<String>>(2)?.unwrap_or_default(),
        command: row.get::<_, Option<String>>(3)?.unwrap_or_default(),
        teardown: row.get::<_, Option<String>>(4)?.unwrap_or_default(),
    })
}
