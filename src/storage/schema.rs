//! Database schema definition.

use rusqlite::{Connection, Result};

/// The `projects` table.
///
/// Column names are PascalCase to match
/// `projects.db` files created by earlier releases.
pub const SCHEMA_SQL: &str = r"
CREATE TABLE IF NOT EXISTS projects (
    Id TEXT NOT NULL PRIMARY KEY,
    Name TEXT,
    Path TEXT,
    Command TEXT,
    TearDown TEXT,
    CreatedAt DATETIME DEFAULT CURRENT_TIMESTAMP
);
";

/// Apply connection pragmas and create the table if missing.
///
/// # Errors
///
/// Returns an error if a pragma or the DDL fails.
pub fn apply_schema(conn: &Connection) -> Result<()> {
    conn.pragma_update(None, "journal_mode", "WAL")?;
    conn.pragma_update(None, "synchronous", "NORMAL")?;

    conn.execute_batch(SCHEMA_SQL)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_schema() {
        let conn = Connection::open_in_memory().unwrap();
        apply_schema(&conn).expect("Failed to apply schema");

        let columns: Vec<String> = conn
            .prepare("SELECT name FROM pragma_table_info('projects') ORDER BY cid")
            .unwrap()
            .query_map([], |row| row.get(0))
            .unwrap()
            .collect::<Result<Vec<_>, _>>()
            .unwrap();

        assert_eq!(
            columns,
            ["Id", "Name", "Path", "Command", "TearDown", "CreatedAt"]
        );
    }

    #[test]
    fn test_schema_is_idempotent() {
        let conn = Connection::open_in_memory().unwrap();

        apply_schema(&conn).expect("First apply failed");
        apply_schema(&conn).expect("Second apply failed");
    }
}
