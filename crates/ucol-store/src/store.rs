use super::Pool;
use super::StoreError;
use std::path::Path;

/// Handle to the catalog store: a pooled SQLite connection plus schema
/// initialization. Cheap to clone; clones share the same connection.
#[derive(Clone)]
pub struct Store {
    pub(crate) pool: Pool,
}

impl Store {
    /// Open (or create) the SQLite file at `path`.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        log::info!("opening store at {}", path.display());
        Ok(Self {
            pool: Pool::open(path)?,
        })
    }

    /// Initialize the schema from a SQL script file.
    ///
    /// The whole script runs inside one transaction: if any statement
    /// fails, nothing from the script is applied.
    pub fn initialize(&self, script: &Path) -> Result<(), StoreError> {
        let sql = std::fs::read_to_string(script).map_err(|e| match e.kind() {
            std::io::ErrorKind::NotFound => StoreError::ScriptNotFound(script.to_path_buf()),
            _ => StoreError::Connection(e.to_string()),
        })?;
        self.initialize_batch(&sql)?;
        log::info!("schema initialized from {}", script.display());
        Ok(())
    }

    /// Run a SQL batch atomically. Rolls back in full on any failure.
    pub fn initialize_batch(&self, sql: &str) -> Result<(), StoreError> {
        let mut conn = self.pool.get()?;
        let tx = conn.transaction().map_err(StoreError::Schema)?;
        tx.execute_batch(sql).map_err(StoreError::Schema)?;
        tx.commit().map_err(StoreError::Schema)?;
        Ok(())
    }

    /// Liveness probe: one trivial statement against the store.
    pub fn probe(&self) -> Result<(), StoreError> {
        let conn = self.pool.get()?;
        conn.query_row("SELECT 1", [], |_| Ok(()))?;
        Ok(())
    }
}
