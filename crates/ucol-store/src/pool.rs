use super::StoreError;
use rusqlite::Connection;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;
use std::sync::MutexGuard;

/// Managed connection with scoped acquisition.
///
/// One connection guarded by a mutex: [`Pool::get`] acquires for the
/// duration of a single statement and the guard releases on every exit
/// path, including early returns on error.
#[derive(Clone)]
pub struct Pool(Arc<Mutex<Connection>>);

impl Pool {
    /// Open the SQLite file at `path`, creating it if absent.
    pub fn open(path: &Path) -> Result<Self, StoreError> {
        let conn = Connection::open(path).map_err(|e| StoreError::Connection(e.to_string()))?;
        Ok(Self(Arc::new(Mutex::new(conn))))
    }

    /// Acquire the connection. A poisoned mutex means a previous holder
    /// panicked mid-statement, so the store is reported unavailable.
    pub fn get(&self) -> Result<MutexGuard<'_, Connection>, StoreError> {
        self.0
            .lock()
            .map_err(|_| StoreError::Connection("connection mutex poisoned".to_string()))
    }
}
