use super::CARRERA;
use super::Offering;
use super::Program;
use super::Store;
use super::StoreError;
use super::error::classify;
use rusqlite::OptionalExtension;
use rusqlite::params;

/// Tagged outcome of an update or delete, so callers can tell "row
/// changed" apart from "id matched nothing".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    /// The statement touched exactly the addressed row.
    Applied,
    /// The id matched no row; the store is unchanged.
    Missing,
}

/// Repository trait for catalog database operations.
/// Abstracts SQL from the web layer.
pub trait CatalogRepository {
    /// Insert a program, returning the store-assigned id.
    /// Fails with [`StoreError::DuplicateProgram`] if the description
    /// already exists.
    fn insert_program(
        &self,
        description: &str,
        duration: i64,
        price: f64,
    ) -> Result<i64, StoreError>;
    /// Look up a single program by id.
    fn get_program(&self, id: i64) -> Result<Option<Program>, StoreError>;
    /// Replace all three mutable fields of the addressed row atomically.
    fn update_program(
        &self,
        id: i64,
        description: &str,
        duration: i64,
        price: f64,
    ) -> Result<Mutation, StoreError>;
    /// Remove the addressed row.
    fn delete_program(&self, id: i64) -> Result<Mutation, StoreError>;
    /// Full 4-field listing for the admin view.
    fn list_programs(&self) -> Result<Vec<Program>, StoreError>;
    /// Public 3-field listing.
    fn list_offerings(&self) -> Result<Vec<Offering>, StoreError>;
}

impl CatalogRepository for Store {
    fn insert_program(
        &self,
        description: &str,
        duration: i64,
        price: f64,
    ) -> Result<i64, StoreError> {
        let conn = self.pool.get()?;
        conn.execute(
            const_format::concatcp!(
                "INSERT INTO ",
                CARRERA,
                " (description, duration_semesters, price_per_semester) VALUES (?1, ?2, ?3)"
            ),
            params![description, duration, price],
        )
        .map_err(classify)?;
        Ok(conn.last_insert_rowid())
    }

    fn get_program(&self, id: i64) -> Result<Option<Program>, StoreError> {
        let conn = self.pool.get()?;
        conn.query_row(
            const_format::concatcp!(
                "SELECT id, description, duration_semesters, price_per_semester FROM ",
                CARRERA,
                " WHERE id = ?1"
            ),
            params![id],
            Program::from_row,
        )
        .optional()
        .map_err(StoreError::from)
    }

    fn update_program(
        &self,
        id: i64,
        description: &str,
        duration: i64,
        price: f64,
    ) -> Result<Mutation, StoreError> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            const_format::concatcp!(
                "UPDATE ",
                CARRERA,
                " SET description = ?1, duration_semesters = ?2, price_per_semester = ?3",
                " WHERE id = ?4"
            ),
            params![description, duration, price, id],
        )?;
        match rows {
            0 => Ok(Mutation::Missing),
            _ => Ok(Mutation::Applied),
        }
    }

    fn delete_program(&self, id: i64) -> Result<Mutation, StoreError> {
        let conn = self.pool.get()?;
        let rows = conn.execute(
            const_format::concatcp!("DELETE FROM ", CARRERA, " WHERE id = ?1"),
            params![id],
        )?;
        match rows {
            0 => Ok(Mutation::Missing),
            _ => Ok(Mutation::Applied),
        }
    }

    fn list_programs(&self) -> Result<Vec<Program>, StoreError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(const_format::concatcp!(
            "SELECT id, description, duration_semesters, price_per_semester FROM ",
            CARRERA,
            " ORDER BY id"
        ))?;
        let rows = stmt
            .query_map([], Program::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    fn list_offerings(&self) -> Result<Vec<Offering>, StoreError> {
        let conn = self.pool.get()?;
        let mut stmt = conn.prepare(const_format::concatcp!(
            "SELECT description, duration_semesters, price_per_semester FROM ",
            CARRERA,
            " ORDER BY description"
        ))?;
        let rows = stmt
            .query_map([], Offering::from_row)?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::Path;

    const SCHEMA: &str = include_str!("../../../schema.sql");

    fn store() -> Store {
        let store = Store::open(Path::new(":memory:")).unwrap();
        store.initialize_batch(SCHEMA).unwrap();
        store
    }

    #[test]
    fn inserted_program_is_retrievable_by_id() {
        let store = store();
        let id = store
            .insert_program("Ingeniería de Software", 10, 2_500_000.0)
            .unwrap();
        let found = store.get_program(id).unwrap().unwrap();
        assert!(found.id == id);
        assert!(found.description == "Ingeniería de Software");
        assert!(found.duration_semesters == 10);
        assert!(found.price_per_semester == 2_500_000.0);
    }

    #[test]
    fn duplicate_description_is_rejected() {
        let store = store();
        store.insert_program("Derecho", 9, 2_000_000.0).unwrap();
        let err = store.insert_program("Derecho", 8, 1_500_000.0).unwrap_err();
        assert!(matches!(err, StoreError::DuplicateProgram));
        assert!(store.list_programs().unwrap().len() == 1);
    }

    #[test]
    fn update_replaces_all_mutable_fields() {
        let store = store();
        let id = store.insert_program("Medicina", 12, 4_000_000.0).unwrap();
        let outcome = store
            .update_program(id, "Medicina Veterinaria", 11, 3_500_000.0)
            .unwrap();
        assert!(outcome == Mutation::Applied);
        let found = store.get_program(id).unwrap().unwrap();
        assert!(found.description == "Medicina Veterinaria");
        assert!(found.duration_semesters == 11);
        assert!(found.price_per_semester == 3_500_000.0);
    }

    #[test]
    fn update_of_missing_id_reports_missing() {
        let store = store();
        let outcome = store.update_program(999, "Fantasma", 1, 1.0).unwrap();
        assert!(outcome == Mutation::Missing);
    }

    #[test]
    fn deleted_program_is_gone() {
        let store = store();
        let id = store.insert_program("Psicología", 8, 1_800_000.0).unwrap();
        assert!(store.delete_program(id).unwrap() == Mutation::Applied);
        assert!(store.get_program(id).unwrap().is_none());
        assert!(store.list_programs().unwrap().is_empty());
    }

    #[test]
    fn delete_of_missing_id_reports_missing() {
        let store = store();
        assert!(store.delete_program(404).unwrap() == Mutation::Missing);
    }

    #[test]
    fn empty_store_lists_nothing() {
        let store = store();
        assert!(store.list_programs().unwrap().is_empty());
        assert!(store.list_offerings().unwrap().is_empty());
    }

    #[test]
    fn offering_projection_drops_the_id() {
        let store = store();
        store
            .insert_program("Contaduría", 9, 1_900_000.0)
            .unwrap();
        let offerings = store.list_offerings().unwrap();
        assert!(offerings.len() == 1);
        assert!(offerings[0].description == "Contaduría");
        assert!(offerings[0].duration_semesters == 9);
    }

    #[test]
    fn missing_schema_script_is_a_typed_error() {
        let store = Store::open(Path::new(":memory:")).unwrap();
        let err = store
            .initialize(Path::new("no/such/script.sql"))
            .unwrap_err();
        assert!(matches!(err, StoreError::ScriptNotFound(_)));
    }

    #[test]
    fn failing_schema_script_rolls_back_in_full() {
        let store = Store::open(Path::new(":memory:")).unwrap();
        let err = store
            .initialize_batch("CREATE TABLE half (a INTEGER); INSERT INTO nowhere VALUES (1);")
            .unwrap_err();
        assert!(matches!(err, StoreError::Schema(_)));
        // the CREATE before the failing statement must not survive
        let conn = store.pool.get().unwrap();
        let half: i64 = conn
            .query_row(
                "SELECT COUNT(*) FROM sqlite_master WHERE name = 'half'",
                [],
                |row| row.get(0),
            )
            .unwrap();
        assert!(half == 0);
    }
}
