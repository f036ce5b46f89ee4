//! SQLite persistence for the university program catalog.
//!
//! A single table (`carrera`) holds every academic program. Access goes
//! through a pooled connection with scoped acquisition; writes report
//! affected-row outcomes so callers can tell "updated" apart from
//! "no such row".
//!
//! ## Core Types
//!
//! - [`Store`] — Connection pool plus schema initialization
//! - [`Program`] — Catalog row (admin 4-field view)
//! - [`Offering`] — Public 3-field projection
//! - [`Mutation`] — Tagged outcome of update/delete
//! - [`StoreError`] — Persistence error taxonomy
//!
//! ## Repository
//!
//! - [`CatalogRepository`] — CRUD operations over the catalog, implemented
//!   for [`Store`]
mod error;
mod pool;
mod program;
mod repository;
mod store;

pub use error::*;
pub use pool::*;
pub use program::*;
pub use repository::*;
pub use store::*;

/// Name of the catalog table.
pub const CARRERA: &str = "carrera";
