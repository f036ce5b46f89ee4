use serde::Deserialize;
use serde::Serialize;

/// A university academic program: the full catalog row, including the
/// store-assigned id. This is the 4-field admin view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Program {
    pub id: i64,
    pub description: String,
    pub duration_semesters: i64,
    pub price_per_semester: f64,
}

/// Public 3-field projection of a program, without the id.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub description: String,
    pub duration_semesters: i64,
    pub price_per_semester: f64,
}

impl Program {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            id: row.get(0)?,
            description: row.get(1)?,
            duration_semesters: row.get(2)?,
            price_per_semester: row.get(3)?,
        })
    }
}

impl Offering {
    pub(crate) fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
        Ok(Self {
            description: row.get(0)?,
            duration_semesters: row.get(1)?,
            price_per_semester: row.get(2)?,
        })
    }
}
