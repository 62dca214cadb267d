//! Error types for catalog lookups, field resolution, and statement synthesis.

use thiserror::Error;

/// Errors raised while resolving field sets or synthesizing statements.
///
/// All of these indicate a programming error in the caller (a table or
/// field set inconsistent with the catalog, or misshapen row data); none
/// are retried and none modify the catalog.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CatalogError {
    /// The referenced table is not present in the catalog.
    #[error("unknown table: {0}")]
    UnknownTable(String),

    /// A requested field is not a column of the table.
    #[error("table '{table}' has no column '{field}'")]
    UnknownField {
        /// Table that was queried.
        table: String,
        /// The offending field name.
        field: String,
    },

    /// The resolved data-column list is empty.
    #[error("no data columns resolved for table '{0}'")]
    EmptyFieldSet(String),

    /// A statement was requested for zero rows.
    #[error("no rows supplied for table '{0}'")]
    EmptyRowSet(String),

    /// A row tuple's length disagrees with the column list it is paired with.
    #[error("row {index} carries {actual} values for {expected} columns")]
    ArityMismatch {
        /// 0-based position of the offending tuple in the batch.
        index: usize,
        /// Number of columns named.
        expected: usize,
        /// Number of values supplied.
        actual: usize,
    },
}

/// Convenience alias for results with [`CatalogError`].
pub type Result<T> = std::result::Result<T, CatalogError>;
