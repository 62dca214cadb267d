//! Error types for store operations.
//!
//! Field-set and row-shape failures from the core crate pass through
//! transparently; engine failures are split by phase into connection
//! errors (the database is unreachable or unusable) and statement
//! execution errors (the engine rejected a statement).

use rowstore_core::CatalogError;
use thiserror::Error;

/// Errors that can occur while opening or using a [`RowStore`](crate::RowStore).
#[derive(Debug, Error)]
pub enum StoreError {
    /// Missing or invalid connection configuration. Surfaced before any I/O.
    #[error("invalid configuration: {0}")]
    Configuration(String),

    /// The underlying database is unreachable or unusable.
    #[error("connection error: {0}")]
    Connection(#[source] rusqlite::Error),

    /// A catalog-dependent operation was attempted before the first refresh.
    #[error("schema catalog not loaded; call refresh_catalog() first")]
    SchemaNotLoaded,

    /// The engine rejected a synthesized or caller-supplied statement.
    ///
    /// Wraps the engine's raw error (constraint violation, syntax error,
    /// type mismatch). Never retried internally.
    #[error("statement execution failed: {0}")]
    StatementExecution(#[source] rusqlite::Error),

    /// File I/O failure (bootstrap script or configuration file).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Field-set or row-shape validation failure.
    #[error(transparent)]
    Catalog(#[from] CatalogError),
}

/// Convenience alias for results with [`StoreError`].
pub type Result<T> = std::result::Result<T, StoreError>;
