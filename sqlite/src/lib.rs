//! SQLite row-access façade with runtime schema introspection.
//!
//! This crate connects the engine-free model in `rowstore-core` to a real
//! SQLite database via `rusqlite`:
//!
//! - **`config`** — connection parameters (base directory, database file,
//!   bootstrap schema script), YAML-loadable.
//! - **`introspect`** — `sqlite_master` / `PRAGMA table_info` introspection
//!   producing [`TableInfo`](rowstore_core::TableInfo) values.
//! - **`convert`** — value transformations between the core model and
//!   rusqlite.
//! - **`store`** — [`RowStore`], the public surface: connect, introspect,
//!   insert, update, delete, raw select.
//!
//! # Quick start
//!
//! ```no_run
//! use rowstore_core::Value;
//! use rowstore_sqlite::{RowStore, StoreConfig};
//!
//! let config = StoreConfig::load("store.yaml").unwrap();
//! let mut store = RowStore::open(config).unwrap();
//! store.refresh_catalog().unwrap();
//!
//! let entry = store.entry_fields("orders", None).unwrap();
//! println!("minimal insert columns: {:?}", entry.data_columns);
//!
//! store
//!     .insert_rows("orders", None, &[vec![Value::Integer(1), Value::Integer(10)]])
//!     .unwrap();
//! ```
//!
//! The store is single-threaded and blocking by design: one instance owns
//! one connection, every call blocks until the engine responds, and every
//! mutating call commits before returning.

mod config;
mod convert;
mod error;
mod introspect;
mod store;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use introspect::{describe_table, list_tables};
pub use store::RowStore;
