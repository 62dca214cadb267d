//! Engine-free building blocks for the rowstore access layer.
//!
//! This crate defines the data model and pure logic that the SQLite-facing
//! crate (`rowstore-sqlite`) builds on:
//!
//! - [`SchemaCatalog`] / [`TableInfo`] / [`Column`] — the in-memory schema
//!   description built from engine introspection.
//! - [`resolve`] / [`EntryDescriptor`] — turns a table name and an optional
//!   field subset into the key columns and data columns applicable to a
//!   mutating call.
//! - [`Statement`] — parameterized INSERT/UPDATE/DELETE synthesis from
//!   loosely typed row data.
//! - [`Value`] — the scalar cell type carried in row tuples.
//!
//! Nothing in this crate performs I/O or talks to a database; introspection
//! and execution live in `rowstore-sqlite`.
//!
//! # Example
//!
//! ```
//! use rowstore_core::{SchemaCatalog, Statement, TableInfo, Value, resolve};
//!
//! let mut info = TableInfo::new();
//! info.add_column("id", "integer");
//! info.add_column("qty", "integer");
//! info.keys.push("id".to_string());
//! info.required.push("qty".to_string());
//!
//! let mut catalog = SchemaCatalog::new();
//! catalog.insert("orders", info);
//!
//! let entry = resolve(&catalog, "orders", None).unwrap();
//! assert_eq!(entry.data_columns, ["id", "qty"]);
//!
//! let stmt = Statement::insert(
//!     "orders",
//!     &entry.data_columns,
//!     &[vec![Value::Integer(1), Value::Integer(2)]],
//! )
//! .unwrap();
//! assert_eq!(stmt.sql, r#"INSERT INTO "orders" ("id", "qty") VALUES (?1, ?2);"#);
//! ```

mod catalog;
mod descriptor;
mod error;
mod statement;
mod value;

pub use catalog::{Column, SchemaCatalog, TableInfo};
pub use descriptor::{EntryDescriptor, resolve};
pub use error::{CatalogError, Result};
pub use statement::{Statement, quote_ident};
pub use value::Value;
