//! Runtime schema introspection against SQLite system metadata.
//!
//! Tables come from `sqlite_master`, per-column metadata from
//! `PRAGMA table_info`. The PRAGMA never reports the engine's synthetic
//! rowid, so a table without an explicit key introspects with no key
//! columns.

use rowstore_core::{TableInfo, quote_ident};
use rusqlite::Connection;

use crate::error::{Result, StoreError};

/// Lists user tables in the engine's natural enumeration order.
///
/// No sorting is imposed on the result.
///
/// # Errors
///
/// Returns [`StoreError::Connection`] if the connection is unusable.
pub fn list_tables(conn: &Connection) -> Result<Vec<String>> {
    let mut stmt = conn
        .prepare("SELECT name FROM sqlite_master WHERE type = 'table'")
        .map_err(StoreError::Connection)?;
    let names = stmt
        .query_map([], |row| row.get::<_, String>(0))
        .map_err(StoreError::Connection)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(StoreError::Connection)?;
    Ok(names)
}

/// Describes one table from `PRAGMA table_info`.
///
/// Ordinals are 1-based (`cid + 1`), declared types are upper-cased, key
/// columns are ordered by their position within the primary key (the
/// PRAGMA's `pk` value), and NOT NULL columns land in `required`
/// regardless of key membership. A name that matches no table yields an
/// empty description, as the PRAGMA returns no rows rather than an error.
///
/// # Errors
///
/// Returns [`StoreError::Connection`] if the connection is unusable.
pub fn describe_table(conn: &Connection, table: &str) -> Result<TableInfo> {
    let mut stmt = conn
        .prepare(&format!("PRAGMA table_info({})", quote_ident(table)))
        .map_err(StoreError::Connection)?;

    // (name, declared type, notnull flag, pk position)
    let columns = stmt
        .query_map([], |row| {
            Ok((
                row.get::<_, String>(1)?,
                row.get::<_, String>(2)?,
                row.get::<_, i64>(3)?,
                row.get::<_, i64>(5)?,
            ))
        })
        .map_err(StoreError::Connection)?
        .collect::<rusqlite::Result<Vec<_>>>()
        .map_err(StoreError::Connection)?;

    let mut info = TableInfo::new();
    let mut keyed: Vec<(i64, String)> = Vec::new();
    for (name, declared_type, notnull, pk) in columns {
        if notnull != 0 {
            info.required.push(name.clone());
        }
        if pk > 0 {
            keyed.push((pk, name.clone()));
        }
        info.add_column(name, &declared_type);
    }

    // Key order follows the declared key position, not column discovery order.
    keyed.sort_by_key(|(position, _)| *position);
    info.keys = keyed.into_iter().map(|(_, name)| name).collect();

    Ok(info)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn memory_db(ddl: &str) -> Connection {
        let conn = Connection::open_in_memory().unwrap();
        conn.execute_batch(ddl).unwrap();
        conn
    }

    #[test]
    fn test_list_tables_natural_order() {
        let conn = memory_db(
            "CREATE TABLE zulu (a TEXT);
             CREATE TABLE alpha (b TEXT);",
        );
        assert_eq!(list_tables(&conn).unwrap(), ["zulu", "alpha"]);
    }

    #[test]
    fn test_describe_table_fields() {
        let conn = memory_db(
            "CREATE TABLE snacks (
                 name text PRIMARY KEY,
                 calories integer NOT NULL,
                 note text
             );",
        );
        let info = describe_table(&conn, "snacks").unwrap();

        let names: Vec<_> = info.column_names().collect();
        assert_eq!(names, ["name", "calories", "note"]);
        assert_eq!(info.column("name").unwrap().ordinal, 1);
        assert_eq!(info.column("note").unwrap().ordinal, 3);
        assert_eq!(info.column("calories").unwrap().declared_type, "INTEGER");
        assert_eq!(info.keys, ["name"]);
        assert_eq!(info.required, ["calories"]);
    }

    #[test]
    fn test_describe_table_composite_key_order() {
        // Key declared (c, a): key order must follow the declaration, not
        // the column order.
        let conn = memory_db(
            "CREATE TABLE sessions (
                 a TEXT,
                 b TEXT,
                 c TEXT,
                 PRIMARY KEY (c, a)
             );",
        );
        let info = describe_table(&conn, "sessions").unwrap();
        assert_eq!(info.keys, ["c", "a"]);
    }

    #[test]
    fn test_describe_table_quoted_name() {
        let conn = memory_db("CREATE TABLE \"apple pie\" (bonnie INTEGER NOT NULL);");
        let info = describe_table(&conn, "apple pie").unwrap();
        assert_eq!(info.required, ["bonnie"]);
        assert!(info.keys.is_empty());
    }

    #[test]
    fn test_describe_missing_table_is_empty() {
        let conn = Connection::open_in_memory().unwrap();
        let info = describe_table(&conn, "ghost").unwrap();
        assert!(info.columns.is_empty());
    }
}
