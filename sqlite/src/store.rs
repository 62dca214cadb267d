//! The row-access façade: connection lifecycle, catalog refresh, and CRUD.

use rowstore_core::{
    EntryDescriptor, SchemaCatalog, Statement, TableInfo, Value, resolve,
};
use rusqlite::Connection;
use tracing::{debug, info, warn};

use crate::config::StoreConfig;
use crate::convert;
use crate::error::{Result, StoreError};
use crate::introspect;

/// High-level access to one SQLite database.
///
/// A store owns exactly one connection and the schema catalog built from
/// it, for its entire lifetime. There is no pooling and no reconnection: a
/// dropped connection surfaces as an error on the next call. The store is
/// not internally synchronized; sharing one instance across threads
/// requires external locking.
///
/// Lifecycle: [`open`](Self::open) connects (running the bootstrap script
/// when the database file is created fresh), and the first
/// [`refresh_catalog`](Self::refresh_catalog) loads the schema catalog.
/// Every catalog-dependent operation fails with
/// [`StoreError::SchemaNotLoaded`] before that first refresh;
/// [`retrieve_rows`](Self::retrieve_rows) is usable as soon as the store is
/// open.
///
/// Every mutating call commits before returning. Inserts are a single
/// multi-row statement and therefore atomic; batched updates and deletes
/// commit per item, so a mid-batch engine failure leaves earlier items
/// committed. Callers should treat any error as a cue to inspect state
/// before retrying.
///
/// # Examples
///
/// ```no_run
/// use rowstore_core::Value;
/// use rowstore_sqlite::{RowStore, StoreConfig};
///
/// let config = StoreConfig::new("/srv/app", "schema.sql", "app.db");
/// let mut store = RowStore::open(config).unwrap();
/// store.refresh_catalog().unwrap();
///
/// store
///     .insert_rows(
///         "orders",
///         Some(&["id", "qty"]),
///         &[vec![Value::Integer(1), Value::Integer(10)]],
///     )
///     .unwrap();
///
/// let rows = store.retrieve_rows("SELECT * FROM \"orders\";").unwrap();
/// assert_eq!(rows.len(), 1);
/// ```
pub struct RowStore {
    conn: Connection,
    catalog: SchemaCatalog,
    config: StoreConfig,
    schema_loaded: bool,
    logging: bool,
}

impl RowStore {
    /// Opens a store from the given configuration.
    ///
    /// If the database file already exists the bootstrap script is not
    /// consulted. Otherwise the script's full text is executed as a script
    /// (it may contain multiple statements) immediately after the
    /// connection creates the empty file, before any catalog operation.
    ///
    /// Diagnostic logging is active by default; silence it with
    /// [`deactivate_logging`](Self::deactivate_logging).
    ///
    /// # Errors
    ///
    /// - [`StoreError::Configuration`] if a configured name is empty or the
    ///   bootstrap script is needed but missing. Surfaced before any I/O on
    ///   the database file.
    /// - [`StoreError::Connection`] if the database cannot be opened.
    /// - [`StoreError::StatementExecution`] if the bootstrap script fails.
    pub fn open(config: StoreConfig) -> Result<Self> {
        config.validate()?;
        let db_path = config.database_path()?;
        let fresh = !db_path.is_file();

        let script = if fresh {
            let script_path = config.bootstrap_path()?;
            if !script_path.is_file() {
                return Err(StoreError::Configuration(format!(
                    "no bootstrap schema script at {}",
                    script_path.display()
                )));
            }
            Some(std::fs::read_to_string(&script_path)?)
        } else {
            None
        };

        warn!("diagnostic logging is active by default; call deactivate_logging() to silence");
        if fresh {
            info!(path = %db_path.display(), "no database file found, creating one");
        } else {
            info!(path = %db_path.display(), "connecting to existing database");
        }

        let conn = Connection::open(&db_path).map_err(StoreError::Connection)?;
        if let Some(script) = script {
            conn.execute_batch(&script)
                .map_err(StoreError::StatementExecution)?;
            info!("bootstrap schema script executed");
        }

        Ok(Self {
            conn,
            catalog: SchemaCatalog::new(),
            config,
            schema_loaded: false,
            logging: true,
        })
    }

    /// Introspects the database and catalogs every table not already known.
    ///
    /// Idempotent: tables already cataloged keep their first definition, so
    /// out-of-band schema changes to a known table stay invisible until
    /// [`invalidate`](Self::invalidate) drops its entry.
    pub fn refresh_catalog(&mut self) -> Result<()> {
        let tables = introspect::list_tables(&self.conn)?;
        if self.logging {
            debug!(?tables, "retrieved table list");
        }
        for table in &tables {
            if self.catalog.contains(table) {
                if self.logging {
                    debug!(table = %table, "already cataloged, keeping first definition");
                }
                continue;
            }
            let info = introspect::describe_table(&self.conn, table)?;
            if self.logging {
                debug!(table = %table, columns = info.columns.len(), "cataloged table");
            }
            self.catalog.insert(table.clone(), info);
        }
        self.schema_loaded = true;
        Ok(())
    }

    /// The schema catalog as of the last refresh.
    pub fn catalog(&self) -> &SchemaCatalog {
        &self.catalog
    }

    /// Cataloged metadata for one table.
    pub fn table_info(&self, table: &str) -> Option<&TableInfo> {
        self.catalog.get(table)
    }

    /// Returns `true` once the first catalog refresh has completed.
    pub fn is_schema_loaded(&self) -> bool {
        self.schema_loaded
    }

    /// Resolves the key columns and data columns for a mutating call.
    ///
    /// With `fields = None` the data columns default to keys plus NOT NULL
    /// columns, deduplicated; an explicit subset is validated against the
    /// catalog and returned verbatim.
    pub fn entry_fields(
        &self,
        table: &str,
        fields: Option<&[&str]>,
    ) -> Result<EntryDescriptor> {
        self.require_schema()?;
        Ok(resolve(&self.catalog, table, fields)?)
    }

    /// Every column name of a table, in ordinal order.
    pub fn all_table_fields(&self, table: &str) -> Result<Vec<String>> {
        self.require_schema()?;
        let info = self
            .catalog
            .get(table)
            .ok_or_else(|| rowstore_core::CatalogError::UnknownTable(table.to_string()))?;
        Ok(info.column_names().map(String::from).collect())
    }

    /// Drops one table's catalog entry so the next refresh re-describes it.
    pub fn invalidate(&mut self, table: &str) -> bool {
        self.catalog.invalidate(table)
    }

    /// Drops the whole catalog. The caller is expected to refresh afterwards.
    pub fn invalidate_all(&mut self) {
        self.catalog.invalidate_all();
    }

    /// Inserts row tuples as a single multi-row statement, then commits.
    ///
    /// `fields = None` resolves to the default projection (keys plus NOT
    /// NULL columns). Conflict policy is ABORT: a row whose key collides
    /// with an existing row fails the whole statement with
    /// [`StoreError::StatementExecution`] and nothing is inserted.
    pub fn insert_rows(
        &mut self,
        table: &str,
        fields: Option<&[&str]>,
        rows: &[Vec<Value>],
    ) -> Result<()> {
        self.require_schema()?;
        let entry = resolve(&self.catalog, table, fields)?;
        let stmt = Statement::insert(table, &entry.data_columns, rows)?;
        if self.logging {
            debug!(sql = %stmt.sql, rows = rows.len(), "issuing insert");
        }
        self.execute_and_commit(&stmt)
    }

    /// Applies keyed updates, one statement per `(key_values, new_values)`
    /// pair.
    ///
    /// Key columns come from the catalog; `fields` selects the columns
    /// being updated (`None` resolves to the default projection). Row
    /// shapes are validated for the whole plan before anything executes,
    /// but each statement commits individually: if pair N fails at the
    /// engine, pairs 1..N-1 are already committed.
    pub fn update_rows(
        &mut self,
        table: &str,
        fields: Option<&[&str]>,
        plan: &[(Vec<Value>, Vec<Value>)],
    ) -> Result<()> {
        self.require_schema()?;
        let entry = resolve(&self.catalog, table, fields)?;
        let stmts =
            Statement::update_batch(table, &entry.key_columns, &entry.data_columns, plan)?;
        for stmt in &stmts {
            if self.logging {
                debug!(sql = %stmt.sql, "issuing update");
            }
            self.execute_and_commit(stmt)?;
        }
        Ok(())
    }

    /// Deletes rows matching each tuple on the given criterion columns.
    ///
    /// Same per-item commit semantics as [`update_rows`](Self::update_rows).
    pub fn delete_rows(
        &mut self,
        table: &str,
        fields: &[&str],
        rows: &[Vec<Value>],
    ) -> Result<()> {
        self.require_schema()?;
        let entry = resolve(&self.catalog, table, Some(fields))?;
        let stmts = Statement::delete_batch(table, &entry.data_columns, rows)?;
        for stmt in &stmts {
            if self.logging {
                debug!(sql = %stmt.sql, "issuing delete");
            }
            self.execute_and_commit(stmt)?;
        }
        Ok(())
    }

    /// Executes a caller-supplied read statement verbatim.
    ///
    /// The query text is not parsed or validated; query complexity stays in
    /// the caller's domain. Usable before the first catalog refresh.
    pub fn retrieve_rows(&self, query: &str) -> Result<Vec<Vec<Value>>> {
        if self.logging {
            debug!(query = %query, "executing read statement");
        }
        let mut stmt = self
            .conn
            .prepare(query)
            .map_err(StoreError::StatementExecution)?;
        let rows = stmt
            .query_map([], |row| convert::row_values(row))
            .map_err(StoreError::StatementExecution)?
            .collect::<rusqlite::Result<Vec<_>>>()
            .map_err(StoreError::StatementExecution)?;
        Ok(rows)
    }

    /// Turns diagnostic logging on.
    pub fn activate_logging(&mut self) {
        self.logging = true;
        info!("logging activated");
    }

    /// Turns diagnostic logging off. Connection state is untouched.
    pub fn deactivate_logging(&mut self) {
        if self.logging {
            info!("deactivating logging");
        }
        self.logging = false;
    }

    /// Returns a reference to the underlying connection.
    pub fn connection(&self) -> &Connection {
        &self.conn
    }

    /// The configuration this store was opened with.
    pub fn config(&self) -> &StoreConfig {
        &self.config
    }

    fn require_schema(&self) -> Result<()> {
        if self.schema_loaded {
            Ok(())
        } else {
            Err(StoreError::SchemaNotLoaded)
        }
    }

    fn execute_and_commit(&self, stmt: &Statement) -> Result<()> {
        let tx = self
            .conn
            .unchecked_transaction()
            .map_err(StoreError::Connection)?;
        tx.execute(
            &stmt.sql,
            rusqlite::params_from_iter(convert::params(&stmt.params)),
        )
        .map_err(StoreError::StatementExecution)?;
        tx.commit().map_err(StoreError::StatementExecution)?;
        Ok(())
    }
}
