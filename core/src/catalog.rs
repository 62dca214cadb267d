//! In-memory schema catalog built from engine introspection.
//!
//! The catalog maps table names to [`TableInfo`] descriptions and is owned
//! by the store façade. It is populated lazily: tables already present are
//! never re-described (first definition wins), so a second introspection
//! pass is a no-op for known tables. Schema changes to an already-known
//! table stay invisible until the entry is dropped via
//! [`SchemaCatalog::invalidate`] or [`SchemaCatalog::invalidate_all`];
//! automatic invalidation is deliberately not provided.

/// A single column description.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Column {
    /// Column name as declared.
    pub name: String,
    /// 1-based position within the table's declared column order.
    pub ordinal: usize,
    /// Upper-cased declared SQL type (e.g. `TEXT`, `REAL`).
    pub declared_type: String,
}

/// Schema description of one table.
///
/// Invariant: `keys` and `required` name only columns present in `columns`,
/// and column ordinals are unique and match the underlying column order at
/// introspection time.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableInfo {
    /// Columns in declared order.
    pub columns: Vec<Column>,
    /// Primary/composite key column names, in declared key order.
    pub keys: Vec<String>,
    /// Columns declared NOT NULL, independent of key membership.
    pub required: Vec<String>,
}

impl TableInfo {
    /// Creates an empty description.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a column.
    ///
    /// The ordinal is the 1-based append position and the declared type is
    /// stored upper-cased.
    pub fn add_column(&mut self, name: impl Into<String>, declared_type: &str) {
        self.columns.push(Column {
            name: name.into(),
            ordinal: self.columns.len() + 1,
            declared_type: declared_type.to_uppercase(),
        });
    }

    /// Looks up a column by name.
    pub fn column(&self, name: &str) -> Option<&Column> {
        self.columns.iter().find(|c| c.name == name)
    }

    /// Returns `true` if the table has a column with the given name.
    pub fn contains_column(&self, name: &str) -> bool {
        self.column(name).is_some()
    }

    /// Column names in ordinal order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|c| c.name.as_str())
    }

    /// The minimal insertable/updatable projection: key columns followed by
    /// required columns, deduplicated.
    ///
    /// A key column that is also declared NOT NULL appears once.
    pub fn default_entry_columns(&self) -> Vec<String> {
        let mut columns = self.keys.clone();
        for name in &self.required {
            if !columns.contains(name) {
                columns.push(name.clone());
            }
        }
        columns
    }
}

/// Mapping from table name to [`TableInfo`], in cataloging order.
///
/// Iteration follows insertion order, which is the engine's natural table
/// enumeration order when populated by introspection.
#[derive(Debug, Clone, Default)]
pub struct SchemaCatalog {
    tables: Vec<(String, TableInfo)>,
}

impl SchemaCatalog {
    /// Creates an empty catalog.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a table description unless one is already present.
    ///
    /// First definition wins: returns `false` and leaves the existing entry
    /// untouched when the table is already cataloged.
    pub fn insert(&mut self, name: impl Into<String>, info: TableInfo) -> bool {
        let name = name.into();
        if self.contains(&name) {
            return false;
        }
        self.tables.push((name, info));
        true
    }

    /// Looks up a table description.
    pub fn get(&self, name: &str) -> Option<&TableInfo> {
        self.tables
            .iter()
            .find(|(table, _)| table == name)
            .map(|(_, info)| info)
    }

    /// Returns `true` if the table is cataloged.
    pub fn contains(&self, name: &str) -> bool {
        self.tables.iter().any(|(table, _)| table == name)
    }

    /// Drops one table's description so the next refresh re-describes it.
    ///
    /// Returns `false` if the table was not cataloged.
    pub fn invalidate(&mut self, name: &str) -> bool {
        let before = self.tables.len();
        self.tables.retain(|(table, _)| table != name);
        self.tables.len() != before
    }

    /// Drops every table description.
    pub fn invalidate_all(&mut self) {
        self.tables.clear();
    }

    /// Cataloged table names, in cataloging order.
    pub fn table_names(&self) -> impl Iterator<Item = &str> {
        self.tables.iter().map(|(name, _)| name.as_str())
    }

    /// Number of cataloged tables.
    pub fn len(&self) -> usize {
        self.tables.len()
    }

    /// Returns `true` if no tables are cataloged.
    pub fn is_empty(&self) -> bool {
        self.tables.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_column_info() -> TableInfo {
        let mut info = TableInfo::new();
        info.add_column("id", "integer");
        info.add_column("name", "text");
        info
    }

    #[test]
    fn test_add_column_assigns_ordinals_and_uppercases_type() {
        let info = two_column_info();
        assert_eq!(info.columns[0].ordinal, 1);
        assert_eq!(info.columns[1].ordinal, 2);
        assert_eq!(info.columns[0].declared_type, "INTEGER");
        assert_eq!(info.columns[1].declared_type, "TEXT");
    }

    #[test]
    fn test_column_lookup() {
        let info = two_column_info();
        assert!(info.contains_column("name"));
        assert!(!info.contains_column("missing"));
        assert_eq!(info.column("id").unwrap().ordinal, 1);
    }

    #[test]
    fn test_default_entry_columns_deduplicates_keyed_required() {
        let mut info = two_column_info();
        info.add_column("qty", "integer");
        info.keys.push("id".to_string());
        // "id" is both key and NOT NULL; it must not be double-counted.
        info.required.push("id".to_string());
        info.required.push("qty".to_string());
        assert_eq!(info.default_entry_columns(), ["id", "qty"]);
    }

    #[test]
    fn test_first_definition_wins() {
        let mut catalog = SchemaCatalog::new();
        assert!(catalog.insert("orders", two_column_info()));

        let mut other = TableInfo::new();
        other.add_column("different", "blob");
        assert!(!catalog.insert("orders", other));

        assert_eq!(catalog.len(), 1);
        assert!(catalog.get("orders").unwrap().contains_column("id"));
    }

    #[test]
    fn test_invalidate_single_table() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert("orders", two_column_info());
        catalog.insert("items", two_column_info());

        assert!(catalog.invalidate("orders"));
        assert!(!catalog.invalidate("orders"));
        assert!(catalog.contains("items"));
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_invalidate_all() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert("orders", two_column_info());
        catalog.invalidate_all();
        assert!(catalog.is_empty());
    }

    #[test]
    fn test_table_names_preserve_insertion_order() {
        let mut catalog = SchemaCatalog::new();
        catalog.insert("zebra", TableInfo::new());
        catalog.insert("apple", TableInfo::new());
        let names: Vec<_> = catalog.table_names().collect();
        assert_eq!(names, ["zebra", "apple"]);
    }
}
