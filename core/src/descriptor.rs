//! Entry descriptor resolution against the schema catalog.

use crate::catalog::SchemaCatalog;
use crate::error::{CatalogError, Result};

/// The key and data columns applicable to one mutating call.
///
/// Ephemeral: computed per call by [`resolve`] and consumed by statement
/// synthesis. `data_columns` order becomes column order in the generated
/// statement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EntryDescriptor {
    /// The table's key columns, in declared key order.
    pub key_columns: Vec<String>,
    /// The columns a row tuple is positionally aligned with.
    pub data_columns: Vec<String>,
}

/// Resolves the key columns and data columns for a table.
///
/// With `fields = None` the data columns default to the minimal safe
/// projection: whatever uniquely identifies a row (the keys) plus whatever
/// the engine will reject if omitted (the NOT NULL columns), deduplicated.
/// With an explicit subset, every field must be a column of the table and
/// the subset is returned verbatim, preserving caller order.
///
/// # Errors
///
/// - [`CatalogError::UnknownTable`] if the table is not cataloged; the
///   catalog is left unmodified.
/// - [`CatalogError::UnknownField`] if a requested field is not a column.
/// - [`CatalogError::EmptyFieldSet`] if the resolved data-column list is
///   empty.
pub fn resolve(
    catalog: &SchemaCatalog,
    table: &str,
    fields: Option<&[&str]>,
) -> Result<EntryDescriptor> {
    let info = catalog
        .get(table)
        .ok_or_else(|| CatalogError::UnknownTable(table.to_string()))?;

    let data_columns = match fields {
        None => info.default_entry_columns(),
        Some(subset) => {
            for field in subset {
                if !info.contains_column(field) {
                    return Err(CatalogError::UnknownField {
                        table: table.to_string(),
                        field: (*field).to_string(),
                    });
                }
            }
            subset.iter().map(|f| (*f).to_string()).collect()
        }
    };

    if data_columns.is_empty() {
        return Err(CatalogError::EmptyFieldSet(table.to_string()));
    }

    Ok(EntryDescriptor {
        key_columns: info.keys.clone(),
        data_columns,
    })
}
