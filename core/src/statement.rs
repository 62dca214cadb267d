//! Parameterized DML statement synthesis.
//!
//! Every synthesizer renders identifiers as double-quoted text (a
//! reserved-word defense; callers are trusted with identifier content) and
//! binds all data values through numbered `?N` placeholders. Arity is
//! validated for the entire batch before any statement is handed back, so a
//! misshapen tuple anywhere in a batch means nothing gets executed.

use crate::error::{CatalogError, Result};
use crate::value::Value;

/// A synthesized SQL statement plus its bound parameter values.
#[derive(Debug, Clone, PartialEq)]
pub struct Statement {
    /// Statement text with `?N` placeholders.
    pub sql: String,
    /// Parameter values, in placeholder order.
    pub params: Vec<Value>,
}

/// Double-quotes an identifier, doubling any embedded quote characters.
pub fn quote_ident(name: &str) -> String {
    format!("\"{}\"", name.replace('"', "\"\""))
}

fn quoted_list(names: &[String]) -> String {
    names
        .iter()
        .map(|n| quote_ident(n))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Renders `(?N, ?N+1, ...)` for `count` placeholders starting at `next`,
/// advancing `next` past them. A single placeholder renders without a
/// trailing comma.
fn placeholder_tuple(next: &mut usize, count: usize) -> String {
    let rendered = (*next..*next + count)
        .map(|n| format!("?{n}"))
        .collect::<Vec<_>>()
        .join(", ");
    *next += count;
    format!("({rendered})")
}

fn check_arity(index: usize, expected: usize, actual: usize) -> Result<()> {
    if expected != actual {
        return Err(CatalogError::ArityMismatch {
            index,
            expected,
            actual,
        });
    }
    Ok(())
}

impl Statement {
    /// Synthesizes a single multi-row INSERT.
    ///
    /// The conflict policy is ABORT (plain `INSERT`): a row whose key
    /// collides with an existing row surfaces as an engine error at
    /// execution time, nothing is replaced or ignored silently.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptyFieldSet`] if `fields` is empty.
    /// - [`CatalogError::EmptyRowSet`] if `rows` is empty.
    /// - [`CatalogError::ArityMismatch`] if any tuple's length disagrees
    ///   with `fields`.
    ///
    /// # Examples
    ///
    /// ```
    /// use rowstore_core::{Statement, Value};
    ///
    /// let stmt = Statement::insert(
    ///     "orders",
    ///     &["id".to_string(), "qty".to_string()],
    ///     &[
    ///         vec![Value::Integer(1), Value::Integer(10)],
    ///         vec![Value::Integer(2), Value::Integer(20)],
    ///     ],
    /// )
    /// .unwrap();
    /// assert_eq!(
    ///     stmt.sql,
    ///     r#"INSERT INTO "orders" ("id", "qty") VALUES (?1, ?2), (?3, ?4);"#
    /// );
    /// ```
    pub fn insert(table: &str, fields: &[String], rows: &[Vec<Value>]) -> Result<Statement> {
        if fields.is_empty() {
            return Err(CatalogError::EmptyFieldSet(table.to_string()));
        }
        if rows.is_empty() {
            return Err(CatalogError::EmptyRowSet(table.to_string()));
        }
        for (index, row) in rows.iter().enumerate() {
            check_arity(index, fields.len(), row.len())?;
        }

        let mut next = 1;
        let tuples = rows
            .iter()
            .map(|_| placeholder_tuple(&mut next, fields.len()))
            .collect::<Vec<_>>()
            .join(", ");

        Ok(Statement {
            sql: format!(
                "INSERT INTO {} ({}) VALUES {};",
                quote_ident(table),
                quoted_list(fields),
                tuples
            ),
            params: rows.iter().flatten().cloned().collect(),
        })
    }

    /// Synthesizes one UPDATE statement per `(key_values, new_values)` pair.
    ///
    /// `key_values` aligns positionally with `key_columns` and `new_values`
    /// with `data_columns`. The statements are returned in plan order; the
    /// caller executes and commits them individually.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptyFieldSet`] if either column list is empty (a
    ///   keyless UPDATE would address every row in the table).
    /// - [`CatalogError::ArityMismatch`] if any tuple disagrees with its
    ///   column list.
    pub fn update_batch(
        table: &str,
        key_columns: &[String],
        data_columns: &[String],
        plan: &[(Vec<Value>, Vec<Value>)],
    ) -> Result<Vec<Statement>> {
        if key_columns.is_empty() || data_columns.is_empty() {
            return Err(CatalogError::EmptyFieldSet(table.to_string()));
        }
        for (index, (key_values, new_values)) in plan.iter().enumerate() {
            check_arity(index, key_columns.len(), key_values.len())?;
            check_arity(index, data_columns.len(), new_values.len())?;
        }

        let mut next = 1;
        let assignments = data_columns
            .iter()
            .map(|c| {
                let clause = format!("{} = ?{next}", quote_ident(c));
                next += 1;
                clause
            })
            .collect::<Vec<_>>()
            .join(", ");
        let criteria = key_columns
            .iter()
            .map(|c| {
                let clause = format!("{} = ?{next}", quote_ident(c));
                next += 1;
                clause
            })
            .collect::<Vec<_>>()
            .join(" AND ");
        let sql = format!(
            "UPDATE {} SET {} WHERE {};",
            quote_ident(table),
            assignments,
            criteria
        );

        Ok(plan
            .iter()
            .map(|(key_values, new_values)| Statement {
                sql: sql.clone(),
                params: new_values.iter().chain(key_values).cloned().collect(),
            })
            .collect())
    }

    /// Synthesizes one DELETE statement per row tuple.
    ///
    /// Each tuple aligns positionally with `fields`; matching rows are
    /// deleted. The statements are returned in row order; the caller
    /// executes and commits them individually.
    ///
    /// # Errors
    ///
    /// - [`CatalogError::EmptyFieldSet`] if `fields` is empty.
    /// - [`CatalogError::ArityMismatch`] if any tuple disagrees with
    ///   `fields`.
    pub fn delete_batch(
        table: &str,
        fields: &[String],
        rows: &[Vec<Value>],
    ) -> Result<Vec<Statement>> {
        if fields.is_empty() {
            return Err(CatalogError::EmptyFieldSet(table.to_string()));
        }
        for (index, row) in rows.iter().enumerate() {
            check_arity(index, fields.len(), row.len())?;
        }

        let criteria = fields
            .iter()
            .enumerate()
            .map(|(i, c)| format!("{} = ?{}", quote_ident(c), i + 1))
            .collect::<Vec<_>>()
            .join(" AND ");
        let sql = format!("DELETE FROM {} WHERE {};", quote_ident(table), criteria);

        Ok(rows
            .iter()
            .map(|row| Statement {
                sql: sql.clone(),
                params: row.clone(),
            })
            .collect())
    }
}
