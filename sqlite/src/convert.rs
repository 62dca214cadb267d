//! Value transformations between the core model and rusqlite.

use rowstore_core::Value;
use rusqlite::Row;
use rusqlite::types::Value as SqlValue;

/// Converts a core value into rusqlite's owned value type for binding.
pub(crate) fn to_sql(value: &Value) -> SqlValue {
    match value {
        Value::Null => SqlValue::Null,
        Value::Integer(i) => SqlValue::Integer(*i),
        Value::Real(r) => SqlValue::Real(*r),
        Value::Text(t) => SqlValue::Text(t.clone()),
        Value::Blob(b) => SqlValue::Blob(b.clone()),
    }
}

/// Converts a value read back from the engine into the core model.
pub(crate) fn from_sql(value: SqlValue) -> Value {
    match value {
        SqlValue::Null => Value::Null,
        SqlValue::Integer(i) => Value::Integer(i),
        SqlValue::Real(r) => Value::Real(r),
        SqlValue::Text(t) => Value::Text(t),
        SqlValue::Blob(b) => Value::Blob(b),
    }
}

/// Binds a parameter list for execution.
pub(crate) fn params(values: &[Value]) -> Vec<SqlValue> {
    values.iter().map(to_sql).collect()
}

/// Reads every column of a result row into core values.
pub(crate) fn row_values(row: &Row<'_>) -> rusqlite::Result<Vec<Value>> {
    let count = row.as_ref().column_count();
    (0..count)
        .map(|idx| row.get::<_, SqlValue>(idx).map(from_sql))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_to_sql_covers_all_storage_classes() {
        assert_eq!(to_sql(&Value::Null), SqlValue::Null);
        assert_eq!(to_sql(&Value::Integer(4)), SqlValue::Integer(4));
        assert_eq!(to_sql(&Value::Real(0.25)), SqlValue::Real(0.25));
        assert_eq!(
            to_sql(&Value::Text("abc".to_string())),
            SqlValue::Text("abc".to_string())
        );
        assert_eq!(to_sql(&Value::Blob(vec![9])), SqlValue::Blob(vec![9]));
    }

    #[test]
    fn test_round_trip() {
        let values = [
            Value::Null,
            Value::Integer(-1),
            Value::Real(2.5),
            Value::Text("row".to_string()),
            Value::Blob(vec![0, 255]),
        ];
        for value in values {
            assert_eq!(from_sql(to_sql(&value)), value);
        }
    }
}
