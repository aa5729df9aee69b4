use crate::value::DATETIME_FORMAT;
use crate::{Error, Result, Value};

use jiff::civil::DateTime;
use rusqlite::types::Value as SqlValue;

/// An owned snapshot of one result row, addressed by column name.
///
/// Rows outlive the statement that produced them, so entity loading never
/// borrows from the connection.
#[derive(Debug, Clone)]
pub struct Row {
    columns: Vec<String>,
    values: Vec<Value>,
}

impl Row {
    pub(crate) fn from_sql(row: &rusqlite::Row<'_>) -> Result<Self> {
        let stmt = row.as_ref();
        let mut columns = Vec::with_capacity(stmt.column_count());
        let mut values = Vec::with_capacity(stmt.column_count());

        for (index, name) in stmt.column_names().into_iter().enumerate() {
            let raw: SqlValue = row.get(index)?;
            values.push(Value::from_sql(name, raw)?);
            columns.push(name.to_string());
        }

        Ok(Row { columns, values })
    }

    /// Returns the value for the named column.
    pub fn get(&self, column: &str) -> Result<&Value> {
        self.columns
            .iter()
            .position(|c| c == column)
            .map(|index| &self.values[index])
            .ok_or_else(|| Error::column_missing(column))
    }

    pub fn i64(&self, column: &str) -> Result<i64> {
        match self.get(column)? {
            Value::I64(value) => Ok(*value),
            _ => Err(Error::type_conversion(column, "i64")),
        }
    }

    pub fn str(&self, column: &str) -> Result<String> {
        match self.get(column)? {
            Value::String(value) => Ok(value.clone()),
            _ => Err(Error::type_conversion(column, "text")),
        }
    }

    pub fn opt_str(&self, column: &str) -> Result<Option<String>> {
        match self.get(column)? {
            Value::Null => Ok(None),
            Value::String(value) => Ok(Some(value.clone())),
            _ => Err(Error::type_conversion(column, "text or null")),
        }
    }

    /// Parses a date-time column stored in the canonical
    /// `YYYY-MM-DD HH:MM:SS` text form.
    pub fn datetime(&self, column: &str) -> Result<DateTime> {
        match self.get(column)? {
            Value::String(value) => DateTime::strptime(DATETIME_FORMAT, value)
                .map_err(|_| Error::type_conversion(column, "datetime text")),
            Value::DateTime(value) => Ok(*value),
            _ => Err(Error::type_conversion(column, "datetime text")),
        }
    }
}
