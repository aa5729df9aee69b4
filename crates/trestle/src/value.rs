use crate::{Error, Result};

use jiff::civil::DateTime;
use rusqlite::types::{ToSql, ToSqlOutput, Value as SqlValue, ValueRef};

/// The canonical text form for date-time values, both in storage and in
/// rendered markup. Re-populating a form from a stored entity must produce
/// exactly this shape so date-capable inputs round-trip.
pub(crate) const DATETIME_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// A dynamically typed field value.
///
/// Values flow in two directions: out of result rows into entities, and out
/// of entities (or submitted form data) into rendered markup.
#[derive(Debug, Default, Clone, PartialEq)]
pub enum Value {
    /// Null value
    #[default]
    Null,

    /// Boolean value
    Bool(bool),

    /// Signed 64-bit integer
    I64(i64),

    /// 64-bit float
    F64(f64),

    /// String value
    String(String),

    /// Civil date-time (no time zone)
    DateTime(DateTime),

    /// A list of values of the same type
    List(Vec<Value>),
}

impl Value {
    /// Returns a `Value` representing null
    pub const fn null() -> Self {
        Self::Null
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn list_from_vec(items: Vec<Self>) -> Self {
        Self::List(items)
    }

    /// The scalar form used when placing this value into markup.
    ///
    /// `Null` renders empty, `DateTime` renders in the canonical
    /// `YYYY-MM-DD HH:MM:SS` form, and lists have no scalar form (the
    /// multi-select consumes them structurally).
    pub fn to_form_string(&self) -> String {
        match self {
            Self::Null => String::new(),
            Self::Bool(value) => value.to_string(),
            Self::I64(value) => value.to_string(),
            Self::F64(value) => value.to_string(),
            Self::String(value) => value.clone(),
            Self::DateTime(value) => value.strftime(DATETIME_FORMAT).to_string(),
            Self::List(_) => String::new(),
        }
    }

    /// Converts a raw SQLite column value.
    ///
    /// Blob columns have no entity-side representation in this domain and are
    /// rejected rather than mapped.
    pub(crate) fn from_sql(column: &str, value: SqlValue) -> Result<Self> {
        Ok(match value {
            SqlValue::Null => Self::Null,
            SqlValue::Integer(value) => Self::I64(value),
            SqlValue::Real(value) => Self::F64(value),
            SqlValue::Text(value) => Self::String(value),
            SqlValue::Blob(_) => return Err(Error::type_conversion(column, "non-blob value")),
        })
    }
}

impl From<bool> for Value {
    fn from(src: bool) -> Self {
        Self::Bool(src)
    }
}

impl From<i32> for Value {
    fn from(src: i32) -> Self {
        Self::I64(src as i64)
    }
}

impl From<i64> for Value {
    fn from(src: i64) -> Self {
        Self::I64(src)
    }
}

impl From<f64> for Value {
    fn from(src: f64) -> Self {
        Self::F64(src)
    }
}

impl From<&str> for Value {
    fn from(src: &str) -> Self {
        Self::String(src.to_string())
    }
}

impl From<String> for Value {
    fn from(src: String) -> Self {
        Self::String(src)
    }
}

impl From<DateTime> for Value {
    fn from(src: DateTime) -> Self {
        Self::DateTime(src)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(src: Option<T>) -> Self {
        match src {
            Some(value) => value.into(),
            None => Self::Null,
        }
    }
}

impl<T: Into<Value>> From<Vec<T>> for Value {
    fn from(src: Vec<T>) -> Self {
        Self::List(src.into_iter().map(Into::into).collect())
    }
}

impl ToSql for Value {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        match self {
            Value::Null => Ok(ToSqlOutput::Owned(SqlValue::Null)),
            Value::Bool(true) => Ok(ToSqlOutput::Owned(SqlValue::Integer(1))),
            Value::Bool(false) => Ok(ToSqlOutput::Owned(SqlValue::Integer(0))),
            Value::I64(v) => Ok(ToSqlOutput::Owned(SqlValue::Integer(*v))),
            Value::F64(v) => Ok(ToSqlOutput::Owned(SqlValue::Real(*v))),
            Value::String(v) => Ok(ToSqlOutput::Borrowed(ValueRef::Text(v.as_bytes()))),
            Value::DateTime(v) => Ok(ToSqlOutput::Owned(SqlValue::Text(
                v.strftime(DATETIME_FORMAT).to_string(),
            ))),
            Value::List(_) => Err(rusqlite::Error::ToSqlConversionFailure(
                "list values cannot be bound as a single parameter".into(),
            )),
        }
    }
}
