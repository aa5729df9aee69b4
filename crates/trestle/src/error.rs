mod accessor_missing;
mod column_missing;
mod record_not_found;
mod type_conversion;

use accessor_missing::AccessorMissingError;
use column_missing::ColumnMissingError;
use record_not_found::RecordNotFoundError;
use type_conversion::TypeConversionError;

use std::fmt::Display;
use std::sync::Arc;

pub type Result<T, E = Error> = std::result::Result<T, E>;

/// An error that can occur in trestle.
#[derive(Clone)]
pub struct Error {
    kind: Arc<ErrorKind>,
}

#[derive(Debug)]
enum ErrorKind {
    Anyhow(anyhow::Error),
    AccessorMissing(AccessorMissingError),
    ColumnMissing(ColumnMissingError),
    DateTime(jiff::Error),
    RecordNotFound(RecordNotFoundError),
    Sql(rusqlite::Error),
    TypeConversion(TypeConversionError),
}

impl Error {
    /// A lookup matched zero rows.
    ///
    /// This is always an error, never a null return. Callers that want
    /// optional semantics check [`Error::is_record_not_found`] explicitly.
    pub fn record_not_found(table: impl Into<String>, key: impl Display) -> Self {
        Self::from(ErrorKind::RecordNotFound(RecordNotFoundError::new(
            table.into(),
            key.to_string(),
        )))
    }

    /// A form render was asked for a key the bound entity type does not
    /// expose. A caller/template bug, fatal at render time.
    pub fn accessor_missing(entity: impl Into<String>, key: impl Into<String>) -> Self {
        Self::from(ErrorKind::AccessorMissing(AccessorMissingError::new(
            entity.into(),
            key.into(),
        )))
    }

    /// A row value had an unexpected shape for the requested typed accessor.
    pub fn type_conversion(column: impl Into<String>, expected: &'static str) -> Self {
        Self::from(ErrorKind::TypeConversion(TypeConversionError::new(
            column.into(),
            expected,
        )))
    }

    /// A row was asked for a column the result set does not contain.
    pub fn column_missing(column: impl Into<String>) -> Self {
        Self::from(ErrorKind::ColumnMissing(ColumnMissingError::new(
            column.into(),
        )))
    }

    pub fn is_record_not_found(&self) -> bool {
        matches!(*self.kind, ErrorKind::RecordNotFound(_))
    }

    pub fn is_accessor_missing(&self) -> bool {
        matches!(*self.kind, ErrorKind::AccessorMissing(_))
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match &*self.kind {
            ErrorKind::Sql(err) => Some(err),
            ErrorKind::DateTime(err) => Some(err),
            ErrorKind::Anyhow(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl core::fmt::Display for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        use self::ErrorKind::*;

        match &*self.kind {
            Anyhow(err) => Display::fmt(err, f),
            AccessorMissing(err) => Display::fmt(err, f),
            ColumnMissing(err) => Display::fmt(err, f),
            DateTime(err) => Display::fmt(err, f),
            RecordNotFound(err) => Display::fmt(err, f),
            Sql(err) => Display::fmt(err, f),
            TypeConversion(err) => Display::fmt(err, f),
        }
    }
}

impl core::fmt::Debug for Error {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        if f.alternate() {
            f.debug_struct("Error").field("kind", &self.kind).finish()
        } else {
            core::fmt::Display::fmt(self, f)
        }
    }
}

impl From<ErrorKind> for Error {
    fn from(kind: ErrorKind) -> Self {
        Self {
            kind: Arc::new(kind),
        }
    }
}

impl From<anyhow::Error> for Error {
    fn from(err: anyhow::Error) -> Self {
        Self::from(ErrorKind::Anyhow(err))
    }
}

impl From<rusqlite::Error> for Error {
    fn from(err: rusqlite::Error) -> Self {
        Self::from(ErrorKind::Sql(err))
    }
}

impl From<jiff::Error> for Error {
    fn from(err: jiff::Error) -> Self {
        Self::from(ErrorKind::DateTime(err))
    }
}
