/// Error when a result row is asked for a column it does not contain.
#[derive(Debug)]
pub(super) struct ColumnMissingError {
    pub(super) column: String,
}

impl ColumnMissingError {
    pub(super) fn new(column: String) -> Self {
        ColumnMissingError { column }
    }
}

impl std::error::Error for ColumnMissingError {}

impl core::fmt::Display for ColumnMissingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "unknown column: {}", self.column)
    }
}
