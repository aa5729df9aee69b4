/// Error when a record lookup (by key or by column) returns no rows.
#[derive(Debug)]
pub(super) struct RecordNotFoundError {
    pub(super) table: String,
    pub(super) key: String,
}

impl RecordNotFoundError {
    pub(super) fn new(table: String, key: String) -> Self {
        RecordNotFoundError { table, key }
    }
}

impl std::error::Error for RecordNotFoundError {}

impl core::fmt::Display for RecordNotFoundError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(f, "record not found: table={} key={}", self.table, self.key)
    }
}
