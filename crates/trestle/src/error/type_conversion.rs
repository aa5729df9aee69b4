/// Error when a row value cannot be converted to the requested type.
#[derive(Debug)]
pub(super) struct TypeConversionError {
    pub(super) column: String,
    pub(super) expected: &'static str,
}

impl TypeConversionError {
    pub(super) fn new(column: String, expected: &'static str) -> Self {
        TypeConversionError { column, expected }
    }
}

impl std::error::Error for TypeConversionError {}

impl core::fmt::Display for TypeConversionError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "cannot convert column `{}` to {}",
            self.column, self.expected
        )
    }
}
