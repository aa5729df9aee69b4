/// Error when a form render asks an entity source for a field key the entity
/// type does not expose.
#[derive(Debug)]
pub(super) struct AccessorMissingError {
    pub(super) entity: String,
    pub(super) key: String,
}

impl AccessorMissingError {
    pub(super) fn new(entity: String, key: String) -> Self {
        AccessorMissingError { entity, key }
    }
}

impl std::error::Error for AccessorMissingError {}

impl core::fmt::Display for AccessorMissingError {
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        write!(
            f,
            "accessor missing: entity={} key={}",
            self.entity, self.key
        )
    }
}
