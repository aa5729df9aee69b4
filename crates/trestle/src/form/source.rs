use crate::{Error, Fields, Result, Value};

use indexmap::IndexMap;

/// Where a form's current field values come from.
pub trait ValueSource {
    fn value(&self, key: &str) -> Result<Value>;
}

/// Submitted key-value data, typically the decoded form body of the request
/// being re-rendered after validation failed.
///
/// An absent key resolves to null and renders blank; it is not an error.
#[derive(Debug, Default)]
pub struct MappingSource {
    values: IndexMap<String, Value>,
}

impl MappingSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        self.values.insert(key.into(), value.into());
    }
}

impl From<IndexMap<String, Value>> for MappingSource {
    fn from(values: IndexMap<String, Value>) -> Self {
        MappingSource { values }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for MappingSource {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        MappingSource {
            values: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl ValueSource for MappingSource {
    fn value(&self, key: &str) -> Result<Value> {
        Ok(self.values.get(key).cloned().unwrap_or(Value::Null))
    }
}

/// A loaded entity, typically the record being edited.
///
/// Every key the template renders must be answered by the entity's
/// [`Fields`] implementation; an unknown key is a template bug and fails
/// loudly.
#[derive(Debug)]
pub struct EntitySource<T> {
    entity: T,
}

impl<T: Fields> EntitySource<T> {
    pub fn new(entity: T) -> Self {
        EntitySource { entity }
    }
}

impl<T: Fields> ValueSource for EntitySource<T> {
    fn value(&self, key: &str) -> Result<Value> {
        self.entity
            .get(key)
            .ok_or_else(|| Error::accessor_missing(std::any::type_name::<T>(), key))
    }
}
