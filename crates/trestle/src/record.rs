use crate::{Result, Row, Value};

/// A typed entity that can be loaded from a result row.
pub trait Record: Sized {
    /// Load an instance of the entity, populating fields field-for-field from
    /// the row's columns by name.
    fn load(row: &Row) -> Result<Self>;

    /// The entity's primary key.
    fn id(&self) -> i64;
}

/// Field access by string key.
///
/// This is the renderer-facing capability: any entity the form renderer is
/// handed must answer `get` for every key the template renders. `None` means
/// the type has no such field, which the renderer surfaces as an
/// accessor-missing error rather than rendering silently.
pub trait Fields {
    fn get(&self, key: &str) -> Option<Value>;
}

impl<T: Fields + ?Sized> Fields for &T {
    fn get(&self, key: &str) -> Option<Value> {
        (**self).get(key)
    }
}
