use crate::{Db, Error, Record, Result, Value};

use std::borrow::Cow;
use std::collections::HashMap;
use std::marker::PhantomData;

/// A record mapper for one logical table.
///
/// Bound at construction to a connection handle, a table name, and the target
/// entity type; the binding never changes afterwards. Mappers are cheap to
/// construct, one per request is the expected pattern:
///
/// ```ignore
/// let posts: Table<Post> = Table::new(&db, "post");
/// let post = posts.find_by_id(42)?;
/// ```
pub struct Table<'db, T> {
    db: &'db Db,
    name: Cow<'static, str>,
    _record: PhantomData<T>,
}

/// Describes the join table carrying a many-to-many association.
#[derive(Debug, Clone)]
pub struct Association {
    /// The join table, e.g. `post_category`
    pub table: Cow<'static, str>,

    /// Column referencing the parent, e.g. `post_id`
    pub parent_key: Cow<'static, str>,

    /// Column referencing the related entity, e.g. `category_id`
    pub child_key: Cow<'static, str>,
}

impl Association {
    pub fn new(
        table: impl Into<Cow<'static, str>>,
        parent_key: impl Into<Cow<'static, str>>,
        child_key: impl Into<Cow<'static, str>>,
    ) -> Self {
        Association {
            table: table.into(),
            parent_key: parent_key.into(),
            child_key: child_key.into(),
        }
    }
}

/// Receives a hydrated collection of related entities.
pub trait Related<C> {
    fn set_related(&mut self, children: Vec<C>);
}

impl<'db, T: Record> Table<'db, T> {
    pub fn new(db: &'db Db, name: impl Into<Cow<'static, str>>) -> Self {
        Table {
            db,
            name: name.into(),
            _record: PhantomData,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Fetches the unique row whose primary key equals `id`.
    ///
    /// A missing row is an error, never a blank entity.
    pub fn find_by_id(&self, id: i64) -> Result<T> {
        let sql = format!("SELECT * FROM {} WHERE id = ?", self.name);
        let rows = self.db.query(&sql, &[Value::I64(id)])?;

        match rows.first() {
            Some(row) => T::load(row),
            None => Err(Error::record_not_found(self.name.as_ref(), id)),
        }
    }

    /// Fetches the row where the named column equals `value`.
    ///
    /// Intended for columns expected to be unique (username, slug). Should
    /// several rows match anyway, the one with the smallest primary key wins.
    pub fn find_by_column(&self, column: &str, value: impl Into<Value>) -> Result<T> {
        let sql = format!(
            "SELECT * FROM {} WHERE {} = ? ORDER BY id LIMIT 1",
            self.name, column
        );
        let value = value.into();
        let rows = self.db.query(&sql, std::slice::from_ref(&value))?;

        match rows.first() {
            Some(row) => T::load(row),
            None => Err(Error::record_not_found(
                self.name.as_ref(),
                value.to_form_string(),
            )),
        }
    }

    /// Fetches every row, in primary-key order.
    pub fn all(&self) -> Result<Vec<T>> {
        let sql = format!("SELECT * FROM {} ORDER BY id", self.name);
        let rows = self.db.query(&sql, &[])?;

        rows.iter().map(T::load).collect()
    }

    /// Batch-attaches this table's entities onto each parent through a join
    /// table, with a single query regardless of parent count.
    ///
    /// Parents with no related rows receive an empty collection; related
    /// entities attach in primary-key order. An empty `parents` slice
    /// executes no query at all.
    pub fn hydrate<P>(&self, assoc: &Association, parents: &mut [P]) -> Result<()>
    where
        P: Record + Related<T>,
    {
        if parents.is_empty() {
            return Ok(());
        }

        let placeholders = vec!["?"; parents.len()].join(", ");
        let sql = format!(
            "SELECT c.*, a.{parent_key} FROM {child} c \
             JOIN {assoc} a ON a.{child_key} = c.id \
             WHERE a.{parent_key} IN ({placeholders}) ORDER BY c.id",
            child = self.name,
            assoc = assoc.table,
            parent_key = assoc.parent_key,
            child_key = assoc.child_key,
        );
        let params: Vec<Value> = parents.iter().map(|p| Value::I64(p.id())).collect();
        let rows = self.db.query(&sql, &params)?;

        let mut by_parent: HashMap<i64, Vec<T>> = HashMap::new();
        for row in &rows {
            let parent_id = row.i64(&assoc.parent_key)?;
            by_parent.entry(parent_id).or_default().push(T::load(row)?);
        }

        for parent in parents {
            let children = by_parent.remove(&parent.id()).unwrap_or_default();
            parent.set_related(children);
        }

        Ok(())
    }
}
