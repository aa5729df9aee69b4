use crate::{Result, Row, Value};

use log::debug;
use rusqlite::Connection as RusqliteConnection;
use std::cell::Cell;
use std::path::Path;

/// A request-scoped SQLite connection handle.
///
/// `Db` owns no lifecycle concerns beyond the wrapped connection: the
/// surrounding layer opens one per request and drops it afterwards. It is
/// intentionally not shareable across threads.
#[derive(Debug)]
pub struct Db {
    connection: RusqliteConnection,
    queries: Cell<u64>,
}

impl Db {
    /// Open a database at the specified file path.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let connection = RusqliteConnection::open(path)?;
        Ok(Self::new(connection))
    }

    /// Create an in-memory database.
    pub fn in_memory() -> Result<Self> {
        let connection = RusqliteConnection::open_in_memory()?;
        Ok(Self::new(connection))
    }

    fn new(connection: RusqliteConnection) -> Self {
        Db {
            connection,
            queries: Cell::new(0),
        }
    }

    /// Runs a parameterized query and collects every result row.
    pub fn query(&self, sql: &str, params: &[Value]) -> Result<Vec<Row>> {
        debug!(target: "trestle::db", "query: {sql}");
        self.queries.set(self.queries.get() + 1);

        let mut stmt = self.connection.prepare_cached(sql)?;
        let mut rows = stmt.query(rusqlite::params_from_iter(params.iter()))?;

        let mut ret = vec![];
        while let Some(row) = rows.next()? {
            ret.push(Row::from_sql(row)?);
        }

        Ok(ret)
    }

    /// Runs a statement that returns no rows (schema setup, seeding).
    pub fn execute(&self, sql: &str, params: &[Value]) -> Result<usize> {
        debug!(target: "trestle::db", "execute: {sql}");
        self.queries.set(self.queries.get() + 1);

        let mut stmt = self.connection.prepare_cached(sql)?;
        let count = stmt.execute(rusqlite::params_from_iter(params.iter()))?;

        Ok(count)
    }

    /// Total number of statements this handle has executed.
    ///
    /// Tests use the counter to pin query-count guarantees, batched hydration
    /// in particular.
    pub fn queries_executed(&self) -> u64 {
        self.queries.get()
    }
}
