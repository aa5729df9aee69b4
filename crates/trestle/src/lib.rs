pub mod db;
pub use db::Db;

mod error;
pub use error::{Error, Result};

pub mod form;
pub use form::{EntitySource, Errors, Feedback, Form, MappingSource, ValueSource};

mod record;
pub use record::{Fields, Record};

mod row;
pub use row::Row;

pub mod table;
pub use table::{Association, Related, Table};

mod value;
pub use value::Value;

pub use indexmap::IndexMap;
