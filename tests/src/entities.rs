//! The demo blog entities the integration tests map against.

use jiff::civil::DateTime;
use trestle::{Fields, Record, Related, Result, Row, Value};

#[derive(Debug, Clone)]
pub struct User {
    pub id: i64,
    pub username: String,
    pub email: String,
    pub password: String,
    pub created_at: DateTime,
}

impl Record for User {
    fn load(row: &Row) -> Result<Self> {
        Ok(User {
            id: row.i64("id")?,
            username: row.str("username")?,
            email: row.str("email")?,
            password: row.str("password")?,
            created_at: row.datetime("created_at")?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl Fields for User {
    fn get(&self, key: &str) -> Option<Value> {
        Some(match key {
            "id" => self.id.into(),
            "username" => self.username.as_str().into(),
            "email" => self.email.as_str().into(),
            "password" => self.password.as_str().into(),
            "created_at" => self.created_at.into(),
            _ => return None,
        })
    }
}

#[derive(Debug, Clone)]
pub struct Post {
    pub id: i64,
    pub name: String,
    pub slug: String,
    pub content: Option<String>,
    pub created_at: DateTime,

    /// Populated by hydration; empty until then.
    pub categories: Vec<Category>,
}

impl Record for Post {
    fn load(row: &Row) -> Result<Self> {
        Ok(Post {
            id: row.i64("id")?,
            name: row.str("name")?,
            slug: row.str("slug")?,
            content: row.opt_str("content")?,
            created_at: row.datetime("created_at")?,
            categories: vec![],
        })
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl Fields for Post {
    fn get(&self, key: &str) -> Option<Value> {
        Some(match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "slug" => self.slug.as_str().into(),
            "content" => self.content.clone().into(),
            "created_at" => self.created_at.into(),
            // Category ids, in the string form select options use
            "categories" => Value::list_from_vec(
                self.categories
                    .iter()
                    .map(|c| c.id.to_string().into())
                    .collect(),
            ),
            _ => return None,
        })
    }
}

impl Related<Category> for Post {
    fn set_related(&mut self, children: Vec<Category>) {
        self.categories = children;
    }
}

#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
    pub slug: String,
}

impl Record for Category {
    fn load(row: &Row) -> Result<Self> {
        Ok(Category {
            id: row.i64("id")?,
            name: row.str("name")?,
            slug: row.str("slug")?,
        })
    }

    fn id(&self) -> i64 {
        self.id
    }
}

impl Fields for Category {
    fn get(&self, key: &str) -> Option<Value> {
        Some(match key {
            "id" => self.id.into(),
            "name" => self.name.as_str().into(),
            "slug" => self.slug.as_str().into(),
            _ => return None,
        })
    }
}
