mod entities;
pub use entities::{Category, Post, User};

pub use setup::blog_db;
