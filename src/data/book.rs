use serde::{Deserialize, Serialize};

/// Order in which create payloads are checked for missing fields.
pub const REQUIRED_FIELDS: [&str; 3] = ["title", "author", "year"];

#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct Book {
    pub id: i32,
    pub title: String,
    pub author: String,
    pub year: i32,
}

#[derive(Debug, Deserialize)]
pub struct BookForm {
    pub title: String,
    pub author: String,
    pub year: i32,
}
