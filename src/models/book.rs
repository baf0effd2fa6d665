use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// A catalog entry. Reviews map reviewer username to review text.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Book {
    pub isbn: String,
    pub title: String,
    pub author: String,
    #[serde(default)]
    pub reviews: HashMap<String, String>,
}

impl Book {
    pub fn new(isbn: &str, title: &str, author: &str) -> Self {
        Book {
            isbn: isbn.to_string(),
            title: title.to_string(),
            author: author.to_string(),
            reviews: HashMap::new(),
        }
    }
}
