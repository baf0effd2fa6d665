use std::collections::{BTreeMap, HashMap};
use std::fs;
use std::path::Path;

use dashmap::DashMap;
use serde::Deserialize;

use crate::models::Book;

/// Catalog entry as written in a seed file, keyed externally by ISBN.
#[derive(Debug, Deserialize)]
struct SeedBook {
    title: String,
    author: String,
    #[serde(default)]
    reviews: HashMap<String, String>,
}

/// In-memory catalog keyed by ISBN. Built once at startup; lookups and
/// filters are linear scans over a small fixed collection.
#[derive(Debug)]
pub struct BookStore {
    books: DashMap<String, Book>,
}

impl BookStore {
    pub fn new() -> Self {
        BookStore {
            books: DashMap::new(),
        }
    }

    /// Build the store from the built-in ten-classic catalog.
    pub fn seeded() -> Self {
        let store = BookStore::new();
        for (isbn, title, author) in DEFAULT_CATALOG {
            store.insert(Book::new(isbn, title, author));
        }
        store
    }

    /// Build the store from a JSON seed file mapping ISBN to book fields.
    pub fn from_seed_file(path: &Path) -> Result<Self, String> {
        let raw = fs::read_to_string(path)
            .map_err(|e| format!("Failed to read seed file {}: {}", path.display(), e))?;
        let seed: HashMap<String, SeedBook> = serde_json::from_str(&raw)
            .map_err(|e| format!("Invalid seed file {}: {}", path.display(), e))?;

        let store = BookStore::new();
        for (isbn, entry) in seed {
            store.insert(Book {
                isbn,
                title: entry.title,
                author: entry.author,
                reviews: entry.reviews,
            });
        }
        Ok(store)
    }

    pub fn insert(&self, book: Book) {
        self.books.insert(book.isbn.clone(), book);
    }

    /// Full catalog, ISBN-ordered for deterministic JSON output.
    pub fn get_all(&self) -> BTreeMap<String, Book> {
        self.books
            .iter()
            .map(|entry| (entry.key().clone(), entry.value().clone()))
            .collect()
    }

    pub fn get_by_isbn(&self, isbn: &str) -> Option<Book> {
        self.books.get(isbn).map(|entry| entry.value().clone())
    }

    /// All books by the given author, exact match.
    pub fn get_by_author(&self, author: &str) -> Vec<Book> {
        let mut matches: Vec<Book> = self
            .books
            .iter()
            .filter(|entry| entry.value().author == author)
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by(|a, b| a.isbn.cmp(&b.isbn));
        matches
    }

    /// All books with the given title, exact match.
    pub fn get_by_title(&self, title: &str) -> Vec<Book> {
        let mut matches: Vec<Book> = self
            .books
            .iter()
            .filter(|entry| entry.value().title == title)
            .map(|entry| entry.value().clone())
            .collect();
        matches.sort_by(|a, b| a.isbn.cmp(&b.isbn));
        matches
    }

    pub fn get_reviews(&self, isbn: &str) -> Option<HashMap<String, String>> {
        self.books.get(isbn).map(|entry| entry.value().reviews.clone())
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for BookStore {
    fn default() -> Self {
        BookStore::new()
    }
}

/// Default catalog, matching the shop's original inventory.
const DEFAULT_CATALOG: [(&str, &str, &str); 10] = [
    ("1", "Things Fall Apart", "Chinua Achebe"),
    ("2", "Fairy tales", "Hans Christian Andersen"),
    ("3", "The Divine Comedy", "Dante Alighieri"),
    ("4", "The Epic Of Gilgamesh", "Unknown"),
    ("5", "The Book Of Job", "Unknown"),
    ("6", "One Thousand and One Nights", "Unknown"),
    ("7", "Njal's Saga", "Unknown"),
    ("8", "Pride and Prejudice", "Jane Austen"),
    ("9", "Le Pere Goriot", "Honore de Balzac"),
    ("10", "Molloy", "Samuel Beckett"),
];
