pub mod config;
pub mod controllers;
pub mod models;
pub mod store;

use store::{BookStore, UserStore};

pub struct AppState {
    pub books: BookStore,
    pub users: UserStore,
}
