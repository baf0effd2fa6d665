pub mod books;
pub mod users;

pub use books::BookStore;
pub use users::{RegisterError, UserStore};
