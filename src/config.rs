use std::env;

#[derive(Clone)]
pub struct Config {
    pub bind_address: String,
    pub port: u16,
    /// Optional path to a JSON catalog used instead of the built-in seed.
    pub books_seed_path: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Self {
            bind_address: env::var("BIND_ADDRESS").unwrap_or_else(|_| "0.0.0.0".to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| "8080".to_string())
                .parse()
                .expect("PORT must be a valid number"),
            books_seed_path: env::var("BOOKS_SEED_PATH").ok(),
        }
    }
}
