use std::path::Path;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;

use bookstore_backend::config::Config;
use bookstore_backend::store::{BookStore, UserStore};
use bookstore_backend::{controllers, AppState};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    env_logger::init();

    let config = Config::from_env();
    let bind_address = config.bind_address.clone();
    let port = config.port;

    let books = match &config.books_seed_path {
        Some(path) => {
            log::info!("Loading book catalog from {}", path);
            match BookStore::from_seed_file(Path::new(path)) {
                Ok(store) => store,
                Err(e) => {
                    log::error!("{}", e);
                    std::process::exit(1);
                }
            }
        }
        None => BookStore::seeded(),
    };
    log::info!("Catalog loaded with {} books", books.len());

    let state = web::Data::new(AppState {
        books,
        users: UserStore::new(),
    });

    log::info!("Starting bookstore server on {}:{}", bind_address, port);

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config)
            .configure(controllers::users::config)
            .configure(controllers::books::config)
    })
    .bind((bind_address, port))?
    .run()
    .await
}
