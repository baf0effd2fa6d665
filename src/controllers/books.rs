use actix_web::{web, HttpResponse, Responder};

use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/", web::get().to(list_books))
        .route("/isbn/{isbn}", web::get().to(get_by_isbn))
        .route("/author/{author}", web::get().to(get_by_author))
        .route("/title/{title}", web::get().to(get_by_title))
        .route("/review/{isbn}", web::get().to(get_reviews));
}

/// Full catalog as a JSON object keyed by ISBN.
async fn list_books(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(state.books.get_all())
}

async fn get_by_isbn(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let isbn = path.into_inner();
    match state.books.get_by_isbn(&isbn) {
        Some(book) => HttpResponse::Ok().json(book),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Book not found"
        })),
    }
}

async fn get_by_author(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let author = path.into_inner();
    let matches = state.books.get_by_author(&author);
    if matches.is_empty() {
        return HttpResponse::NotFound().json(serde_json::json!({
            "message": "No books found for this author"
        }));
    }
    HttpResponse::Ok().json(matches)
}

async fn get_by_title(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let title = path.into_inner();
    let matches = state.books.get_by_title(&title);
    if matches.is_empty() {
        return HttpResponse::NotFound().json(serde_json::json!({
            "message": "No books found with this title"
        }));
    }
    HttpResponse::Ok().json(matches)
}

async fn get_reviews(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let isbn = path.into_inner();
    match state.books.get_reviews(&isbn) {
        Some(reviews) => HttpResponse::Ok().json(reviews),
        None => HttpResponse::NotFound().json(serde_json::json!({
            "message": "Book not found"
        })),
    }
}
