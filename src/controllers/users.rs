use actix_web::{web, HttpResponse, Responder};

use crate::models::RegisterRequest;
use crate::store::RegisterError;
use crate::AppState;

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.route("/register", web::post().to(register));
}

async fn register(
    state: web::Data<AppState>,
    body: Option<web::Json<RegisterRequest>>,
) -> impl Responder {
    // Missing, empty, and absent-body cases are all rejected the same way;
    // an unparsable or absent body is both fields missing
    let body = body.map(web::Json::into_inner);
    let (username, password) = match &body {
        Some(RegisterRequest {
            username: Some(username),
            password: Some(password),
        }) if !username.is_empty() && !password.is_empty() => (username, password),
        _ => {
            return HttpResponse::NotFound().json(serde_json::json!({
                "message": "Unable to register user: Provide username and password."
            }));
        }
    };

    match state.users.register(username, password) {
        Ok(()) => {
            log::info!("Registered user {}", username);
            HttpResponse::Ok().json(serde_json::json!({
                "message": "User successfully registered. Now you can login"
            }))
        }
        Err(RegisterError::DuplicateUser) => HttpResponse::NotFound().json(serde_json::json!({
            "message": "User already exists!"
        })),
    }
}
