use actix_web::{web, HttpResponse, Responder};
use serde_json::json;

use crate::errors::ServerError;

pub mod note;

pub async fn index() -> impl Responder {
    HttpResponse::Ok().json(json!({ "message": "Healthy" }))
}

/// Registers every route plus the extractor configs that turn bad bodies and
/// bad ids into `ServerError` responses. JSON bodies up to `max_body_bytes` are
/// accepted.
pub fn configure(max_body_bytes: usize) -> impl FnOnce(&mut web::ServiceConfig) {
    move |cfg| {
        let json_config = web::JsonConfig::default()
            .limit(max_body_bytes)
            .error_handler(|err, req| {
                log::warn!("rejected body for {} {}: {}", req.method(), req.path(), err);
                ServerError::from(err).into()
            });
        let path_config = web::PathConfig::default().error_handler(|err, req| {
            log::debug!("unparseable note id in {}: {}", req.path(), err);
            ServerError::from(err).into()
        });

        cfg.app_data(json_config)
            .app_data(path_config)
            .route("/", web::get().to(index))
            .service(
                web::scope("/notes")
                    .service(
                        web::resource(["", "/"])
                            .route(web::get().to(note::list))
                            .route(web::post().to(note::new)),
                    )
                    .service(
                        web::resource("/{id}")
                            .route(web::get().to(note::get))
                            .route(web::put().to(note::update))
                            .route(web::delete().to(note::del)),
                    ),
            );
    }
}
