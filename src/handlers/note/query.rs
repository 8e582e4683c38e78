use actix_web::{web, HttpResponse};
use uuid::Uuid;

use crate::{errors::ServerError, AppState};

pub async fn list(state: web::Data<AppState>) -> HttpResponse {
    HttpResponse::Ok().json(state.notes.get_all())
}

pub async fn get(
    note_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();

    match state.notes.get_by_id(&note_id) {
        Some(note) => Ok(HttpResponse::Ok().json(note)),
        None => {
            log::debug!("note id: {} was not found", note_id);
            Err(ServerError::NotFound)
        }
    }
}
