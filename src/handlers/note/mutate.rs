use actix_web::{http::header, web, HttpResponse};
use uuid::Uuid;

use crate::{
    errors::ServerError,
    models::note::{IncomingNote, Note},
    AppState,
};

pub async fn new(
    input: web::Json<IncomingNote>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let fields = input.into_inner().validate()?;
    let note = state.notes.create(Note::new(fields));
    log::info!("created note {}", note.id);

    Ok(HttpResponse::Created()
        .insert_header((header::LOCATION, format!("/notes/{}", note.id)))
        .json(note))
}

pub async fn update(
    note_id: web::Path<Uuid>,
    input: web::Json<IncomingNote>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();
    let fields = input.into_inner().validate()?;

    let note = match state.notes.revise(&note_id, fields) {
        Some(note) => note,
        None => {
            log::debug!("note id: {} was not found", note_id);
            return Err(ServerError::NotFound);
        }
    };
    log::info!("updated note {}", note_id);

    Ok(HttpResponse::Ok().json(note))
}

pub async fn del(
    note_id: web::Path<Uuid>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, ServerError> {
    let note_id = note_id.into_inner();

    if state.notes.delete(&note_id) {
        log::info!("deleted note {}", note_id);
        Ok(HttpResponse::NoContent().finish())
    } else {
        Err(ServerError::NotFound)
    }
}
