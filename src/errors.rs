use std::collections::BTreeMap;

use actix_web::{
    error::{JsonPayloadError, PathError},
    HttpResponse,
};
use derive_more::Display;
use serde_json::json;

#[derive(Debug, Display, PartialEq, Eq)]
pub enum CommonError {
    #[display(fmt = "is required")]
    Required,
    #[display(fmt = "must be at most {} characters long", _0)]
    TooLong(usize),
}

#[derive(Debug, Display, PartialEq, Eq)]
pub enum Fields {
    #[display(fmt = "The title field {}.", _0)]
    Title(CommonError),
    #[display(fmt = "The content field {}.", _0)]
    Content(CommonError),
}

impl Fields {
    /// JSON name of the offending field, used as the key in the error payload.
    pub fn name(&self) -> &'static str {
        match self {
            Fields::Title(_) => "title",
            Fields::Content(_) => "content",
        }
    }
}

#[derive(Debug, Display)]
pub enum ServerError {
    #[display(fmt = "Environment Error: {}", _0)]
    EnvironmentError(String),
    #[display(fmt = "Invalid Request: one or more validation errors occurred")]
    UserError(Vec<Fields>),
    #[display(fmt = "Invalid Request: {}", _0)]
    MalformedRequest(String),
    #[display(fmt = "Note not found")]
    NotFound,
}

impl From<JsonPayloadError> for ServerError {
    fn from(err: JsonPayloadError) -> ServerError {
        match err {
            JsonPayloadError::Deserialize(e) if e.is_eof() && e.line() == 1 && e.column() == 0 => {
                ServerError::MalformedRequest("Request body is required.".to_string())
            }
            other => ServerError::MalformedRequest(other.to_string()),
        }
    }
}

// an id that does not parse can never name a stored note
impl From<PathError> for ServerError {
    fn from(_: PathError) -> ServerError {
        ServerError::NotFound
    }
}

impl actix_web::error::ResponseError for ServerError {
    fn error_response(&self) -> HttpResponse {
        match self {
            ServerError::EnvironmentError(_) => HttpResponse::InternalServerError()
                .json(json!({ "error": "Internal Error: Environment Error." })),
            ServerError::UserError(fields) => {
                let mut errors: BTreeMap<&'static str, Vec<String>> = BTreeMap::new();
                for field in fields {
                    errors
                        .entry(field.name())
                        .or_default()
                        .push(field.to_string());
                }
                HttpResponse::BadRequest().json(json!({
                    "title": "One or more validation errors occurred.",
                    "status": 400,
                    "errors": errors,
                }))
            }
            ServerError::MalformedRequest(msg) => {
                HttpResponse::BadRequest().json(json!({ "error": msg }))
            }
            ServerError::NotFound => {
                HttpResponse::NotFound().json(json!({ "error": "Note not found" }))
            }
        }
    }
}
