use chrono::{DateTime, Duration, Utc};
use serde_derive::{Deserialize, Serialize};
use uuid::Uuid;

use crate::errors::{CommonError, Fields, ServerError};

pub const MAX_TITLE_LENGTH: usize = 200;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Note {
    pub id: Uuid,
    pub title: String,
    pub content: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Note {
    /// Builds a fresh note with a random id; both timestamps are the same instant.
    pub fn new(fields: NoteFields) -> Self {
        let time_now = Utc::now();
        Note {
            id: Uuid::new_v4(),
            title: fields.title,
            content: fields.content,
            created_at: time_now,
            updated_at: time_now,
        }
    }

    /// Replaces title and content and moves `updated_at` forward. `id` and
    /// `created_at` are left alone.
    pub fn revise(&mut self, fields: NoteFields) {
        self.title = fields.title;
        self.content = fields.content;
        self.updated_at = next_update_time(self.updated_at);
    }
}

// never hand out a timestamp at or before the previous one, even if the clock steps back
fn next_update_time(previous: DateTime<Utc>) -> DateTime<Utc> {
    let time_now = Utc::now();
    if time_now > previous {
        time_now
    } else {
        previous + Duration::microseconds(1)
    }
}

/// Request body for both create and update. Unknown keys (a body `id`, say) are ignored.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct IncomingNote {
    pub title: Option<String>,
    pub content: Option<String>,
}

/// Trimmed, validated title and content.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoteFields {
    pub title: String,
    pub content: String,
}

impl IncomingNote {
    pub fn validate(self) -> Result<NoteFields, ServerError> {
        let mut field_errors = vec![];

        let title = self.title.as_deref().map(str::trim).unwrap_or_default();
        if title.is_empty() {
            field_errors.push(Fields::Title(CommonError::Required));
        } else if title.chars().count() > MAX_TITLE_LENGTH {
            field_errors.push(Fields::Title(CommonError::TooLong(MAX_TITLE_LENGTH)));
        }

        let content = self.content.as_deref().map(str::trim).unwrap_or_default();
        if content.is_empty() {
            field_errors.push(Fields::Content(CommonError::Required));
        }

        if !field_errors.is_empty() {
            return Err(ServerError::UserError(field_errors));
        }

        Ok(NoteFields {
            title: title.to_owned(),
            content: content.to_owned(),
        })
    }
}
