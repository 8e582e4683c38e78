//! Process-local note storage.
//!
//! Notes live in a sharded `DashMap`, so readers and writers touching different
//! ids rarely contend and a single entry is never observed half-written.
//! Nothing survives a restart.

use dashmap::DashMap;
use uuid::Uuid;

use super::NoteStore;
use crate::models::note::{Note, NoteFields};

#[derive(Default)]
pub struct MemoryStore {
    notes: DashMap<Uuid, Note>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl NoteStore for MemoryStore {
    fn create(&self, note: Note) -> Note {
        self.notes.insert(note.id, note.clone());
        note
    }

    fn get_all(&self) -> Vec<Note> {
        let mut all: Vec<Note> = self
            .notes
            .iter()
            .map(|entry| entry.value().clone())
            .collect();
        all.sort_by(|a, b| (b.updated_at, a.id).cmp(&(a.updated_at, b.id)));
        all
    }

    fn get_by_id(&self, id: &Uuid) -> Option<Note> {
        self.notes.get(id).map(|entry| entry.value().clone())
    }

    fn update(&self, note: Note) -> bool {
        match self.notes.get_mut(&note.id) {
            Some(mut entry) => {
                *entry = note;
                true
            }
            None => false,
        }
    }

    // holding the entry guard makes concurrent revisions of one note queue up,
    // so each sees the previous `updated_at` and moves past it
    fn revise(&self, id: &Uuid, fields: NoteFields) -> Option<Note> {
        let mut entry = self.notes.get_mut(id)?;
        entry.revise(fields);
        Some(entry.value().clone())
    }

    fn delete(&self, id: &Uuid) -> bool {
        self.notes.remove(id).is_some()
    }
}
