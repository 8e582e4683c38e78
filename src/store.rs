use uuid::Uuid;

use crate::models::note::{Note, NoteFields};

pub mod memory;

pub use memory::MemoryStore;

/// Storage capabilities the handlers rely on. Every call is atomic per note id.
pub trait NoteStore: Send + Sync {
    /// Inserts `note` under its own id. Ids are random v4 uuids, so this never collides.
    fn create(&self, note: Note) -> Note;

    /// Every note, most recently updated first.
    fn get_all(&self) -> Vec<Note>;

    fn get_by_id(&self, id: &Uuid) -> Option<Note>;

    /// Replaces the stored note with the same id. Returns `false` without
    /// inserting anything if that id is absent.
    fn update(&self, note: Note) -> bool;

    /// Applies `fields` to the stored note and returns the result, or `None` if
    /// the id is absent. Backends should override this to make the read and the
    /// write one atomic step; the fallback lets a concurrent update slip between.
    fn revise(&self, id: &Uuid, fields: NoteFields) -> Option<Note> {
        let mut note = self.get_by_id(id)?;
        note.revise(fields);
        self.update(note.clone()).then_some(note)
    }

    fn delete(&self, id: &Uuid) -> bool;
}
