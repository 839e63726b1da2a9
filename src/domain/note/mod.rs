// src/domain/note/mod.rs
pub mod entity;
pub mod repository;

pub use entity::{CustomerNote, NewCustomerNote, NoteContent, NoteId};
pub use repository::{CustomerNoteRepository, NoteListFilter};
