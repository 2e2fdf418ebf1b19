//! # Storage Layer
//!
//! The roster has exactly one durable representation: an ordered JSON array of
//! student records. The [`DataStore`] trait is the seam between the in-memory
//! [`Database`](crate::database::Database) and wherever that array lives.
//!
//! ## Implementations
//!
//! - [`fs::FileStore`]: Production storage in a single file (`students.data` by default).
//!   Every save rewrites the whole file through a temp file + rename.
//! - [`memory::InMemoryStore`]: No persistence. Used in tests, and able to
//!   simulate failing saves.
//!
//! Stores never merge or diff: `save` always receives the complete roster.

use crate::error::Result;
use crate::model::Student;

pub mod fs;
pub mod memory;

pub trait DataStore {
    /// Read the full roster. A missing backing resource is an empty roster, not an error.
    fn load(&self) -> Result<Vec<Student>>;

    /// Replace the stored roster with `students`.
    /// MUST be atomic: a reader sees either the old or the new roster.
    fn save(&mut self, students: &[Student]) -> Result<()>;

    /// Human readable location, for diagnostics.
    fn location(&self) -> String;
}
