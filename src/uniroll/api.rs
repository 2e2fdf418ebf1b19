//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single entry
//! point for every uniroll client (the bundled CLI, a menu front-end, a GUI...).
//!
//! It dispatches to `commands/*.rs` and returns structured [`CmdResult`]s. It does
//! no business logic, no printing and no formatting of its own.
//!
//! `RosterApi<S: DataStore>` is generic over the storage backend:
//! - Production: `RosterApi<FileStore>`
//! - Testing: `RosterApi<InMemoryStore>`

use crate::commands;
use crate::database::Database;
use crate::error::Result;
use crate::store::DataStore;
use crate::view::ViewMode;
use std::path::{Path, PathBuf};

/// The main API facade for roster operations.
///
/// Owns the process' one [`Database`]; hand out `&mut RosterApi` rather than
/// building a second one over the same file.
pub struct RosterApi<S: DataStore> {
    db: Database<S>,
    data_dir: PathBuf,
}

impl<S: DataStore> RosterApi<S> {
    pub fn new(db: Database<S>, data_dir: PathBuf) -> Self {
        Self { db, data_dir }
    }

    pub fn register(&mut self, email: &str, password: &str, name: &str) -> Result<CmdResult> {
        commands::register::run(&mut self.db, email, password, name)
    }

    pub fn login(&mut self, email: &str, password: &str) -> Result<CmdResult> {
        commands::login::run(&mut self.db, email, password)
    }

    pub fn enrol(&mut self, student_id: &str) -> Result<CmdResult> {
        commands::enrol::run(&mut self.db, student_id)
    }

    pub fn drop_subject(&mut self, student_id: &str, subject_id: &str) -> Result<CmdResult> {
        commands::withdraw::run(&mut self.db, student_id, subject_id)
    }

    pub fn change_password(&mut self, student_id: &str, new_password: &str) -> Result<CmdResult> {
        commands::password::run(&mut self.db, student_id, new_password)
    }

    pub fn subjects(&self, student_id: &str) -> Result<CmdResult> {
        commands::subjects::run(&self.db, student_id)
    }

    pub fn students(&self, mode: ViewMode) -> Result<CmdResult> {
        commands::students::run(&self.db, mode)
    }

    pub fn remove_student(&mut self, student_id: &str) -> Result<CmdResult> {
        commands::remove::run(&mut self.db, student_id)
    }

    pub fn clear_all(&mut self) -> Result<CmdResult> {
        commands::clear::run(&mut self.db)
    }

    pub fn email_available(&self, email: &str) -> bool {
        self.db.email_available(email)
    }

    pub fn config(&self, action: ConfigAction) -> Result<CmdResult> {
        commands::config::run(&self.data_dir, action)
    }

    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }

    pub fn database(&self) -> &Database<S> {
        &self.db
    }
}

pub use crate::commands::config::ConfigAction;
pub use commands::{CmdMessage, CmdResult, MessageLevel};
