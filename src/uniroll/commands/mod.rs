//! # Command Layer
//!
//! One module per user-facing action. Commands sit between the API facade and
//! the [`Database`]: they check input formats the database trusts its callers to
//! check, call the store, and describe the outcome as [`CmdMessage`]s.
//!
//! Domain failures (unknown student, full enrolment, taken email...) are returned
//! as `Err(RosterError)`; clients decide how to show them.

use crate::config::RosterConfig;
use crate::database::Database;
use crate::model::{Student, Subject};
use crate::store::DataStore;
use crate::view::RosterView;

pub mod clear;
pub mod config;
pub mod enrol;
pub mod login;
pub mod password;
pub mod register;
pub mod remove;
pub mod students;
pub mod subjects;
pub mod withdraw;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MessageLevel {
    Info,
    Success,
    Warning,
    Error,
}

#[derive(Debug, Clone)]
pub struct CmdMessage {
    pub level: MessageLevel,
    pub content: String,
}

impl CmdMessage {
    pub fn info(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Info,
            content: content.into(),
        }
    }

    pub fn success(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Success,
            content: content.into(),
        }
    }

    pub fn warning(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Warning,
            content: content.into(),
        }
    }

    pub fn error(content: impl Into<String>) -> Self {
        Self {
            level: MessageLevel::Error,
            content: content.into(),
        }
    }
}

#[derive(Debug, Default)]
pub struct CmdResult {
    pub students: Vec<Student>,
    pub subjects: Vec<Subject>,
    pub view: Option<RosterView>,
    pub config: Option<RosterConfig>,
    pub messages: Vec<CmdMessage>,
}

impl CmdResult {
    pub fn add_message(&mut self, message: CmdMessage) {
        self.messages.push(message);
    }

    pub fn with_students(mut self, students: Vec<Student>) -> Self {
        self.students = students;
        self
    }

    pub fn with_subjects(mut self, subjects: Vec<Subject>) -> Self {
        self.subjects = subjects;
        self
    }

    pub fn with_view(mut self, view: RosterView) -> Self {
        self.view = Some(view);
        self
    }

    pub fn with_config(mut self, config: RosterConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Appends a warning when the last save did not reach the backing store.
    pub(crate) fn flag_unsaved<S: DataStore>(mut self, db: &Database<S>) -> Self {
        if db.has_unsaved_changes() {
            self.add_message(CmdMessage::warning(format!(
                "Warning: changes could not be saved to {}",
                db.store().location()
            )));
        }
        self
    }
}
