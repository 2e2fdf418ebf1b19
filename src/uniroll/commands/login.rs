use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::{Result, RosterError};
use crate::model::normalize_email;
use crate::store::DataStore;
use crate::validation::{is_valid_email, is_valid_password};

/// Re-reads the roster, then checks the credentials against it.
pub fn run<S: DataStore>(db: &mut Database<S>, email: &str, password: &str) -> Result<CmdResult> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        return Err(RosterError::InvalidEmail);
    }
    if !is_valid_password(password) {
        return Err(RosterError::InvalidPassword);
    }

    db.load();
    let student = db.authenticate(&email, password)?.clone();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!("Welcome, {}!", student.name)));
    Ok(result.with_students(vec![student]))
}
