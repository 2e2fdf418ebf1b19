use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::{Result, RosterError};
use crate::store::DataStore;
use crate::validation::is_valid_password;

pub fn run<S: DataStore>(
    db: &mut Database<S>,
    student_id: &str,
    new_password: &str,
) -> Result<CmdResult> {
    if !is_valid_password(new_password) {
        return Err(RosterError::InvalidPassword);
    }
    db.change_password(student_id, new_password)?;

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success("Password updated successfully."));
    Ok(result.flag_unsaved(db))
}
