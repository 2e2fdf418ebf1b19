use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::{Result, RosterError};
use crate::store::DataStore;

pub fn run<S: DataStore>(db: &mut Database<S>, student_id: &str) -> Result<CmdResult> {
    if !db.remove_student(student_id) {
        return Err(RosterError::StudentNotFound(student_id.trim().to_string()));
    }
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Student {} removed.",
        student_id.trim()
    )));
    Ok(result.flag_unsaved(db))
}
