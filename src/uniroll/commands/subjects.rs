use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::Result;
use crate::store::DataStore;

/// Lists a student's subjects. An unknown student simply has none.
pub fn run<S: DataStore>(db: &Database<S>, student_id: &str) -> Result<CmdResult> {
    let subjects = db.list_subjects(student_id).to_vec();

    let mut result = CmdResult::default();
    result.add_message(CmdMessage::info(format!(
        "Showing {} subjects",
        subjects.len()
    )));
    Ok(result.with_subjects(subjects))
}
