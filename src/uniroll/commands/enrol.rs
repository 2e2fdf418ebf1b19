use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(db: &mut Database<S>, student_id: &str) -> Result<CmdResult> {
    let enrolment = db.enrol(student_id)?;

    let mut result = CmdResult::default().with_subjects(vec![enrolment.subject.clone()]);
    for line in enrolment.to_string().lines() {
        result.add_message(CmdMessage::success(line));
    }
    Ok(result.flag_unsaved(db))
}
