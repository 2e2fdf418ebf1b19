use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(db: &mut Database<S>) -> Result<CmdResult> {
    let count = db.len();
    db.remove_all();
    let mut result = CmdResult::default();
    result.add_message(CmdMessage::success(format!(
        "Students data cleared ({} removed)",
        count
    )));
    Ok(result.flag_unsaved(db))
}
