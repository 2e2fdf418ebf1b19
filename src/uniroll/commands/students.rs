use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::Result;
use crate::store::DataStore;
use crate::view::ViewMode;

pub fn run<S: DataStore>(db: &Database<S>, mode: ViewMode) -> Result<CmdResult> {
    let view = db.roster_view(mode);
    let mut result = CmdResult::default();
    if view.is_empty() {
        result.add_message(CmdMessage::info("< Nothing to Display >"));
    }
    Ok(result.with_view(view))
}
