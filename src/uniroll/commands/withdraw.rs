use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::Result;
use crate::store::DataStore;

pub fn run<S: DataStore>(
    db: &mut Database<S>,
    student_id: &str,
    subject_id: &str,
) -> Result<CmdResult> {
    let withdrawal = db.remove_subject(student_id, subject_id)?;

    let mut result = CmdResult::default().with_subjects(vec![withdrawal.subject.clone()]);
    for line in withdrawal.to_string().lines() {
        result.add_message(CmdMessage::success(line));
    }
    Ok(result.flag_unsaved(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::RosterError;
    use crate::store::memory::fixtures::StoreFixture;

    #[test]
    fn drops_by_unpadded_subject_id() {
        let mut db = Database::open(StoreFixture::new().with_student("Amy", "Lee", &[70, 80]).build());
        let result = run(&mut db, "1", "1").unwrap();
        assert_eq!(result.messages[0].content, "Dropping Subject 001");
        assert_eq!(
            result.messages[1].content,
            "You are now enrolled in 1 out of 4 subjects"
        );
        assert_eq!(db.find_student("1").unwrap().overall(), 80.0);
    }

    #[test]
    fn unknown_subject_is_reported() {
        let mut db = Database::open(StoreFixture::new().with_student("Amy", "Lee", &[70]).build());
        let err = run(&mut db, "1", "500").unwrap_err();
        assert!(matches!(err, RosterError::SubjectNotFound(_)));
        assert_eq!(err.to_string(), "Subject 500 does not exist");
    }
}
