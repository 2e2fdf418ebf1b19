use crate::commands::{CmdMessage, CmdResult};
use crate::database::Database;
use crate::error::{Result, RosterError};
use crate::model::normalize_email;
use crate::store::DataStore;
use crate::validation::{is_valid_email, is_valid_password};

pub fn run<S: DataStore>(
    db: &mut Database<S>,
    email: &str,
    password: &str,
    name: &str,
) -> Result<CmdResult> {
    let email = normalize_email(email);
    if !is_valid_email(&email) {
        return Err(RosterError::InvalidEmail);
    }
    if !is_valid_password(password) {
        return Err(RosterError::InvalidPassword);
    }

    let name = name.trim();
    let id = db.add_student(&email, password, name)?;
    let student = db.find_student(&id)?.clone();

    let mut result = CmdResult::default().with_students(vec![student]);
    result.add_message(CmdMessage::success(format!(
        "Student {} registered successfully! Your Student ID is {}",
        name, id
    )));
    Ok(result.flag_unsaved(db))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::InMemoryStore;

    #[test]
    fn registers_with_normalized_email() {
        let mut db = Database::open(InMemoryStore::new());
        let result = run(&mut db, " John.Smith@University.com ", "HelloWorld1234", "John Smith")
            .unwrap();
        assert_eq!(result.students.len(), 1);
        assert_eq!(result.students[0].email, "john.smith@university.com");
        assert!(result.messages[0].content.contains("registered successfully"));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn rejects_bad_formats_before_touching_the_roster() {
        let mut db = Database::open(InMemoryStore::new());
        assert!(matches!(
            run(&mut db, "john@university.com", "HelloWorld1234", "J"),
            Err(RosterError::InvalidEmail)
        ));
        assert!(matches!(
            run(&mut db, "john.smith@university.com", "hello", "J"),
            Err(RosterError::InvalidPassword)
        ));
        assert!(db.is_empty());
        assert_eq!(db.store().save_count(), 0);
    }

    #[test]
    fn duplicate_email_is_taken() {
        let mut db = Database::open(InMemoryStore::new());
        run(&mut db, "john.smith@university.com", "HelloWorld1234", "J").unwrap();
        assert!(matches!(
            run(&mut db, "JOHN.SMITH@university.com", "HelloWorld1234", "J"),
            Err(RosterError::EmailTaken(_))
        ));
        assert_eq!(db.len(), 1);
    }

    #[test]
    fn warns_when_the_roster_was_not_saved() {
        let mut store = InMemoryStore::new();
        store.set_fail_saves(true);
        let mut db = Database::open(store);
        let result = run(&mut db, "john.smith@university.com", "HelloWorld1234", "J").unwrap();
        assert!(result
            .messages
            .iter()
            .any(|m| m.level == crate::commands::MessageLevel::Warning));
    }
}
