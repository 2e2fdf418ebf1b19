//! # Roster Store
//!
//! [`Database`] owns every [`Student`] in memory and mirrors the whole roster to a
//! [`DataStore`] after each mutation. There is one `Database` per process; callers
//! receive it by handle (usually through [`RosterApi`](crate::api::RosterApi)).
//!
//! ## Mutation protocol
//!
//! Every mutating operation follows the same shape: validate against the
//! in-memory roster, mutate, then persist the complete roster. There is no
//! batching or deferred write.
//!
//! ## Persistence failures
//!
//! A failed save never undoes the in-memory change. The failure is logged and
//! [`Database::has_unsaved_changes`] stays `true` until a later save succeeds,
//! so the caller can tell the user their change is not yet durable.
//!
//! ## Format validation
//!
//! `add_student` and `change_password` trust their inputs. Email and password
//! shape checks belong to the caller (see [`commands`](crate::commands)).

use crate::error::{Result, RosterError};
use crate::model::{
    normalize_email, Student, Subject, MAX_SUBJECTS, STUDENT_ID_MAX, STUDENT_ID_WIDTH,
    SUBJECT_ID_MAX, SUBJECT_ID_WIDTH,
};
use crate::store::DataStore;
use crate::validation::{canonical_id, generate_unique_id};
use crate::view::{RosterView, ViewMode};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::collections::HashSet;
use std::fmt;

pub const MIN_MARK: u32 = 25;
pub const MAX_MARK: u32 = 100;

/// Result of a successful enrolment.
#[derive(Debug, Clone, PartialEq)]
pub struct Enrolment {
    pub subject: Subject,
    pub enrolled: usize,
}

impl fmt::Display for Enrolment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Enrolling in Subject-{}\nYou are now enrolled in {} out of {} subjects",
            self.subject.id(),
            self.enrolled,
            MAX_SUBJECTS
        )
    }
}

/// Result of dropping one subject.
#[derive(Debug, Clone, PartialEq)]
pub struct Withdrawal {
    pub subject: Subject,
    pub enrolled: usize,
}

impl fmt::Display for Withdrawal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Dropping Subject {}\nYou are now enrolled in {} out of {} subjects",
            self.subject.id(),
            self.enrolled,
            MAX_SUBJECTS
        )
    }
}

pub struct Database<S: DataStore> {
    store: S,
    students: Vec<Student>,
    rng: StdRng,
    unsaved: bool,
}

impl<S: DataStore> Database<S> {
    /// Builds the store and loads the roster right away.
    pub fn open(store: S) -> Self {
        Self::with_rng(store, StdRng::from_entropy())
    }

    pub fn with_rng(store: S, rng: StdRng) -> Self {
        let mut db = Self {
            store,
            students: Vec::new(),
            rng,
            unsaved: false,
        };
        db.load();
        db
    }

    /// Replaces the in-memory roster with the stored one.
    ///
    /// Never fails: a malformed or unreadable resource is logged and treated as
    /// an empty roster.
    pub fn load(&mut self) {
        self.students = match self.store.load() {
            Ok(students) => {
                tracing::debug!(
                    count = students.len(),
                    location = %self.store.location(),
                    "roster loaded"
                );
                students
            }
            Err(e) => {
                tracing::warn!(
                    location = %self.store.location(),
                    "could not read roster, starting empty: {}",
                    e
                );
                Vec::new()
            }
        };
        self.unsaved = false;
    }

    /// Writes the complete roster to the backing store.
    pub fn save(&mut self) -> Result<()> {
        match self.store.save(&self.students) {
            Ok(()) => {
                self.unsaved = false;
                tracing::debug!(count = self.students.len(), "roster saved");
                Ok(())
            }
            Err(e) => {
                self.unsaved = true;
                tracing::error!(
                    location = %self.store.location(),
                    "failed to save roster: {}",
                    e
                );
                Err(e)
            }
        }
    }

    /// Saves after a mutation. The mutation stands either way.
    fn persist(&mut self) {
        let _ = self.save();
    }

    pub fn has_unsaved_changes(&self) -> bool {
        self.unsaved
    }

    pub fn students(&self) -> &[Student] {
        &self.students
    }

    pub fn len(&self) -> usize {
        self.students.len()
    }

    pub fn is_empty(&self) -> bool {
        self.students.is_empty()
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut S {
        &mut self.store
    }

    fn position(&self, id: &str) -> Result<usize> {
        let target = canonical_id(id, STUDENT_ID_WIDTH)?;
        self.students
            .iter()
            .position(|s| s.id() == target)
            .ok_or(RosterError::StudentNotFound(target))
    }

    pub fn find_student(&self, id: &str) -> Result<&Student> {
        let pos = self.position(id)?;
        Ok(&self.students[pos])
    }

    pub fn find_by_email(&self, email: &str) -> Option<&Student> {
        let email = normalize_email(email);
        self.students.iter().find(|s| s.normalized_email() == email)
    }

    /// `true` if no student is registered under `email` (compared lower-cased).
    pub fn email_available(&self, email: &str) -> bool {
        self.find_by_email(email).is_none()
    }

    /// Registers a student with no subjects and returns the new 6-digit id.
    pub fn add_student(&mut self, email: &str, password: &str, name: &str) -> Result<String> {
        let email = normalize_email(email);
        if !self.email_available(&email) {
            return Err(RosterError::EmailTaken(email));
        }

        let used: HashSet<String> = self.students.iter().map(|s| s.id().to_string()).collect();
        let id = generate_unique_id(&mut self.rng, STUDENT_ID_WIDTH, STUDENT_ID_MAX, &used)?;
        let student = Student::register(email, password.to_string(), name.to_string(), &id)?;

        tracing::debug!(id = %id, "student registered");
        self.students.push(student);
        self.persist();
        Ok(id)
    }

    /// Plaintext credential check. Unknown email is `StudentNotFound`,
    /// a known email with the wrong password is `BadCredentials`.
    pub fn authenticate(&self, email: &str, password: &str) -> Result<&Student> {
        let student = self
            .find_by_email(email)
            .ok_or_else(|| RosterError::StudentNotFound(normalize_email(email)))?;
        if student.password != password {
            return Err(RosterError::BadCredentials);
        }
        Ok(student)
    }

    pub fn change_password(&mut self, id: &str, new_password: &str) -> Result<()> {
        let pos = self.position(id)?;
        self.students[pos].password = new_password.to_string();
        self.persist();
        Ok(())
    }

    /// Adds one subject with a random mark in `[25, 100]`, capped at four subjects.
    pub fn enrol(&mut self, id: &str) -> Result<Enrolment> {
        let pos = self.position(id)?;
        if self.students[pos].is_full() {
            return Err(RosterError::LimitReached(MAX_SUBJECTS));
        }

        let used: HashSet<String> = self.students[pos]
            .subjects()
            .iter()
            .map(|s| s.id().to_string())
            .collect();
        let subject_id = generate_unique_id(&mut self.rng, SUBJECT_ID_WIDTH, SUBJECT_ID_MAX, &used)?;
        let mark = self.rng.gen_range(MIN_MARK..=MAX_MARK);
        let subject = Subject::new(&subject_id, mark)?;

        let student = &mut self.students[pos];
        student.push_subject(subject.clone())?;
        let enrolled = student.enrolled_count();
        tracing::debug!(student = %student.id(), subject = %subject_id, mark, "enrolled");

        self.persist();
        Ok(Enrolment { subject, enrolled })
    }

    pub fn remove_subject(&mut self, id: &str, subject_id: &str) -> Result<Withdrawal> {
        let pos = self.position(id)?;
        let target = canonical_id(subject_id, SUBJECT_ID_WIDTH)?;

        let student = &mut self.students[pos];
        let subject = student
            .remove_subject(&target)
            .ok_or(RosterError::SubjectNotFound(target))?;
        let enrolled = student.enrolled_count();
        tracing::debug!(student = %student.id(), subject = %subject.id(), "subject dropped");

        self.persist();
        Ok(Withdrawal { subject, enrolled })
    }

    /// Subjects in enrolment order; empty when the student does not exist.
    pub fn list_subjects(&self, id: &str) -> &[Subject] {
        self.find_student(id).map(Student::subjects).unwrap_or(&[])
    }

    /// Returns whether a student was removed.
    pub fn remove_student(&mut self, id: &str) -> bool {
        let Ok(pos) = self.position(id) else {
            return false;
        };
        let removed = self.students.remove(pos);
        tracing::debug!(id = %removed.id(), "student removed");
        self.persist();
        true
    }

    pub fn remove_all(&mut self) {
        tracing::debug!(count = self.students.len(), "clearing roster");
        self.students.clear();
        self.persist();
    }

    pub fn roster_view(&self, mode: ViewMode) -> RosterView {
        RosterView::build(&self.students, mode)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::StoreFixture;
    use crate::store::memory::InMemoryStore;

    fn db() -> Database<InMemoryStore> {
        Database::with_rng(InMemoryStore::new(), StdRng::seed_from_u64(42))
    }

    fn db_with(store: InMemoryStore) -> Database<InMemoryStore> {
        Database::with_rng(store, StdRng::seed_from_u64(42))
    }

    fn assert_derived_consistent(student: &Student) {
        let marks: Vec<u32> = student.subjects().iter().map(|s| s.mark()).collect();
        let expected = if marks.is_empty() {
            0.0
        } else {
            let mean = marks.iter().sum::<u32>() as f64 / marks.len() as f64;
            (mean * 100.0).round() / 100.0
        };
        assert_eq!(student.overall(), expected);
        assert_eq!(student.status(), expected >= 50.0);
    }

    #[test]
    fn add_student_assigns_six_digit_id_and_persists() {
        let mut db = db();
        let id = db.add_student("a.b@university.com", "Abcdef123", "A B").unwrap();
        assert_eq!(id.len(), 6);
        assert!(id.chars().all(|c| c.is_ascii_digit()));
        assert_eq!(db.len(), 1);

        let student = db.find_student(&id).unwrap();
        assert!(student.subjects().is_empty());
        assert_eq!(student.overall(), 0.0);
        assert!(!student.status());

        assert_eq!(db.store().save_count(), 1);
        assert_eq!(db.store().saved().len(), 1);
    }

    #[test]
    fn add_student_rejects_taken_email_case_insensitively() {
        let mut db = db();
        db.add_student("a.b@university.com", "Abcdef123", "A B").unwrap();
        let err = db
            .add_student("A.B@University.com", "Abcdef456", "Other")
            .unwrap_err();
        assert!(matches!(err, RosterError::EmailTaken(_)));
        assert_eq!(db.len(), 1);
        assert_eq!(db.store().save_count(), 1);
    }

    #[test]
    fn email_available_checks_lowercased_emails() {
        let db = db_with(StoreFixture::new().with_student("Amy", "Lee", &[]).build());
        assert!(!db.email_available("amy.lee@university.com"));
        assert!(db.email_available("amy.leigh@university.com"));
    }

    #[test]
    fn find_student_canonicalizes_the_id() {
        let db = db_with(StoreFixture::new().with_student("Amy", "Lee", &[]).build());
        assert_eq!(db.find_student("1").unwrap().id(), "000001");
        assert_eq!(db.find_student("000001").unwrap().name, "Amy Lee");
        assert!(matches!(
            db.find_student("2"),
            Err(RosterError::StudentNotFound(_))
        ));
        assert!(matches!(
            db.find_student("abc"),
            Err(RosterError::InvalidId(_))
        ));
    }

    #[test]
    fn enrol_caps_at_four_subjects() {
        let mut db = db();
        let id = db.add_student("a.b@university.com", "Abcdef123", "A B").unwrap();

        let mut last = None;
        for _ in 0..4 {
            last = Some(db.enrol(&id).unwrap());
            assert_derived_consistent(db.find_student(&id).unwrap());
        }
        let last = last.unwrap();
        assert_eq!(last.enrolled, 4);
        assert!(last
            .to_string()
            .ends_with("You are now enrolled in 4 out of 4 subjects"));

        let saves = db.store().save_count();
        let before = db.find_student(&id).unwrap().clone();
        assert!(matches!(db.enrol(&id), Err(RosterError::LimitReached(4))));
        assert_eq!(db.find_student(&id).unwrap(), &before);
        assert_eq!(db.store().save_count(), saves);
    }

    #[test]
    fn enrolled_subjects_have_unique_ids_and_marks_in_range() {
        let mut db = db();
        let id = db.add_student("a.b@university.com", "Abcdef123", "A B").unwrap();
        for _ in 0..4 {
            db.enrol(&id).unwrap();
        }
        let subjects = db.list_subjects(&id);
        let ids: HashSet<_> = subjects.iter().map(|s| s.id()).collect();
        assert_eq!(ids.len(), 4);
        for subject in subjects {
            assert_eq!(subject.id().len(), 3);
            assert!((MIN_MARK..=MAX_MARK).contains(&subject.mark()));
        }
    }

    #[test]
    fn enrol_unknown_student_is_not_found() {
        let mut db = db();
        assert!(matches!(
            db.enrol("123"),
            Err(RosterError::StudentNotFound(_))
        ));
    }

    #[test]
    fn remove_subject_recomputes_and_persists() {
        let mut db = db_with(
            StoreFixture::new()
                .with_student("Amy", "Lee", &[40, 90, 71])
                .build(),
        );
        let saves = db.store().save_count();

        let dropped = db.remove_subject("1", "2").unwrap();
        assert_eq!(dropped.subject.id(), "002");
        assert_eq!(dropped.enrolled, 2);
        assert!(dropped
            .to_string()
            .ends_with("You are now enrolled in 2 out of 4 subjects"));

        let student = db.find_student("1").unwrap();
        assert_eq!(student.overall(), 55.5);
        assert!(student.status());
        assert_derived_consistent(student);
        assert_eq!(db.store().save_count(), saves + 1);
    }

    #[test]
    fn remove_missing_subject_changes_nothing() {
        let mut db = db_with(StoreFixture::new().with_student("Amy", "Lee", &[40]).build());
        let err = db.remove_subject("1", "9").unwrap_err();
        assert!(matches!(err, RosterError::SubjectNotFound(ref s) if s == "009"));
        assert_eq!(db.list_subjects("1").len(), 1);
        assert_eq!(db.store().save_count(), 0);
    }

    #[test]
    fn list_subjects_of_unknown_student_is_empty() {
        let db = db();
        assert!(db.list_subjects("5").is_empty());
        assert!(db.list_subjects("not-an-id").is_empty());
    }

    #[test]
    fn change_password_overwrites_and_persists() {
        let mut db = db_with(StoreFixture::new().with_student("Amy", "Lee", &[]).build());
        db.change_password("1", "Newpassword999").unwrap();
        assert_eq!(db.find_student("1").unwrap().password, "Newpassword999");
        assert_eq!(db.store().saved()[0].password, "Newpassword999");
        assert!(matches!(
            db.change_password("2", "Newpassword999"),
            Err(RosterError::StudentNotFound(_))
        ));
    }

    #[test]
    fn remove_student_reports_whether_anything_was_removed() {
        let mut db = db_with(
            StoreFixture::new()
                .with_student("Amy", "Lee", &[])
                .with_student("Bob", "Ray", &[])
                .build(),
        );
        assert!(!db.remove_student("77"));
        assert!(!db.remove_student("xyz"));
        assert_eq!(db.len(), 2);

        assert!(db.remove_student("000001"));
        assert_eq!(db.len(), 1);
        assert!(matches!(
            db.find_student("1"),
            Err(RosterError::StudentNotFound(_))
        ));
        assert_eq!(db.store().saved().len(), 1);
    }

    #[test]
    fn remove_all_clears_and_persists() {
        let mut db = db_with(
            StoreFixture::new()
                .with_student("Amy", "Lee", &[70])
                .with_student("Bob", "Ray", &[])
                .build(),
        );
        db.remove_all();
        assert!(db.is_empty());
        assert!(db.store().saved().is_empty());
        assert_eq!(db.store().save_count(), 1);
    }

    #[test]
    fn authenticate_checks_email_then_password() {
        let db = db_with(StoreFixture::new().with_student("Amy", "Lee", &[]).build());
        assert_eq!(
            db.authenticate(" Amy.Lee@university.com", "Helloworld123")
                .unwrap()
                .id(),
            "000001"
        );
        assert!(matches!(
            db.authenticate("amy.lee@university.com", "Helloworld124"),
            Err(RosterError::BadCredentials)
        ));
        assert!(matches!(
            db.authenticate("nobody.here@university.com", "Helloworld123"),
            Err(RosterError::StudentNotFound(_))
        ));
    }

    #[test]
    fn failed_save_keeps_the_mutation_and_flags_it() {
        let mut db = db();
        db.store_mut().set_fail_saves(true);

        let id = db.add_student("a.b@university.com", "Abcdef123", "A B").unwrap();
        assert_eq!(db.len(), 1);
        assert!(db.has_unsaved_changes());
        assert!(db.store().saved().is_empty());

        db.store_mut().set_fail_saves(false);
        db.enrol(&id).unwrap();
        assert!(!db.has_unsaved_changes());
        assert_eq!(db.store().saved().len(), 1);
        assert_eq!(db.store().saved()[0].subjects().len(), 1);
    }

    #[test]
    fn reload_picks_up_the_stored_roster() {
        let mut db = db_with(StoreFixture::new().with_student("Amy", "Lee", &[]).build());
        db.store_mut().set_fail_saves(true);
        db.remove_all();
        assert!(db.is_empty());

        db.load();
        assert_eq!(db.len(), 1);
        assert!(!db.has_unsaved_changes());
    }

    #[test]
    fn roster_view_has_no_persistence_side_effect() {
        let db = db_with(StoreFixture::new().with_student("Amy", "Lee", &[70]).build());
        for mode in [ViewMode::Plain, ViewMode::ByGrade, ViewMode::PassFail] {
            assert!(!db.roster_view(mode).is_empty());
        }
        assert_eq!(db.store().save_count(), 0);
    }

    #[test]
    fn register_then_fill_up_scenario() {
        let mut db = db();
        assert!(db.is_empty());
        let id = db.add_student("a.b@university.com", "Abcdef123", "A B").unwrap();
        assert_eq!(id.len(), 6);
        assert_eq!(db.len(), 1);

        let mut message = String::new();
        for _ in 0..4 {
            message = db.enrol(&id).unwrap().to_string();
        }
        assert!(message.contains("4 out of 4"));
        assert_eq!(db.find_student(&id).unwrap().subjects().len(), 4);
        assert!(matches!(db.enrol(&id), Err(RosterError::LimitReached(_))));
    }
}
