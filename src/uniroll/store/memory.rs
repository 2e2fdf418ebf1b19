use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Student;

/// In-memory storage for testing.
/// Does NOT persist data. Can be switched into a failing mode to exercise
/// the unsaved-changes path.
#[derive(Debug, Default)]
pub struct InMemoryStore {
    saved: Vec<Student>,
    save_count: usize,
    fail_saves: bool,
}

impl InMemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_students(students: Vec<Student>) -> Self {
        Self {
            saved: students,
            ..Self::default()
        }
    }

    /// What the last successful save wrote.
    pub fn saved(&self) -> &[Student] {
        &self.saved
    }

    pub fn save_count(&self) -> usize {
        self.save_count
    }

    pub fn set_fail_saves(&mut self, fail: bool) {
        self.fail_saves = fail;
    }
}

impl DataStore for InMemoryStore {
    fn load(&self) -> Result<Vec<Student>> {
        Ok(self.saved.clone())
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        if self.fail_saves {
            return Err(RosterError::Io(std::io::Error::other(
                "simulated write failure",
            )));
        }
        self.saved = students.to_vec();
        self.save_count += 1;
        Ok(())
    }

    fn location(&self) -> String {
        "<memory>".to_string()
    }
}

// --- Test Fixtures ---

#[cfg(any(test, feature = "test_utils"))]
pub mod fixtures {
    use super::*;
    use crate::model::Subject;

    pub struct StoreFixture {
        students: Vec<Student>,
        next_id: u32,
    }

    impl Default for StoreFixture {
        fn default() -> Self {
            Self::new()
        }
    }

    impl StoreFixture {
        pub fn new() -> Self {
            Self {
                students: Vec::new(),
                next_id: 1,
            }
        }

        /// Adds a student whose subjects carry `marks` (subject ids 001, 002, ...).
        pub fn with_student(mut self, first: &str, last: &str, marks: &[u32]) -> Self {
            let email = format!("{}.{}@university.com", first, last).to_lowercase();
            let name = format!("{} {}", first, last);
            let mut student = Student::register(
                email,
                "Helloworld123".to_string(),
                name,
                &self.next_id.to_string(),
            )
            .unwrap();
            for (i, mark) in marks.iter().enumerate() {
                student
                    .push_subject(Subject::new(&(i + 1).to_string(), *mark).unwrap())
                    .unwrap();
            }
            self.students.push(student);
            self.next_id += 1;
            self
        }

        pub fn build(self) -> InMemoryStore {
            InMemoryStore::with_students(self.students)
        }
    }
}
