//! Core record types: [`Subject`], [`Student`] and the letter [`Grade`].
//!
//! The serialized shape is the one used by existing `students.data` files:
//!
//! ```json
//! {
//!     "email": "john.smith@university.com",
//!     "password": "HelloWorld123",
//!     "name": "John Smith",
//!     "subjects": [{ "id": "042", "mark": 77, "grade": "D" }],
//!     "id": "000123",
//!     "overall": 77.0,
//!     "status": true
//! }
//! ```

use crate::error::{Result, RosterError};
use crate::validation::{canonical_id, classify_grade};
use serde::{Deserialize, Serialize};
use std::fmt;

pub const STUDENT_ID_WIDTH: usize = 6;
pub const STUDENT_ID_MAX: u32 = 999_999;
pub const SUBJECT_ID_WIDTH: usize = 3;
pub const SUBJECT_ID_MAX: u32 = 999;
pub const MAX_SUBJECTS: usize = 4;
pub const PASS_MARK: f64 = 50.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Grade {
    #[serde(rename = "HD")]
    HighDistinction,
    #[serde(rename = "D")]
    Distinction,
    #[serde(rename = "C")]
    Credit,
    #[serde(rename = "P")]
    Pass,
    #[serde(rename = "Z")]
    Fail,
}

impl Grade {
    pub fn as_str(&self) -> &'static str {
        match self {
            Grade::HighDistinction => "HD",
            Grade::Distinction => "D",
            Grade::Credit => "C",
            Grade::Pass => "P",
            Grade::Fail => "Z",
        }
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Identifiers in data files are usually strings but older files may carry bare numbers.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawId {
    Text(String),
    Number(u64),
}

impl RawId {
    fn canonical(self, width: usize) -> Result<String> {
        match self {
            RawId::Text(s) => canonical_id(&s, width),
            RawId::Number(n) => canonical_id(&n.to_string(), width),
        }
    }
}

#[derive(Deserialize)]
struct SubjectRecord {
    id: RawId,
    mark: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "SubjectRecord")]
pub struct Subject {
    id: String,
    mark: u32,
    grade: Grade,
}

impl Subject {
    /// Builds a subject from a raw id; the grade is always derived from `mark`.
    pub fn new(raw_id: &str, mark: u32) -> Result<Self> {
        Ok(Self {
            id: canonical_id(raw_id, SUBJECT_ID_WIDTH)?,
            mark,
            grade: classify_grade(mark as f64),
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn mark(&self) -> u32 {
        self.mark
    }

    pub fn grade(&self) -> Grade {
        self.grade
    }
}

impl TryFrom<SubjectRecord> for Subject {
    type Error = RosterError;

    fn try_from(record: SubjectRecord) -> Result<Self> {
        let id = record.id.canonical(SUBJECT_ID_WIDTH)?;
        Subject::new(&id, record.mark)
    }
}

impl fmt::Display for Subject {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[ Subject::{} -- mark = {} -- grade = {} ]",
            self.id, self.mark, self.grade
        )
    }
}

#[derive(Deserialize)]
struct StudentRecord {
    email: String,
    password: String,
    name: String,
    #[serde(default)]
    subjects: Vec<Subject>,
    id: RawId,
    #[serde(default)]
    overall: f64,
    #[serde(default)]
    status: bool,
}

/// A registered student.
///
/// `overall` and `status` are derived from `subjects`; the subject list can only
/// change through [`Student::push_subject`] and [`Student::remove_subject`], which
/// keep both in sync.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "StudentRecord")]
pub struct Student {
    pub email: String,
    pub password: String,
    pub name: String,
    subjects: Vec<Subject>,
    id: String,
    overall: f64,
    status: bool,
}

impl Student {
    /// Stores every field as given. `overall`/`status` are NOT recomputed here so
    /// that records read back from disk stay exactly as they were written.
    pub fn new(
        email: String,
        password: String,
        name: String,
        subjects: Vec<Subject>,
        raw_id: &str,
        overall: f64,
        status: bool,
    ) -> Result<Self> {
        Ok(Self {
            email,
            password,
            name,
            subjects,
            id: canonical_id(raw_id, STUDENT_ID_WIDTH)?,
            overall,
            status,
        })
    }

    /// A freshly registered student: no subjects, overall 0.0, failing.
    pub fn register(email: String, password: String, name: String, raw_id: &str) -> Result<Self> {
        Self::new(email, password, name, Vec::new(), raw_id, 0.0, false)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn subjects(&self) -> &[Subject] {
        &self.subjects
    }

    pub fn overall(&self) -> f64 {
        self.overall
    }

    /// `true` means PASS.
    pub fn status(&self) -> bool {
        self.status
    }

    pub fn overall_grade(&self) -> Grade {
        classify_grade(self.overall)
    }

    pub fn enrolled_count(&self) -> usize {
        self.subjects.len()
    }

    pub fn is_full(&self) -> bool {
        self.subjects.len() >= MAX_SUBJECTS
    }

    pub fn has_subject(&self, subject_id: &str) -> bool {
        self.subjects.iter().any(|s| s.id == subject_id)
    }

    /// Lower-cased, trimmed email used for every comparison.
    pub fn normalized_email(&self) -> String {
        normalize_email(&self.email)
    }

    pub fn push_subject(&mut self, subject: Subject) -> Result<()> {
        if self.is_full() {
            return Err(RosterError::LimitReached(MAX_SUBJECTS));
        }
        self.subjects.push(subject);
        self.recompute_derived();
        Ok(())
    }

    /// Removes the subject with the given canonical id, if enrolled.
    pub fn remove_subject(&mut self, subject_id: &str) -> Option<Subject> {
        let pos = self.subjects.iter().position(|s| s.id == subject_id)?;
        let removed = self.subjects.remove(pos);
        self.recompute_derived();
        Some(removed)
    }

    /// Recalculates the overall average (2 decimals) and pass/fail status.
    pub fn recompute_derived(&mut self) {
        if self.subjects.is_empty() {
            self.overall = 0.0;
            self.status = false;
            return;
        }
        let total: u32 = self.subjects.iter().map(|s| s.mark).sum();
        let mean = total as f64 / self.subjects.len() as f64;
        self.overall = (mean * 100.0).round() / 100.0;
        self.status = self.overall >= PASS_MARK;
    }
}

impl TryFrom<StudentRecord> for Student {
    type Error = RosterError;

    fn try_from(record: StudentRecord) -> Result<Self> {
        let id = record.id.canonical(STUDENT_ID_WIDTH)?;
        Student::new(
            record.email,
            record.password,
            record.name,
            record.subjects,
            &id,
            record.overall,
            record.status,
        )
    }
}

pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}
