//! Read-only projections of the roster for the admin listings.
//!
//! Three modes:
//! - `Plain`: roster order, name / id / email.
//! - `ByGrade`: ascending by overall, each line tagged with the grade of the overall.
//! - `PassFail`: two buckets split on status, FAIL first.

use crate::error::{Result, RosterError};
use crate::model::{Grade, Student};
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ViewMode {
    #[default]
    Plain,
    ByGrade,
    PassFail,
}

impl FromStr for ViewMode {
    type Err = RosterError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "list" | "plain" | "1" => Ok(ViewMode::Plain),
            "grade" | "group" | "by-grade" | "2" => Ok(ViewMode::ByGrade),
            "partition" | "pass-fail" | "3" => Ok(ViewMode::PassFail),
            other => Err(RosterError::Config(format!("Unknown view mode: {}", other))),
        }
    }
}

/// Marks print like `68.0` or `77.25`, never `68`.
pub fn format_mark(mark: f64) -> String {
    if mark.fract() == 0.0 {
        format!("{:.1}", mark)
    } else {
        format!("{}", mark)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct StudentLine {
    pub name: String,
    pub id: String,
    pub email: String,
}

impl fmt::Display for StudentLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} : : {} --> Email: {}", self.name, self.id, self.email)
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct GradedLine {
    pub name: String,
    pub id: String,
    pub grade: Grade,
    pub overall: f64,
}

impl GradedLine {
    fn from_student(student: &Student) -> Self {
        Self {
            name: student.name.clone(),
            id: student.id().to_string(),
            grade: student.overall_grade(),
            overall: student.overall(),
        }
    }
}

impl fmt::Display for GradedLine {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} : : {} --> GRADE: {} - MARK: {}",
            self.name,
            self.id,
            self.grade,
            format_mark(self.overall)
        )
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterView {
    Plain(Vec<StudentLine>),
    ByGrade(Vec<GradedLine>),
    PassFail {
        fail: Vec<GradedLine>,
        pass: Vec<GradedLine>,
    },
}

impl RosterView {
    pub fn build(students: &[Student], mode: ViewMode) -> Self {
        match mode {
            ViewMode::Plain => RosterView::Plain(
                students
                    .iter()
                    .map(|s| StudentLine {
                        name: s.name.clone(),
                        id: s.id().to_string(),
                        email: s.email.clone(),
                    })
                    .collect(),
            ),
            ViewMode::ByGrade => {
                let mut sorted: Vec<&Student> = students.iter().collect();
                sorted.sort_by(|a, b| a.overall().total_cmp(&b.overall()));
                RosterView::ByGrade(sorted.into_iter().map(GradedLine::from_student).collect())
            }
            ViewMode::PassFail => {
                let (pass, fail): (Vec<&Student>, Vec<&Student>) =
                    students.iter().partition(|s| s.status());
                RosterView::PassFail {
                    fail: fail.into_iter().map(GradedLine::from_student).collect(),
                    pass: pass.into_iter().map(GradedLine::from_student).collect(),
                }
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        match self {
            RosterView::Plain(lines) => lines.is_empty(),
            RosterView::ByGrade(lines) => lines.is_empty(),
            RosterView::PassFail { fail, pass } => fail.is_empty() && pass.is_empty(),
        }
    }

    /// Text lines in display order.
    pub fn lines(&self) -> Vec<String> {
        match self {
            RosterView::Plain(lines) => lines.iter().map(ToString::to_string).collect(),
            RosterView::ByGrade(lines) => lines
                .iter()
                .map(|l| format!("{} --> [{}]", l.grade, l))
                .collect(),
            RosterView::PassFail { fail, pass } => vec![
                format!("FAIL --> {}", bracket_list(fail)),
                format!("PASS --> {}", bracket_list(pass)),
            ],
        }
    }
}

/// Renders lines as `['a', 'b']`.
pub fn bracket_list(lines: &[GradedLine]) -> String {
    let joined = lines
        .iter()
        .map(|l| format!("'{}'", l))
        .collect::<Vec<_>>()
        .join(", ");
    format!("[{}]", joined)
}
