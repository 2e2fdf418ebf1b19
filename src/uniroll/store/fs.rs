use super::DataStore;
use crate::error::{Result, RosterError};
use crate::model::Student;
use serde::Serialize;
use std::fs;
use std::path::{Path, PathBuf};
use uuid::Uuid;

pub const DEFAULT_DATA_FILE: &str = "students.data";

pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new<P: AsRef<Path>>(path: P) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
        }
    }

    /// `students.data` inside `dir`.
    pub fn in_dir<P: AsRef<Path>>(dir: P) -> Self {
        Self::new(dir.as_ref().join(DEFAULT_DATA_FILE))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn parent_dir(&self) -> Option<&Path> {
        self.path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
    }

    fn ensure_dir(&self) -> Result<()> {
        if let Some(dir) = self.parent_dir() {
            if !dir.exists() {
                fs::create_dir_all(dir).map_err(RosterError::Io)?;
            }
        }
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let name = format!(".students-{}.tmp", Uuid::new_v4());
        match self.parent_dir() {
            Some(dir) => dir.join(name),
            None => PathBuf::from(name),
        }
    }
}

/// Four-space indentation, matching data files written by earlier versions.
fn to_pretty_json(students: &[Student]) -> Result<Vec<u8>> {
    let mut buf = Vec::new();
    let formatter = serde_json::ser::PrettyFormatter::with_indent(b"    ");
    let mut ser = serde_json::Serializer::with_formatter(&mut buf, formatter);
    students
        .serialize(&mut ser)
        .map_err(RosterError::Serialization)?;
    Ok(buf)
}

impl DataStore for FileStore {
    fn load(&self) -> Result<Vec<Student>> {
        if !self.path.exists() {
            return Ok(Vec::new());
        }
        let content = fs::read_to_string(&self.path).map_err(RosterError::Io)?;
        let students: Vec<Student> =
            serde_json::from_str(&content).map_err(RosterError::Serialization)?;
        Ok(students)
    }

    fn save(&mut self, students: &[Student]) -> Result<()> {
        self.ensure_dir()?;
        let content = to_pretty_json(students)?;

        let tmp_path = self.tmp_path();
        fs::write(&tmp_path, content).map_err(RosterError::Io)?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(RosterError::Io(e));
        }
        Ok(())
    }

    fn location(&self) -> String {
        self.path.display().to_string()
    }
}
