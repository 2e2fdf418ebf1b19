use thiserror::Error;

#[derive(Error, Debug)]
pub enum RosterError {
    #[error("Student ID not found: {0}")]
    StudentNotFound(String),

    #[error("Subject {0} does not exist")]
    SubjectNotFound(String),

    #[error("This email is already registered: {0}")]
    EmailTaken(String),

    #[error("Students are allowed to enrol in {0} subjects only")]
    LimitReached(usize),

    #[error("Invalid identifier: {0}")]
    InvalidId(String),

    #[error("Invalid email format. Must be firstname.lastname@university.com")]
    InvalidEmail,

    #[error("Invalid password format. Must start with uppercase, have at least 6 letters, end with at least 3 digits")]
    InvalidPassword,

    #[error("Incorrect password")]
    BadCredentials,

    #[error("No free {width}-digit identifier left (max {max})")]
    IdSpaceExhausted { width: usize, max: u32 },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("Config error: {0}")]
    Config(String),
}

pub type Result<T> = std::result::Result<T, RosterError>;
