use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use uniroll::view::ViewMode;

#[derive(Parser, Debug)]
#[command(name = "uniroll", bin_name = "uniroll", version)]
#[command(about = "University enrolment record-keeper", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding the roster file and config.json
    #[arg(long, global = true, value_name = "DIR", help_heading = "Options")]
    pub data_dir: Option<PathBuf>,

    /// Use the per-user data directory instead of the current one
    #[arg(short, long, global = true, help_heading = "Options")]
    pub global: bool,

    /// Verbose output (debug logs on stderr)
    #[arg(short, long, global = true, help_heading = "Options")]
    pub verbose: bool,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum ModeArg {
    /// Roster order with emails
    List,
    /// Sorted by overall mark, tagged with the overall grade
    Grade,
    /// FAIL and PASS buckets
    Partition,
}

impl From<ModeArg> for ViewMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::List => ViewMode::Plain,
            ModeArg::Grade => ViewMode::ByGrade,
            ModeArg::Partition => ViewMode::PassFail,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Register a new student
    #[command(alias = "r")]
    Register {
        /// firstname.lastname@university.com
        #[arg(long)]
        email: String,

        /// Uppercase letter, 5+ more letters, 3+ digits (e.g. HelloWorld123)
        #[arg(long)]
        password: String,

        /// Full name
        #[arg(long)]
        name: String,
    },

    /// Check credentials and show the student's record
    #[command(alias = "l")]
    Login {
        #[arg(long)]
        email: String,

        #[arg(long)]
        password: String,
    },

    /// Enrol a student in one more subject (max 4)
    #[command(alias = "e", alias = "enroll")]
    Enrol {
        /// Student ID (e.g. 000123 or 123)
        id: String,
    },

    /// Drop one of a student's subjects
    #[command(alias = "rm-subject")]
    Drop {
        /// Student ID
        id: String,

        /// Subject ID (e.g. 042)
        subject: String,
    },

    /// Show a student's subjects
    #[command(alias = "s")]
    Subjects {
        /// Student ID
        id: String,
    },

    /// Change a student's password
    #[command(alias = "c")]
    Password {
        /// Student ID
        id: String,

        /// New password
        new_password: String,
    },

    /// List all students
    #[command(alias = "ls")]
    Students {
        #[arg(long, short, value_enum, default_value_t = ModeArg::List)]
        mode: ModeArg,
    },

    /// Remove a student from the roster
    Remove {
        /// Student ID
        id: String,
    },

    /// Remove every student
    Clear {
        /// Skip the confirmation guard
        #[arg(long, short)]
        yes: bool,
    },

    /// Tell whether an email is still free to register
    CheckEmail { email: String },

    /// Get or set configuration
    Config {
        /// Configuration key (e.g., data-file)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },
}
