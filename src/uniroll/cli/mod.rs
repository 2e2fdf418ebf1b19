//! # CLI Layer
//!
//! One possible front-end for uniroll. It is the only place that:
//! - parses shell arguments (clap)
//! - installs the tracing subscriber
//! - writes to stdout/stderr and picks exit codes
//!
//! Everything it shows comes from a [`uniroll::api::CmdResult`]; no roster rules
//! live here.
//!
//! ## Structure
//!
//! - `setup.rs`: argument definitions
//! - `commands.rs`: `run()`, context setup and one `handle_*()` per subcommand
//! - `print.rs`: terminal formatting

mod commands;
mod print;
mod setup;

pub use commands::run;
