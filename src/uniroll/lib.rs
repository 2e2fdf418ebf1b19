//! # Uniroll Architecture
//!
//! Uniroll keeps a small university's enrolment records: students register and
//! log in, enrol in up to four subjects that each receive a random mark and letter
//! grade, and administrators list, group, partition and remove students.
//!
//! It is a **library that happens to have a CLI**. The same core could sit behind
//! a text menu, a windowed form or anything else.
//!
//! ## Layers
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────┐
//! │  CLI Layer (cli/, wired by main.rs)                         │
//! │  - Parses arguments, prints results, sets exit codes        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  API Layer (api.rs)                                         │
//! │  - Thin facade, one method per user action                  │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Command Layer (commands/*.rs)                              │
//! │  - Input format checks, user-facing messages                │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Roster (database.rs, model.rs, view.rs, validation.rs)     │
//! │  - In-memory roster, invariants, mutate-then-persist        │
//! └─────────────────────────────────────────────────────────────┘
//!                              │
//!                              ▼
//! ┌─────────────────────────────────────────────────────────────┐
//! │  Storage Layer (store/)                                     │
//! │  - DataStore trait: FileStore (students.data), InMemoryStore│
//! └─────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Persistence
//!
//! The whole roster lives in memory and is loaded once at startup. After every
//! successful mutation the complete roster is rewritten to a single JSON file
//! (`students.data` by default). There is no append log and no partial write.
//!
//! ## No I/O Assumptions in Core
//!
//! From `api.rs` inward, code never writes to stdout/stderr and never exits the
//! process. Diagnostics go through `tracing`; outcomes go back as `Result<CmdResult>`.
//!
//! ## Module Overview
//!
//! - [`api`]: The API facade
//! - [`commands`]: One module per user action
//! - [`database`]: The roster store and its mutation protocol
//! - [`model`]: `Student`, `Subject`, `Grade`
//! - [`view`]: Admin listings (plain, by grade, pass/fail)
//! - [`validation`]: Grade bands, email/password shapes, id generation
//! - [`store`]: Storage abstraction and implementations
//! - [`config`]: `config.json` handling
//! - [`init`]: Data directory resolution and context setup
//! - [`error`]: Error types

pub mod api;
pub mod commands;
pub mod config;
pub mod database;
pub mod error;
pub mod init;
pub mod model;
pub mod store;
pub mod validation;
pub mod view;
