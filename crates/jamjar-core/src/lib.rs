//! Jam Jar - opinionated scaffolding for new Rails applications
//!
//! This library turns a freshly generated Rails app into a ready-to-work-on
//! project: rspec and database_cleaner wired up, dotenv configuration with
//! generated secrets, postgres database config, and optional Ember, Devise
//! and docker setups.
//!
//! # Architecture
//!
//! The run is split into phases that only communicate through values:
//!
//! - **Answers** - the operator's choices, collected once, immutable after
//! - **Plan resolution** - a pure function from answers (plus a secret
//!   stream) to an ordered list of directives; nothing touches the disk
//! - **Application** - directives executed strictly in order; the first
//!   fatal failure aborts the run, files already written stay put
//! - **Summary** - "what next" lines derived from the same answers
//!
//! Keeping resolution pure means every branching decision is testable
//! without spawning a process or touching a file.
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based prompt module

pub mod answers;
pub mod exec;
pub mod plan;
pub mod summary;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use answers::Answers;
pub use exec::{apply_plan, check_host, ApplyError, ToolInfo};
pub use plan::{
    resolve, CommandDirective, Directive, FileDirective, FileMode, OsSecretSource, SecretSource,
};

#[cfg(feature = "tui")]
pub use tui::run;
