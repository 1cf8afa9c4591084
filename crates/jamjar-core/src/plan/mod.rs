//! Plan resolution: mapping answers to directives
//!
//! This module provides:
//! - Directive types (file writes, external commands)
//! - The resolver turning an answer set into the full ordered plan
//! - Template content for every generated file
//! - The secret source seam used for generated credentials

pub mod directive;
pub mod resolve;
pub mod secrets;
pub mod templates;

pub use directive::{CommandDirective, Directive, FileDirective, FileMode};
pub use resolve::resolve;
pub use secrets::{OsSecretSource, SecretSource};
