//! Lambda boilerplate generator library
//!
//! Generates a new project by mirroring a template directory and rendering
//! every file with the project name:
//!
//! ```rust,no_run
//! use lambda_boilerplate::{GenerateCommand, GeneratorOptions, TerminalPrompter};
//!
//! # fn main() -> anyhow::Result<()> {
//! let options = GeneratorOptions::from_env(None, Some("my-lambda".to_string()));
//! let project = GenerateCommand::new(options).execute(&mut TerminalPrompter::default())?;
//! println!("{}", project.display());
//! # Ok(())
//! # }
//! ```

#![forbid(unsafe_code)]
#![deny(clippy::all, clippy::pedantic, clippy::nursery)]
#![warn(clippy::cargo)]
#![allow(clippy::multiple_crate_versions)]

pub mod commands;
pub mod config;
pub mod error;
pub mod materialize;
pub mod observability;
pub mod prompt;
pub mod render;
pub mod template;
pub mod validate;

pub use commands::{GenerateCommand, Resolved};
pub use config::{GeneratorOptions, TEMPLATES_PATH_ENV};
pub use error::GenerateError;
pub use materialize::{materialize, Materializer};
pub use prompt::{Answers, Prompter, Questions, TerminalPrompter};
pub use render::{Renderer, PLACEHOLDER};
pub use template::{EntryKind, TemplateEntry, TemplateRoot};
pub use validate::{is_valid_project_name, validate_dir, validate_project_name};
