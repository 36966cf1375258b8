//! Scaffolder Core - Shared library for the React project scaffolding CLI
//!
//! Turns a set of user choices into a complete React + Vite project.
//!
//! # Architecture
//!
//! The library is organized into layers:
//!
//! - **Layer 1: Composition** - Pure functions mapping [`ProjectChoices`] to a
//!   [`ProjectFileSet`] (`templates`)
//! - **Layer 2: Materialization** - Writing the file set and running package
//!   manager commands (`materializer`, `runtime`)
//! - **Layer 3: CLI/TUI Interface** - Optional cliclack-based prompts (feature-gated)
//!
//! # Feature Flags
//!
//! - `tui` (default): Enables the cliclack-based TUI prompts module
//!
//! # Example Usage (without TUI)
//!
//! ```ignore
//! use scaffolder_core::{materializer, templates, PackageManager};
//!
//! let file_set = templates::assemble(&choices)?;
//! materializer::write_file_set(&file_set, &project_dir).await?;
//! materializer::run_commands(file_set.commands(), PackageManager::Npm, &project_dir).await?;
//! ```

pub mod config;
pub mod error;
pub mod materializer;
pub mod product;
pub mod runtime;
pub mod templates;

#[cfg(feature = "tui")]
pub mod tui;

// Re-export main types for convenience
pub use config::Settings;
pub use error::{ErrorKind, ScaffoldError};
pub use product::ProductConfig;
pub use runtime::{check_runtimes, PackageManager, RuntimeInfo};
pub use templates::{
    assemble, CssFramework, Language, OptionalPackage, PostCommand, ProjectChoices,
    ProjectFileSet,
};

#[cfg(feature = "tui")]
pub use tui::run;
