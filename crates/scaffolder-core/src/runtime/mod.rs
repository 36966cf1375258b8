//! Runtime detection and package manager plumbing
//!
//! This module provides:
//! - Node.js / package manager detection before installs run
//! - Rendering of post-write commands for npm, pnpm, yarn and bun

pub mod check;
pub mod package_manager;

pub use check::{check_node, check_runtimes, node_version_warning, RuntimeInfo};
pub use package_manager::{PackageManager, ShellCommand};
