//! The composed output: files, directories and post-write commands

use crate::error::{Result, ScaffoldError};
use std::collections::BTreeMap;

/// Content of a single generated file
#[derive(Debug, Clone, PartialEq)]
pub enum FileContent {
    Text(String),
    /// Structured document, pretty-printed when written
    Json(serde_json::Value),
}

impl FileContent {
    pub fn render(&self) -> Result<String> {
        match self {
            FileContent::Text(text) => Ok(text.clone()),
            FileContent::Json(value) => {
                let mut rendered = serde_json::to_string_pretty(value)?;
                rendered.push('\n');
                Ok(rendered)
            }
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            FileContent::Text(text) => Some(text),
            FileContent::Json(_) => None,
        }
    }

    pub fn as_json(&self) -> Option<&serde_json::Value> {
        match self {
            FileContent::Json(value) => Some(value),
            FileContent::Text(_) => None,
        }
    }
}

impl From<String> for FileContent {
    fn from(text: String) -> Self {
        FileContent::Text(text)
    }
}

/// Why a batch of packages gets installed
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallGroup {
    Styling,
    Routing,
    Optional,
    Pwa,
}

/// A command to run inside the project once files are written
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PostCommand {
    /// Install everything `package.json` declares
    InstallDependencies,
    /// Install and record additional packages in one batch
    AddPackages {
        group: InstallGroup,
        packages: Vec<String>,
    },
    /// Run a `package.json` script (e.g. the dev server)
    RunScript(String),
}

impl PostCommand {
    pub fn is_install(&self) -> bool {
        !matches!(self, PostCommand::RunScript(_))
    }
}

/// Path-keyed output of composition
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectFileSet {
    files: BTreeMap<String, FileContent>,
    directories: Vec<String>,
    commands: Vec<PostCommand>,
}

impl ProjectFileSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a file; re-adding identical content is a no-op, differing content is a conflict
    pub fn insert_file(&mut self, path: impl Into<String>, content: FileContent) -> Result<()> {
        let path = path.into();
        match self.files.get(&path) {
            Some(existing) if *existing == content => Ok(()),
            Some(_) => Err(ScaffoldError::PathConflict { path }),
            None => {
                self.files.insert(path, content);
                Ok(())
            }
        }
    }

    pub fn add_directory(&mut self, path: impl Into<String>) {
        let path = path.into();
        if !self.directories.contains(&path) {
            self.directories.push(path);
        }
    }

    pub fn push_command(&mut self, command: PostCommand) {
        self.commands.push(command);
    }

    /// Queue a package batch; empty batches are dropped
    pub fn add_packages(&mut self, group: InstallGroup, packages: Vec<String>) {
        if !packages.is_empty() {
            self.commands
                .push(PostCommand::AddPackages { group, packages });
        }
    }

    pub fn files(&self) -> &BTreeMap<String, FileContent> {
        &self.files
    }

    pub fn get(&self, path: &str) -> Option<&FileContent> {
        self.files.get(path)
    }

    pub fn contains(&self, path: &str) -> bool {
        self.files.contains_key(path)
    }

    /// Text of a file, if it exists and is plain text
    pub fn text(&self, path: &str) -> Option<&str> {
        self.files.get(path).and_then(FileContent::as_text)
    }

    pub fn paths(&self) -> impl Iterator<Item = &str> {
        self.files.keys().map(String::as_str)
    }

    pub fn directories(&self) -> &[String] {
        &self.directories
    }

    pub fn commands(&self) -> &[PostCommand] {
        &self.commands
    }

    /// Packages queued for a given group, in install order
    pub fn packages_for(&self, group: InstallGroup) -> Vec<&str> {
        self.commands
            .iter()
            .filter_map(|command| match command {
                PostCommand::AddPackages { group: g, packages } if *g == group => Some(packages),
                _ => None,
            })
            .flatten()
            .map(String::as_str)
            .collect()
    }
}
