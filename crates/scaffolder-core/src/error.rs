//! Error types shared by the composer and the materializer

use std::path::PathBuf;
use thiserror::Error;

/// Broad classification used when reporting a failure to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Conflict,
    ExternalCommand,
    Io,
}

impl ErrorKind {
    /// Follow-up advice printed after the error message
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            ErrorKind::Validation => None,
            ErrorKind::Conflict => {
                Some("Pick another project name or remove the existing path, then run again.")
            }
            ErrorKind::ExternalCommand => Some(
                "The project files were written. Fix the problem above, then re-run the command inside the project.",
            ),
            ErrorKind::Io => None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ScaffoldError {
    #[error("Invalid project name '{name}': use only letters, digits, '-' and '_'")]
    InvalidProjectName { name: String },

    /// Two composition rules produced different content for the same path
    #[error("Conflicting content generated for {path}")]
    PathConflict { path: String },

    #[error("Directory {} already exists and is not empty", .0.display())]
    DirectoryNotEmpty(PathBuf),

    #[error("{} already exists and is not a directory", .0.display())]
    TargetNotDirectory(PathBuf),

    #[error("`{command}` failed with exit code {}", .code.map_or_else(|| "unknown".to_string(), |c| c.to_string()))]
    ExternalCommand { command: String, code: Option<i32> },

    #[error("{context}: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to render JSON document: {0}")]
    Serialize(#[from] serde_json::Error),
}

impl ScaffoldError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ScaffoldError::InvalidProjectName { .. } => ErrorKind::Validation,
            ScaffoldError::PathConflict { .. }
            | ScaffoldError::DirectoryNotEmpty(_)
            | ScaffoldError::TargetNotDirectory(_) => ErrorKind::Conflict,
            ScaffoldError::ExternalCommand { .. } => ErrorKind::ExternalCommand,
            ScaffoldError::Io { .. } | ScaffoldError::Serialize(_) => ErrorKind::Io,
        }
    }

    pub(crate) fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        ScaffoldError::Io {
            context: context.into(),
            source,
        }
    }
}

pub type Result<T> = std::result::Result<T, ScaffoldError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kinds() {
        let err = ScaffoldError::InvalidProjectName {
            name: "my project!".to_string(),
        };
        assert_eq!(err.kind(), ErrorKind::Validation);
        assert!(err.to_string().contains("my project!"));

        let err = ScaffoldError::DirectoryNotEmpty(PathBuf::from("/tmp/demo"));
        assert_eq!(err.kind(), ErrorKind::Conflict);

        let err = ScaffoldError::TargetNotDirectory(PathBuf::from("/tmp/demo"));
        assert_eq!(err.kind(), ErrorKind::Conflict);
        assert_eq!(err.to_string(), "/tmp/demo already exists and is not a directory");
    }

    #[test]
    fn test_hints() {
        assert!(ErrorKind::Conflict.hint().is_some());
        assert!(ErrorKind::ExternalCommand
            .hint()
            .is_some_and(|h| h.contains("re-run")));
        assert_eq!(ErrorKind::Validation.hint(), None);
        assert_eq!(ErrorKind::Io.hint(), None);
    }

    #[test]
    fn test_external_command_message() {
        let err = ScaffoldError::ExternalCommand {
            command: "npm install".to_string(),
            code: Some(1),
        };
        assert_eq!(err.to_string(), "`npm install` failed with exit code 1");

        let err = ScaffoldError::ExternalCommand {
            command: "npm run dev".to_string(),
            code: None,
        };
        assert!(err.to_string().ends_with("unknown"));
    }
}
