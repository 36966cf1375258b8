//! Writing a composed file set to disk and running post-write commands
//!
//! Nothing is rolled back: files already written stay on disk when a later
//! step fails.

use crate::error::{Result, ScaffoldError};
use crate::runtime::{PackageManager, ShellCommand};
use crate::templates::{PostCommand, ProjectFileSet};
use colored::Colorize;
use std::path::Path;
use std::process::Stdio;
use tokio::fs;
use tokio::io::{AsyncBufReadExt, BufReader};

/// Fail if `target_dir` exists and is not an empty directory
pub async fn ensure_target_available(target_dir: &Path) -> Result<()> {
    let metadata = match fs::metadata(target_dir).await {
        Ok(metadata) => metadata,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => return Ok(()),
        Err(e) => {
            return Err(ScaffoldError::io(
                format!("Failed to inspect {}", target_dir.display()),
                e,
            ))
        }
    };

    if !metadata.is_dir() {
        return Err(ScaffoldError::TargetNotDirectory(target_dir.to_path_buf()));
    }

    let mut entries = fs::read_dir(target_dir)
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to read {}", target_dir.display()), e))?;
    let first = entries
        .next_entry()
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to read {}", target_dir.display()), e))?;

    match first {
        Some(_) => Err(ScaffoldError::DirectoryNotEmpty(target_dir.to_path_buf())),
        None => Ok(()),
    }
}

/// Write every file and directory of the set under `target_dir`
///
/// Returns the relative paths of the files written, in write order.
pub async fn write_file_set(file_set: &ProjectFileSet, target_dir: &Path) -> Result<Vec<String>> {
    ensure_target_available(target_dir).await?;

    fs::create_dir_all(target_dir)
        .await
        .map_err(|e| ScaffoldError::io("Failed to create target directory", e))?;

    let mut written = Vec::new();

    for (relative, content) in file_set.files() {
        let target_path = target_dir.join(relative);
        if let Some(parent) = target_path.parent() {
            fs::create_dir_all(parent).await.map_err(|e| {
                ScaffoldError::io(format!("Failed to create directory: {}", parent.display()), e)
            })?;
        }

        let rendered = content.render()?;
        fs::write(&target_path, rendered).await.map_err(|e| {
            ScaffoldError::io(format!("Failed to write file: {}", target_path.display()), e)
        })?;

        written.push(relative.clone());
    }

    for relative in file_set.directories() {
        let dir = target_dir.join(relative);
        fs::create_dir_all(&dir).await.map_err(|e| {
            ScaffoldError::io(format!("Failed to create directory: {}", dir.display()), e)
        })?;
    }

    Ok(written)
}

/// Render and run post-write commands in order, stopping at the first failure
pub async fn run_commands(
    commands: &[PostCommand],
    package_manager: PackageManager,
    project_dir: &Path,
) -> Result<()> {
    for command in commands {
        let shell = package_manager.render(command);
        if command.is_install() {
            execute(&shell, project_dir).await?;
        } else {
            execute_interactive(&shell, project_dir).await?;
        }
    }
    Ok(())
}

fn exit_error(command: &ShellCommand, code: Option<i32>) -> ScaffoldError {
    ScaffoldError::ExternalCommand {
        command: command.to_string(),
        code,
    }
}

/// Run a command, streaming its output indented under a banner
pub async fn execute(command: &ShellCommand, project_dir: &Path) -> Result<()> {
    let line = command.to_string();
    println!();
    println!("{} {}", "Running:".dimmed(), line.yellow());
    println!();

    let mut child = command
        .to_process()
        .current_dir(project_dir)
        .stdin(Stdio::null())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .map_err(|e| ScaffoldError::io(format!("Failed to run `{}`", line), e))?;

    let (stdout, stderr) = match (child.stdout.take(), child.stderr.take()) {
        (Some(stdout), Some(stderr)) => (stdout, stderr),
        _ => {
            return Err(ScaffoldError::io(
                format!("Failed to capture output of `{}`", line),
                std::io::Error::other("missing stdio pipe"),
            ))
        }
    };

    let mut stdout_reader = BufReader::new(stdout).lines();
    let mut stderr_reader = BufReader::new(stderr).lines();
    let mut stdout_open = true;
    let mut stderr_open = true;

    while stdout_open || stderr_open {
        tokio::select! {
            line = stdout_reader.next_line(), if stdout_open => {
                match line {
                    Ok(Some(line)) => println!("  {}", line),
                    Ok(None) => stdout_open = false,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stdout:".red(), e);
                        stdout_open = false;
                    }
                }
            }
            line = stderr_reader.next_line(), if stderr_open => {
                match line {
                    Ok(Some(line)) => eprintln!("  {}", line.yellow()),
                    Ok(None) => stderr_open = false,
                    Err(e) => {
                        eprintln!("{} {}", "Error reading stderr:".red(), e);
                        stderr_open = false;
                    }
                }
            }
        }
    }

    let status = child
        .wait()
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to wait for `{}`", line), e))?;

    if status.success() {
        Ok(())
    } else {
        Err(exit_error(command, status.code()))
    }
}

/// Run a command attached to the terminal (long-running dev server)
pub async fn execute_interactive(command: &ShellCommand, project_dir: &Path) -> Result<()> {
    let line = command.to_string();
    println!();
    println!("{} {}", "Running:".dimmed(), line.yellow());
    println!();

    let status = command
        .to_process()
        .current_dir(project_dir)
        .stdin(Stdio::inherit())
        .stdout(Stdio::inherit())
        .stderr(Stdio::inherit())
        .status()
        .await
        .map_err(|e| ScaffoldError::io(format!("Failed to run `{}`", line), e))?;

    if status.success() {
        Ok(())
    } else {
        Err(exit_error(command, status.code()))
    }
}
