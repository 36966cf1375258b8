//! Runtime detection for Node.js and the selected package manager

use super::package_manager::PackageManager;
use anyhow::Result;
use semver::Version;
use std::process::Command;

/// Oldest Node.js release the generated Vite project supports
pub const MIN_NODE_VERSION: &str = "18.0.0";

/// Runtime detection result
#[derive(Debug, Clone)]
pub struct RuntimeInfo {
    pub name: &'static str,
    pub version: Option<String>,
    pub available: bool,
}

fn probe(name: &'static str, binary: &str) -> RuntimeInfo {
    let line = format!("{} --version", binary);
    let output = if cfg!(windows) {
        Command::new("cmd").args(["/C", line.as_str()]).output()
    } else {
        Command::new("sh").args(["-c", line.as_str()]).output()
    };

    match output {
        Ok(out) if out.status.success() => {
            let version = String::from_utf8_lossy(&out.stdout).trim().to_string();
            RuntimeInfo {
                name,
                version: Some(version),
                available: true,
            }
        }
        _ => RuntimeInfo {
            name,
            version: None,
            available: false,
        },
    }
}

/// Check if Node.js is available
pub fn check_node() -> RuntimeInfo {
    probe("Node.js", "node")
}

/// Check if the package manager binary is available
pub fn check_package_manager(package_manager: PackageManager) -> RuntimeInfo {
    probe(package_manager.binary(), package_manager.binary())
}

/// Parse version output such as `v20.11.1`
pub fn parse_version(version_str: &str) -> Result<Version> {
    let trimmed = version_str.trim();
    let cleaned = trimmed.strip_prefix('v').unwrap_or(trimmed);
    Version::parse(cleaned).map_err(|e| anyhow::anyhow!("Invalid version '{}': {}", version_str, e))
}

/// Returns a warning message if the detected Node.js is older than supported
pub fn node_version_warning(node_version: &str) -> Option<String> {
    let detected = parse_version(node_version).ok()?;
    let minimum = Version::parse(MIN_NODE_VERSION).ok()?;

    if detected < minimum {
        Some(format!(
            "Node.js {} detected; Vite needs {} or newer",
            detected, MIN_NODE_VERSION
        ))
    } else {
        None
    }
}

/// Check that Node.js and the package manager are installed
pub fn check_runtimes(package_manager: PackageManager) -> Result<Vec<RuntimeInfo>> {
    let mut results = Vec::new();
    let mut missing = Vec::new();

    let node = check_node();
    if node.available {
        results.push(node);
    } else {
        missing.push("Node.js (install from https://nodejs.org)".to_string());
    }

    let pm = check_package_manager(package_manager);
    if pm.available {
        results.push(pm);
    } else {
        missing.push(format!("{} (not found in PATH)", package_manager.binary()));
    }

    if !missing.is_empty() {
        anyhow::bail!(
            "Missing required runtimes:\n{}",
            missing
                .iter()
                .map(|m| format!("  - {}", m))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    Ok(results)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_node_version() {
        let version = parse_version("v20.11.1\n").unwrap();
        assert_eq!(version, Version::new(20, 11, 1));
        assert!(parse_version("not-a-version").is_err());
    }

    #[test]
    fn test_old_node_warns() {
        let warning = node_version_warning("v16.20.2");
        assert!(warning.is_some());
        assert!(warning.unwrap().contains(MIN_NODE_VERSION));
    }

    #[test]
    fn test_supported_node_is_silent() {
        assert!(node_version_warning("v18.0.0").is_none());
        assert!(node_version_warning("v22.3.0").is_none());
    }

    #[test]
    fn test_unparseable_version_is_silent() {
        assert!(node_version_warning("unknown").is_none());
    }
}
