//! Package manager selection and command rendering

use crate::templates::PostCommand;
use std::fmt;
use std::str::FromStr;

/// Supported JavaScript package managers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PackageManager {
    #[default]
    Npm,
    Pnpm,
    Yarn,
    Bun,
}

impl PackageManager {
    pub const ALL: [PackageManager; 4] = [
        PackageManager::Npm,
        PackageManager::Pnpm,
        PackageManager::Yarn,
        PackageManager::Bun,
    ];

    /// Name of the binary
    pub fn binary(&self) -> &'static str {
        match self {
            PackageManager::Npm => "npm",
            PackageManager::Pnpm => "pnpm",
            PackageManager::Yarn => "yarn",
            PackageManager::Bun => "bun",
        }
    }

    /// Subcommand that installs and records new packages
    fn add_subcommand(&self) -> &'static str {
        match self {
            PackageManager::Npm => "install",
            PackageManager::Pnpm | PackageManager::Yarn | PackageManager::Bun => "add",
        }
    }

    /// Render a post-write command into the command line to execute
    pub fn render(&self, command: &PostCommand) -> ShellCommand {
        let args = match command {
            PostCommand::InstallDependencies => vec!["install".to_string()],
            PostCommand::AddPackages { packages, .. } => {
                let mut args = vec![self.add_subcommand().to_string()];
                args.extend(packages.iter().cloned());
                args
            }
            PostCommand::RunScript(script) => vec!["run".to_string(), script.clone()],
        };

        ShellCommand {
            program: self.binary().to_string(),
            args,
        }
    }

    /// Command line for running a `package.json` script, as shown to users
    pub fn run_script_line(&self, script: &str) -> String {
        self.render(&PostCommand::RunScript(script.to_string()))
            .to_string()
    }
}

impl fmt::Display for PackageManager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.binary())
    }
}

impl FromStr for PackageManager {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        PackageManager::ALL
            .into_iter()
            .find(|pm| pm.binary().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                let names: Vec<&str> = PackageManager::ALL.iter().map(|pm| pm.binary()).collect();
                format!(
                    "Unknown package manager '{}'. Expected one of: {}",
                    s,
                    names.join(", ")
                )
            })
    }
}

/// A program plus arguments
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellCommand {
    pub program: String,
    pub args: Vec<String>,
}

impl ShellCommand {
    /// Process for this command
    ///
    /// Windows goes through `cmd /C` so `npm.cmd` style shims resolve.
    pub fn to_process(&self) -> tokio::process::Command {
        if cfg!(windows) {
            let line = self.to_string();
            let mut command = tokio::process::Command::new("cmd");
            command.args(["/C", line.as_str()]);
            command
        } else {
            let mut command = tokio::process::Command::new(&self.program);
            command.args(&self.args);
            command
        }
    }
}

impl fmt::Display for ShellCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::InstallGroup;

    fn add(packages: &[&str]) -> PostCommand {
        PostCommand::AddPackages {
            group: InstallGroup::Optional,
            packages: packages.iter().map(|p| p.to_string()).collect(),
        }
    }

    #[test]
    fn test_npm_commands() {
        let npm = PackageManager::Npm;
        assert_eq!(
            npm.render(&PostCommand::InstallDependencies).to_string(),
            "npm install"
        );
        assert_eq!(
            npm.render(&add(&["axios", "yup"])).to_string(),
            "npm install axios yup"
        );
        assert_eq!(npm.run_script_line("dev"), "npm run dev");
    }

    #[test]
    fn test_other_managers_use_add() {
        assert_eq!(
            PackageManager::Pnpm.render(&add(&["axios"])).to_string(),
            "pnpm add axios"
        );
        assert_eq!(
            PackageManager::Yarn.render(&add(&["axios"])).to_string(),
            "yarn add axios"
        );
        assert_eq!(
            PackageManager::Bun.render(&add(&["axios"])).to_string(),
            "bun add axios"
        );
    }

    #[test]
    fn test_parse_package_manager() {
        assert_eq!("npm".parse::<PackageManager>(), Ok(PackageManager::Npm));
        assert_eq!(" PNPM ".parse::<PackageManager>(), Ok(PackageManager::Pnpm));
        let err = "pip".parse::<PackageManager>().unwrap_err();
        assert!(err.contains("npm, pnpm, yarn, bun"));
    }

    #[cfg(unix)]
    #[test]
    fn test_arguments_are_passed_verbatim() {
        let command = ShellCommand {
            program: "printf".to_string(),
            args: vec!["%s".to_string(), "two words; echo nope".to_string()],
        };
        let process = command.to_process();
        let std_command = process.as_std();
        assert_eq!(std_command.get_program(), "printf");
        let args: Vec<_> = std_command.get_args().collect();
        assert_eq!(args, vec!["%s", "two words; echo nope"]);
    }

    #[test]
    fn test_default_is_npm() {
        assert_eq!(PackageManager::default(), PackageManager::Npm);
    }
}
