//! Product configuration trait for CLI binaries
//!
//! The binary implements this trait to give the shared session its identity,
//! environment variable names and closing instructions.

use crate::runtime::PackageManager;
use crate::templates::ProjectChoices;

/// Configuration trait for the CLI product
pub trait ProductConfig: Clone + Send + Sync + 'static {
    /// Internal product name (used for the CLI command)
    fn name(&self) -> &'static str;

    /// Human-readable display name
    fn display_name(&self) -> &'static str;

    /// One-line pitch shown under the intro banner
    fn tagline(&self) -> &'static str;

    /// CLI description shown in help text
    fn cli_description(&self) -> &'static str;

    /// Environment variable selecting the package manager
    fn package_manager_env(&self) -> &'static str;

    /// Environment variable that skips installs when truthy
    fn skip_install_env(&self) -> &'static str;

    /// Generate the "next steps" instructions after project creation
    fn next_steps(
        &self,
        choices: &ProjectChoices,
        package_manager: PackageManager,
        installed: bool,
    ) -> Vec<String> {
        let mut steps = vec![format!("cd {}", choices.project_name)];
        if !installed {
            steps.push(format!("{} install", package_manager.binary()));
        }
        steps.push(package_manager.run_script_line("dev"));
        steps
    }
}
