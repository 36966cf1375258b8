//! Project template composition
//!
//! This module maps a [`ProjectChoices`] record to a [`ProjectFileSet`]:
//! - Choice types and extension lookup (`choices`)
//! - `package.json` / `tsconfig.json` documents (`manifest`)
//! - Vite config as an ordered plugin list (`build_config`)
//! - Entry point, stylesheet and HTML shell (`base`)
//! - App shell and routed pages over a shared visual variant (`routing`, `variant`)
//! - Optional package integrations and folder layout (`integrations`)
//!
//! Every function here is pure; writing the result is the materializer's job.

pub mod base;
pub mod build_config;
pub mod choices;
pub mod file_set;
pub mod integrations;
pub mod manifest;
pub mod routing;
pub mod variant;

use crate::error::Result;

pub use build_config::{compose_build_config, BuildConfig, PluginEntry, PluginKind};
pub use choices::{
    resolve_extensions, validate_project_name, CssFramework, Extensions, Language,
    OptionalPackage, ProjectChoices,
};
pub use file_set::{FileContent, InstallGroup, PostCommand, ProjectFileSet};
pub use integrations::{compose_folder_structure, compose_optional_integrations};
pub use manifest::compose_manifest;
pub use routing::compose_routing;

/// Packages installed for a styling choice
fn styling_packages(css_framework: CssFramework) -> Vec<String> {
    let packages: &[&str] = match css_framework {
        CssFramework::TailwindCss => &["tailwindcss", "@tailwindcss/vite"],
        CssFramework::ReactBootstrap => &["react-bootstrap", "bootstrap"],
        CssFramework::BootstrapCdn | CssFramework::None => &[],
    };
    packages.iter().map(|p| p.to_string()).collect()
}

/// Compose the complete file set for the given choices
///
/// Fails with `InvalidProjectName` before producing anything when the name is
/// invalid, and with `PathConflict` if two composers claim the same path with
/// different content.
pub fn assemble(choices: &ProjectChoices) -> Result<ProjectFileSet> {
    choices.validate()?;

    let mut set = ProjectFileSet::new();

    set.insert_file(
        "package.json",
        FileContent::Json(manifest::compose_manifest(choices)?),
    )?;
    if let Some(tsconfig) = manifest::compose_tsconfig(choices)? {
        set.insert_file("tsconfig.json", FileContent::Json(tsconfig))?;
    }

    set.insert_file("index.html", base::compose_index_html(choices).into())?;
    set.insert_file(".gitignore", base::compose_gitignore().into())?;
    set.insert_file("README.md", base::compose_readme(choices).into())?;
    set.insert_file(
        base::build_config_path(choices),
        compose_build_config(choices).into(),
    )?;
    set.insert_file(
        base::entry_point_path(choices),
        base::compose_entry_point(choices).into(),
    )?;
    set.insert_file(
        base::STYLESHEET_PATH,
        base::compose_stylesheet(choices).into(),
    )?;
    if let Some(env) = base::compose_vite_env(choices) {
        set.insert_file("src/vite-env.d.ts", env.into())?;
    }

    let routing = compose_routing(choices);
    set.insert_file(base::app_path(choices), routing.app_shell.into())?;
    for page in routing.pages {
        set.insert_file(page.path, page.content.into())?;
    }

    let integrations = compose_optional_integrations(choices);
    for (path, content) in integrations.files {
        set.insert_file(path, content.into())?;
    }

    for dir in compose_folder_structure(choices) {
        set.add_directory(dir);
    }

    set.push_command(PostCommand::InstallDependencies);
    set.add_packages(InstallGroup::Styling, styling_packages(choices.css_framework));
    if choices.use_routing {
        set.add_packages(InstallGroup::Routing, vec!["react-router-dom".to_string()]);
    }
    set.add_packages(InstallGroup::Optional, integrations.install_packages);
    if choices.use_pwa {
        set.add_packages(InstallGroup::Pwa, vec!["vite-plugin-pwa".to_string()]);
    }

    Ok(set)
}
