//! `package.json` and `tsconfig.json` documents

use super::choices::{Language, ProjectChoices};
use crate::error::Result;
use serde::Serialize;
use std::collections::BTreeMap;

/// Dependencies every generated project declares
const BASE_DEPENDENCIES: &[(&str, &str)] = &[("react", "^18.3.1"), ("react-dom", "^18.3.1")];

/// Build tooling every generated project declares
const BASE_DEV_DEPENDENCIES: &[(&str, &str)] =
    &[("@vitejs/plugin-react", "^4.3.1"), ("vite", "^5.4.1")];

/// Extra dev dependencies for TypeScript projects
const TYPESCRIPT_DEV_DEPENDENCIES: &[(&str, &str)] = &[
    ("@types/react", "^18.3.3"),
    ("@types/react-dom", "^18.3.0"),
    ("typescript", "^5.5.3"),
];

/// The generated project's `package.json`
///
/// Maps are ordered so the rendered document is stable and keys are unique.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PackageManifest {
    pub name: String,
    pub private: bool,
    pub version: String,
    #[serde(rename = "type")]
    pub module_type: String,
    pub scripts: BTreeMap<String, String>,
    pub dependencies: BTreeMap<String, String>,
    pub dev_dependencies: BTreeMap<String, String>,
}

impl PackageManifest {
    pub fn for_choices(choices: &ProjectChoices) -> Self {
        let build = match choices.language {
            Language::TypeScript => "tsc && vite build",
            Language::JavaScript => "vite build",
        };

        let scripts = [("dev", "vite"), ("build", build), ("preview", "vite preview")]
            .into_iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();

        let mut dev_dependencies = to_map(BASE_DEV_DEPENDENCIES);
        if choices.language == Language::TypeScript {
            dev_dependencies.extend(to_map(TYPESCRIPT_DEV_DEPENDENCIES));
        }

        Self {
            name: package_name(&choices.project_name),
            private: true,
            version: "0.0.0".to_string(),
            module_type: "module".to_string(),
            scripts,
            dependencies: to_map(BASE_DEPENDENCIES),
            dev_dependencies,
        }
    }
}

/// npm package name for a project directory name
///
/// npm rejects upper-case letters and a leading `_` in package names.
pub fn package_name(project_name: &str) -> String {
    let name = project_name.to_ascii_lowercase();
    let trimmed = name.trim_start_matches('_');
    if trimmed.is_empty() {
        "react-app".to_string()
    } else {
        trimmed.to_string()
    }
}

fn to_map(entries: &[(&str, &str)]) -> BTreeMap<String, String> {
    entries
        .iter()
        .map(|(name, version)| (name.to_string(), version.to_string()))
        .collect()
}

/// Compiler options written to `tsconfig.json`
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CompilerOptions {
    pub target: String,
    pub use_define_for_class_fields: bool,
    pub lib: Vec<String>,
    pub module: String,
    pub skip_lib_check: bool,
    pub module_resolution: String,
    pub allow_importing_ts_extensions: bool,
    pub isolated_modules: bool,
    pub module_detection: String,
    pub no_emit: bool,
    pub jsx: String,
    pub strict: bool,
    pub no_unused_locals: bool,
    pub no_unused_parameters: bool,
    pub no_fallthrough_cases_in_switch: bool,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TsConfig {
    pub compiler_options: CompilerOptions,
    pub include: Vec<String>,
}

impl Default for TsConfig {
    fn default() -> Self {
        Self {
            compiler_options: CompilerOptions {
                target: "ES2020".to_string(),
                use_define_for_class_fields: true,
                lib: vec![
                    "ES2020".to_string(),
                    "DOM".to_string(),
                    "DOM.Iterable".to_string(),
                ],
                module: "ESNext".to_string(),
                skip_lib_check: true,
                module_resolution: "bundler".to_string(),
                allow_importing_ts_extensions: true,
                isolated_modules: true,
                module_detection: "force".to_string(),
                no_emit: true,
                jsx: "react-jsx".to_string(),
                strict: true,
                no_unused_locals: true,
                no_unused_parameters: true,
                no_fallthrough_cases_in_switch: true,
            },
            include: vec!["src".to_string()],
        }
    }
}

/// Build the `package.json` document
pub fn compose_manifest(choices: &ProjectChoices) -> Result<serde_json::Value> {
    Ok(serde_json::to_value(PackageManifest::for_choices(choices))?)
}

/// Build the `tsconfig.json` document (TypeScript projects only)
pub fn compose_tsconfig(choices: &ProjectChoices) -> Result<Option<serde_json::Value>> {
    match choices.language {
        Language::TypeScript => Ok(Some(serde_json::to_value(TsConfig::default())?)),
        Language::JavaScript => Ok(None),
    }
}
