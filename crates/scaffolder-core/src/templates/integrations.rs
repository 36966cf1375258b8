//! Optional package integrations and the canonical folder layout

use super::choices::{OptionalPackage, ProjectChoices};

/// Directories every project gets, in creation order
pub const CANONICAL_DIRECTORIES: [&str; 4] =
    ["src/components", "src/hooks", "src/utils", "src/assets"];

pub const PAGES_DIRECTORY: &str = "src/pages";

const AXIOS_CLIENT: &str = r#"import axios from "axios";

export const api = axios.create({
  baseURL: import.meta.env.VITE_API_URL || "http://localhost:5000",
  headers: { "Content-Type": "application/json" },
  timeout: 10000,
});
"#;

/// Output of [`compose_optional_integrations`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Integrations {
    /// Auxiliary files as (relative path, content)
    pub files: Vec<(String, String)>,
    /// Every selected package, installed as one batch
    pub install_packages: Vec<String>,
}

fn auxiliary_file(package: OptionalPackage, choices: &ProjectChoices) -> Option<(String, String)> {
    match package {
        OptionalPackage::Axios => Some((
            format!("src/utils/axios.{}", choices.extensions().config),
            AXIOS_CLIENT.to_string(),
        )),
        OptionalPackage::ReactIcons
        | OptionalPackage::ReactHookForm
        | OptionalPackage::Yup
        | OptionalPackage::Formik
        | OptionalPackage::Moment => None,
    }
}

pub fn compose_optional_integrations(choices: &ProjectChoices) -> Integrations {
    let mut integrations = Integrations::default();

    for package in &choices.optional_packages {
        if let Some(file) = auxiliary_file(*package, choices) {
            integrations.files.push(file);
        }
        integrations
            .install_packages
            .push(package.npm_name().to_string());
    }

    integrations
}

pub fn compose_folder_structure(choices: &ProjectChoices) -> Vec<String> {
    let mut folders: Vec<String> = CANONICAL_DIRECTORIES
        .iter()
        .map(|dir| dir.to_string())
        .collect();
    if choices.use_routing {
        folders.push(PAGES_DIRECTORY.to_string());
    }
    folders
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::choices::{CssFramework, Language};
    use std::collections::BTreeSet;

    fn choices(language: Language, packages: &[OptionalPackage], use_routing: bool) -> ProjectChoices {
        ProjectChoices {
            project_name: "demo".to_string(),
            language,
            css_framework: CssFramework::None,
            use_routing,
            optional_packages: packages.iter().copied().collect::<BTreeSet<_>>(),
            use_pwa: false,
        }
    }

    #[test]
    fn test_no_packages_no_output() {
        let integrations = compose_optional_integrations(&choices(Language::JavaScript, &[], false));
        assert!(integrations.files.is_empty());
        assert!(integrations.install_packages.is_empty());
    }

    #[test]
    fn test_axios_client_follows_config_extension() {
        let ts = compose_optional_integrations(&choices(
            Language::TypeScript,
            &[OptionalPackage::Axios],
            false,
        ));
        assert_eq!(ts.files.len(), 1);
        assert_eq!(ts.files[0].0, "src/utils/axios.ts");
        assert!(ts.files[0].1.contains("import.meta.env.VITE_API_URL"));

        let js = compose_optional_integrations(&choices(
            Language::JavaScript,
            &[OptionalPackage::Axios],
            false,
        ));
        assert_eq!(js.files[0].0, "src/utils/axios.js");
    }

    #[test]
    fn test_all_packages_in_one_batch() {
        let integrations = compose_optional_integrations(&choices(
            Language::JavaScript,
            &OptionalPackage::ALL,
            false,
        ));
        assert_eq!(
            integrations.install_packages,
            vec!["axios", "react-icons", "react-hook-form", "yup", "formik", "moment"]
        );
        assert_eq!(integrations.files.len(), 1);
    }

    #[test]
    fn test_pages_folder_only_with_routing() {
        let without = compose_folder_structure(&choices(Language::JavaScript, &[], false));
        assert_eq!(
            without,
            vec!["src/components", "src/hooks", "src/utils", "src/assets"]
        );

        let with = compose_folder_structure(&choices(Language::JavaScript, &[], true));
        assert_eq!(with.last().map(String::as_str), Some(PAGES_DIRECTORY));
        assert_eq!(with.len(), 5);
    }
}
