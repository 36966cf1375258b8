//! User choices that drive template composition

use crate::error::{Result, ScaffoldError};
use std::collections::BTreeSet;
use std::fmt;

/// Source language of the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    JavaScript,
    TypeScript,
}

impl Language {
    pub const ALL: [Language; 2] = [Language::JavaScript, Language::TypeScript];

    pub fn display_name(&self) -> &'static str {
        match self {
            Language::JavaScript => "JavaScript",
            Language::TypeScript => "TypeScript",
        }
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Styling approach for the generated project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CssFramework {
    TailwindCss,
    BootstrapCdn,
    ReactBootstrap,
    None,
}

impl CssFramework {
    pub const ALL: [CssFramework; 4] = [
        CssFramework::TailwindCss,
        CssFramework::BootstrapCdn,
        CssFramework::ReactBootstrap,
        CssFramework::None,
    ];

    pub fn display_name(&self) -> &'static str {
        match self {
            CssFramework::TailwindCss => "Tailwind CSS",
            CssFramework::BootstrapCdn => "Bootstrap (CDN)",
            CssFramework::ReactBootstrap => "React Bootstrap",
            CssFramework::None => "None",
        }
    }
}

impl fmt::Display for CssFramework {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Extra npm packages the user can opt into.
///
/// Ordering follows declaration order, which is also the order packages are
/// listed in the install batch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum OptionalPackage {
    Axios,
    ReactIcons,
    ReactHookForm,
    Yup,
    Formik,
    Moment,
}

impl OptionalPackage {
    pub const ALL: [OptionalPackage; 6] = [
        OptionalPackage::Axios,
        OptionalPackage::ReactIcons,
        OptionalPackage::ReactHookForm,
        OptionalPackage::Yup,
        OptionalPackage::Formik,
        OptionalPackage::Moment,
    ];

    /// Name of the package on the npm registry
    pub fn npm_name(&self) -> &'static str {
        match self {
            OptionalPackage::Axios => "axios",
            OptionalPackage::ReactIcons => "react-icons",
            OptionalPackage::ReactHookForm => "react-hook-form",
            OptionalPackage::Yup => "yup",
            OptionalPackage::Formik => "formik",
            OptionalPackage::Moment => "moment",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            OptionalPackage::Axios => "Axios",
            OptionalPackage::ReactIcons => "React Icons",
            OptionalPackage::ReactHookForm => "React Hook Form",
            OptionalPackage::Yup => "Yup",
            OptionalPackage::Formik => "Formik",
            OptionalPackage::Moment => "Moment.js",
        }
    }
}

/// File extensions derived from the language choice
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Extensions {
    /// Extension for component files (`jsx` / `tsx`)
    pub file: &'static str,
    /// Extension for plain modules and build config (`js` / `ts`)
    pub config: &'static str,
}

/// Everything the user decided during the prompt session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectChoices {
    pub project_name: String,
    pub language: Language,
    pub css_framework: CssFramework,
    pub use_routing: bool,
    pub optional_packages: BTreeSet<OptionalPackage>,
    pub use_pwa: bool,
}

impl ProjectChoices {
    /// Check the invariants composition relies on
    pub fn validate(&self) -> Result<()> {
        validate_project_name(&self.project_name)
    }

    pub fn extensions(&self) -> Extensions {
        resolve_extensions(self.language)
    }

    pub fn has_package(&self, package: OptionalPackage) -> bool {
        self.optional_packages.contains(&package)
    }
}

/// Project names must be non-empty and match `[A-Za-z0-9_-]+`
pub fn validate_project_name(name: &str) -> Result<()> {
    let valid = !name.is_empty()
        && name
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_');

    if valid {
        Ok(())
    } else {
        Err(ScaffoldError::InvalidProjectName {
            name: name.to_string(),
        })
    }
}

pub fn resolve_extensions(language: Language) -> Extensions {
    match language {
        Language::TypeScript => Extensions {
            file: "tsx",
            config: "ts",
        },
        Language::JavaScript => Extensions {
            file: "jsx",
            config: "js",
        },
    }
}
