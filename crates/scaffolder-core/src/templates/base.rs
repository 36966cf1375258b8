//! Hand-written base scaffold: entry point, stylesheet, HTML shell and repo files

use super::choices::{CssFramework, Language, ProjectChoices};

/// Body of `src/index.css` for every non-Tailwind project
pub const RESET_STYLESHEET: &str = "body { margin: 0; padding: 0; box-sizing: border-box; }\n";

/// Body of `src/index.css` for Tailwind projects
pub const TAILWIND_STYLESHEET: &str = "@import \"tailwindcss\";\n";

/// Path of the stylesheet the entry point imports
pub const STYLESHEET_PATH: &str = "src/index.css";

const BOOTSTRAP_CDN_LINK: &str = r#"<link href="https://cdn.jsdelivr.net/npm/bootstrap@5.3.0/dist/css/bootstrap.min.css" rel="stylesheet">"#;

const GITIGNORE: &str = "# Logs
logs
*.log
npm-debug.log*
yarn-debug.log*
yarn-error.log*
pnpm-debug.log*

node_modules
dist
dist-ssr
*.local

# Editor directories and files
.vscode/*
!.vscode/extensions.json
.idea
.DS_Store
*.suo
*.ntvs*
*.njsproj
*.sln
*.sw?
";

pub fn entry_point_path(choices: &ProjectChoices) -> String {
    format!("src/main.{}", choices.extensions().file)
}

pub fn app_path(choices: &ProjectChoices) -> String {
    format!("src/App.{}", choices.extensions().file)
}

pub fn build_config_path(choices: &ProjectChoices) -> String {
    format!("vite.config.{}", choices.extensions().config)
}

/// `src/main.{jsx,tsx}`: mounts App and pulls in the stylesheet
pub fn compose_entry_point(choices: &ProjectChoices) -> String {
    let ext = choices.extensions().file;
    format!(
        "import React from 'react';
import ReactDOM from 'react-dom/client';
import App from './App.{ext}';
import './index.css';

const rootElement = document.getElementById('root');
if (rootElement) {{
  const root = ReactDOM.createRoot(rootElement);
  root.render(
    <React.StrictMode>
      <App />
    </React.StrictMode>
  );
}} else {{
  console.error('Failed to find the root element');
}}
"
    )
}

/// `src/index.css`: Tailwind directive or the minimal reset, never both
pub fn compose_stylesheet(choices: &ProjectChoices) -> String {
    match choices.css_framework {
        CssFramework::TailwindCss => TAILWIND_STYLESHEET.to_string(),
        CssFramework::BootstrapCdn | CssFramework::ReactBootstrap | CssFramework::None => {
            RESET_STYLESHEET.to_string()
        }
    }
}

pub fn compose_index_html(choices: &ProjectChoices) -> String {
    let stylesheet = match choices.css_framework {
        CssFramework::BootstrapCdn => format!("    {BOOTSTRAP_CDN_LINK}\n"),
        _ => String::new(),
    };

    format!(
        r#"<!DOCTYPE html>
<html lang="en">
  <head>
    <meta charset="UTF-8" />
    <meta name="viewport" content="width=device-width, initial-scale=1.0" />
    <title>{name}</title>
{stylesheet}  </head>
  <body>
    <div id="root"></div>
    <script type="module" src="/src/main.{ext}"></script>
  </body>
</html>
"#,
        name = choices.project_name,
        ext = choices.extensions().file,
    )
}

pub fn compose_gitignore() -> String {
    GITIGNORE.to_string()
}

pub fn compose_readme(choices: &ProjectChoices) -> String {
    format!(
        "# {name}

React + Vite project using {language} and {css}.

## Scripts

- `dev`: start the development server
- `build`: build for production into `dist/`
- `preview`: serve the production build locally

Run them through your package manager, for example `npm run dev`.
",
        name = choices.project_name,
        language = choices.language,
        css = match choices.css_framework {
            CssFramework::None => "plain CSS".to_string(),
            other => other.to_string(),
        },
    )
}

/// `src/vite-env.d.ts`, only for TypeScript projects
pub fn compose_vite_env(choices: &ProjectChoices) -> Option<String> {
    match choices.language {
        Language::TypeScript => Some("/// <reference types=\"vite/client\" />\n".to_string()),
        Language::JavaScript => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeSet;

    fn choices(language: Language, css_framework: CssFramework) -> ProjectChoices {
        ProjectChoices {
            project_name: "demo".to_string(),
            language,
            css_framework,
            use_routing: false,
            optional_packages: BTreeSet::new(),
            use_pwa: false,
        }
    }

    #[test]
    fn test_entry_point_references_app_extension_and_stylesheet() {
        let ts = compose_entry_point(&choices(Language::TypeScript, CssFramework::None));
        assert!(ts.contains("import App from './App.tsx';"));
        assert!(ts.contains("import './index.css';"));

        let js = compose_entry_point(&choices(Language::JavaScript, CssFramework::None));
        assert!(js.contains("import App from './App.jsx';"));
    }

    #[test]
    fn test_stylesheet_branches() {
        assert_eq!(
            compose_stylesheet(&choices(Language::JavaScript, CssFramework::TailwindCss)),
            TAILWIND_STYLESHEET
        );
        for css in [
            CssFramework::BootstrapCdn,
            CssFramework::ReactBootstrap,
            CssFramework::None,
        ] {
            assert_eq!(
                compose_stylesheet(&choices(Language::JavaScript, css)),
                RESET_STYLESHEET
            );
        }
    }

    #[test]
    fn test_index_html_links_bootstrap_cdn_only_when_chosen() {
        let cdn = compose_index_html(&choices(Language::JavaScript, CssFramework::BootstrapCdn));
        assert!(cdn.contains("bootstrap@5.3.0"));
        assert!(cdn.contains("<title>demo</title>"));
        assert!(cdn.contains("src=\"/src/main.jsx\""));

        let plain = compose_index_html(&choices(Language::TypeScript, CssFramework::ReactBootstrap));
        assert!(!plain.contains("bootstrap@5.3.0"));
        assert!(plain.contains("src=\"/src/main.tsx\""));
    }

    #[test]
    fn test_paths_follow_extensions() {
        let ts = choices(Language::TypeScript, CssFramework::None);
        assert_eq!(entry_point_path(&ts), "src/main.tsx");
        assert_eq!(app_path(&ts), "src/App.tsx");
        assert_eq!(build_config_path(&ts), "vite.config.ts");
        assert!(compose_vite_env(&ts).is_some());

        let js = choices(Language::JavaScript, CssFramework::None);
        assert_eq!(build_config_path(&js), "vite.config.js");
        assert!(compose_vite_env(&js).is_none());
    }
}
