//! App shell and routed pages

use super::choices::{CssFramework, ProjectChoices};
use super::variant::{Accent, NavLink, VisualVariant};
use std::fmt::Write as _;

/// A routed page component
#[derive(Debug, Clone, Copy)]
pub struct PageDef {
    /// Component identifier, also the file stem under `src/pages/`
    pub ident: &'static str,
    pub route: &'static str,
    pub nav_label: &'static str,
    pub heading: &'static str,
    /// Text placed before the project name in the page paragraph
    pub intro: &'static str,
    pub accent: Accent,
}

/// Pages created when routing is enabled; the App shell is wired from the same list
pub const PAGES: [PageDef; 2] = [
    PageDef {
        ident: "Home",
        route: "/",
        nav_label: "Home",
        heading: "Home Page",
        intro: "Welcome to",
        accent: Accent::Primary,
    },
    PageDef {
        ident: "About",
        route: "/about",
        nav_label: "About",
        heading: "About Page",
        intro: "This is the about page for",
        accent: Accent::Success,
    },
];

pub const ROUTER_IMPORT: &str =
    "import { BrowserRouter as Router, Routes, Route, Link } from 'react-router-dom';";

const REACT_BOOTSTRAP_CSS_IMPORT: &str = "import 'bootstrap/dist/css/bootstrap.min.css';";

/// A rendered page: its relative path and source text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageFile {
    pub path: String,
    pub content: String,
}

/// Output of [`compose_routing`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoutingOutput {
    pub pages: Vec<PageFile>,
    pub app_shell: String,
}

fn component(name: &str, imports: &[String], body: &str) -> String {
    let mut out = String::new();
    if !imports.is_empty() {
        for import in imports {
            out.push_str(import);
            out.push('\n');
        }
        out.push('\n');
    }
    let _ = writeln!(out, "export default function {name}() {{");
    out.push_str("  return (\n");
    out.push_str(body);
    out.push_str("  );\n}\n");
    out
}

fn shell_imports(choices: &ProjectChoices) -> Vec<String> {
    let mut imports = Vec::new();
    if choices.css_framework == CssFramework::ReactBootstrap {
        imports.push(REACT_BOOTSTRAP_CSS_IMPORT.to_string());
    }
    if choices.use_routing {
        imports.push(ROUTER_IMPORT.to_string());
        for page in &PAGES {
            imports.push(format!(
                "import {ident} from './pages/{ident}';",
                ident = page.ident
            ));
        }
    }
    imports
}

fn render_page(page: &PageDef, variant: VisualVariant, project_name: &str) -> String {
    let line = format!("{} {}", page.intro, project_name);
    let body = variant.centered_page(page.heading, page.accent, &[line]);
    component(page.ident, &[], &body)
}

fn render_routes() -> String {
    let mut out = String::from("        <Routes>\n");
    for page in &PAGES {
        let _ = writeln!(
            out,
            "          <Route path=\"{}\" element={{<{} />}} />",
            page.route, page.ident
        );
    }
    out.push_str("        </Routes>\n");
    out
}

fn render_app_shell(choices: &ProjectChoices, variant: VisualVariant) -> String {
    let imports = shell_imports(choices);

    let body = if choices.use_routing {
        let links: Vec<NavLink<'_>> = PAGES
            .iter()
            .map(|page| NavLink {
                to: page.route,
                label: page.nav_label,
            })
            .collect();
        let mut body = String::from("    <Router>\n");
        body.push_str(&variant.nav_shell(&choices.project_name, &links, &render_routes()));
        body.push_str("    </Router>\n");
        body
    } else {
        let lines = [
            format!("Project: {}", choices.project_name),
            format!("CSS Framework: {}", choices.css_framework),
        ];
        variant.centered_page("Welcome to React Boilerplate", Accent::Primary, &lines)
    };

    component("App", &imports, &body)
}

/// Compose the App shell and, when routing is enabled, the Home and About pages
pub fn compose_routing(choices: &ProjectChoices) -> RoutingOutput {
    let variant = VisualVariant::for_framework(choices.css_framework);
    let ext = choices.extensions().file;

    let pages = if choices.use_routing {
        PAGES
            .iter()
            .map(|page| PageFile {
                path: format!("src/pages/{}.{}", page.ident, ext),
                content: render_page(page, variant, &choices.project_name),
            })
            .collect()
    } else {
        Vec::new()
    };

    RoutingOutput {
        pages,
        app_shell: render_app_shell(choices, variant),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::choices::Language;
    use std::collections::BTreeSet;

    fn choices(css_framework: CssFramework, use_routing: bool) -> ProjectChoices {
        ProjectChoices {
            project_name: "demo".to_string(),
            language: Language::JavaScript,
            css_framework,
            use_routing,
            optional_packages: BTreeSet::new(),
            use_pwa: false,
        }
    }

    #[test]
    fn test_without_routing_has_no_pages_or_router() {
        let output = compose_routing(&choices(CssFramework::None, false));
        assert!(output.pages.is_empty());
        assert!(!output.app_shell.contains("react-router-dom"));
        assert!(output.app_shell.contains("Project: demo"));
        assert!(output.app_shell.contains("CSS Framework: None"));
    }

    #[test]
    fn test_routing_wires_both_pages() {
        let output = compose_routing(&choices(CssFramework::TailwindCss, true));
        let paths: Vec<_> = output.pages.iter().map(|p| p.path.as_str()).collect();
        assert_eq!(paths, vec!["src/pages/Home.jsx", "src/pages/About.jsx"]);

        let shell = &output.app_shell;
        assert!(shell.starts_with(ROUTER_IMPORT));
        assert!(shell.contains("import Home from './pages/Home';"));
        assert!(shell.contains("import About from './pages/About';"));
        assert!(shell.contains("<Route path=\"/\" element={<Home />} />"));
        assert!(shell.contains("<Route path=\"/about\" element={<About />} />"));
    }

    #[test]
    fn test_page_components_are_named_after_identifiers() {
        let output = compose_routing(&choices(CssFramework::BootstrapCdn, true));
        assert!(output.pages[0]
            .content
            .starts_with("export default function Home() {"));
        assert!(output.pages[1].content.contains("This is the about page for demo"));
        assert!(output.pages[1].content.contains("text-success"));
    }

    #[test]
    fn test_react_bootstrap_imports_stylesheet() {
        for routing in [false, true] {
            let output = compose_routing(&choices(CssFramework::ReactBootstrap, routing));
            assert!(output.app_shell.starts_with(REACT_BOOTSTRAP_CSS_IMPORT));
        }
        let output = compose_routing(&choices(CssFramework::BootstrapCdn, false));
        assert!(!output.app_shell.contains("bootstrap.min.css"));
    }

    #[test]
    fn test_page_identifiers_identical_across_variants() {
        let idents = |css| -> Vec<String> {
            compose_routing(&choices(css, true))
                .pages
                .into_iter()
                .map(|p| p.path)
                .collect()
        };
        let tailwind = idents(CssFramework::TailwindCss);
        assert_eq!(tailwind, idents(CssFramework::ReactBootstrap));
        assert_eq!(tailwind, idents(CssFramework::None));
    }
}
