//! Visual markup variants keyed by CSS framework
//!
//! Every page-producing composer (App shell, Home, About) goes through this
//! single lookup, so the three markup families stay in one place.

use super::choices::CssFramework;
use std::fmt::Write as _;

/// Markup family selected from the CSS framework
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VisualVariant {
    Tailwind,
    Bootstrap,
    Plain,
}

/// Heading color role
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Accent {
    Primary,
    Success,
}

/// A navigation link in the App shell
#[derive(Debug, Clone, Copy)]
pub struct NavLink<'a> {
    pub to: &'a str,
    pub label: &'a str,
}

impl VisualVariant {
    pub fn for_framework(css_framework: CssFramework) -> Self {
        match css_framework {
            CssFramework::TailwindCss => VisualVariant::Tailwind,
            CssFramework::BootstrapCdn | CssFramework::ReactBootstrap => VisualVariant::Bootstrap,
            CssFramework::None => VisualVariant::Plain,
        }
    }

    fn container_open(&self) -> &'static str {
        match self {
            VisualVariant::Tailwind => {
                r#"<div className="min-h-screen flex flex-col items-center justify-center bg-gray-100">"#
            }
            VisualVariant::Bootstrap => {
                r#"<div className="min-vh-100 d-flex flex-column align-items-center justify-content-center bg-light">"#
            }
            VisualVariant::Plain => {
                "<div style={{
      minHeight: '100vh',
      display: 'flex',
      flexDirection: 'column',
      alignItems: 'center',
      justifyContent: 'center',
      backgroundColor: '#f0f0f0',
      padding: '2rem'
    }}>"
            }
        }
    }

    fn heading_open(&self, accent: Accent) -> &'static str {
        match (self, accent) {
            (VisualVariant::Tailwind, Accent::Primary) => {
                r#"<h1 className="text-4xl font-bold text-blue-600 mb-4">"#
            }
            (VisualVariant::Tailwind, Accent::Success) => {
                r#"<h1 className="text-4xl font-bold text-green-600 mb-4">"#
            }
            (VisualVariant::Bootstrap, Accent::Primary) => {
                r#"<h1 className="display-4 text-primary mb-4">"#
            }
            (VisualVariant::Bootstrap, Accent::Success) => {
                r#"<h1 className="display-4 text-success mb-4">"#
            }
            (VisualVariant::Plain, Accent::Primary) => {
                "<h1 style={{ color: 'blue', marginBottom: '1rem' }}>"
            }
            (VisualVariant::Plain, Accent::Success) => {
                "<h1 style={{ color: 'green', marginBottom: '1rem' }}>"
            }
        }
    }

    fn paragraph_open(&self) -> &'static str {
        match self {
            VisualVariant::Tailwind => r#"<p className="text-lg text-gray-700">"#,
            VisualVariant::Bootstrap => r#"<p className="lead text-secondary">"#,
            VisualVariant::Plain => "<p>",
        }
    }

    /// Centered heading plus paragraphs, indented for a component's `return (...)`
    pub fn centered_page(&self, heading: &str, accent: Accent, lines: &[String]) -> String {
        let mut out = String::new();
        let _ = writeln!(out, "    {}", self.container_open());
        let _ = writeln!(out, "      {}", self.heading_open(accent));
        let _ = writeln!(out, "        {heading}");
        out.push_str("      </h1>\n");
        for line in lines {
            let _ = writeln!(out, "      {}", self.paragraph_open());
            let _ = writeln!(out, "        {line}");
            out.push_str("      </p>\n");
        }
        out.push_str("    </div>\n");
        out
    }

    /// Layout with a navigation bar above `routes`, indented to sit inside `<Router>`
    pub fn nav_shell(&self, brand: &str, links: &[NavLink<'_>], routes: &str) -> String {
        let mut out = String::new();
        match self {
            VisualVariant::Tailwind => {
                out.push_str(
                    r#"      <div className="min-h-screen bg-gray-100">
        <nav className="bg-white shadow-lg">
          <div className="max-w-6xl mx-auto px-4">
            <div className="flex justify-between">
              <div className="flex space-x-7">
                <div>
                  <Link to="/" className="flex items-center py-4 px-2">
"#,
                );
                let _ = writeln!(
                    out,
                    r#"                    <span className="font-semibold text-gray-500 text-lg">{brand}</span>"#
                );
                out.push_str(
                    r#"                  </Link>
                </div>
                <div className="hidden md:flex items-center space-x-1">
"#,
                );
                for link in links {
                    let _ = writeln!(
                        out,
                        r#"                  <Link to="{}" className="py-4 px-2 text-gray-500 font-semibold hover:text-blue-500 transition duration-300">{}</Link>"#,
                        link.to, link.label
                    );
                }
                out.push_str(
                    "                </div>
              </div>
            </div>
          </div>
        </nav>
",
                );
            }
            VisualVariant::Bootstrap => {
                out.push_str(
                    r#"      <div className="min-vh-100">
        <nav className="navbar navbar-expand-lg navbar-light bg-light">
          <div className="container">
"#,
                );
                let _ = writeln!(
                    out,
                    r#"            <Link className="navbar-brand" to="/">{brand}</Link>"#
                );
                out.push_str("            <div className=\"navbar-nav\">\n");
                for link in links {
                    let _ = writeln!(
                        out,
                        r#"              <Link className="nav-link" to="{}">{}</Link>"#,
                        link.to, link.label
                    );
                }
                out.push_str(
                    "            </div>
          </div>
        </nav>
",
                );
            }
            VisualVariant::Plain => {
                out.push_str(
                    "      <div style={{ minHeight: '100vh' }}>
        <nav style={{
          backgroundColor: '#f8f9fa',
          padding: '1rem',
          borderBottom: '1px solid #dee2e6',
          display: 'flex',
          justifyContent: 'space-between',
          alignItems: 'center'
        }}>
          <Link to=\"/\" style={{
            textDecoration: 'none',
            fontSize: '1.25rem',
            fontWeight: 'bold',
            color: '#495057'
          }}>",
                );
                let _ = writeln!(out, "{brand}</Link>");
                out.push_str("          <div>\n");
                for (idx, link) in links.iter().enumerate() {
                    let margin = if idx + 1 < links.len() {
                        "marginRight: '1rem', "
                    } else {
                        ""
                    };
                    let _ = writeln!(
                        out,
                        "            <Link to=\"{}\" style={{{{ {margin}textDecoration: 'none', color: '#6c757d' }}}}>{}</Link>",
                        link.to, link.label
                    );
                }
                out.push_str(
                    "          </div>
        </nav>
",
                );
            }
        }

        out.push_str(routes);
        out.push_str("      </div>\n");
        out
    }
}
