//! Vite build configuration as a structured document
//!
//! Contributors append plugin registrations to an ordered list; the list is
//! rendered to `vite.config.{js,ts}` once, after every contributor ran.

use super::choices::{CssFramework, ProjectChoices};
use std::fmt::Write as _;

/// Which plugin a registration belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PluginKind {
    React,
    Tailwind,
    Pwa,
}

/// One entry in the `plugins: [...]` list plus the import it needs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PluginEntry {
    pub kind: PluginKind,
    pub import: String,
    pub call: String,
}

impl PluginEntry {
    pub fn react() -> Self {
        Self {
            kind: PluginKind::React,
            import: "import react from '@vitejs/plugin-react'".to_string(),
            call: "react()".to_string(),
        }
    }

    pub fn tailwind() -> Self {
        Self {
            kind: PluginKind::Tailwind,
            import: "import tailwindcss from '@tailwindcss/vite'".to_string(),
            call: "tailwindcss()".to_string(),
        }
    }

    /// PWA registration with a web manifest named after the project
    pub fn pwa(project_name: &str) -> Self {
        let call = format!(
            r#"VitePWA({{
      registerType: 'autoUpdate',
      manifest: {{
        name: '{project_name}',
        short_name: '{project_name}',
        theme_color: '#ffffff',
        icons: [
          {{
            src: '/icon-192x192.png',
            sizes: '192x192',
            type: 'image/png',
          }},
          {{
            src: '/icon-512x512.png',
            sizes: '512x512',
            type: 'image/png',
          }},
        ],
      }},
    }})"#
        );

        Self {
            kind: PluginKind::Pwa,
            import: "import { VitePWA } from 'vite-plugin-pwa'".to_string(),
            call,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildConfig {
    plugins: Vec<PluginEntry>,
}

impl BuildConfig {
    /// Config with only the React plugin registered
    pub fn new() -> Self {
        Self {
            plugins: vec![PluginEntry::react()],
        }
    }

    /// Append a registration after the existing ones
    pub fn add_plugin(&mut self, entry: PluginEntry) {
        self.plugins.push(entry);
    }

    pub fn plugins(&self) -> &[PluginEntry] {
        &self.plugins
    }

    pub fn plugin_kinds(&self) -> Vec<PluginKind> {
        self.plugins.iter().map(|p| p.kind).collect()
    }

    pub fn render(&self) -> String {
        let mut out = String::from("import { defineConfig } from 'vite'\n");
        for plugin in &self.plugins {
            out.push_str(&plugin.import);
            out.push('\n');
        }

        out.push_str("\n// https://vite.dev/config/\nexport default defineConfig({\n  plugins: [\n");
        for plugin in &self.plugins {
            let _ = writeln!(out, "    {},", plugin.call);
        }
        out.push_str("  ],\n})\n");
        out
    }
}

impl Default for BuildConfig {
    fn default() -> Self {
        Self::new()
    }
}

/// Collect the plugin list for the given choices: React, then Tailwind, then PWA
pub fn build_config_for(choices: &ProjectChoices) -> BuildConfig {
    let mut config = BuildConfig::new();

    if choices.css_framework == CssFramework::TailwindCss {
        config.add_plugin(PluginEntry::tailwind());
    }
    if choices.use_pwa {
        config.add_plugin(PluginEntry::pwa(&choices.project_name));
    }

    config
}

pub fn compose_build_config(choices: &ProjectChoices) -> String {
    build_config_for(choices).render()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::templates::choices::Language;
    use std::collections::BTreeSet;

    fn choices(css_framework: CssFramework, use_pwa: bool) -> ProjectChoices {
        ProjectChoices {
            project_name: "shop".to_string(),
            language: Language::TypeScript,
            css_framework,
            use_routing: false,
            optional_packages: BTreeSet::new(),
            use_pwa,
        }
    }

    #[test]
    fn test_plain_config_has_only_react() {
        let config = build_config_for(&choices(CssFramework::None, false));
        assert_eq!(config.plugin_kinds(), vec![PluginKind::React]);

        let rendered = config.render();
        assert!(rendered.contains("plugins: [\n    react(),\n  ],"));
        assert!(!rendered.contains("tailwindcss"));
    }

    #[test]
    fn test_tailwind_is_inserted_alongside_react() {
        let config = build_config_for(&choices(CssFramework::TailwindCss, false));
        assert_eq!(
            config.plugin_kinds(),
            vec![PluginKind::React, PluginKind::Tailwind]
        );

        let rendered = config.render();
        assert!(rendered.contains("import tailwindcss from '@tailwindcss/vite'"));
        assert!(rendered.contains("    react(),\n    tailwindcss(),\n"));
    }

    #[test]
    fn test_tailwind_precedes_pwa() {
        let config = build_config_for(&choices(CssFramework::TailwindCss, true));
        assert_eq!(
            config.plugin_kinds(),
            vec![PluginKind::React, PluginKind::Tailwind, PluginKind::Pwa]
        );

        let rendered = config.render();
        let tailwind = rendered.find("tailwindcss()").unwrap();
        let pwa = rendered.find("VitePWA({").unwrap();
        assert!(tailwind < pwa);
        assert!(rendered.contains("name: 'shop'"));
    }

    #[test]
    fn test_pwa_without_tailwind() {
        let config = build_config_for(&choices(CssFramework::BootstrapCdn, true));
        assert_eq!(config.plugin_kinds(), vec![PluginKind::React, PluginKind::Pwa]);
        assert!(config.render().contains("import { VitePWA } from 'vite-plugin-pwa'"));
    }
}
