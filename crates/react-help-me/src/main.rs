//! React Help Me - Interactive scaffolding for React + Vite projects

use anyhow::{Context, Result};
use clap::Parser;
use scaffolder_core::{ProductConfig, ScaffoldError, Settings};

/// React Help Me product configuration
#[derive(Clone)]
pub struct ReactHelpMeConfig;

impl ProductConfig for ReactHelpMeConfig {
    fn name(&self) -> &'static str {
        "react-help-me"
    }

    fn display_name(&self) -> &'static str {
        "React Help Me"
    }

    fn tagline(&self) -> &'static str {
        "Skip the setup, start building: a configured React project in under a minute"
    }

    fn cli_description(&self) -> &'static str {
        "Interactive CLI that scaffolds React + Vite projects"
    }

    fn package_manager_env(&self) -> &'static str {
        "REACT_HELP_ME_PACKAGE_MANAGER"
    }

    fn skip_install_env(&self) -> &'static str {
        "REACT_HELP_ME_SKIP_INSTALL"
    }
}

#[derive(Parser, Debug)]
#[command(name = "react-help-me")]
#[command(about = "Interactive CLI that scaffolds React + Vite projects")]
#[command(version)]
pub struct Args {}

/// Advice for errors raised by the scaffolder itself
fn error_hint(err: &anyhow::Error) -> Option<&'static str> {
    err.downcast_ref::<ScaffoldError>().and_then(|e| e.kind().hint())
}

#[tokio::main]
async fn main() -> Result<()> {
    // Ensure terminal cursor is restored on panic
    let default_panic = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = console::Term::stderr().show_cursor();
        default_panic(info);
    }));

    // Handle Ctrl+C gracefully
    ctrlc::set_handler(move || {
        let _ = console::Term::stderr().show_cursor();
        std::process::exit(130);
    })
    .ok();

    let _args = Args::parse();
    let config = ReactHelpMeConfig;

    let settings = Settings::from_env(&config)
        .with_context(|| format!("Invalid {} configuration", config.name()))?;
    let base_dir = std::env::current_dir().context("Failed to read the current directory")?;

    let result = scaffolder_core::run(&config, &settings, &base_dir).await;

    // Ensure cursor is visible on normal exit
    let _ = console::Term::stderr().show_cursor();

    if let Some(hint) = result.as_ref().err().and_then(error_hint) {
        eprintln!("{}", console::style(hint).dim());
    }

    result
}
