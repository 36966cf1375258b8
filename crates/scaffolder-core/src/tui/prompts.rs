//! Charm-style CLI prompts using cliclack

use crate::config::Settings;
use crate::materializer;
use crate::product::ProductConfig;
use crate::runtime::check;
use crate::templates::{
    self, validate_project_name, CssFramework, Language, OptionalPackage, PostCommand,
    ProjectChoices, ProjectFileSet,
};
use anyhow::Result;
use std::collections::BTreeSet;
use std::path::Path;

/// Run the interactive session, creating the project under `base_dir`
pub async fn run<C: ProductConfig>(config: &C, settings: &Settings, base_dir: &Path) -> Result<()> {
    cliclack::intro(config.display_name())?;
    cliclack::log::remark(config.tagline())?;

    // Step 1: Collect choices
    let choices = collect_choices(base_dir).await?;
    let project_dir = base_dir.join(&choices.project_name);

    // Step 2: Compose
    show_summary(&choices, settings)?;
    let mut file_set = templates::assemble(&choices)?;

    // Step 3: Write files
    write_project(&file_set, &project_dir).await?;
    if choices.use_routing {
        cliclack::log::info("Routing has been set up with Home and About pages")?;
    }

    if settings.skip_install {
        cliclack::log::info(format!(
            "Skipping dependency installation ({} is set)",
            config.skip_install_env()
        ))?;
        print_next_steps(config, &choices, settings, false)?;
        return Ok(());
    }

    // Step 4: Check runtimes and install
    check_runtimes(settings)?;

    let start_dev_server: bool = cliclack::confirm("Start the dev server when setup finishes?")
        .initial_value(false)
        .interact()?;
    if start_dev_server {
        file_set.push_command(PostCommand::RunScript("dev".to_string()));
    }

    let (installs, scripts): (Vec<PostCommand>, Vec<PostCommand>) = file_set
        .commands()
        .iter()
        .cloned()
        .partition(PostCommand::is_install);

    materializer::run_commands(&installs, settings.package_manager, &project_dir).await?;
    cliclack::log::success("Dependencies installed")?;

    // Step 5: Next steps, then hand the terminal to the dev server if requested
    print_next_steps(config, &choices, settings, true)?;
    materializer::run_commands(&scripts, settings.package_manager, &project_dir).await?;

    Ok(())
}

async fn collect_choices(base_dir: &Path) -> Result<ProjectChoices> {
    let project_name: String = cliclack::input("Project name")
        .placeholder("my-react-app")
        .validate(|input: &String| validate_project_name(input).map_err(|e| e.to_string()))
        .interact()?;

    // Fail before asking anything else if the directory is taken
    materializer::ensure_target_available(&base_dir.join(&project_name)).await?;

    let mut language_select = cliclack::select("Which language do you want to use?");
    for language in Language::ALL {
        language_select = language_select.item(language, language.display_name(), "");
    }
    let language: Language = language_select.interact()?;

    let mut css_select = cliclack::select("Choose a CSS framework");
    for css in CssFramework::ALL {
        css_select = css_select.item(css, css.display_name(), "");
    }
    let css_framework: CssFramework = css_select.interact()?;

    let use_routing: bool = cliclack::confirm("Do you want to set up routing?")
        .initial_value(false)
        .interact()?;

    let mut package_select = cliclack::multiselect("Select optional packages");
    for package in OptionalPackage::ALL {
        package_select = package_select.item(package, package.display_name(), package.npm_name());
    }
    let optional_packages: Vec<OptionalPackage> = package_select.required(false).interact()?;

    let use_pwa: bool = cliclack::confirm("Do you want to enable PWA support?")
        .initial_value(false)
        .interact()?;

    let choices = ProjectChoices {
        project_name,
        language,
        css_framework,
        use_routing,
        optional_packages: optional_packages.into_iter().collect::<BTreeSet<_>>(),
        use_pwa,
    };
    choices.validate()?;

    Ok(choices)
}

fn yes_no(value: bool) -> &'static str {
    if value {
        "yes"
    } else {
        "no"
    }
}

fn show_summary(choices: &ProjectChoices, settings: &Settings) -> Result<()> {
    let packages = if choices.optional_packages.is_empty() {
        "none".to_string()
    } else {
        choices
            .optional_packages
            .iter()
            .map(|p| p.npm_name())
            .collect::<Vec<_>>()
            .join(", ")
    };

    let summary = format!(
        "Name:            {}\n\
         Language:        {}\n\
         CSS framework:   {}\n\
         Routing:         {}\n\
         Packages:        {}\n\
         PWA:             {}\n\
         Package manager: {}",
        choices.project_name,
        choices.language,
        choices.css_framework,
        yes_no(choices.use_routing),
        packages,
        yes_no(choices.use_pwa),
        settings.package_manager,
    );

    cliclack::note("Project summary", summary)?;
    Ok(())
}

async fn write_project(file_set: &ProjectFileSet, project_dir: &Path) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Creating project...");

    match materializer::write_file_set(file_set, project_dir).await {
        Ok(written) => {
            spinner.stop(format!(
                "Created {} files in {}",
                written.len(),
                project_dir.display()
            ));
            Ok(())
        }
        Err(e) => {
            spinner.stop("Failed to create project");
            Err(e.into())
        }
    }
}

fn check_runtimes(settings: &Settings) -> Result<()> {
    let spinner = cliclack::spinner();
    spinner.start("Checking runtimes...");

    match check::check_runtimes(settings.package_manager) {
        Ok(runtimes) => {
            let runtime_info: Vec<String> = runtimes
                .iter()
                .map(|r| format!("{} ({})", r.name, r.version.as_deref().unwrap_or("unknown")))
                .collect();
            spinner.stop(format!("Detected runtimes: {}", runtime_info.join(", ")));

            let node_warning = runtimes
                .iter()
                .find(|r| r.name == "Node.js")
                .and_then(|r| r.version.as_deref())
                .and_then(check::node_version_warning);
            if let Some(warning) = node_warning {
                cliclack::log::warning(warning)?;
            }
            Ok(())
        }
        Err(e) => {
            spinner.stop("Missing runtimes");
            cliclack::log::error(format!("{}", e))?;
            anyhow::bail!("Please install the missing runtimes and try again.");
        }
    }
}

fn print_next_steps<C: ProductConfig>(
    config: &C,
    choices: &ProjectChoices,
    settings: &Settings,
    installed: bool,
) -> Result<()> {
    let steps = config.next_steps(choices, settings.package_manager, installed);

    cliclack::log::success(format!(
        "Project {} created successfully!",
        choices.project_name
    ))?;

    println!();
    println!("  Next steps");
    println!();

    for (i, step) in steps.iter().enumerate() {
        println!("  {}.  {}", i + 1, step);
    }

    cliclack::outro("Happy coding!")?;

    Ok(())
}
