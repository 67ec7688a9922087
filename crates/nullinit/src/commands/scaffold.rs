//! `nullinit -n <name> -t <type>` command handler

use anyhow::{Context, Result};
use nullinit_projects::{scaffold_project, ProjectType, ScaffoldConfig, ScaffoldRequest, VcsStatus};

use crate::cli::ScaffoldArgs;
use crate::output;

/// Scaffold a new project and report progress
///
/// An existing target directory is reported, not returned as an error.
pub fn run(args: ScaffoldArgs, config: &ScaffoldConfig) -> Result<()> {
    let project_type = ProjectType::parse(&args.project_type);

    output::header(&format!("Scaffolding project: {}", args.name));
    output::kv("Project type", project_type.as_str());

    let request = ScaffoldRequest::new(args.name.as_str(), project_type);
    let report = match scaffold_project(&request, config) {
        Ok(report) => report,
        Err(e) if e.is_project_exists() => {
            output::error(&format!("Error: Directory '{}' already exists.", args.name));
            return Ok(());
        }
        Err(e) => {
            return Err(e).with_context(|| format!("Failed to scaffold project '{}'", args.name))
        }
    };

    output::info(&format!("Created project directory: {}", report.root));

    if report.project_type.is_supported() {
        output::info("Directory structure created.");
    } else {
        output::warning(&format!(
            "Project type '{}' is not yet supported.",
            report.project_type
        ));
    }
    output::info("Boilerplate files created.");

    match &report.vcs {
        VcsStatus::Initialized => output::info("Git repository initialized."),
        VcsStatus::Failed(reason) => {
            output::warning(&format!("Could not initialize Git repository: {}", reason))
        }
        VcsStatus::Skipped => output::info("Skipped repository initialization."),
    }

    println!();
    output::success(&format!(
        "Project '{}' scaffolded successfully at: {}",
        report.name, report.root
    ));
    println!("You can start by running: cd {}", report.name);

    Ok(())
}
