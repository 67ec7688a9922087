//! CLI argument parsing with clap

use clap::{Args, Parser};

/// nullinit - scaffold a new project directory
#[derive(Parser, Debug)]
#[command(name = "nullinit")]
#[command(author, version, about = "Project Scaffolder Tool", long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    #[command(flatten)]
    pub scaffold: ScaffoldArgs,
}

#[derive(Args, Debug)]
pub struct ScaffoldArgs {
    /// The name of the project
    #[arg(short, long)]
    pub name: String,

    /// The type of the project (python, fastapi, llm-finetune, compiler, os)
    #[arg(short = 't', long = "type", default_value = "python")]
    pub project_type: String,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_type_defaults_to_python() {
        let cli = Cli::try_parse_from(["nullinit", "-n", "demo"]).unwrap();
        assert_eq!(cli.scaffold.name, "demo");
        assert_eq!(cli.scaffold.project_type, "python");
        assert_eq!(cli.verbose, 0);
        assert!(!cli.quiet);
    }

    #[test]
    fn test_long_flags() {
        let cli = Cli::try_parse_from(["nullinit", "--name", "kern", "--type", "os", "-vv"]).unwrap();
        assert_eq!(cli.scaffold.name, "kern");
        assert_eq!(cli.scaffold.project_type, "os");
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_unknown_type_is_accepted() {
        let cli = Cli::try_parse_from(["nullinit", "-n", "web", "-t", "react"]).unwrap();
        assert_eq!(cli.scaffold.project_type, "react");
    }

    #[test]
    fn test_name_is_required() {
        let err = Cli::try_parse_from(["nullinit", "-t", "python"]).unwrap_err();
        assert_eq!(err.kind(), clap::error::ErrorKind::MissingRequiredArgument);
    }
}
