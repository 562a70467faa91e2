//! CLI argument parsing with clap

use camino::Utf8PathBuf;
use clap::{Args, Parser, Subcommand};
use clap_complete::Shell;
use ngscaffold_core::types::Style;

/// ngscaffold - Angular application scaffolding
#[derive(Parser, Debug)]
#[command(name = "ngscaffold")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Increase verbosity (-v, -vv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Path to an ngscaffold config file
    #[arg(short, long, global = true)]
    pub config: Option<Utf8PathBuf>,

    /// Workspace root (defaults to the current directory)
    #[arg(long, global = true, env = "NGSCAFFOLD_CWD")]
    pub cwd: Option<Utf8PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Generate an Analog application
    App(AppArgs),

    /// List projects registered in the workspace
    Projects(ProjectsArgs),

    /// Show version information
    Version(VersionArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

// App command
#[derive(Args, Debug)]
pub struct AppArgs {
    /// Application name
    pub name: String,

    /// Directory under the apps dir to place the application in
    #[arg(short, long)]
    pub directory: Option<String>,

    /// Comma-separated tags for the project
    #[arg(short, long)]
    pub tags: Option<String>,

    /// Stylesheet format (css, scss, less)
    #[arg(short, long)]
    pub style: Option<Style>,

    /// Do not set up file-based routing
    #[arg(long)]
    pub no_routing: bool,

    /// Skip formatting the generated files
    #[arg(long)]
    pub skip_format: bool,

    /// Skip installing packages
    #[arg(long)]
    pub skip_install: bool,

    /// Show what would be generated without writing anything
    #[arg(long)]
    pub dry_run: bool,

    /// Prompt for options not given on the command line
    #[arg(short, long)]
    pub interactive: bool,
}

// Projects command
#[derive(Args, Debug)]
pub struct ProjectsArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Version command
#[derive(Args, Debug)]
pub struct VersionArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

// Completions command
#[derive(Args, Debug)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_app_command() {
        let cli = Cli::try_parse_from([
            "ngscaffold",
            "app",
            "myApp",
            "--directory",
            "clients",
            "--tags",
            "scope:web, type:app",
            "--style",
            "scss",
            "--no-routing",
            "--dry-run",
            "-vv",
        ])
        .unwrap();

        assert_eq!(cli.verbose, 2);
        match cli.command {
            Commands::App(args) => {
                assert_eq!(args.name, "myApp");
                assert_eq!(args.directory.as_deref(), Some("clients"));
                assert_eq!(args.tags.as_deref(), Some("scope:web, type:app"));
                assert_eq!(args.style, Some(Style::Scss));
                assert!(args.no_routing);
                assert!(args.dry_run);
                assert!(!args.skip_install);
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_invalid_style_is_rejected() {
        let result = Cli::try_parse_from(["ngscaffold", "app", "demo", "--style", "sass"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_global_options_after_subcommand() {
        let cli =
            Cli::try_parse_from(["ngscaffold", "projects", "--json", "--cwd", "/tmp/ws", "-q"])
                .unwrap();
        assert!(cli.quiet);
        assert_eq!(cli.cwd.as_deref().map(|p| p.as_str()), Some("/tmp/ws"));
        assert!(matches!(cli.command, Commands::Projects(ProjectsArgs { json: true })));
    }
}
