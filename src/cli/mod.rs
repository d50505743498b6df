//! CLI tools for runimage
//!
//! - `check`: Validate a run configuration and report its API requirement
//! - `show`: Print the normalized run configuration
//! - `completions`: Generate shell completions

pub mod check;
pub mod completions;
pub mod show;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand, ValueEnum};
use runimage::{ApiVersion, Config, OutputFormat, init_logging};
use std::path::PathBuf;

/// CLI arguments for runimage
#[derive(Parser, Debug)]
#[command(name = "runimage")]
#[command(author, version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Validate a run configuration and report the runtime API it needs
    Check {
        /// Run configuration file (YAML or JSON)
        file: PathBuf,
        /// API version of the container runtime to check against
        #[arg(short, long)]
        api_version: Option<ApiVersion>,
    },

    /// Print a run configuration with all defaults applied
    Show {
        /// Run configuration file (YAML or JSON)
        file: PathBuf,
        /// Output format
        #[arg(short, long, value_enum)]
        format: Option<FormatArg>,
    },

    /// Generate shell completions
    Completions {
        /// Shell type
        #[arg(value_enum)]
        shell: ShellArg,
        /// Output file (stdout if not specified)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum FormatArg {
    Yaml,
    Json,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
enum ShellArg {
    Bash,
    Zsh,
    Fish,
    PowerShell,
}

/// Build the CLI command for completion generation
pub fn build_cli() -> clap::Command {
    Args::command()
}

/// Parse and execute CLI arguments
pub fn run() -> Result<()> {
    let args = Args::parse();
    let config = Config::from_env().context("Invalid runimage environment configuration")?;
    init_logging(&config.log_level);

    match args.command {
        Command::Check { file, api_version } => {
            let available = api_version.or(config.api_version);
            let report = check::check_run_spec(&file, available)?;
            println!("{report}");
        }
        Command::Show { file, format } => {
            let format = match format {
                Some(FormatArg::Yaml) => OutputFormat::Yaml,
                Some(FormatArg::Json) => OutputFormat::Json,
                None => config.output,
            };
            let spec = check::load_run_spec(&file)?;
            println!("{}", show::render_run_spec(&spec, format)?);
        }
        Command::Completions { shell, output } => {
            use clap_complete::Shell;

            let shell_enum = match shell {
                ShellArg::Bash => Shell::Bash,
                ShellArg::Zsh => Shell::Zsh,
                ShellArg::Fish => Shell::Fish,
                ShellArg::PowerShell => Shell::PowerShell,
            };

            let completions = completions::generate_completions(shell_enum)?;

            if let Some(output_path) = output {
                completions::save_completions(&completions, &output_path)?;
            } else {
                println!("{completions}");
            }
        }
    }

    Ok(())
}
