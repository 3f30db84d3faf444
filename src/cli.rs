use clap::{ArgGroup, Parser};
use std::path::PathBuf;

use crate::application::dto::OutputFormat;
use crate::config::CliOptions;

/// Default snapshot looked up in the working directory when no source is given.
pub const DEFAULT_SNAPSHOT: &str = "build-snapshot.yml";

/// Extract the dependency-configuration model of a Gradle build
#[derive(Parser, Debug)]
#[command(name = "gradle-model")]
#[command(version)]
#[command(
    about = "Extract the dependency-configuration model of a Gradle build",
    long_about = None
)]
#[command(group(ArgGroup::new("source").args(["snapshot", "model", "project_dir"])))]
pub struct Args {
    /// Build snapshot (YAML or JSON) describing the project's host state
    #[arg(short, long, value_name = "FILE")]
    pub snapshot: Option<PathBuf>,

    /// Previously extracted model in binary form
    #[arg(short, long, value_name = "FILE")]
    pub model: Option<PathBuf>,

    /// Gradle project directory to extract from through a helper process
    #[arg(long, value_name = "DIR")]
    pub project_dir: Option<PathBuf>,

    /// Helper program run with `--init-script` in the project directory
    #[arg(long, value_name = "PROGRAM", default_value = "gradle", requires = "project_dir")]
    pub helper: String,

    /// Output format: json, binary or tree
    #[arg(short, long)]
    pub format: Option<OutputFormat>,

    /// Output file path (if not specified, outputs to stdout)
    #[arg(short, long, value_name = "FILE")]
    pub output: Option<PathBuf>,

    /// Do not resolve configurations matching these patterns (supports wildcards: *)
    /// Can be specified multiple times: -e "test*" -e "kapt"
    #[arg(short, long = "exclude", value_name = "PATTERN")]
    pub exclude: Vec<String>,

    /// Configuration file (defaults to gradle-model.config.yml next to the snapshot)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Exit with status 1 when any configuration failed to resolve
    #[arg(long)]
    pub fail_on_resolution_error: bool,

    /// Skip settings extraction
    #[arg(long)]
    pub no_settings: bool,

    /// Print debug logging to stderr
    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    /// Only print errors
    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn parse_args() -> Self {
        Self::parse()
    }

    pub fn cli_options(&self) -> CliOptions {
        CliOptions {
            format: self.format,
            exclude: self.exclude.clone(),
            fail_on_resolution_error: self.fail_on_resolution_error,
            no_settings: self.no_settings,
        }
    }
}
