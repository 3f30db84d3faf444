use gradle_model::adapters::outbound::console::StderrProgressReporter;
use gradle_model::adapters::outbound::filesystem::ModelFileReader;
use gradle_model::adapters::outbound::snapshot::{SnapshotProjectSource, SnapshotReader};
use gradle_model::adapters::outbound::tooling::ToolingConnection;
use gradle_model::application::dto::{ExtractionRequest, ExtractionResponse};
use gradle_model::application::factories::{FormatterFactory, PresenterFactory};
use gradle_model::application::use_cases::{ExtractModelUseCase, LoadModelUseCase};
use gradle_model::cli::{Args, DEFAULT_SNAPSHOT};
use gradle_model::config::{self, ConfigFile, EffectiveOptions};
use gradle_model::shared::error::{ExitCode, ExtractionError};
use gradle_model::shared::Result;
use owo_colors::OwoColorize;
use std::path::{Path, PathBuf};
use std::process;
use tracing_subscriber::EnvFilter;

fn main() {
    let args = Args::parse_args();
    init_logging(args.verbose, args.quiet);

    match run(args) {
        Ok(code) => process::exit(code.as_i32()),
        Err(e) => {
            eprintln!("\n{} {}\n", "❌".red(), "An error occurred:".red().bold());
            eprintln!("{}", e);

            let mut source = e.source();
            while let Some(err) = source {
                eprintln!("\n{} {}", "Caused by:".yellow(), err);
                source = err.source();
            }

            eprintln!();
            process::exit(ExitCode::ApplicationError.as_i32());
        }
    }
}

/// `--verbose` means debug, `--quiet` errors only; otherwise `RUST_LOG`,
/// falling back to info.
fn init_logging(verbose: bool, quiet: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else if quiet {
        EnvFilter::new("error")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(false)
        .try_init();
}

enum Source {
    Snapshot(PathBuf),
    Model(PathBuf),
    ProjectDir(PathBuf),
}

impl Source {
    fn from_args(args: &Args) -> Self {
        if let Some(path) = &args.model {
            Source::Model(path.clone())
        } else if let Some(dir) = &args.project_dir {
            Source::ProjectDir(dir.clone())
        } else {
            Source::Snapshot(args.snapshot.clone().unwrap_or_else(|| PathBuf::from(DEFAULT_SNAPSHOT)))
        }
    }

    /// Directory searched for `gradle-model.config.yml`.
    fn config_dir(&self) -> PathBuf {
        match self {
            Source::Snapshot(path) | Source::Model(path) => match path.parent() {
                Some(parent) if parent != Path::new("") => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
            Source::ProjectDir(dir) => dir.clone(),
        }
    }
}

fn run(args: Args) -> Result<ExitCode> {
    let source = Source::from_args(&args);
    let config = load_config(&args, &source)?;
    let options = config::merge(args.cli_options(), config)?;

    let reporter = || {
        if args.quiet {
            StderrProgressReporter::quiet()
        } else {
            StderrProgressReporter::new()
        }
    };

    let response = match &source {
        Source::Snapshot(path) => extract_from_snapshot(path, &options, reporter())?,
        Source::Model(path) => LoadModelUseCase::new(ModelFileReader::new(path.clone()), reporter()).execute()?,
        Source::ProjectDir(dir) => {
            validate_project_path(dir)?;
            LoadModelUseCase::new(ToolingConnection::new(&args.helper, dir.clone()), reporter()).execute()?
        }
    };

    if !args.quiet {
        eprintln!("{}", FormatterFactory::progress_message(options.format));
    }
    let formatted_output = FormatterFactory::create(options.format).format(&response.model)?;
    PresenterFactory::create(args.output.clone()).present(&formatted_output)?;

    if options.fail_on_resolution_error && response.has_failures() {
        eprintln!(
            "{} {} configuration(s) failed to resolve: {}",
            "❌".red(),
            response.failed_configurations.len(),
            response.failed_configurations.join(", ")
        );
        return Ok(ExitCode::ResolutionFailures);
    }
    Ok(ExitCode::Success)
}

fn load_config(args: &Args, source: &Source) -> Result<Option<ConfigFile>> {
    if let Some(path) = &args.config {
        return config::load_config_from_path(path).map(Some);
    }
    let dir = source.config_dir();
    let discovered = config::discover_config(&dir)?;
    if discovered.is_some() && !args.quiet {
        eprintln!(
            "📄 Auto-discovered config file: {}",
            dir.join(config::CONFIG_FILENAME).display()
        );
    }
    Ok(discovered)
}

fn extract_from_snapshot(
    path: &Path,
    options: &EffectiveOptions,
    reporter: StderrProgressReporter,
) -> Result<ExtractionResponse> {
    let snapshot = SnapshotReader::new().read(path)?;
    let source = SnapshotProjectSource::new(snapshot);
    let request = ExtractionRequest::new(options.exclude_patterns.clone(), options.include_settings);
    ExtractModelUseCase::new(reporter).execute(&source, &request)
}

fn validate_project_path(path: &Path) -> Result<()> {
    if !path.exists() {
        return Err(ExtractionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Directory does not exist".to_string(),
        }
        .into());
    }

    let metadata = std::fs::symlink_metadata(path).map_err(|e| ExtractionError::InvalidProjectPath {
        path: path.to_path_buf(),
        reason: format!("Failed to read path metadata: {}", e),
    })?;

    if metadata.is_symlink() {
        return Err(ExtractionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Security: Project path is a symbolic link. For security reasons, symbolic links are not allowed."
                .to_string(),
        }
        .into());
    }

    if !path.is_dir() {
        return Err(ExtractionError::InvalidProjectPath {
            path: path.to_path_buf(),
            reason: "Not a directory".to_string(),
        }
        .into());
    }

    Ok(())
}
