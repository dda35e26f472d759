//! Decision Matrix CLI
//!
//! # Usage
//! ```bash
//! decision-matrix <problem> [--dir problems] [--format json|yaml]
//! decision-matrix --list
//! ```

use std::error::Error;
use std::io;
use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use decision_matrix::adapters::{FileProblemSource, ReportFormat, WriterReportSink};
use decision_matrix::application::{
    AnalysisSettings, EvaluateProblemCommand, EvaluateProblemHandler, ListProblemsHandler,
    ListProblemsQuery,
};
use decision_matrix::config::{AppConfig, LogFormat, LoggingConfig};
use decision_matrix::domain::foundation::DomainError;

/// Evaluate a decision problem with the classical decision criteria
#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Problem name or file name inside the problems directory
    #[arg(required_unless_present = "list")]
    problem: Option<String>,

    /// List available problems and exit
    #[arg(short, long)]
    list: bool,

    /// Problems directory (overrides configuration)
    #[arg(short, long)]
    dir: Option<String>,

    /// Report format (overrides configuration)
    #[arg(short, long)]
    format: Option<ReportFormat>,
}

fn main() -> ExitCode {
    let args = Args::parse();

    let config = match AppConfig::load() {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", e);
            return ExitCode::FAILURE;
        }
    };

    if let Err(e) = config.validate() {
        eprintln!("Invalid configuration: {}", e);
        return ExitCode::FAILURE;
    }

    if let Err(e) = init_tracing(&config.logging) {
        eprintln!("{}", e);
        return ExitCode::FAILURE;
    }

    match run(args, config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "Evaluation failed");
            ExitCode::FAILURE
        }
    }
}

fn init_tracing(logging: &LoggingConfig) -> Result<(), Box<dyn Error + Send + Sync>> {
    let filter = logging.env_filter()?;
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr);

    match logging.format {
        LogFormat::Json => builder.json().try_init()?,
        LogFormat::Pretty => builder.with_target(false).try_init()?,
    }
    Ok(())
}

fn run(args: Args, config: AppConfig) -> Result<(), Box<dyn Error>> {
    let problems_dir = args.dir.unwrap_or(config.analysis.problems_dir.clone());
    let source = Arc::new(FileProblemSource::new(&problems_dir));

    if args.list {
        for name in ListProblemsHandler::new(source).handle(ListProblemsQuery)? {
            println!("{}", name);
        }
        return Ok(());
    }

    let Some(problem) = args.problem else {
        return Err("a problem name is required".into());
    };

    let format = args.format.unwrap_or(config.output.format);
    let sink = Arc::new(WriterReportSink::new(io::stdout(), format, config.output.pretty));

    let settings = AnalysisSettings {
        default_alpha: config.analysis.hurwicz_alpha()?,
        probability_tolerance: config.analysis.probability_tolerance,
    };

    tracing::debug!(problems_dir = %problems_dir, problem = %problem, "Evaluating");

    EvaluateProblemHandler::with_settings(source, sink, settings)
        .handle(EvaluateProblemCommand::new(problem))
        .map_err(DomainError::from)?;

    Ok(())
}
