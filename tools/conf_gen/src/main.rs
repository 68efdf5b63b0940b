/// Namelist generator for the baroclinic wave channel test.
///
/// With no arguments, writes `<resolution>/<case>/<scheme>[_FCT]/{init,run}.conf`
/// for every combination under the current directory.
use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};
use barocwave_core::{ConfGenerator, GenConfig, GenerationReport, Selection};
use clap::{ArgAction, Parser};
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::{fmt, EnvFilter};

// ── CLI ──────────────────────────────────────────────────────────────────────

#[derive(Parser, Debug)]
#[command(
    name = "conf_gen",
    about = "Generate init.conf / run.conf permutations for the baroclinic wave test"
)]
struct Args {
    /// Root directory the case tree is written under.
    #[arg(short, long, default_value = ".")]
    output_root: PathBuf,

    /// JSON file overriding run constants (durations, history interval,
    /// dynamical core type, wind perturbation).
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Generate only this resolution (repeatable, e.g. 400km).
    #[arg(long = "resolution", value_name = "TAG")]
    resolutions: Vec<String>,

    /// Generate only this case (repeatable: CTRL, STEADY).
    #[arg(long = "case", value_name = "TAG")]
    cases: Vec<String>,

    /// Generate only this flux scheme (repeatable, FVM_CD2 or CD2).
    #[arg(long = "scheme", value_name = "TAG")]
    schemes: Vec<String>,

    /// List target directories without writing anything.
    #[arg(long)]
    dry_run: bool,

    /// Write a JSON manifest of every generated directory.
    #[arg(long, value_name = "FILE")]
    manifest: Option<PathBuf>,

    /// Emit newline-delimited JSON log lines.
    #[arg(long)]
    log_json: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,
}

impl Args {
    fn log_level(&self) -> Level {
        match self.verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    }
}

// ── Logging ──────────────────────────────────────────────────────────────────

/// `RUST_LOG` takes precedence over `level` when set.
fn init_tracing(json: bool, level: Level) {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(level.as_str()));

    if json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr).json())
            .try_init()
            .ok();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(fmt::layer().with_target(false).with_writer(std::io::stderr))
            .try_init()
            .ok();
    }
}

// ── Run ──────────────────────────────────────────────────────────────────────

fn run(args: &Args) -> Result<GenerationReport> {
    let config = match &args.config {
        Some(path) => GenConfig::load(path)
            .with_context(|| format!("Failed to load config {}", path.display()))?,
        None => GenConfig::default(),
    };

    let selection = Selection::from_tags(&args.resolutions, &args.cases, &args.schemes)
        .context("Invalid selection")?;
    tracing::info!(
        combinations = selection.len(),
        root = %args.output_root.display(),
        atmos_dyn_type = config.atmos_dyn_type.as_str(),
        "starting generation"
    );

    let generator = ConfGenerator::new(&args.output_root, config).dry_run(args.dry_run);
    let report = generator
        .generate(&selection)
        .with_context(|| format!("Generation failed under {}", args.output_root.display()))?;

    if let Some(path) = &args.manifest {
        let json = serde_json::to_string_pretty(&report)?;
        fs::write(path, json).with_context(|| format!("Write failed: {}", path.display()))?;
        tracing::info!(manifest = %path.display(), "manifest written");
    }

    Ok(report)
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.log_json, args.log_level());

    let report = run(&args)?;
    if args.dry_run {
        for artifact in &report.artifacts {
            println!("{}", artifact.dir.display());
        }
    }
    Ok(())
}
