//! Call graph verifier CLI
//!
//! # Usage
//!
//! ```bash
//! # Verify assertions against a recorded analyzer run
//! cgverify check --snapshot run.json --assertions expect.yaml
//!
//! # Fail on any unreachable source method, print JSON
//! cgverify check --snapshot run.json --assertions expect.yaml --strict --format json
//!
//! # List declared methods of a loader
//! cgverify methods --snapshot run.json --loader Source
//! ```
//!
//! Exit codes: 0 verification passed, 1 verification failed, 2 fatal error.

use anyhow::{Context, Result};
use callgraph_verifier::config::{Preset, VerifierConfig};
use callgraph_verifier::features::call_graph::{
    AnalysisScope, AnalyzerSnapshot, Entrypoint, SnapshotCallGraphBuilder,
};
use callgraph_verifier::features::verification::{load_assertions, VerificationDriver};
use callgraph_verifier::SOURCE_LOADER;
use clap::{Args, Parser, Subcommand, ValueEnum};
use std::path::{Path, PathBuf};
use std::process::ExitCode;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "cgverify")]
#[command(about = "Verify call graph edges, reachability and SSA bindings of an analyzer run", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Run assertions against an analyzer snapshot
    Check(CheckArgs),

    /// List declared methods of a loader
    Methods {
        /// Analyzer snapshot (JSON)
        #[arg(short, long)]
        snapshot: PathBuf,

        #[arg(short, long, default_value = SOURCE_LOADER)]
        loader: String,
    },
}

#[derive(Args)]
struct CheckArgs {
    /// Analyzer snapshot (JSON)
    #[arg(short, long)]
    snapshot: PathBuf,

    /// Assertion file (YAML, or JSON by extension)
    #[arg(short, long)]
    assertions: PathBuf,

    /// Configuration file (YAML, `version: 1`)
    #[arg(short, long, conflicts_with = "preset")]
    config: Option<PathBuf>,

    /// Configuration preset
    #[arg(long)]
    preset: Option<Preset>,

    /// Fail when any declared source method is unreachable
    #[arg(long)]
    strict: bool,

    /// Entrypoint class (its `main` method); replaces the snapshot's entrypoints
    #[arg(short, long = "entrypoint")]
    entrypoints: Vec<String>,

    /// Include IR of every reachable method in the report
    #[arg(long)]
    dump_ir: bool,

    /// Evaluate assertions in parallel
    #[arg(long)]
    parallel: bool,

    #[arg(long, value_enum, default_value = "text")]
    format: OutputFormat,
}

#[derive(Clone, Copy, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let result = match cli.command {
        Commands::Check(args) => check(args),
        Commands::Methods { snapshot, loader } => methods(&snapshot, &loader).map(|_| true),
    };

    match result {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(e) => {
            eprintln!("error: {:#}", e);
            ExitCode::from(2)
        }
    }
}

fn check(args: CheckArgs) -> Result<bool> {
    let mut config = match &args.config {
        Some(path) => VerifierConfig::from_yaml(path)
            .with_context(|| format!("loading config {}", path.display()))?,
        None => VerifierConfig::preset(args.preset.unwrap_or_default()),
    };
    if args.strict {
        config = config.with_strict_reachability(true);
    }
    if args.dump_ir {
        config = config.with_dump_ir(true);
    }
    if args.parallel {
        config = config.with_parallel_assertions(true);
    }

    let snapshot = AnalyzerSnapshot::from_path(&args.snapshot)
        .with_context(|| format!("loading snapshot {}", args.snapshot.display()))?;
    let universe = snapshot.universe().context("building type universe")?;
    let assertions = load_assertions(&args.assertions)
        .with_context(|| format!("loading assertions {}", args.assertions.display()))?;

    let scope = if args.entrypoints.is_empty() {
        snapshot.default_scope()
    } else {
        args.entrypoints
            .iter()
            .fold(AnalysisScope::new(), |scope, class| {
                scope.with_entrypoint(Entrypoint::main_of(class))
            })
    };

    let driver = VerificationDriver::new(SnapshotCallGraphBuilder::new(snapshot), config);
    let report = driver.run(&scope, &universe, &assertions)?;

    match args.format {
        OutputFormat::Text => print!("{}", report),
        OutputFormat::Json => println!("{}", serde_json::to_string_pretty(&report)?),
    }
    Ok(report.passed)
}

fn methods(snapshot: &Path, loader: &str) -> Result<()> {
    let snapshot = AnalyzerSnapshot::from_path(snapshot)
        .with_context(|| format!("loading snapshot {}", snapshot.display()))?;
    let universe = snapshot.universe().context("building type universe")?;
    for method in universe.iterate_declared_methods(loader)? {
        let mut flags = Vec::new();
        if method.is_abstract {
            flags.push("abstract");
        }
        if method.is_interface_member {
            flags.push("interface");
        }
        if flags.is_empty() {
            println!("{}", method.handle.descriptor());
        } else {
            println!("{}  [{}]", method.handle.descriptor(), flags.join(", "));
        }
    }
    Ok(())
}
