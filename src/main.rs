//! Triage - heuristic safety screening for medical-query assistants.
//!
//! Embeds the library's classifiers in a small offline review CLI: score
//! recorded query/response exchanges from a JSON file, or check a single
//! response from the command line.

use anyhow::Context;
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::collections::HashMap;
use std::path::{Path, PathBuf};

use triage::detection;
use triage::format::format_response;
use triage::pipeline::ReviewPipeline;
use triage::store::{FsReviewStore, DEFAULT_LOG_PATH};
use triage::strategy::BEST_OVERALL_KEY;

#[derive(Parser)]
#[command(name = "triage")]
#[command(version = "0.1.0")]
#[command(about = "Heuristic safety screening for medical-query assistants", long_about = None)]
#[command(propagate_version = true)]
struct Cli {
    /// Verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Review recorded query/response exchanges from a JSON file
    Review {
        /// Queries file: a JSON array of {query, response, expected_concepts?}
        #[arg(short, long, default_value = "evaluation/input_queries.json")]
        queries: PathBuf,

        /// Results output file
        #[arg(short, long, default_value = "evaluation/output_logs.json")]
        output: PathBuf,

        /// Example log to append reviewed exchanges to
        #[arg(short, long, default_value = DEFAULT_LOG_PATH)]
        log: PathBuf,

        /// JSON file mapping analysis keys to strategy names (must carry "best_overall")
        #[arg(short, long)]
        analysis: Option<PathBuf>,
    },

    /// Score a single response and print the annotated result
    Check {
        /// The model response to score
        response: String,

        /// The query that produced the response
        #[arg(short, long, default_value = "")]
        query: String,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    match cli.command {
        Commands::Review {
            queries,
            output,
            log,
            analysis,
        } => run_review(&queries, &output, log, analysis.as_deref()),
        Commands::Check { response, query } => {
            run_check(&response, &query);
            Ok(())
        }
    }
}

fn init_tracing(verbose: bool) {
    let default_level = if verbose { "debug" } else { "warn" };
    let filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new(default_level));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

/// Strategy analysis used when no analysis file is supplied.
fn default_analysis() -> HashMap<String, String> {
    HashMap::from([(BEST_OVERALL_KEY.to_string(), "zero_shot".to_string())])
}

fn load_analysis(path: Option<&Path>) -> HashMap<String, String> {
    let Some(path) = path else {
        return default_analysis();
    };

    let parsed = std::fs::read_to_string(path)
        .map_err(anyhow::Error::from)
        .and_then(|contents| serde_json::from_str(&contents).map_err(anyhow::Error::from));

    match parsed {
        Ok(map) => map,
        Err(e) => {
            eprintln!(
                "{}",
                format!("Error reading analysis file {}: {e}", path.display()).red()
            );
            default_analysis()
        }
    }
}

fn run_review(
    queries: &Path,
    output: &Path,
    log: PathBuf,
    analysis: Option<&Path>,
) -> anyhow::Result<()> {
    let store = FsReviewStore::new(log);
    let mut pipeline = ReviewPipeline::new(store, load_analysis(analysis));

    let report = pipeline
        .run(queries, output)
        .context("review run failed")?;

    println!(
        "{} exchange(s) reviewed, {} skipped",
        report.reviewed, report.skipped
    );
    let flagged = report.flagged();
    if flagged > 0 {
        println!(
            "{}",
            format!("{flagged} response(s) flagged for unreliable content").yellow()
        );
    }
    println!("Results written to {}", output.display());

    Ok(())
}

fn run_check(response: &str, query: &str) {
    let report = detection::detect(response, query, None);
    print!("{}", format_response(response, query, &report));
}
