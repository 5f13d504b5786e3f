use anyhow::{Context, Result};
use chrono::NaiveDate;
use clap::{Args as ClapArgs, Parser, Subcommand};
use serde_json::json;
use std::io::Read;
use std::path::PathBuf;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use task_triage::config::ScoringConfig;
use task_triage::payload::{load_tasks, parse_task_list, TaskBatch};
use task_triage::{Analyzer, ScoringContext, StrategyName};

#[derive(Parser, Debug)]
#[command(name = "task-triage", version, about = "Rank tasks and report dependency cycles")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Score every task and report cycles.
    Analyze(RunArgs),
    /// Top suggestions with a short explanation.
    Suggest(RunArgs),
}

#[derive(ClapArgs, Debug)]
struct RunArgs {
    /// JSON body: a task list, `{"tasks": [...], "strategy": ...}`, or one task.
    /// Reads stdin when omitted or `-`.
    #[arg(conflicts_with = "tasks")]
    input: Option<PathBuf>,

    /// Inline JSON task list, e.g. `--tasks '[{"id": 1}]'`.
    #[arg(long)]
    tasks: Option<String>,

    /// Strategy override: smart, urgency, effort, importance.
    /// Falls back to the body's `strategy`, then the config default.
    #[arg(long)]
    strategy: Option<String>,

    /// Reference date (YYYY-MM-DD); defaults to the local date.
    #[arg(long)]
    today: Option<NaiveDate>,

    /// TOML scoring configuration.
    #[arg(long)]
    config: Option<PathBuf>,

    #[arg(long)]
    pretty: bool,
}

fn main() {
    init_tracing();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("{}", json!({ "error": e.to_string(), "details": format!("{e:#}") }));
        std::process::exit(1);
    }
}

fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<()> {
    let (suggest, args) = match cli.command {
        Command::Analyze(args) => (false, args),
        Command::Suggest(args) => (true, args),
    };
    let config = load_config(args.config.as_ref())?;
    let batch = match args.tasks.as_deref() {
        Some(encoded) => TaskBatch {
            tasks: parse_task_list(encoded).context("decode --tasks")?,
            strategy: None,
        },
        None => {
            let body = read_input(args.input.as_ref())?;
            load_tasks(&body).context("decode request body")?
        }
    };

    let strategy = args
        .strategy
        .as_deref()
        .map(StrategyName::from_name)
        .or(batch.strategy);
    let context = args
        .today
        .map(ScoringContext::on)
        .unwrap_or_else(ScoringContext::local_today);
    tracing::debug!(?strategy, today = %context.today, tasks = batch.tasks.len(), "request");

    let analyzer = Analyzer::new(config);
    let output = if suggest {
        let suggestions = analyzer
            .suggest(batch.tasks, strategy, &context)
            .context("Scoring failed")?;
        json!({ "suggestions": suggestions })
    } else {
        let report = analyzer
            .analyze(batch.tasks, strategy, &context)
            .context("Scoring failed")?;
        serde_json::to_value(report)?
    };

    let rendered = if args.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{rendered}");
    Ok(())
}

fn load_config(path: Option<&PathBuf>) -> Result<ScoringConfig> {
    let Some(path) = path else {
        return Ok(ScoringConfig::default());
    };
    let text = std::fs::read_to_string(path)
        .with_context(|| format!("read config {}", path.display()))?;
    let config: ScoringConfig =
        toml::from_str(&text).with_context(|| format!("parse config {}", path.display()))?;
    config.validate()?;
    Ok(config)
}

fn read_input(path: Option<&PathBuf>) -> Result<Vec<u8>> {
    match path {
        Some(p) if p.as_os_str() != "-" => {
            std::fs::read(p).with_context(|| format!("read input {}", p.display()))
        }
        _ => {
            let mut buf = Vec::new();
            std::io::stdin()
                .read_to_end(&mut buf)
                .context("read stdin")?;
            Ok(buf)
        }
    }
}
