//! Pactum CLI — contract summaries from merge results.
//!
//! Usage:
//!   pactum summarize <FILES>... [--format json|text]
//!   pactum dates <FILE>
//!   pactum parties <FILE>
//!   pactum narrative <FILE>

use clap::{Parser, Subcommand, ValueEnum};
use pactum::{ContractSummary, MergeResult, SummaryAssembler, SummaryConfig};
use std::path::{Path, PathBuf};
use tracing::Level;

#[derive(Parser)]
#[command(
    name = "pactum",
    version,
    about = "Contract semantic extraction and summary synthesis"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Months added to a start date found in contract text
    #[arg(long, global = true, default_value_t = 12)]
    placeholder_term_months: u32,

    /// Narrative used when a merge result has no prose
    #[arg(long, global = true)]
    sentinel: Option<String>,
}

#[derive(Subcommand)]
enum Commands {
    /// Build full summaries for one or more merge result files
    Summarize {
        /// Merge result files (.json, .yaml, .yml)
        #[arg(required = true)]
        files: Vec<PathBuf>,
        /// Output format
        #[arg(long, value_enum, default_value_t = Format::Json)]
        format: Format,
    },
    /// Print the effective date range and its source
    Dates {
        file: PathBuf,
    },
    /// Print the contracting parties and their source
    Parties {
        file: PathBuf,
    },
    /// Print the narrative only
    Narrative {
        file: PathBuf,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Text,
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => Level::WARN,
        1 => Level::INFO,
        2 => Level::DEBUG,
        _ => Level::TRACE,
    };
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_max_level(level)
        .with_target(false)
        .init();
}

fn load(path: &Path) -> Option<MergeResult> {
    match MergeResult::from_path(path) {
        Ok(merge) => Some(merge),
        Err(e) => {
            eprintln!("Error: {}", e);
            None
        }
    }
}

fn render_text(path: &Path, summary: &ContractSummary) -> String {
    let mut out = format!("== {}\n", path.display());

    match (summary.parties(), summary.parties_source()) {
        (Some(parties), Some(source)) => {
            out.push_str(&format!("Parties [{}]: {}\n", source.label(), parties.join("; ")));
        }
        _ => out.push_str("Parties: not detected\n"),
    }

    match (summary.date_range(), summary.dates_source()) {
        (Some(range), Some(source)) => {
            out.push_str(&format!(
                "Effective [{}]: {} to {}\n",
                source.label(),
                range.start(),
                range.end()
            ));
        }
        _ => out.push_str("Effective: not detected\n"),
    }

    out.push('\n');
    out.push_str(summary.narrative());
    out.push('\n');
    out
}

fn cmd_summarize(assembler: &SummaryAssembler, files: &[PathBuf], format: Format) -> i32 {
    let mut code = 0;
    let mut views = Vec::with_capacity(files.len());

    for path in files {
        let Some(merge) = load(path) else {
            code = 1;
            continue;
        };
        let summary = assembler.build(&merge);
        match format {
            Format::Json => views.push(serde_json::json!({
                "file": path.display().to_string(),
                "summary": summary.to_view(),
            })),
            Format::Text => println!("{}", render_text(path, &summary)),
        }
    }

    if let Format::Json = format {
        match serde_json::to_string_pretty(&views) {
            Ok(json) => println!("{}", json),
            Err(e) => {
                eprintln!("Error: {}", e);
                return 1;
            }
        }
    }
    code
}

fn cmd_dates(assembler: &SummaryAssembler, file: &Path) -> i32 {
    let Some(merge) = load(file) else {
        return 1;
    };
    let summary = assembler.build(&merge);
    match (summary.date_range(), summary.dates_source()) {
        (Some(range), Some(source)) => {
            println!("{}\t{}\t{}", range.start(), range.end(), source);
        }
        _ => println!("No effective dates found."),
    }
    0
}

fn cmd_parties(assembler: &SummaryAssembler, file: &Path) -> i32 {
    let Some(merge) = load(file) else {
        return 1;
    };
    let summary = assembler.build(&merge);
    match (summary.parties(), summary.parties_source()) {
        (Some(parties), Some(source)) => {
            for party in parties {
                println!("{}\t{}", party, source);
            }
        }
        _ => println!("No parties found."),
    }
    0
}

fn cmd_narrative(assembler: &SummaryAssembler, file: &Path) -> i32 {
    let Some(merge) = load(file) else {
        return 1;
    };
    println!("{}", assembler.build(&merge).narrative());
    0
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    let mut config = SummaryConfig::new().with_placeholder_term_months(cli.placeholder_term_months);
    if let Some(sentinel) = cli.sentinel {
        config = config.with_sentinel_narrative(sentinel);
    }
    let assembler = SummaryAssembler::with_config(config);

    let code = match cli.command {
        Commands::Summarize { files, format } => cmd_summarize(&assembler, &files, format),
        Commands::Dates { file } => cmd_dates(&assembler, &file),
        Commands::Parties { file } => cmd_parties(&assembler, &file),
        Commands::Narrative { file } => cmd_narrative(&assembler, &file),
    };
    std::process::exit(code);
}
