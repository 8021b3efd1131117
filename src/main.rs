use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::{Level, info};
use tracing_subscriber::FmtSubscriber;

use castnet::{BuilderConfig, analyze, build_network, load_network, read_transcript_csv, write_json};

#[derive(Parser)]
#[command(name = "castnet")]
#[command(author, version, about = "Character interaction network analysis for dialogue transcripts", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Build a weighted interaction network from a transcript CSV
    Build {
        /// Input transcript file (CSV with `title` and `pony` columns)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the interaction network (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Number of most frequent speakers to keep
        #[arg(long, default_value = "101")]
        top_n: usize,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// Compute centrality rankings over an interaction network
    Stats {
        /// Input interaction network file (JSON)
        #[arg(short, long)]
        input: PathBuf,

        /// Output file for the centrality report (JSON)
        #[arg(short, long)]
        output: PathBuf,

        /// Verbose output
        #[arg(short, long)]
        verbose: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Build {
            input,
            output,
            top_n,
            verbose,
        } => {
            setup_logging(verbose);
            build_command(input, output, top_n)
        }
        Commands::Stats {
            input,
            output,
            verbose,
        } => {
            setup_logging(verbose);
            stats_command(input, output)
        }
    }
}

fn setup_logging(verbose: bool) {
    let level = if verbose { Level::DEBUG } else { Level::INFO };
    let subscriber = FmtSubscriber::builder().with_max_level(level).finish();
    tracing::subscriber::set_global_default(subscriber).ok();
}

fn build_command(input: PathBuf, output: PathBuf, top_n: usize) -> Result<()> {
    info!("Loading transcript from {:?}", input);
    let rows = read_transcript_csv(&input).context("Failed to read input transcript")?;
    info!("Loaded {} rows", rows.len());

    let config = BuilderConfig {
        top_n,
        ..Default::default()
    };
    let network = build_network(&rows, &config);
    info!(
        "Built network: {} speakers, {} edges",
        network.speaker_count(),
        network.edge_count()
    );

    write_json(&network, &output).context("Failed to write interaction network")?;
    info!("Network written to {:?}", output);

    Ok(())
}

fn stats_command(input: PathBuf, output: PathBuf) -> Result<()> {
    info!("Loading interaction network from {:?}", input);
    let network = load_network(&input).context("Failed to load interaction network")?;
    info!("Loaded network with {} speakers", network.speaker_count());

    let report = analyze(&network);
    info!("Top degree: {:?}", report.degree);
    info!("Top weighted degree: {:?}", report.weighted_degree);
    info!("Top closeness: {:?}", report.closeness);
    info!("Top betweenness: {:?}", report.betweenness);

    write_json(&report, &output).context("Failed to write centrality report")?;
    info!("Report written to {:?}", output);

    Ok(())
}
