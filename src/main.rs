use anyhow::{Context, Result};
use clap::Parser;
use std::path::PathBuf;
use stemulator_core::{init_logging, EngineConfig, SimulationEngine};
use stemulator_io::{to_json_pretty, write_evidence_csv, LabLibrary};
use stemulator_lib::LabSession;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Engine config file path
    #[arg(short, long, default_value = "config.toml")]
    config: PathBuf,

    /// Lab JSON file or directory (built-in sample lab when omitted)
    #[arg(short, long)]
    labs: Option<PathBuf>,

    /// Lab to run (first lab when omitted)
    #[arg(long)]
    lab_id: Option<String>,

    /// Zero-based index of the lab part to apply
    #[arg(short, long, default_value_t = 0)]
    part: usize,

    /// Generations to run
    #[arg(short, long, default_value_t = 10)]
    generations: usize,

    /// Seed for a reproducible run
    #[arg(long)]
    seed: Option<u64>,

    /// Write the evidence CSV here
    #[arg(long)]
    evidence: Option<PathBuf>,

    /// Print the feedback snapshot as JSON when done
    #[arg(long)]
    snapshot: bool,

    /// Log filter used when RUST_LOG is unset
    #[arg(long, default_value = "info")]
    log: String,
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(&args.log);

    let mut config = EngineConfig::load(&args.config)?;
    if let Some(seed) = args.seed {
        config.seed = Some(seed);
    }

    let library = match &args.labs {
        Some(path) => LabLibrary::load(path)
            .with_context(|| format!("failed to load labs from {}", path.display()))?,
        None => LabLibrary::builtin(),
    };
    let lab = match &args.lab_id {
        Some(id) => library
            .get(id)
            .with_context(|| format!("lab '{id}' not found"))?,
        None => library.first().context("no labs available")?,
    }
    .clone();

    tracing::info!(lab = %lab.lab_id, title = %lab.title(), "Lab selected");

    let engine = SimulationEngine::new(config)?;
    let mut session = if lab.lab_parts.is_empty() {
        LabSession::new(engine, lab)
    } else {
        LabSession::starting_at(engine, lab, args.part)?
    };
    if let Some(part) = session.current_part() {
        tracing::info!(part = part.part_id, title = %part.title, "Part selected");
    }

    for _ in 0..args.generations {
        let report = session.run_generation();
        tracing::info!(
            generation = report.generation,
            entered = report.population_before,
            survivors = report.survivors,
            survival_rate = report.survival_rate,
            "Generation"
        );
        if report.extinct {
            tracing::warn!(generation = report.generation, "Population extinct, stopping");
            break;
        }
    }

    if let Some(path) = &args.evidence {
        let file = std::fs::File::create(path)
            .with_context(|| format!("failed to create {}", path.display()))?;
        write_evidence_csv(std::io::BufWriter::new(file), &session.state())?;
        tracing::info!(path = %path.display(), "Evidence written");
    }

    let metrics = session.engine().metrics();
    tracing::info!(
        generations = metrics.generations(),
        extinctions = metrics.extinctions(),
        elapsed_ms = metrics.elapsed().as_millis() as u64,
        "Session finished"
    );

    if args.snapshot {
        println!("{}", to_json_pretty(&session.snapshot())?);
    }

    Ok(())
}
