#![forbid(unsafe_code)]
#![deny(clippy::all)]
#![warn(
    clippy::nursery,
    clippy::pedantic,
    clippy::unwrap_used,
    clippy::expect_used
)]
#![allow(clippy::module_name_repetitions)]

use std::fs::File;
use std::io::{self, BufReader, Write};
use std::path::{Path, PathBuf};
use std::time::Instant;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use csv::WriterBuilder;
use glob::GlobError;
use itertools::Itertools;
use rayon::prelude::*;
use serde::Serialize;
use strum_macros::{Display, EnumString};
use tracing::{debug, error, info, warn, Level};
use tracing_subscriber::FmtSubscriber;

use linescore::schedule::Snapshot;
use linescore::{parse, BoxScore, ParseError, ResolveName, TeamNameTable};

const ABOUT: &str = "Normalizes provider box score text into fixed-width line scores.";

#[derive(Debug, Eq, PartialEq, Copy, Clone, Display, EnumString)]
#[strum(serialize_all = "snake_case")]
enum OutputFormat {
    Table,
    Json,
    Csv,
}

#[derive(Parser, Debug)]
#[command(name = "linescore", about = ABOUT)]
struct Opt {
    /// JSON object mapping provider team labels to display labels.
    /// Defaults to the built-in CPBL table.
    #[arg(short, long, global = true)]
    teams: Option<PathBuf>,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Parse box score result text files
    LineScore {
        /// Glob pattern of result text files
        #[arg(short, long)]
        input: String,

        #[arg(short, long, default_value_t = OutputFormat::Table)]
        format: OutputFormat,
    },
    /// Summarize a saved scoreboard snapshot
    Games {
        #[arg(short, long)]
        input: PathBuf,
    },
}

#[derive(Debug, Serialize)]
struct ParsedFile {
    source: PathBuf,
    box_score: BoxScore,
}

fn load_team_names(path: Option<&Path>) -> Result<TeamNameTable> {
    let Some(path) = path else {
        debug!("No team table provided, using built-in CPBL names");
        return Ok(TeamNameTable::cpbl());
    };
    let file = File::open(path)
        .with_context(|| format!("Failed to open team table {}", path.display()))?;
    let teams = TeamNameTable::from_json_reader(BufReader::new(file))?;
    info!("Loaded {} team names from {}", teams.len(), path.display());
    Ok(teams)
}

struct FileProcessor {
    teams: TeamNameTable,
}

impl FileProcessor {
    pub const fn new(teams: TeamNameTable) -> Self {
        Self { teams }
    }

    fn process_file(input_path: &Path, teams: &TeamNameTable) -> Result<Option<ParsedFile>> {
        debug!("Processing file {}", input_path.display());
        let raw_text = std::fs::read_to_string(input_path)
            .with_context(|| format!("Failed to read {}", input_path.display()))?;
        match parse(&raw_text, teams) {
            Ok(box_score) => Ok(Some(ParsedFile {
                source: input_path.to_path_buf(),
                box_score,
            })),
            Err(e @ ParseError::EmptyInput) => {
                error!("{}: {}", input_path.display(), e);
                Ok(None)
            }
        }
    }

    pub fn par_process_files(&self, pattern: &str) -> Result<Vec<ParsedFile>> {
        let mut files = glob::glob(pattern)
            .with_context(|| format!("Invalid input pattern {pattern}"))?
            .collect::<Result<Vec<PathBuf>, GlobError>>()?;
        files.par_sort();
        if files.is_empty() {
            warn!("No files matched {}", pattern);
        }
        let parsed = files
            .par_iter()
            .map(|f| Self::process_file(f, &self.teams))
            .collect::<Result<Vec<Option<ParsedFile>>>>()?;
        Ok(parsed.into_iter().flatten().collect())
    }
}

fn write_tables(out: &mut impl Write, parsed: &[ParsedFile]) -> Result<()> {
    for file in parsed {
        writeln!(out, "# {}", file.source.display())?;
        writeln!(out, "{}", file.box_score)?;
    }
    Ok(())
}

fn write_json(out: &mut impl Write, parsed: &[ParsedFile]) -> Result<()> {
    serde_json::to_writer_pretty(&mut *out, parsed).context("Failed to write JSON")?;
    writeln!(out)?;
    Ok(())
}

fn write_csv(out: impl Write, parsed: &[ParsedFile]) -> Result<()> {
    let inning_count = parsed
        .iter()
        .map(|f| f.box_score.inning_columns())
        .max()
        .unwrap_or_default();
    let mut csv = WriterBuilder::new().has_headers(false).from_writer(out);

    let header = ["source", "team"]
        .into_iter()
        .map(String::from)
        .chain((1..=inning_count).map(|i| format!("inning_{i}")))
        .chain(["runs", "hits", "errors"].into_iter().map(String::from))
        .collect_vec();
    csv.write_record(&header)?;

    for file in parsed {
        let source = file.source.display().to_string();
        for line in file.box_score.iter() {
            let innings = (0..inning_count).map(|i| {
                line.innings()
                    .get(i)
                    .copied()
                    .flatten()
                    .map(|r| r.to_string())
                    .unwrap_or_default()
            });
            let record = [source.clone(), line.display_name().to_string()]
                .into_iter()
                .chain(innings)
                .chain([line.runs(), line.hits(), line.errors()].map(|s| s.to_string()))
                .collect_vec();
            csv.write_record(&record)?;
        }
    }
    csv.flush().context("Failed to flush CSV output")
}

fn run_line_score(pattern: &str, format: OutputFormat, teams: TeamNameTable) -> Result<()> {
    let parsed = FileProcessor::new(teams).par_process_files(pattern)?;
    info!("Parsed {} box scores", parsed.len());

    let stdout = io::stdout();
    let mut out = stdout.lock();
    match format {
        OutputFormat::Table => write_tables(&mut out, &parsed),
        OutputFormat::Json => write_json(&mut out, &parsed),
        OutputFormat::Csv => write_csv(out, &parsed),
    }
}

fn run_games(input: &Path, teams: &impl ResolveName) -> Result<()> {
    let file = File::open(input)
        .with_context(|| format!("Failed to open snapshot {}", input.display()))?;
    let snapshot = Snapshot::from_json_reader(BufReader::new(file))?;
    let games = snapshot.games();
    if games.len() != snapshot.total_games {
        debug!(
            "Snapshot lists {} games but {} remain after removing duplicates",
            snapshot.total_games,
            games.len()
        );
    }
    println!("{}", snapshot.render(teams));
    Ok(())
}

#[allow(clippy::expect_used)]
fn main() {
    let subscriber = FmtSubscriber::builder()
        .with_max_level(Level::INFO)
        .with_writer(io::stderr)
        .finish();
    tracing::subscriber::set_global_default(subscriber).expect("Failed to initialize trace");

    let start = Instant::now();
    let opt: Opt = Opt::parse();

    let result = load_team_names(opt.teams.as_deref()).and_then(|teams| match &opt.command {
        Command::LineScore { input, format } => run_line_score(input, *format, teams),
        Command::Games { input } => run_games(input, &teams),
    });
    if let Err(e) = result {
        error!("{:?}", e);
        std::process::exit(1);
    }

    let end = start.elapsed();
    info!("Elapsed: {:?}", end);
}
