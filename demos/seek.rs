//! Terminal pathfinding demo.
//!
//! Run: cargo run --bin seek -- --rows 10 --cols 30 --density 30 --seed 7
//!      cargo run --bin seek -- --map board.txt --json

use std::io::{self, IsTerminal};
use std::path::PathBuf;

use clap::{Parser, ValueEnum};
use gridseek_core::Board;
use gridseek_demos::{BoardSpec, Report, random_board, render, summary};
use gridseek_paths::{FrontierKind, Replan, SearchConfig, Searcher, replan};
use rand::{RngExt, SeedableRng};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum FrontierArg {
    /// Binary heap open set.
    Heap,
    /// Linear-scan open set.
    Scan,
}

impl From<FrontierArg> for FrontierKind {
    fn from(a: FrontierArg) -> Self {
        match a {
            FrontierArg::Heap => FrontierKind::Heap,
            FrontierArg::Scan => FrontierKind::Scan,
        }
    }
}

/// Find the shortest 4-directional path on a grid.
#[derive(Debug, Parser)]
#[command(name = "seek", version)]
struct Cli {
    /// Load the board from a text map (`.` free, `#` obstacle, `S` start, `G` goal).
    #[arg(long, value_name = "FILE")]
    map: Option<PathBuf>,

    /// Rows of a generated board.
    #[arg(long, default_value_t = BoardSpec::default().rows)]
    rows: i32,

    /// Columns of a generated board.
    #[arg(long, default_value_t = BoardSpec::default().cols)]
    cols: i32,

    /// Obstacle percentage of a generated board.
    #[arg(long, default_value_t = BoardSpec::default().density,
          value_parser = clap::value_parser!(u8).range(0..=100))]
    density: u8,

    /// Seed for board generation. Random when omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Open-set implementation.
    #[arg(long, value_enum, default_value_t = FrontierArg::Heap)]
    frontier: FrontierArg,

    /// Print a JSON report instead of the board.
    #[arg(long)]
    json: bool,

    /// Disable colours even on a terminal.
    #[arg(long)]
    no_color: bool,
}

fn load_board(cli: &Cli) -> Result<Board, Box<dyn std::error::Error>> {
    if let Some(path) = &cli.map {
        let src = std::fs::read_to_string(path)?;
        log::info!("loaded map {}", path.display());
        return Ok(src.parse::<Board>()?);
    }
    let seed = cli
        .seed
        .unwrap_or_else(|| rand::rng().random_range(0..u64::MAX));
    log::info!("generating board with seed {seed}");
    let mut rng = rand::rngs::StdRng::seed_from_u64(seed);
    let spec = BoardSpec {
        rows: cli.rows,
        cols: cli.cols,
        density: cli.density,
    };
    Ok(random_board(spec, &mut rng)?)
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let mut board = load_board(&cli)?;
    let searcher = Searcher::new(SearchConfig {
        frontier: cli.frontier.into(),
    });
    log::debug!("searching with {:?} frontier", searcher.config().frontier);

    let route = match replan(&mut board, &searcher)? {
        Replan::Routed(route) => Some(route),
        Replan::Idle => None,
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&Report::new(&board, route))?);
        return Ok(());
    }

    let mut stdout = io::stdout();
    let color = !cli.no_color && stdout.is_terminal();
    render(&board, &mut stdout, color)?;
    match &route {
        Some(r) => println!("{}", summary(r)),
        None => println!("board needs both a start (S) and a goal (G)"),
    }
    Ok(())
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(e) = run(Cli::parse()) {
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
}
