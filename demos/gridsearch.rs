//! Command-line grid search demo.
//!
//! Run: cargo run --bin gridsearch -- --all --render
//!      cargo run --bin gridsearch -- --request request.json

use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use gridsearch_demos::{init_logging, render, summary};
use gridsearch_paths::Algorithm;
use gridsearch_solve::{WallConfig, WallGen, solve_json};
use rand::SeedableRng;
use rand::rngs::StdRng;

#[derive(Parser)]
#[command(about = "Run grid pathfinding searches and show their exploration")]
struct Args {
    /// Solve a JSON request file and print the JSON response.
    #[arg(long)]
    request: Option<PathBuf>,

    /// Algorithm name: "BFS", "DFS", "Dijkstra", "A*" or "Bidirectional BFS".
    #[arg(short, long, default_value = "BFS")]
    algorithm: String,

    /// Run every algorithm on the same grid.
    #[arg(long)]
    all: bool,

    #[arg(long, default_value_t = WallConfig::default().rows)]
    rows: i32,

    #[arg(long, default_value_t = WallConfig::default().cols)]
    cols: i32,

    /// Probability of each cell being a wall.
    #[arg(long, default_value_t = WallConfig::default().density)]
    density: f64,

    /// Seed for wall placement; random if omitted.
    #[arg(long)]
    seed: Option<u64>,

    /// Print the grid with visited cells and the path.
    #[arg(long)]
    render: bool,

    /// Increase log verbosity (-v debug, -vv trace).
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

fn main() -> ExitCode {
    let args = Args::parse();
    if let Err(e) = init_logging(args.verbose) {
        eprintln!("Error: {e}");
    }
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<(), Box<dyn std::error::Error>> {
    if let Some(path) = &args.request {
        let body = std::fs::read_to_string(path)?;
        println!("{}", solve_json(&body)?);
        return Ok(());
    }

    if args.rows <= 0 || args.cols <= 0 {
        return Err(format!("rows and cols must be positive, got {}x{}", args.rows, args.cols).into());
    }
    let algorithms: Vec<Algorithm> = if args.all {
        Algorithm::ALL.to_vec()
    } else {
        vec![args.algorithm.parse()?]
    };

    let config = WallConfig {
        rows: args.rows,
        cols: args.cols,
        density: args.density,
    };
    let (start, end) = (config.top_left(), config.bottom_right());
    let rng = match args.seed {
        Some(seed) => StdRng::seed_from_u64(seed),
        None => StdRng::from_os_rng(),
    };
    let grid = WallGen::new(config, rng).generate(&[start, end]);

    for a in algorithms {
        let result = a.search(&grid, start, end);
        println!("{}", summary(a, &result));
        if args.render {
            println!("{}", render(&grid, &result, start, end));
        }
    }
    Ok(())
}
