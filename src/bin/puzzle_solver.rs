use clap::{Parser, ValueEnum};
use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{solve_astar, solve_bfs, solve_dfs, solve_ids, SearchReport};
use eight_puzzle_solver::utils::read_states;
use std::fs;
use std::path::PathBuf;
use std::process;

/// Depth limit applied to dfs and ids when none is given on the command
/// line.
const DEFAULT_DEPTH_LIMIT: u32 = 10;

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Algorithm {
    /// Depth-first search
    Dfs,
    /// Breadth-first search
    Bfs,
    /// Iterative-deepening search
    Ids,
    /// A* with the misplaced-tile heuristic
    Astar1,
    /// A* with the Manhattan-distance heuristic
    Astar2,
}

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Search algorithm to run
    #[clap(short, long, value_enum)]
    algorithm: Algorithm,

    /// Depth limit for the search traversal (defaults to 10 for dfs and
    /// ids, unlimited otherwise)
    #[clap(short, long)]
    depth_limit: Option<u32>,

    /// Path to the input file: line 1 is the start state, line 2 the goal
    /// state, each nine whitespace-separated tokens with '*' as the blank
    input_file: PathBuf,
}

fn run_search(args: &Args, start: &Board, goal: &Board) -> SearchReport {
    match args.algorithm {
        Algorithm::Dfs => solve_dfs(
            start,
            goal,
            Some(args.depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT)),
        ),
        Algorithm::Bfs => solve_bfs(start, goal, args.depth_limit),
        Algorithm::Ids => solve_ids(start, goal, args.depth_limit.unwrap_or(DEFAULT_DEPTH_LIMIT)),
        Algorithm::Astar1 => solve_astar(start, goal, Heuristic::MisplacedTiles, args.depth_limit),
        Algorithm::Astar2 => solve_astar(
            start,
            goal,
            Heuristic::ManhattanDistance,
            args.depth_limit,
        ),
    }
}

fn main() {
    let args = Args::parse();

    let contents = match fs::read_to_string(&args.input_file) {
        Ok(contents) => contents,
        Err(e) => {
            eprintln!("Failed to read {}: {}", args.input_file.display(), e);
            process::exit(1);
        }
    };

    let (start, goal) = match read_states(&contents) {
        Ok(states) => states,
        Err(e) => {
            eprintln!("Invalid input: {}", e);
            process::exit(1);
        }
    };

    println!("Start state:\n{}\n", start);
    println!("Goal state:\n{}\n", goal);

    let report = run_search(&args, &start, &goal);

    if report.success {
        println!("Path to Goal state found.");
        println!("Printing path:");
        for (step, state) in report.path.iter().enumerate() {
            println!("Step {}:", step);
            println!("--------------");
            println!("{}\n", state);
        }
        println!("Number of moves = {}", report.moves);
    } else {
        println!("FAILURE: Goal state not reachable.");
    }
    println!("Number of expanded nodes = {}", report.expanded);
}
