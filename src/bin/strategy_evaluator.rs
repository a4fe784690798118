use eight_puzzle_solver::engine::Board;
use eight_puzzle_solver::heuristics::Heuristic;
use eight_puzzle_solver::solver::{solve_astar, solve_bfs, SearchReport};
use std::collections::HashMap;

const NUM_INSTANCES: usize = 20;
const START_SEED: u64 = 0;
const SCRAMBLE_MOVES: u32 = 14;

type StrategyFn = fn(&Board, &Board) -> SearchReport;

fn run_bfs(start: &Board, goal: &Board) -> SearchReport {
    solve_bfs(start, goal, None)
}

fn run_astar_misplaced(start: &Board, goal: &Board) -> SearchReport {
    solve_astar(start, goal, Heuristic::MisplacedTiles, None)
}

fn run_astar_manhattan(start: &Board, goal: &Board) -> SearchReport {
    solve_astar(start, goal, Heuristic::ManhattanDistance, None)
}

fn main() {
    let strategies: Vec<(&str, StrategyFn)> = vec![
        ("BFS", run_bfs),
        ("A*-misplaced", run_astar_misplaced),
        ("A*-manhattan", run_astar_manhattan),
    ];

    let mut all_expanded: HashMap<String, Vec<usize>> = HashMap::new();
    for (name, _) in &strategies {
        all_expanded.insert(name.to_string(), Vec::new());
    }

    let goal = Board::solved();

    println!(
        "Starting strategy evaluation over {} scrambled instances...",
        NUM_INSTANCES
    );

    for instance_idx in 0..NUM_INSTANCES {
        let current_seed = START_SEED + instance_idx as u64;
        let start = goal.scrambled_with_seed(SCRAMBLE_MOVES, current_seed);

        println!(
            "\nEvaluating instance {} (seed: {}, parity-reachable: {})",
            instance_idx,
            current_seed,
            start.same_parity(&goal)
        );

        for (strategy_name, strategy_fn) in &strategies {
            let report = strategy_fn(&start, &goal);

            if !report.success {
                eprintln!(
                    "Warning: strategy {} failed on instance {} (seed {}), which should not happen for a scrambled board.",
                    strategy_name, instance_idx, current_seed
                );
                continue;
            }

            println!(
                "  Strategy: {:<13} Moves: {:<3} Expanded nodes: {}",
                strategy_name, report.moves, report.expanded
            );
            all_expanded
                .get_mut(*strategy_name)
                .unwrap()
                .push(report.expanded);
        }
    }

    println!("\n--- Evaluation Complete ---");
    println!("Number of instances evaluated: {}", NUM_INSTANCES);
    println!(
        "Strategies evaluated: {}",
        strategies
            .iter()
            .map(|(name, _)| *name)
            .collect::<Vec<&str>>()
            .join(", ")
    );
    println!("\n--- Average Expanded Nodes ---");

    let mut sorted_averages: Vec<(&str, f64)> = Vec::new();

    for (strategy_name, counts) in &all_expanded {
        if counts.is_empty() {
            println!("Strategy {}: No results recorded.", strategy_name);
            continue;
        }
        let total: usize = counts.iter().sum();
        let average = total as f64 / counts.len() as f64;
        sorted_averages.push((strategy_name, average));
    }

    // Sort by average expanded count ascending: fewer nodes is better.
    sorted_averages.sort_by(|a, b| a.1.partial_cmp(&b.1).unwrap_or(std::cmp::Ordering::Equal));

    for (strategy_name, average) in sorted_averages {
        println!(
            "Strategy {:<13}: Average expanded nodes = {:.2}",
            strategy_name, average
        );
    }
}
