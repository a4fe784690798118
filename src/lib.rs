//! # Eight-Puzzle Solver Library
//!
//! This library provides the core board mechanics for the sliding
//! eight-puzzle and four interchangeable search strategies for solving it:
//! depth-first, breadth-first, iterative-deepening, and A*.
//!
//! It is used by three binaries:
//! - `puzzle_solver`: Takes a two-line state file and a search algorithm,
//!   then prints the path from the start state to the goal state together
//!   with the move and expanded-node counts.
//! - `human_player`: Allows interactive play via the command line.
//! - `strategy_evaluator`: Compares the strategies over a batch of seeded
//!   scrambled instances.
//!
//! ## Modules
//! - `engine`: Contains the board representation (`Board`), tile and move
//!   types (`Tile`, `Move`), successor generation, seeded scrambling, and
//!   parity classification.
//! - `heuristics`: Defines the misplaced-tile and Manhattan-distance
//!   scoring functions and the `Heuristic` selector used by A*.
//! - `solver`: Provides the `solve_dfs`, `solve_bfs`, `solve_ids`, and
//!   `solve_astar` entry points and the `SearchReport` result type.
//! - `utils`: Provides parsing of the two-line state input format.

pub mod engine;
pub mod heuristics;
pub mod solver;
pub mod utils;

// Items from sub-modules, if public, should be accessed via their full
// path, e.g., `eight_puzzle_solver::solver::solve_bfs()`. This keeps the
// top-level library namespace cleaner.
