use clap::Parser;
use eight_puzzle_solver::engine::{Board, Move};
use eight_puzzle_solver::solver::goal_check;
use eight_puzzle_solver::utils::read_states;
use std::fs;
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

#[derive(Parser, Debug)]
#[clap(author, version, about, long_about = None)]
struct Args {
    /// Optional two-line state file (start and goal); when omitted, a
    /// scrambled instance of the standard goal is generated
    input_file: Option<PathBuf>,

    /// Number of random moves used to scramble generated instances
    #[clap(short, long, default_value_t = 20)]
    scramble: u32,

    /// Seed for generated instances
    #[clap(long, default_value_t = 514514)]
    seed: u64,
}

fn load_states(args: &Args) -> Result<(Board, Board), String> {
    match &args.input_file {
        Some(path) => {
            let contents = fs::read_to_string(path)
                .map_err(|e| format!("Failed to read {}: {}", path.display(), e))?;
            read_states(&contents)
        }
        None => {
            let goal = Board::solved();
            let start = goal.scrambled_with_seed(args.scramble, args.seed);
            Ok((start, goal))
        }
    }
}

fn main() {
    let args = Args::parse();

    let (start, goal) = match load_states(&args) {
        Ok(states) => states,
        Err(e) => {
            eprintln!("{}", e);
            process::exit(1);
        }
    };

    let mut board = start;
    let mut moves = 0u32;
    // Past states for undo, most recent last.
    let mut history: Vec<Board> = Vec::new();

    println!("Welcome to the eight-puzzle!");
    println!("Goal state:\n{}", goal);

    loop {
        println!("---------------------");
        println!("Moves: {}", moves);
        println!("{}", board);

        if goal_check(&board, &goal) {
            println!();
            println!("---------------------");
            println!("Solved in {} moves!", moves);
            println!("---------------------");
            break;
        }

        print!("Enter your move (u/d/l/r), 'z' to undo, 'q' to quit: ");
        io::stdout().flush().unwrap();

        let mut input = String::new();
        if io::stdin().read_line(&mut input).is_err() {
            println!("Error reading input. Please try again.");
            continue;
        }

        let trimmed_input = input.trim();

        if trimmed_input == "q" {
            println!("Thanks for playing!");
            break;
        }

        if trimmed_input == "z" {
            match history.pop() {
                Some(previous) => {
                    board = previous;
                    moves -= 1;
                    println!("Move undone.");
                }
                None => {
                    println!("Cannot undo further (already at the start state).");
                }
            }
            continue;
        }

        let direction = match trimmed_input {
            "u" => Move::Up,
            "d" => Move::Down,
            "l" => Move::Left,
            "r" => Move::Right,
            _ => {
                println!("Invalid input. Use 'u', 'd', 'l', 'r', 'z', or 'q'.");
                continue;
            }
        };

        match board.apply_move(direction) {
            Some(next) => {
                history.push(board);
                board = next;
                moves += 1;
            }
            None => {
                println!("Invalid move: the blank cannot leave the board.");
            }
        }
    }
}
