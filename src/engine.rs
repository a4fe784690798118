//! Core board engine for the eight-puzzle.
//!
//! This module defines the puzzle's fundamental components:
//! - `Tile`: Represents the blank marker and the numbered tiles on the board.
//! - `Move`: Represents the four blank-tile moves, in their fixed generation order.
//! - `Board`: Represents an immutable 3x3 tile configuration and includes methods
//!   for blank location, single-move application, successor generation, seeded
//!   scrambling, and parity classification.
use rand::rngs::SmallRng;
use rand::{Rng, SeedableRng};
use std::fmt;

/// Represents one cell of the puzzle board.
///
/// Each variant corresponds to either the blank marker or a numbered tile.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Tile {
    /// Represents the blank cell the puzzle slides tiles into.
    Blank,
    /// Represents a numbered tile, valid values 1 through 8.
    Numbered(u8),
}

impl Tile {
    /// Converts the tile to its character representation.
    ///
    /// This is primarily used for text-based display of the board.
    ///
    /// # Examples
    ///
    /// ```
    /// use eight_puzzle_solver::engine::Tile;
    /// assert_eq!(Tile::Numbered(3).to_char(), '3');
    /// assert_eq!(Tile::Blank.to_char(), '*');
    /// ```
    pub fn to_char(&self) -> char {
        match self {
            Tile::Blank => '*',
            Tile::Numbered(value) => (b'0' + value) as char,
        }
    }
}

/// Defines the side length of the puzzle board. The board is always square,
/// so a `GRID_SIZE` of 3 means a 3x3 grid with eight tiles and one blank.
pub const GRID_SIZE: usize = 3;

/// A single blank-tile move: the blank swaps places with the orthogonally
/// adjacent tile in the given direction.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Move {
    Up,
    Down,
    Left,
    Right,
}

/// The fixed order in which candidate moves are tried during successor
/// generation. Search results depend on this order, so it is a module
/// constant rather than a caller-supplied parameter.
pub const MOVE_ORDER: [Move; 4] = [Move::Up, Move::Down, Move::Left, Move::Right];

impl Move {
    /// Row and column displacement of the blank for this move.
    fn delta(&self) -> (isize, isize) {
        match self {
            Move::Up => (-1, 0),
            Move::Down => (1, 0),
            Move::Left => (0, -1),
            Move::Right => (0, 1),
        }
    }
}

/// Represents the puzzle board as a 2D grid of `Tile`s.
///
/// A board is immutable once constructed: deriving a new configuration always
/// copies the grid and swaps the blank with an adjacent tile, so no method
/// mutates `self`. Two boards are equal iff all nine cells match positionally,
/// and the derived `Hash` follows the same identity, which is what the search
/// drivers rely on for visited- and closed-set membership.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Board {
    grid: [[Tile; GRID_SIZE]; GRID_SIZE],
}

impl Board {
    /// Creates a board from a flat array of nine tiles in reading order
    /// (left to right, top to bottom).
    ///
    /// # Arguments
    /// * `tiles`: The nine cells of the board, row-major.
    ///
    /// # Returns
    /// A `Board` holding the given configuration.
    ///
    /// Callers are expected to supply a permutation of the eight numbered
    /// tiles plus the blank; the parsing layer in `utils` enforces this for
    /// external input. A board violating that precondition will panic later,
    /// in `blank_position` or in the heuristics.
    pub fn from_tiles(tiles: [Tile; GRID_SIZE * GRID_SIZE]) -> Self {
        let mut grid = [[Tile::Blank; GRID_SIZE]; GRID_SIZE];
        for (index, tile) in tiles.into_iter().enumerate() {
            grid[index / GRID_SIZE][index % GRID_SIZE] = tile;
        }
        Board { grid }
    }

    /// Creates the canonical solved board: tiles 1 through 8 in reading
    /// order with the blank in the bottom-right corner.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::{Board, Tile};
    /// let board = Board::solved();
    /// assert_eq!(board.get_tile(0, 0), Tile::Numbered(1));
    /// assert_eq!(board.get_tile(2, 2), Tile::Blank);
    /// ```
    pub fn solved() -> Self {
        let mut grid = [[Tile::Blank; GRID_SIZE]; GRID_SIZE];
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                let value = (r * GRID_SIZE + c + 1) as u8;
                if (value as usize) < GRID_SIZE * GRID_SIZE {
                    grid[r][c] = Tile::Numbered(value);
                }
            }
        }
        Board { grid }
    }

    /// Returns the tile at the specified row (`r`) and column (`c`).
    ///
    /// # Panics
    /// Panics if `r` or `c` are outside the board dimensions
    /// (`0 <= r < GRID_SIZE`, `0 <= c < GRID_SIZE`).
    pub fn get_tile(&self, r: usize, c: usize) -> Tile {
        self.grid[r][c]
    }

    /// Locates the blank cell.
    ///
    /// # Returns
    /// The `(row, column)` coordinates of the blank.
    ///
    /// # Panics
    /// Panics if the board holds no blank tile, which can only happen for a
    /// board constructed in violation of the permutation precondition.
    pub fn blank_position(&self) -> (usize, usize) {
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if self.grid[r][c] == Tile::Blank {
                    return (r, c);
                }
            }
        }
        panic!("board has no blank tile");
    }

    /// Applies a single blank-tile move, producing a fresh board.
    ///
    /// The returned board shares no storage with `self`; the blank and the
    /// adjacent tile in the move's direction are swapped in the copy.
    ///
    /// # Arguments
    /// * `direction`: The direction to slide the blank.
    ///
    /// # Returns
    /// * `Some(Board)` holding the resulting configuration.
    /// * `None` if the move would take the blank outside the 3x3 bounds.
    ///   An out-of-bounds move is not an error, it is simply unavailable.
    pub fn apply_move(&self, direction: Move) -> Option<Board> {
        let (r, c) = self.blank_position();
        let (dr, dc) = direction.delta();
        let next_r = r as isize + dr;
        let next_c = c as isize + dc;

        if next_r < 0
            || next_r >= GRID_SIZE as isize
            || next_c < 0
            || next_c >= GRID_SIZE as isize
        {
            return None;
        }

        let (next_r, next_c) = (next_r as usize, next_c as usize);
        let mut grid = self.grid;
        grid[r][c] = grid[next_r][next_c];
        grid[next_r][next_c] = Tile::Blank;
        Some(Board { grid })
    }

    /// Generates the legal neighbor configurations of this board.
    ///
    /// Candidate moves are tried in `MOVE_ORDER` (up, down, left, right) and
    /// out-of-bounds moves are dropped, so the result holds between one and
    /// four boards, each one blank-swap away from `self` and each an
    /// independently owned copy.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// // Blank in the bottom-right corner: only up and left are legal.
    /// let successors = Board::solved().successors();
    /// assert_eq!(successors.len(), 2);
    /// ```
    pub fn successors(&self) -> Vec<Board> {
        MOVE_ORDER
            .iter()
            .filter_map(|&direction| self.apply_move(direction))
            .collect()
    }

    /// Produces a scrambled board by walking `moves` random blank-tile moves
    /// away from `self`.
    ///
    /// The walk is driven by a `SmallRng` seeded with `seed`, so the same
    /// `(self, moves, seed)` triple always produces the same board. Every
    /// step is a legal move, which keeps the result reachable from `self`
    /// (the walk may back-track, so the solution distance can be anywhere
    /// from 0 to `moves`).
    ///
    /// # Arguments
    /// * `moves`: Number of random moves to apply.
    /// * `seed`: Seed for the random number generator.
    pub fn scrambled_with_seed(&self, moves: u32, seed: u64) -> Board {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = self.clone();
        for _ in 0..moves {
            let neighbors = board.successors();
            let choice = rng.gen_range(0..neighbors.len());
            board = neighbors[choice].clone();
        }
        board
    }

    /// Number of numbered-tile pairs that appear out of order in reading
    /// order. The blank is skipped.
    fn inversions(&self) -> u32 {
        let mut values = Vec::with_capacity(GRID_SIZE * GRID_SIZE - 1);
        for r in 0..GRID_SIZE {
            for c in 0..GRID_SIZE {
                if let Tile::Numbered(value) = self.grid[r][c] {
                    values.push(value);
                }
            }
        }

        let mut count = 0;
        for i in 0..values.len() {
            for j in (i + 1)..values.len() {
                if values[i] > values[j] {
                    count += 1;
                }
            }
        }
        count
    }

    /// Reports whether `self` and `other` lie in the same reachability class.
    ///
    /// Sliding the blank never changes the parity of the inversion count over
    /// the numbered tiles on an odd-width board, so two configurations are
    /// mutually reachable iff their inversion parities agree. A pair that
    /// differs by a single transposition of two numbered tiles therefore can
    /// never reach one another, and every search strategy will report failure
    /// on it.
    ///
    /// # Examples
    /// ```
    /// use eight_puzzle_solver::engine::Board;
    /// let solved = Board::solved();
    /// let scrambled = solved.scrambled_with_seed(25, 7);
    /// assert!(solved.same_parity(&scrambled));
    /// ```
    pub fn same_parity(&self, other: &Board) -> bool {
        self.inversions() % 2 == other.inversions() % 2
    }
}

impl fmt::Display for Board {
    /// Formats the board as three rows of space-separated tile characters.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (r, row) in self.grid.iter().enumerate() {
            if r > 0 {
                writeln!(f)?;
            }
            for (c, tile) in row.iter().enumerate() {
                if c > 0 {
                    write!(f, " ")?;
                }
                write!(f, "{}", tile.to_char())?;
            }
        }
        Ok(())
    }
}
