//! Heuristics for informed search over eight-puzzle boards.
//!
//! Both functions score a `(state, goal)` pair with an estimate of the
//! number of blank-tile moves still needed. Manhattan distance is a true
//! lower bound on the remaining cost; the misplaced-tile count includes the
//! blank in the comparison, so it can exceed the remaining cost by one when
//! the blank itself is out of place. The `Heuristic` enum is the selector
//! the A* driver takes to pick between them.
use crate::engine::{Board, Tile, GRID_SIZE};

/// Selects which scoring function the A* driver evaluates children with.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Heuristic {
    /// Count of cells where state and goal disagree, blank included.
    MisplacedTiles,
    /// Sum of per-tile Manhattan distances, blank excluded.
    ManhattanDistance,
}

impl Heuristic {
    /// Scores `state` against `goal` with the selected function.
    pub fn evaluate(&self, state: &Board, goal: &Board) -> u32 {
        match self {
            Heuristic::MisplacedTiles => misplaced_tiles(state, goal),
            Heuristic::ManhattanDistance => manhattan_distance(state, goal),
        }
    }
}

/// Counts the positions at which `state` and `goal` hold different tiles.
///
/// The blank participates in the comparison like any other cell, so the
/// result lies in [0, 9] and is 0 iff the two boards are equal.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::heuristics::misplaced_tiles;
/// use eight_puzzle_solver::utils::parse_state_line;
///
/// let state = parse_state_line("1 2 3 4 5 6 7 * 8").unwrap();
/// let goal = parse_state_line("1 2 3 4 5 6 7 8 *").unwrap();
/// assert_eq!(misplaced_tiles(&state, &goal), 2);
/// ```
pub fn misplaced_tiles(state: &Board, goal: &Board) -> u32 {
    let mut count = 0;
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if state.get_tile(r, c) != goal.get_tile(r, c) {
                count += 1;
            }
        }
    }
    count
}

/// Locates `tile` on `board`, scanning in reading order.
fn tile_position(board: &Board, tile: Tile) -> Option<(usize, usize)> {
    for r in 0..GRID_SIZE {
        for c in 0..GRID_SIZE {
            if board.get_tile(r, c) == tile {
                return Some((r, c));
            }
        }
    }
    None
}

/// Sums, over the numbered tiles 1 through 8, the row plus column distance
/// between each tile's position in `state` and its position in `goal`. The
/// blank is excluded.
///
/// Each move slides exactly one tile one cell, so the total can never
/// overestimate the true remaining move count.
///
/// # Panics
/// Both boards must be valid permutations of the eight numbered tiles plus
/// the blank. A missing tile value is a contract violation and panics,
/// naming the tile, rather than returning a silently wrong magnitude.
pub fn manhattan_distance(state: &Board, goal: &Board) -> u32 {
    let mut distance = 0;
    for value in 1..=8u8 {
        let tile = Tile::Numbered(value);
        let (state_r, state_c) = match tile_position(state, tile) {
            Some(position) => position,
            None => panic!("tile {} missing from state board", value),
        };
        let (goal_r, goal_c) = match tile_position(goal, tile) {
            Some(position) => position,
            None => panic!("tile {} missing from goal board", value),
        };
        distance += (state_r.abs_diff(goal_r) + state_c.abs_diff(goal_c)) as u32;
    }
    distance
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::Board;
    use crate::utils::parse_state_line;

    fn board(tokens: &str) -> Board {
        parse_state_line(tokens).unwrap()
    }

    #[test]
    fn test_both_heuristics_zero_iff_equal() {
        let solved = Board::solved();
        assert_eq!(misplaced_tiles(&solved, &solved), 0);
        assert_eq!(manhattan_distance(&solved, &solved), 0);

        let shifted = board("1 2 3 4 5 6 7 * 8");
        assert!(misplaced_tiles(&shifted, &solved) > 0);
        assert!(manhattan_distance(&shifted, &solved) > 0);
    }

    #[test]
    fn test_misplaced_counts_the_blank() {
        // Blank and the 8 tile are both out of place.
        let state = board("1 2 3 4 5 6 7 * 8");
        assert_eq!(misplaced_tiles(&state, &Board::solved()), 2);
    }

    #[test]
    fn test_manhattan_ignores_the_blank() {
        // Only the 8 tile is displaced, by one cell; the blank does not count.
        let state = board("1 2 3 4 5 6 7 * 8");
        assert_eq!(manhattan_distance(&state, &Board::solved()), 1);
    }

    #[test]
    fn test_manhattan_sums_all_tiles() {
        // 7 and 8 each sit one cell right of home.
        let state = board("1 2 3 4 5 6 * 7 8");
        assert_eq!(manhattan_distance(&state, &Board::solved()), 2);

        // Reversed layout: corner tiles are four cells from home, edge
        // tiles two.
        let reversed = board("8 7 6 5 * 4 3 2 1");
        let centered_goal = board("1 2 3 4 * 5 6 7 8");
        assert_eq!(manhattan_distance(&reversed, &centered_goal), 4 * 4 + 4 * 2);
    }

    #[test]
    fn test_misplaced_full_board() {
        // Reversed layout: every cell disagrees except the center.
        let state = board("8 7 6 5 * 4 3 2 1");
        let goal = board("1 2 3 4 * 5 6 7 8");
        assert_eq!(misplaced_tiles(&state, &goal), 8);
    }

    #[test]
    fn test_manhattan_is_a_lower_bound_on_known_instances() {
        let goal = Board::solved();

        // One move from the goal.
        let one_away = board("1 2 3 4 5 6 7 * 8");
        assert!(manhattan_distance(&one_away, &goal) <= 1);

        // Two moves from the goal.
        let two_away = board("1 2 3 4 5 6 * 7 8");
        assert!(manhattan_distance(&two_away, &goal) <= 2);
    }

    #[test]
    fn test_misplaced_can_exceed_manhattan_by_the_blank() {
        // Blank and the 8 tile are misplaced but only the 8 needs a move.
        let state = board("1 2 3 4 5 6 7 * 8");
        let goal = Board::solved();
        assert_eq!(misplaced_tiles(&state, &goal), 2);
        assert_eq!(manhattan_distance(&state, &goal), 1);
    }

    #[test]
    fn test_heuristic_selector_dispatch() {
        let state = board("1 2 3 4 5 6 * 7 8");
        let goal = Board::solved();
        assert_eq!(
            Heuristic::MisplacedTiles.evaluate(&state, &goal),
            misplaced_tiles(&state, &goal)
        );
        assert_eq!(
            Heuristic::ManhattanDistance.evaluate(&state, &goal),
            manhattan_distance(&state, &goal)
        );
    }

    #[test]
    #[should_panic(expected = "tile 5 missing from state board")]
    fn test_manhattan_panics_on_missing_tile() {
        use crate::engine::Tile;
        // Two 4s and no 5: not a permutation of the tile set.
        let invalid = Board::from_tiles([
            Tile::Numbered(1),
            Tile::Numbered(2),
            Tile::Numbered(3),
            Tile::Numbered(4),
            Tile::Numbered(4),
            Tile::Numbered(6),
            Tile::Numbered(7),
            Tile::Numbered(8),
            Tile::Blank,
        ]);
        manhattan_distance(&invalid, &Board::solved());
    }
}
