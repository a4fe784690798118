use crate::engine::{Board, Tile, GRID_SIZE};

/// Parses a single whitespace-separated line of nine tile tokens into a
/// `Board`.
///
/// Tokens are read in reading order (left to right, top to bottom). Valid
/// tokens are:
/// - `1` through `8`: the numbered tiles
/// - `*`: the blank
///
/// The line must contain each of the nine tokens exactly once, so the
/// resulting board is always a valid permutation of the tile set.
///
/// # Arguments
/// * `line`: One line of input, e.g. `"1 2 3 4 5 6 7 * 8"`.
///
/// # Returns
/// * `Ok(Board)` when the line parses cleanly.
/// * `Err(String)` if:
///     - The line does not contain exactly nine tokens.
///     - A token is not one of `1`-`8` or `*`.
///     - A token appears more than once.
///
/// # Examples
/// ```
/// use eight_puzzle_solver::utils::parse_state_line;
/// use eight_puzzle_solver::engine::Tile;
///
/// let board = parse_state_line("1 2 3 4 5 6 7 * 8").unwrap();
/// assert_eq!(board.get_tile(0, 0), Tile::Numbered(1));
/// assert_eq!(board.get_tile(2, 1), Tile::Blank);
///
/// assert!(parse_state_line("1 2 3").is_err());
/// assert!(parse_state_line("1 2 3 4 5 6 7 8 9").is_err());
/// assert!(parse_state_line("1 1 2 3 4 5 6 7 *").is_err());
/// ```
pub fn parse_state_line(line: &str) -> Result<Board, String> {
    let tokens: Vec<&str> = line.split_whitespace().collect();
    let cell_count = GRID_SIZE * GRID_SIZE;

    if tokens.len() != cell_count {
        return Err(format!(
            "Expected {} tile tokens, found {}",
            cell_count,
            tokens.len()
        ));
    }

    let mut tiles = [Tile::Blank; GRID_SIZE * GRID_SIZE];
    // Slot 0 tracks the blank, slots 1-8 the numbered tiles.
    let mut seen = [false; GRID_SIZE * GRID_SIZE];

    for (index, token) in tokens.iter().enumerate() {
        let tile = if *token == "*" {
            Tile::Blank
        } else {
            match token.parse::<u8>() {
                Ok(value) if (1..=8).contains(&value) => Tile::Numbered(value),
                _ => {
                    return Err(format!(
                        "Unrecognized tile token '{}' at position {}",
                        token, index
                    ))
                }
            }
        };

        let slot = match tile {
            Tile::Blank => 0,
            Tile::Numbered(value) => value as usize,
        };
        if seen[slot] {
            return Err(format!("Duplicate tile token '{}'", token));
        }
        seen[slot] = true;
        tiles[index] = tile;
    }

    // Nine tokens landing in nine distinct slots: the permutation is
    // complete, so no separate missing-tile check is needed.
    Ok(Board::from_tiles(tiles))
}

/// Parses the two-line input format: the first non-empty line is the start
/// state, the second the goal state.
///
/// Blank lines are skipped and anything after the second state line is
/// ignored.
///
/// # Arguments
/// * `contents`: The full input text.
///
/// # Returns
/// * `Ok((start, goal))` on success.
/// * `Err(String)` when a line is missing or fails to parse; the message
///   names which of the two states was at fault.
pub fn read_states(contents: &str) -> Result<(Board, Board), String> {
    let mut lines = contents.lines().filter(|line| !line.trim().is_empty());

    let start_line = lines
        .next()
        .ok_or_else(|| "Input is missing the start state line".to_string())?;
    let goal_line = lines
        .next()
        .ok_or_else(|| "Input is missing the goal state line".to_string())?;

    let start = parse_state_line(start_line).map_err(|e| format!("Start state: {}", e))?;
    let goal = parse_state_line(goal_line).map_err(|e| format!("Goal state: {}", e))?;
    Ok((start, goal))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_state_line_valid() {
        let board = parse_state_line("1 2 3 4 5 6 7 * 8").unwrap();
        assert_eq!(board.get_tile(0, 0), Tile::Numbered(1));
        assert_eq!(board.get_tile(2, 1), Tile::Blank);
        assert_eq!(board.get_tile(2, 2), Tile::Numbered(8));
    }

    #[test]
    fn test_parse_state_line_extra_whitespace() {
        let board = parse_state_line("  1  2 3 4 5 6 7 *   8 ").unwrap();
        assert_eq!(board, parse_state_line("1 2 3 4 5 6 7 * 8").unwrap());
    }

    #[test]
    fn test_parse_state_line_wrong_token_count() {
        let too_few = parse_state_line("1 2 3 4 5");
        assert!(too_few.is_err());
        assert!(too_few.unwrap_err().contains("Expected 9 tile tokens"));

        let too_many = parse_state_line("1 2 3 4 5 6 7 * 8 8");
        assert!(too_many.is_err());
    }

    #[test]
    fn test_parse_state_line_unknown_token() {
        let result = parse_state_line("1 2 3 4 5 6 7 * 9");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized tile token '9'"));

        let result = parse_state_line("1 2 3 4 x 6 7 * 8");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Unrecognized tile token 'x'"));
    }

    #[test]
    fn test_parse_state_line_duplicate_tile() {
        let result = parse_state_line("1 1 2 3 4 5 6 7 *");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("Duplicate tile token '1'"));
    }

    #[test]
    fn test_parse_state_line_missing_blank() {
        // Nine numbered tokens cannot form a permutation of the tile set:
        // something must repeat, so the duplicate check rejects the line.
        let result = parse_state_line("1 2 3 4 5 6 7 8 1");
        assert!(result.is_err());
    }

    #[test]
    fn test_read_states_two_lines() {
        let contents = "1 2 3 4 5 6 7 * 8\n1 2 3 4 5 6 7 8 *\n";
        let (start, goal) = read_states(contents).unwrap();
        assert_eq!(start, parse_state_line("1 2 3 4 5 6 7 * 8").unwrap());
        assert_eq!(goal, parse_state_line("1 2 3 4 5 6 7 8 *").unwrap());
    }

    #[test]
    fn test_read_states_skips_blank_lines() {
        let contents = "\n1 2 3 4 5 6 7 * 8\n\n1 2 3 4 5 6 7 8 *";
        assert!(read_states(contents).is_ok());
    }

    #[test]
    fn test_read_states_missing_lines() {
        let result = read_states("1 2 3 4 5 6 7 * 8\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("goal state"));

        let result = read_states("");
        assert!(result.is_err());
        assert!(result.unwrap_err().contains("start state"));
    }

    #[test]
    fn test_read_states_reports_faulty_state() {
        let result = read_states("1 2 3 4 5 6 7 * 8\n1 2 3\n");
        assert!(result.is_err());
        assert!(result.unwrap_err().starts_with("Goal state:"));
    }
}
