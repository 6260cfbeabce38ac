use std::collections::BTreeSet;

use hashbrown::HashSet;

use crate::board::Board;
use crate::error::EngineError;
use crate::geometry::line_cells;
use crate::sight::all_line_of_sight;
use crate::types::{Direction, Orientation, Outcome, Player, Pos};

/// How far a piece on `pivot`'s line must travel along either direction of
/// `orientation`: the count of occupied cells, friend or foe, on the whole
/// line.
pub fn travel_distance(
    board: &Board,
    pivot: Pos,
    orientation: Orientation,
) -> Result<usize, EngineError> {
    let cells = line_cells(board.shape(), pivot, orientation)?;
    Ok(cells.iter().filter(|&&pos| board.get(pos).is_some()).count())
}

/// Every legal destination for the piece at `position`, moved by `mover`.
///
/// Per orientation the travel distance is fixed by total line occupancy;
/// line of sight treats only the opponent's pieces as obstacles (friendly
/// pieces are jumped over), with the nearest blocker itself landable as a
/// capture. A direction contributes at most the one visible cell at exactly
/// the travel distance. Cells held by the mover's own side are never legal.
pub fn valid_destinations(
    board: &Board,
    position: Pos,
    mover: Player,
) -> Result<BTreeSet<Pos>, EngineError> {
    let position = board.shape().normalize(position)?;
    if board.get(position).is_none() {
        return Err(EngineError::InvalidSelection(position));
    }

    let obstacles = board.positions(mover.other());
    let sight = all_line_of_sight(board.shape(), position, &obstacles, true)?;

    let mut destinations = BTreeSet::new();
    for orientation in Orientation::all() {
        let distance = travel_distance(board, position, orientation)?;
        for direction in orientation.directions() {
            destinations.extend(
                sight
                    .direction(direction)
                    .iter()
                    .filter(|&&pos| position.chebyshev(pos) as usize == distance)
                    .copied(),
            );
        }
    }
    for own in board.positions(mover) {
        destinations.remove(&own);
    }
    Ok(destinations)
}

/// Whether every piece of `player` belongs to one 8-adjacent component.
/// A player with no pieces on the board is not connected.
pub fn is_fully_connected(board: &Board, player: Player) -> bool {
    let positions = board.positions(player);
    let Some(&start) = positions.iter().next() else {
        return false;
    };

    // Iterative DFS; an explicit stack keeps large boards off the call
    // stack.
    let mut visited: HashSet<Pos> = HashSet::with_capacity(positions.len());
    let mut stack = vec![start];
    while let Some(pos) = stack.pop() {
        if !visited.insert(pos) {
            continue;
        }
        for direction in Direction::all() {
            let (d_row, d_col) = direction.delta();
            let neighbor = pos.offset(d_row, d_col);
            if positions.contains(&neighbor) && !visited.contains(&neighbor) {
                stack.push(neighbor);
            }
        }
    }
    visited.len() == positions.len()
}

/// Connectivity verdict for the whole board. Both players are checked after
/// every move: a single capture can complete both sides at once, which is a
/// tie.
pub fn game_outcome(board: &Board) -> Outcome {
    let black = is_fully_connected(board, Player::Black);
    let red = is_fully_connected(board, Player::Red);
    match (black, red) {
        (true, true) => Outcome::Tie,
        (true, false) => Outcome::BlackWins,
        (false, true) => Outcome::RedWins,
        (false, false) => Outcome::Continue,
    }
}
