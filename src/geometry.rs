use std::collections::BTreeSet;
use std::ops::Bound::{Excluded, Unbounded};

use crate::error::EngineError;
use crate::types::{Direction, Orientation, Pos, Shape};

/// Every on-board cell of the infinite line through `pivot` along
/// `orientation`, pivot included. The pivot may use negative indices; a
/// coordinate past the positive bound is an error.
pub fn line_cells(
    shape: Shape,
    pivot: Pos,
    orientation: Orientation,
) -> Result<BTreeSet<Pos>, EngineError> {
    let pivot = shape.normalize(pivot)?;
    let mut cells = BTreeSet::new();
    match orientation {
        Orientation::Horizontal => {
            for col in 0..shape.cols {
                cells.insert(Pos::new(pivot.row, col));
            }
        }
        Orientation::Vertical => {
            for row in 0..shape.rows {
                cells.insert(Pos::new(row, pivot.col));
            }
        }
        Orientation::Diagonal => {
            // Translate the pivot to the line's top-left intercept, then
            // walk the unit step until leaving the board.
            let offset = pivot.row.min(pivot.col);
            let mut pos = pivot.offset(-offset, -offset);
            while shape.contains(pos) {
                cells.insert(pos);
                pos = pos.offset(1, 1);
            }
        }
        Orientation::Antidiagonal => {
            // Top-right intercept for the opposite-slope axis.
            let offset = pivot.row.min(shape.cols - 1 - pivot.col);
            let mut pos = pivot.offset(-offset, offset);
            while shape.contains(pos) {
                cells.insert(pos);
                pos = pos.offset(1, -1);
            }
        }
    }
    Ok(cells)
}

/// Partitions `cells` into the two open half-lines strictly before and after
/// the pivot in row-major sort order, labeled with the orientation's two
/// directions. The pivot is excluded from both halves and must be a member
/// of `cells`.
pub fn split_around_pivot(
    cells: &BTreeSet<Pos>,
    pivot: Pos,
    orientation: Orientation,
) -> Result<[(Direction, BTreeSet<Pos>); 2], EngineError> {
    if !cells.contains(&pivot) {
        return Err(EngineError::InvalidInput(format!(
            "pivot {pivot:?} is not a member of the line being split"
        )));
    }
    let [before_dir, after_dir] = orientation.directions();
    let before: BTreeSet<Pos> = cells.range(..pivot).copied().collect();
    let after: BTreeSet<Pos> = cells.range((Excluded(pivot), Unbounded)).copied().collect();
    Ok([(before_dir, before), (after_dir, after)])
}
