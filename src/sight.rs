use std::collections::BTreeSet;

use crate::error::EngineError;
use crate::geometry::split_around_pivot;
use crate::types::{Direction, Orientation, Pos, Shape};

/// Cells visible from `pivot` along `orientation`, walking outward one cell
/// at a time in both directions of the axis. The walk in each direction
/// stops at the nearest obstacle: just before it normally, just after
/// including it when `include_obstacles` is set. The pivot itself is always
/// visible — unless it sits on an obstacle, in which case nothing is
/// (or only the pivot, under `include_obstacles`).
pub fn line_of_sight(
    shape: Shape,
    pivot: Pos,
    obstacles: &BTreeSet<Pos>,
    orientation: Orientation,
    include_obstacles: bool,
) -> Result<BTreeSet<Pos>, EngineError> {
    let pivot = shape.normalize(pivot)?;
    let mut visible = BTreeSet::new();
    if obstacles.contains(&pivot) {
        if include_obstacles {
            visible.insert(pivot);
        }
        return Ok(visible);
    }
    visible.insert(pivot);
    let (d_row, d_col) = orientation.step();
    for (d_row, d_col) in [(d_row, d_col), (-d_row, -d_col)] {
        let mut pos = pivot.offset(d_row, d_col);
        while shape.contains(pos) {
            if obstacles.contains(&pos) {
                if include_obstacles {
                    visible.insert(pos);
                }
                break;
            }
            visible.insert(pos);
            pos = pos.offset(d_row, d_col);
        }
    }
    Ok(visible)
}

/// Line-of-sight sets for one pivot, queryable two ways: whole axes (pivot
/// included, obstacles per the flag used to build it) and directional
/// half-lines (pivot always excluded).
#[derive(Debug, Clone, Default)]
pub struct SightLines {
    orientations: [BTreeSet<Pos>; 4],
    directions: [BTreeSet<Pos>; 8],
}

impl SightLines {
    #[inline]
    pub fn orientation(&self, orientation: Orientation) -> &BTreeSet<Pos> {
        &self.orientations[orientation.index()]
    }

    #[inline]
    pub fn direction(&self, direction: Direction) -> &BTreeSet<Pos> {
        &self.directions[direction.index()]
    }
}

/// Computes `line_of_sight` for all 4 orientations and splits each result
/// into its two directional halves.
pub fn all_line_of_sight(
    shape: Shape,
    pivot: Pos,
    obstacles: &BTreeSet<Pos>,
    include_obstacles: bool,
) -> Result<SightLines, EngineError> {
    let pivot = shape.normalize(pivot)?;
    let mut lines = SightLines::default();
    for orientation in Orientation::all() {
        let visible = line_of_sight(shape, pivot, obstacles, orientation, include_obstacles)?;
        // A pivot sitting on an obstacle sees nothing, so both halves stay
        // empty; splitting requires the pivot to be in the set.
        if visible.contains(&pivot) {
            for (direction, half) in split_around_pivot(&visible, pivot, orientation)? {
                lines.directions[direction.index()] = half;
            }
        }
        lines.orientations[orientation.index()] = visible;
    }
    Ok(lines)
}
