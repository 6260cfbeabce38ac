use std::collections::BTreeSet;

use linesofaction::{all_line_of_sight, line_of_sight, Direction, Orientation, Pos, Shape};

fn p(row: i32, col: i32) -> Pos {
    Pos::new(row, col)
}

fn set(cells: &[(i32, i32)]) -> BTreeSet<Pos> {
    cells.iter().map(|&(r, c)| p(r, c)).collect()
}

// The fixture throughout: a 3x4 board with a single obstacle at (1, 1).
fn fixture() -> (Shape, BTreeSet<Pos>) {
    (Shape::new(3, 4), set(&[(1, 1)]))
}

#[test]
fn sight_stops_before_the_nearest_obstacle() {
    let (shape, obstacles) = fixture();
    let cases: [(Pos, Orientation, &[(i32, i32)]); 8] = [
        // (0, 0): the obstacle sits on its diagonal, adjacent.
        (p(0, 0), Orientation::Horizontal, &[(0, 0), (0, 1), (0, 2), (0, 3)]),
        (p(0, 0), Orientation::Vertical, &[(0, 0), (1, 0), (2, 0)]),
        (p(0, 0), Orientation::Diagonal, &[(0, 0)]),
        // (0, 1): the obstacle sits directly below.
        (p(0, 1), Orientation::Vertical, &[(0, 1)]),
        (p(0, 1), Orientation::Diagonal, &[(0, 1), (1, 2), (2, 3)]),
        (p(0, 1), Orientation::Antidiagonal, &[(0, 1), (1, 0)]),
        // (2, 2): the obstacle blocks the north-west reach.
        (p(2, 2), Orientation::Diagonal, &[(2, 2)]),
        (p(2, 2), Orientation::Antidiagonal, &[(1, 3), (2, 2)]),
    ];
    for (pivot, orientation, expected) in cases {
        let visible =
            line_of_sight(shape, pivot, &obstacles, orientation, false).expect("sight");
        assert_eq!(visible, set(expected), "pivot {pivot:?} along {orientation:?}");
    }
}

#[test]
fn include_obstacles_adds_only_the_blocker() {
    let (shape, obstacles) = fixture();
    let cases: [(Pos, Orientation, &[(i32, i32)]); 3] = [
        (p(0, 0), Orientation::Diagonal, &[(0, 0), (1, 1)]),
        (p(0, 1), Orientation::Vertical, &[(0, 1), (1, 1)]),
        (p(2, 2), Orientation::Diagonal, &[(1, 1), (2, 2)]),
    ];
    for (pivot, orientation, expected) in cases {
        let visible = line_of_sight(shape, pivot, &obstacles, orientation, true).expect("sight");
        assert_eq!(visible, set(expected), "pivot {pivot:?} along {orientation:?}");
    }
}

#[test]
fn negative_pivot_wraps_to_the_far_corner() {
    let (shape, obstacles) = fixture();
    // (-1, -1) is (2, 3); none of its lines cross the obstacle.
    let visible = line_of_sight(shape, p(-1, -1), &obstacles, Orientation::Diagonal, false)
        .expect("sight");
    assert_eq!(visible, set(&[(0, 1), (1, 2), (2, 3)]));
    let visible = line_of_sight(shape, p(-1, -1), &obstacles, Orientation::Antidiagonal, false)
        .expect("sight");
    assert_eq!(visible, set(&[(2, 3)]));
}

#[test]
fn pivot_on_an_obstacle_sees_nothing() {
    let (shape, obstacles) = fixture();
    for orientation in Orientation::all() {
        let hidden =
            line_of_sight(shape, p(1, 1), &obstacles, orientation, false).expect("sight");
        assert!(hidden.is_empty());
        let only_pivot =
            line_of_sight(shape, p(1, 1), &obstacles, orientation, true).expect("sight");
        assert_eq!(only_pivot, set(&[(1, 1)]));
    }
}

#[test]
fn adding_an_obstacle_never_widens_the_view() {
    let shape = Shape::new(3, 4);
    let none = BTreeSet::new();
    let one = set(&[(1, 1)]);
    let two = set(&[(1, 1), (0, 2)]);

    for pivot in [p(0, 0), p(0, 1), p(2, 2), p(2, 3)] {
        for orientation in Orientation::all() {
            for include in [false, true] {
                let wide = line_of_sight(shape, pivot, &none, orientation, include)
                    .expect("sight");
                let mid = line_of_sight(shape, pivot, &one, orientation, include)
                    .expect("sight");
                let narrow = line_of_sight(shape, pivot, &two, orientation, include)
                    .expect("sight");
                assert!(
                    mid.is_subset(&wide) && narrow.is_subset(&mid),
                    "pivot {pivot:?} along {orientation:?} (include={include})"
                );
            }
        }
    }
}

#[test]
fn all_line_of_sight_splits_into_direction_halves() {
    let (shape, obstacles) = fixture();
    let sight = all_line_of_sight(shape, p(0, 1), &obstacles, true).expect("sight");

    // Orientation lookups include the pivot.
    assert_eq!(sight.orientation(Orientation::Vertical), &set(&[(0, 1), (1, 1)]));
    assert_eq!(
        sight.orientation(Orientation::Horizontal),
        &set(&[(0, 0), (0, 1), (0, 2), (0, 3)])
    );

    // Direction lookups never include the pivot.
    assert_eq!(sight.direction(Direction::South), &set(&[(1, 1)]));
    assert_eq!(sight.direction(Direction::West), &set(&[(0, 0)]));
    assert_eq!(sight.direction(Direction::East), &set(&[(0, 2), (0, 3)]));
    assert_eq!(sight.direction(Direction::SouthEast), &set(&[(1, 2), (2, 3)]));
    assert_eq!(sight.direction(Direction::SouthWest), &set(&[(1, 0)]));
    for blocked in [Direction::North, Direction::NorthEast, Direction::NorthWest] {
        assert!(sight.direction(blocked).is_empty(), "{blocked:?}");
    }
}

#[test]
fn all_line_of_sight_on_an_obstacle_pivot() {
    let (shape, obstacles) = fixture();

    let sight = all_line_of_sight(shape, p(1, 1), &obstacles, false).expect("sight");
    for orientation in Orientation::all() {
        assert!(sight.orientation(orientation).is_empty());
    }
    for direction in Direction::all() {
        assert!(sight.direction(direction).is_empty());
    }

    let sight = all_line_of_sight(shape, p(1, 1), &obstacles, true).expect("sight");
    for orientation in Orientation::all() {
        assert_eq!(sight.orientation(orientation), &set(&[(1, 1)]));
    }
    for direction in Direction::all() {
        assert!(sight.direction(direction).is_empty());
    }
}
