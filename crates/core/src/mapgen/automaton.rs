//! Cellular-automaton smoothing pass that turns noise grids into cave walls.

use crate::types::{Cell, MapGenError, Pos};

use super::grid::Grid;

/// Applies one smoothing iteration and returns the resulting grid.
///
/// Every cell counts the `Wall` cells in the square neighborhood of the given
/// radius, center excluded. Offsets that fall off the grid count as `Wall`
/// (closed boundary), which biases map edges toward closing up. A cell whose
/// count reaches `threshold` becomes `Wall`, everything else becomes `Open`;
/// the comparison is `>=`, so a fractional threshold ties toward `Wall`.
///
/// All counts read the input grid; each output cell is independent of the
/// scan order.
pub fn smooth_step(grid: &Grid, radius: i32, threshold: f64) -> Result<Grid, MapGenError> {
    if radius < 1 {
        return Err(MapGenError::InvalidParameter("smoothing radius must be at least 1"));
    }

    let mut next = grid.clone();
    for y in 0..grid.height() as i32 {
        for x in 0..grid.width() as i32 {
            let pos = Pos { y, x };
            let walls = wall_neighbor_count(grid, pos, radius);
            let cell = if f64::from(walls) >= threshold { Cell::Wall } else { Cell::Open };
            next.set_cell(pos, cell)?;
        }
    }
    Ok(next)
}

fn wall_neighbor_count(grid: &Grid, center: Pos, radius: i32) -> u32 {
    let mut count = 0;
    for dy in -radius..=radius {
        for dx in -radius..=radius {
            if dy == 0 && dx == 0 {
                continue;
            }
            let neighbor = Pos { y: center.y + dy, x: center.x + dx };
            if grid.cell_or_wall(neighbor) == Cell::Wall {
                count += 1;
            }
        }
    }
    count
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn smoothing_preserves_grid_dimensions() {
        let mut grid = Grid::filled(30, 20, Cell::Open);
        grid.set_cell(Pos { y: 4, x: 9 }, Cell::Wall).expect("in-range write");

        for radius in 1..=3 {
            let smoothed = smooth_step(&grid, radius, 5.0).expect("valid radius");
            assert_eq!(smoothed.width(), grid.width());
            assert_eq!(smoothed.height(), grid.height());
        }
    }

    #[test]
    fn all_wall_grid_is_a_fixed_point() {
        let grid = Grid::filled(12, 9, Cell::Wall);

        for threshold in [1.0, 5.0, 8.0] {
            let smoothed = smooth_step(&grid, 1, threshold).expect("valid radius");
            assert!(
                smoothed.cells().iter().all(|&cell| cell == Cell::Wall),
                "an all-wall grid must stay all-wall at threshold {threshold}"
            );
        }
    }

    #[test]
    fn smoothing_closes_corners_of_an_open_map() {
        // Radius 1 on an all-open grid: a corner sees 5 off-grid offsets,
        // a non-corner edge cell 3, an interior cell 0.
        let grid = Grid::filled(30, 20, Cell::Open);
        let smoothed = smooth_step(&grid, 1, 5.0).expect("valid radius");

        let corners = [
            Pos { y: 0, x: 0 },
            Pos { y: 0, x: 29 },
            Pos { y: 19, x: 0 },
            Pos { y: 19, x: 29 },
        ];
        for corner in corners {
            assert_eq!(smoothed.cell_at(corner), Ok(Cell::Wall), "corner {corner:?}");
        }

        assert_eq!(smoothed.cell_at(Pos { y: 0, x: 1 }), Ok(Cell::Open), "edge cell");
        assert_eq!(smoothed.cell_at(Pos { y: 10, x: 15 }), Ok(Cell::Open), "interior cell");

        let wall_total = smoothed.cells().iter().filter(|&&cell| cell == Cell::Wall).count();
        assert_eq!(wall_total, corners.len(), "only the 4 corners close up");
    }

    #[test]
    fn threshold_tie_turns_the_cell_to_wall() {
        // Center of a 3x3 grid with exactly 3 wall neighbors, all in bounds.
        let mut grid = Grid::filled(3, 3, Cell::Open);
        for pos in [Pos { y: 0, x: 0 }, Pos { y: 0, x: 1 }, Pos { y: 0, x: 2 }] {
            grid.set_cell(pos, Cell::Wall).expect("in-range write");
        }
        let center = Pos { y: 1, x: 1 };

        let tied = smooth_step(&grid, 1, 3.0).expect("valid radius");
        assert_eq!(tied.cell_at(center), Ok(Cell::Wall));

        let above = smooth_step(&grid, 1, 3.5).expect("valid radius");
        assert_eq!(above.cell_at(center), Ok(Cell::Open));
    }

    #[test]
    fn non_positive_radius_is_rejected() {
        let grid = Grid::filled(5, 5, Cell::Open);

        for radius in [0, -1] {
            assert_eq!(
                smooth_step(&grid, radius, 5.0),
                Err(MapGenError::InvalidParameter("smoothing radius must be at least 1"))
            );
        }
    }

    #[test]
    fn input_grid_is_left_untouched() {
        let grid = Grid::filled(8, 8, Cell::Open);
        let before = grid.clone();

        let _ = smooth_step(&grid, 1, 5.0).expect("valid radius");

        assert_eq!(grid, before);
    }
}
