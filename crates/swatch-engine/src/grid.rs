//! Occupancy grid for cheap minimum-distance rejection.
//!
//! [`SpatialGridIndex`] partitions the sampling rectangle into square cells
//! and remembers which cells already hold an accepted point. A candidate is
//! rejected if its own cell is taken, or if an occupied cell lies closer
//! than the minimum pixel distance.
//!
//! # Approximation
//!
//! Neighbor distance is measured in whole cells (`sqrt(dx² + dy²) * cell`),
//! not between the actual points. Two points in adjacent cells may be
//! closer or farther apart than the estimate. This is good enough to spread
//! points out; it is not an exact minimum-distance guarantee.

/// Smallest cell edge in pixels.
pub const MIN_CELL_SIZE: f64 = 20.0;

/// A uniform occupancy grid over a `width × height` rectangle.
///
/// Built fresh for every sampling call; a cell once committed stays occupied
/// for the lifetime of the index.
///
/// # Example
///
/// ```
/// use swatch_engine::SpatialGridIndex;
///
/// let mut grid = SpatialGridIndex::new(200.0, 100.0, 24.0);
/// assert!(grid.test(50.0, 50.0));
/// grid.commit(50.0, 50.0);
/// assert!(!grid.test(52.0, 51.0));  // same cell
/// assert!(grid.test(150.0, 50.0));  // far away
/// ```
#[derive(Debug, Clone)]
pub struct SpatialGridIndex {
    cell_size: f64,
    min_distance: f64,
    search_radius: isize,
    cols: usize,
    rows: usize,
    occupied: Vec<bool>,
}

impl SpatialGridIndex {
    /// Create an empty grid covering `width × height` pixels.
    ///
    /// Cell size is `max(20, min_pixel_distance)`; the grid has
    /// `ceil(width / cell) × ceil(height / cell)` cells.
    pub fn new(width: f64, height: f64, min_pixel_distance: f64) -> Self {
        let cell_size = min_pixel_distance.max(MIN_CELL_SIZE);
        // Float-to-int casts saturate, so negative or NaN extents give 0 cells.
        let cols = (width / cell_size).ceil() as usize;
        let rows = (height / cell_size).ceil() as usize;
        let search_radius = (min_pixel_distance / cell_size).ceil() as isize;

        Self {
            cell_size,
            min_distance: min_pixel_distance,
            search_radius,
            cols,
            rows,
            occupied: vec![false; cols * rows],
        }
    }

    /// Edge length of one cell in pixels.
    #[inline]
    pub fn cell_size(&self) -> f64 {
        self.cell_size
    }

    /// Grid dimensions as `(columns, rows)`.
    #[inline]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.cols, self.rows)
    }

    /// Number of occupied cells.
    pub fn occupied_count(&self) -> usize {
        self.occupied.iter().filter(|&&o| o).count()
    }

    /// Cell coordinates `(col, row)` owning the point, or `None` if the
    /// point lies outside the grid.
    pub fn cell_of(&self, x: f64, y: f64) -> Option<(usize, usize)> {
        let gx = (x / self.cell_size).floor();
        let gy = (y / self.cell_size).floor();
        // Written as positive range checks so NaN falls through to None.
        if !(gx >= 0.0 && gx < self.cols as f64 && gy >= 0.0 && gy < self.rows as f64) {
            return None;
        }
        Some((gx as usize, gy as usize))
    }

    /// Whether the cell at `(col, row)` holds an accepted point.
    #[inline]
    pub fn is_occupied(&self, col: usize, row: usize) -> bool {
        col < self.cols && row < self.rows && self.occupied[row * self.cols + col]
    }

    /// Returns `true` if a point at `(x, y)` may be accepted.
    ///
    /// Points outside the grid are always rejected.
    pub fn test(&self, x: f64, y: f64) -> bool {
        let Some((col, row)) = self.cell_of(x, y) else {
            return false;
        };
        if self.is_occupied(col, row) {
            return false;
        }

        let radius = self.search_radius;
        for dy in -radius..=radius {
            for dx in -radius..=radius {
                let c = col as isize + dx;
                let r = row as isize + dy;
                if c < 0 || r < 0 || !self.is_occupied(c as usize, r as usize) {
                    continue;
                }
                let cell_distance = ((dx * dx + dy * dy) as f64).sqrt() * self.cell_size;
                if cell_distance < self.min_distance {
                    return false;
                }
            }
        }
        true
    }

    /// Mark the cell owning `(x, y)` as occupied.
    ///
    /// Points outside the grid are ignored.
    pub fn commit(&mut self, x: f64, y: f64) {
        if let Some((col, row)) = self.cell_of(x, y) {
            self.occupied[row * self.cols + col] = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cell_size_has_floor() {
        assert_eq!(SpatialGridIndex::new(100.0, 100.0, 5.0).cell_size(), 20.0);
        assert_eq!(SpatialGridIndex::new(100.0, 100.0, 24.0).cell_size(), 24.0);
    }

    #[test]
    fn test_dimensions_round_up() {
        let grid = SpatialGridIndex::new(100.0, 50.0, 24.0);
        // 100/24 = 4.17 -> 5, 50/24 = 2.08 -> 3
        assert_eq!(grid.dimensions(), (5, 3));
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_degenerate_extent_has_no_cells() {
        let grid = SpatialGridIndex::new(-10.0, 40.0, 24.0);
        assert_eq!(grid.dimensions().0, 0);
        assert!(!grid.test(1.0, 1.0));
    }

    #[test]
    fn test_outside_points_are_rejected() {
        let mut grid = SpatialGridIndex::new(100.0, 100.0, 24.0);
        assert!(!grid.test(-1.0, 10.0));
        assert!(!grid.test(10.0, 500.0));
        assert!(!grid.test(f64::NAN, 10.0));

        // Committing outside is a no-op
        grid.commit(-5.0, -5.0);
        assert_eq!(grid.occupied_count(), 0);
    }

    #[test]
    fn test_occupied_cell_rejects() {
        let mut grid = SpatialGridIndex::new(240.0, 240.0, 24.0);
        grid.commit(30.0, 30.0);
        assert_eq!(grid.cell_of(30.0, 30.0), Some((1, 1)));
        assert!(grid.is_occupied(1, 1));
        assert!(!grid.test(40.0, 40.0));
    }

    #[test]
    fn test_neighbor_distance_uses_cell_units() {
        // cell = 24, radius = 1: an adjacent cell is 24 away in cell units,
        // which is not below the 24px minimum, so it is allowed.
        let mut grid = SpatialGridIndex::new(240.0, 240.0, 24.0);
        grid.commit(30.0, 30.0); // cell (1,1)
        assert!(grid.test(50.0, 30.0)); // cell (2,1), actual distance 20px

        // With a 30px minimum and cell 30, adjacency is also exactly 30.
        let mut grid = SpatialGridIndex::new(300.0, 300.0, 30.0);
        grid.commit(45.0, 45.0);
        assert!(grid.test(75.0, 45.0));
    }

    #[test]
    fn test_only_own_cell_blocks_when_cell_covers_min_distance() {
        // The cell edge is never smaller than the minimum distance, so the
        // nearest neighbor estimate (one cell) never falls below it.
        for min_distance in [5.0, 20.0, 24.0, 40.0] {
            let mut grid = SpatialGridIndex::new(400.0, 400.0, min_distance);
            let cell = grid.cell_size();
            let center = cell * 3.5;
            grid.commit(center, center);

            assert!(!grid.test(center + 1.0, center + 1.0));
            assert!(grid.test(center + cell, center));
            assert!(grid.test(center + cell, center + cell));
        }
    }
}
