//! Height-map generation
//!
//! A height map is a depth-major grid of integer column heights. Rows are
//! filled front to back, columns left to right. Each cell starts from the
//! cell in the previous row (or the starting height), is decremented when a
//! random draw falls below `column / columns`, and is then min-merged with its
//! left neighbor. The result never increases to the right or toward the back.

use crate::random::{RandomCursor, RandomSource};

/// Depth-major grid of column heights
///
/// Heights may be negative for large grids; a negative column simply has no
/// solid levels.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct HeightMap {
    depth: usize,
    columns: usize,
    heights: Vec<i32>,
}

impl HeightMap {
    /// Generate a height map, consuming one random value per cell
    ///
    /// A zero extent produces an empty map.
    pub fn generate<R: RandomSource + ?Sized>(
        depth: usize,
        columns: usize,
        starting_height: i32,
        source: &mut R,
        cursor: &mut RandomCursor,
    ) -> Self {
        let mut heights = vec![0i32; depth * columns];

        for row in 0..depth {
            for col in 0..columns {
                let mut height = if row > 0 {
                    heights[(row - 1) * columns + col]
                } else {
                    starting_height
                };

                if cursor.draw(source) < col as f64 / columns as f64 {
                    height -= 1;
                }

                if col > 0 {
                    height = height.min(heights[row * columns + col - 1]);
                }

                heights[row * columns + col] = height;
            }
        }

        log::debug!(
            "Generated {}x{} height map (cursor now at {})",
            depth,
            columns,
            cursor.index()
        );

        Self { depth, columns, heights }
    }

    /// Build a height map from explicit rows
    ///
    /// # Panics
    /// Panics if the rows are not all the same length.
    pub fn from_rows(rows: Vec<Vec<i32>>) -> Self {
        let depth = rows.len();
        let columns = rows.first().map(|r| r.len()).unwrap_or(0);
        assert!(
            rows.iter().all(|r| r.len() == columns),
            "height map rows must all have {} columns",
            columns
        );
        Self {
            depth,
            columns,
            heights: rows.into_iter().flatten().collect(),
        }
    }

    /// Number of rows (depth extent)
    #[inline]
    pub fn depth(&self) -> usize {
        self.depth
    }

    /// Number of columns (horizontal extent)
    #[inline]
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// True if the map has no cells
    pub fn is_empty(&self) -> bool {
        self.heights.is_empty()
    }

    /// Height at (depth, column), or `None` outside the grid
    #[inline]
    pub fn get(&self, depth: usize, column: usize) -> Option<i32> {
        if depth < self.depth && column < self.columns {
            Some(self.heights[depth * self.columns + column])
        } else {
            None
        }
    }

    /// Height at (depth, column)
    ///
    /// # Panics
    /// Panics if the cell is outside the grid.
    pub fn height(&self, depth: usize, column: usize) -> i32 {
        self.get(depth, column).unwrap_or_else(|| {
            panic!(
                "cell ({}, {}) outside {}x{} height map",
                depth, column, self.depth, self.columns
            )
        })
    }

    /// Iterate over rows, front to back
    pub fn rows(&self) -> impl Iterator<Item = &[i32]> {
        // chunks_exact panics on a zero chunk size
        self.heights.chunks_exact(self.columns.max(1))
    }

    /// Tallest column, if any
    pub fn max_height(&self) -> Option<i32> {
        self.heights.iter().copied().max()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::random::{ConstantSource, FixedSequence, RandomPool};

    fn assert_monotonic(map: &HeightMap) {
        for d in 0..map.depth() {
            for c in 0..map.columns() {
                if c > 0 {
                    assert!(map.height(d, c) <= map.height(d, c - 1),
                        "row {} increases at column {}", d, c);
                }
                if d > 0 {
                    assert!(map.height(d, c) <= map.height(d - 1, c),
                        "column {} increases at row {}", c, d);
                }
            }
        }
    }

    #[test]
    fn test_single_cell_never_decrements() {
        let mut cursor = RandomCursor::new();
        let map = HeightMap::generate(1, 1, 1, &mut ConstantSource(1.0), &mut cursor);
        assert_eq!(map.height(0, 0), 1);
        assert_eq!(cursor.index(), 1);
    }

    #[test]
    fn test_first_column_never_decrements() {
        // Decrement needs random < 0 / columns, which never holds
        let mut cursor = RandomCursor::new();
        let map = HeightMap::generate(4, 3, 7, &mut ConstantSource(0.0), &mut cursor);
        for d in 0..4 {
            assert_eq!(map.height(d, 0), 7);
        }
    }

    #[test]
    fn test_zero_random_decrements_all_but_first_column() {
        let mut cursor = RandomCursor::new();
        let map = HeightMap::generate(2, 3, 5, &mut ConstantSource(0.0), &mut cursor);
        assert_eq!(map.rows().collect::<Vec<_>>(), vec![&[5, 4, 4][..], &[5, 3, 3][..]]);
    }

    #[test]
    fn test_left_neighbor_min_merge() {
        // col 1 decrements (0.1 < 1/3), col 2 does not (0.9 >= 2/3) but is clamped
        let mut source = FixedSequence(vec![0.5, 0.1, 0.9]);
        let mut cursor = RandomCursor::new();
        let map = HeightMap::generate(1, 3, 4, &mut source, &mut cursor);
        assert_eq!(map.rows().next(), Some(&[4, 3, 3][..]));
    }

    #[test]
    fn test_monotonic_for_seeded_pools() {
        for seed in ["", "a", "voxel", "gallery-42"] {
            let mut pool = RandomPool::seeded(seed);
            let mut cursor = RandomCursor::new();
            let map = HeightMap::generate(10, 10, 10, &mut pool, &mut cursor);
            assert_monotonic(&map);
            assert_eq!(cursor.index(), 100);
        }
    }

    #[test]
    fn test_large_grid_may_go_negative() {
        let mut cursor = RandomCursor::new();
        let map = HeightMap::generate(30, 30, 2, &mut ConstantSource(0.0), &mut cursor);
        assert!(map.max_height().unwrap() >= 2);
        assert!(map.height(29, 29) < 0);
        assert_monotonic(&map);
    }

    #[test]
    fn test_zero_extent_is_empty() {
        let mut cursor = RandomCursor::new();
        let map = HeightMap::generate(0, 10, 10, &mut ConstantSource(0.5), &mut cursor);
        assert!(map.is_empty());
        assert_eq!(cursor.index(), 0);
        assert_eq!(map.max_height(), None);

        let map = HeightMap::generate(10, 0, 10, &mut ConstantSource(0.5), &mut cursor);
        assert!(map.is_empty());
        assert_eq!(map.rows().count(), 0);
    }

    #[test]
    fn test_get_outside_grid() {
        let map = HeightMap::from_rows(vec![vec![2, 1]]);
        assert_eq!(map.get(0, 1), Some(1));
        assert_eq!(map.get(0, 2), None);
        assert_eq!(map.get(1, 0), None);
    }

    #[test]
    #[should_panic(expected = "must all have")]
    fn test_from_rows_rejects_ragged() {
        HeightMap::from_rows(vec![vec![1, 2], vec![1]]);
    }
}
