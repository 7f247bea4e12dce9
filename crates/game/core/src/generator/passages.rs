use std::collections::BTreeSet;

use rand::Rng;

use crate::config::CountRange;
use crate::rng::random_int;
use crate::state::{Grid, Tile};

/// Full-length corridors carved across the map.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Passages {
    /// Row indices carved across the full width, in the order drawn.
    pub rows: Vec<i32>,
    /// Column indices carved across the full height, in the order drawn.
    pub columns: Vec<i32>,
}

impl Passages {
    /// Draws distinct rows and columns. Counts larger than the grid are clamped.
    pub fn generate<R: Rng + ?Sized>(
        rng: &mut R,
        grid: &Grid,
        rows: CountRange,
        columns: CountRange,
    ) -> Self {
        Self {
            rows: distinct_indices(rng, rows, grid.height()),
            columns: distinct_indices(rng, columns, grid.width()),
        }
    }

    /// Carves rows first, then columns.
    pub fn carve(&self, grid: &mut Grid) {
        for &y in &self.rows {
            grid.fill_row(y, Tile::Floor);
        }
        for &x in &self.columns {
            grid.fill_column(x, Tile::Floor);
        }
    }
}

fn distinct_indices<R: Rng + ?Sized>(rng: &mut R, range: CountRange, extent: u32) -> Vec<i32> {
    let count = random_int(rng, range.min as i32, range.max as i32).min(extent as i32);
    let mut seen = BTreeSet::new();
    let mut picked = Vec::with_capacity(count.max(0) as usize);

    while (picked.len() as i32) < count {
        let index = random_int(rng, 0, extent as i32 - 1);
        if seen.insert(index) {
            picked.push(index);
        }
    }
    picked
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::state::MapDimensions;

    #[test]
    fn indices_are_distinct_and_in_range() {
        let grid = Grid::new(MapDimensions::new(40, 24), Tile::Wall);
        for seed in 0..50 {
            let mut rng = seeded(seed);
            let passages =
                Passages::generate(&mut rng, &grid, CountRange::new(3, 5), CountRange::new(3, 5));

            for lines in [&passages.rows, &passages.columns] {
                assert!((3..=5).contains(&lines.len()));
                let unique: BTreeSet<_> = lines.iter().collect();
                assert_eq!(unique.len(), lines.len());
            }
            assert!(passages.rows.iter().all(|&y| (0..24).contains(&y)));
            assert!(passages.columns.iter().all(|&x| (0..40).contains(&x)));
        }
    }

    #[test]
    fn counts_clamp_to_small_grids() {
        let grid = Grid::new(MapDimensions::new(2, 2), Tile::Wall);
        let mut rng = seeded(5);
        let passages =
            Passages::generate(&mut rng, &grid, CountRange::new(3, 5), CountRange::new(3, 5));
        assert_eq!(passages.rows.len(), 2);
        assert_eq!(passages.columns.len(), 2);
    }

    #[test]
    fn carving_opens_whole_lines() {
        let mut grid = Grid::new(MapDimensions::new(6, 4), Tile::Wall);
        let passages = Passages {
            rows: vec![1],
            columns: vec![4],
        };
        passages.carve(&mut grid);

        assert_eq!(grid.count(Tile::Floor), 6 + 4 - 1);
        assert!(grid.row(1).unwrap().iter().all(|&tile| tile == Tile::Floor));
    }
}
