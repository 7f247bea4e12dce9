use super::{MapDimensions, Position, Tile};

/// Fixed-size rectangular tile grid stored in row-major order.
///
/// Every accessor bounds-checks its position first; there is no way to index
/// outside the grid.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    dimensions: MapDimensions,
    tiles: Vec<Tile>,
}

impl Grid {
    /// Creates a grid with every cell set to `fill`.
    pub fn new(dimensions: MapDimensions, fill: Tile) -> Self {
        Self {
            dimensions,
            tiles: vec![fill; dimensions.area()],
        }
    }

    /// Parses a grid from rows of glyphs. Used by tests and fixtures.
    ///
    /// `#` wall, `.` floor, `@` hero, `e` enemy, `/` sword, `!` potion.
    /// Returns `None` on ragged rows or unknown glyphs.
    pub fn from_rows(rows: &[&str]) -> Option<Self> {
        let height = rows.len();
        let width = rows.first().map(|row| row.chars().count())?;
        let mut tiles = Vec::with_capacity(width * height);

        for row in rows {
            if row.chars().count() != width {
                return None;
            }
            for glyph in row.chars() {
                tiles.push(match glyph {
                    '#' => Tile::Wall,
                    '.' => Tile::Floor,
                    '@' => Tile::Hero,
                    'e' => Tile::Enemy,
                    '/' => Tile::Sword,
                    '!' => Tile::HealingPotion,
                    _ => return None,
                });
            }
        }

        Some(Self {
            dimensions: MapDimensions::new(width as u32, height as u32),
            tiles,
        })
    }

    pub fn dimensions(&self) -> MapDimensions {
        self.dimensions
    }

    pub fn width(&self) -> u32 {
        self.dimensions.width
    }

    pub fn height(&self) -> u32 {
        self.dimensions.height
    }

    pub fn contains(&self, position: Position) -> bool {
        self.dimensions.contains(position)
    }

    fn index(&self, position: Position) -> Option<usize> {
        if !self.contains(position) {
            return None;
        }
        Some(position.y as usize * self.dimensions.width as usize + position.x as usize)
    }

    /// Tile at `position`, or `None` when the position lies outside the grid.
    pub fn get(&self, position: Position) -> Option<Tile> {
        self.index(position).map(|index| self.tiles[index])
    }

    /// Overwrites the tile at `position` and returns the previous value.
    ///
    /// Returns `None` and leaves the grid untouched when out of bounds.
    pub fn set(&mut self, position: Position, tile: Tile) -> Option<Tile> {
        let index = self.index(position)?;
        Some(std::mem::replace(&mut self.tiles[index], tile))
    }

    pub fn fill(&mut self, tile: Tile) {
        self.tiles.fill(tile);
    }

    /// Sets every cell of row `y` to `tile`. Out-of-range rows are ignored.
    pub fn fill_row(&mut self, y: i32, tile: Tile) {
        for x in 0..self.dimensions.width as i32 {
            let _ = self.set(Position::new(x, y), tile);
        }
    }

    /// Sets every cell of column `x` to `tile`. Out-of-range columns are ignored.
    pub fn fill_column(&mut self, x: i32, tile: Tile) {
        for y in 0..self.dimensions.height as i32 {
            let _ = self.set(Position::new(x, y), tile);
        }
    }

    /// Sets every cell of the inclusive rectangle `[top_left, bottom_right]`.
    pub fn fill_rect(&mut self, top_left: Position, bottom_right: Position, tile: Tile) {
        for y in top_left.y..=bottom_right.y {
            for x in top_left.x..=bottom_right.x {
                let _ = self.set(Position::new(x, y), tile);
            }
        }
    }

    pub fn count(&self, tile: Tile) -> usize {
        self.tiles.iter().filter(|&&t| t == tile).count()
    }

    /// All positions holding `tile`, in row-major order.
    pub fn positions_of(&self, tile: Tile) -> impl Iterator<Item = Position> + '_ {
        self.iter()
            .filter(move |(_, t)| *t == tile)
            .map(|(position, _)| position)
    }

    /// Iterates `(position, tile)` pairs in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = (Position, Tile)> + '_ {
        let width = self.dimensions.width as usize;
        self.tiles.iter().enumerate().map(move |(index, tile)| {
            let position = Position::new((index % width) as i32, (index / width) as i32);
            (position, *tile)
        })
    }

    /// Row `y` as a slice, top row first.
    pub fn row(&self, y: u32) -> Option<&[Tile]> {
        if y >= self.dimensions.height {
            return None;
        }
        let width = self.dimensions.width as usize;
        let start = y as usize * width;
        Some(&self.tiles[start..start + width])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn out_of_bounds_access_is_rejected() {
        let mut grid = Grid::new(MapDimensions::new(3, 2), Tile::Wall);
        assert_eq!(grid.get(Position::new(3, 0)), None);
        assert_eq!(grid.get(Position::new(0, -1)), None);
        assert_eq!(grid.set(Position::new(0, 2), Tile::Floor), None);
        assert_eq!(grid.count(Tile::Floor), 0);
    }

    #[test]
    fn fills_rows_columns_and_rects() {
        let mut grid = Grid::new(MapDimensions::new(5, 4), Tile::Wall);
        grid.fill_row(1, Tile::Floor);
        grid.fill_column(3, Tile::Floor);
        assert_eq!(grid.count(Tile::Floor), 5 + 4 - 1);

        grid.fill(Tile::Wall);
        grid.fill_rect(Position::new(1, 1), Position::new(2, 3), Tile::Floor);
        assert_eq!(grid.count(Tile::Floor), 6);
        assert_eq!(grid.get(Position::new(2, 3)), Some(Tile::Floor));
        assert_eq!(grid.get(Position::new(3, 3)), Some(Tile::Wall));
    }

    #[test]
    fn parses_glyph_rows() {
        let grid = Grid::from_rows(&["#.@", "e/!"]).unwrap();
        assert_eq!(grid.dimensions(), MapDimensions::new(3, 2));
        assert_eq!(grid.get(Position::new(2, 0)), Some(Tile::Hero));
        assert_eq!(grid.get(Position::new(0, 1)), Some(Tile::Enemy));
        assert_eq!(grid.row(1), Some(&[Tile::Enemy, Tile::Sword, Tile::HealingPotion][..]));
        assert!(Grid::from_rows(&["##", "#"]).is_none());
        assert!(Grid::from_rows(&["#x"]).is_none());
    }
}
