use rand::Rng;

use crate::config::CountRange;
use crate::rng::random_int;
use crate::state::{Grid, Position, Tile};

use super::GenerationError;

/// Axis-aligned rectangle with inclusive corners.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Room {
    pub top_left: Position,
    pub bottom_right: Position,
}

impl Room {
    /// Room of `width` × `height` cells anchored at `top_left`.
    pub const fn new(top_left: Position, width: i32, height: i32) -> Self {
        Self {
            top_left,
            bottom_right: Position::new(top_left.x + width - 1, top_left.y + height - 1),
        }
    }

    pub const fn width(&self) -> i32 {
        self.bottom_right.x - self.top_left.x + 1
    }

    pub const fn height(&self) -> i32 {
        self.bottom_right.y - self.top_left.y + 1
    }

    pub const fn contains(&self, position: Position) -> bool {
        position.x >= self.top_left.x
            && position.x <= self.bottom_right.x
            && position.y >= self.top_left.y
            && position.y <= self.bottom_right.y
    }

    pub fn fits(&self, grid: &Grid) -> bool {
        grid.contains(self.top_left) && grid.contains(self.bottom_right)
    }

    /// Cells directly outside each of the four edges (corners excluded).
    pub fn border(&self) -> impl Iterator<Item = Position> + '_ {
        let Self {
            top_left: tl,
            bottom_right: br,
        } = *self;
        let horizontal = (tl.x..=br.x)
            .flat_map(move |x| [Position::new(x, tl.y - 1), Position::new(x, br.y + 1)]);
        let vertical = (tl.y..=br.y)
            .flat_map(move |y| [Position::new(tl.x - 1, y), Position::new(br.x + 1, y)]);
        horizontal.chain(vertical)
    }

    /// True if some in-bounds cell just outside the room is already floor.
    pub fn is_attached(&self, grid: &Grid) -> bool {
        self.border()
            .any(|position| grid.get(position) == Some(Tile::Floor))
    }

    pub fn carve(&self, grid: &mut Grid) {
        grid.fill_rect(self.top_left, self.bottom_right, Tile::Floor);
    }
}

/// Places between `count.min` and `count.max` rooms, carving each as soon as
/// it is accepted so later rooms may attach to earlier ones.
pub fn place_rooms<R: Rng + ?Sized>(
    rng: &mut R,
    grid: &mut Grid,
    count: CountRange,
    size: CountRange,
    max_attempts: u32,
) -> Result<Vec<Room>, GenerationError> {
    let target = random_int(rng, count.min as i32, count.max as i32) as u32;
    let max_width = (size.max).min(grid.width()) as i32;
    let max_height = (size.max).min(grid.height()) as i32;

    let mut rooms = Vec::with_capacity(target as usize);
    let mut attempts = 0;

    while (rooms.len() as u32) < target {
        if attempts >= max_attempts {
            return Err(GenerationError::RoomAttemptsExhausted {
                placed: rooms.len() as u32,
                target,
                attempts,
            });
        }
        attempts += 1;

        let width = random_int(rng, size.min as i32, max_width);
        let height = random_int(rng, size.min as i32, max_height);
        let left = random_int(rng, 0, grid.width() as i32 - width);
        let top = random_int(rng, 0, grid.height() as i32 - height);
        let room = Room::new(Position::new(left, top), width, height);

        if room.fits(grid) && room.is_attached(grid) {
            room.carve(grid);
            rooms.push(room);
        }
    }

    Ok(rooms)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::rng::seeded;
    use crate::state::MapDimensions;

    #[test]
    fn corners_are_inclusive() {
        let room = Room::new(Position::new(2, 3), 3, 4);
        assert_eq!(room.bottom_right, Position::new(4, 6));
        assert_eq!((room.width(), room.height()), (3, 4));
        assert!(room.contains(Position::new(4, 6)));
        assert!(!room.contains(Position::new(5, 6)));
    }

    #[test]
    fn attachment_requires_floor_beside_an_edge() {
        let mut grid = Grid::new(MapDimensions::new(10, 10), Tile::Wall);
        let room = Room::new(Position::new(3, 3), 3, 3);
        assert!(!room.is_attached(&grid));

        // Diagonal corner cells do not count.
        grid.set(Position::new(2, 2), Tile::Floor);
        assert!(!room.is_attached(&grid));

        grid.set(Position::new(6, 4), Tile::Floor);
        assert!(room.is_attached(&grid));
    }

    #[test]
    fn border_outside_the_grid_is_ignored() {
        let grid = Grid::new(MapDimensions::new(3, 3), Tile::Floor);
        let room = Room::new(Position::ORIGIN, 3, 3);
        assert!(!room.is_attached(&grid));
    }

    #[test]
    fn placed_rooms_fit_and_attach() {
        let mut grid = Grid::new(MapDimensions::new(40, 24), Tile::Wall);
        grid.fill_row(10, Tile::Floor);
        let before = grid.clone();

        let mut rng = seeded(9);
        let rooms = place_rooms(
            &mut rng,
            &mut grid,
            CountRange::new(5, 10),
            CountRange::new(3, 8),
            10_000,
        )
        .unwrap();

        assert!((5..=10).contains(&rooms.len()));
        let mut replay = before;
        for room in &rooms {
            assert!(room.fits(&replay));
            assert!((3..=8).contains(&room.width()));
            assert!((3..=8).contains(&room.height()));
            assert!(room.is_attached(&replay));
            room.carve(&mut replay);
        }
        assert_eq!(replay, grid);
    }

    #[test]
    fn unreachable_rooms_exhaust_attempts() {
        let mut grid = Grid::new(MapDimensions::new(20, 20), Tile::Wall);
        let mut rng = seeded(2);
        let err = place_rooms(
            &mut rng,
            &mut grid,
            CountRange::new(5, 5),
            CountRange::new(3, 3),
            50,
        )
        .unwrap_err();

        assert_eq!(
            err,
            GenerationError::RoomAttemptsExhausted {
                placed: 0,
                target: 5,
                attempts: 50,
            }
        );
    }
}
