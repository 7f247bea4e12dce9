//! Random number helpers.
//!
//! Every random decision in the game takes the generator as an argument, so a
//! run is reproducible from its seed. [`GameRng`] is the concrete generator
//! used by the runtime; tests may pass any [`rand::Rng`].

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

use crate::action::CardinalDirection;
use crate::state::{MapDimensions, Position};

pub type GameRng = ChaCha8Rng;

/// Generator with a fixed seed, for replays and tests.
pub fn seeded(seed: u64) -> GameRng {
    GameRng::seed_from_u64(seed)
}

/// Uniform integer in `[min, max]`, both endpoints included.
///
/// A degenerate range (`min >= max`) yields `min`.
pub fn random_int<R: Rng + ?Sized>(rng: &mut R, min: i32, max: i32) -> i32 {
    if min >= max {
        return min;
    }
    rng.gen_range(min..=max)
}

/// Uniform cell of a grid with the given dimensions.
pub fn random_position<R: Rng + ?Sized>(rng: &mut R, dimensions: MapDimensions) -> Position {
    Position::new(
        random_int(rng, 0, dimensions.width as i32 - 1),
        random_int(rng, 0, dimensions.height as i32 - 1),
    )
}

pub fn random_direction<R: Rng + ?Sized>(rng: &mut R) -> CardinalDirection {
    let index = random_int(rng, 0, CardinalDirection::ALL.len() as i32 - 1);
    CardinalDirection::ALL[index as usize]
}
