//! Food placement on free grid cells

use std::collections::HashSet;

use rand::Rng;
use rand::seq::SliceRandom;

use super::board::Position;

/// Random draws tried before falling back to enumerating the free cells
const MAX_SAMPLES: usize = 64;

/// Pick a uniformly random cell of the `width` x `height` grid that is not in
/// `occupied`.
///
/// Rejection sampling is tried first since the board is usually sparse. Once
/// the sample budget is spent the free cells are listed and one is chosen
/// directly, so the call always terminates. Returns `None` only when every
/// cell is occupied.
pub fn place_food<R>(
    occupied: &HashSet<Position>,
    width: usize,
    height: usize,
    rng: &mut R,
) -> Option<Position>
where
    R: Rng + ?Sized,
{
    if width == 0 || height == 0 {
        return None;
    }

    for _ in 0..MAX_SAMPLES {
        let x = rng.gen_range(0..width) as i32;
        let y = rng.gen_range(0..height) as i32;
        let pos = Position::new(x, y);

        if !occupied.contains(&pos) {
            return Some(pos);
        }
    }

    let free: Vec<Position> = (0..height as i32)
        .flat_map(|y| (0..width as i32).map(move |x| Position::new(x, y)))
        .filter(|pos| !occupied.contains(pos))
        .collect();

    free.choose(rng).copied()
}
