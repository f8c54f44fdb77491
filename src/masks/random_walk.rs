use rand::Rng;

use crate::{
    foundation::core::CanvasSize,
    foundation::error::MaskResult,
    raster::canvas::{FILLED, Mask},
};

const MOVES: [(i64, i64); 4] = [(0, 1), (0, -1), (1, 0), (-1, 0)];

/// Static mask traced by a lattice random walk.
///
/// The walk starts on a uniformly drawn cell and takes `length` unit steps
/// (default `width * height`). Steps that would leave the grid stay on the
/// edge. Every cell reached after a step is filled; the start cell is only
/// filled if the walk returns to it.
#[tracing::instrument(skip(rng))]
pub fn random_walk_mask<R: Rng + ?Sized>(
    rng: &mut R,
    size: CanvasSize,
    length: Option<u64>,
) -> MaskResult<Mask> {
    size.validate()?;
    let steps = length.unwrap_or_else(|| size.pixel_count());
    let rows = i64::from(size.height);
    let cols = i64::from(size.width);

    let mut mask = Mask::new(size);
    let mut row = rng.gen_range(0..rows);
    let mut col = rng.gen_range(0..cols);
    for _ in 0..steps {
        let (dr, dc) = MOVES[rng.gen_range(0..MOVES.len())];
        row = (row + dr).clamp(0, rows - 1);
        col = (col + dc).clamp(0, cols - 1);
        mask.set(col as u32, row as u32, FILLED);
    }
    Ok(mask)
}

#[cfg(test)]
#[path = "../../tests/unit/masks/random_walk.rs"]
mod tests;
