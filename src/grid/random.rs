//! Random cell generation for grids

use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;

/// Number of letters cells are drawn from (`a..=z`).
pub const ALPHABET_LEN: u8 = 26;

/// Build the generator for a grid.
///
/// A seed gives a fully reproducible stream; without one the generator is
/// seeded from the operating system.
pub fn grid_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_os_rng(),
    }
}

/// Generate `count` cells in row-major order, each a lowercase ASCII letter.
pub fn fill_cells(count: usize, seed: Option<u64>) -> Vec<u8> {
    let mut rng = grid_rng(seed);
    (0..count)
        .map(|_| b'a' + rng.random_range(0..ALPHABET_LEN))
        .collect()
}
