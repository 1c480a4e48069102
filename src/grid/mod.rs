//! Character grid: construction, seeded generation and read-only access

pub mod random;
pub mod types;

pub use random::{ALPHABET_LEN, fill_cells};
pub use types::Grid;
