//! Palindrome detection along the three scanned axes
//!
//! Every cell anchors up to three runs of the requested length:
//! - horizontal, read leftward from the cell
//! - vertical, read downward
//! - diagonal, read down and to the right
//!
//! The down-left anti-diagonal is not scanned. Runs that would leave the
//! grid are skipped, so cells near the bottom and right edges anchor fewer
//! candidates.

pub mod axis;
pub mod palindrome;

pub use axis::{Axis, AxisCounts, AxisHits, CellScanner, scan_cell};
pub use palindrome::is_palindrome;
