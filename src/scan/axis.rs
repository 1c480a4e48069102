//! Per-cell extraction of axis runs

use crate::grid::Grid;
use crate::scan::palindrome::is_palindrome;
use std::fmt;
use std::ops::AddAssign;

/// Direction a run is read in, starting from its anchor cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    /// Leftward along the row: `(r, c), (r, c-1), ...`
    Horizontal,
    /// Downward along the column: `(r, c), (r+1, c), ...`
    Vertical,
    /// Down and right: `(r, c), (r+1, c+1), ...`
    Diagonal,
}

impl Axis {
    pub const ALL: [Axis; 3] = [Axis::Horizontal, Axis::Vertical, Axis::Diagonal];

    /// Whether a run of `length` anchored at `(r, c)` stays inside a
    /// `rows x cols` grid. Any `length` is accepted without overflow.
    pub fn fits(self, r: usize, c: usize, length: usize, rows: usize, cols: usize) -> bool {
        let down = length <= rows.saturating_sub(r);
        match self {
            Axis::Horizontal => length <= c.saturating_add(1),
            Axis::Vertical => down,
            Axis::Diagonal => down && length <= cols.saturating_sub(c),
        }
    }

    /// Coordinates of the `k`-th cell of a run anchored at `(r, c)`.
    #[inline]
    fn step(self, r: usize, c: usize, k: usize) -> (usize, usize) {
        match self {
            Axis::Horizontal => (r, c - k),
            Axis::Vertical => (r + k, c),
            Axis::Diagonal => (r + k, c + k),
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Axis::Horizontal => write!(f, "horizontal"),
            Axis::Vertical => write!(f, "vertical"),
            Axis::Diagonal => write!(f, "diagonal"),
        }
    }
}

/// Which of the three runs anchored at one cell are palindromes.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisHits {
    pub horizontal: bool,
    pub vertical: bool,
    pub diagonal: bool,
}

impl AxisHits {
    /// Number of palindromic runs, in `0..=3`.
    pub fn count(&self) -> u32 {
        self.horizontal as u32 + self.vertical as u32 + self.diagonal as u32
    }

    fn set(&mut self, axis: Axis) {
        match axis {
            Axis::Horizontal => self.horizontal = true,
            Axis::Vertical => self.vertical = true,
            Axis::Diagonal => self.diagonal = true,
        }
    }
}

/// Palindrome tallies split by axis.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct AxisCounts {
    pub horizontal: u64,
    pub vertical: u64,
    pub diagonal: u64,
}

impl AxisCounts {
    pub fn total(&self) -> u64 {
        self.horizontal + self.vertical + self.diagonal
    }

    pub fn get(&self, axis: Axis) -> u64 {
        match axis {
            Axis::Horizontal => self.horizontal,
            Axis::Vertical => self.vertical,
            Axis::Diagonal => self.diagonal,
        }
    }

    /// Add the hits of one cell.
    pub fn record(&mut self, hits: AxisHits) {
        self.horizontal += hits.horizontal as u64;
        self.vertical += hits.vertical as u64;
        self.diagonal += hits.diagonal as u64;
    }
}

impl AddAssign for AxisCounts {
    fn add_assign(&mut self, rhs: Self) {
        self.horizontal += rhs.horizontal;
        self.vertical += rhs.vertical;
        self.diagonal += rhs.diagonal;
    }
}

impl std::iter::Sum for AxisCounts {
    fn sum<I: Iterator<Item = Self>>(iter: I) -> Self {
        iter.fold(AxisCounts::default(), |mut acc, c| {
            acc += c;
            acc
        })
    }
}

/// Scans cells of one grid for runs of a fixed length.
///
/// Holds a single run buffer that is refilled for every candidate, so a
/// worker can scan its whole row range without allocating. The buffer never
/// exceeds the longest run the grid can hold; longer lengths match nothing.
#[derive(Debug)]
pub struct CellScanner<'g> {
    grid: &'g Grid,
    length: usize,
    buffer: Vec<u8>,
}

impl<'g> CellScanner<'g> {
    pub fn new(grid: &'g Grid, length: usize) -> Self {
        Self {
            grid,
            length,
            buffer: vec![0; length.min(grid.rows().max(grid.cols()))],
        }
    }

    pub fn length(&self) -> usize {
        self.length
    }

    /// Test every run anchored at `(r, c)` that fits in the grid.
    pub fn scan(&mut self, r: usize, c: usize) -> AxisHits {
        let mut hits = AxisHits::default();
        for axis in Axis::ALL {
            if self.run_is_palindrome(axis, r, c) {
                hits.set(axis);
            }
        }
        hits
    }

    /// Copy the run along `axis` into the buffer and test it. Runs leaving
    /// the grid count as non-palindromes.
    fn run_is_palindrome(&mut self, axis: Axis, r: usize, c: usize) -> bool {
        let (rows, cols) = (self.grid.rows(), self.grid.cols());
        if !axis.fits(r, c, self.length, rows, cols) {
            return false;
        }
        for k in 0..self.length {
            let (rr, cc) = axis.step(r, c, k);
            self.buffer[k] = self.grid.get(rr, cc);
        }
        is_palindrome(&self.buffer[..self.length])
    }
}

/// Number of palindromic runs of `length` anchored at `(r, c)`, in `0..=3`.
///
/// Convenience wrapper over [`CellScanner`] for one-off queries.
pub fn scan_cell(grid: &Grid, r: usize, c: usize, length: usize) -> u32 {
    CellScanner::new(grid, length).scan(r, c).count()
}
