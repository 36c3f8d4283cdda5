use crate::domain::*;
use crate::grid::PlateGrid;
use rayon::prelude::*;

/// Largest `|current - previous|` over the interior cells.
/// Each task reduces a block of rows to a local maximum and the
/// blocks are merged with a max reduction, so any partitioning
/// gives the same answer. Zero if there is no interior.
pub fn max_abs_diff(
    current: &OwnedDomain<2>,
    previous: &OwnedDomain<2>,
    chunk_size: usize,
) -> f64 {
    profiling::scope!("convergence::max_abs_diff");
    debug_assert_eq!(current.aabb(), previous.aabb());
    let rows = current.aabb().rows();
    let cols = current.aabb().cols();
    if rows < 3 || cols < 3 {
        return 0.0;
    }

    let rows_per_task = (chunk_size / cols).max(1);
    let interior = cols..(rows - 1) * cols;
    let a = &current.buffer()[interior.clone()];
    let b = &previous.buffer()[interior];

    a.par_chunks(rows_per_task * cols)
        .zip(b.par_chunks(rows_per_task * cols))
        .map(|(a_block, b_block)| {
            let mut local_max: f64 = 0.0;
            for (a_row, b_row) in a_block.chunks(cols).zip(b_block.chunks(cols)) {
                for (x, y) in a_row[1..cols - 1].iter().zip(&b_row[1..cols - 1]) {
                    local_max = local_max.max((x - y).abs());
                }
            }
            local_max
        })
        .reduce(|| 0.0, f64::max)
}

/// Tracks the diff of the latest iteration against the tolerance.
#[derive(Copy, Clone, Debug)]
pub struct ConvergenceMonitor {
    tolerance: f64,
    diff: f64,
}

impl ConvergenceMonitor {
    /// Starts with an infinite diff so the first iteration always runs.
    pub fn new(tolerance: f64) -> Self {
        ConvergenceMonitor {
            tolerance,
            diff: f64::INFINITY,
        }
    }

    pub fn measure(&mut self, grid: &PlateGrid, chunk_size: usize) -> f64 {
        self.diff = max_abs_diff(&grid.current, &grid.previous, chunk_size);
        self.diff
    }

    pub fn diff(&self) -> f64 {
        self.diff
    }

    pub fn converged(&self) -> bool {
        self.diff <= self.tolerance
    }
}
