//! Iteration driver.
//!
//! A `Solver` owns both grid buffers and a private rayon pool sized by
//! `SolverParameters::threads`. It moves through
//! `Initializing -> Iterating -> Converged`, where each iteration is
//! snapshot, sweep, then diff reduction. With `threads == 1` the same
//! code path is the serial reference.

use crate::boundary::*;
use crate::convergence::ConvergenceMonitor;
use crate::domain::*;
use crate::error::{Error, Result};
use crate::grid::PlateGrid;
use crate::par_stencil;
use std::time::{Duration, Instant};

/// Solver generation is configurable.
/// These are all the parameters.
#[derive(Copy, Clone, Debug)]
pub struct SolverParameters {
    /// Grid rows, at least 3.
    pub rows: usize,

    /// Grid columns, at least 3.
    pub cols: usize,

    /// Iteration stops once the diff is at or below this value.
    pub tolerance: f64,

    /// Worker threads in the solver's pool.
    pub threads: usize,

    /// Approximate number of cells per parallel task.
    pub chunk_size: usize,

    /// Give up after this many iterations.
    /// `None` runs until convergence however long it takes.
    pub max_iterations: Option<usize>,

    /// Fixed edge temperatures.
    pub boundary: BoundaryValues,
}

impl std::default::Default for SolverParameters {
    fn default() -> Self {
        SolverParameters {
            rows: 500,
            cols: 500,
            tolerance: 0.001,
            threads: 4,
            chunk_size: 1000,
            max_iterations: None,
            boundary: BoundaryValues::default(),
        }
    }
}

impl SolverParameters {
    pub fn validate(&self) -> Result<()> {
        check_dimensions(self.rows, self.cols)?;
        if self.threads == 0 {
            return Err(Error::InvalidThreadCount);
        }
        if self.chunk_size == 0 {
            return Err(Error::InvalidChunkSize);
        }
        if self.tolerance.is_nan() || self.tolerance < 0.0 {
            return Err(Error::InvalidTolerance(self.tolerance));
        }
        Ok(())
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum SolverState {
    Initializing,
    Iterating,
    Converged,
}

/// Queryable state after a completed iteration.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Progress {
    pub iteration: usize,
    pub diff: f64,
}

/// Output of a converged run.
pub struct Solution {
    pub grid: OwnedDomain<2>,
    pub iterations: usize,
    pub diff: f64,
    pub mean: f64,
    /// Wall time of the iteration loop, initialization excluded.
    pub elapsed: Duration,
}

pub struct Solver {
    params: SolverParameters,
    pool: rayon::ThreadPool,
    grid: PlateGrid,
    boundary: PlateBoundary,
    monitor: ConvergenceMonitor,
    state: SolverState,
    iteration: usize,
    mean: f64,
}

impl Solver {
    /// Validates parameters before anything is allocated.
    pub fn new(params: SolverParameters) -> Result<Self> {
        params.validate()?;
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(params.threads)
            .thread_name(|i| format!("plate_thread_{}", i))
            .build()?;
        let grid = PlateGrid::new(params.rows, params.cols);
        let boundary = PlateBoundary::new(params.boundary, *grid.aabb());
        Ok(Solver {
            params,
            pool,
            grid,
            boundary,
            monitor: ConvergenceMonitor::new(params.tolerance),
            state: SolverState::Initializing,
            iteration: 0,
            mean: 0.0,
        })
    }

    pub fn state(&self) -> SolverState {
        self.state
    }

    pub fn iteration(&self) -> usize {
        self.iteration
    }

    /// Diff of the last completed iteration, infinite before the first.
    pub fn diff(&self) -> f64 {
        self.monitor.diff()
    }

    /// Interior seed, only meaningful once initialized.
    pub fn mean(&self) -> f64 {
        self.mean
    }

    pub fn grid(&self) -> &PlateGrid {
        &self.grid
    }

    pub fn progress(&self) -> Progress {
        Progress {
            iteration: self.iteration,
            diff: self.monitor.diff(),
        }
    }

    /// Write the boundary and interior seed.
    /// Only does work while `Initializing`, returns the mean either way.
    pub fn initialize(&mut self) -> Result<f64> {
        if self.state != SolverState::Initializing {
            return Ok(self.mean);
        }
        let chunk_size = self.params.chunk_size;
        let current = &mut self.grid.current;
        let boundary = &self.boundary;
        self.mean = self
            .pool
            .install(|| initialize(current, boundary, chunk_size))?;
        self.state = SolverState::Iterating;
        Ok(self.mean)
    }

    /// Run one full iteration, initializing first if needed.
    /// Once converged this is a no-op that reports the final state.
    pub fn step(&mut self) -> Result<Progress> {
        match self.state {
            SolverState::Initializing => {
                self.initialize()?;
            }
            SolverState::Converged => return Ok(self.progress()),
            SolverState::Iterating => {}
        }

        let chunk_size = self.params.chunk_size;
        let grid = &mut self.grid;
        let monitor = &mut self.monitor;
        self.pool.install(|| {
            profiling::scope!("solver::iteration");
            grid.snapshot(chunk_size);
            par_stencil::jacobi_sweep(
                &grid.previous,
                &mut grid.current,
                chunk_size,
            );
            monitor.measure(grid, chunk_size);
        });
        self.iteration += 1;

        if self.monitor.converged() {
            self.state = SolverState::Converged;
        }
        Ok(self.progress())
    }

    pub fn run(self) -> Result<Solution> {
        self.run_with(|_| {})
    }

    /// Iterate to convergence, calling `observer` after every iteration.
    pub fn run_with<F: FnMut(Progress)>(
        mut self,
        mut observer: F,
    ) -> Result<Solution> {
        profiling::scope!("solver::run");
        self.initialize()?;

        let start = Instant::now();
        while self.state != SolverState::Converged {
            if let Some(max) = self.params.max_iterations {
                if self.iteration >= max {
                    return Err(Error::IterationLimit {
                        iterations: self.iteration,
                        diff: self.monitor.diff(),
                    });
                }
            }
            let progress = self.step()?;
            observer(progress);
        }
        let elapsed = start.elapsed();

        debug_assert!(boundary_intact(&self.grid.current, &self.boundary));
        Ok(Solution {
            iterations: self.iteration,
            diff: self.monitor.diff(),
            mean: self.mean,
            elapsed,
            grid: self.grid.into_current(),
        })
    }
}
