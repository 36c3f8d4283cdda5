//! Fixed edge values of the plate and the interior seed.
//!
//! Corners belong to the top and bottom edges, so the left and right
//! edges only cover rows `1..rows - 1`.

use crate::domain::*;
use crate::error::{Error, Result};
use crate::util::*;
use rayon::prelude::*;

/// Fixed value lookup, `None` for cells that are free to change.
pub trait BCCheck<const GRID_DIMENSION: usize>: Sync {
    fn check(&self, world_coord: &Coord<GRID_DIMENSION>) -> Option<f64>;
}

/// Temperatures held on each edge of the plate.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct BoundaryValues {
    pub top: f64,
    pub bottom: f64,
    pub left: f64,
    pub right: f64,
}

impl Default for BoundaryValues {
    fn default() -> Self {
        BoundaryValues {
            top: 0.0,
            bottom: 100.0,
            left: 100.0,
            right: 100.0,
        }
    }
}

impl BoundaryValues {
    /// Smallest and largest edge temperature.
    pub fn range(&self) -> (f64, f64) {
        (
            self.top.min(self.bottom).min(self.left).min(self.right),
            self.top.max(self.bottom).max(self.left).max(self.right),
        )
    }
}

/// Edge values laid over a concrete grid.
pub struct PlateBoundary {
    values: BoundaryValues,
    aabb: AABB<2>,
}

impl PlateBoundary {
    pub fn new(values: BoundaryValues, aabb: AABB<2>) -> Self {
        PlateBoundary { values, aabb }
    }
}

impl BCCheck<2> for PlateBoundary {
    fn check(&self, world_coord: &Coord<2>) -> Option<f64> {
        let min = self.aabb.min();
        let max = self.aabb.max();
        if world_coord[0] == min[0] {
            Some(self.values.top)
        } else if world_coord[0] == max[0] {
            Some(self.values.bottom)
        } else if world_coord[1] == min[1] {
            Some(self.values.left)
        } else if world_coord[1] == max[1] {
            Some(self.values.right)
        } else {
            None
        }
    }
}

/// Fail unless the grid has a non-empty interior, each side fits the
/// `i32` coordinates of `AABB` and the cell count fits in `usize`.
pub fn check_dimensions(rows: usize, cols: usize) -> Result<()> {
    let max_side = i32::MAX as usize;
    if rows < 3
        || cols < 3
        || rows > max_side
        || cols > max_side
        || rows.checked_mul(cols).is_none()
    {
        return Err(Error::InvalidDimension { rows, cols });
    }
    Ok(())
}

/// Number of edge cells, each counted once.
pub fn boundary_sample_count(rows: usize, cols: usize) -> usize {
    2 * rows + 2 * cols - 4
}

/// Arithmetic mean of the edge cells of a 2D domain.
///
/// Rows are reduced in parallel, then the row partials are summed in
/// row order so the result does not depend on how the work was split.
pub fn boundary_mean(domain: &OwnedDomain<2>) -> f64 {
    profiling::scope!("boundary::mean");
    let rows = domain.aabb().rows();
    let cols = domain.aabb().cols();
    debug_assert!(rows >= 3 && cols >= 3);

    let partials: Vec<f64> = domain
        .buffer()
        .par_chunks(cols)
        .enumerate()
        .map(|(r, row)| {
            if r == 0 || r == rows - 1 {
                row.iter().sum()
            } else {
                row[0] + row[cols - 1]
            }
        })
        .collect();

    let sum: f64 = partials.iter().sum();
    sum / boundary_sample_count(rows, cols) as f64
}

/// Write the edge values, then seed every interior cell with their mean.
/// Returns the mean.
pub fn initialize<BC: BCCheck<2>>(
    domain: &mut OwnedDomain<2>,
    bc: &BC,
    chunk_size: usize,
) -> Result<f64> {
    profiling::scope!("boundary::initialize");
    let aabb = *domain.aabb();
    check_dimensions(aabb.rows(), aabb.cols())?;

    domain.par_modify_access(chunk_size).for_each(
        |mut d: DomainChunk<'_, 2>| {
            d.coord_iter_mut().for_each(|(world_coord, value_mut)| {
                if let Some(v) = bc.check(&world_coord) {
                    *value_mut = v;
                }
            })
        },
    );

    // Interior fill must not start before the mean is final.
    let mean = boundary_mean(domain);

    domain.par_modify_access(chunk_size).for_each(
        |mut d: DomainChunk<'_, 2>| {
            d.coord_iter_mut().for_each(|(world_coord, value_mut)| {
                if !aabb.on_face(&world_coord) {
                    *value_mut = mean;
                }
            })
        },
    );

    Ok(mean)
}

/// Whether every edge cell still holds its fixed value.
pub fn boundary_intact<BC: BCCheck<2>>(domain: &OwnedDomain<2>, bc: &BC) -> bool {
    domain
        .aabb()
        .coord_iter()
        .filter_map(|c| bc.check(&c).map(|v| (c, v)))
        .all(|(c, v)| domain.view(&c) == v)
}
