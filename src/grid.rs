use crate::domain::*;
use crate::util::*;

/// Double buffered plate state.
/// `current` holds the latest field, `previous` the snapshot a sweep reads.
pub struct PlateGrid {
    pub current: OwnedDomain<2>,
    pub previous: OwnedDomain<2>,
}

impl PlateGrid {
    pub fn new(rows: usize, cols: usize) -> Self {
        let aabb = AABB::grid(rows, cols);
        PlateGrid {
            current: OwnedDomain::new(aabb),
            previous: OwnedDomain::new(aabb),
        }
    }

    pub fn aabb(&self) -> &AABB<2> {
        self.current.aabb()
    }

    /// Full copy of `current` into `previous`, boundary included.
    pub fn snapshot(&mut self, chunk_size: usize) {
        profiling::scope!("grid::snapshot");
        self.previous.par_copy_from(&self.current, chunk_size);
    }

    pub fn into_current(self) -> OwnedDomain<2> {
        self.current
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn snapshot_test() {
        let mut grid = PlateGrid::new(4, 6);
        grid.current.par_set_values(|c| (c[0] * 6 + c[1]) as f64, 5);
        grid.snapshot(5);
        assert_eq!(grid.current.buffer(), grid.previous.buffer());

        grid.current.set_coord(&vector![1, 1], -1.0);
        assert_eq!(grid.previous.view(&vector![1, 1]), 7.0);
    }
}
