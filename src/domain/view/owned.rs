use super::*;
use crate::util::*;

pub struct OwnedDomain<const GRID_DIMENSION: usize> {
    aabb: AABB<GRID_DIMENSION>,
    buffer: Vec<f64>,
}

impl<const GRID_DIMENSION: usize> OwnedDomain<GRID_DIMENSION> {
    /// Zero filled domain covering `aabb`.
    pub fn new(aabb: AABB<GRID_DIMENSION>) -> Self {
        let buffer = vec![0.0; aabb.buffer_size()];
        OwnedDomain { aabb, buffer }
    }
}

impl OwnedDomain<2> {
    /// Borrow one full row of a 2D domain.
    pub fn row(&self, r: usize) -> &[f64] {
        let cols = self.aabb.cols();
        &self.buffer[r * cols..(r + 1) * cols]
    }
}

impl<const GRID_DIMENSION: usize> DomainView<GRID_DIMENSION>
    for OwnedDomain<GRID_DIMENSION>
{
    fn aabb(&self) -> &AABB<GRID_DIMENSION> {
        &self.aabb
    }

    fn buffer(&self) -> &[f64] {
        &self.buffer
    }

    fn buffer_mut(&mut self) -> &mut [f64] {
        &mut self.buffer
    }

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f64]) {
        (&self.aabb, &mut self.buffer)
    }

    #[track_caller]
    fn view(&self, world_coord: &Coord<GRID_DIMENSION>) -> f64 {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index]
    }

    #[track_caller]
    fn set_coord(&mut self, world_coord: &Coord<GRID_DIMENSION>, value: f64) {
        debug_assert!(
            self.aabb.contains(world_coord),
            "{:?} does not contain {:?}",
            self.aabb,
            world_coord
        );
        let index = self.aabb.coord_to_linear(world_coord);
        self.buffer[index] = value;
    }
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    fn mock_solver<
        const GRID_DIMENSION: usize,
        DomainType: DomainView<GRID_DIMENSION>,
    >(
        input: &mut DomainType,
        output: &mut DomainType,
    ) {
        std::mem::swap(input, output);
    }

    #[test]
    fn swap_test() {
        let mut a = OwnedDomain::new(AABB::new(matrix![0, 1]));
        let mut b = OwnedDomain::new(AABB::new(matrix![0, 1]));
        let a_ptr = a.buffer().as_ptr();
        let b_ptr = b.buffer().as_ptr();
        mock_solver(&mut a, &mut b);
        assert_eq!(a_ptr, b.buffer().as_ptr());
        assert_eq!(b_ptr, a.buffer().as_ptr());
    }

    #[test]
    fn set_and_view_test() {
        let mut d = OwnedDomain::new(AABB::grid(3, 4));
        d.set_coord(&vector![2, 1], 5.0);
        assert_eq!(d.view(&vector![2, 1]), 5.0);
        assert_eq!(d.buffer()[2 * 4 + 1], 5.0);
        assert_eq!(d.row(2), &[0.0, 5.0, 0.0, 0.0]);
    }
}
