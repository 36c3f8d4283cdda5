mod chunk;
mod owned;

pub use chunk::*;
pub use owned::*;

use crate::par_slice;
use crate::util::*;
use rayon::prelude::*;

pub trait DomainView<const GRID_DIMENSION: usize>: Sync {
    fn aabb(&self) -> &AABB<GRID_DIMENSION>;

    fn buffer(&self) -> &[f64];

    fn buffer_mut(&mut self) -> &mut [f64];

    fn aabb_buffer_mut(&mut self) -> (&AABB<GRID_DIMENSION>, &mut [f64]);

    fn view(&self, world_coord: &Coord<GRID_DIMENSION>) -> f64;

    fn set_coord(&mut self, world_coord: &Coord<GRID_DIMENSION>, value: f64);

    fn par_modify_access<'a>(
        &'a mut self,
        chunk_size: usize,
    ) -> impl ParallelIterator<Item = DomainChunk<'a, GRID_DIMENSION>> {
        let (aabb, buffer) = self.aabb_buffer_mut();
        par_modify_access_impl(buffer, aabb, chunk_size)
    }

    fn par_set_values<
        F: Fn(Coord<GRID_DIMENSION>) -> f64 + Send + Sync + Copy,
    >(
        &mut self,
        f: F,
        chunk_size: usize,
    ) {
        self.par_modify_access(chunk_size).for_each(
            |mut d: DomainChunk<'_, GRID_DIMENSION>| {
                d.coord_iter_mut().for_each(|(world_coord, value_mut)| {
                    *value_mut = f(world_coord);
                })
            },
        );
    }

    /// Copy every cell of other into self, both must cover the same box.
    fn par_copy_from<DomainType: DomainView<GRID_DIMENSION>>(
        &mut self,
        other: &DomainType,
        chunk_size: usize,
    ) {
        debug_assert_eq!(self.aabb(), other.aabb());
        par_slice::copy(other.buffer(), self.buffer_mut(), chunk_size);
    }
}

/// Why not just put this into DomainView::par_modify_access?
/// Rust compiler can't figure out how to borrow aabb and buffer
/// at the same time in this way.
/// By putting their borrows into one function call first we work around it.
fn par_modify_access_impl<'a, const GRID_DIMENSION: usize>(
    buffer: &'a mut [f64],
    aabb: &'a AABB<GRID_DIMENSION>,
    chunk_size: usize,
) -> impl ParallelIterator<Item = DomainChunk<'a, GRID_DIMENSION>> + 'a {
    buffer[0..aabb.buffer_size()]
        .par_chunks_mut(chunk_size)
        .enumerate()
        .map(move |(i, buffer_chunk): (usize, &mut [f64])| {
            let offset = i * chunk_size;
            DomainChunk::new(offset, aabb, buffer_chunk)
        })
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn par_set_values_test() {
        for chunk_size in [1, 3, 7, 100] {
            let bounds = AABB::new(matrix![0, 5; 0, 6]);
            let mut domain = OwnedDomain::new(bounds);
            domain.par_set_values(
                |c| (c[0] * 10 + c[1]) as f64,
                chunk_size,
            );
            for c in bounds.coord_iter() {
                assert_eq!(domain.view(&c), (c[0] * 10 + c[1]) as f64);
            }
        }
    }

    #[test]
    fn par_copy_from_test() {
        let chunk_size = 4;
        let bounds = AABB::grid(6, 9);
        let mut a = OwnedDomain::new(bounds);
        a.par_set_values(|c| (c[0] - c[1]) as f64 * 0.5, chunk_size);

        let mut b = OwnedDomain::new(bounds);
        b.par_copy_from(&a, chunk_size);
        assert_eq!(a.buffer(), b.buffer());
    }
}
