use crate::util::indexing::*;
use crate::util::*;

/// Axis Aligned Bounding Box (AABB) for coordinate types.
/// Each instance is inclusive of both corners.
/// Buffers tagged with an AABB are row major,
/// so mapping between coordinates and linear indices goes through here.
#[derive(Hash, Debug, Copy, Clone, Eq, PartialEq)]
pub struct AABB<const DIMENSION: usize> {
    pub bounds: Bounds<DIMENSION>,
}

impl<const DIMENSION: usize> AABB<DIMENSION> {
    /// Create AABB from raw bounds.
    #[inline]
    pub fn new(bounds: Bounds<DIMENSION>) -> Self {
        AABB { bounds }
    }

    /// Moving min to the origin, returns the exclusive size in each direction
    /// i.e. [0, 9] would have exclusive size of 10.
    pub fn exclusive_bounds(&self) -> Coord<DIMENSION> {
        (self.bounds.column(1) - self.bounds.column(0)).add_scalar(1)
    }

    /// Return the number of coordinates contained in the instance.
    #[inline]
    pub fn buffer_size(&self) -> usize {
        if !self.check_validity() {
            return 0;
        }
        real_buffer_size(&self.exclusive_bounds())
    }

    /// Return the linear index for a coord in the instance
    pub fn coord_to_linear(&self, coord: &Coord<DIMENSION>) -> usize {
        coord_to_linear(&(coord - self.min()), &self.exclusive_bounds())
    }

    /// Return the coordinate in the instance for a given linear index.
    pub fn linear_to_coord(&self, index: usize) -> Coord<DIMENSION> {
        linear_to_coord(index, &self.exclusive_bounds()) + self.min()
    }

    /// Check whether the instance contains a coordinate.
    pub fn contains(&self, coord: &Coord<DIMENSION>) -> bool {
        (0..DIMENSION).all(|d| {
            coord[d] >= self.bounds[(d, 0)] && coord[d] <= self.bounds[(d, 1)]
        })
    }

    /// Return min corner.
    pub fn min(&self) -> Coord<DIMENSION> {
        self.bounds.column(0).into()
    }

    /// Return max corner
    pub fn max(&self) -> Coord<DIMENSION> {
        self.bounds.column(1).into()
    }

    /// Check that max >= min
    pub fn check_validity(&self) -> bool {
        (0..DIMENSION).all(|d| self.bounds[(d, 0)] <= self.bounds[(d, 1)])
    }

    /// Shrink every face inwards by `n` cells.
    /// The result may be invalid (empty), check with `check_validity`.
    pub fn shrink_faces(&self, n: i32) -> Self {
        let mut result = *self;
        for d in 0..DIMENSION {
            result.bounds[(d, 0)] += n;
            result.bounds[(d, 1)] -= n;
        }
        result
    }

    /// Whether the coordinate lies on the outermost layer of the box.
    pub fn on_face(&self, coord: &Coord<DIMENSION>) -> bool {
        debug_assert!(self.contains(coord));
        (0..DIMENSION).any(|d| {
            coord[d] == self.bounds[(d, 0)] || coord[d] == self.bounds[(d, 1)]
        })
    }

    /// Return iterator over contained coords
    /// in linear ordering.
    pub fn coord_iter(&self) -> impl Iterator<Item = Coord<DIMENSION>> + '_ {
        (0..self.buffer_size()).map(|i| self.linear_to_coord(i))
    }
}

impl AABB<2> {
    /// Box covering a `rows` by `cols` grid anchored at the origin.
    pub fn grid(rows: usize, cols: usize) -> Self {
        AABB::new(matrix![0, rows as i32 - 1; 0, cols as i32 - 1])
    }

    pub fn rows(&self) -> usize {
        self.exclusive_bounds()[0] as usize
    }

    pub fn cols(&self) -> usize {
        self.exclusive_bounds()[1] as usize
    }
}
