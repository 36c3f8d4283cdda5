pub use nalgebra::{matrix, vector};
pub use num_traits::{Num, Zero};

/// Element types the `par_slice` helpers accept.
pub trait NumTrait: Num + Copy + Send + Sync {}
impl<T: Num + Copy + Send + Sync> NumTrait for T {}

mod aabb;
pub mod indexing;
pub use aabb::*;

pub type Coord<const GRID_DIMENSION: usize> =
    nalgebra::SVector<i32, { GRID_DIMENSION }>;

/// Column 0 holds the inclusive minimum, column 1 the inclusive maximum.
pub type Bounds<const GRID_DIMENSION: usize> =
    nalgebra::SMatrix<i32, { GRID_DIMENSION }, 2>;
