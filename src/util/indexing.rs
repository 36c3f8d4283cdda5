use crate::util::*;

/// Number of cells covered by an exclusive extent.
pub fn real_buffer_size<const DIMENSION: usize>(
    exclusive_bound: &Coord<DIMENSION>,
) -> usize {
    exclusive_bound.iter().map(|d| *d as usize).product()
}

/// Row major, the last dimension varies fastest.
pub fn coord_to_linear<const GRID_DIMENSION: usize>(
    coord: &Coord<GRID_DIMENSION>,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> usize {
    let mut accumulator = 0;
    for d in 0..GRID_DIMENSION {
        debug_assert!(coord[d] >= 0);
        accumulator =
            accumulator * exclusive_bounds[d] as usize + coord[d] as usize;
    }
    accumulator
}

pub fn linear_to_coord<const GRID_DIMENSION: usize>(
    linear_index: usize,
    exclusive_bounds: &Coord<GRID_DIMENSION>,
) -> Coord<GRID_DIMENSION> {
    let mut result = Coord::zero();
    let mut index_accumulator = linear_index;
    for d in (0..GRID_DIMENSION).rev() {
        let extent = exclusive_bounds[d] as usize;
        result[d] = (index_accumulator % extent) as i32;
        index_accumulator /= extent;
    }
    debug_assert_eq!(index_accumulator, 0);
    result
}

#[cfg(test)]
mod unit_tests {
    use super::*;

    #[test]
    fn buffer_size_test() {
        assert_eq!(real_buffer_size(&vector![5]), 5);
        assert_eq!(real_buffer_size(&vector![5, 7]), 35);
        assert_eq!(real_buffer_size(&vector![5, 7, 9]), 5 * 7 * 9);
    }

    #[test]
    fn coord_to_linear_test() {
        {
            let index = vector![5, 7];
            let bound = vector![20, 30];
            assert_eq!(coord_to_linear(&index, &bound), 5 * 30 + 7);
        }

        {
            let index = vector![5, 7, 11];
            let bound = vector![20, 20, 20];
            assert_eq!(
                coord_to_linear(&index, &bound),
                5 * 20 * 20 + 7 * 20 + 11
            );
        }

        {
            let index = vector![5];
            let bound = vector![20];
            assert_eq!(coord_to_linear(&index, &bound), 5);
        }
    }

    #[test]
    fn linear_to_coord_test() {
        {
            let bound = vector![10, 10];
            assert_eq!(linear_to_coord(67, &bound), vector![6, 7]);
        }

        {
            let bound = vector![4, 6];
            assert_eq!(linear_to_coord(23, &bound), vector![3, 5]);
        }

        {
            let bound = vector![10, 10, 8, 10];
            assert_eq!(linear_to_coord(0, &bound), vector![0, 0, 0, 0]);
        }
    }

    #[test]
    fn linear_round_trip() {
        let bound = vector![3, 5];
        for i in 0..real_buffer_size(&bound) {
            assert_eq!(coord_to_linear(&linear_to_coord(i, &bound), &bound), i);
        }
    }
}
