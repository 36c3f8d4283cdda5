use crate::domain::*;
use rayon::prelude::*;

/// One Jacobi sweep over the interior of `output`.
/// Every interior cell becomes the average of its four neighbors in `input`.
/// Edge cells of `output` are not written.
///
/// Work is split into blocks of whole rows, roughly `chunk_size` cells
/// each. Cells only read `input`, so the result is identical for any
/// block size or thread count.
pub fn jacobi_sweep(
    input: &OwnedDomain<2>,
    output: &mut OwnedDomain<2>,
    chunk_size: usize,
) {
    profiling::scope!("par_stencil::jacobi_sweep");
    debug_assert_eq!(input.aabb(), output.aabb());
    let rows = input.aabb().rows();
    let cols = input.aabb().cols();
    debug_assert!(rows >= 3 && cols >= 3);

    let rows_per_task = (chunk_size / cols).max(1);
    let src = input.buffer();
    let dst = output.buffer_mut();

    dst[cols..(rows - 1) * cols]
        .par_chunks_mut(rows_per_task * cols)
        .enumerate()
        .for_each(|(task, block): (usize, &mut [f64])| {
            profiling::scope!("jacobi_sweep: Thread Callback");
            for (k, dst_row) in block.chunks_mut(cols).enumerate() {
                let i = 1 + task * rows_per_task + k;
                let north = &src[(i - 1) * cols..i * cols];
                let middle = &src[i * cols..(i + 1) * cols];
                let south = &src[(i + 1) * cols..(i + 2) * cols];
                for j in 1..cols - 1 {
                    dst_row[j] =
                        (north[j] + south[j] + middle[j - 1] + middle[j + 1])
                            / 4.0;
                }
            }
        });
}
