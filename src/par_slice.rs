use crate::util::*;
use rayon::prelude::*;

/// Copy `src` into `dst`, slices must have the same length.
pub fn copy<NumType: NumTrait>(
    src: &[NumType],
    dst: &mut [NumType],
    chunk_size: usize,
) {
    profiling::scope!("par_slice::copy");
    debug_assert_eq!(src.len(), dst.len());
    dst.par_chunks_mut(chunk_size)
        .zip(src.par_chunks(chunk_size))
        .for_each(|(dst_chunk, src_chunk)| {
            dst_chunk.copy_from_slice(src_chunk);
        });
}
