use rayon::prelude::*;

use crate::buffer::pixel::Pixel;
use crate::buffer::view::ImageMut;
use crate::foundation::error::{SlicerError, SlicerResult};

/// Parallelism settings for one render call.
#[derive(Clone, Debug)]
pub struct RenderThreading {
    /// Shade rows on a worker pool. `false` runs everything on the calling thread.
    pub parallel: bool,
    /// Worker count; `None` lets rayon pick one per core. `Some(0)` is rejected.
    pub threads: Option<usize>,
    /// Rows handed to a worker at a time; `None` splits the image evenly across the pool.
    pub rows_per_chunk: Option<usize>,
}

impl Default for RenderThreading {
    fn default() -> Self {
        Self {
            parallel: true,
            threads: None,
            rows_per_chunk: None,
        }
    }
}

impl RenderThreading {
    /// Single-threaded settings.
    pub fn sequential() -> Self {
        Self {
            parallel: false,
            ..Self::default()
        }
    }
}

/// Call `shade_row(y, row)` once for every destination row, where `row` is exactly `width`
/// pixels long.
///
/// Rows are partitioned into disjoint chunks, so workers never share writable memory and the
/// result does not depend on the partitioning.
pub(crate) fn for_each_row<P, F>(
    dst: &mut ImageMut<'_, P>,
    threading: &RenderThreading,
    shade_row: F,
) -> SlicerResult<()>
where
    P: Pixel,
    F: Fn(u32, &mut [P]) + Sync,
{
    let (width, height, stride) = (dst.width() as usize, dst.height(), dst.stride().max(1));
    if width == 0 || height == 0 {
        return Ok(());
    }
    let region = dst.rows_region_mut();

    if !threading.parallel {
        for (y, row) in region.chunks_mut(stride).enumerate() {
            shade_row(y as u32, &mut row[..width]);
        }
        return Ok(());
    }

    let pool = build_thread_pool(threading.threads)?;
    let rows = chunk_rows(threading.rows_per_chunk, height, pool.current_num_threads());
    tracing::debug!(threads = pool.current_num_threads(), rows, "row partition");

    pool.install(|| {
        region
            .par_chunks_mut(stride.saturating_mul(rows))
            .enumerate()
            .for_each(|(chunk, block)| {
                let y0 = chunk * rows;
                for (i, row) in block.chunks_mut(stride).enumerate() {
                    shade_row((y0 + i) as u32, &mut row[..width]);
                }
            });
    });
    Ok(())
}

fn chunk_rows(requested: Option<usize>, height: u32, threads: usize) -> usize {
    match requested {
        Some(n) => n.max(1),
        None => (height as usize).div_ceil(threads.max(1)).max(1),
    }
}

fn build_thread_pool(threads: Option<usize>) -> SlicerResult<rayon::ThreadPool> {
    if let Some(n) = threads
        && n == 0
    {
        return Err(SlicerError::validation(
            "render threading 'threads' must be >= 1 when set",
        ));
    }

    let mut builder = rayon::ThreadPoolBuilder::new();
    if let Some(n) = threads {
        builder = builder.num_threads(n);
    }
    builder
        .build()
        .map_err(|e| SlicerError::scheduler(format!("failed to build rayon thread pool: {e}")))
}

#[cfg(test)]
#[path = "../../tests/unit/render/scheduler.rs"]
mod tests;
