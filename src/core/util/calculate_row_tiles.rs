use std::num::NonZeroU32;

/// Tiles handed to each worker thread, so uneven rows still balance out.
pub const TILES_PER_THREAD: u32 = 4;

/// Number of contiguous row tiles for an image `height` rows tall, never more
/// than one tile per row.
pub fn calculate_row_tiles(max_tiles: NonZeroU32, height: u32) -> u32 {
    max_tiles.get().min(height).max(1)
}

/// Rows in every tile but the last, which takes whatever remains.
pub fn calculate_rows_per_tile(height: u32, tiles: NonZeroU32) -> u32 {
    height.div_ceil(tiles.get()).max(1)
}

pub fn calculate_row_tiles_for_available_threads(height: u32) -> u32 {
    let num_avail_threads = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1) as u32;
    let max_tiles = num_avail_threads.saturating_mul(TILES_PER_THREAD);

    calculate_row_tiles(NonZeroU32::new(max_tiles).unwrap_or(NonZeroU32::MIN), height)
}
