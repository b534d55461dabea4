//! Frequency accumulator (C2): single-pass counting of packed RGB
//! triples over a pixel source; bounded capacity.

use std::collections::HashMap;

use crate::error::ProfileError;
use crate::pixel_source::PixelSource;

/// Upper bound on the number of distinct packed-RGB keys the map will
/// ever hold, independent of pixel count — a 24-bit RGB key space has
/// at most 16,777,216 distinct values.
const MAX_MAP_CAPACITY: usize = 16_777_216;

/// packed RGB (`u32`, alpha elided) -> pixel count.
pub type FrequencyMap = HashMap<u32, u32>;

/// Walk every pixel of `source` exactly once and build a frequency map
/// of packed-RGB -> count, plus the total pixel count.
///
/// Fails with [`ProfileError::EmptyImage`] if `width * height == 0`, and
/// with [`ProfileError::NoColors`] if the map is somehow empty after a
/// full traversal (only reachable for a zero-sized source, so this is a
/// defensive post-check).
pub fn accumulate(source: &impl PixelSource) -> Result<(FrequencyMap, u64), ProfileError> {
    let width = source.width();
    let height = source.height();

    if width == 0 || height == 0 {
        return Err(ProfileError::EmptyImage);
    }

    let pixel_count = width as u64 * height as u64;
    let capacity = (pixel_count / 20).min(MAX_MAP_CAPACITY as u64) as usize;
    let mut map: FrequencyMap = HashMap::with_capacity(capacity);

    if let Some((buffer, stride)) = source.as_rgba_buffer() {
        accumulate_fast_path(&mut map, buffer, stride, width, height);
    } else {
        for y in 0..height {
            for x in 0..width {
                let pixel = source.get_pixel(x, y);
                *map.entry(pixel.packed_rgb()).or_insert(0) += 1;
            }
        }
    }

    if map.is_empty() {
        return Err(ProfileError::NoColors);
    }

    log::debug!(
        "accumulated {} unique colors over {} pixels",
        map.len(),
        pixel_count
    );

    Ok((map, pixel_count))
}

/// Specialized fast path for pixel layouts already (R,G,B,A)
/// byte-interleaved with a known row stride.
fn accumulate_fast_path(map: &mut FrequencyMap, buffer: &[u8], stride: usize, width: u32, height: u32) {
    for y in 0..height as usize {
        let row = &buffer[y * stride..y * stride + width as usize * 4];
        for chunk in row.chunks_exact(4) {
            let key = ((chunk[0] as u32) << 16) | ((chunk[1] as u32) << 8) | chunk[2] as u32;
            *map.entry(key).or_insert(0) += 1;
        }
    }
}
