//! Fixed-size chunk arithmetic.
//!
//! Chunks bound memory and give progress visibility; they are processed
//! strictly sequentially and are not a unit of parallel work.

use std::ops::Range;

/// Split `0..len` into contiguous ranges of at most `chunk_size` records,
/// in order. A zero chunk size is treated as 1.
pub fn chunk_ranges(len: usize, chunk_size: usize) -> Vec<Range<usize>> {
    let chunk_size = chunk_size.max(1);
    let mut ranges = Vec::with_capacity(len.div_ceil(chunk_size));
    let mut start = 0;
    while start < len {
        let end = (start + chunk_size).min(len);
        ranges.push(start..end);
        start = end;
    }
    ranges
}
