// Fixed-size partitioning of a record slice.

use std::ops::Range;

/// Contiguous index ranges covering `0..len`, each at most `size` long.
///
/// Only the last range can be shorter. A `size` of zero yields nothing.
pub fn partition(len: usize, size: usize) -> impl Iterator<Item = Range<usize>> {
    let step = size.max(1);
    let count = if size == 0 { 0 } else { len.div_ceil(size) };
    (0..count).map(move |i| i * step..((i + 1) * step).min(len))
}
