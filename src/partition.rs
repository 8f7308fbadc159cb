use tracing::debug;

use crate::error::{DistributorError, Result};
use crate::rng::Rng;
use crate::shuffle::{pick_distinct_indices, shuffle};
use crate::types::{Groups, Range};

/// Splits `[from, to]` into `group_count` shuffled groups whose sizes differ
/// by at most one. Which groups take the remainder is random per call.
///
/// Ranges holding more than [`MAX_RANGE_LEN`](crate::constants::MAX_RANGE_LEN)
/// numbers fail with `RangeTooLarge`, since every member is materialized
/// before shuffling.
pub fn partition(from: i64, to: i64, group_count: usize, rng: &mut Rng) -> Result<Groups> {
    let range = Range::new(from, to)?;
    let total = range.len();
    if group_count < 1 || group_count > total {
        return Err(DistributorError::InvalidGroupCount);
    }

    let mut numbers = range.members();
    shuffle(&mut numbers, rng);

    let extras = total % group_count;
    let oversized = pick_distinct_indices(extras, group_count, rng);
    let sizes = group_sizes(total, group_count, &oversized);

    let mut groups: Groups = sizes.iter().map(|size| Vec::with_capacity(*size)).collect();
    let mut idx = 0;
    for number in numbers {
        groups[idx].push(number);
        if groups[idx].len() == sizes[idx] {
            idx += 1;
        }
    }

    debug!(
        from = range.from(),
        to = range.to(),
        group_count,
        extras,
        "partitioned range"
    );
    Ok(groups)
}

pub fn group_sizes(total: usize, group_count: usize, oversized: &[usize]) -> Vec<usize> {
    if group_count == 0 {
        return Vec::new();
    }
    let base = total / group_count;
    let mut sizes = vec![base; group_count];
    for idx in oversized {
        if let Some(size) = sizes.get_mut(*idx) {
            *size = base + 1;
        }
    }
    sizes
}
