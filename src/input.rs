use crate::error::{DistributorError, Result};
use crate::types::{DistributionRequest, Range};

/// Fractional values are rejected rather than floored.
pub fn parse_range_bound(raw: &str) -> Result<i64> {
    raw.trim()
        .parse::<i64>()
        .map_err(|_| DistributorError::InvalidRange)
}

pub fn parse_group_count(raw: &str) -> Result<usize> {
    raw.trim()
        .parse::<usize>()
        .map_err(|_| DistributorError::InvalidGroupCount)
}

pub fn validate_distribution(
    from_raw: &str,
    to_raw: &str,
    groups_raw: &str,
) -> Result<DistributionRequest> {
    let from = parse_range_bound(from_raw)?;
    let to = parse_range_bound(to_raw)?;
    let range = Range::new(from, to)?;
    let group_count = parse_group_count(groups_raw)?;
    validate_group_count(range, group_count)?;
    Ok(DistributionRequest { range, group_count })
}

pub fn validate_group_count(range: Range, group_count: usize) -> Result<()> {
    if group_count < 1 || group_count > range.len() {
        return Err(DistributorError::InvalidGroupCount);
    }
    Ok(())
}
