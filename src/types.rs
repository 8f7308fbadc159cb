use serde::{Deserialize, Serialize};

use crate::constants::MAX_RANGE_LEN;
use crate::error::{DistributorError, Result};

pub type Groups = Vec<Vec<i64>>;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Range {
    from: i64,
    to: i64,
}

#[allow(clippy::len_without_is_empty)]
impl Range {
    pub fn new(from: i64, to: i64) -> Result<Self> {
        if from > to {
            return Err(DistributorError::InvalidRange);
        }
        let len = (i128::from(to) - i128::from(from) + 1) as u128;
        if len > u128::from(MAX_RANGE_LEN) {
            return Err(DistributorError::RangeTooLarge {
                len: u64::try_from(len).unwrap_or(u64::MAX),
                max: MAX_RANGE_LEN,
            });
        }
        Ok(Self { from, to })
    }

    pub fn from(&self) -> i64 {
        self.from
    }

    pub fn to(&self) -> i64 {
        self.to
    }

    pub fn len(&self) -> usize {
        (self.to - self.from) as usize + 1
    }

    pub fn contains(&self, value: i64) -> bool {
        (self.from..=self.to).contains(&value)
    }

    pub fn members(&self) -> Vec<i64> {
        (self.from..=self.to).collect()
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DistributionRequest {
    pub range: Range,
    pub group_count: usize,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct HistoryEntry {
    #[serde(alias = "timestamp")]
    pub time: String,
    pub from: i64,
    pub to: i64,
    #[serde(alias = "groupCount", alias = "group_count")]
    pub groups: usize,
    pub data: Groups,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RollerState {
    Idle,
    Active,
    Exhausted,
}
