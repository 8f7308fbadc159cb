use thiserror::Error;

#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum DistributorError {
    #[error("Range must be valid and ‘From’ ≤ ‘To’.")]
    InvalidRange,

    #[error("Groups must be between 1 and the total numbers in range.")]
    InvalidGroupCount,

    #[error("Range holds {len} numbers; at most {max} are supported.")]
    RangeTooLarge { len: u64, max: u64 },
}

pub type Result<T> = std::result::Result<T, DistributorError>;
