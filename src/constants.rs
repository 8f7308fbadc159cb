pub const HISTORY_CAP: usize = 10;
pub const HISTORY_KEY: &str = "numberDistributorHistory";
pub const HISTORY_FILE_VERSION: u8 = 1;
pub const DEFAULT_HISTORY_PATH: &str = ".data/history.json";
pub const HISTORY_PATH_ENV: &str = "DISTRIBUTOR_HISTORY_PATH";

pub const MAX_RANGE_LEN: u64 = 1_000_000;
