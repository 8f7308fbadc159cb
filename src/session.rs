use chrono::{SecondsFormat, Utc};
use tracing::info;

use crate::error::Result;
use crate::history_store::HistoryStore;
use crate::partition::partition;
use crate::rng::Rng;
use crate::types::{DistributionRequest, HistoryEntry};

pub fn distribute(
    request: DistributionRequest,
    rng: &mut Rng,
    history: &mut HistoryStore,
) -> Result<HistoryEntry> {
    let groups = partition(
        request.range.from(),
        request.range.to(),
        request.group_count,
        rng,
    )?;
    let entry = HistoryEntry {
        time: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
        from: request.range.from(),
        to: request.range.to(),
        groups: request.group_count,
        data: groups,
    };
    history.record(entry.clone());
    info!(
        from = entry.from,
        to = entry.to,
        groups = entry.groups,
        history_len = history.len(),
        "distribution recorded"
    );
    Ok(entry)
}

#[cfg(test)]
mod tests {
    use std::fs;
    use std::path::PathBuf;

    use super::*;
    use crate::constants::HISTORY_CAP;
    use crate::error::DistributorError;
    use crate::types::Range;

    fn temp_file(name: &str) -> PathBuf {
        let unique = format!("{}-{}-{}", name, std::process::id(), rand::random::<u32>());
        std::env::temp_dir().join(unique).join("history.json")
    }

    #[test]
    fn distribute_records_newest_first() {
        let path = temp_file("session-distribute");
        let mut history = HistoryStore::open(path.clone());
        let mut rng = Rng::new(100);

        for to in 3..=20 {
            let request = DistributionRequest {
                range: Range::new(1, to).expect("valid range"),
                group_count: 3,
            };
            let entry = distribute(request, &mut rng, &mut history).expect("valid request");
            assert_eq!(history.entries()[0], entry);
            assert_eq!(entry.data.len(), 3);
        }
        assert_eq!(history.len(), HISTORY_CAP);
        assert_eq!(history.entries()[0].to, 20);

        if let Some(parent) = path.parent() {
            let _ = fs::remove_dir_all(parent);
        }
    }

    #[test]
    fn failed_distribution_leaves_history_untouched() {
        let path = temp_file("session-invalid");
        let mut history = HistoryStore::open(path);
        let mut rng = Rng::new(1);
        let request = DistributionRequest {
            range: Range::new(1, 5).expect("valid range"),
            group_count: 6,
        };
        assert_eq!(
            distribute(request, &mut rng, &mut history),
            Err(DistributorError::InvalidGroupCount)
        );
        assert!(history.is_empty());
    }
}
