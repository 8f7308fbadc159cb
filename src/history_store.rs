use std::collections::HashSet;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::constants::{HISTORY_CAP, HISTORY_FILE_VERSION, HISTORY_KEY};
use crate::types::{HistoryEntry, Range};

pub type SharedHistoryStore = Arc<Mutex<HistoryStore>>;

#[derive(Clone, Debug, Serialize)]
struct HistoryFile<'a> {
    version: u8,
    key: &'a str,
    entries: &'a [HistoryEntry],
}

#[derive(Clone, Debug, Deserialize)]
#[serde(untagged)]
enum HistoryFileRaw {
    Versioned {
        version: u8,
        #[serde(default)]
        key: Option<String>,
        entries: Vec<serde_json::Value>,
    },
    Bare(Vec<serde_json::Value>),
}

pub struct HistoryStore {
    file_path: PathBuf,
    entries: Vec<HistoryEntry>,
}

impl HistoryStore {
    /// Loads `file_path` best-effort; anything unreadable becomes an empty
    /// history.
    pub fn open(file_path: PathBuf) -> Self {
        let entries = load_entries(&file_path);
        debug!(path = %file_path.display(), count = entries.len(), "history loaded");
        Self { file_path, entries }
    }

    pub fn shared(self) -> SharedHistoryStore {
        Arc::new(Mutex::new(self))
    }

    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn path(&self) -> &Path {
        &self.file_path
    }

    pub fn record(&mut self, entry: HistoryEntry) {
        self.entries.insert(0, entry);
        self.entries.truncate(HISTORY_CAP);
        self.save();
    }

    pub fn clear(&mut self) {
        self.entries.clear();
        self.save();
    }

    fn save(&self) {
        if let Some(parent) = self.file_path.parent() {
            if let Err(err) = fs::create_dir_all(parent) {
                error!(path = %parent.display(), %err, "failed to create history dir");
                return;
            }
        }

        let payload = HistoryFile {
            version: HISTORY_FILE_VERSION,
            key: HISTORY_KEY,
            entries: &self.entries,
        };
        match serde_json::to_string_pretty(&payload) {
            Ok(text) => {
                if let Err(err) = fs::write(&self.file_path, text) {
                    error!(path = %self.file_path.display(), %err, "failed to write history");
                }
            }
            Err(err) => {
                error!(path = %self.file_path.display(), %err, "failed to serialize history");
            }
        }
    }
}

fn load_entries(path: &Path) -> Vec<HistoryEntry> {
    let text = match fs::read_to_string(path) {
        Ok(value) => value,
        Err(err) => {
            if err.kind() != std::io::ErrorKind::NotFound {
                warn!(path = %path.display(), %err, "failed to read history");
            }
            return Vec::new();
        }
    };

    let raw_entries = match serde_json::from_str::<HistoryFileRaw>(&text) {
        Ok(HistoryFileRaw::Versioned {
            version,
            key,
            entries,
        }) => {
            if version != HISTORY_FILE_VERSION {
                warn!(path = %path.display(), version, "unsupported history version");
                return Vec::new();
            }
            if let Some(key) = key.filter(|key| key != HISTORY_KEY) {
                warn!(path = %path.display(), %key, "unexpected history key");
                return Vec::new();
            }
            entries
        }
        Ok(HistoryFileRaw::Bare(entries)) => entries,
        Err(err) => {
            warn!(path = %path.display(), %err, "failed to parse history");
            return Vec::new();
        }
    };

    raw_entries
        .into_iter()
        .filter_map(|raw| match serde_json::from_value::<HistoryEntry>(raw) {
            Ok(entry) => sanitize_entry(entry),
            Err(err) => {
                warn!(path = %path.display(), %err, "dropping malformed history entry");
                None
            }
        })
        .take(HISTORY_CAP)
        .collect()
}

fn sanitize_entry(entry: HistoryEntry) -> Option<HistoryEntry> {
    let range = Range::new(entry.from, entry.to).ok()?;
    if entry.groups == 0 || entry.groups != entry.data.len() {
        return None;
    }
    let member_count: usize = entry.data.iter().map(Vec::len).sum();
    if member_count != range.len() {
        return None;
    }
    let base = range.len() / entry.groups;
    if entry
        .data
        .iter()
        .any(|group| group.len() != base && group.len() != base + 1)
    {
        return None;
    }
    let mut seen = HashSet::with_capacity(member_count);
    let valid = entry
        .data
        .iter()
        .flatten()
        .all(|value| range.contains(*value) && seen.insert(*value));
    valid.then_some(entry)
}
