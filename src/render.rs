use std::fmt::Write;

use crate::types::HistoryEntry;

fn members_line(members: &[i64]) -> String {
    members
        .iter()
        .map(i64::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn render_groups(groups: &[Vec<i64>]) -> String {
    let mut out = String::new();
    for (idx, members) in groups.iter().enumerate() {
        let _ = writeln!(
            out,
            "Group {} ({}): {}",
            idx + 1,
            members.len(),
            members_line(members)
        );
    }
    out
}

pub fn render_history(entries: &[HistoryEntry]) -> String {
    if entries.is_empty() {
        return "No distributions yet.\n".to_string();
    }
    let mut out = String::new();
    for (idx, entry) in entries.iter().enumerate() {
        let _ = writeln!(
            out,
            "{}. {} (range {}-{}, {} groups)",
            idx + 1,
            entry.time,
            entry.from,
            entry.to,
            entry.groups
        );
        for (group_idx, members) in entry.data.iter().enumerate() {
            let _ = writeln!(
                out,
                "   G{} ({}): {}",
                group_idx + 1,
                members.len(),
                members_line(members)
            );
        }
    }
    out
}

pub fn render_roll(value: i64, drawn: usize, total: usize) -> String {
    format!("{value} ({drawn}/{total})")
}
