//! Timestamped text log files: append, retention pruning, and parsing
//!
//! Line format is `[YYYY-mm-dd HH:MM:SS] [LEVEL] message`. A line that does
//! not start a new entry is a continuation of the previous message and is
//! folded back into it on parse.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;

use chrono::{Duration, Local, NaiveDateTime};
use regex::Regex;
use serde::Serialize;

use crate::Error;
use crate::table::{Cell, Tabular};

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

static ENTRY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^\[(\d{4}-\d{2}-\d{2} \d{2}:\d{2}:\d{2})\] \[(\w+)\] (.*)$")
        .expect("entry regex is valid")
});

/// One parsed log entry. `message` is multi-line when continuation lines
/// were folded into it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LogEntry {
    pub timestamp: NaiveDateTime,
    pub level: String,
    pub message: String,
}

impl Tabular for LogEntry {
    const COLUMNS: &'static [&'static str] = &["Timestamp", "Level", "Message"];

    fn row(&self) -> Vec<Cell> {
        vec![
            Cell::Text(self.timestamp.format(TIMESTAMP_FORMAT).to_string()),
            Cell::Text(self.level.clone()),
            Cell::Text(self.message.clone()),
        ]
    }
}

/// An append-only log file with a retention window.
///
/// Retention is enforced lazily: each append first looks at the oldest
/// retained entry and only rewrites the file when that entry has aged out.
#[derive(Debug, Clone)]
pub struct LogBook {
    path: PathBuf,
    retention: Duration,
}

impl LogBook {
    pub fn new<P: AsRef<Path>>(path: P, retention: Duration) -> Self {
        LogBook {
            path: path.as_ref().to_path_buf(),
            retention,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Append one timestamped line, pruning first if the oldest entry has
    /// fallen out of the retention window.
    pub fn append(&self, level: &str, message: &str) -> Result<(), Error> {
        let now = Local::now().naive_local();
        self.prune_if_stale(now)?;
        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)?;
        writeln!(
            file,
            "[{}] [{}] {}",
            now.format(TIMESTAMP_FORMAT),
            level,
            message
        )?;
        Ok(())
    }

    /// Drop entries older than the retention window. Cheap when nothing is
    /// stale: only the first entry line is inspected.
    fn prune_if_stale(&self, now: NaiveDateTime) -> Result<(), Error> {
        if !self.path.exists() {
            return Ok(());
        }
        let content = std::fs::read_to_string(&self.path)?;
        let cutoff = now - self.retention;
        let oldest = content.lines().find_map(|line| {
            ENTRY_RE
                .captures(line)
                .and_then(|c| NaiveDateTime::parse_from_str(&c[1], TIMESTAMP_FORMAT).ok())
        });
        match oldest {
            Some(ts) if ts < cutoff => {}
            _ => return Ok(()),
        }

        let retained: Vec<LogEntry> = parse_log_lines(&content)
            .into_iter()
            .filter(|entry| entry.timestamp >= cutoff)
            .collect();
        let mut out = String::new();
        for entry in &retained {
            out.push_str(&format!(
                "[{}] [{}] {}\n",
                entry.timestamp.format(TIMESTAMP_FORMAT),
                entry.level,
                entry.message
            ));
        }
        std::fs::write(&self.path, out)?;
        Ok(())
    }
}

/// Parse a log file written in the `[timestamp] [level] message` format.
pub fn parse_log_file<P: AsRef<Path>>(path: P) -> Result<Vec<LogEntry>, Error> {
    let content = std::fs::read_to_string(path)?;
    Ok(parse_log_lines(&content))
}

/// Parse in-memory log text. Unrecognized lines continue the previous
/// message; leading garbage before the first entry is dropped.
pub fn parse_log_lines(content: &str) -> Vec<LogEntry> {
    let mut entries: Vec<LogEntry> = Vec::new();
    for line in content.lines() {
        match ENTRY_RE.captures(line) {
            Some(caps) => {
                let timestamp = NaiveDateTime::parse_from_str(&caps[1], TIMESTAMP_FORMAT);
                match timestamp {
                    Ok(timestamp) => entries.push(LogEntry {
                        timestamp,
                        level: caps[2].to_string(),
                        message: caps[3].to_string(),
                    }),
                    // matched shape but impossible date: treat as continuation
                    Err(_) => fold_continuation(&mut entries, line),
                }
            }
            None => fold_continuation(&mut entries, line),
        }
    }
    entries
}

fn fold_continuation(entries: &mut [LogEntry], line: &str) {
    if let Some(last) = entries.last_mut() {
        last.message.push('\n');
        last.message.push_str(line);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::Table;

    fn ts(s: &str) -> NaiveDateTime {
        NaiveDateTime::parse_from_str(s, TIMESTAMP_FORMAT).unwrap()
    }

    #[test]
    fn parse_folds_continuation_lines() {
        let content = "[2026-08-29 10:00:00] [INFO] started\n\
                       [2026-08-29 10:00:01] [ERROR] failed to read feed\n\
                       caused by: connection reset\n\
                       at line 2\n\
                       [2026-08-29 10:00:02] [INFO] done\n";
        let entries = parse_log_lines(content);
        assert_eq!(entries.len(), 3);
        assert_eq!(entries[0].message, "started");
        assert_eq!(entries[1].level, "ERROR");
        assert_eq!(
            entries[1].message,
            "failed to read feed\ncaused by: connection reset\nat line 2"
        );
        assert_eq!(entries[2].timestamp, ts("2026-08-29 10:00:02"));
    }

    #[test]
    fn leading_garbage_is_dropped() {
        let entries = parse_log_lines("no header yet\n[2026-08-29 10:00:00] [INFO] ok\n");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "ok");
    }

    #[test]
    fn append_then_parse_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let book = LogBook::new(dir.path().join("run.log"), Duration::days(7));
        book.append("INFO", "first").unwrap();
        book.append("WARN", "second").unwrap();

        let entries = parse_log_file(book.path()).unwrap();
        assert_eq!(entries.len(), 2);
        assert_eq!(entries[0].level, "INFO");
        assert_eq!(entries[0].message, "first");
        assert_eq!(entries[1].level, "WARN");
    }

    #[test]
    fn stale_entries_are_pruned_on_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let old = (Local::now().naive_local() - Duration::days(30))
            .format(TIMESTAMP_FORMAT)
            .to_string();
        std::fs::write(
            &path,
            format!("[{old}] [INFO] ancient\nwith a continuation\n"),
        )
        .unwrap();

        let book = LogBook::new(&path, Duration::days(7));
        book.append("INFO", "fresh").unwrap();

        let entries = parse_log_file(&path).unwrap();
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].message, "fresh");
    }

    #[test]
    fn recent_entries_survive_append() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("run.log");
        let book = LogBook::new(&path, Duration::days(7));
        book.append("INFO", "kept").unwrap();
        book.append("INFO", "also kept").unwrap();
        assert_eq!(parse_log_file(&path).unwrap().len(), 2);
    }

    #[test]
    fn entries_tabulate() {
        let table = Table::from_records(&[LogEntry {
            timestamp: ts("2026-08-29 10:00:00"),
            level: "INFO".into(),
            message: "started".into(),
        }]);
        assert_eq!(table.columns, vec!["Timestamp", "Level", "Message"]);
        assert_eq!(table.rows[0][2], Cell::Text("started".into()));
    }
}
