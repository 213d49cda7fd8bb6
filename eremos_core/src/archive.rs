//! Completed-session archive.
//!
//! Completed sessions roll up from the live journal into an append-only CSV
//! with one summary row per session. The CSV is synced to disk before the
//! journal is rewritten, so a crash between the two steps duplicates a row
//! rather than losing one.

use crate::types::SessionRecord;
use crate::{Journal, Result};
use serde::{Deserialize, Serialize};
use std::fs::OpenOptions;
use std::path::Path;

/// A summary row in the archive CSV
#[derive(Debug, Serialize, Deserialize)]
struct ArchiveRow {
    id: String,
    date: String,
    plan_day: u32,
    started_at: String,
    completed_at: Option<String>,
    mood: Option<u8>,
    responses: usize,
    readings_completed: usize,
    readings_total: usize,
}

impl From<&SessionRecord> for ArchiveRow {
    fn from(session: &SessionRecord) -> Self {
        ArchiveRow {
            id: session.id.to_string(),
            date: session.date.clone(),
            plan_day: session.plan_day,
            started_at: session.started_at.to_rfc3339(),
            completed_at: session.completed_at.map(|t| t.to_rfc3339()),
            mood: session.mood.as_ref().map(|m| m.value),
            responses: session.responses.len(),
            readings_completed: session.checklist.iter().filter(|i| i.completed).count(),
            readings_total: session.checklist.len(),
        }
    }
}

/// Roll completed sessions out of the journal into the archive CSV
///
/// Returns the number of sessions archived. In-progress sessions stay in
/// the journal untouched.
pub fn archive_completed(journal_path: &Path, csv_path: &Path) -> Result<usize> {
    let journal = Journal::load(journal_path)?;

    let (completed, remaining): (Vec<_>, Vec<_>) = journal
        .sessions
        .into_iter()
        .partition(|s| s.is_completed());

    if completed.is_empty() {
        tracing::info!("No completed sessions to archive");
        return Ok(0);
    }

    if let Some(parent) = csv_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let file = OpenOptions::new()
        .create(true)
        .append(true)
        .open(csv_path)?;

    // Write headers only when the file is fresh
    let needs_headers = file.metadata()?.len() == 0;

    let mut writer = csv::WriterBuilder::new()
        .has_headers(needs_headers)
        .from_writer(file);

    for session in &completed {
        writer.serialize(ArchiveRow::from(session))?;
    }

    writer.flush()?;
    let file = writer
        .into_inner()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::Other, e))?;
    file.sync_all()?;

    tracing::info!("Archived {} sessions to {:?}", completed.len(), csv_path);

    // CSV is durable; now drop the archived sessions from the journal
    let journal = Journal { sessions: remaining };
    journal.save(journal_path)?;

    Ok(completed.len())
}

/// The highest plan day recorded in the archive, if any
///
/// Malformed rows are skipped, matching the journal's degrade-don't-fail
/// policy.
pub fn last_archived_day(csv_path: &Path) -> Result<Option<u32>> {
    if !csv_path.exists() {
        return Ok(None);
    }

    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .from_path(csv_path)?;

    let mut max_day = None;
    for result in reader.deserialize::<ArchiveRow>() {
        match result {
            Ok(row) => {
                max_day = Some(max_day.map_or(row.plan_day, |d: u32| d.max(row.plan_day)));
            }
            Err(e) => {
                tracing::warn!("Failed to deserialize archive row: {}", e);
            }
        }
    }

    Ok(max_day)
}

/// The next plan day, looking across both the live journal and the archive
pub fn next_plan_day(journal: &Journal, csv_path: &Path) -> Result<u32> {
    let journal_last = journal.last_completed_day().unwrap_or(0);
    let archived_last = last_archived_day(csv_path)?.unwrap_or(0);
    Ok(journal_last.max(archived_last) + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn setup_journal(path: &Path, days: &[(u32, bool)]) -> Journal {
        let mut journal = Journal::default();
        for (i, (day, completed)) in days.iter().enumerate() {
            let date = format!("2026-08-{:02}", i + 1);
            journal.start_session(&date, *day, vec!["Genesis 1".into()]).unwrap();
            if *completed {
                journal.sessions.last_mut().unwrap().complete();
            }
        }
        journal.save(path).unwrap();
        journal
    }

    #[test]
    fn test_archive_moves_completed_sessions() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("journal.json");
        let csv_path = temp_dir.path().join("sessions.csv");

        setup_journal(&journal_path, &[(1, true), (2, true), (3, false)]);

        let count = archive_completed(&journal_path, &csv_path).unwrap();
        assert_eq!(count, 2);
        assert!(csv_path.exists());

        // Only the in-progress session remains live
        let journal = Journal::load(&journal_path).unwrap();
        assert_eq!(journal.sessions.len(), 1);
        assert_eq!(journal.sessions[0].plan_day, 3);
    }

    #[test]
    fn test_archive_appends_across_runs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("journal.json");
        let csv_path = temp_dir.path().join("sessions.csv");

        setup_journal(&journal_path, &[(1, true)]);
        assert_eq!(archive_completed(&journal_path, &csv_path).unwrap(), 1);

        setup_journal(&journal_path, &[(2, true)]);
        assert_eq!(archive_completed(&journal_path, &csv_path).unwrap(), 1);

        let reader = csv::Reader::from_path(&csv_path).unwrap();
        assert_eq!(reader.into_records().count(), 2);
        assert_eq!(last_archived_day(&csv_path).unwrap(), Some(2));
    }

    #[test]
    fn test_archive_nothing_completed() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("journal.json");
        let csv_path = temp_dir.path().join("sessions.csv");

        setup_journal(&journal_path, &[(1, false)]);

        assert_eq!(archive_completed(&journal_path, &csv_path).unwrap(), 0);
        assert!(!csv_path.exists());
    }

    #[test]
    fn test_next_plan_day_spans_both_stores() {
        let temp_dir = tempfile::tempdir().unwrap();
        let journal_path = temp_dir.path().join("journal.json");
        let csv_path = temp_dir.path().join("sessions.csv");

        // Day 5 completed and archived; day 6 completed but still live
        setup_journal(&journal_path, &[(5, true)]);
        archive_completed(&journal_path, &csv_path).unwrap();
        let journal = setup_journal(&journal_path, &[(6, true)]);

        assert_eq!(next_plan_day(&journal, &csv_path).unwrap(), 7);
    }

    #[test]
    fn test_next_plan_day_fresh_start() {
        let temp_dir = tempfile::tempdir().unwrap();
        let csv_path = temp_dir.path().join("sessions.csv");

        let journal = Journal::default();
        assert_eq!(next_plan_day(&journal, &csv_path).unwrap(), 1);
    }
}
