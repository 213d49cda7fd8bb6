//! Session journal persistence with file locking.
//!
//! Live sessions are kept in a single JSON document, written atomically
//! (temp file + fsync + rename) under advisory locks. A corrupted journal
//! degrades to an empty one with a warning rather than failing the session.

use crate::types::{
    ChecklistItem, MoodEntry, SessionRecord, SessionStatus, StepResponse,
};
use crate::{steps, Error, Result};
use chrono::Utc;
use fs2::FileExt;
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{Read, Write};
use std::path::Path;
use tempfile::NamedTempFile;
use uuid::Uuid;

/// The on-disk journal of live (and recently completed) sessions
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Journal {
    pub sessions: Vec<SessionRecord>,
}

impl Journal {
    /// Load the journal from a file with shared locking
    ///
    /// Returns an empty journal if the file doesn't exist.
    /// If the file is corrupted, logs a warning and returns an empty journal.
    pub fn load(path: &Path) -> Result<Self> {
        if !path.exists() {
            tracing::info!("No journal file found, starting empty");
            return Ok(Self::default());
        }

        let file = match File::open(path) {
            Ok(f) => f,
            Err(e) => {
                tracing::warn!("Unable to open journal {:?}: {}. Starting empty.", path, e);
                return Ok(Self::default());
            }
        };

        if let Err(e) = file.lock_shared() {
            tracing::warn!("Unable to lock journal {:?}: {}. Starting empty.", path, e);
            return Ok(Self::default());
        }

        let mut contents = String::new();
        let mut reader = std::io::BufReader::new(&file);
        if let Err(e) = reader.read_to_string(&mut contents) {
            let _ = file.unlock();
            tracing::warn!("Failed to read journal {:?}: {}. Starting empty.", path, e);
            return Ok(Self::default());
        }

        file.unlock()?;

        match serde_json::from_str::<Journal>(&contents) {
            Ok(journal) => {
                tracing::debug!("Loaded {} sessions from {:?}", journal.sessions.len(), path);
                Ok(journal)
            }
            Err(e) => {
                tracing::warn!("Failed to parse journal {:?}: {}. Starting empty.", path, e);
                Ok(Self::default())
            }
        }
    }

    /// Save the journal with exclusive locking
    ///
    /// Atomically writes by:
    /// 1. Writing to a temp file
    /// 2. Syncing to disk
    /// 3. Renaming over the original
    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let temp = NamedTempFile::new_in(path.parent().ok_or_else(|| {
            std::io::Error::new(std::io::ErrorKind::Other, "journal path missing parent")
        })?)?;

        temp.as_file().lock_exclusive()?;

        {
            let mut writer = std::io::BufWriter::new(temp.as_file());
            let contents = serde_json::to_string(self)?;
            writer.write_all(contents.as_bytes())?;
            writer.flush()?;
        }

        temp.as_file().sync_all()?;
        temp.as_file().unlock()?;

        temp.persist(path).map_err(|e| Error::Io(e.error))?;

        tracing::debug!("Saved journal to {:?}", path);
        Ok(())
    }

    /// Load the journal, modify it, and save it back atomically
    pub fn update<F>(path: &Path, f: F) -> Result<Self>
    where
        F: FnOnce(&mut Journal) -> Result<()>,
    {
        let mut journal = Self::load(path)?;
        f(&mut journal)?;
        journal.save(path)?;
        Ok(journal)
    }

    /// Today's session if one exists, otherwise the most recent in-progress
    /// session (possibly carried over from yesterday)
    pub fn current_session(&self, today: &str) -> Option<&SessionRecord> {
        self.sessions
            .iter()
            .find(|s| s.date == today)
            .or_else(|| {
                self.sessions
                    .iter()
                    .rev()
                    .find(|s| s.status == SessionStatus::InProgress)
            })
    }

    /// Mutable variant of [`current_session`](Self::current_session)
    pub fn current_session_mut(&mut self, today: &str) -> Option<&mut SessionRecord> {
        if let Some(idx) = self.sessions.iter().position(|s| s.date == today) {
            return self.sessions.get_mut(idx);
        }
        self.sessions
            .iter_mut()
            .rev()
            .find(|s| s.status == SessionStatus::InProgress)
    }

    /// The last completed plan day recorded in this journal, if any
    pub fn last_completed_day(&self) -> Option<u32> {
        self.sessions
            .iter()
            .filter(|s| s.is_completed())
            .map(|s| s.plan_day)
            .max()
    }

    /// Start a new session for `date` and `plan_day`
    ///
    /// The checklist is initialized with one row per resolved chapter label.
    /// Returns an error if a session for that date already exists.
    pub fn start_session(
        &mut self,
        date: &str,
        plan_day: u32,
        checklist_refs: Vec<String>,
    ) -> Result<&SessionRecord> {
        if self.sessions.iter().any(|s| s.date == date) {
            return Err(Error::Session(format!(
                "A session for {} already exists",
                date
            )));
        }

        let checklist = checklist_refs
            .into_iter()
            .map(|reference| ChecklistItem {
                reference,
                completed: false,
            })
            .collect();

        let session = SessionRecord {
            id: Uuid::new_v4(),
            date: date.to_string(),
            plan_day,
            status: SessionStatus::InProgress,
            started_at: Utc::now(),
            completed_at: None,
            current_step: 0,
            responses: Vec::new(),
            checklist,
            mood: None,
        };

        tracing::info!("Started session {} for day {}", session.id, plan_day);
        self.sessions.push(session);
        Ok(self.sessions.last().expect("session just pushed"))
    }
}

impl SessionRecord {
    /// Upsert the answer for a step, snapshotting the question text
    pub fn save_response(&mut self, step_id: &str, question: &str, answer: &str) -> Result<()> {
        if steps::step_by_id(step_id).is_none() {
            return Err(Error::Session(format!("Unknown step id: {}", step_id)));
        }

        let now = Utc::now();
        if let Some(existing) = self.responses.iter_mut().find(|r| r.step_id == step_id) {
            existing.answer_text = answer.to_string();
            existing.updated_at = now;
        } else {
            self.responses.push(StepResponse {
                step_id: step_id.to_string(),
                question_text_snapshot: question.to_string(),
                answer_text: answer.to_string(),
                updated_at: now,
            });
        }
        Ok(())
    }

    /// Toggle a checklist item by its reference label; returns the new state
    pub fn toggle_checklist(&mut self, reference: &str) -> Result<bool> {
        let item = self
            .checklist
            .iter_mut()
            .find(|i| i.reference.eq_ignore_ascii_case(reference))
            .ok_or_else(|| {
                Error::Session(format!("No checklist item named {:?}", reference))
            })?;
        item.completed = !item.completed;
        Ok(item.completed)
    }

    /// Record the affective state (value must be 1-10)
    pub fn set_mood(&mut self, value: u8, note: &str) -> Result<()> {
        if !(1..=10).contains(&value) {
            return Err(Error::Session(format!(
                "Mood value must be between 1 and 10, got {}",
                value
            )));
        }
        self.mood = Some(MoodEntry {
            value,
            note: note.to_string(),
        });
        Ok(())
    }

    /// Advance to the next step, clamped at the last
    pub fn advance_step(&mut self) {
        if self.current_step + 1 < steps::step_count() {
            self.current_step += 1;
        }
    }

    /// Go back one step, clamped at the first
    pub fn back_step(&mut self) {
        self.current_step = self.current_step.saturating_sub(1);
    }

    /// Mark the session completed
    pub fn complete(&mut self) {
        if self.status != SessionStatus::Completed {
            self.status = SessionStatus::Completed;
            self.completed_at = Some(Utc::now());
        }
    }
}
