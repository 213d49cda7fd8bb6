//! Core domain types for the Eremos daily prayer system.
//!
//! This module defines the fundamental types used throughout the system:
//! - Scripture chapter references
//! - Examination questions and prompt selections
//! - Sessions, step responses, checklist items and mood entries
//! - Reading plan entries

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

// ============================================================================
// Scripture Reference Types
// ============================================================================

/// A single resolved chapter reference (e.g. Genesis 3)
///
/// Produced by the reference resolver, consumed immediately by the
/// checklist initializer and display code. Never persisted as-is; only the
/// `label` survives into checklist rows.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChapterRef {
    pub book_id: String,
    pub book_name: String,
    pub chapter: u32,
    pub label: String,
}

// ============================================================================
// Prompt Types
// ============================================================================

/// A categorized self-examination question
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ExaminationQuestion {
    pub category: String,
    pub question: String,
}

/// Semantic role of a meditation slot within a session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum MeditationSlot {
    Revelation,
    Exposure,
    Response,
}

impl MeditationSlot {
    pub fn as_str(&self) -> &'static str {
        match self {
            MeditationSlot::Revelation => "Revelation",
            MeditationSlot::Exposure => "Exposure",
            MeditationSlot::Response => "Response",
        }
    }
}

/// One selected meditation prompt
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MeditationPrompt {
    pub id: String,
    pub question: String,
    pub slot: MeditationSlot,
}

/// The full set of prompts derived for one plan day
///
/// Computed purely from the plan day and the loaded question table;
/// recomputed fresh on every call, never persisted.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct PromptSelection {
    pub category: String,
    pub meditation: [MeditationPrompt; 3],
    pub examination: Vec<ExaminationQuestion>,
}

// ============================================================================
// Session Types
// ============================================================================

/// Lifecycle status of a prayer session
#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum SessionStatus {
    InProgress,
    Completed,
}

/// A saved answer for one wizard step, upserted on each edit
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct StepResponse {
    pub step_id: String,
    pub question_text_snapshot: String,
    pub answer_text: String,
    pub updated_at: DateTime<Utc>,
}

/// One reading checklist row (one per resolved chapter label)
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct ChecklistItem {
    pub reference: String,
    pub completed: bool,
}

/// Affective state check-in on a 1-10 scale
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Eq)]
pub struct MoodEntry {
    pub value: u8,
    pub note: String,
}

/// Display label for a mood value (1 = deep desolation, 10 = deep consolation)
pub fn mood_label(value: u8) -> &'static str {
    match value {
        1 => "Deep Desolation",
        2 => "Desolation",
        3 => "Heavy",
        4 => "Unsettled",
        5 => "Neutral",
        6 => "Settling",
        7 => "Calm",
        8 => "Peaceful",
        9 => "Consolation",
        10 => "Deep Consolation",
        _ => "Unknown",
    }
}

/// A recorded prayer session with its embedded rows
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SessionRecord {
    pub id: Uuid,
    /// ISO date, YYYY-MM-DD
    pub date: String,
    pub plan_day: u32,
    pub status: SessionStatus,
    pub started_at: DateTime<Utc>,
    pub completed_at: Option<DateTime<Utc>>,
    pub current_step: usize,
    pub responses: Vec<StepResponse>,
    pub checklist: Vec<ChecklistItem>,
    pub mood: Option<MoodEntry>,
}

impl SessionRecord {
    pub fn is_completed(&self) -> bool {
        self.status == SessionStatus::Completed
    }

    /// Find the saved response for a step, if any
    pub fn response(&self, step_id: &str) -> Option<&StepResponse> {
        self.responses.iter().find(|r| r.step_id == step_id)
    }
}

// ============================================================================
// Reading Plan Types
// ============================================================================

/// One day of the externally supplied reading plan
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct PlanEntry {
    pub day: u32,
    /// Free-text citation list, e.g. "Genesis 1-3; Psalm 1"
    pub references: String,
    /// Optional per-day examination category override
    pub category: Option<String>,
}
