//! Markdown export of a completed (or in-progress) session.

use crate::types::{PlanEntry, SessionRecord};
use crate::{steps, Result};
use std::path::{Path, PathBuf};

/// Render one session to markdown
///
/// The checklist is rendered from the session's own rows; when a session
/// has no checklist (no readings resolved), the raw plan clauses are listed
/// unchecked so the export still shows what the day asked for.
pub fn session_to_markdown(session: &SessionRecord, plan_entry: Option<&PlanEntry>) -> String {
    let mut md = format!("# {} - Eremos Session\n\n", session.date);
    md.push_str(&format!("**Day:** {}\n", session.plan_day));

    if let Some(mood) = &session.mood {
        md.push_str(&format!("**Mood:** {}/10\n", mood.value));
        if !mood.note.is_empty() {
            md.push_str(&format!("**Mood Note:** {}\n", mood.note));
        }
    }
    md.push_str("\n---\n\n");

    md.push_str("## Scripture Readings\n");
    if !session.checklist.is_empty() {
        for item in &session.checklist {
            let mark = if item.completed { 'x' } else { ' ' };
            md.push_str(&format!("- [{}] {}\n", mark, item.reference));
        }
    } else if let Some(entry) = plan_entry {
        for clause in entry
            .references
            .split([',', ';'])
            .map(str::trim)
            .filter(|s| !s.is_empty())
        {
            md.push_str(&format!("- [ ] {}\n", clause));
        }
    }
    md.push('\n');

    for step_id in steps::RESPONSE_STEP_IDS {
        let Some(response) = session.response(step_id) else {
            continue;
        };
        if response.answer_text.is_empty() {
            continue;
        }
        let label = steps::step_by_id(step_id)
            .map(|s| s.export_label)
            .unwrap_or(step_id);
        md.push_str(&format!("### {}\n", label));
        md.push_str(&format!("*{}*\n\n", response.question_text_snapshot));
        md.push_str(&format!("{}\n\n", response.answer_text));
    }

    md.push_str("\n---\n*Amen.*");
    md
}

/// Default export filename for a session
pub fn export_filename(session: &SessionRecord) -> String {
    format!("{}-eremos-day-{}.md", session.date, session.plan_day)
}

/// Write the markdown export into a directory, returning the file path
pub fn write_markdown(
    session: &SessionRecord,
    plan_entry: Option<&PlanEntry>,
    dir: &Path,
) -> Result<PathBuf> {
    std::fs::create_dir_all(dir)?;
    let path = dir.join(export_filename(session));
    std::fs::write(&path, session_to_markdown(session, plan_entry))?;
    tracing::info!("Exported session {} to {:?}", session.id, path);
    Ok(path)
}
