//! Examination question table: built-in defaults and CSV loading.
//!
//! Questions are grouped under the seven examination categories and loaded
//! once at startup; the table is immutable for the life of a session.

use crate::prompts::CATEGORY_NAMES;
use crate::types::ExaminationQuestion;
use crate::Result;
use serde::Deserialize;
use std::path::Path;

/// CSV row format: `category,question`
#[derive(Debug, Deserialize)]
struct QuestionRow {
    category: String,
    question: String,
}

/// Load examination questions from a CSV file
///
/// Rows that fail to deserialize or carry empty fields are logged and
/// skipped; the remainder load in file order.
pub fn load_examination_questions(path: &Path) -> Result<Vec<ExaminationQuestion>> {
    let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

    let mut questions = Vec::new();
    for result in reader.deserialize::<QuestionRow>() {
        match result {
            Ok(row) => {
                let category = row.category.trim().to_string();
                let question = row.question.trim().to_string();
                if category.is_empty() || question.is_empty() {
                    tracing::warn!("Skipping question row with empty field");
                    continue;
                }
                questions.push(ExaminationQuestion { category, question });
            }
            Err(e) => {
                tracing::warn!("Failed to deserialize question row: {}", e);
            }
        }
    }

    tracing::info!("Loaded {} examination questions from {:?}", questions.len(), path);
    Ok(questions)
}

/// Built-in examination framework used when no question table is configured
pub fn default_examination_questions() -> Vec<ExaminationQuestion> {
    let entries: &[(&str, &str)] = &[
        ("Logismoi", "What thoughts have I been entertaining today?"),
        ("Logismoi", "Which thought keeps returning, and what does it promise me?"),
        ("Logismoi", "Did I notice the thought at its entry, or only after consenting to it?"),
        ("Logismoi", "What did I turn to when the thought pressed hardest?"),
        ("Humility", "Where have I sought to be noticed?"),
        ("Humility", "Whose correction did I resent today?"),
        ("Humility", "What work did I consider beneath me?"),
        ("Humility", "Where did I speak of myself when silence would have served?"),
        ("Prayer", "Has my prayer been distracted or attentive?"),
        ("Prayer", "Did I pray at the hours I intended, or only when it was convenient?"),
        ("Prayer", "What did I ask of God today, and what did I merely worry about?"),
        ("Prayer", "When prayer felt dry, did I remain?"),
        ("Speech", "Have I spoken words that were better left unsaid?"),
        ("Speech", "Did I repeat a report I did not know to be true?"),
        ("Speech", "Whom did my words diminish today?"),
        ("Speech", "Where did I stay silent when a word was owed?"),
        ("Detachment", "What did I grasp at today as though it were mine to keep?"),
        ("Detachment", "Which possession or plan, if taken tonight, would unmake my peace?"),
        ("Detachment", "What did I consume out of restlessness rather than need?"),
        ("Detachment", "Whose approval am I still carrying?"),
        ("Acedia", "Where did I flee the present hour today?"),
        ("Acedia", "What duty did I abandon at the noonday slump?"),
        ("Acedia", "Did I despise the smallness of my work?"),
        ("Acedia", "What distraction did I reach for when the stillness pressed in?"),
        ("Daily Rhythm", "Did I keep the hours I set for rest, work, and prayer?"),
        ("Daily Rhythm", "Where did the day's order break, and what broke it?"),
        ("Daily Rhythm", "What did I leave undone that tomorrow must carry?"),
        ("Daily Rhythm", "Did I end the day in gratitude or in accounting?"),
    ];

    entries
        .iter()
        .map(|(category, question)| ExaminationQuestion {
            category: (*category).into(),
            question: (*question).into(),
        })
        .collect()
}

/// Validate a question table for coverage and completeness
///
/// Returns a list of validation errors, or empty Vec if valid.
pub fn validate(questions: &[ExaminationQuestion]) -> Vec<String> {
    let mut errors = Vec::new();

    for q in questions {
        if q.category.is_empty() {
            errors.push(format!("Question {:?} has empty category", q.question));
        }
        if q.question.is_empty() {
            errors.push(format!("Category {:?} has an empty question", q.category));
        }
    }

    // Every cycle day needs at least one question reachable by prefix match
    for name in CATEGORY_NAMES {
        let covered = questions.iter().any(|q| q.category.starts_with(name));
        if !covered {
            errors.push(format!("No questions for category {:?}", name));
        }
    }

    errors
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_set_validates() {
        let questions = default_examination_questions();
        let errors = validate(&questions);
        assert!(errors.is_empty(), "Default set has errors: {:?}", errors);
    }

    #[test]
    fn test_default_set_covers_every_category() {
        let questions = default_examination_questions();
        for name in CATEGORY_NAMES {
            let count = questions
                .iter()
                .filter(|q| q.category.starts_with(name))
                .count();
            assert!(count >= 3, "Category {} has only {} questions", name, count);
        }
    }

    #[test]
    fn test_load_from_csv() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("questions.csv");
        std::fs::write(
            &path,
            "category,question\n\
             Logismoi,What thoughts have I been entertaining today?\n\
             Prayer Examination,Has my prayer been distracted or attentive?\n",
        )
        .unwrap();

        let questions = load_examination_questions(&path).unwrap();
        assert_eq!(questions.len(), 2);
        assert_eq!(questions[0].category, "Logismoi");
        assert_eq!(questions[1].category, "Prayer Examination");
    }

    #[test]
    fn test_load_skips_empty_fields() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("questions.csv");
        std::fs::write(
            &path,
            "category,question\nSpeech,\n,orphaned\nHumility,Where have I sought to be noticed?\n",
        )
        .unwrap();

        let questions = load_examination_questions(&path).unwrap();
        assert_eq!(questions.len(), 1);
        assert_eq!(questions[0].category, "Humility");
    }

    #[test]
    fn test_validate_reports_missing_category() {
        let questions = vec![ExaminationQuestion {
            category: "Logismoi".into(),
            question: "What thoughts have I been entertaining today?".into(),
        }];
        let errors = validate(&questions);
        assert!(errors.iter().any(|e| e.contains("Humility")));
    }
}
