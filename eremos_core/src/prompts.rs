//! Prompt rotation for meditation and self-examination.
//!
//! Selections are a pure function of the plan day and the loaded question
//! table: no randomness, no I/O, no stored rotation state. Examination
//! questions advance by a 3-question window per week; meditation prompts
//! rotate daily through fixed 6-entry pools, a faster cadence.

use crate::types::{ExaminationQuestion, MeditationPrompt, MeditationSlot, PromptSelection};

/// The seven examination categories, one per weekday of the plan cycle.
///
/// Stored question categories are matched by prefix, so a table row filed
/// under "Prayer Examination" still lands on the "Prayer" day.
pub const CATEGORY_NAMES: [&str; 7] = [
    "Logismoi",
    "Humility",
    "Prayer",
    "Speech",
    "Detachment",
    "Acedia",
    "Daily Rhythm",
];

/// Meditation prompt pools, one per slot, rotated by plan day.
const MEDITATION_POOLS: [(MeditationSlot, [&str; 6]); 3] = [
    (
        MeditationSlot::Revelation,
        [
            "What does this reveal about God's character?",
            "What does this show about how God acts?",
            "What aspect of God do I resist here?",
            "What would change if I believed this about God?",
            "What promise of God stands behind this passage?",
            "Where have I seen this side of God in my own life?",
        ],
    ),
    (
        MeditationSlot::Exposure,
        [
            "What does this expose in me?",
            "Where do I resist this truth?",
            "What part of me is unsettled by this passage?",
            "What fear in me does this address?",
            "What excuse does this passage take away from me?",
            "What am I pretending not to know here?",
        ],
    ),
    (
        MeditationSlot::Response,
        [
            "What must be surrendered?",
            "What obedience is implied here?",
            "What would trust look like in response?",
            "Where is repentance needed?",
            "What one concrete step does this ask of me today?",
            "Who needs to hear what I have just read?",
        ],
    ),
];

/// Number of examination questions selected per day
const EXAM_WINDOW: usize = 3;

/// Derive the prompt selection for a plan day
///
/// Plan days below 1 are clamped to 1 rather than left to modulo semantics.
/// Identical inputs always yield identical output.
pub fn compute_prompts(plan_day: u32, exam_questions: &[ExaminationQuestion]) -> PromptSelection {
    compute_prompts_for(plan_day, exam_questions, None)
}

/// Like [`compute_prompts`], with an optional per-day category override
/// supplied by the reading plan row.
pub fn compute_prompts_for(
    plan_day: u32,
    exam_questions: &[ExaminationQuestion],
    category_override: Option<&str>,
) -> PromptSelection {
    let plan_day = plan_day.max(1);
    let week_index = ((plan_day - 1) / 7) as usize;
    let day_index = ((plan_day - 1) % 7) as usize;

    let category = category_override
        .map(str::to_string)
        .unwrap_or_else(|| CATEGORY_NAMES[day_index].to_string());

    let filtered: Vec<&ExaminationQuestion> = exam_questions
        .iter()
        .filter(|q| q.category.starts_with(category.as_str()))
        .collect();

    let examination = if filtered.is_empty() {
        tracing::debug!("No examination questions for category {:?}", category);
        Vec::new()
    } else {
        let offset = week_index * EXAM_WINDOW;
        (0..EXAM_WINDOW)
            .map(|i| filtered[(offset + i) % filtered.len()].clone())
            .collect()
    };

    let meditation = std::array::from_fn(|slot_index| {
        let (slot, pool) = &MEDITATION_POOLS[slot_index];
        let question = pool[(plan_day as usize - 1) % pool.len()];
        MeditationPrompt {
            id: format!("med-{}", slot_index + 1),
            question: question.to_string(),
            slot: *slot,
        }
    });

    PromptSelection {
        category,
        meditation,
        examination,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(category: &str, question: &str) -> ExaminationQuestion {
        ExaminationQuestion {
            category: category.into(),
            question: question.into(),
        }
    }

    fn sample_questions() -> Vec<ExaminationQuestion> {
        vec![
            question("Logismoi", "What thoughts have I been entertaining today?"),
            question("Logismoi", "Which thought keeps returning uninvited?"),
            question("Logismoi", "What did I do when it returned?"),
            question("Logismoi", "Where did the thought first enter?"),
            question("Humility", "Where have I sought to be noticed?"),
            question("Prayer Examination", "Has my prayer been distracted or attentive?"),
        ]
    }

    #[test]
    fn test_category_cycles_weekly() {
        let q = sample_questions();
        for plan_day in 1..=21u32 {
            let selection = compute_prompts(plan_day, &q);
            assert_eq!(
                selection.category,
                CATEGORY_NAMES[((plan_day - 1) % 7) as usize]
            );
        }
    }

    #[test]
    fn test_prefix_matches_stored_category() {
        let q = sample_questions();
        // Day 3 is the "Prayer" day; the stored row is "Prayer Examination".
        let selection = compute_prompts(3, &q);
        assert_eq!(selection.category, "Prayer");
        assert!(!selection.examination.is_empty());
        assert_eq!(
            selection.examination[0].question,
            "Has my prayer been distracted or attentive?"
        );
    }

    #[test]
    fn test_examination_window_advances_by_week() {
        let q = sample_questions(); // 4 Logismoi questions
        let week1 = compute_prompts(1, &q);
        let week2 = compute_prompts(8, &q);

        assert_eq!(week1.examination.len(), 3);
        assert_eq!(week1.examination[0].question, q[0].question);
        assert_eq!(week1.examination[2].question, q[2].question);

        // offset = 3, wrapping over the 4-question pool: 3, 0, 1
        assert_eq!(week2.examination[0].question, q[3].question);
        assert_eq!(week2.examination[1].question, q[0].question);
        assert_eq!(week2.examination[2].question, q[1].question);
    }

    #[test]
    fn test_all_questions_eventually_used() {
        let q = sample_questions();
        let mut seen = std::collections::HashSet::new();
        for week in 0..4u32 {
            let selection = compute_prompts(1 + week * 7, &q);
            for picked in &selection.examination {
                seen.insert(picked.question.clone());
            }
        }
        assert_eq!(seen.len(), 4);
    }

    #[test]
    fn test_empty_pool_yields_empty_examination() {
        let selection = compute_prompts(1, &[]);
        assert!(selection.examination.is_empty());
        // Meditation prompts are independent of the question table
        assert_eq!(selection.meditation.len(), 3);
    }

    #[test]
    fn test_meditation_rotates_daily() {
        let q = sample_questions();
        let d1 = compute_prompts(1, &q);
        let d2 = compute_prompts(2, &q);
        assert_ne!(d1.meditation[0].question, d2.meditation[0].question);

        // 6-entry pool wraps after 6 days: day 7 repeats day 1
        let d7 = compute_prompts(7, &q);
        assert_eq!(d1.meditation[0].question, d7.meditation[0].question);
        assert_eq!(d1.meditation[1].question, d7.meditation[1].question);
        assert_eq!(d1.meditation[2].question, d7.meditation[2].question);
    }

    #[test]
    fn test_meditation_slots_are_fixed() {
        let selection = compute_prompts(5, &[]);
        assert_eq!(selection.meditation[0].slot, MeditationSlot::Revelation);
        assert_eq!(selection.meditation[1].slot, MeditationSlot::Exposure);
        assert_eq!(selection.meditation[2].slot, MeditationSlot::Response);
        assert_eq!(selection.meditation[0].id, "med-1");
        assert_eq!(selection.meditation[2].id, "med-3");
    }

    #[test]
    fn test_deterministic_for_identical_inputs() {
        let q = sample_questions();
        for plan_day in [1u32, 9, 40, 365] {
            assert_eq!(
                compute_prompts(plan_day, &q),
                compute_prompts(plan_day, &q)
            );
        }
    }

    #[test]
    fn test_plan_day_zero_is_clamped() {
        let q = sample_questions();
        assert_eq!(compute_prompts(0, &q), compute_prompts(1, &q));
    }

    #[test]
    fn test_category_override_replaces_cycle() {
        let q = sample_questions();
        let selection = compute_prompts_for(1, &q, Some("Humility"));
        assert_eq!(selection.category, "Humility");
        assert_eq!(selection.examination.len(), 3);
        assert_eq!(
            selection.examination[0].question,
            "Where have I sought to be noticed?"
        );
    }
}
