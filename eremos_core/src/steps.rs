//! The fixed wizard step sequence.
//!
//! Pure lookup helpers over the eleven-step session flow; rendering of the
//! steps belongs to the front-end.

/// One wizard step definition
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Step {
    pub id: &'static str,
    pub title: &'static str,
    /// Label used in the markdown export, where it differs from the title
    pub export_label: &'static str,
}

/// The full session flow, in order
pub const STEPS: [Step; 11] = [
    Step { id: "prayer-open", title: "Orientation", export_label: "Orientation" },
    Step { id: "reading", title: "Lectio Divina", export_label: "Scripture Readings" },
    Step { id: "meditation-1", title: "Meditation I", export_label: "Meditation I (Revelation)" },
    Step { id: "meditation-2", title: "Meditation II", export_label: "Meditation II (Exposure)" },
    Step { id: "meditation-3", title: "Meditation III", export_label: "Meditation III (Response)" },
    Step { id: "examination-1", title: "Examination I", export_label: "Examination I" },
    Step { id: "examination-2", title: "Examination II", export_label: "Examination II" },
    Step { id: "examination-3", title: "Examination III", export_label: "Examination III" },
    Step { id: "mood", title: "Affective State", export_label: "Affective State" },
    Step { id: "prayer-free", title: "Free Prayer", export_label: "Free Prayer" },
    Step { id: "prayer-close", title: "Benediction", export_label: "Benediction" },
];

/// Step ids that carry a written response, in export order
pub const RESPONSE_STEP_IDS: [&str; 7] = [
    "meditation-1",
    "meditation-2",
    "meditation-3",
    "examination-1",
    "examination-2",
    "examination-3",
    "prayer-free",
];

pub fn step_count() -> usize {
    STEPS.len()
}

/// Look up a step by id
pub fn step_by_id(id: &str) -> Option<&'static Step> {
    STEPS.iter().find(|s| s.id == id)
}

/// Whether a step accepts a written response
pub fn is_response_step(id: &str) -> bool {
    RESPONSE_STEP_IDS.contains(&id)
}
