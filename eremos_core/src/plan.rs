//! Reading plan loading.
//!
//! The plan is an externally maintained CSV mapping each plan day to a
//! free-text citation string, with an optional per-day examination category
//! override: `day,references,category`.

use crate::types::PlanEntry;
use crate::Result;
use serde::Deserialize;
use std::collections::HashMap;
use std::path::Path;

/// CSV row format for the reading plan
#[derive(Debug, Deserialize)]
struct PlanRow {
    day: u32,
    references: String,
    #[serde(default)]
    category: Option<String>,
}

/// The loaded reading plan, keyed by plan day
#[derive(Clone, Debug, Default)]
pub struct ReadingPlan {
    entries: HashMap<u32, PlanEntry>,
}

impl ReadingPlan {
    /// Load a reading plan from a CSV file
    ///
    /// Malformed rows are logged and skipped. A later row for the same day
    /// replaces an earlier one.
    pub fn load(path: &Path) -> Result<Self> {
        let mut reader = csv::ReaderBuilder::new().has_headers(true).from_path(path)?;

        let mut entries = HashMap::new();
        for result in reader.deserialize::<PlanRow>() {
            match result {
                Ok(row) => {
                    if row.day == 0 {
                        tracing::warn!("Skipping plan row with day 0");
                        continue;
                    }
                    let category = row
                        .category
                        .map(|c| c.trim().to_string())
                        .filter(|c| !c.is_empty());
                    entries.insert(
                        row.day,
                        PlanEntry {
                            day: row.day,
                            references: row.references.trim().to_string(),
                            category,
                        },
                    );
                }
                Err(e) => {
                    tracing::warn!("Failed to deserialize plan row: {}", e);
                }
            }
        }

        tracing::info!("Loaded reading plan with {} days from {:?}", entries.len(), path);
        Ok(Self { entries })
    }

    /// Load the plan if the file exists, otherwise an empty plan
    pub fn load_or_empty(path: &Path) -> Self {
        if !path.exists() {
            tracing::info!("No reading plan at {:?}, using empty plan", path);
            return Self::default();
        }
        match Self::load(path) {
            Ok(plan) => plan,
            Err(e) => {
                tracing::warn!("Failed to load reading plan at {:?}: {}. Using empty plan.", path, e);
                Self::default()
            }
        }
    }

    /// The plan entry for a day, if the plan defines one
    pub fn entry(&self, day: u32) -> Option<&PlanEntry> {
        self.entries.get(&day)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_load_plan() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("plan.csv");
        std::fs::write(
            &path,
            "day,references,category\n\
             1,Genesis 1-3; Psalm 1,\n\
             2,Genesis 4-7; Psalm 2,Humility\n",
        )
        .unwrap();

        let plan = ReadingPlan::load(&path).unwrap();
        assert_eq!(plan.len(), 2);

        let day1 = plan.entry(1).unwrap();
        assert_eq!(day1.references, "Genesis 1-3; Psalm 1");
        assert_eq!(day1.category, None);

        let day2 = plan.entry(2).unwrap();
        assert_eq!(day2.category.as_deref(), Some("Humility"));

        assert!(plan.entry(3).is_none());
    }

    #[test]
    fn test_load_skips_malformed_rows() {
        let temp_dir = tempfile::tempdir().unwrap();
        let path = temp_dir.path().join("plan.csv");
        std::fs::write(
            &path,
            "day,references,category\nnot_a_day,Genesis 1,\n0,Exodus 1,\n3,Luke 1,\n",
        )
        .unwrap();

        let plan = ReadingPlan::load(&path).unwrap();
        assert_eq!(plan.len(), 1);
        assert!(plan.entry(3).is_some());
    }

    #[test]
    fn test_load_or_empty_missing_file() {
        let temp_dir = tempfile::tempdir().unwrap();
        let plan = ReadingPlan::load_or_empty(&temp_dir.path().join("nope.csv"));
        assert!(plan.is_empty());
    }
}
