use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::core::domain::{PlanRow, ReproEvent};

fn deserialize_with_path<T: serde::de::DeserializeOwned>(json_str: &str) -> Result<T> {
    let mut deserializer = serde_json::Deserializer::from_str(json_str);
    serde_path_to_error::deserialize(&mut deserializer).map_err(|e| {
        let path = e.path().to_string();
        anyhow::anyhow!("at {}: {}", path, e.into_inner())
    })
}

/// Unified interface for loading breeding plan rows from JSON
pub struct PlanLoader;

impl PlanLoader {
    /// Load plan rows from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Vec<PlanRow>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read plan file {}", path.display()))?;
        Self::load_from_json_str(&content)
    }

    /// Load plan rows from a JSON string
    pub fn load_from_json_str(json_str: &str) -> Result<Vec<PlanRow>> {
        deserialize_with_path(json_str).context("Failed to parse plan JSON")
    }
}

/// Unified interface for loading reproductive event history from JSON
pub struct EventLoader;

impl EventLoader {
    /// Load a female's event history from a JSON file
    pub fn load_from_file(path: &Path) -> Result<Vec<ReproEvent>> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read event file {}", path.display()))?;
        Self::load_from_json_str(&content)
    }

    /// Load a female's event history from a JSON string.
    ///
    /// Events are sorted ascending by date and deduplicated by (kind, date),
    /// so downstream statistics can consume them directly.
    pub fn load_from_json_str(json_str: &str) -> Result<Vec<ReproEvent>> {
        let mut events: Vec<ReproEvent> =
            deserialize_with_path(json_str).context("Failed to parse event JSON")?;

        events.sort_by_key(|e| e.date);
        events.dedup_by(|a, b| a.kind == b.kind && a.date == b.date);
        Ok(events)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::domain::EventKind;
    use crate::core::species::Species;
    use chrono::NaiveDate;

    #[test]
    fn test_load_plans_from_json_str() {
        let json = r#"[
            {
                "id": "plan-1",
                "name": "Luna x Ridge",
                "species": "dog",
                "locked": {
                    "cycleStart": "2025-01-01",
                    "placementStart": "2025-06-01"
                },
                "expected": {
                    "nextCycleStart": "2025-06-30"
                }
            },
            {
                "id": "plan-2",
                "name": "Willow",
                "species": "cat"
            }
        ]"#;

        let plans = PlanLoader::load_from_json_str(json).unwrap();
        assert_eq!(plans.len(), 2);
        assert_eq!(plans[0].id, "plan-1");
        assert_eq!(plans[0].species, Species::Dog);
        assert_eq!(
            plans[0].locked.cycle_start,
            NaiveDate::from_ymd_opt(2025, 1, 1)
        );
        // Optionals default when absent
        assert!(plans[1].locked.cycle_start.is_none());
        assert!(plans[1].expected.next_cycle_start.is_none());
    }

    #[test]
    fn test_load_plans_reports_json_path() {
        let json = r#"[{"id": "plan-1", "name": "X", "species": "dragon"}]"#;
        let err = PlanLoader::load_from_json_str(json).unwrap_err();
        assert!(format!("{:#}", err).contains("[0]"));
    }

    #[test]
    fn test_load_events_sorts_and_dedups() {
        let json = r#"[
            {"kind": "heatStart", "date": "2024-06-29"},
            {"kind": "heatStart", "date": "2024-01-01"},
            {"kind": "heatStart", "date": "2024-06-29"},
            {"kind": "birth", "date": "2024-04-01", "note": "litter of 6"}
        ]"#;

        let events = EventLoader::load_from_json_str(json).unwrap();
        assert_eq!(events.len(), 3);
        assert_eq!(events[0].date, NaiveDate::from_ymd_opt(2024, 1, 1).unwrap());
        assert_eq!(events[1].kind, EventKind::Birth);
        assert_eq!(events[1].note.as_deref(), Some("litter of 6"));
        assert_eq!(events[2].date, NaiveDate::from_ymd_opt(2024, 6, 29).unwrap());
    }

    #[test]
    fn test_load_from_missing_file_gives_context() {
        let err = PlanLoader::load_from_file(Path::new("/nonexistent/plans.json")).unwrap_err();
        assert!(format!("{:#}", err).contains("Failed to read plan file"));
    }
}
