use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::models::{ForecastStatistics, MonthComparison, SeriesPoint, Transaction};

/// Everything the backend exports for one dashboard rendering: raw records
/// plus the pre-computed series and aggregates. Nothing in it is recomputed
/// on this side.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DashboardSnapshot {
    pub transactions: Vec<Transaction>,
    pub history: Vec<SeriesPoint>,
    pub forecast: Vec<SeriesPoint>,
    pub statistics: ForecastStatistics,
    pub comparison: MonthComparison,
}

pub fn load_snapshot(path: &Path) -> Result<DashboardSnapshot> {
    let raw = fs::read_to_string(path)
        .with_context(|| format!("Failed to read snapshot file {:?}", path))?;
    serde_json::from_str(&raw).with_context(|| format!("Invalid snapshot JSON in {:?}", path))
}

pub fn save_snapshot(path: &Path, snapshot: &DashboardSnapshot) -> Result<()> {
    let raw = serde_json::to_string_pretty(snapshot).context("Failed to serialize snapshot")?;
    fs::write(path, raw).with_context(|| format!("Failed to write snapshot file {:?}", path))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_snapshot(Path::new("definitely_not_here.json")).unwrap_err();
        assert!(format!("{err:#}").contains("definitely_not_here.json"));
    }

    #[test]
    fn snapshot_survives_a_disk_round_trip() {
        let path = std::env::temp_dir().join("kopilka_snapshot_roundtrip.json");
        let snapshot = crate::data::demo_snapshot();

        save_snapshot(&path, &snapshot).unwrap();
        let restored = load_snapshot(&path).unwrap();
        std::fs::remove_file(&path).ok();

        assert_eq!(restored, snapshot);
    }

    #[test]
    fn confidence_fields_are_optional_on_the_wire() {
        let raw = r#"{
            "transactions": [],
            "history": [{"month": 1, "year": 2026, "amount": 100.0}],
            "forecast": [{"month": 2, "year": 2026, "amount": 120.0, "confidence_min": 90.0, "confidence_max": 150.0}],
            "statistics": {
                "average": 110.0,
                "std_deviation": 12.0,
                "confidence_interval": {"min": 86.0, "max": 134.0}
            },
            "comparison": {
                "current": {"total": 120.0, "count": 3},
                "previous": {"total": 100.0, "count": 4},
                "total_change_percent": 20.0,
                "by_category": []
            }
        }"#;

        let snapshot: DashboardSnapshot = serde_json::from_str(raw).unwrap();
        assert_eq!(snapshot.history[0].confidence_min, None);
        assert!(snapshot.forecast[0].confidence_max.is_some());
    }
}
