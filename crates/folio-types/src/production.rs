//! Production tracking records

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

/// Work shift a record belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Shift {
    #[default]
    Morning,
    Afternoon,
    Night,
}

impl Shift {
    pub fn all() -> &'static [Shift] {
        &[Shift::Morning, Shift::Afternoon, Shift::Night]
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Shift::Morning => "Morning",
            Shift::Afternoon => "Afternoon",
            Shift::Night => "Night",
        }
    }
}

/// Body for creating or replacing a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewProductionRecord {
    pub date: NaiveDate,
    pub product: String,
    pub quantity: u32,
    pub shift: Shift,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub notes: Option<String>,
}

/// A stored record as returned by the API
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ProductionRecord {
    #[serde(deserialize_with = "crate::deserialize_id")]
    pub id: String,
    pub date: NaiveDate,
    pub product: String,
    pub quantity: u32,
    #[serde(default)]
    pub shift: Shift,
    #[serde(default)]
    pub notes: Option<String>,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_record_wire_format() {
        let record = NewProductionRecord {
            date: NaiveDate::from_ymd_opt(2024, 3, 9).unwrap(),
            product: "Widget A".to_string(),
            quantity: 120,
            shift: Shift::Night,
            notes: None,
        };
        let json = serde_json::to_value(&record).unwrap();
        assert_eq!(json["date"], "2024-03-09");
        assert_eq!(json["shift"], "night");
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_record_tolerates_missing_optional_fields() {
        let json = r#"{"id":7,"date":"2024-01-02","product":"Bolts","quantity":5}"#;
        let record: ProductionRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.id, "7");
        assert_eq!(record.shift, Shift::Morning);
        assert!(record.created_at.is_none());
    }
}
