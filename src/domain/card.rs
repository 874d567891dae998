use crate::domain::board::ColumnId;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::{fmt, str::FromStr};

/// Arrhythmia types a detection event can be tagged with.
///
/// Serde names are pinned to the backend wire labels.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Arrhythmia {
    #[serde(rename = "AFib")]
    AFib,
    #[serde(rename = "AV Block")]
    AvBlock,
    #[serde(rename = "Pause")]
    Pause,
    #[serde(rename = "PSVC")]
    Psvc,
    #[serde(rename = "PVC")]
    Pvc,
}

impl Arrhythmia {
    /// All known arrhythmia types, in wire-schema order.
    pub const ALL: [Arrhythmia; 5] = [
        Self::AFib,
        Self::AvBlock,
        Self::Pause,
        Self::Psvc,
        Self::Pvc,
    ];

    /// Returns the backend wire label
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::AFib => "AFib",
            Self::AvBlock => "AV Block",
            Self::Pause => "Pause",
            Self::Psvc => "PSVC",
            Self::Pvc => "PVC",
        }
    }
}

impl fmt::Display for Arrhythmia {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for Arrhythmia {
    type Err = crate::error::BoardError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AFib" => Ok(Self::AFib),
            "AV Block" => Ok(Self::AvBlock),
            "Pause" => Ok(Self::Pause),
            "PSVC" => Ok(Self::Psvc),
            "PVC" => Ok(Self::Pvc),
            _ => Err(crate::error::BoardError::UnknownArrhythmia(s.to_string())),
        }
    }
}

/// Review status of a detection card
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CardStatus {
    Pending,
    Rejected,
    Done,
}

impl fmt::Display for CardStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "Pending"),
            Self::Rejected => write!(f, "Rejected"),
            Self::Done => write!(f, "Done"),
        }
    }
}

impl CardStatus {
    /// Column a card with this status belongs to.
    ///
    /// PENDING and REJECTED cards are still awaiting review and live in the
    /// todo column; only DONE cards live in the done column.
    pub fn column(&self) -> ColumnId {
        match self {
            Self::Done => ColumnId::Done,
            Self::Pending | Self::Rejected => ColumnId::Todo,
        }
    }
}

/// One arrhythmia-detection review item tied to a patient.
///
/// Cards come from the backend fully formed; this crate never creates ids or
/// detection data, it only moves cards between columns and rewrites `status`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Card {
    pub id: i64,
    pub patient_name: String,
    pub arrhythmias: Vec<Arrhythmia>,
    pub status: CardStatus,
    pub created_date: String,
}

impl Card {
    /// Parses `created_date` as an RFC 3339 timestamp, if it is one.
    ///
    /// The field is opaque on the wire; callers that want a typed date for
    /// display can use this and fall back to the raw string.
    pub fn created_at(&self) -> Option<DateTime<Utc>> {
        DateTime::parse_from_rfc3339(&self.created_date)
            .ok()
            .map(|dt| dt.with_timezone(&Utc))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn card(id: i64, status: CardStatus) -> Card {
        Card {
            id,
            patient_name: format!("Patient {}", id),
            arrhythmias: vec![Arrhythmia::AFib],
            status,
            created_date: "2023-02-01T08:00:00Z".to_string(),
        }
    }

    #[test]
    fn test_arrhythmia_wire_labels() {
        assert_eq!(
            serde_json::to_string(&Arrhythmia::AvBlock).unwrap(),
            "\"AV Block\""
        );
        assert_eq!(serde_json::to_string(&Arrhythmia::Psvc).unwrap(), "\"PSVC\"");

        let parsed: Arrhythmia = serde_json::from_str("\"AFib\"").unwrap();
        assert_eq!(parsed, Arrhythmia::AFib);
    }

    #[test]
    fn test_arrhythmia_from_str() {
        assert_eq!(Arrhythmia::from_str("AV Block").unwrap(), Arrhythmia::AvBlock);
        assert_eq!(Arrhythmia::from_str("PVC").unwrap(), Arrhythmia::Pvc);
        assert!(Arrhythmia::from_str("Flutter").is_err());
        assert!(Arrhythmia::from_str("afib").is_err());
    }

    #[test]
    fn test_status_wire_labels() {
        assert_eq!(
            serde_json::to_string(&CardStatus::Pending).unwrap(),
            "\"PENDING\""
        );
        let parsed: CardStatus = serde_json::from_str("\"REJECTED\"").unwrap();
        assert_eq!(parsed, CardStatus::Rejected);
    }

    #[test]
    fn test_status_column_membership() {
        assert_eq!(CardStatus::Pending.column(), ColumnId::Todo);
        assert_eq!(CardStatus::Rejected.column(), ColumnId::Todo);
        assert_eq!(CardStatus::Done.column(), ColumnId::Done);
    }

    #[test]
    fn test_card_deserializes_backend_payload() {
        let json = r#"{
            "arrhythmias": ["AV Block", "PVC"],
            "created_date": "2023-01-15T10:30:00Z",
            "id": 42,
            "patient_name": "Jane Doe",
            "status": "PENDING"
        }"#;

        let card: Card = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, 42);
        assert_eq!(card.patient_name, "Jane Doe");
        assert_eq!(card.arrhythmias, vec![Arrhythmia::AvBlock, Arrhythmia::Pvc]);
        assert_eq!(card.status, CardStatus::Pending);
    }

    #[test]
    fn test_created_at_parses_rfc3339() {
        let card = card(1, CardStatus::Pending);
        let parsed = card.created_at().unwrap();
        assert_eq!(parsed.to_rfc3339(), "2023-02-01T08:00:00+00:00");
    }

    #[test]
    fn test_created_at_opaque_string_is_none() {
        let mut card = card(1, CardStatus::Pending);
        card.created_date = "yesterday".to_string();
        assert!(card.created_at().is_none());
    }
}
