use crate::error::PortalError;
use crate::types::Slot;
use chrono::{DateTime, NaiveDate};

/// Default bookable time labels. This list is configuration, not derived
/// data, and is shared by every surface that enumerates or validates labels.
pub const HEURES_DEFAUT: [&str; 13] = [
    "09:00", "09:30", "10:00", "10:30", "11:00", "11:30", "14:00", "14:30", "15:00", "15:30",
    "16:00", "16:30", "17:00",
];

/// The fixed, ordered enumeration of bookable time labels for one practice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Schedule {
    heures: Vec<String>,
}

impl Default for Schedule {
    fn default() -> Self {
        Self::new(HEURES_DEFAUT.iter().map(|heure| heure.to_string()).collect())
    }
}

impl Schedule {
    pub fn new(heures: Vec<String>) -> Self {
        Self { heures }
    }

    pub fn heures(&self) -> &[String] {
        &self.heures
    }

    pub fn contains(&self, heure: &str) -> bool {
        self.heures.iter().any(|known| known == heure)
    }

    /// Rejects an empty label set or any label outside the enumeration.
    /// Called before any write so a failed closure mutates nothing.
    pub fn validate_labels(&self, heures: &[String]) -> Result<(), PortalError> {
        if heures.is_empty() {
            return Err(PortalError::InvalidArgument(
                "at least one time label is required".into(),
            ));
        }
        for heure in heures {
            if !self.contains(heure) {
                return Err(PortalError::InvalidArgument(format!(
                    "unknown time label: {heure}"
                )));
            }
        }
        Ok(())
    }

    /// Labels still bookable: the fixed enumeration minus every label with a
    /// closed record. Duplicate records for one label count as closed if any
    /// of them is closed; a record with `ferme = false` counts as open.
    pub fn open_labels(&self, closed: &[Slot]) -> Vec<String> {
        self.heures
            .iter()
            .filter(|heure| !closed.iter().any(|slot| slot.ferme && &slot.heure == *heure))
            .cloned()
            .collect()
    }
}

/// Accepts a plain calendar date or an RFC 3339 datetime; any time-of-day
/// component is discarded so both sides of a comparison are calendar dates.
pub fn parse_date(value: &str) -> Result<NaiveDate, PortalError> {
    if let Ok(date) = NaiveDate::parse_from_str(value, "%Y-%m-%d") {
        return Ok(date);
    }
    DateTime::parse_from_rfc3339(value)
        .map(|datetime| datetime.date_naive())
        .map_err(|_| PortalError::InvalidArgument(format!("invalid date: {value}")))
}
