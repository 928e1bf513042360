use chrono::NaiveDate;
use diesel::Queryable;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// One time bucket on one calendar date. A record only exists once the bucket
/// has been administratively closed; an absent record means the bucket is
/// open and bookable.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Slot {
    pub id: Uuid,
    pub date: NaiveDate,
    pub heure: String,
    pub ferme: bool,
    pub motif_fermeture: Option<String>,
}

/// A booked meeting. Carries its own date and time label; it is not joined to
/// the slot registry beyond date/label equality at read time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Queryable)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub heure: String,
    pub client_name: String,
    pub motif: String,
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SlotFilter {
    pub date: Option<NaiveDate>,
    pub ferme: Option<bool>,
}

/// Result of a bulk closure: how many buckets this call newly closed, and the
/// full closed set for the date afterwards, in label order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ClosureOutcome {
    pub closed_count: usize,
    pub closed_labels: Vec<String>,
}
