use crate::error::PortalError;
use crate::types::{Appointment, ClosureOutcome, Slot, SlotFilter};
use chrono::NaiveDate;
use uuid::Uuid;

/// Storage seam shared by the in-memory and database backends.
///
/// `close_slots` and `reopen_slot` must each be atomic with respect to
/// themselves: all labels of one call are persisted together or not at all.
pub trait PortalBackend: Clone + Send + Sync + 'static {
    fn slots(&self, filter: SlotFilter) -> Result<Vec<Slot>, PortalError>;

    /// Creates a closed record for every requested label not already closed
    /// on `date`. Already-closed labels are skipped, not errors.
    fn close_slots(
        &self,
        date: NaiveDate,
        heures: &[String],
        motif: Option<String>,
    ) -> Result<ClosureOutcome, PortalError>;

    /// Deletes the closed record, returning the bucket to its implicit open
    /// state. The stored reason is lost. Appointments are unaffected.
    fn reopen_slot(&self, id: Uuid) -> Result<(), PortalError>;

    fn appointments(&self, date: Option<NaiveDate>) -> Result<Vec<Appointment>, PortalError>;

    fn add_appointment(
        &self,
        date: NaiveDate,
        heure: String,
        client_name: String,
        motif: String,
    ) -> Result<Appointment, PortalError>;

    fn cancel_appointment(&self, id: Uuid) -> Result<(), PortalError>;
}
