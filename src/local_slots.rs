use crate::backend::PortalBackend;
use crate::error::PortalError;
use crate::types::{Appointment, ClosureOutcome, Slot, SlotFilter};
use chrono::NaiveDate;
use std::collections::{BTreeSet, HashMap};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

/// In-memory backend, used when no database URL is configured. Sparse by
/// construction: a record exists only for buckets that were closed, open
/// buckets are never materialized.
#[derive(Debug, Clone, Default)]
pub struct LocalSlots {
    slots: Arc<Mutex<HashMap<Uuid, Slot>>>,
    appointments: Arc<Mutex<HashMap<Uuid, Appointment>>>,
}

impl PortalBackend for LocalSlots {
    fn slots(&self, filter: SlotFilter) -> Result<Vec<Slot>, PortalError> {
        let slots = self.slots.lock().unwrap();
        let mut matching: Vec<Slot> = slots
            .values()
            .filter(|slot| filter.date.map_or(true, |date| slot.date == date))
            .filter(|slot| filter.ferme.map_or(true, |ferme| slot.ferme == ferme))
            .cloned()
            .collect();
        matching.sort_by(|a, b| (a.date, &a.heure).cmp(&(b.date, &b.heure)));
        Ok(matching)
    }

    fn close_slots(
        &self,
        date: NaiveDate,
        heures: &[String],
        motif: Option<String>,
    ) -> Result<ClosureOutcome, PortalError> {
        if heures.is_empty() {
            return Err(PortalError::InvalidArgument(
                "at least one time label is required".into(),
            ));
        }

        let mut slots = self.slots.lock().unwrap();
        let already_closed: BTreeSet<String> = slots
            .values()
            .filter(|slot| slot.date == date && slot.ferme)
            .map(|slot| slot.heure.clone())
            .collect();

        let requested: BTreeSet<&String> = heures.iter().collect();
        let mut closed_count = 0;
        for heure in requested {
            if already_closed.contains(heure) {
                continue;
            }
            let id = Uuid::new_v4();
            slots.insert(
                id,
                Slot {
                    id,
                    date,
                    heure: heure.clone(),
                    ferme: true,
                    motif_fermeture: motif.clone(),
                },
            );
            closed_count += 1;
        }

        let closed_labels: BTreeSet<String> = slots
            .values()
            .filter(|slot| slot.date == date && slot.ferme)
            .map(|slot| slot.heure.clone())
            .collect();
        Ok(ClosureOutcome {
            closed_count,
            closed_labels: closed_labels.into_iter().collect(),
        })
    }

    fn reopen_slot(&self, id: Uuid) -> Result<(), PortalError> {
        let mut slots = self.slots.lock().unwrap();
        if slots.remove(&id).is_none() {
            return Err(PortalError::NotFound(id));
        }
        Ok(())
    }

    fn appointments(&self, date: Option<NaiveDate>) -> Result<Vec<Appointment>, PortalError> {
        let appointments = self.appointments.lock().unwrap();
        let mut matching: Vec<Appointment> = appointments
            .values()
            .filter(|appointment| date.map_or(true, |date| appointment.date == date))
            .cloned()
            .collect();
        matching.sort_by(|a, b| (a.date, &a.heure).cmp(&(b.date, &b.heure)));
        Ok(matching)
    }

    fn add_appointment(
        &self,
        date: NaiveDate,
        heure: String,
        client_name: String,
        motif: String,
    ) -> Result<Appointment, PortalError> {
        let id = Uuid::new_v4();
        let appointment = Appointment {
            id,
            date,
            heure,
            client_name,
            motif,
        };
        let mut appointments = self.appointments.lock().unwrap();
        appointments.insert(id, appointment.clone());
        Ok(appointment)
    }

    fn cancel_appointment(&self, id: Uuid) -> Result<(), PortalError> {
        let mut appointments = self.appointments.lock().unwrap();
        if appointments.remove(&id).is_none() {
            return Err(PortalError::NotFound(id));
        }
        Ok(())
    }
}
