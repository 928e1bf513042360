use crate::backend::PortalBackend;
use crate::error::PortalError;
use crate::types::{Appointment, ClosureOutcome, Slot, SlotFilter};
use chrono::NaiveDate;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

pub struct MockPortalBackendInner {
    pub success: AtomicBool,
    pub calls_to_slots: AtomicU64,
    pub calls_to_close_slots: AtomicU64,
    pub calls_to_reopen_slot: AtomicU64,
    pub calls_to_appointments: AtomicU64,
    pub calls_to_add_appointment: AtomicU64,
    pub calls_to_cancel_appointment: AtomicU64,
    pub slots: Mutex<Vec<Slot>>,
    pub appointments: Mutex<Vec<Appointment>>,
}

#[derive(Clone)]
pub struct MockPortalBackend(pub Arc<MockPortalBackendInner>);

impl MockPortalBackendInner {
    fn new() -> Self {
        Self {
            success: AtomicBool::new(true),
            calls_to_slots: AtomicU64::default(),
            calls_to_close_slots: AtomicU64::default(),
            calls_to_reopen_slot: AtomicU64::default(),
            calls_to_appointments: AtomicU64::default(),
            calls_to_add_appointment: AtomicU64::default(),
            calls_to_cancel_appointment: AtomicU64::default(),
            slots: Mutex::default(),
            appointments: Mutex::default(),
        }
    }
}

impl MockPortalBackend {
    pub fn new() -> Self {
        Self(Arc::new(MockPortalBackendInner::new()))
    }

    fn result(&self) -> Result<(), PortalError> {
        match self.0.success.load(Ordering::SeqCst) {
            true => Ok(()),
            false => Err(PortalError::Storage("supposed to fail".into())),
        }
    }
}

impl PortalBackend for MockPortalBackend {
    fn slots(&self, _filter: SlotFilter) -> Result<Vec<Slot>, PortalError> {
        self.0.calls_to_slots.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        Ok(self.0.slots.lock().unwrap().clone())
    }

    fn close_slots(
        &self,
        _date: NaiveDate,
        heures: &[String],
        _motif: Option<String>,
    ) -> Result<ClosureOutcome, PortalError> {
        self.0.calls_to_close_slots.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        Ok(ClosureOutcome {
            closed_count: heures.len(),
            closed_labels: heures.to_vec(),
        })
    }

    fn reopen_slot(&self, _id: Uuid) -> Result<(), PortalError> {
        self.0.calls_to_reopen_slot.fetch_add(1, Ordering::SeqCst);
        self.result()
    }

    fn appointments(&self, _date: Option<NaiveDate>) -> Result<Vec<Appointment>, PortalError> {
        self.0.calls_to_appointments.fetch_add(1, Ordering::SeqCst);
        self.result()?;
        Ok(self.0.appointments.lock().unwrap().clone())
    }

    fn add_appointment(
        &self,
        date: NaiveDate,
        heure: String,
        client_name: String,
        motif: String,
    ) -> Result<Appointment, PortalError> {
        self.0
            .calls_to_add_appointment
            .fetch_add(1, Ordering::SeqCst);
        self.result()?;
        Ok(Appointment {
            id: Uuid::new_v4(),
            date,
            heure,
            client_name,
            motif,
        })
    }

    fn cancel_appointment(&self, _id: Uuid) -> Result<(), PortalError> {
        self.0
            .calls_to_cancel_appointment
            .fetch_add(1, Ordering::SeqCst);
        self.result()
    }
}
