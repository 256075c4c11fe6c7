use crate::core::collection::{ReadOnlyView, UniqueList};
use crate::core::entity::Appointment;
use crate::core::error::ModelResult;
use tracing::debug;

/// Owns every appointment. A client cannot hold two bookings in the same slot.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AppointmentTracker {
    appointments: UniqueList<Appointment>,
}

impl AppointmentTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_appointments(appointments: Vec<Appointment>) -> ModelResult<Self> {
        let mut tracker = Self::new();
        tracker.reset_data(appointments)?;
        Ok(tracker)
    }

    pub fn reset_data(&mut self, appointments: Vec<Appointment>) -> ModelResult<()> {
        self.appointments.replace_all(appointments)
    }

    pub fn add_appointment(&mut self, appointment: Appointment) -> ModelResult<()> {
        debug!(date = %appointment.date, time = %appointment.time, "Adding appointment");
        self.appointments.add(appointment)
    }

    pub fn set_appointment(&mut self, target: &Appointment, edited: Appointment) -> ModelResult<()> {
        debug!(date = %target.date, time = %target.time, "Editing appointment");
        self.appointments.set_item(target, edited)
    }

    pub fn remove_appointment(&mut self, appointment: &Appointment) -> ModelResult<()> {
        debug!(date = %appointment.date, time = %appointment.time, "Removing appointment");
        self.appointments.remove(appointment)
    }

    pub fn appointment_list(&self) -> ReadOnlyView<'_, Appointment> {
        self.appointments.as_read_only_view()
    }

    pub fn filter_appointments_by<P>(&self, predicate: P) -> impl Iterator<Item = &Appointment>
    where
        P: Fn(&Appointment) -> bool,
    {
        self.appointments
            .iter()
            .filter(move |&appointment| predicate(appointment))
    }

    pub fn deep_copy(&self) -> Self {
        Self {
            appointments: self.appointments.deep_copy(),
        }
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}
