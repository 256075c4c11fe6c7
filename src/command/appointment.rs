use super::{CommandError, CommandOutcome, CommandResult, Panel, listed, select};
use crate::core::entity::{Appointment, Client, Service};
use crate::core::model::Model;
use crate::core::tracker::AppointmentTracker;
use crate::core::types::{Date, Index, Phone, ServiceCode, Time};

/// An appointment as entered by the user, referring to a client and a service
/// by their identity keys.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewAppointment {
    pub date: Date,
    pub time: Time,
    pub phone: Phone,
    pub code: ServiceCode,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditAppointmentDescriptor {
    pub date: Option<Date>,
    pub time: Option<Time>,
    pub phone: Option<Phone>,
    pub code: Option<ServiceCode>,
}

impl EditAppointmentDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.date.is_some() || self.time.is_some() || self.phone.is_some() || self.code.is_some()
    }

    /// Builds the edited appointment. A new phone or code is looked up again;
    /// otherwise the appointment keeps the copies it already holds.
    pub fn apply(&self, model: &Model, appointment: &Appointment) -> Result<Appointment, CommandError> {
        let client = match &self.phone {
            Some(phone) => lookup_client(model, phone)?,
            None => appointment.client.clone(),
        };
        let service = match &self.code {
            Some(code) => lookup_service(model, code)?,
            None => appointment.service.clone(),
        };
        Ok(Appointment {
            date: self.date.unwrap_or(appointment.date),
            time: self.time.unwrap_or(appointment.time),
            client,
            service,
            is_done: appointment.is_done,
        })
    }
}

fn lookup_client(model: &Model, phone: &Phone) -> Result<Client, CommandError> {
    model
        .client_by_phone(phone)
        .cloned()
        .ok_or_else(|| CommandError::UnknownClient(phone.clone()))
}

fn lookup_service(model: &Model, code: &ServiceCode) -> Result<Service, CommandError> {
    model
        .service_by_code(code)
        .cloned()
        .ok_or_else(|| CommandError::UnknownService(code.clone()))
}

pub(super) fn add(model: &mut Model, new: &NewAppointment) -> CommandOutcome {
    let client = lookup_client(model, &new.phone)?;
    let service = lookup_service(model, &new.code)?;
    let appointment = Appointment::new(new.date, new.time, client, service);
    model.add_appointment(appointment.clone())?;
    Ok(CommandResult::showing(
        format!("New appointment added: {appointment}"),
        Panel::Appointments,
    ))
}

pub(super) fn edit(
    model: &mut Model,
    index: Index,
    descriptor: &EditAppointmentDescriptor,
) -> CommandOutcome {
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::NothingToEdit);
    }
    let target = select(model.filtered_appointments(), index)?;
    let edited = descriptor.apply(model, &target)?;
    model.set_appointment(&target, edited.clone())?;
    Ok(CommandResult::showing(
        format!("Edited Appointment: {edited}"),
        Panel::Appointments,
    ))
}

pub(super) fn delete(model: &mut Model, index: Index) -> CommandOutcome {
    let target = select(model.filtered_appointments(), index)?;
    model.delete_appointment(&target)?;
    Ok(CommandResult::showing(
        format!("Deleted Appointment: {target}"),
        Panel::Appointments,
    ))
}

/// Marks the appointment done and records the revenue it earned.
pub(super) fn done(model: &mut Model, index: Index) -> CommandOutcome {
    let target = select(model.filtered_appointments(), index)?;
    if target.is_done {
        return Err(CommandError::Invalid(
            "This appointment is already marked as done".to_string(),
        ));
    }
    model.set_appointment(&target, target.with_done(true))?;
    let revenue = target.to_revenue();
    model.add_revenue(revenue);
    Ok(CommandResult::showing(
        format!("Appointment marked as done: {target}"),
        Panel::Appointments,
    ))
}

/// Reverts `done`: the appointment is marked not done and one revenue entry
/// equal to the one it produced is removed, if it still exists.
pub(super) fn undone(model: &mut Model, index: Index) -> CommandOutcome {
    let target = select(model.filtered_appointments(), index)?;
    if !target.is_done {
        return Err(CommandError::Invalid(
            "This appointment is not marked as done".to_string(),
        ));
    }
    let revenue = target.to_revenue();
    let had_revenue = model.has_revenue(&revenue);
    model.set_appointment(&target, target.with_done(false))?;
    if had_revenue {
        model.delete_revenue(&revenue)?;
    }
    Ok(CommandResult::showing(
        format!("Appointment marked as not done: {target}"),
        Panel::Appointments,
    ))
}

pub(super) fn find(model: &mut Model, date: Date) -> CommandResult {
    model.update_appointment_filter(move |appointment| appointment.date == date);
    CommandResult::showing(
        listed(model.filtered_appointments().len(), "appointment"),
        Panel::Appointments,
    )
}

pub(super) fn list(model: &mut Model) -> CommandResult {
    model.update_appointment_filter(|_| true);
    CommandResult::showing("Listed all appointments", Panel::Appointments)
}

pub(super) fn clear(model: &mut Model) -> CommandResult {
    model.set_appointment_tracker(AppointmentTracker::new());
    CommandResult::showing("Appointment list has been cleared!", Panel::Appointments)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::command::Command;
    use crate::core::error::ModelError;
    use crate::core::history::HistoryManager;
    use crate::core::sample;

    fn setup() -> (Model, HistoryManager) {
        let model = Model::from_state(sample::sample_state().unwrap()).unwrap();
        let history = HistoryManager::new(&model);
        (model, history)
    }

    fn first() -> Index {
        Index::from_one_based(1).unwrap()
    }

    fn booking(phone: &str, code: &str) -> NewAppointment {
        NewAppointment {
            date: "28-10-2020".parse().unwrap(),
            time: "1300".parse().unwrap(),
            phone: phone.parse().unwrap(),
            code: code.parse().unwrap(),
        }
    }

    fn run(command: Command, model: &mut Model, history: &mut HistoryManager) -> CommandOutcome {
        let result = command.execute(model, history);
        if result.is_ok() {
            history.record_if_state_changing(model, &command);
        }
        result
    }

    #[test]
    fn test_add_with_unknown_references_fails() {
        let (mut model, mut history) = setup();
        let err = run(Command::AddAppointment(booking("12345678", "SC000")), &mut model, &mut history)
            .unwrap_err();
        assert_eq!(err.to_string(), "No client with phone number 12345678 exists");

        let err = run(Command::AddAppointment(booking("87438807", "SC999")), &mut model, &mut history)
            .unwrap_err();
        assert!(matches!(err, CommandError::UnknownService(_)));
        assert!(model.appointment_tracker().is_empty());
    }

    #[test]
    fn test_clashing_booking_is_duplicate() {
        let (mut model, mut history) = setup();
        run(Command::AddAppointment(booking("87438807", "SC000")), &mut model, &mut history).unwrap();
        let err = run(Command::AddAppointment(booking("87438807", "SC001")), &mut model, &mut history)
            .unwrap_err();
        assert!(matches!(err, CommandError::Model(ModelError::Duplicate("appointment"))));
    }

    #[test]
    fn test_done_adds_revenue_and_undone_removes_it() {
        let (mut model, mut history) = setup();
        run(Command::AddAppointment(booking("87438807", "SC007")), &mut model, &mut history).unwrap();
        let revenues = model.revenue_tracker().len();

        run(Command::DoneAppointment(first()), &mut model, &mut history).unwrap();
        assert!(model.filtered_appointments()[0].is_done);
        assert_eq!(model.revenue_tracker().len(), revenues + 1);

        let err = run(Command::DoneAppointment(first()), &mut model, &mut history).unwrap_err();
        assert!(matches!(err, CommandError::Invalid(_)));

        run(Command::UndoneAppointment(first()), &mut model, &mut history).unwrap();
        assert!(!model.filtered_appointments()[0].is_done);
        assert_eq!(model.revenue_tracker().len(), revenues);
    }

    #[test]
    fn test_undone_after_revenue_cleared() {
        let (mut model, mut history) = setup();
        run(Command::AddAppointment(booking("87438807", "SC007")), &mut model, &mut history).unwrap();
        run(Command::DoneAppointment(first()), &mut model, &mut history).unwrap();
        run(Command::ClearRevenue, &mut model, &mut history).unwrap();

        run(Command::UndoneAppointment(first()), &mut model, &mut history).unwrap();
        assert!(!model.filtered_appointments()[0].is_done);
        assert!(model.revenue_tracker().is_empty());
    }

    #[test]
    fn test_edit_onto_existing_slot_is_duplicate() {
        let (mut model, mut history) = setup();
        run(Command::AddAppointment(booking("87438807", "SC000")), &mut model, &mut history).unwrap();
        run(Command::AddAppointment(booking("99272758", "SC001")), &mut model, &mut history).unwrap();
        let before = model.deep_copy();

        let descriptor = EditAppointmentDescriptor {
            phone: Some("87438807".parse().unwrap()),
            ..Default::default()
        };
        let second = Index::from_one_based(2).unwrap();
        let err = run(Command::EditAppointment(second, descriptor), &mut model, &mut history)
            .unwrap_err();
        assert!(matches!(err, CommandError::Model(ModelError::Duplicate("appointment"))));
        assert_eq!(model, before);
    }

    #[test]
    fn test_undo_reverts_done() {
        let (mut model, mut history) = setup();
        run(Command::AddAppointment(booking("87438807", "SC007")), &mut model, &mut history).unwrap();
        let before_done = model.deep_copy();

        run(Command::DoneAppointment(first()), &mut model, &mut history).unwrap();
        run(Command::Undo, &mut model, &mut history).unwrap();
        assert_eq!(model, before_done);
    }

    #[test]
    fn test_edit_looks_up_new_service() {
        let (mut model, mut history) = setup();
        run(Command::AddAppointment(booking("87438807", "SC000")), &mut model, &mut history).unwrap();
        let descriptor = EditAppointmentDescriptor {
            code: Some("SC005".parse().unwrap()),
            ..Default::default()
        };
        run(Command::EditAppointment(first(), descriptor), &mut model, &mut history).unwrap();
        let edited = model.filtered_appointments()[0];
        assert_eq!(edited.service.title.as_str(), "Manicure");
        assert_eq!(edited.client.name.as_str(), "Alex Yeoh");
    }

    #[test]
    fn test_find_by_date() {
        let (mut model, mut history) = setup();
        run(Command::AddAppointment(booking("87438807", "SC000")), &mut model, &mut history).unwrap();
        let result = run(
            Command::FindAppointment("29-10-2020".parse().unwrap()),
            &mut model,
            &mut history,
        )
        .unwrap();
        assert_eq!(result.feedback, "0 appointments listed!");
    }
}
