//! The aggregate of all trackers and the unit that history snapshots.
use crate::core::entity::{Appointment, Client, Expense, Revenue, Service};
use crate::core::error::ModelResult;
use crate::core::state::TrackerState;
use crate::core::tracker::{
    AppointmentTracker, ClientTracker, ExpenseTracker, RevenueTracker, ServiceTracker,
};
use crate::core::types::{Phone, ServiceCode};
use std::fmt::{Debug, Formatter};
use std::rc::Rc;

/// Filter applied to the displayed list of one entity type.
pub type Predicate<T> = Rc<dyn Fn(&T) -> bool>;

fn show_all<T>() -> Predicate<T> {
    Rc::new(|_: &T| true)
}

/// Owns one tracker per entity type plus the filter of each displayed list.
///
/// Filtered views are evaluated on every call, so they always reflect the
/// current tracker contents.
pub struct Model {
    client_tracker: ClientTracker,
    service_tracker: ServiceTracker,
    expense_tracker: ExpenseTracker,
    revenue_tracker: RevenueTracker,
    appointment_tracker: AppointmentTracker,
    client_filter: Predicate<Client>,
    service_filter: Predicate<Service>,
    expense_filter: Predicate<Expense>,
    revenue_filter: Predicate<Revenue>,
    appointment_filter: Predicate<Appointment>,
}

impl Default for Model {
    fn default() -> Self {
        Self::with_trackers(
            ClientTracker::new(),
            ServiceTracker::new(),
            ExpenseTracker::new(),
            RevenueTracker::new(),
            AppointmentTracker::new(),
        )
    }
}

impl Model {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_trackers(
        client_tracker: ClientTracker,
        service_tracker: ServiceTracker,
        expense_tracker: ExpenseTracker,
        revenue_tracker: RevenueTracker,
        appointment_tracker: AppointmentTracker,
    ) -> Self {
        Self {
            client_tracker,
            service_tracker,
            expense_tracker,
            revenue_tracker,
            appointment_tracker,
            client_filter: show_all(),
            service_filter: show_all(),
            expense_filter: show_all(),
            revenue_filter: show_all(),
            appointment_filter: show_all(),
        }
    }

    /// Rebuilds a model from persisted state, enforcing every identity rule.
    pub fn from_state(state: TrackerState) -> ModelResult<Self> {
        Ok(Self::with_trackers(
            ClientTracker::from_clients(state.clients)?,
            ServiceTracker::from_services(state.services)?,
            ExpenseTracker::from_expenses(state.expenses),
            RevenueTracker::from_revenues(state.revenues),
            AppointmentTracker::from_appointments(state.appointments)?,
        ))
    }

    pub fn to_state(&self) -> TrackerState {
        TrackerState {
            clients: self.client_tracker.client_list().to_vec(),
            services: self.service_tracker.service_list().to_vec(),
            expenses: self.expense_tracker.expense_list().to_vec(),
            revenues: self.revenue_tracker.revenue_list().to_vec(),
            appointments: self.appointment_tracker.appointment_list().to_vec(),
        }
    }

    /// A model whose trackers share nothing with this one. Filters start over
    /// showing everything.
    pub fn deep_copy(&self) -> Self {
        Self::with_trackers(
            self.client_tracker.deep_copy(),
            self.service_tracker.deep_copy(),
            self.expense_tracker.deep_copy(),
            self.revenue_tracker.deep_copy(),
            self.appointment_tracker.deep_copy(),
        )
    }

    //// client operations

    pub fn client_tracker(&self) -> &ClientTracker {
        &self.client_tracker
    }

    pub fn set_client_tracker(&mut self, tracker: ClientTracker) {
        self.client_tracker = tracker;
        self.client_filter = show_all();
    }

    pub fn add_client(&mut self, client: Client) -> ModelResult<()> {
        self.client_tracker.add_client(client)?;
        self.client_filter = show_all();
        Ok(())
    }

    pub fn set_client(&mut self, target: &Client, edited: Client) -> ModelResult<()> {
        self.client_tracker.set_client(target, edited)
    }

    pub fn delete_client(&mut self, client: &Client) -> ModelResult<()> {
        self.client_tracker.remove_client(client)
    }

    pub fn client_by_phone(&self, phone: &Phone) -> Option<&Client> {
        self.client_tracker.client_by_phone(phone)
    }

    pub fn filtered_clients(&self) -> Vec<&Client> {
        self.client_tracker
            .filter_clients_by(self.client_filter.as_ref())
            .collect()
    }

    pub fn update_client_filter(&mut self, predicate: impl Fn(&Client) -> bool + 'static) {
        self.client_filter = Rc::new(predicate);
    }

    //// service operations

    pub fn service_tracker(&self) -> &ServiceTracker {
        &self.service_tracker
    }

    pub fn set_service_tracker(&mut self, tracker: ServiceTracker) {
        self.service_tracker = tracker;
        self.service_filter = show_all();
    }

    pub fn add_service(&mut self, service: Service) -> ModelResult<()> {
        self.service_tracker.add_service(service)?;
        self.service_filter = show_all();
        Ok(())
    }

    pub fn set_service(&mut self, target: &Service, edited: Service) -> ModelResult<()> {
        self.service_tracker.set_service(target, edited)
    }

    pub fn delete_service(&mut self, service: &Service) -> ModelResult<()> {
        self.service_tracker.remove_service(service)
    }

    pub fn service_by_code(&self, code: &ServiceCode) -> Option<&Service> {
        self.service_tracker.service_by_code(code)
    }

    pub fn next_service_code(&self) -> Option<ServiceCode> {
        self.service_tracker.next_service_code()
    }

    pub fn filtered_services(&self) -> Vec<&Service> {
        self.service_tracker
            .filter_services_by(self.service_filter.as_ref())
            .collect()
    }

    pub fn update_service_filter(&mut self, predicate: impl Fn(&Service) -> bool + 'static) {
        self.service_filter = Rc::new(predicate);
    }

    //// expense operations

    pub fn expense_tracker(&self) -> &ExpenseTracker {
        &self.expense_tracker
    }

    pub fn set_expense_tracker(&mut self, tracker: ExpenseTracker) {
        self.expense_tracker = tracker;
        self.expense_filter = show_all();
    }

    pub fn add_expense(&mut self, expense: Expense) {
        self.expense_tracker.add_expense(expense);
        self.expense_filter = show_all();
    }

    pub fn set_expense(&mut self, target: &Expense, edited: Expense) -> ModelResult<()> {
        self.expense_tracker.set_expense(target, edited)
    }

    pub fn delete_expense(&mut self, expense: &Expense) -> ModelResult<()> {
        self.expense_tracker.remove_expense(expense)
    }

    pub fn filter_expenses(&self, predicate: impl Fn(&Expense) -> bool) -> Vec<&Expense> {
        self.expense_tracker.filter_expenses_by(predicate).collect()
    }

    pub fn filtered_expenses(&self) -> Vec<&Expense> {
        self.expense_tracker
            .filter_expenses_by(self.expense_filter.as_ref())
            .collect()
    }

    pub fn update_expense_filter(&mut self, predicate: impl Fn(&Expense) -> bool + 'static) {
        self.expense_filter = Rc::new(predicate);
    }

    //// revenue operations

    pub fn revenue_tracker(&self) -> &RevenueTracker {
        &self.revenue_tracker
    }

    pub fn set_revenue_tracker(&mut self, tracker: RevenueTracker) {
        self.revenue_tracker = tracker;
        self.revenue_filter = show_all();
    }

    pub fn has_revenue(&self, revenue: &Revenue) -> bool {
        self.revenue_tracker.has_revenue(revenue)
    }

    pub fn add_revenue(&mut self, revenue: Revenue) {
        self.revenue_tracker.add_revenue(revenue);
        self.revenue_filter = show_all();
    }

    pub fn delete_revenue(&mut self, revenue: &Revenue) -> ModelResult<()> {
        self.revenue_tracker.remove_revenue(revenue)
    }

    pub fn filter_revenues(&self, predicate: impl Fn(&Revenue) -> bool) -> Vec<&Revenue> {
        self.revenue_tracker.filter_revenues_by(predicate).collect()
    }

    pub fn filtered_revenues(&self) -> Vec<&Revenue> {
        self.revenue_tracker
            .filter_revenues_by(self.revenue_filter.as_ref())
            .collect()
    }

    pub fn update_revenue_filter(&mut self, predicate: impl Fn(&Revenue) -> bool + 'static) {
        self.revenue_filter = Rc::new(predicate);
    }

    //// appointment operations

    pub fn appointment_tracker(&self) -> &AppointmentTracker {
        &self.appointment_tracker
    }

    pub fn set_appointment_tracker(&mut self, tracker: AppointmentTracker) {
        self.appointment_tracker = tracker;
        self.appointment_filter = show_all();
    }

    pub fn add_appointment(&mut self, appointment: Appointment) -> ModelResult<()> {
        self.appointment_tracker.add_appointment(appointment)?;
        self.appointment_filter = show_all();
        Ok(())
    }

    pub fn set_appointment(&mut self, target: &Appointment, edited: Appointment) -> ModelResult<()> {
        self.appointment_tracker.set_appointment(target, edited)
    }

    pub fn delete_appointment(&mut self, appointment: &Appointment) -> ModelResult<()> {
        self.appointment_tracker.remove_appointment(appointment)
    }

    pub fn filtered_appointments(&self) -> Vec<&Appointment> {
        self.appointment_tracker
            .filter_appointments_by(self.appointment_filter.as_ref())
            .collect()
    }

    pub fn update_appointment_filter(
        &mut self,
        predicate: impl Fn(&Appointment) -> bool + 'static,
    ) {
        self.appointment_filter = Rc::new(predicate);
    }
}

/// Two models are equal when their tracker contents are; filters are ignored.
impl PartialEq for Model {
    fn eq(&self, other: &Self) -> bool {
        self.client_tracker == other.client_tracker
            && self.service_tracker == other.service_tracker
            && self.expense_tracker == other.expense_tracker
            && self.revenue_tracker == other.revenue_tracker
            && self.appointment_tracker == other.appointment_tracker
    }
}

impl Debug for Model {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Model")
            .field("clients", &self.client_tracker.len())
            .field("services", &self.service_tracker.len())
            .field("expenses", &self.expense_tracker.len())
            .field("revenues", &self.revenue_tracker.len())
            .field("appointments", &self.appointment_tracker.len())
            .finish()
    }
}
