use crate::core::entity::{Appointment, Client, Expense, Revenue, Service};
use serde::{Deserialize, Serialize};

/// Plain, serializable contents of every tracker. Carries no behavior; the
/// model rebuilds its invariants when loading one.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct TrackerState {
    #[serde(default)]
    pub clients: Vec<Client>,
    #[serde(default)]
    pub services: Vec<Service>,
    #[serde(default)]
    pub expenses: Vec<Expense>,
    #[serde(default)]
    pub revenues: Vec<Revenue>,
    #[serde(default)]
    pub appointments: Vec<Appointment>,
}
