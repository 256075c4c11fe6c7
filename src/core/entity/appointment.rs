use crate::core::collection::{Record, SameIdentityAs};
use crate::core::entity::{Client, Revenue, Service};
use crate::core::types::{Date, Time};
use chrono::NaiveTime;
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// A booking of a service for a client.
///
/// Client and service are copies taken at booking time. Two appointments are
/// the same booking when they share date, start time and client phone.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Appointment {
    pub date: Date,
    pub time: Time,
    pub client: Client,
    pub service: Service,
    #[serde(default)]
    pub is_done: bool,
}

impl Appointment {
    pub fn new(date: Date, time: Time, client: Client, service: Service) -> Self {
        Self {
            date,
            time,
            client,
            service,
            is_done: false,
        }
    }

    /// Start time plus the service duration, wrapping past midnight.
    pub fn end_time(&self) -> NaiveTime {
        let minutes = (self.service.duration.hours() * 60.0) as i64;
        let (end, _) = self
            .time
            .value()
            .overflowing_add_signed(chrono::Duration::minutes(minutes));
        end
    }

    pub fn with_done(&self, is_done: bool) -> Self {
        Self {
            is_done,
            ..self.clone()
        }
    }

    /// The revenue entry this appointment earns once done.
    pub fn to_revenue(&self) -> Revenue {
        Revenue::from_service(&self.service, self.date)
    }
}

impl Record for Appointment {
    const KIND: &'static str = "appointment";
}

impl SameIdentityAs for Appointment {
    fn same_identity_as(&self, other: &Self) -> bool {
        self.date == other.date
            && self.time == other.time
            && self.client.phone == other.client.phone
    }
}

impl Display for Appointment {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} {}-{} Client: {} ({}) Service: {} ({}) Status: {}",
            self.date,
            self.time,
            self.end_time().format("%H%M"),
            self.client.name,
            self.client.phone,
            self.service.title,
            self.service.code,
            if self.is_done { "done" } else { "not done" }
        )
    }
}
