use crate::core::collection::Record;
use crate::core::entity::Service;
use crate::core::types::{Amount, Date};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Income earned from a service on a date.
///
/// The service is a snapshot taken when the entry was created. Two entries for
/// the same service on the same day are legitimate.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Revenue {
    pub service: Service,
    pub value: Amount,
    pub date: Date,
}

impl Revenue {
    /// Creates an entry worth the service's current price.
    pub fn from_service(service: &Service, date: Date) -> Self {
        Self {
            service: service.clone(),
            value: service.price,
            date,
        }
    }
}

impl Record for Revenue {
    const KIND: &'static str = "revenue";
}

impl Display for Revenue {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} ({}) Value: {} Date: {}",
            self.service.title, self.service.code, self.value, self.date
        )
    }
}
