use crate::core::collection::{Record, SameIdentityAs};
use crate::core::types::{Amount, Duration, ServiceCode, Title};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Something the business sells, identified by its generated service code.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Service {
    pub code: ServiceCode,
    pub title: Title,
    pub duration: Duration,
    pub price: Amount,
}

impl Service {
    pub fn new(code: ServiceCode, title: Title, duration: Duration, price: Amount) -> Self {
        Self {
            code,
            title,
            duration,
            price,
        }
    }
}

impl Record for Service {
    const KIND: &'static str = "service";
}

impl SameIdentityAs for Service {
    fn same_identity_as(&self, other: &Self) -> bool {
        self.code == other.code
    }
}

impl Display for Service {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Service Code: {} Duration: {} hrs Price: {}",
            self.title, self.code, self.duration, self.price
        )
    }
}
