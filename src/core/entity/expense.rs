use crate::core::collection::Record;
use crate::core::types::{Amount, Date, Description, Tag};
use serde::{Deserialize, Serialize};
use std::fmt::{Display, Formatter};

/// Money spent by the business. Identical entries are allowed.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Expense {
    pub description: Description,
    pub is_fixed: bool,
    pub amount: Amount,
    pub date: Date,
    pub tag: Tag,
}

impl Record for Expense {
    const KIND: &'static str = "expense";
}

impl Display for Expense {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} Fixed: {} Amount: {} Date: {} Tag: {}",
            self.description,
            if self.is_fixed { "yes" } else { "no" },
            self.amount,
            self.date,
            self.tag
        )
    }
}
