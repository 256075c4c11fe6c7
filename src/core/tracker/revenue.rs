use crate::core::collection::{NonUniqueList, ReadOnlyView};
use crate::core::entity::Revenue;
use crate::core::error::ModelResult;
use tracing::debug;

/// Owns every revenue entry. Duplicate entries are permitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RevenueTracker {
    revenues: NonUniqueList<Revenue>,
}

impl RevenueTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_revenues(revenues: Vec<Revenue>) -> Self {
        let mut tracker = Self::new();
        tracker.reset_data(revenues);
        tracker
    }

    pub fn reset_data(&mut self, revenues: Vec<Revenue>) {
        self.revenues.replace_all(revenues);
    }

    pub fn has_revenue(&self, revenue: &Revenue) -> bool {
        self.revenues.contains(revenue)
    }

    pub fn add_revenue(&mut self, revenue: Revenue) {
        debug!(code = %revenue.service.code, date = %revenue.date, "Adding revenue");
        self.revenues.add(revenue);
    }

    pub fn remove_revenue(&mut self, revenue: &Revenue) -> ModelResult<()> {
        debug!(code = %revenue.service.code, date = %revenue.date, "Removing revenue");
        self.revenues.remove(revenue)
    }

    pub fn revenue_list(&self) -> ReadOnlyView<'_, Revenue> {
        self.revenues.as_read_only_view()
    }

    pub fn filter_revenues_by<P>(&self, predicate: P) -> impl Iterator<Item = &Revenue>
    where
        P: Fn(&Revenue) -> bool,
    {
        self.revenues.iter().filter(move |&revenue| predicate(revenue))
    }

    pub fn deep_copy(&self) -> Self {
        Self {
            revenues: self.revenues.deep_copy(),
        }
    }

    pub fn len(&self) -> usize {
        self.revenues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.revenues.is_empty()
    }
}
