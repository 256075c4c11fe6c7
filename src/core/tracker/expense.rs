use crate::core::collection::{NonUniqueList, ReadOnlyView};
use crate::core::entity::Expense;
use crate::core::error::ModelResult;
use tracing::debug;

/// Owns every expense. Duplicate entries are permitted.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExpenseTracker {
    expenses: NonUniqueList<Expense>,
}

impl ExpenseTracker {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_expenses(expenses: Vec<Expense>) -> Self {
        let mut tracker = Self::new();
        tracker.reset_data(expenses);
        tracker
    }

    pub fn reset_data(&mut self, expenses: Vec<Expense>) {
        self.expenses.replace_all(expenses);
    }

    pub fn add_expense(&mut self, expense: Expense) {
        debug!(date = %expense.date, amount = %expense.amount, "Adding expense");
        self.expenses.add(expense);
    }

    pub fn set_expense(&mut self, target: &Expense, edited: Expense) -> ModelResult<()> {
        debug!(date = %target.date, "Editing expense");
        self.expenses.set_item(target, edited)
    }

    pub fn remove_expense(&mut self, expense: &Expense) -> ModelResult<()> {
        debug!(date = %expense.date, "Removing expense");
        self.expenses.remove(expense)
    }

    pub fn expense_list(&self) -> ReadOnlyView<'_, Expense> {
        self.expenses.as_read_only_view()
    }

    pub fn filter_expenses_by<P>(&self, predicate: P) -> impl Iterator<Item = &Expense>
    where
        P: Fn(&Expense) -> bool,
    {
        self.expenses.iter().filter(move |&expense| predicate(expense))
    }

    pub fn deep_copy(&self) -> Self {
        Self {
            expenses: self.expenses.deep_copy(),
        }
    }

    pub fn len(&self) -> usize {
        self.expenses.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expenses.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::types::{Description, Tag};

    fn expense(description: &str, date: &str) -> Expense {
        Expense {
            description: Description::new(description).unwrap(),
            is_fixed: false,
            amount: "12.50".parse().unwrap(),
            date: date.parse().unwrap(),
            tag: Tag::new("supplies").unwrap(),
        }
    }

    #[test]
    fn test_duplicates_allowed_and_removed_one_at_a_time() {
        let mut tracker = ExpenseTracker::new();
        let nail_polish = expense("Nail polish", "01-10-2020");
        tracker.add_expense(nail_polish.clone());
        tracker.add_expense(nail_polish.clone());
        assert_eq!(tracker.len(), 2);

        tracker.remove_expense(&nail_polish).unwrap();
        assert_eq!(tracker.len(), 1);
        tracker.remove_expense(&nail_polish).unwrap();
        assert!(tracker.remove_expense(&nail_polish).is_err());
    }

    #[test]
    fn test_filter_by_month() {
        let tracker = ExpenseTracker::from_expenses(vec![
            expense("Nail polish", "01-10-2020"),
            expense("Rent", "01-11-2020"),
            expense("Cotton pads", "15-10-2020"),
        ]);
        let october: Vec<_> = tracker
            .filter_expenses_by(|e| e.date.month() == 10)
            .map(|e| e.description.as_str())
            .collect();
        assert_eq!(october, vec!["Nail polish", "Cotton pads"]);
    }
}
