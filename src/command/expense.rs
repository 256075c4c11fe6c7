use super::{CommandError, CommandOutcome, CommandResult, Panel, listed, select};
use crate::core::entity::Expense;
use crate::core::model::Model;
use crate::core::report;
use crate::core::tracker::ExpenseTracker;
use crate::core::types::{Amount, Date, Description, Index, Tag};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct EditExpenseDescriptor {
    pub description: Option<Description>,
    pub is_fixed: Option<bool>,
    pub amount: Option<Amount>,
    pub date: Option<Date>,
    pub tag: Option<Tag>,
}

impl EditExpenseDescriptor {
    pub fn is_any_field_edited(&self) -> bool {
        self.description.is_some()
            || self.is_fixed.is_some()
            || self.amount.is_some()
            || self.date.is_some()
            || self.tag.is_some()
    }

    pub fn apply(&self, expense: &Expense) -> Expense {
        Expense {
            description: self
                .description
                .clone()
                .unwrap_or_else(|| expense.description.clone()),
            is_fixed: self.is_fixed.unwrap_or(expense.is_fixed),
            amount: self.amount.unwrap_or(expense.amount),
            date: self.date.unwrap_or(expense.date),
            tag: self.tag.clone().unwrap_or_else(|| expense.tag.clone()),
        }
    }
}

pub(super) fn add(model: &mut Model, expense: &Expense) -> CommandResult {
    model.add_expense(expense.clone());
    CommandResult::showing(format!("New expense added: {expense}"), Panel::Expenses)
}

pub(super) fn edit(model: &mut Model, index: Index, descriptor: &EditExpenseDescriptor) -> CommandOutcome {
    if !descriptor.is_any_field_edited() {
        return Err(CommandError::NothingToEdit);
    }
    let target = select(model.filtered_expenses(), index)?;
    let edited = descriptor.apply(&target);
    model.set_expense(&target, edited.clone())?;
    Ok(CommandResult::showing(
        format!("Edited Expense: {edited}"),
        Panel::Expenses,
    ))
}

pub(super) fn delete(model: &mut Model, index: Index) -> CommandOutcome {
    let target = select(model.filtered_expenses(), index)?;
    model.delete_expense(&target)?;
    Ok(CommandResult::showing(
        format!("Deleted Expense: {target}"),
        Panel::Expenses,
    ))
}

pub(super) fn find(model: &mut Model, date: Date) -> CommandResult {
    model.update_expense_filter(move |expense| expense.date == date);
    CommandResult::showing(listed(model.filtered_expenses().len(), "expense"), Panel::Expenses)
}

pub(super) fn list(model: &mut Model) -> CommandResult {
    model.update_expense_filter(|_| true);
    CommandResult::showing("Listed all expenses", Panel::Expenses)
}

pub(super) fn clear(model: &mut Model) -> CommandResult {
    model.set_expense_tracker(ExpenseTracker::new());
    CommandResult::showing("Expense list has been cleared!", Panel::Expenses)
}

pub(super) fn breakdown(model: &Model, month: u32, year: i32) -> CommandResult {
    let breakdown = report::expense_breakdown(model.expense_tracker().expense_list(), month, year);
    let feedback = if breakdown.is_empty() {
        format!("No expenses recorded for {month:02}-{year}")
    } else {
        format!("Expense breakdown for {month:02}-{year}, total {:.2}", breakdown.total)
    };
    CommandResult::showing(feedback, Panel::Breakdown(breakdown))
}
