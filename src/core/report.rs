//! Monthly breakdowns of revenue and expenses.
use crate::core::entity::{Expense, Revenue};
use crate::core::types::Date;
use rust_decimal::Decimal;
use std::collections::BTreeMap;
use tracing::debug;

/// One group of a breakdown and its share of the total.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreakdownEntry {
    pub label: String,
    pub amount: Decimal,
    /// Percentage of the breakdown total, rounded to two places.
    pub weight: Decimal,
}

/// Amounts of one month grouped by label, sorted by label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Breakdown {
    pub month: u32,
    pub year: i32,
    pub entries: Vec<BreakdownEntry>,
    pub total: Decimal,
}

impl Breakdown {
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn in_month(date: &Date, month: u32, year: i32) -> bool {
    date.month() == month && date.year() == year
}

fn group<'a>(
    month: u32,
    year: i32,
    amounts: impl Iterator<Item = (&'a str, Decimal)>,
) -> Breakdown {
    let mut grouped: BTreeMap<&str, Decimal> = BTreeMap::new();
    for (label, amount) in amounts {
        *grouped.entry(label).or_default() += amount;
    }
    let total: Decimal = grouped.values().sum();

    let entries = grouped
        .into_iter()
        .map(|(label, amount)| {
            let weight = if total.is_zero() {
                Decimal::ZERO
            } else {
                (amount / total * Decimal::ONE_HUNDRED).round_dp(2)
            };
            BreakdownEntry {
                label: label.to_string(),
                amount,
                weight,
            }
        })
        .collect::<Vec<_>>();

    debug!(month, year, groups = entries.len(), %total, "Computed breakdown");
    Breakdown {
        month,
        year,
        entries,
        total,
    }
}

/// Groups the revenue earned in `month`/`year` by service title.
pub fn revenue_breakdown<'a>(
    revenues: impl IntoIterator<Item = &'a Revenue>,
    month: u32,
    year: i32,
) -> Breakdown {
    group(
        month,
        year,
        revenues
            .into_iter()
            .filter(|revenue| in_month(&revenue.date, month, year))
            .map(|revenue| (revenue.service.title.as_str(), revenue.value.value())),
    )
}

/// Groups the expenses of `month`/`year` by tag.
pub fn expense_breakdown<'a>(
    expenses: impl IntoIterator<Item = &'a Expense>,
    month: u32,
    year: i32,
) -> Breakdown {
    group(
        month,
        year,
        expenses
            .into_iter()
            .filter(|expense| in_month(&expense.date, month, year))
            .map(|expense| (expense.tag.as_str(), expense.amount.value())),
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::sample;
    use crate::core::types::Amount;
    use std::str::FromStr;

    fn dec(value: &str) -> Decimal {
        Decimal::from_str(value).unwrap()
    }

    #[test]
    fn test_revenue_breakdown_groups_by_title() {
        let state = sample::sample_state().unwrap();
        let breakdown = revenue_breakdown(&state.revenues, 10, 2020);

        assert_eq!(breakdown.entries.len(), 5);
        let lash = &breakdown.entries[1];
        assert_eq!(lash.label, "Lash Lift");
        assert_eq!(lash.amount, dec("114.0"));
        // 38 * 3 + 28.9 + 18.5 + 88.9 + 21.5
        assert_eq!(breakdown.total, dec("271.8"));
        assert_eq!(lash.weight, dec("41.94"));
    }

    #[test]
    fn test_breakdown_of_other_month_is_empty() {
        let state = sample::sample_state().unwrap();
        let breakdown = revenue_breakdown(&state.revenues, 11, 2020);
        assert!(breakdown.is_empty());
        assert_eq!(breakdown.total, Decimal::ZERO);
    }

    #[test]
    fn test_expense_breakdown_groups_by_tag() {
        let expense = |tag: &str, amount: &str, date: &str| Expense {
            description: "Stock".parse().unwrap(),
            is_fixed: false,
            amount: amount.parse().unwrap(),
            date: date.parse().unwrap(),
            tag: tag.parse().unwrap(),
        };
        let expenses = vec![
            expense("supplies", "30", "01-03-2021"),
            expense("rent", "90", "02-03-2021"),
            expense("supplies", "30", "05-03-2021"),
            expense("rent", "90", "02-04-2021"),
        ];

        let breakdown = expense_breakdown(&expenses, 3, 2021);
        assert_eq!(breakdown.total, dec("150"));
        assert_eq!(breakdown.entries[0].label, "rent");
        assert_eq!(breakdown.entries[0].weight, dec("60"));
        assert_eq!(breakdown.entries[1].amount, dec("60"));
    }

    #[test]
    fn test_breakdown_of_largest_amounts() {
        let largest = Expense {
            description: "Renovation".parse().unwrap(),
            is_fixed: true,
            amount: Amount::MAX_UNITS.to_string().parse().unwrap(),
            date: "01-03-2021".parse().unwrap(),
            tag: "building".parse().unwrap(),
        };
        let expenses = vec![largest.clone(), largest];

        let breakdown = expense_breakdown(&expenses, 3, 2021);
        assert_eq!(breakdown.total, Decimal::from(2 * Amount::MAX_UNITS));
        assert_eq!(breakdown.entries[0].weight, dec("100"));
    }
}
