use super::{CommandResult, Panel, listed};
use crate::core::model::Model;
use crate::core::report;
use crate::core::tracker::RevenueTracker;
use crate::core::types::Date;

pub(super) fn find(model: &mut Model, date: Date) -> CommandResult {
    model.update_revenue_filter(move |revenue| revenue.date == date);
    CommandResult::showing(listed(model.filtered_revenues().len(), "revenue"), Panel::Revenues)
}

pub(super) fn list(model: &mut Model) -> CommandResult {
    model.update_revenue_filter(|_| true);
    CommandResult::showing("Listed all revenues", Panel::Revenues)
}

pub(super) fn clear(model: &mut Model) -> CommandResult {
    model.set_revenue_tracker(RevenueTracker::new());
    CommandResult::showing("Revenue list has been cleared!", Panel::Revenues)
}

/// Revenue of one month grouped by service title.
pub(super) fn breakdown(model: &Model, month: u32, year: i32) -> CommandResult {
    let breakdown = report::revenue_breakdown(model.revenue_tracker().revenue_list(), month, year);
    let feedback = if breakdown.is_empty() {
        format!("No revenue recorded for {month:02}-{year}")
    } else {
        format!("Revenue breakdown for {month:02}-{year}, total {:.2}", breakdown.total)
    };
    CommandResult::showing(feedback, Panel::Breakdown(breakdown))
}

#[cfg(test)]
mod tests {
    use crate::command::{Command, Panel};
    use crate::core::history::HistoryManager;
    use crate::core::model::Model;
    use crate::core::sample;

    fn setup() -> (Model, HistoryManager) {
        let model = Model::from_state(sample::sample_state().unwrap()).unwrap();
        let history = HistoryManager::new(&model);
        (model, history)
    }

    #[test]
    fn test_find_by_date() {
        let (mut model, mut history) = setup();
        let result = Command::FindRevenue("22-10-2020".parse().unwrap())
            .execute(&mut model, &mut history)
            .unwrap();
        assert_eq!(result.feedback, "4 revenues listed!");
    }

    #[test]
    fn test_breakdown_for_month() {
        let (mut model, mut history) = setup();
        let result = Command::BreakdownRevenue { month: 10, year: 2020 }
            .execute(&mut model, &mut history)
            .unwrap();
        assert_eq!(result.feedback, "Revenue breakdown for 10-2020, total 271.80");
        assert!(matches!(result.panel, Some(Panel::Breakdown(b)) if b.entries.len() == 5));

        let result = Command::BreakdownRevenue { month: 1, year: 2021 }
            .execute(&mut model, &mut history)
            .unwrap();
        assert_eq!(result.feedback, "No revenue recorded for 01-2021");
    }

    #[test]
    fn test_clear() {
        let (mut model, mut history) = setup();
        Command::ClearRevenue.execute(&mut model, &mut history).unwrap();
        assert!(model.revenue_tracker().is_empty());
        assert!(model.filtered_revenues().is_empty());
    }
}
