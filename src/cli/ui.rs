use crate::command::Panel;
use crate::core::entity::{Appointment, Client, Expense, Revenue, Service};
use crate::core::model::Model;
use crate::core::report::Breakdown;
use crate::core::types::Amount;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use console::style;
use rust_decimal::Decimal;

/// Defines different styles for text elements.
pub enum StyleType {
    Title,
    TotalLabel,
    TotalValue,
    Error,
    Subtle,
}

/// Applies a consistent style to a string.
pub fn style_text(text: &str, style_type: StyleType) -> String {
    let styled = match style_type {
        StyleType::Title => style(text).bold().underlined(),
        StyleType::TotalLabel => style(text).bold(),
        StyleType::TotalValue => style(text).green().bold(),
        StyleType::Error => style(text).red(),
        StyleType::Subtle => style(text).dim(),
    };
    styled.to_string()
}

/// Creates a new `comfy_table::Table` with standard styling.
pub fn new_styled_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

/// Creates a styled header cell for a table.
pub fn header_cell(text: &str) -> Cell {
    Cell::new(text)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn table_with_headers(headers: &[&str]) -> Table {
    let mut table = new_styled_table();
    let mut header = vec![header_cell("#")];
    header.extend(headers.iter().map(|h| header_cell(h)));
    table.set_header(header);
    table
}

fn index_cell(position: usize) -> Cell {
    Cell::new(position + 1).fg(Color::DarkGrey)
}

fn money_cell(currency: &str, amount: Decimal) -> Cell {
    Cell::new(format!("{currency}{amount:.2}")).set_alignment(CellAlignment::Right)
}

fn amount_cell(currency: &str, amount: &Amount) -> Cell {
    money_cell(currency, amount.value())
}

/// Formats a cell with bold and green text
pub fn format_percentage_cell(value: Decimal) -> Cell {
    Cell::new(format!("{value:.2}%"))
        .add_attribute(Attribute::Bold)
        .fg(Color::Green)
        .set_alignment(CellAlignment::Right)
}

fn status_cell(is_done: bool) -> Cell {
    if is_done {
        Cell::new("done").fg(Color::Green)
    } else {
        Cell::new("pending").fg(Color::Yellow)
    }
}

pub fn client_table(clients: &[&Client]) -> Table {
    let mut table = table_with_headers(&["Name", "Phone", "Email", "Tags"]);
    for (position, client) in clients.iter().enumerate() {
        let tags = client
            .tags
            .iter()
            .map(|tag| tag.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            index_cell(position),
            Cell::new(&client.name),
            Cell::new(&client.phone),
            Cell::new(&client.email),
            Cell::new(tags),
        ]);
    }
    table
}

pub fn service_table(services: &[&Service], currency: &str) -> Table {
    let mut table = table_with_headers(&["Code", "Title", "Duration (h)", "Price"]);
    for (position, service) in services.iter().enumerate() {
        table.add_row(vec![
            index_cell(position),
            Cell::new(&service.code),
            Cell::new(&service.title),
            Cell::new(service.duration).set_alignment(CellAlignment::Right),
            amount_cell(currency, &service.price),
        ]);
    }
    table
}

pub fn expense_table(expenses: &[&Expense], currency: &str) -> Table {
    let mut table = table_with_headers(&["Date", "Description", "Tag", "Fixed", "Amount"]);
    for (position, expense) in expenses.iter().enumerate() {
        table.add_row(vec![
            index_cell(position),
            Cell::new(expense.date),
            Cell::new(&expense.description),
            Cell::new(&expense.tag),
            Cell::new(if expense.is_fixed { "yes" } else { "no" }),
            amount_cell(currency, &expense.amount),
        ]);
    }
    table
}

pub fn revenue_table(revenues: &[&Revenue], currency: &str) -> Table {
    let mut table = table_with_headers(&["Date", "Service", "Value"]);
    for (position, revenue) in revenues.iter().enumerate() {
        table.add_row(vec![
            index_cell(position),
            Cell::new(revenue.date),
            Cell::new(format!("{} ({})", revenue.service.title, revenue.service.code)),
            amount_cell(currency, &revenue.value),
        ]);
    }
    table
}

pub fn appointment_table(appointments: &[&Appointment]) -> Table {
    let mut table = table_with_headers(&["Date", "Time", "Client", "Service", "Status"]);
    for (position, appointment) in appointments.iter().enumerate() {
        table.add_row(vec![
            index_cell(position),
            Cell::new(appointment.date),
            Cell::new(format!(
                "{}-{}",
                appointment.time,
                appointment.end_time().format("%H%M")
            )),
            Cell::new(format!("{} ({})", appointment.client.name, appointment.client.phone)),
            Cell::new(format!("{} ({})", appointment.service.title, appointment.service.code)),
            status_cell(appointment.is_done),
        ]);
    }
    table
}

pub fn breakdown_table(breakdown: &Breakdown, currency: &str) -> Table {
    let mut table = new_styled_table();
    table.set_header(vec![
        header_cell("Group"),
        header_cell("Amount"),
        header_cell("Share"),
    ]);
    for entry in &breakdown.entries {
        table.add_row(vec![
            Cell::new(&entry.label),
            money_cell(currency, entry.amount),
            format_percentage_cell(entry.weight),
        ]);
    }
    table.add_row(vec![
        Cell::new("Total").add_attribute(Attribute::Bold),
        money_cell(currency, breakdown.total).add_attribute(Attribute::Bold),
        Cell::new(""),
    ]);
    table
}

/// Renders the list a command asked to show, as currently filtered.
pub fn render_panel(model: &Model, panel: &Panel, currency: &str) -> Table {
    match panel {
        Panel::Clients => client_table(&model.filtered_clients()),
        Panel::Services => service_table(&model.filtered_services(), currency),
        Panel::Expenses => expense_table(&model.filtered_expenses(), currency),
        Panel::Revenues => revenue_table(&model.filtered_revenues(), currency),
        Panel::Appointments => appointment_table(&model.filtered_appointments()),
        Panel::Breakdown(breakdown) => breakdown_table(breakdown, currency),
    }
}
