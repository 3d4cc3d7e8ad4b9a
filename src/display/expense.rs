//! Expense display formatting
//!
//! Register-style listing of joined expenses and a detail view.

use crate::config::Settings;
use crate::models::timestamp::format_millis;
use crate::models::{Category, Expense, ExpenseWithCategory};

const NO_CATEGORY: &str = "(no category)";

/// Format an amount with the configured currency symbol
pub fn format_amount(amount: f64, settings: &Settings) -> String {
    if amount < 0.0 {
        format!("-{}{:.2}", settings.currency_symbol, -amount)
    } else {
        format!("{}{:.2}", settings.currency_symbol, amount)
    }
}

/// Format a list of joined expenses as a register
pub fn format_expense_register(expenses: &[ExpenseWithCategory], settings: &Settings) -> String {
    if expenses.is_empty() {
        return "No expenses found.\n".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "{:12} {:16} {:24} {:>12}  {}\n",
        "Date", "Category", "Description", "Amount", "ID"
    ));
    output.push_str(&"-".repeat(80));
    output.push('\n');

    let mut total = 0.0;
    for joined in expenses {
        let expense = &joined.expense;
        let category = joined
            .expense_type
            .as_ref()
            .map(|c| c.name.as_str())
            .unwrap_or(NO_CATEGORY);

        output.push_str(&format!(
            "{:12} {:16} {:24} {:>12}  {}\n",
            format_millis(expense.date, &settings.date_format),
            truncate(category, 16),
            truncate(&expense.description, 24),
            format_amount(expense.amount, settings),
            expense.id.short()
        ));
        total += expense.amount;
    }

    output.push_str(&"-".repeat(80));
    output.push('\n');
    output.push_str(&format!(
        "{:54} {:>12}\n",
        format!("{} expense(s)", expenses.len()),
        format_amount(total, settings)
    ));

    output
}

/// Format expense details
pub fn format_expense_details(
    expense: &Expense,
    category: Option<&Category>,
    settings: &Settings,
) -> String {
    let mut output = String::new();

    output.push_str(&format!("Expense:     {}\n", expense.id));
    output.push_str(&format!(
        "Date:        {}\n",
        format_millis(expense.date, &settings.date_format)
    ));
    output.push_str(&format!(
        "Amount:      {}\n",
        format_amount(expense.amount, settings)
    ));
    output.push_str(&format!("Description: {}\n", expense.description));

    match category {
        Some(c) => output.push_str(&format!("Category:    {} ({})\n", c.name, c.id)),
        None => output.push_str(&format!("Category:    {} ({})\n", NO_CATEGORY, expense.type_id)),
    }

    output.push_str(&format!(
        "Created:     {}\n",
        format_millis(expense.created_at, "%Y-%m-%d %H:%M UTC")
    ));

    output
}

/// Truncate to `max_len` characters, padding shorter strings
fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        format!("{:width$}", s, width = max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}
