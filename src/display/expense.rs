//! Expense display formatting

use std::collections::HashMap;

use crate::models::{Expense, MemberId, Settlement};

use super::{name_for, truncate};

/// Format a group's expenses as a table
pub fn format_expense_list(
    expenses: &[Expense],
    names: &HashMap<MemberId, String>,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if expenses.is_empty() {
        return "No expenses recorded.".to_string();
    }

    let rows: Vec<_> = expenses
        .iter()
        .map(|e| {
            let mut split: Vec<&str> =
                e.split_members.iter().map(|m| name_for(names, *m)).collect();
            split.sort_by_key(|n| n.to_lowercase());
            (
                e.date.format(date_format).to_string(),
                e.id.to_string(),
                truncate(&e.description, 30),
                name_for(names, e.paid_by),
                e.amount.format_with_symbol(currency_symbol),
                split.join(", "),
            )
        })
        .collect();

    let date_width = rows.iter().map(|r| r.0.len()).max().unwrap_or(4).max(4);
    let desc_width = rows.iter().map(|r| r.2.len()).max().unwrap_or(11).max(11);
    let payer_width = rows.iter().map(|r| r.3.len()).max().unwrap_or(7).max(7);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<date_width$}  {:<12}  {:<desc_width$}  {:<payer_width$}  {:>10}  {}\n",
        "Date",
        "ID",
        "Description",
        "Paid by",
        "Amount",
        "Split between",
    ));
    output.push_str(&format!(
        "{:-<date_width$}  {:-<12}  {:-<desc_width$}  {:-<payer_width$}  {:->10}  {:-<13}\n",
        "", "", "", "", "", "",
    ));

    for (date, id, description, payer, amount, split) in &rows {
        output.push_str(&format!(
            "{:<date_width$}  {:<12}  {:<desc_width$}  {:<payer_width$}  {:>10}  {}\n",
            date, id, description, payer, amount, split,
        ));
    }

    output
}

/// Format recorded settlements, newest first
pub fn format_settlement_history(
    settlements: &[Settlement],
    names: &HashMap<MemberId, String>,
    currency_symbol: &str,
    date_format: &str,
) -> String {
    if settlements.is_empty() {
        return "No settlements recorded.".to_string();
    }

    let mut output = String::new();
    for s in settlements {
        output.push_str(&format!(
            "{}  {} paid {} {}\n",
            s.date.format(date_format),
            name_for(names, s.from_member),
            name_for(names, s.to_member),
            s.amount.format_with_symbol(currency_symbol),
        ));
    }
    output
}
