//! Balance display formatting
//!
//! Renders a group's balance table and the suggested settlements that would
//! clear it.

use crate::services::GroupBalanceSummary;

/// Format the per-member balance table
///
/// Balances are shown as `+ 12.50` (gets back), `- 12.50` (owes) or
/// ` 0.00` (settled).
pub fn format_balance_table(summary: &GroupBalanceSummary, currency_symbol: &str) -> String {
    if summary.rows.is_empty() {
        return "No members in this group.".to_string();
    }

    let name_width = summary
        .rows
        .iter()
        .map(|r| r.name.len())
        .max()
        .unwrap_or(6)
        .max(6);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:>12}  {}\n",
        "Member", "Balance", "Status",
    ));
    output.push_str(&format!("{:-<name_width$}  {:->12}  {:-<9}\n", "", "", ""));

    for row in &summary.rows {
        output.push_str(&format!(
            "{:<name_width$}  {:>12}  {}\n",
            row.name,
            row.balance.format_balance(currency_symbol),
            row.status,
        ));
    }

    output
}

/// Format the suggested settlements
pub fn format_suggestions(summary: &GroupBalanceSummary, currency_symbol: &str) -> String {
    if summary.suggestions.is_empty() {
        return "Everyone is settled up.".to_string();
    }

    let mut output = String::new();
    output.push_str(&format!(
        "Suggested settlements ({}):\n",
        summary.suggestions.len()
    ));
    for s in &summary.suggestions {
        output.push_str(&format!(
            "  {} pays {} {}\n",
            s.from_name,
            s.to_name,
            s.amount.format_with_symbol(currency_symbol),
        ));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Amount, MemberId};
    use crate::services::{BalanceStatus, MemberBalanceRow, NamedSettlement};

    fn row(name: &str, value: f64) -> MemberBalanceRow {
        MemberBalanceRow {
            member_id: MemberId::new(),
            name: name.to_string(),
            balance: Amount::new(value),
            status: BalanceStatus::of(Amount::new(value)),
        }
    }

    #[test]
    fn test_balance_table() {
        let summary = GroupBalanceSummary {
            rows: vec![row("Alice", 60.0), row("Bob", -30.0), row("Carol", 0.004)],
            suggestions: vec![],
        };

        let output = format_balance_table(&summary, "");
        assert!(output.contains("+ 60.00  Gets back"));
        assert!(output.contains("- 30.00  Owes"));
        assert!(output.contains("0.00  Settled"));
    }

    #[test]
    fn test_suggestions() {
        let summary = GroupBalanceSummary {
            rows: vec![],
            suggestions: vec![NamedSettlement {
                from_member: MemberId::new(),
                from_name: "Bob".into(),
                to_member: MemberId::new(),
                to_name: "Alice".into(),
                amount: Amount::new(30.0),
            }],
        };

        let output = format_suggestions(&summary, "$");
        assert!(output.contains("Suggested settlements (1):"));
        assert!(output.contains("Bob pays Alice $30.00"));
    }

    #[test]
    fn test_settled_group() {
        let summary = GroupBalanceSummary {
            rows: vec![row("Alice", 0.0)],
            suggestions: vec![],
        };
        assert_eq!(format_suggestions(&summary, ""), "Everyone is settled up.");
    }
}
