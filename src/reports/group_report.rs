//! Group Report
//!
//! A printable summary of a group: totals, current balances, suggested
//! settlements and the full expense history.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::config::settings::Settings;
use crate::display::{member_names, name_for, truncate};
use crate::error::SplitlyResult;
use crate::models::{Amount, ExpenseId, Group};
use crate::services::{
    BalanceService, ExpenseService, GroupService, MemberBalanceRow, NamedSettlement,
};
use crate::storage::Storage;

/// Longest description shown in the expense table
const DESCRIPTION_WIDTH: usize = 30;

/// Longest split list shown in the expense table
const SPLIT_WIDTH: usize = 40;

/// Report totals
#[derive(Debug, Clone, Serialize)]
pub struct ReportSummary {
    pub total_expenses: Amount,
    pub expense_count: usize,
    pub member_count: usize,
}

/// One expense in the report
#[derive(Debug, Clone, Serialize)]
pub struct ExpenseLine {
    pub id: ExpenseId,
    pub date: DateTime<Utc>,
    pub description: String,
    pub paid_by: String,
    pub amount: Amount,
    pub split_between: Vec<String>,
}

/// Group report
#[derive(Debug, Clone, Serialize)]
pub struct GroupReport {
    pub group_name: String,
    pub group_code: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub description: String,
    pub generated_at: DateTime<Utc>,
    pub summary: ReportSummary,
    pub balances: Vec<MemberBalanceRow>,
    pub suggested_settlements: Vec<NamedSettlement>,
    /// Newest first
    pub expenses: Vec<ExpenseLine>,
}

impl GroupReport {
    /// Generate a report for a group
    pub fn generate(storage: &Storage, group: &Group) -> SplitlyResult<Self> {
        let members = GroupService::new(storage).members(group)?;
        let names = member_names(&members);

        let expenses = ExpenseService::new(storage).list(group)?;
        let balance_summary = BalanceService::new(storage).summary(group)?;

        let total_expenses: Amount = expenses.iter().map(|e| e.amount).sum();

        let lines = expenses
            .iter()
            .map(|e| {
                let mut split_between: Vec<String> = e
                    .split_members
                    .iter()
                    .filter_map(|m| names.get(m).cloned())
                    .collect();
                split_between.sort_by_key(|n| n.to_lowercase());

                ExpenseLine {
                    id: e.id,
                    date: e.date,
                    description: e.description.clone(),
                    paid_by: name_for(&names, e.paid_by).to_string(),
                    amount: e.amount,
                    split_between,
                }
            })
            .collect();

        Ok(Self {
            group_name: group.name.clone(),
            group_code: group.code.clone(),
            description: group.description.clone(),
            generated_at: Utc::now(),
            summary: ReportSummary {
                total_expenses,
                expense_count: expenses.len(),
                member_count: group.members.len(),
            },
            balances: balance_summary.rows,
            suggested_settlements: balance_summary.suggestions,
            expenses: lines,
        })
    }

    /// Format the report for terminal display or a text file
    pub fn format_terminal(&self, settings: &Settings) -> String {
        let symbol = settings.currency_symbol.as_str();
        let mut output = String::new();

        let title = format!("Splitly - {}", self.group_name);
        output.push_str(&title);
        output.push('\n');
        output.push_str(&"=".repeat(title.len().max(70)));
        output.push('\n');

        output.push_str(&format!("Group Code:   {}\n", self.group_code));
        if !self.description.is_empty() {
            output.push_str(&format!("Description:  {}\n", self.description));
        }
        output.push_str(&format!(
            "Generated on: {}\n",
            self.generated_at.format("%B %d, %Y at %I:%M %p UTC")
        ));
        output.push('\n');

        output.push_str("Summary\n");
        output.push_str(&"-".repeat(35));
        output.push('\n');
        output.push_str(&format!(
            "Total Expenses:     {:>15}\n",
            self.summary.total_expenses.format_with_symbol(symbol)
        ));
        output.push_str(&format!(
            "Number of Expenses: {:>15}\n",
            self.summary.expense_count
        ));
        output.push_str(&format!(
            "Group Members:      {:>15}\n",
            self.summary.member_count
        ));
        output.push('\n');

        output.push_str("Current Balances\n");
        output.push_str(&format!("{:<24} {:>14} {}\n", "Member", "Balance", "Status"));
        output.push_str(&"-".repeat(50));
        output.push('\n');
        for row in &self.balances {
            output.push_str(&format!(
                "{:<24} {:>14} {}\n",
                row.name,
                row.balance.format_balance(symbol),
                row.status
            ));
        }
        output.push('\n');

        if !self.suggested_settlements.is_empty() {
            output.push_str("Suggested Settlements\n");
            output.push_str(&format!("{:<24} {:<24} {:>12}\n", "From", "To", "Amount"));
            output.push_str(&"-".repeat(62));
            output.push('\n');
            for s in &self.suggested_settlements {
                output.push_str(&format!(
                    "{:<24} {:<24} {:>12}\n",
                    s.from_name,
                    s.to_name,
                    s.amount.format_with_symbol(symbol)
                ));
            }
            output.push('\n');
        }

        if !self.expenses.is_empty() {
            output.push_str("Expense Details\n");
            output.push_str(&format!(
                "{:<10} {:<33} {:<16} {:>10}  {}\n",
                "Date", "Description", "Paid By", "Amount", "Split Between"
            ));
            output.push_str(&"-".repeat(110));
            output.push('\n');
            for line in &self.expenses {
                output.push_str(&format!(
                    "{:<10} {:<33} {:<16} {:>10}  {}\n",
                    line.date.format(&settings.date_format).to_string(),
                    truncate(&line.description, DESCRIPTION_WIDTH),
                    line.paid_by,
                    line.amount.format_with_symbol(symbol),
                    truncate(&line.split_between.join(", "), SPLIT_WIDTH)
                ));
            }
        }

        output
    }

    /// Suggested file name for a saved report
    pub fn default_file_name(&self, extension: &str) -> String {
        let stem: String = self
            .group_name
            .chars()
            .map(|c| if c.is_alphanumeric() { c } else { '_' })
            .collect();
        format!("{}_expenses.{}", stem, extension)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::paths::SplitlyPaths;
    use crate::models::Member;
    use crate::services::{MemberService, SettlementService};
    use tempfile::TempDir;

    fn create_test_storage() -> (TempDir, Storage) {
        let temp_dir = TempDir::new().unwrap();
        let paths = SplitlyPaths::with_base_dir(temp_dir.path().to_path_buf());
        let mut storage = Storage::new(paths).unwrap();
        storage.load_all().unwrap();
        (temp_dir, storage)
    }

    fn pair(storage: &Storage) -> (Group, Member, Member) {
        let members = MemberService::new(storage);
        let a = members.create("Alice", None).unwrap();
        let b = members.create("Bob", None).unwrap();
        let groups = GroupService::new(storage);
        let group = groups.create("Road Trip", Some("Summer"), a.id).unwrap();
        let group = groups.join(&group.code, b.id).unwrap();
        (group, a, b)
    }

    #[test]
    fn test_generate_report() {
        let (_temp_dir, storage) = create_test_storage();
        let (group, a, b) = pair(&storage);
        let expenses = ExpenseService::new(&storage);
        expenses
            .add(&group, "Fuel", Amount::new(100.0), a.id, &[])
            .unwrap();
        expenses
            .add(&group, "Snacks", Amount::new(40.0), b.id, &[])
            .unwrap();

        let report = GroupReport::generate(&storage, &group).unwrap();

        assert_eq!(report.summary.total_expenses.value(), 140.0);
        assert_eq!(report.summary.expense_count, 2);
        assert_eq!(report.summary.member_count, 2);
        assert_eq!(report.suggested_settlements.len(), 1);
        assert_eq!(report.suggested_settlements[0].from_name, "Bob");
        assert_eq!(report.suggested_settlements[0].amount.value(), 30.0);
        assert_eq!(report.expenses[0].split_between, vec!["Alice", "Bob"]);
    }

    #[test]
    fn test_format_terminal_sections() {
        let (_temp_dir, storage) = create_test_storage();
        let (group, a, _b) = pair(&storage);
        ExpenseService::new(&storage)
            .add(
                &group,
                "A very long description that goes past thirty characters",
                Amount::new(50.0),
                a.id,
                &[],
            )
            .unwrap();

        let report = GroupReport::generate(&storage, &group).unwrap();
        let text = report.format_terminal(&Settings::default());

        assert!(text.starts_with("Splitly - Road Trip\n"));
        assert!(text.contains(&format!("Group Code:   {}", group.code)));
        assert!(text.contains("Description:  Summer"));
        assert!(text.contains("Total Expenses:"));
        assert!(text.contains("+ 25.00 Gets back"));
        assert!(text.contains("Suggested Settlements"));
        assert!(text.contains("A very long description that g..."));
    }

    #[test]
    fn test_settled_group_omits_suggestions() {
        let (_temp_dir, storage) = create_test_storage();
        let (group, a, b) = pair(&storage);
        ExpenseService::new(&storage)
            .add(&group, "Fuel", Amount::new(20.0), a.id, &[])
            .unwrap();
        SettlementService::new(&storage)
            .record(&group, b.id, a.id, Amount::new(10.0))
            .unwrap();

        let report = GroupReport::generate(&storage, &group).unwrap();
        let text = report.format_terminal(&Settings::default());

        assert!(report.suggested_settlements.is_empty());
        assert!(!text.contains("Suggested Settlements"));
        assert!(text.contains("Settled"));
    }

    #[test]
    fn test_default_file_name() {
        let (_temp_dir, storage) = create_test_storage();
        let (group, _a, _b) = pair(&storage);
        let report = GroupReport::generate(&storage, &group).unwrap();

        assert_eq!(report.default_file_name("txt"), "Road_Trip_expenses.txt");
    }
}
