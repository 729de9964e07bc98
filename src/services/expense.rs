//! Expense service
//!
//! Adds, lists and deletes shared expenses. Every member involved in an
//! expense must belong to the expense's group.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{SplitlyError, SplitlyResult};
use crate::models::{Amount, Expense, ExpenseId, Group, MemberId};
use crate::storage::Storage;

use super::group::GroupService;

/// Service for expense management
pub struct ExpenseService<'a> {
    storage: &'a Storage,
}

impl<'a> ExpenseService<'a> {
    /// Create a new expense service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Add an expense to a group
    ///
    /// An empty `split_members` splits the expense among all group members.
    pub fn add(
        &self,
        group: &Group,
        description: &str,
        amount: Amount,
        paid_by: MemberId,
        split_members: &[MemberId],
    ) -> SplitlyResult<Expense> {
        if !amount.is_finite() || !amount.is_positive() {
            return Err(SplitlyError::Validation(format!(
                "Expense amount must be positive, got {}",
                amount
            )));
        }

        let groups = GroupService::new(self.storage);
        groups.ensure_member(group, paid_by)?;

        let split: Vec<MemberId> = if split_members.is_empty() {
            group.members.iter().copied().collect()
        } else {
            split_members.to_vec()
        };

        for member in &split {
            groups.ensure_member(group, *member)?;
        }

        let expense = Expense::new(group.id, description.trim(), amount, paid_by, split);

        expense
            .validate()
            .map_err(|e| SplitlyError::Validation(e.to_string()))?;

        self.storage.expenses.upsert(expense.clone())?;
        self.storage.expenses.save()?;

        self.storage.log_create(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        info!(
            expense = %expense.id,
            group = %group.name,
            amount = %expense.amount,
            split = expense.split_members.len(),
            "added expense"
        );
        Ok(expense)
    }

    /// Find an expense by full ID or short display ID
    pub fn find(&self, identifier: &str) -> SplitlyResult<Option<Expense>> {
        let identifier = identifier.trim();

        if let Ok(id) = identifier.parse::<ExpenseId>() {
            if let Some(expense) = self.storage.expenses.get(id)? {
                return Ok(Some(expense));
            }
        }

        Ok(self
            .storage
            .expenses
            .get_all()?
            .into_iter()
            .find(|e| e.id.matches_short(identifier)))
    }

    /// Find an expense or fail with NotFound
    pub fn require(&self, identifier: &str) -> SplitlyResult<Expense> {
        self.find(identifier)?
            .ok_or_else(|| SplitlyError::expense_not_found(identifier))
    }

    /// Delete an expense; only members of its group may do so
    pub fn delete(&self, expense_id: ExpenseId, requested_by: MemberId) -> SplitlyResult<Expense> {
        let expense = self
            .storage
            .expenses
            .get(expense_id)?
            .ok_or_else(|| SplitlyError::expense_not_found(expense_id.to_string()))?;

        let group = self
            .storage
            .groups
            .get(expense.group_id)?
            .ok_or_else(|| SplitlyError::group_not_found(expense.group_id.to_string()))?;

        GroupService::new(self.storage).ensure_member(&group, requested_by)?;

        self.storage.expenses.delete(expense_id)?;
        self.storage.expenses.save()?;

        self.storage.log_delete(
            EntityType::Expense,
            expense.id.to_string(),
            Some(expense.description.clone()),
            &expense,
        )?;

        info!(expense = %expense.id, group = %group.name, "deleted expense");
        Ok(expense)
    }

    /// List a group's expenses, newest first
    pub fn list(&self, group: &Group) -> SplitlyResult<Vec<Expense>> {
        self.storage.expenses.get_by_group(group.id)
    }

    /// Total of all expenses in a group
    pub fn total(&self, group: &Group) -> SplitlyResult<Amount> {
        Ok(self.list(group)?.iter().map(|e| e.amount).sum())
    }
}
