//! Settlement service
//!
//! Records payments made between group members to settle up.

use tracing::info;

use crate::audit::EntityType;
use crate::error::{SplitlyError, SplitlyResult};
use crate::models::{Amount, Group, MemberId, Settlement};
use crate::storage::Storage;

use super::group::GroupService;

/// Service for recording settlements
pub struct SettlementService<'a> {
    storage: &'a Storage,
}

impl<'a> SettlementService<'a> {
    /// Create a new settlement service
    pub fn new(storage: &'a Storage) -> Self {
        Self { storage }
    }

    /// Record that `from` paid `to` the given amount
    pub fn record(
        &self,
        group: &Group,
        from: MemberId,
        to: MemberId,
        amount: Amount,
    ) -> SplitlyResult<Settlement> {
        if !amount.is_finite() || !amount.is_positive() {
            return Err(SplitlyError::Validation(format!(
                "Settlement amount must be positive, got {}",
                amount
            )));
        }

        let groups = GroupService::new(self.storage);
        groups.ensure_member(group, from)?;
        groups.ensure_member(group, to)?;

        let settlement = Settlement::new(group.id, from, to, amount);
        settlement
            .validate()
            .map_err(|e| SplitlyError::Validation(e.to_string()))?;

        self.storage.settlements.upsert(settlement.clone())?;
        self.storage.settlements.save()?;

        self.storage.log_create(
            EntityType::Settlement,
            settlement.id.to_string(),
            Some(group.name.clone()),
            &settlement,
        )?;

        info!(
            settlement = %settlement.id,
            group = %group.name,
            %from,
            %to,
            amount = %settlement.amount,
            "recorded settlement"
        );
        Ok(settlement)
    }

    /// List a group's settlements, newest first
    pub fn list(&self, group: &Group) -> SplitlyResult<Vec<Settlement>> {
        self.storage.settlements.get_by_group(group.id)
    }
}
