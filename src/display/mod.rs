//! Display formatting for terminal output
//!
//! Provides plain-text tables for members, groups, expenses and balances.

pub mod balance;
pub mod expense;
pub mod group;
pub mod member;

pub use balance::{format_balance_table, format_suggestions};
pub use expense::{format_expense_list, format_settlement_history};
pub use group::{format_group_details, format_group_list};
pub use member::format_member_list;

use std::collections::HashMap;

use crate::models::{Member, MemberId};

/// Build an ID to name lookup from a roster
pub fn member_names(members: &[Member]) -> HashMap<MemberId, String> {
    members.iter().map(|m| (m.id, m.name.clone())).collect()
}

/// Resolve a member name, "Unknown" when absent from the lookup
pub fn name_for(names: &HashMap<MemberId, String>, id: MemberId) -> &str {
    names.get(&id).map(String::as_str).unwrap_or("Unknown")
}

/// Shorten text to `max` characters, appending "..." when cut
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max).collect();
        format!("{}...", cut)
    } else {
        text.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("short", 30), "short");
        assert_eq!(truncate("abcdef", 3), "abc...");
        assert_eq!(truncate("exactly", 7), "exactly");
    }

    #[test]
    fn test_name_lookup() {
        let alice = Member::new("Alice");
        let names = member_names(std::slice::from_ref(&alice));
        assert_eq!(name_for(&names, alice.id), "Alice");
        assert_eq!(name_for(&names, MemberId::new()), "Unknown");
    }
}
