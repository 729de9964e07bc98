//! Group display formatting
//!
//! Formats groups for terminal output in list and detail views.

use crate::models::{Group, Member};

/// Format a list of groups as a table
pub fn format_group_list(groups: &[Group]) -> String {
    if groups.is_empty() {
        return "No groups found.".to_string();
    }

    let name_width = groups
        .iter()
        .map(|g| g.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<6}  {:>7}  {}\n",
        "Name",
        "Code",
        "Members",
        "Description",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<6}  {:->7}  {:-<11}\n",
        "",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for group in groups {
        output.push_str(&format!(
            "{:<name_width$}  {:<6}  {:>7}  {}\n",
            group.name,
            group.code,
            group.members.len(),
            group.description,
            name_width = name_width,
        ));
    }

    output
}

/// Format a single group's details with its member roster
pub fn format_group_details(group: &Group, members: &[Member]) -> String {
    let mut output = String::new();

    output.push_str(&format!("Group: {}\n", group.name));
    output.push_str(&format!("  ID:          {}\n", group.id));
    output.push_str(&format!("  Join code:   {}\n", group.code));
    if !group.description.is_empty() {
        output.push_str(&format!("  Description: {}\n", group.description));
    }
    output.push_str(&format!(
        "  Created:     {}\n",
        group.created_at.format("%Y-%m-%d")
    ));
    output.push('\n');
    output.push_str(&format!("  Members ({}):\n", members.len()));

    for member in members {
        let creator = if member.id == group.created_by {
            " (creator)"
        } else {
            ""
        };
        output.push_str(&format!("    - {}{}\n", member.name, creator));
    }

    output
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_list() {
        let alice = Member::new("Alice");
        let mut group = Group::new("Weekend Trip", alice.id);
        group.description = "Cabin".into();

        let output = format_group_list(&[group.clone()]);
        assert!(output.contains("Weekend Trip"));
        assert!(output.contains(&group.code));
        assert!(output.contains("Cabin"));
    }

    #[test]
    fn test_group_details_marks_creator() {
        let alice = Member::new("Alice");
        let bob = Member::new("Bob");
        let mut group = Group::new("Flat", alice.id);
        group.add_member(bob.id);

        let output = format_group_details(&group, &[alice, bob]);
        assert!(output.contains("Members (2):"));
        assert!(output.contains("- Alice (creator)"));
        assert!(output.contains("- Bob\n"));
    }
}
