//! Member display formatting

use crate::models::Member;

/// Format a list of members as a table
pub fn format_member_list(members: &[Member], active: Option<crate::models::MemberId>) -> String {
    if members.is_empty() {
        return "No members found.".to_string();
    }

    let name_width = members
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "  {:<12}  {:<name_width$}  {}\n",
        "ID",
        "Name",
        "Email",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "  {:-<12}  {:-<name_width$}  {:-<20}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for member in members {
        let marker = if Some(member.id) == active { "*" } else { " " };
        output.push_str(&format!(
            "{} {:<12}  {:<name_width$}  {}\n",
            marker,
            member.id.to_string(),
            member.name,
            member.email.as_deref().unwrap_or(""),
            name_width = name_width,
        ));
    }

    output
}
