//! Group CLI commands
//!
//! Implements CLI commands for creating, joining and inspecting groups.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::{format_group_details, format_group_list};
use crate::error::SplitlyResult;
use crate::services::GroupService;
use crate::storage::Storage;

use super::resolve_actor;

/// Group subcommands
#[derive(Subcommand)]
pub enum GroupCommands {
    /// Create a new group
    Create {
        /// Group name
        name: String,
        /// Group description
        #[arg(short, long)]
        description: Option<String>,
        /// Member creating the group (defaults to the active member)
        #[arg(long = "as")]
        as_member: Option<String>,
    },
    /// Join a group with its code
    Join {
        /// Six-character join code
        code: String,
        /// Member joining (defaults to the active member)
        #[arg(long = "as")]
        as_member: Option<String>,
    },
    /// List groups
    List {
        /// Only groups the active member belongs to
        #[arg(short, long)]
        mine: bool,
    },
    /// Show group details
    Show {
        /// Group name, code or ID
        group: String,
    },
}

/// Handle a group command
pub fn handle_group_command(
    storage: &Storage,
    settings: &Settings,
    cmd: GroupCommands,
) -> SplitlyResult<()> {
    let service = GroupService::new(storage);

    match cmd {
        GroupCommands::Create {
            name,
            description,
            as_member,
        } => {
            let creator = resolve_actor(storage, settings, as_member.as_deref())?;
            let group = service.create(&name, description.as_deref(), creator.id)?;

            println!("Created group: {}", group.name);
            println!("  Join code: {}", group.code);
            println!("  ID: {}", group.id);
            println!();
            println!("Share the join code so others can run 'splitly group join {}'", group.code);
        }

        GroupCommands::Join { code, as_member } => {
            let member = resolve_actor(storage, settings, as_member.as_deref())?;
            let group = service.join(&code, member.id)?;
            println!("{} joined group: {}", member.name, group.name);
        }

        GroupCommands::List { mine } => {
            let groups = if mine {
                let member = resolve_actor(storage, settings, None)?;
                service.list_for_member(member.id)?
            } else {
                service.list()?
            };
            println!("{}", format_group_list(&groups).trim_end());
        }

        GroupCommands::Show { group } => {
            let found = service.require(&group)?;
            let members = service.members(&found)?;
            println!("{}", format_group_details(&found, &members).trim_end());
        }
    }

    Ok(())
}
