//! Member CLI commands
//!
//! Implements CLI commands for member management and choosing the active
//! member.

use clap::Subcommand;

use crate::config::settings::Settings;
use crate::display::format_member_list;
use crate::error::SplitlyResult;
use crate::services::MemberService;
use crate::storage::Storage;

/// Member subcommands
#[derive(Subcommand)]
pub enum MemberCommands {
    /// Add a new member
    Add {
        /// Member name
        name: String,
        /// Contact email
        #[arg(short, long)]
        email: Option<String>,
    },
    /// List all members
    List,
    /// Act as this member when --as is omitted
    Use {
        /// Member name or ID
        member: String,
    },
}

/// Handle a member command
pub fn handle_member_command(
    storage: &Storage,
    settings: &mut Settings,
    cmd: MemberCommands,
) -> SplitlyResult<()> {
    let service = MemberService::new(storage);

    match cmd {
        MemberCommands::Add { name, email } => {
            let member = service.create(&name, email.as_deref())?;

            println!("Added member: {}", member.name);
            if let Some(email) = &member.email {
                println!("  Email: {}", email);
            }
            println!("  ID: {}", member.id);

            // First member becomes the active one
            if settings.active_member.is_none() {
                settings.active_member = Some(member.id);
                settings.save(storage.paths())?;
                println!("  Now acting as {}", member.name);
            }
        }

        MemberCommands::List => {
            let members = service.list()?;
            println!(
                "{}",
                format_member_list(&members, settings.active_member).trim_end()
            );
        }

        MemberCommands::Use { member } => {
            let found = service.require(&member)?;
            settings.active_member = Some(found.id);
            settings.save(storage.paths())?;
            println!("Now acting as {}", found.name);
        }
    }

    Ok(())
}
