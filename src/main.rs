use anyhow::{bail, Result};
use clap::{ArgAction, Parser, Subcommand};
use tracing::debug;

use splitly::cli::{
    handle_audit_command, handle_expense_command, handle_group_command, handle_member_command,
    handle_report_command, handle_settle_command, AuditArgs, ExpenseCommands, GroupCommands,
    MemberCommands, ReportArgs, SettleCommands,
};
use splitly::config::{paths::SplitlyPaths, settings::Settings};
use splitly::storage::Storage;

#[derive(Parser)]
#[command(
    name = "splitly",
    author = "Kaylee Beyene",
    version,
    about = "Split group expenses and settle up from the terminal",
    long_about = "Splitly tracks expenses shared within a group, works out who owes \
                  whom, and suggests the fewest payments that settle everyone up."
)]
struct Cli {
    /// Increase diagnostic output (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    verbose: u8,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Initialize the data directory
    Init,

    /// Show current configuration and paths
    Config,

    /// Member management commands
    #[command(subcommand)]
    Member(MemberCommands),

    /// Group management commands
    #[command(subcommand)]
    Group(GroupCommands),

    /// Expense commands
    #[command(subcommand, alias = "exp")]
    Expense(ExpenseCommands),

    /// Balances, suggested settlements and recorded payments
    #[command(subcommand)]
    Settle(SettleCommands),

    /// Generate a group report
    Report(ReportArgs),

    /// Show recent audit log entries
    Audit(AuditArgs),
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    splitly::logging::set_up(cli.verbose);

    let paths = SplitlyPaths::new()?;
    let mut settings = Settings::load_or_create(&paths)?;
    debug!(base_dir = %paths.base_dir().display(), "resolved paths");

    let command = match cli.command {
        Some(command) => command,
        None => {
            println!("Splitly - split group expenses and settle up");
            println!();
            println!("Run 'splitly --help' for usage information.");
            println!("Run 'splitly init' to get started.");
            return Ok(());
        }
    };

    match command {
        Commands::Init => {
            if paths.is_initialized() {
                println!("Splitly is already initialized at: {}", paths.base_dir().display());
                return Ok(());
            }

            let storage = Storage::new(paths.clone())?;
            storage.save_all()?;
            settings.save(&paths)?;
            println!("Initialized Splitly at: {}", paths.base_dir().display());
            println!();
            println!("Next steps:");
            println!("  splitly member add <name>");
            println!("  splitly group create <name>");
            return Ok(());
        }
        Commands::Config => {
            println!("Splitly Configuration");
            println!("=====================");
            println!("Base directory: {}", paths.base_dir().display());
            println!("Data directory: {}", paths.data_dir().display());
            println!("Audit log:      {}", paths.audit_log().display());
            println!();
            println!("Settings:");
            println!(
                "  Currency symbol: {}",
                if settings.currency_symbol.is_empty() {
                    "(none)"
                } else {
                    settings.currency_symbol.as_str()
                }
            );
            println!("  Date format:     {}", settings.date_format);
            match settings.active_member {
                Some(id) => println!("  Active member:   {}", id),
                None => println!("  Active member:   (none)"),
            }
            return Ok(());
        }
        _ => {}
    }

    if !paths.is_initialized() {
        bail!("Splitly is not initialized. Run 'splitly init' first.");
    }

    let mut storage = Storage::new(paths)?;
    storage.load_all()?;

    match command {
        Commands::Member(cmd) => handle_member_command(&storage, &mut settings, cmd)?,
        Commands::Group(cmd) => handle_group_command(&storage, &settings, cmd)?,
        Commands::Expense(cmd) => handle_expense_command(&storage, &settings, cmd)?,
        Commands::Settle(cmd) => handle_settle_command(&storage, &settings, cmd)?,
        Commands::Report(args) => handle_report_command(&storage, &settings, args)?,
        Commands::Audit(args) => handle_audit_command(&storage, args)?,
        Commands::Init | Commands::Config => {}
    }

    Ok(())
}
