//! CLI command for the group report
//!
//! Prints the report or writes it to a file in text, JSON, YAML or CSV.

use clap::{Args, ValueEnum};
use std::fs::File;
use std::io::{self, BufWriter, Write};
use std::path::PathBuf;

use crate::config::settings::Settings;
use crate::error::{SplitlyError, SplitlyResult};
use crate::export::{export_expenses_csv, export_group_json, export_group_yaml};
use crate::models::Group;
use crate::reports::GroupReport;
use crate::services::GroupService;
use crate::storage::Storage;

/// Report output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ReportFormat {
    /// Plain-text report
    Text,
    /// JSON report with schema version
    Json,
    /// YAML report with schema version
    Yaml,
    /// Expenses as CSV
    Csv,
}

impl ReportFormat {
    fn extension(self) -> &'static str {
        match self {
            Self::Text => "txt",
            Self::Json => "json",
            Self::Yaml => "yaml",
            Self::Csv => "csv",
        }
    }
}

/// Arguments for `splitly report`
#[derive(Args, Debug)]
pub struct ReportArgs {
    /// Group name, code or ID
    pub group: String,

    /// Write to this file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,

    /// Write to `<group>_expenses.<ext>` in the current directory
    #[arg(long, conflicts_with = "output")]
    pub save: bool,

    /// Output format
    #[arg(short, long, value_enum, default_value = "text")]
    pub format: ReportFormat,
}

/// Handle the report command
pub fn handle_report_command(
    storage: &Storage,
    settings: &Settings,
    args: ReportArgs,
) -> SplitlyResult<()> {
    let group = GroupService::new(storage).require(&args.group)?;

    let path = match (args.output, args.save) {
        (Some(path), _) => Some(path),
        (None, true) => {
            let report = GroupReport::generate(storage, &group)?;
            Some(PathBuf::from(report.default_file_name(args.format.extension())))
        }
        (None, false) => None,
    };

    match path {
        Some(path) => {
            let file = File::create(&path).map_err(|e| {
                SplitlyError::Export(format!("Failed to create file {}: {}", path.display(), e))
            })?;
            let mut writer = BufWriter::new(file);
            write_report(storage, settings, &group, args.format, &mut writer)?;
            writer
                .flush()
                .map_err(|e| SplitlyError::Export(e.to_string()))?;
            println!("Report for {} written to: {}", group.name, path.display());
        }
        None => {
            let stdout = io::stdout();
            let mut handle = stdout.lock();
            write_report(storage, settings, &group, args.format, &mut handle)?;
        }
    }

    Ok(())
}

fn write_report<W: Write>(
    storage: &Storage,
    settings: &Settings,
    group: &Group,
    format: ReportFormat,
    writer: &mut W,
) -> SplitlyResult<()> {
    match format {
        ReportFormat::Text => {
            let report = GroupReport::generate(storage, group)?;
            write!(writer, "{}", report.format_terminal(settings))
                .map_err(|e| SplitlyError::Export(e.to_string()))
        }
        ReportFormat::Json => export_group_json(storage, group, writer),
        ReportFormat::Yaml => export_group_yaml(storage, group, writer),
        ReportFormat::Csv => export_expenses_csv(storage, group, writer),
    }
}
