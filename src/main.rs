mod commands;
mod notifier;
mod render;

use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use classgrid_core::JsonStore;
use classgrid_core::config::ClassGridConfig;
use log::debug;

use commands::schedule::ScheduleFields;
use notifier::TerminalNotifier;

#[derive(Parser)]
#[command(name = "classgrid")]
#[command(about = "Manage weekly class schedules per section and view them on a grid")]
struct Cli {
    /// Use this schedule file instead of the configured one
    #[arg(long, global = true)]
    data_file: Option<PathBuf>,

    /// Show debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List sections
    Sections {
        #[arg(long)]
        json: bool,
    },
    /// Create, delete or select sections
    Section {
        #[command(subcommand)]
        command: SectionCommand,
    },
    /// List, add, edit or delete class schedules
    Schedule {
        #[command(subcommand)]
        command: ScheduleCommand,
    },
    /// Show a section's week as a grid
    Grid {
        /// Section name or id (defaults to the configured section)
        section: Option<String>,
    },
    /// List the valid start and end times
    Times,
}

#[derive(Subcommand)]
enum SectionCommand {
    Add {
        name: String,
    },
    Delete {
        section: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
    /// Make this the section used when none is given
    Use {
        section: String,
    },
}

#[derive(Subcommand)]
enum ScheduleCommand {
    List {
        /// Section name or id (defaults to the configured section)
        section: Option<String>,

        #[arg(long)]
        json: bool,
    },
    /// Add a class; prompts for each field when --course is omitted
    Add {
        /// Section name or id (defaults to the configured section)
        section: Option<String>,

        #[command(flatten)]
        fields: ScheduleFields,
    },
    Edit {
        /// Schedule id or unique id prefix
        id: String,

        #[command(flatten)]
        fields: ScheduleFields,
    },
    Delete {
        /// Schedule id or unique id prefix
        id: String,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(filter)).init();

    let config = ClassGridConfig::load()?;
    let data_path = cli.data_file.clone().unwrap_or_else(|| config.data_path());
    debug!("Using schedule file {}", data_path.display());

    let mut store = JsonStore::open(&data_path)
        .with_context(|| format!("Failed to open {}", data_path.display()))?;
    if config.seed_sample_sections {
        store.seed_sample_sections()?;
    }

    let default_section = config.default_section.as_deref();
    let notifier = TerminalNotifier;

    match cli.command {
        Commands::Sections { json } => commands::section::list(&store, default_section, json),
        Commands::Section { command } => match command {
            SectionCommand::Add { name } => commands::section::add(&mut store, &name),
            SectionCommand::Delete { section, yes } => {
                let section = commands::resolve_section(&store, Some(&section), None)?;
                commands::section::delete(&mut store, &section, yes)
            }
            SectionCommand::Use { section } => {
                let section = commands::resolve_section(&store, Some(&section), None)?;
                commands::section::use_default(&section)
            }
        },
        Commands::Schedule { command } => match command {
            ScheduleCommand::List { section, json } => {
                let section =
                    commands::resolve_section(&store, section.as_deref(), default_section)?;
                commands::schedule::list(&store, &section, json)
            }
            ScheduleCommand::Add { section, fields } => {
                let section =
                    commands::resolve_section(&store, section.as_deref(), default_section)?;
                commands::schedule::add(&mut store, &notifier, &section, &fields)
            }
            ScheduleCommand::Edit { id, fields } => {
                let existing = commands::resolve_schedule(&store, &id)?;
                commands::schedule::edit(&mut store, &notifier, &existing, &fields)
            }
            ScheduleCommand::Delete { id, yes } => {
                let existing = commands::resolve_schedule(&store, &id)?;
                commands::schedule::delete(&mut store, &existing, yes)
            }
        },
        Commands::Grid { section } => {
            let section =
                commands::resolve_section(&store, section.as_deref(), default_section)?;
            commands::grid::run(&store, &section)
        }
        Commands::Times => commands::times::run(),
    }
}
