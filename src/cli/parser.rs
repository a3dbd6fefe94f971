use crate::core::advance::{Preset, TimeUnit};
use crate::export::ExportFormat;
use clap::{ArgGroup, Parser, Subcommand};

/// Command-line interface definition for rCampaign
#[derive(Parser)]
#[command(
    name = "rcampaign",
    version = env!("CARGO_PKG_VERSION"),
    about = "Track campaign time and key decisions for your tabletop sessions",
    long_about = None
)]
pub struct Cli {
    /// Override store path (useful for tests or per-campaign stores)
    #[arg(global = true, long = "db")]
    pub db: Option<String>,

    /// Run in test mode (no config file update)
    #[arg(global = true, long = "test", hide = true)]
    pub test: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Initialize the store and configuration
    Init,

    /// Manage the configuration file (view or edit)
    Config {
        #[arg(long = "print", help = "Print the current configuration file")]
        print_config: bool,

        #[arg(
            long = "edit",
            help = "Edit the configuration file (default editor: $EDITOR, or nano/notepad)"
        )]
        edit_config: bool,

        #[arg(
            long = "editor",
            requires = "edit_config",
            help = "Specify the editor to use (vim, nano, or custom path)"
        )]
        editor: Option<String>,
    },

    /// Inspect or maintain the store
    Db {
        #[arg(long = "check", help = "Check store integrity")]
        check: bool,

        #[arg(long = "vacuum", help = "Optimize the store using VACUUM")]
        vacuum: bool,

        #[arg(long = "info", help = "Show store information")]
        info: bool,
    },

    /// Print the internal operations log
    Log {
        #[arg(long = "print", help = "Print rows from the internal log table")]
        print: bool,
    },

    /// Show the current campaign time
    Status,

    /// Advance campaign time by a preset or a custom amount
    #[command(group(ArgGroup::new("how").required(true).args(["amount", "rest"])))]
    Advance {
        /// Number of units to add (must be positive)
        #[arg(allow_negative_numbers = true)]
        amount: Option<i64>,

        /// Unit of AMOUNT (default from config, usually hours)
        #[arg(long, short = 'u', value_enum, requires = "amount")]
        unit: Option<TimeUnit>,

        /// Preset: short (1h), watch (4h), long (8h)
        #[arg(long, value_enum, conflicts_with = "amount")]
        rest: Option<Preset>,
    },

    /// Add a key decision to the timeline
    Add {
        /// Event title
        title: String,

        #[arg(long = "desc", short = 'd', default_value = "", help = "Event description")]
        description: String,

        #[arg(
            long = "remaining",
            short = 'r',
            help = "Optional countdown, in hours from now"
        )]
        remaining: Option<u64>,
    },

    /// Edit an event (title, description, countdown)
    Edit {
        /// Event id (see `list`)
        id: u64,

        #[arg(long, help = "New title")]
        title: Option<String>,

        #[arg(long = "desc", short = 'd', help = "New description")]
        description: Option<String>,

        #[arg(
            long = "remaining",
            short = 'r',
            conflicts_with = "clear_remaining",
            help = "New countdown, in hours from now"
        )]
        remaining: Option<u64>,

        #[arg(long = "clear-remaining", help = "Remove the countdown")]
        clear_remaining: bool,
    },

    /// List the timeline, oldest first
    List {
        #[arg(long, help = "Show full descriptions")]
        full: bool,
    },

    /// Delete an event (asks for confirmation)
    Del {
        /// Event id (see `list`)
        id: u64,
    },

    /// Reset time and timeline (asks for confirmation)
    Clear,

    /// Export the campaign
    Export {
        #[arg(long, value_enum, default_value = "json")]
        format: ExportFormat,

        #[arg(long, value_name = "FILE")]
        file: String,

        #[arg(long, short = 'f', help = "Overwrite output file without confirmation")]
        force: bool,
    },

    /// Replace the campaign with an exported JSON file
    Import {
        #[arg(value_name = "FILE")]
        file: String,
    },
}
