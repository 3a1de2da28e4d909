use std::path::PathBuf;

use clap::{Parser, Subcommand, ValueEnum};

use andhera_date_input::SelectionMode;
use andhera_date_input::config::PickerConfig;

/// Preview and exercise the Andhera date input from a terminal.
#[derive(Parser)]
#[command(
    name = "andhera-picker",
    version,
    about = "Terminal preview of the Andhera date input"
)]
pub struct Cli {
    /// Increase verbosity (-v info, -vv debug, -vvv trace).
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Subcommand to run.
    #[command(subcommand)]
    pub command: Command,
}

/// Available subcommands.
#[derive(Subcommand)]
pub enum Command {
    /// Feed one piece of text through the input and print the result.
    Parse(ParseArgs),
    /// Open the interactive picker.
    Pick(PickArgs),
}

#[derive(Clone, Copy, ValueEnum)]
pub enum ModeArg {
    Single,
    Range,
}

impl From<ModeArg> for SelectionMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Single => SelectionMode::Single,
            ModeArg::Range => SelectionMode::Range,
        }
    }
}

/// Policy flags shared by every subcommand. Flags override the config file.
#[derive(clap::Args)]
pub struct PolicyArgs {
    /// Path to a YAML picker configuration.
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Single date or start/end range.
    #[arg(short, long, value_enum)]
    pub mode: Option<ModeArg>,

    /// Earliest selectable date (DD/MM/YYYY).
    #[arg(long)]
    pub min: Option<String>,

    /// Latest selectable date (DD/MM/YYYY).
    #[arg(long)]
    pub max: Option<String>,

    /// Disable every day before today.
    #[arg(long)]
    pub disable_past: bool,

    /// Accept ranges typed or clicked end-first.
    #[arg(long)]
    pub no_validate_range: bool,

    /// Pin today's date (DD/MM/YYYY) instead of reading the clock.
    #[arg(long)]
    pub today: Option<String>,
}

impl PolicyArgs {
    pub fn apply(&self, mut config: PickerConfig) -> PickerConfig {
        if let Some(mode) = self.mode {
            config.mode = mode.into();
        }
        if let Some(min) = &self.min {
            config.min_date = Some(min.clone());
        }
        if let Some(max) = &self.max {
            config.max_date = Some(max.clone());
        }
        if self.disable_past {
            config.disable_past_dates = true;
        }
        if self.no_validate_range {
            config.validate_range = false;
        }
        if let Some(today) = &self.today {
            config.today = Some(today.clone());
        }
        config
    }
}

/// Arguments for the `parse` subcommand.
#[derive(clap::Args)]
pub struct ParseArgs {
    /// Text as typed into the input box.
    pub text: String,

    #[command(flatten)]
    pub policy: PolicyArgs,
}

/// Arguments for the `pick` subcommand.
#[derive(clap::Args)]
pub struct PickArgs {
    /// Label shown next to the input box.
    #[arg(short, long)]
    pub label: Option<String>,

    #[command(flatten)]
    pub policy: PolicyArgs,
}
