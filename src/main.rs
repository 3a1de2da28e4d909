mod cli;
mod logging;

use std::process;

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use clap::Parser;
use tracing::info;

use andhera_date_input::app::{self, PickerApp};
use andhera_date_input::codec;
use andhera_date_input::config::PickerConfig;
use andhera_date_input::terminal::Terminal;
use andhera_date_input::{DateInputEngine, PickerValue};

use crate::cli::{Cli, Command, ParseArgs, PickArgs, PolicyArgs};

fn main() {
    let cli = Cli::parse();
    logging::init(cli.verbose);

    if let Err(e) = run(cli.command) {
        eprintln!("Error: {e:#}");
        process::exit(1);
    }
}

fn run(command: Command) -> Result<()> {
    match command {
        Command::Parse(args) => parse_cmd(args),
        Command::Pick(args) => pick_cmd(args),
    }
}

fn load_config(args: &PolicyArgs) -> Result<PickerConfig> {
    let config = match &args.config {
        Some(path) => PickerConfig::load(path)
            .with_context(|| format!("loading {}", path.display()))?,
        None => PickerConfig::default(),
    };
    Ok(args.apply(config))
}

fn build_engine(config: &PickerConfig) -> Result<DateInputEngine> {
    let policy = config.policy()?;
    let today = config.reference_date()?.unwrap_or_else(clock_today);
    info!(?policy, %today, "engine configured");
    Ok(DateInputEngine::new(policy, today))
}

fn clock_today() -> NaiveDate {
    Local::now().date_naive()
}

fn print_value(value: Option<&PickerValue>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(&value)?);
    Ok(())
}

fn parse_cmd(args: ParseArgs) -> Result<()> {
    let config = load_config(&args.policy)?;
    let mut engine = build_engine(&config)?;
    engine.handle_text(&args.text);

    if let Some(err) = engine.error() {
        return Err(err.clone().into());
    }

    if engine.committed().is_none() && !codec::sanitize(&args.text).is_empty() {
        println!("pending");
        return Ok(());
    }

    print_value(engine.committed())
}

fn pick_cmd(args: PickArgs) -> Result<()> {
    let config = load_config(&args.policy)?;
    let initial = match &config.value {
        Some(text) => Some(
            codec::parse_value(text, config.mode)
                .with_context(|| format!("initial value {text:?} does not match the mode"))?,
        ),
        None => None,
    };

    let engine = build_engine(&config)?
        .with_value(initial)
        .on_change(|value| info!(?value, "value changed"));
    let label = args.label.unwrap_or_else(|| config.label.clone());

    let mut app = PickerApp::new(engine, label);
    let mut terminal = Terminal::new();
    app::run(&mut app, &mut terminal)?;

    print_value(app.engine().committed())
}
