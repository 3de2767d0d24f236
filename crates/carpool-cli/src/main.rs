//! Carpool - assign rides for a team event from a roster snapshot.
//!
//! Reads a JSON snapshot of players, drivers, rules, attendance and driver
//! availability, then either generates the full assignment list for an
//! event or applies one manual reassignment on top of the snapshot's
//! existing assignments. The result is printed as a ride board, or as the
//! replacement assignment list with `--json`.

mod config;
mod render;
mod snapshot;

use std::io;
use std::path::PathBuf;

use anyhow::{bail, Result};
use carpool_core::{reassign_player, Generator, RideBoard, RideDriver};
use tracing::info;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use config::Config;
use render::render_board;
use snapshot::Snapshot;

const USAGE: &str = "\
Usage:
  carpool generate <snapshot.json> --event <event-id> [--json]
  carpool reassign <snapshot.json> --event <event-id> <player-id> <driver-id|unassigned> [--json]";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Command {
    Generate {
        snapshot: PathBuf,
        event_id: String,
        json: bool,
    },
    Reassign {
        snapshot: PathBuf,
        event_id: String,
        player_id: String,
        target: RideDriver,
        json: bool,
    },
}

/// Initialize the tracing subscriber for logging
fn init_tracing(config: &Config) {
    // RUST_LOG wins, then the config file, then "warn"
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(config.log_filter.as_deref().unwrap_or("warn")))
        .unwrap_or_else(|_| EnvFilter::new("warn"));

    tracing_subscriber::registry()
        .with(fmt::layer().with_writer(io::stderr))
        .with(filter)
        .init();
}

fn parse_args(args: &[String]) -> Result<Command> {
    let mut json = false;
    let mut event_id = None;
    let mut positional = Vec::new();

    let mut iter = args.iter();
    while let Some(arg) = iter.next() {
        match arg.as_str() {
            "--json" => json = true,
            "--event" => match iter.next() {
                Some(id) => event_id = Some(id.clone()),
                None => bail!("--event needs a value\n{}", USAGE),
            },
            _ => positional.push(arg.as_str()),
        }
    }

    let Some(event_id) = event_id else {
        bail!("--event is required\n{}", USAGE);
    };

    match positional.as_slice() {
        ["generate", snapshot] => Ok(Command::Generate {
            snapshot: PathBuf::from(snapshot),
            event_id,
            json,
        }),
        ["reassign", snapshot, player_id, target] => Ok(Command::Reassign {
            snapshot: PathBuf::from(snapshot),
            event_id,
            player_id: player_id.to_string(),
            target: RideDriver::parse(target),
            json,
        }),
        _ => bail!("{}", USAGE),
    }
}

fn main() -> Result<()> {
    // Load .env file if present (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.is_empty() || args.iter().any(|a| a == "--help" || a == "-h") {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::load()?;
    init_tracing(&config);

    match parse_args(&args)? {
        Command::Generate {
            snapshot,
            event_id,
            json,
        } => generate(&config, &Snapshot::load(&snapshot)?, &event_id, json),
        Command::Reassign {
            snapshot,
            event_id,
            player_id,
            target,
            json,
        } => {
            let snapshot = Snapshot::load(&snapshot)?;
            reassign(&snapshot, &event_id, &player_id, target, json)
        }
    }
}

fn generate(config: &Config, snapshot: &Snapshot, event_id: &str, json: bool) -> Result<()> {
    let slice = snapshot.for_event(event_id)?;
    let generator = Generator::new(config.scoring);
    let result = generator.generate(
        slice.event,
        &snapshot.players,
        &slice.attendance,
        &slice.availability,
        &snapshot.drivers,
        &snapshot.eligibility_rules,
    )?;

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
        return Ok(());
    }

    let board = RideBoard::build(
        &result.assignments,
        &slice.availability,
        &snapshot.drivers,
        &snapshot.players,
    );
    print!("{}", render_board(slice.event, &board, &snapshot.players));
    if result.unassigned_count() > 0 {
        eprintln!(
            "{} player(s) could not be placed",
            result.unassigned_count()
        );
    }
    Ok(())
}

fn reassign(
    snapshot: &Snapshot,
    event_id: &str,
    player_id: &str,
    target: RideDriver,
    json: bool,
) -> Result<()> {
    let slice = snapshot.for_event(event_id)?;
    if !snapshot.players.iter().any(|p| p.id == player_id) {
        bail!("Player not found in snapshot: {}", player_id);
    }

    info!(event_id, player_id, target = %target, "Applying manual reassignment");
    let assignments = reassign_player(event_id, player_id, target, &slice.assignments);

    if json {
        println!("{}", serde_json::to_string_pretty(&assignments)?);
        return Ok(());
    }

    let board = RideBoard::build(
        &assignments,
        &slice.availability,
        &snapshot.drivers,
        &snapshot.players,
    );
    print!("{}", render_board(slice.event, &board, &snapshot.players));
    for car in board.over_capacity() {
        eprintln!(
            "Warning: {} is over capacity ({})",
            car.driver_name,
            car.load_display()
        );
    }
    Ok(())
}

// ============================================================================
// Tests
// ============================================================================
