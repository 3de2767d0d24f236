//! Plain-text ride board output.

use std::collections::HashMap;
use std::fmt::Write;

use carpool_core::{Event, Player, RideBoard};

/// Render the board for one event as a block of text
pub fn render_board(event: &Event, board: &RideBoard, players: &[Player]) -> String {
    let names: HashMap<&str, String> = players
        .iter()
        .map(|p| (p.id.as_str(), p.display_name()))
        .collect();
    let name_of = |id: &str| names.get(id).cloned().unwrap_or_else(|| id.to_string());

    let mut out = String::new();
    let _ = writeln!(out, "{} - {}", event.name, event.formatted_date());
    if let Some(location) = &event.location {
        let _ = writeln!(out, "{}", location);
    }
    let _ = writeln!(out);

    for car in &board.cars {
        let flag = if car.is_over_capacity() {
            "  OVER CAPACITY"
        } else if car.is_full() {
            "  full"
        } else {
            ""
        };
        let _ = writeln!(out, "{} [{}]{}", car.driver_name, car.load_display(), flag);
        for rider in &car.riders {
            let _ = writeln!(out, "  - {}", name_of(rider));
        }
    }

    if !board.orphaned.is_empty() {
        let _ = writeln!(out, "Drivers no longer driving:");
        for ride in &board.orphaned {
            let _ = writeln!(out, "  - {} ({})", name_of(&ride.player_id), ride.driver);
        }
    }

    let _ = writeln!(out, "Unassigned [{}]", board.unassigned.len());
    for player_id in &board.unassigned {
        let _ = writeln!(out, "  - {}", name_of(player_id));
    }
    out
}
