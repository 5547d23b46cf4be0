//! End-to-end draw demo.
//!
//! Run with: `cargo run --example demo`
//!
//! Builds a four-team configuration in code, runs one entropy-seeded draw,
//! and prints every team sheet. Each run produces a different assignment;
//! the structural guarantees (one colour and one keeper per team, no two
//! players from the same pot-and-position group on one team) hold on every
//! run.

use std::collections::BTreeMap;

use squad_draw::{draw_teams, Config, Position, Pot};

fn pot(name: &str, entries: &[(&str, &[&str])]) -> Pot {
    let mut players = BTreeMap::new();
    for (tag, list) in entries {
        players.insert(tag.to_string(), list.iter().map(|s| s.to_string()).collect());
    }
    Pot { name: name.to_string(), players }
}

fn main() {
    let config = Config {
        jumlah_tim: 4,
        clr: ["Merah", "Biru", "Hijau", "Kuning"].map(String::from).to_vec(),
        gk: ["Agus", "Bambang", "Joko", "Rizky"].map(String::from).to_vec(),
        pots: vec![
            pot(
                "Pot 1",
                &[
                    ("#DEF", &["Dedi", "Eko", "Fajar", "Gilang"]),
                    ("#MID", &["Hadi", "Indra", "Jajang", "Kurnia"]),
                    ("#FW", &["Lukman", "Maman", "Nanda", "Opik"]),
                ],
            ),
            pot(
                "Pot 2",
                &[
                    ("#DEF", &["Putra", "Qori", "Rendi", "Surya"]),
                    ("#MID", &["Tono", "Udin", "Vino", "Wawan"]),
                ],
            ),
        ],
    };

    let teams = draw_teams(config);

    for team in &teams {
        println!("Team {}", team.team_id);
        for pos in Position::ALL {
            let slot = team.players.slot(pos);
            if slot.is_empty() {
                println!("  {:<9} -", pos.label());
            } else {
                println!("  {:<9} {}", pos.label(), slot.join(", "));
            }
        }
        println!();
    }
}
