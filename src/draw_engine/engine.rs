use std::collections::BTreeMap;

use rand::Rng;
use tracing::{debug, warn};

use crate::draw_engine::{
    models::{Config, Position, Team, TeamSheet},
    rng,
};

/// Run one draw with a fresh entropy-seeded generator.
///
/// This is the production entry point; results are intentionally not
/// reproducible across calls. Tests use [`draw_teams_with_rng`] instead.
pub fn draw_teams(config: Config) -> Vec<Team> {
    let mut rng = rng::draw_rng();
    draw_teams_with_rng(config, &mut rng)
}

/// Run one draw against a caller-supplied generator.
///
/// The generator is consumed strictly sequentially; every shuffle mutates its
/// state, so the order of the steps below is part of the contract.
pub fn draw_teams_with_rng<R: Rng>(mut config: Config, rng: &mut R) -> Vec<Team> {
    let team_count = config.team_count();

    // 1. Aggregate pool players by position across pots, in declaration
    //    order. Reserved roles and unknown tags never enter the pool.
    let mut pool: BTreeMap<Position, Vec<String>> = BTreeMap::new();
    for pot in &config.pots {
        for (tag, players) in &pot.players {
            match Position::parse(tag) {
                None => {
                    warn!(pot = %pot.name, tag = %tag, "skipping unknown position tag");
                }
                Some(pos) if pos.is_reserved() => {
                    debug!(pot = %pot.name, tag = %tag, "reserved role inside pot, ignored");
                }
                Some(pos) => {
                    pool.entry(pos).or_default().extend(players.iter().cloned());
                }
            }
        }
    }

    // 2. Shuffle each aggregate list. The distribution pass below re-shuffles
    //    every pot's own list, so this step only advances the shared RNG
    //    stream; it is kept for parity with the original draw sequence.
    for players in pool.values_mut() {
        rng::shuffle_players(players, rng);
    }

    // 3. One empty sheet per team; every position slot exists up front.
    let mut sheets = vec![TeamSheet::default(); team_count];

    // 4. Distribute each (pot, position) group onto a fresh random
    //    permutation of team ids. Positional pairing caps the group at one
    //    player per team; players beyond the team count are dropped.
    for pot in &config.pots {
        for (tag, players) in &pot.players {
            let pos = match Position::parse(tag) {
                Some(pos) if !pos.is_reserved() => pos,
                _ => continue,
            };

            let mut group = players.clone();
            rng::shuffle_players(&mut group, rng);
            let order = rng::team_permutation(team_count, rng);

            for (player, &team_id) in group.iter().zip(order.iter()) {
                sheets[team_id as usize - 1].slot_mut(pos).push(player.clone());
            }
            if group.len() > team_count {
                debug!(
                    pot = %pot.name,
                    tag = %tag,
                    dropped = group.len() - team_count,
                    "pot group larger than team count, excess players unassigned"
                );
            }
        }
    }

    // 5. Reserved roles: shuffle each flat list, then assign the i-th element
    //    straight to team i+1 while both sides have entries.
    rng::shuffle_players(&mut config.clr, rng);
    rng::shuffle_players(&mut config.gk, rng);
    for (i, sheet) in sheets.iter_mut().enumerate() {
        if let Some(colour) = config.clr.get(i) {
            sheet.clr.push(colour.clone());
        }
        if let Some(keeper) = config.gk.get(i) {
            sheet.gk.push(keeper.clone());
        }
    }

    // 6. Assemble in ascending team-id order.
    sheets
        .into_iter()
        .enumerate()
        .map(|(i, players)| Team { team_id: i as i32 + 1, players })
        .collect()
}
