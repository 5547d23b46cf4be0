//! # squad_draw
//!
//! A random team-draw engine for casual football events, plus a small axum
//! server that exposes it as an HTTP endpoint.
//!
//! Players arrive grouped into tiers ("pots") per field position. A draw
//! spreads every pot across `jumlah_tim` teams so that no two players from
//! the same pot-and-position group ever share a team, then hands each team
//! one colour marker and one goalkeeper from the flat reserved lists.
//!
//! ## How it works
//!
//! 1. Build or load a [`Config`] — team count, `clr`/`gk` reserved lists,
//!    and pots mapping position tags (`#DEF`, `#MID`, `#FW`) to player names.
//! 2. Call [`draw_teams`] — the engine seeds one generator from the OS
//!    secure source, shuffles every (pot, position) group, pairs it with a
//!    random permutation of team ids, and assigns reserved roles one per
//!    team.
//! 3. The returned `Vec<Team>` lists teams in ascending id order, each with
//!    all five position slots filled in (possibly empty).
//!
//! ## Key properties
//!
//! - **Collision-free by construction**: pairing a shuffled group with a
//!   team-id permutation caps every group at one player per team — no
//!   backtracking, no constraint solving.
//! - **Lossy on overflow**: a group larger than the team count silently
//!   drops its excess players instead of erroring.
//! - **Not reproducible**: every call to [`draw_teams`] seeds fresh entropy.
//!   Tests seed their own generator through [`draw_teams_with_rng`].
//!
//! ## Quick start
//!
//! ```rust
//! use squad_draw::{draw_teams, Config, Pot};
//! use std::collections::BTreeMap;
//!
//! let mut players = BTreeMap::new();
//! players.insert("#MID".to_string(), vec!["Andi".into(), "Budi".into()]);
//!
//! let config = Config {
//!     jumlah_tim: 2,
//!     clr: vec!["Merah".into(), "Biru".into()],
//!     gk: vec!["Citra".into(), "Dewi".into()],
//!     pots: vec![Pot { name: "Pot 1".into(), players }],
//! };
//!
//! let teams = draw_teams(config);
//! assert_eq!(teams.len(), 2);
//! for team in &teams {
//!     assert_eq!(team.players.clr.len(), 1);
//!     assert_eq!(team.players.gk.len(), 1);
//!     assert_eq!(team.players.mid.len(), 1);
//! }
//! ```

pub mod draw_engine;
pub mod http;
pub mod logger;

// Convenience re-exports so callers can use `squad_draw::draw_teams`
// directly without reaching into `draw_engine::`.
pub use draw_engine::{
    draw_teams, draw_teams_with_rng, Config, ConfigError, Position, Pot, Team, TeamSheet,
};
