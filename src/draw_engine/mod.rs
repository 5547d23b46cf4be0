//! Core draw engine — configuration model, randomness policy, and the
//! collision-avoiding team distribution.
//!
//! ## Module overview
//!
//! | Module   | Purpose |
//! |----------|---------|
//! | `models` | Shared types: position tags, config, pots, teams, sheets |
//! | `error`  | `ConfigError` — the only way a draw can fail |
//! | `rng`    | Secure seeding, Fisher-Yates shuffles, jittered player shuffle |
//! | `engine` | `draw_teams()` / `draw_teams_with_rng()` — the draw pipeline |

pub mod engine;
pub mod error;
pub mod models;
pub mod rng;

// Re-export the public API surface so callers can use
// `draw_engine::draw_teams` without reaching into sub-modules.
pub use engine::{draw_teams, draw_teams_with_rng};
pub use error::ConfigError;
pub use models::{Config, Position, Pot, Team, TeamSheet};
