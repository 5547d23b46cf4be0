//! Randomness policy for a draw.
//!
//! One `StdRng` is created per draw invocation and threaded as `&mut` through
//! every shuffle, so call ordering is part of the observable behavior. The
//! seed comes from the OS secure source (8 bytes, little-endian i64); if that
//! fails the seed degrades to wall-clock nanoseconds rather than aborting.
//!
//! Player-list shuffles additionally draw a 0..5 jitter value from the same
//! RNG and sleep that many milliseconds before touching the slice. The team
//! permutation shuffle does not jitter. Both quirks are carried over from the
//! original service so the RNG stream consumption stays identical.

use std::thread;
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rand::rngs::{OsRng, StdRng};
use rand::{Rng, RngCore, SeedableRng};
use tracing::warn;

/// 8 secure bytes interpreted as a little-endian signed seed, with a
/// wall-clock fallback when the OS source is unavailable.
pub fn secure_seed() -> i64 {
    let mut buf = [0u8; 8];
    match OsRng.try_fill_bytes(&mut buf) {
        Ok(()) => i64::from_le_bytes(buf),
        Err(err) => {
            warn!(%err, "secure random source failed, falling back to time-based seed");
            clock_seed()
        }
    }
}

fn clock_seed() -> i64 {
    SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .map(|d| d.as_nanos() as i64)
        .unwrap_or(0)
}

/// Fresh generator for one draw invocation.
pub fn draw_rng() -> StdRng {
    StdRng::seed_from_u64(secure_seed() as u64)
}

/// In-place Fisher-Yates shuffle.
pub fn shuffle<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    for i in (1..slice.len()).rev() {
        let j = rng.gen_range(0..=i);
        slice.swap(i, j);
    }
}

/// Shuffle a player list: short random delay first, then Fisher-Yates.
///
/// The delay draws from `rng` even for empty slices, so it always advances
/// the shared stream by one value.
pub fn shuffle_players<T, R: Rng>(slice: &mut [T], rng: &mut R) {
    thread::sleep(Duration::from_millis(rng.gen_range(0..5)));
    shuffle(slice, rng);
}

/// Random permutation of team identifiers `1..=count`.
pub fn team_permutation<R: Rng>(count: usize, rng: &mut R) -> Vec<i32> {
    let mut ids: Vec<i32> = (1..=count as i32).collect();
    shuffle(&mut ids, rng);
    ids
}
