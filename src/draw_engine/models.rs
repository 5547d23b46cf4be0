use std::collections::BTreeMap;
use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::draw_engine::error::ConfigError;

// ---------------------------------------------------------------------------
// Position tags
// ---------------------------------------------------------------------------

/// The closed set of position tags a draw knows about.
///
/// `Clr` and `Gk` are reserved roles: they are filled exclusively from the
/// flat `clr`/`gk` lists on [`Config`] and never from pot entries. The
/// remaining three are pool positions filled through pot distribution.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Position {
    /// Team colour marker ("WARNA").
    #[serde(rename = "#CLR")]
    Clr,
    /// Goalkeeper ("KIPER").
    #[serde(rename = "#GK")]
    Gk,
    #[serde(rename = "#DEF")]
    Def,
    #[serde(rename = "#MID")]
    Mid,
    #[serde(rename = "#FW")]
    Fw,
}

impl Position {
    /// Every tag, in the order team sheets list them.
    pub const ALL: [Position; 5] =
        [Position::Clr, Position::Gk, Position::Def, Position::Mid, Position::Fw];

    /// The wire tag, e.g. `"#MID"`.
    pub fn tag(self) -> &'static str {
        match self {
            Position::Clr => "#CLR",
            Position::Gk  => "#GK",
            Position::Def => "#DEF",
            Position::Mid => "#MID",
            Position::Fw  => "#FW",
        }
    }

    /// Human-readable label used in logs and printed output.
    pub fn label(self) -> &'static str {
        match self {
            Position::Clr => "WARNA",
            Position::Gk  => "KIPER",
            Position::Def => "Defender",
            Position::Mid => "Midfield",
            Position::Fw  => "Forward",
        }
    }

    /// Parse a wire tag; `None` for anything outside the closed set.
    pub fn parse(tag: &str) -> Option<Position> {
        match tag {
            "#CLR" => Some(Position::Clr),
            "#GK"  => Some(Position::Gk),
            "#DEF" => Some(Position::Def),
            "#MID" => Some(Position::Mid),
            "#FW"  => Some(Position::Fw),
            _      => None,
        }
    }

    /// Reserved roles are sourced only from the flat config lists.
    pub fn is_reserved(self) -> bool {
        matches!(self, Position::Clr | Position::Gk)
    }
}

impl fmt::Display for Position {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.tag())
    }
}

// ---------------------------------------------------------------------------
// Draw configuration
// ---------------------------------------------------------------------------

/// One tier of players, keyed by raw position tag.
///
/// Tags stay raw strings here so unknown tags survive deserialization and can
/// be warned about during the draw instead of failing the whole request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Pot {
    pub name: String,
    #[serde(default)]
    pub players: BTreeMap<String, Vec<String>>,
}

/// The full input to one draw: team count, reserved-role pools, and pots.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    pub jumlah_tim: i32,
    #[serde(default)]
    pub clr: Vec<String>,
    #[serde(default)]
    pub gk: Vec<String>,
    #[serde(default)]
    pub pots: Vec<Pot>,
}

impl Config {
    /// Read, parse, and validate a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Config, ConfigError> {
        let bytes = std::fs::read(path)?;
        Config::from_slice(&bytes)
    }

    /// Parse and validate raw JSON.
    pub fn from_slice(bytes: &[u8]) -> Result<Config, ConfigError> {
        let config: Config = serde_json::from_slice(bytes)?;
        config.validate()?;
        Ok(config)
    }

    /// Structural validation beyond what serde enforces. Empty pots and empty
    /// reserved lists are fine; they just produce empty assignments.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.jumlah_tim <= 0 {
            return Err(ConfigError::Validation(self.jumlah_tim));
        }
        Ok(())
    }

    /// Team count as a slice-friendly size. Valid configs are positive, so
    /// the clamp only matters for unvalidated values.
    pub(crate) fn team_count(&self) -> usize {
        usize::try_from(self.jumlah_tim).unwrap_or(0)
    }
}

// ---------------------------------------------------------------------------
// Draw results
// ---------------------------------------------------------------------------

/// Player assignments for one team, always carrying all five positions.
///
/// Modelled as a struct rather than a map so "every team has an entry for
/// every tag" holds by construction and serializes as such.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamSheet {
    #[serde(rename = "#CLR", default)]
    pub clr: Vec<String>,
    #[serde(rename = "#GK", default)]
    pub gk: Vec<String>,
    #[serde(rename = "#DEF", default)]
    pub def: Vec<String>,
    #[serde(rename = "#MID", default)]
    pub mid: Vec<String>,
    #[serde(rename = "#FW", default)]
    pub fw: Vec<String>,
}

impl TeamSheet {
    pub fn slot(&self, pos: Position) -> &[String] {
        match pos {
            Position::Clr => &self.clr,
            Position::Gk  => &self.gk,
            Position::Def => &self.def,
            Position::Mid => &self.mid,
            Position::Fw  => &self.fw,
        }
    }

    pub fn slot_mut(&mut self, pos: Position) -> &mut Vec<String> {
        match pos {
            Position::Clr => &mut self.clr,
            Position::Gk  => &mut self.gk,
            Position::Def => &mut self.def,
            Position::Mid => &mut self.mid,
            Position::Fw  => &mut self.fw,
        }
    }

    /// Total players on the sheet across all positions.
    pub fn len(&self) -> usize {
        Position::ALL.iter().map(|&p| self.slot(p).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// One drawn team: 1-based identifier plus its full position sheet.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Team {
    #[serde(rename = "teamId")]
    pub team_id: i32,
    pub players: TeamSheet,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_covers_the_closed_tag_set() {
        for pos in Position::ALL {
            assert_eq!(Position::parse(pos.tag()), Some(pos));
        }
        assert_eq!(Position::parse("#XYZ"), None);
        assert_eq!(Position::parse("MID"), None);
        assert_eq!(Position::parse(""), None);
    }

    #[test]
    fn only_clr_and_gk_are_reserved() {
        assert!(Position::Clr.is_reserved());
        assert!(Position::Gk.is_reserved());
        assert!(!Position::Def.is_reserved());
        assert!(!Position::Mid.is_reserved());
        assert!(!Position::Fw.is_reserved());
    }

    #[test]
    fn team_sheet_serializes_all_five_tags() {
        let team = Team { team_id: 3, players: TeamSheet::default() };
        let json = serde_json::to_value(&team).unwrap();
        assert_eq!(json["teamId"], 3);
        for pos in Position::ALL {
            assert!(
                json["players"].get(pos.tag()).is_some(),
                "missing {} on serialized sheet",
                pos.tag()
            );
        }
    }

    #[test]
    fn slot_mut_targets_the_right_vec() {
        let mut sheet = TeamSheet::default();
        sheet.slot_mut(Position::Mid).push("A".into());
        assert_eq!(sheet.mid, vec!["A".to_string()]);
        assert_eq!(sheet.slot(Position::Mid), ["A".to_string()]);
        assert_eq!(sheet.len(), 1);
    }
}
