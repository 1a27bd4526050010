// src/game_id.rs

use std::fmt;

use crate::{error::ScrapeError, teams::normalize_team_code};

/// Join key for one game: season, week and both canonical team codes.
///
/// Teams keep the order they appear in the descriptor (away before home on
/// the source site); they are never sorted.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct GameId {
    pub season: u16,
    pub week: u8,
    pub away: String,
    pub home: String,
}

impl GameId {
    /// Build the id for a `"AWAY @ HOME"` descriptor.
    ///
    /// Anything after the first space of each side (scores, records) is
    /// ignored, so `"NE 24 @ KC 27"` and `"NE @ KC"` give the same id.
    pub fn from_descriptor(descriptor: &str, season: u16, week: u8) -> Result<Self, ScrapeError> {
        let fragments: Vec<&str> = descriptor.split('@').collect();
        let [away, home] = fragments[..] else {
            return Err(ScrapeError::MalformedDescriptor {
                descriptor: descriptor.to_string(),
                separators: fragments.len() - 1,
            });
        };
        Ok(Self {
            season,
            week,
            away: team_token(away).to_string(),
            home: team_token(home).to_string(),
        })
    }

    pub fn teams(&self) -> [&str; 2] {
        [&self.away, &self.home]
    }
}

fn team_token(fragment: &str) -> &str {
    let token = fragment.trim().split(' ').next().unwrap_or_default();
    normalize_team_code(token)
}

impl fmt::Display for GameId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}_{:02}_{}_{}",
            self.season, self.week, self.away, self.home
        )
    }
}

/// Game id string for `descriptor` in the given season and week.
pub fn synthesize(descriptor: &str, season: u16, week: u8) -> Result<String, ScrapeError> {
    GameId::from_descriptor(descriptor, season, week).map(|id| id.to_string())
}
