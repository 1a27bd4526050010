// src/calendar.rs

use std::{fmt, str::FromStr};

use crate::error::ScrapeError;

/// Season years in the order the site embeds them on every page, newest first.
static SEASON_BY_POSITION: [u16; 13] = [
    2019, 2018, 2017, 2016, 2015, 2014, 2013, 2012, 2011, 2010, 2009, 2008, 2007,
];

pub const REGULAR_SEASON_WEEKS: u8 = 17;

/// Season year of the table at `position` within a page.
pub fn season_for_position(position: usize) -> Result<u16, ScrapeError> {
    SEASON_BY_POSITION
        .get(position)
        .copied()
        .ok_or(ScrapeError::UnknownSeasonPosition(position))
}

/// Postseason rounds, in playing order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Round {
    Wildcard,
    Division,
    Conference,
    Superbowl,
}

impl Round {
    pub const ALL: [Round; 4] = [
        Round::Wildcard,
        Round::Division,
        Round::Conference,
        Round::Superbowl,
    ];

    /// Name used both in the page path and as the lookup key.
    pub fn name(self) -> &'static str {
        match self {
            Round::Wildcard => "wildcard",
            Round::Division => "division",
            Round::Conference => "conference",
            Round::Superbowl => "superbowl",
        }
    }

    /// Week number continuing the regular-season numbering (18..=21).
    pub fn week(self) -> u8 {
        match self {
            Round::Wildcard => 18,
            Round::Division => 19,
            Round::Conference => 20,
            Round::Superbowl => 21,
        }
    }
}

impl FromStr for Round {
    type Err = ScrapeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Round::ALL
            .into_iter()
            .find(|r| r.name() == s)
            .ok_or_else(|| ScrapeError::UnknownRound(s.to_string()))
    }
}

impl fmt::Display for Round {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Week number for a round given by name.
pub fn week_for_round(name: &str) -> Result<u8, ScrapeError> {
    name.parse::<Round>().map(Round::week)
}

/// One scrape target: a regular-season week or a postseason round.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum WeekSpec {
    Regular(u8),
    Postseason(Round),
}

impl WeekSpec {
    /// Every target in scrape order: weeks 1..=17, then the rounds.
    pub fn all() -> Vec<WeekSpec> {
        (1..=REGULAR_SEASON_WEEKS)
            .map(WeekSpec::Regular)
            .chain(Round::ALL.into_iter().map(WeekSpec::Postseason))
            .collect()
    }

    /// Path segment of this target's page.
    pub fn segment(&self) -> String {
        match self {
            WeekSpec::Regular(week) => format!("week-{}", week),
            WeekSpec::Postseason(round) => round.name().to_string(),
        }
    }

    /// Week number shared by regular weeks and postseason rounds.
    pub fn week(&self) -> u8 {
        match self {
            WeekSpec::Regular(week) => *week,
            WeekSpec::Postseason(round) => round.week(),
        }
    }
}

impl fmt::Display for WeekSpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.segment())
    }
}
