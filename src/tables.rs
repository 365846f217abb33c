//! AFC third-round qualifying, Group C, as of matchday 6.
//!
//! Ratings are World Football Elo points, ranks are FIFA ranks and points are
//! the group table before the remaining fixtures.

use crate::calibration::Outcome;
use crate::error::SimError;
use crate::tournament::{Fixture, PastResult, Team, Tournament};

pub const DEFAULT_TARGET: &str = "idn";

const TEAMS: &[(&str, f64, u32, u32)] = &[
    ("jpn", 1888.0, 13, 16),
    ("aus", 1718.0, 43, 7),
    ("idn", 1317.0, 134, 6),
    ("sau", 1535.0, 75, 6),
    ("bhr", 1528.0, 77, 6),
    ("chn", 1422.0, 98, 6),
];

const REMAINING: &[(&str, &str)] = &[
    ("aus", "idn"),
    ("jpn", "bhr"),
    ("sau", "chn"),
    ("jpn", "sau"),
    ("chn", "aus"),
    ("idn", "bhr"),
    ("idn", "chn"),
    ("aus", "jpn"),
    ("bhr", "sau"),
    ("jpn", "idn"),
    ("chn", "bhr"),
];

const HISTORY: &[(&str, &str, Outcome)] = &[
    ("idn", "sau", Outcome::Home),
    ("idn", "jpn", Outcome::Away),
    ("chn", "idn", Outcome::Home),
    ("bhr", "idn", Outcome::Draw),
    ("idn", "aus", Outcome::Draw),
    ("chn", "jpn", Outcome::Away),
    ("idn", "jpn", Outcome::Away),
    ("jpn", "aus", Outcome::Draw),
    ("sau", "jpn", Outcome::Away),
    ("bhr", "jpn", Outcome::Away),
    ("idn", "sau", Outcome::Home),
    ("aus", "sau", Outcome::Draw),
    ("sau", "bhr", Outcome::Draw),
    ("sau", "jpn", Outcome::Away),
    ("chn", "sau", Outcome::Away),
    ("chn", "jpn", Outcome::Away),
    ("bhr", "chn", Outcome::Away),
    ("chn", "idn", Outcome::Home),
    ("aus", "chn", Outcome::Home),
    ("chn", "sau", Outcome::Away),
    ("bhr", "aus", Outcome::Draw),
    ("bhr", "chn", Outcome::Draw),
    ("sau", "bhr", Outcome::Draw),
    ("bhr", "idn", Outcome::Draw),
    ("bhr", "jpn", Outcome::Away),
    ("bhr", "aus", Outcome::Draw),
    ("aus", "sau", Outcome::Draw),
    ("jpn", "aus", Outcome::Draw),
    ("aus", "chn", Outcome::Home),
    ("idn", "aus", Outcome::Draw),
];

pub fn teams() -> Vec<Team> {
    TEAMS
        .iter()
        .map(|&(code, rating, rank, points)| Team::new(code, rating, rank, points))
        .collect()
}

pub fn remaining_fixtures() -> Vec<Fixture> {
    REMAINING
        .iter()
        .map(|&(home, away)| Fixture::new(home, away))
        .collect()
}

pub fn match_history() -> Vec<PastResult> {
    HISTORY
        .iter()
        .map(|&(home, away, outcome)| PastResult::new(home, away, outcome))
        .collect()
}

pub fn afc_group_c() -> Result<Tournament, SimError> {
    Tournament::new(teams(), &match_history(), &remaining_fixtures())
}
