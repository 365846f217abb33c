use std::collections::HashMap;

use crate::calibration::Outcome;
use crate::error::SimError;

#[derive(Debug, Clone, PartialEq)]
pub struct Team {
    pub code: String,
    pub rating: f64,
    // Lower is stronger.
    pub rank: u32,
    pub points: u32,
}

impl Team {
    pub fn new(code: impl Into<String>, rating: f64, rank: u32, points: u32) -> Self {
        Self {
            code: code.into(),
            rating,
            rank,
            points,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fixture {
    pub home: String,
    pub away: String,
}

impl Fixture {
    pub fn new(home: impl Into<String>, away: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PastResult {
    pub home: String,
    pub away: String,
    pub outcome: Outcome,
}

impl PastResult {
    pub fn new(home: impl Into<String>, away: impl Into<String>, outcome: Outcome) -> Self {
        Self {
            home: home.into(),
            away: away.into(),
            outcome,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Side {
    Home,
    Away,
}

// A past result seen from one team's side.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TeamResult {
    Win,
    Draw,
    Loss,
}

impl TeamResult {
    pub fn from_side(side: Side, outcome: Outcome) -> Self {
        match (side, outcome) {
            (Side::Home, Outcome::Home) => TeamResult::Win,
            (Side::Home, Outcome::Draw) => TeamResult::Draw,
            (Side::Home, Outcome::Away) => TeamResult::Loss,
            (Side::Away, Outcome::Home) => TeamResult::Loss,
            (Side::Away, Outcome::Draw) => TeamResult::Draw,
            (Side::Away, Outcome::Away) => TeamResult::Win,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Pairing {
    pub home: usize,
    pub away: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Played {
    pub pairing: Pairing,
    pub outcome: Outcome,
}

// Team order is the table order used to break ties in the standings.
#[derive(Debug, Clone)]
pub struct Tournament {
    teams: Vec<Team>,
    index: HashMap<String, usize>,
    history: Vec<Played>,
    schedule: Vec<Pairing>,
}

impl Tournament {
    pub fn new(
        teams: Vec<Team>,
        history: &[PastResult],
        schedule: &[Fixture],
    ) -> Result<Self, SimError> {
        if teams.is_empty() {
            return Err(SimError::EmptyRoster);
        }

        let mut index = HashMap::with_capacity(teams.len());
        for (idx, team) in teams.iter().enumerate() {
            if index.insert(team.code.clone(), idx).is_some() {
                return Err(SimError::DuplicateTeam(team.code.clone()));
            }
        }

        let resolve = |context: &'static str, home: &str, away: &str| -> Result<Pairing, SimError> {
            let lookup = |code: &str| {
                index.get(code).copied().ok_or_else(|| SimError::UnknownTeam {
                    context,
                    code: code.to_string(),
                })
            };
            let pairing = Pairing {
                home: lookup(home)?,
                away: lookup(away)?,
            };
            if pairing.home == pairing.away {
                return Err(SimError::SelfMatch {
                    context,
                    code: home.to_string(),
                });
            }
            Ok(pairing)
        };

        let history = history
            .iter()
            .map(|r| {
                Ok(Played {
                    pairing: resolve("match history", &r.home, &r.away)?,
                    outcome: r.outcome,
                })
            })
            .collect::<Result<Vec<_>, SimError>>()?;

        let schedule = schedule
            .iter()
            .map(|f| resolve("schedule", &f.home, &f.away))
            .collect::<Result<Vec<_>, SimError>>()?;

        Ok(Self {
            teams,
            index,
            history,
            schedule,
        })
    }

    pub fn teams(&self) -> &[Team] {
        &self.teams
    }

    pub fn team(&self, idx: usize) -> &Team {
        &self.teams[idx]
    }

    pub fn get(&self, idx: usize) -> Option<&Team> {
        self.teams.get(idx)
    }

    pub fn codes(&self) -> impl Iterator<Item = &str> + '_ {
        self.teams.iter().map(|t| t.code.as_str())
    }

    pub fn index_of(&self, code: &str) -> Option<usize> {
        self.index.get(code).copied()
    }

    pub fn history(&self) -> &[Played] {
        &self.history
    }

    pub fn schedule(&self) -> &[Pairing] {
        &self.schedule
    }

    pub fn rating_spread(&self) -> f64 {
        let (lo, hi) = self
            .teams
            .iter()
            .fold((f64::INFINITY, f64::NEG_INFINITY), |(lo, hi), t| {
                (lo.min(t.rating), hi.max(t.rating))
            });
        hi - lo
    }

    pub fn rank_spread(&self) -> u32 {
        let lo = self.teams.iter().map(|t| t.rank).min().unwrap_or(0);
        let hi = self.teams.iter().map(|t| t.rank).max().unwrap_or(0);
        hi - lo
    }

    // (opponent, result from `team`'s side) for each past meeting.
    pub fn results_for(&self, team: usize) -> impl Iterator<Item = (usize, TeamResult)> + '_ {
        self.history.iter().filter_map(move |p| {
            if p.pairing.home == team {
                Some((p.pairing.away, TeamResult::from_side(Side::Home, p.outcome)))
            } else if p.pairing.away == team {
                Some((p.pairing.home, TeamResult::from_side(Side::Away, p.outcome)))
            } else {
                None
            }
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Vec<Team> {
        vec![
            Team::new("aaa", 1800.0, 10, 6),
            Team::new("bbb", 1600.0, 40, 3),
            Team::new("ccc", 1400.0, 90, 0),
        ]
    }

    #[test]
    fn rejects_empty_roster() {
        let err = Tournament::new(Vec::new(), &[], &[]).unwrap_err();
        assert_eq!(err, SimError::EmptyRoster);
    }

    #[test]
    fn rejects_duplicate_codes() {
        let mut teams = roster();
        teams.push(Team::new("bbb", 1500.0, 50, 0));
        let err = Tournament::new(teams, &[], &[]).unwrap_err();
        assert_eq!(err, SimError::DuplicateTeam("bbb".to_string()));
    }

    #[test]
    fn rejects_unknown_team_in_schedule() {
        let err = Tournament::new(roster(), &[], &[Fixture::new("aaa", "zzz")]).unwrap_err();
        assert_eq!(
            err,
            SimError::UnknownTeam {
                context: "schedule",
                code: "zzz".to_string()
            }
        );
    }

    #[test]
    fn rejects_unknown_team_in_history() {
        let history = [PastResult::new("qqq", "aaa", Outcome::Draw)];
        let err = Tournament::new(roster(), &history, &[]).unwrap_err();
        assert!(matches!(err, SimError::UnknownTeam { context: "match history", .. }));
    }

    #[test]
    fn rejects_self_match() {
        let err = Tournament::new(roster(), &[], &[Fixture::new("ccc", "ccc")]).unwrap_err();
        assert!(matches!(err, SimError::SelfMatch { .. }));
    }

    #[test]
    fn spreads_span_the_table() {
        let t = Tournament::new(roster(), &[], &[]).unwrap();
        assert!((t.rating_spread() - 400.0).abs() < 1e-12);
        assert_eq!(t.rank_spread(), 80);
    }

    #[test]
    fn results_are_seen_from_each_side() {
        let history = [
            PastResult::new("aaa", "bbb", Outcome::Away),
            PastResult::new("ccc", "aaa", Outcome::Away),
            PastResult::new("bbb", "ccc", Outcome::Draw),
        ];
        let t = Tournament::new(roster(), &history, &[]).unwrap();

        let a: Vec<_> = t.results_for(0).collect();
        assert_eq!(a, vec![(1, TeamResult::Loss), (2, TeamResult::Win)]);

        let b: Vec<_> = t.results_for(1).collect();
        assert_eq!(b, vec![(0, TeamResult::Win), (2, TeamResult::Draw)]);
    }
}
