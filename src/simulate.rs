use log::info;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use rayon::prelude::*;
use serde::Serialize;

use crate::calibration::Outcome;
use crate::error::SimError;
use crate::tournament::Tournament;
use crate::win_prob::MatchTable;

pub const DIRECT_SLOTS: usize = 2;
pub const PLAYOFF_SLOTS: usize = 2;

const POINTS_WIN: u32 = 3;
const POINTS_DRAW: u32 = 1;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Band {
    Direct,
    Playoff,
    Out,
}

pub fn classify(position: usize) -> Band {
    if position < DIRECT_SLOTS {
        Band::Direct
    } else if position < DIRECT_SLOTS + PLAYOFF_SLOTS {
        Band::Playoff
    } else {
        Band::Out
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Standing {
    pub team: usize,
    pub points: u32,
}

// Place `rank_standings` gives `team`, without sorting.
fn finishing_position(points: &[u32], team: usize) -> usize {
    let own = points[team];
    points
        .iter()
        .enumerate()
        .filter(|&(idx, &p)| p > own || (p == own && idx < team))
        .count()
}

// Equal points keep table order.
pub fn rank_standings(points: &[u32]) -> Vec<Standing> {
    let mut standings: Vec<Standing> = points
        .iter()
        .enumerate()
        .map(|(team, &points)| Standing { team, points })
        .collect();
    standings.sort_by(|a, b| b.points.cmp(&a.points));
    standings
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrialResult {
    pub standings: Vec<Standing>,
    pub outcomes: Vec<Outcome>,
    pub target_position: usize,
    pub band: Band,
}

impl TrialResult {
    pub fn describe(&self, tournament: &Tournament) -> String {
        self.standings
            .iter()
            .map(|s| format!("{} {}", tournament.team(s.team).code, s.points))
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimulationReport {
    pub target: String,
    pub seed: u64,
    pub trials: u64,
    pub direct: u64,
    pub playoff: u64,
    // Finishing-position counts, best first.
    pub positions: Vec<u64>,
}

impl SimulationReport {
    fn empty(target: &str, seed: u64, teams: usize) -> Self {
        Self {
            target: target.to_string(),
            seed,
            trials: 0,
            direct: 0,
            playoff: 0,
            positions: vec![0; teams],
        }
    }

    fn record(&mut self, trial: &TrialResult) {
        self.trials += 1;
        match trial.band {
            Band::Direct => self.direct += 1,
            Band::Playoff => self.playoff += 1,
            Band::Out => {}
        }
        self.positions[trial.target_position] += 1;
    }

    fn merge(mut self, other: Self) -> Self {
        self.trials += other.trials;
        self.direct += other.direct;
        self.playoff += other.playoff;
        for (mine, theirs) in self.positions.iter_mut().zip(&other.positions) {
            *mine += theirs;
        }
        self
    }

    pub fn direct_rate(&self) -> f64 {
        rate(self.direct, self.trials)
    }

    pub fn playoff_rate(&self) -> f64 {
        rate(self.playoff, self.trials)
    }

    pub fn summary_lines(&self) -> [String; 2] {
        [
            format!(
                "chance of {} directly qualified for world cup {:.2}%",
                self.target,
                self.direct_rate() * 100.0
            ),
            format!(
                "chance of {} pass to the next round {:.2}%",
                self.target,
                self.playoff_rate() * 100.0
            ),
        ]
    }
}

fn rate(count: u64, trials: u64) -> f64 {
    if trials == 0 {
        0.0
    } else {
        count as f64 / trials as f64
    }
}

// Trial `i` draws from ChaCha stream `i` under the base seed.
pub struct Simulator<'a> {
    tournament: &'a Tournament,
    table: &'a MatchTable,
    target: usize,
    seed: u64,
}

impl<'a> Simulator<'a> {
    pub fn new(
        tournament: &'a Tournament,
        table: &'a MatchTable,
        target: &str,
        seed: u64,
    ) -> Result<Self, SimError> {
        table.ensure_built_for(tournament)?;
        let target = tournament
            .index_of(target)
            .ok_or_else(|| SimError::UnknownTarget(target.to_string()))?;
        Ok(Self {
            tournament,
            table,
            target,
            seed,
        })
    }

    pub fn target_code(&self) -> &str {
        &self.tournament.team(self.target).code
    }

    pub fn run_trial(&self, trial: u64) -> TrialResult {
        let mut rng = ChaCha8Rng::seed_from_u64(self.seed);
        rng.set_stream(trial);

        let mut points: Vec<u32> = self.tournament.teams().iter().map(|t| t.points).collect();
        let mut outcomes = Vec::with_capacity(self.table.len());

        for (pairing, prob) in self.table.entries() {
            let outcome = prob.outcome_at(rng.gen_range(0.0..1.0));
            match outcome {
                Outcome::Home => points[pairing.home] += POINTS_WIN,
                Outcome::Draw => {
                    points[pairing.home] += POINTS_DRAW;
                    points[pairing.away] += POINTS_DRAW;
                }
                Outcome::Away => points[pairing.away] += POINTS_WIN,
            }
            outcomes.push(outcome);
        }

        let target_position = finishing_position(&points, self.target);
        let standings = rank_standings(&points);

        TrialResult {
            standings,
            outcomes,
            target_position,
            band: classify(target_position),
        }
    }

    pub fn run(&self, trials: u64) -> Result<SimulationReport, SimError> {
        self.run_with(trials, |_, _| {})
    }

    pub fn run_with<F>(&self, trials: u64, mut observe: F) -> Result<SimulationReport, SimError>
    where
        F: FnMut(u64, &TrialResult),
    {
        self.announce(trials)?;
        let mut report = self.empty_report();
        for trial in 0..trials {
            let result = self.run_trial(trial);
            observe(trial, &result);
            report.record(&result);
        }
        Ok(report)
    }

    pub fn run_parallel(
        &self,
        trials: u64,
        pool: &rayon::ThreadPool,
    ) -> Result<SimulationReport, SimError> {
        self.announce(trials)?;
        let report = pool.install(|| {
            (0..trials)
                .into_par_iter()
                .fold(
                    || self.empty_report(),
                    |mut acc, trial| {
                        acc.record(&self.run_trial(trial));
                        acc
                    },
                )
                .reduce(|| self.empty_report(), SimulationReport::merge)
        });
        Ok(report)
    }

    fn announce(&self, trials: u64) -> Result<(), SimError> {
        if trials == 0 {
            return Err(SimError::NoTrials);
        }
        info!(
            "simulating {} trials of {} fixtures for {} (seed {})",
            trials,
            self.table.len(),
            self.target_code(),
            self.seed
        );
        Ok(())
    }

    fn empty_report(&self) -> SimulationReport {
        SimulationReport::empty(self.target_code(), self.seed, self.tournament.teams().len())
    }
}
