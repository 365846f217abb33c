use log::debug;

use crate::calibration::Prob3;
use crate::elo::expected_score;
use crate::error::SimError;
use crate::tournament::{Pairing, TeamResult, Tournament};

pub const BASE_DRAW: f64 = 0.25;
pub const HOME_ADVANTAGE: f64 = 0.10;
pub const MAX_RANK_BOOST: f64 = 0.05;
pub const MAX_FORM_BOOST: f64 = 0.05;

const UNDERDOG_DRAW_SHARE: f64 = 0.6;
const FAVOURITE_DRAW_SHARE: f64 = 0.5;
const SUM_TOLERANCE: f64 = 1e-9;

// Treatment of provisional probabilities pushed below zero before rescaling.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum NegativePolicy {
    #[default]
    Clamp,
    PassThrough,
}

impl NegativePolicy {
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "clamp" => Some(Self::Clamp),
            "pass-through" | "passthrough" | "pass_through" => Some(Self::PassThrough),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ModelParams {
    pub base_draw: f64,
    pub home_advantage: f64,
    pub max_rank_boost: f64,
    pub max_form_boost: f64,
    pub negatives: NegativePolicy,
}

impl Default for ModelParams {
    fn default() -> Self {
        Self {
            base_draw: BASE_DRAW,
            home_advantage: HOME_ADVANTAGE,
            max_rank_boost: MAX_RANK_BOOST,
            max_form_boost: MAX_FORM_BOOST,
            negatives: NegativePolicy::Clamp,
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Boost {
    pub home: f64,
    pub away: f64,
}

pub fn compute_match_prob(
    tournament: &Tournament,
    pairing: Pairing,
    params: &ModelParams,
) -> Result<Prob3, SimError> {
    let (Some(home), Some(away)) = (tournament.get(pairing.home), tournament.get(pairing.away))
    else {
        return Err(SimError::PairingOutOfRange {
            home: pairing.home,
            away: pairing.away,
            teams: tournament.teams().len(),
        });
    };

    let mut p_home = expected_score(home.rating, away.rating);
    let p_draw = params.base_draw;
    // Provisional; can go negative until normalization.
    let mut p_away = 1.0 - p_home - p_draw;

    let rank = rank_boost(tournament, pairing, params.max_rank_boost);
    p_home += rank.home;
    p_away += rank.away;

    p_home += form_boost(tournament, pairing.home, params.max_form_boost);
    p_away += form_boost(tournament, pairing.away, params.max_form_boost);

    p_home += params.home_advantage;

    normalize(p_home, p_draw, p_away, params.negatives)
        .and_then(validate_prob)
        .map_err(|reason| SimError::MalformedDistribution {
            home: home.code.clone(),
            away: away.code.clone(),
            reason,
        })
}

fn rank_boost(tournament: &Tournament, pairing: Pairing, max_boost: f64) -> Boost {
    let spread = tournament.rank_spread();
    if spread == 0 {
        return Boost::default();
    }

    let home_rank = tournament.team(pairing.home).rank;
    let away_rank = tournament.team(pairing.away).rank;
    let gap = home_rank.abs_diff(away_rank) as f64;
    let boost = (max_boost * gap / spread as f64).min(max_boost);

    if home_rank < away_rank {
        Boost {
            home: boost,
            away: 0.0,
        }
    } else if away_rank < home_rank {
        Boost {
            home: 0.0,
            away: boost,
        }
    } else {
        Boost::default()
    }
}

fn form_boost(tournament: &Tournament, team: usize, max_boost: f64) -> f64 {
    let spread = tournament.rating_spread();
    let rating = tournament.team(team).rating;

    tournament
        .results_for(team)
        .map(|(opponent, result)| {
            form_contribution(
                rating,
                tournament.team(opponent).rating,
                spread,
                max_boost,
                result,
            )
        })
        .sum()
}

fn form_contribution(
    rating: f64,
    opponent_rating: f64,
    spread: f64,
    max_boost: f64,
    result: TeamResult,
) -> f64 {
    if spread <= 0.0 {
        return 0.0;
    }
    let weight = (rating - opponent_rating).abs() / spread;
    let base = max_boost * weight;
    let underdog = rating < opponent_rating;

    match (underdog, result) {
        (true, TeamResult::Win) => base,
        (true, TeamResult::Draw) => base * UNDERDOG_DRAW_SHARE,
        (true, TeamResult::Loss) => 0.0,
        (false, TeamResult::Win) => 0.0,
        (false, TeamResult::Draw) => -base * FAVOURITE_DRAW_SHARE,
        (false, TeamResult::Loss) => -base,
    }
}

fn normalize(home: f64, draw: f64, away: f64, policy: NegativePolicy) -> Result<Prob3, String> {
    let (home, draw, away) = match policy {
        NegativePolicy::Clamp => (home.max(0.0), draw.max(0.0), away.max(0.0)),
        NegativePolicy::PassThrough => (home, draw, away),
    };
    let total = home + draw + away;
    if !total.is_finite() || total <= 0.0 {
        return Err(format!("provisional total {total} cannot be normalized"));
    }
    Ok(Prob3 {
        home: home / total,
        draw: draw / total,
        away: away / total,
    })
}

pub fn validate_prob(p: Prob3) -> Result<Prob3, String> {
    for (label, value) in [("home", p.home), ("draw", p.draw), ("away", p.away)] {
        if !value.is_finite() {
            return Err(format!("{label} probability is not finite"));
        }
        if !(0.0..=1.0).contains(&value) {
            return Err(format!("{label} probability {value:.6} outside [0, 1]"));
        }
    }
    let sum = p.sum();
    if (sum - 1.0).abs() > SUM_TOLERANCE {
        return Err(format!("probabilities sum to {sum}"));
    }
    Ok(p)
}

#[derive(Debug, Clone)]
pub struct MatchTable {
    teams: Vec<String>,
    entries: Vec<(Pairing, Prob3)>,
}

impl MatchTable {
    pub fn build(tournament: &Tournament, params: &ModelParams) -> Result<Self, SimError> {
        let mut entries = Vec::with_capacity(tournament.schedule().len());
        for &pairing in tournament.schedule() {
            let p = compute_match_prob(tournament, pairing, params)?;
            debug!(
                "{} vs {}: home {:.4} draw {:.4} away {:.4}",
                tournament.team(pairing.home).code,
                tournament.team(pairing.away).code,
                p.home,
                p.draw,
                p.away
            );
            entries.push((pairing, p));
        }
        Ok(Self {
            teams: tournament.codes().map(str::to_string).collect(),
            entries,
        })
    }

    // Pairings index the team table they were built from.
    pub fn ensure_built_for(&self, tournament: &Tournament) -> Result<(), SimError> {
        if self.teams.iter().map(String::as_str).eq(tournament.codes()) {
            return Ok(());
        }
        Err(SimError::TableMismatch {
            table: self.teams.join(", "),
            tournament: tournament.codes().collect::<Vec<_>>().join(", "),
        })
    }

    pub fn entries(&self) -> &[(Pairing, Prob3)] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}
