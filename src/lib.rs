pub mod calibration;
pub mod config;
pub mod elo;
pub mod error;
pub mod simulate;
pub mod tables;
pub mod tournament;
pub mod win_prob;

pub use calibration::{Outcome, Prob3};
pub use config::RunConfig;
pub use error::SimError;
pub use simulate::{Band, SimulationReport, Simulator, TrialResult};
pub use tournament::{Fixture, PastResult, Team, Tournament};
pub use win_prob::{MatchTable, ModelParams, NegativePolicy};
