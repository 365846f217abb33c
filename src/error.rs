use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SimError {
    #[error("tournament has no teams")]
    EmptyRoster,

    #[error("team `{0}` is listed more than once")]
    DuplicateTeam(String),

    #[error("{context} references unknown team `{code}`")]
    UnknownTeam { context: &'static str, code: String },

    #[error("{context} pairs team `{code}` with itself")]
    SelfMatch { context: &'static str, code: String },

    #[error("target team `{0}` is not part of the tournament")]
    UnknownTarget(String),

    #[error("pairing {home} vs {away} is outside a table of {teams} teams")]
    PairingOutOfRange {
        home: usize,
        away: usize,
        teams: usize,
    },

    #[error("match table was built for teams [{table}], tournament has [{tournament}]")]
    TableMismatch { table: String, tournament: String },

    #[error("trial count must be greater than zero")]
    NoTrials,

    #[error("invalid value for {key}: `{value}`")]
    InvalidConfig { key: &'static str, value: String },

    #[error("malformed distribution for {home} vs {away}: {reason}")]
    MalformedDistribution {
        home: String,
        away: String,
        reason: String,
    },
}
