use std::env;
use std::str::FromStr;

use crate::error::SimError;
use crate::tables::DEFAULT_TARGET;
use crate::win_prob::NegativePolicy;

pub const DEFAULT_TRIALS: u64 = 10_000;
const MAX_THREADS: usize = 64;

#[derive(Debug, Clone, PartialEq)]
pub struct RunConfig {
    pub trials: u64,
    pub seed: Option<u64>,
    pub target: String,
    pub threads: usize,
    pub print_standings: bool,
    pub negatives: NegativePolicy,
    pub json: bool,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            trials: DEFAULT_TRIALS,
            seed: None,
            target: DEFAULT_TARGET.to_string(),
            threads: 1,
            print_standings: true,
            negatives: NegativePolicy::Clamp,
            json: false,
        }
    }
}

impl RunConfig {
    /// Process environment, then command-line flags on top.
    pub fn from_env() -> Result<Self, SimError> {
        let args = env::args().skip(1).collect::<Vec<_>>();
        Self::resolve(|key| env::var(key).ok(), &args)
    }

    pub fn resolve<F>(lookup: F, args: &[String]) -> Result<Self, SimError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let opt = |key: &str| {
            lookup(key).and_then(|val| {
                if val.trim().is_empty() {
                    None
                } else {
                    Some(val.trim().to_string())
                }
            })
        };

        let mut cfg = RunConfig::default();

        if let Some(raw) = opt("SIM_TRIALS") {
            cfg.trials = parse_num("SIM_TRIALS", &raw)?;
        }
        if let Some(raw) = opt("SIM_SEED") {
            cfg.seed = Some(parse_num("SIM_SEED", &raw)?);
        }
        if let Some(raw) = opt("SIM_TARGET") {
            cfg.target = raw.to_ascii_lowercase();
        }
        if let Some(raw) = opt("SIM_THREADS") {
            cfg.threads = parse_num("SIM_THREADS", &raw)?;
        }
        if let Some(raw) = opt("SIM_PRINT_STANDINGS") {
            cfg.print_standings = parse_bool("SIM_PRINT_STANDINGS", &raw)?;
        }
        if let Some(raw) = opt("SIM_NEGATIVE_POLICY") {
            cfg.negatives = parse_policy("SIM_NEGATIVE_POLICY", &raw)?;
        }
        if let Some(raw) = opt("SIM_JSON") {
            cfg.json = parse_bool("SIM_JSON", &raw)?;
        }

        if let Some(raw) = arg_value(args, "--trials") {
            cfg.trials = parse_num("--trials", &raw)?;
        }
        if let Some(raw) = arg_value(args, "--seed") {
            cfg.seed = Some(parse_num("--seed", &raw)?);
        }
        if let Some(raw) = arg_value(args, "--target") {
            cfg.target = raw.trim().to_ascii_lowercase();
        }
        if let Some(raw) = arg_value(args, "--threads") {
            cfg.threads = parse_num("--threads", &raw)?;
        }
        if let Some(raw) = arg_value(args, "--negatives") {
            cfg.negatives = parse_policy("--negatives", &raw)?;
        }
        if has_flag(args, "--quiet") {
            cfg.print_standings = false;
        }
        if has_flag(args, "--json") {
            cfg.json = true;
        }

        if cfg.trials == 0 {
            return Err(SimError::NoTrials);
        }
        cfg.threads = cfg.threads.clamp(1, MAX_THREADS);
        Ok(cfg)
    }

    pub fn seed_or_random(&self) -> u64 {
        self.seed.unwrap_or_else(rand::random::<u64>)
    }
}

fn parse_num<T: FromStr>(key: &'static str, raw: &str) -> Result<T, SimError> {
    raw.trim()
        .replace('_', "")
        .parse::<T>()
        .map_err(|_| SimError::InvalidConfig {
            key,
            value: raw.to_string(),
        })
}

fn parse_bool(key: &'static str, raw: &str) -> Result<bool, SimError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(SimError::InvalidConfig {
            key,
            value: raw.to_string(),
        }),
    }
}

fn parse_policy(key: &'static str, raw: &str) -> Result<NegativePolicy, SimError> {
    NegativePolicy::parse(raw).ok_or_else(|| SimError::InvalidConfig {
        key,
        value: raw.to_string(),
    })
}

fn has_flag(args: &[String], name: &str) -> bool {
    args.iter().any(|arg| arg == name)
}

fn arg_value(args: &[String], name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    for (idx, arg) in args.iter().enumerate() {
        if let Some(raw) = arg.strip_prefix(&prefix) {
            return Some(raw.to_string());
        }
        if arg == name
            && let Some(next) = args.get(idx + 1)
        {
            return Some(next.clone());
        }
    }
    None
}
