//! Runner configuration: CLI flags, optional JSON file, environment.
//!
//! Precedence, highest first: command-line flag, JSON config file,
//! `BLOCKFALL_SEED` (seed only), built-in default.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{anyhow, Context, Result};
use clap::Parser;
use serde::{Deserialize, Serialize};

use crate::core::SessionConfig;
use crate::types::PacingPolicy;

/// Environment variable consulted for the randomizer seed.
pub const SEED_ENV: &str = "BLOCKFALL_SEED";

/// Terminal falling-block puzzle game.
#[derive(Parser, Debug, Clone, Default, PartialEq, Eq)]
#[command(version, about, long_about = None)]
pub struct Args {
    /// Board width in cells.
    #[arg(long)]
    pub width: Option<u8>,

    /// Board height in cells.
    #[arg(long)]
    pub height: Option<u8>,

    /// Initial tick interval in milliseconds.
    #[arg(long = "interval-ms")]
    pub interval_ms: Option<u32>,

    /// Scoring and pacing policy: flat or weighted.
    #[arg(long, value_parser = parse_policy)]
    pub policy: Option<PacingPolicy>,

    /// Randomizer seed for a reproducible piece sequence.
    #[arg(long)]
    pub seed: Option<u64>,

    /// JSON file with default settings.
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Print the effective configuration as JSON and exit.
    #[arg(long = "print-config")]
    pub print_config: bool,
}

fn parse_policy(s: &str) -> std::result::Result<PacingPolicy, String> {
    PacingPolicy::from_str(s).ok_or_else(|| format!("unknown policy '{}' (flat|weighted)", s))
}

/// On-disk form of the settings. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub width: Option<u8>,
    pub height: Option<u8>,
    pub interval_ms: Option<u32>,
    pub policy: Option<String>,
    pub seed: Option<u64>,
}

impl FileConfig {
    pub fn load(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("config: cannot read {}", path.display()))?;
        Self::parse(&text).with_context(|| format!("config: invalid {}", path.display()))
    }

    pub fn parse(text: &str) -> Result<Self> {
        Ok(serde_json::from_str(text)?)
    }

    fn policy(&self) -> Result<Option<PacingPolicy>> {
        self.policy
            .as_deref()
            .map(|s| PacingPolicy::from_str(s).ok_or_else(|| anyhow!("config: unknown policy '{}'", s)))
            .transpose()
    }
}

impl From<&SessionConfig> for FileConfig {
    fn from(config: &SessionConfig) -> Self {
        Self {
            width: Some(config.width),
            height: Some(config.height),
            interval_ms: Some(config.initial_interval_ms),
            policy: Some(config.policy.as_str().to_string()),
            seed: config.seed,
        }
    }
}

/// Merge flags, file and environment into a validated session config.
pub fn resolve(args: &Args, file: &FileConfig, env_seed: Option<&str>) -> Result<SessionConfig> {
    let defaults = SessionConfig::default();

    let env_seed = env_seed
        .map(|s| {
            s.trim()
                .parse::<u64>()
                .map_err(|_| anyhow!("config: {} is not a number: {}", SEED_ENV, s))
        })
        .transpose()?;

    let config = SessionConfig {
        width: args.width.or(file.width).unwrap_or(defaults.width),
        height: args.height.or(file.height).unwrap_or(defaults.height),
        initial_interval_ms: args
            .interval_ms
            .or(file.interval_ms)
            .unwrap_or(defaults.initial_interval_ms),
        policy: match args.policy {
            Some(policy) => policy,
            None => file.policy()?.unwrap_or(defaults.policy),
        },
        seed: args.seed.or(file.seed).or(env_seed),
    };

    config.validate().map_err(|e| anyhow!("config: {}", e))?;
    Ok(config)
}

/// Load everything the runner needs from the process environment.
pub fn from_env(args: &Args) -> Result<SessionConfig> {
    let file = match &args.config {
        Some(path) => FileConfig::load(path)?,
        None => FileConfig::default(),
    };
    let env_seed = std::env::var(SEED_ENV).ok();
    resolve(args, &file, env_seed.as_deref())
}

/// Pretty JSON for `--print-config`.
pub fn to_json(config: &SessionConfig) -> Result<String> {
    Ok(serde_json::to_string_pretty(&FileConfig::from(config))?)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_nothing_given() {
        let config = resolve(&Args::default(), &FileConfig::default(), None).unwrap();
        assert_eq!(config, SessionConfig::default());
    }

    #[test]
    fn flag_beats_file_beats_env() {
        let file = FileConfig::parse(r#"{ "width": 12, "seed": 5, "policy": "weighted" }"#).unwrap();
        let args = Args {
            width: Some(8),
            ..Args::default()
        };
        let config = resolve(&args, &file, Some("99")).unwrap();
        assert_eq!(config.width, 8);
        assert_eq!(config.seed, Some(5));
        assert_eq!(config.policy, PacingPolicy::Weighted);

        let config = resolve(&Args::default(), &FileConfig::default(), Some(" 99 ")).unwrap();
        assert_eq!(config.seed, Some(99));
    }

    #[test]
    fn rejects_bad_values() {
        let args = Args {
            height: Some(2),
            ..Args::default()
        };
        assert!(resolve(&args, &FileConfig::default(), None).is_err());
        assert!(resolve(&Args::default(), &FileConfig::default(), Some("abc")).is_err());

        let file = FileConfig::parse(r#"{ "policy": "fast" }"#).unwrap();
        assert!(resolve(&Args::default(), &file, None).is_err());
        assert!(FileConfig::parse(r#"{ "colour": "red" }"#).is_err());
    }

    #[test]
    fn cli_parses_policy() {
        let args = Args::try_parse_from(["blockfall", "--policy", "Weighted", "--seed", "3"]).unwrap();
        assert_eq!(args.policy, Some(PacingPolicy::Weighted));
        assert_eq!(args.seed, Some(3));
        assert!(Args::try_parse_from(["blockfall", "--policy", "nope"]).is_err());
    }

    #[test]
    fn print_config_round_trips() {
        let config = SessionConfig::default().with_seed(7);
        let json = to_json(&config).unwrap();
        let file = FileConfig::parse(&json).unwrap();
        assert_eq!(resolve(&Args::default(), &file, None).unwrap(), config);
    }
}
