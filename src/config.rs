// src/config.rs
//! Renderer configuration: tier thresholds and the feed to serve.

use anyhow::{anyhow, Context, Result};
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

use crate::tier::Thresholds;

// --- env defaults & names ---
pub const DEFAULT_FEED_CONFIG_PATH: &str = "config/feed.toml";

pub const ENV_FEED_CONFIG_PATH: &str = "FEED_CONFIG_PATH";
pub const ENV_FEED_NEW_BELOW: &str = "FEED_NEW_BELOW";
pub const ENV_FEED_POPULAR_ABOVE: &str = "FEED_POPULAR_ABOVE";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct FeedConfig {
    /// Feed file (`.json` or `.toml`); the bundled sample is used when unset.
    #[serde(default)]
    pub feed_path: Option<PathBuf>,
    #[serde(default)]
    pub tiers: Thresholds,
}

impl FeedConfig {
    pub fn from_toml_str(s: &str) -> Result<Self> {
        toml::from_str(s).context("parsing feed config")
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("reading feed config from {}", path.display()))?;
        Self::from_toml_str(&content).with_context(|| format!("in {}", path.display()))
    }

    /// Load config using env var + fallbacks:
    /// 1) $FEED_CONFIG_PATH (must exist)
    /// 2) config/feed.toml
    /// 3) built-in defaults
    ///
    /// Then apply $FEED_NEW_BELOW / $FEED_POPULAR_ABOVE on top.
    pub fn load() -> Result<Self> {
        let mut cfg = if let Ok(p) = std::env::var(ENV_FEED_CONFIG_PATH) {
            let pb = PathBuf::from(p);
            if !pb.exists() {
                return Err(anyhow!("{ENV_FEED_CONFIG_PATH} points to non-existent path"));
            }
            Self::load_from(&pb)?
        } else {
            let default = PathBuf::from(DEFAULT_FEED_CONFIG_PATH);
            if default.exists() {
                Self::load_from(&default)?
            } else {
                warn!(target: "feed", path = DEFAULT_FEED_CONFIG_PATH, "no config file, using defaults");
                Self::default()
            }
        };

        if let Some(v) = parse_u64_env(ENV_FEED_NEW_BELOW)? {
            cfg.tiers.new_below = v;
        }
        if let Some(v) = parse_u64_env(ENV_FEED_POPULAR_ABOVE)? {
            cfg.tiers.popular_above = v;
        }
        if cfg.tiers.overlaps() {
            warn!(
                target: "feed",
                new_below = cfg.tiers.new_below,
                popular_above = cfg.tiers.popular_above,
                "tier ranges overlap; New takes precedence"
            );
        }

        info!(
            target: "feed",
            new_below = cfg.tiers.new_below,
            popular_above = cfg.tiers.popular_above,
            feed_path = ?cfg.feed_path,
            "feed config loaded"
        );
        Ok(cfg)
    }
}

fn parse_u64_env(name: &str) -> Result<Option<u64>> {
    match std::env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(Some)
            .with_context(|| format!("{name} must be an unsigned integer, got `{raw}`")),
        Err(_) => Ok(None),
    }
}
