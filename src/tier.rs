// src/tier.rs
//! View-count decoration tiers.

use serde::{Deserialize, Serialize};

pub const DEFAULT_NEW_BELOW: u64 = 100;
pub const DEFAULT_POPULAR_ABOVE: u64 = 1000;

/// Badge tier derived from a view count. Never stored on the item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DecorationTier {
    New,
    Popular,
    None,
}

impl DecorationTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            DecorationTier::New => "new",
            DecorationTier::Popular => "popular",
            DecorationTier::None => "none",
        }
    }
}

/// Tier boundaries. `New` is `views < new_below`, `Popular` is
/// `views > popular_above`, everything in between is undecorated.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Thresholds {
    #[serde(default = "default_new_below")]
    pub new_below: u64,
    #[serde(default = "default_popular_above")]
    pub popular_above: u64,
}

fn default_new_below() -> u64 {
    DEFAULT_NEW_BELOW
}

fn default_popular_above() -> u64 {
    DEFAULT_POPULAR_ABOVE
}

impl Default for Thresholds {
    fn default() -> Self {
        Self {
            new_below: DEFAULT_NEW_BELOW,
            popular_above: DEFAULT_POPULAR_ABOVE,
        }
    }
}

impl Thresholds {
    pub fn new(new_below: u64, popular_above: u64) -> Self {
        Self {
            new_below,
            popular_above,
        }
    }

    /// The `New` check runs first, so it wins when the ranges overlap.
    pub fn classify(&self, views: u64) -> DecorationTier {
        if views < self.new_below {
            return DecorationTier::New;
        }
        if views > self.popular_above {
            return DecorationTier::Popular;
        }
        DecorationTier::None
    }

    /// True when some view count would satisfy both the `New` and `Popular` tests.
    pub fn overlaps(&self) -> bool {
        self.new_below > self.popular_above.saturating_add(1)
    }
}

/// Classify with the default 100 / 1000 boundaries.
pub fn classify(views: u64) -> DecorationTier {
    Thresholds::default().classify(views)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_boundaries() {
        assert_eq!(classify(0), DecorationTier::New);
        assert_eq!(classify(99), DecorationTier::New);
        assert_eq!(classify(100), DecorationTier::None);
        assert_eq!(classify(1000), DecorationTier::None);
        assert_eq!(classify(1001), DecorationTier::Popular);
        assert_eq!(classify(u64::MAX), DecorationTier::Popular);
    }

    #[test]
    fn custom_thresholds_shift_boundaries() {
        let t = Thresholds::new(10, 20);
        assert_eq!(t.classify(9), DecorationTier::New);
        assert_eq!(t.classify(10), DecorationTier::None);
        assert_eq!(t.classify(20), DecorationTier::None);
        assert_eq!(t.classify(21), DecorationTier::Popular);
        assert!(!t.overlaps());
    }

    #[test]
    fn new_wins_when_ranges_overlap() {
        let t = Thresholds::new(500, 100);
        assert!(t.overlaps());
        assert_eq!(t.classify(300), DecorationTier::New);
        assert_eq!(t.classify(600), DecorationTier::Popular);
        // adjacent ranges leave no gap but do not overlap
        assert!(!Thresholds::new(101, 100).overlaps());
    }
}
