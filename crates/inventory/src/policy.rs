//! Daily aging rules, one variant per drug category.
//!
//! Categories form a closed set. A drug's name picks its category by exact,
//! case-sensitive comparison; anything unrecognized ages as [`AgingPolicy::Standard`].
//!
//! Any `i64` is accepted, so every step saturates rather than overflowing.

use core::str::FromStr;

use serde::{Deserialize, Serialize};

use pharmacy_core::DomainError;

use crate::drug::{Drug, MAX_BENEFIT, MIN_BENEFIT};

pub const HERBAL_TEA: &str = "Herbal Tea";
pub const MAGIC_PILL: &str = "Magic Pill";
pub const FERVEX: &str = "Fervex";
pub const DAFALGAN: &str = "Dafalgan";

/// Fervex gains +3 per day at or under this many days left.
pub const FERVEX_URGENT_DAYS: i64 = 5;

/// Fervex gains +2 per day at or under this many days left.
pub const FERVEX_NEAR_DAYS: i64 = 10;

#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgingPolicy {
    /// Benefit decays by 1 per day, 2 once expired.
    Standard,
    /// Benefit grows by 1 per day, 2 once expired, capped at 50.
    HerbalTea,
    /// Never changes.
    MagicPill,
    /// Benefit grows faster as expiration nears, then drops to 0.
    Fervex,
    /// Standard decay at twice the rate.
    Dafalgan,
}

impl AgingPolicy {
    pub const ALL: [AgingPolicy; 5] = [
        AgingPolicy::Standard,
        AgingPolicy::HerbalTea,
        AgingPolicy::MagicPill,
        AgingPolicy::Fervex,
        AgingPolicy::Dafalgan,
    ];

    /// Select the policy governing a drug name. Total: never fails.
    pub fn for_name(name: &str) -> Self {
        match name {
            HERBAL_TEA => AgingPolicy::HerbalTea,
            MAGIC_PILL => AgingPolicy::MagicPill,
            FERVEX => AgingPolicy::Fervex,
            DAFALGAN => AgingPolicy::Dafalgan,
            _ => AgingPolicy::Standard,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            AgingPolicy::Standard => "standard",
            AgingPolicy::HerbalTea => "herbal_tea",
            AgingPolicy::MagicPill => "magic_pill",
            AgingPolicy::Fervex => "fervex",
            AgingPolicy::Dafalgan => "dafalgan",
        }
    }

    /// Age `drug` by one day in place.
    pub fn apply(self, drug: &mut Drug) {
        match self {
            AgingPolicy::Standard => decay(drug, 1),
            AgingPolicy::HerbalTea => age_herbal_tea(drug),
            AgingPolicy::MagicPill => {}
            AgingPolicy::Fervex => age_fervex(drug),
            AgingPolicy::Dafalgan => decay(drug, 2),
        }
    }
}

/// Select the policy for a drug (by name only).
pub fn select_policy(drug: &Drug) -> AgingPolicy {
    AgingPolicy::for_name(drug.name())
}

impl core::fmt::Display for AgingPolicy {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for AgingPolicy {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        AgingPolicy::ALL
            .into_iter()
            .find(|policy| policy.label() == s)
            .ok_or_else(|| DomainError::validation(format!("unknown aging policy: {s}")))
    }
}

/// Standard decay; Dafalgan is the same rule with `rate` = 2.
fn decay(drug: &mut Drug, rate: i64) {
    if drug.benefit > MIN_BENEFIT {
        drug.benefit = drug.benefit.saturating_sub(rate);
    }
    drug.expires_in = drug.expires_in.saturating_sub(1);
    if drug.expires_in < 0 && drug.benefit > MIN_BENEFIT {
        drug.benefit = drug.benefit.saturating_sub(rate);
    }
    drug.benefit = drug.benefit.max(MIN_BENEFIT);
}

fn age_herbal_tea(drug: &mut Drug) {
    if drug.benefit < MAX_BENEFIT {
        drug.benefit = drug.benefit.saturating_add(1);
    }
    drug.expires_in = drug.expires_in.saturating_sub(1);
    if drug.expires_in < 0 && drug.benefit < MAX_BENEFIT {
        drug.benefit = drug.benefit.saturating_add(1);
    }
    drug.benefit = drug.benefit.min(MAX_BENEFIT);
}

fn age_fervex(drug: &mut Drug) {
    // Tiers read the count before today's decrement.
    if drug.expires_in > 0 {
        let gain = if drug.expires_in <= FERVEX_URGENT_DAYS {
            3
        } else if drug.expires_in <= FERVEX_NEAR_DAYS {
            2
        } else {
            1
        };
        drug.benefit = drug.benefit.saturating_add(gain);
    } else {
        drug.benefit = 0;
    }
    drug.expires_in = drug.expires_in.saturating_sub(1);
    drug.benefit = drug.benefit.min(MAX_BENEFIT);
}
