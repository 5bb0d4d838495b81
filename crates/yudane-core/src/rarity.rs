//! Gacha-style rarity draw.
//!
//! Every ritual draws one of four tiers. A uniform roll in `[0, 1)` is
//! compared against cumulative thresholds (SSR first, N last). Consecutive
//! visit streaks override the roll with a guaranteed minimum tier.

use rand::Rng;
use serde::{Deserialize, Serialize};

/// Rarity tier of an oracle, from most common to rarest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Rarity {
    /// Normal (70%).
    #[serde(rename = "N")]
    Normal,
    /// Rare (25%).
    #[serde(rename = "R")]
    Rare,
    /// Super rare (4%).
    #[serde(rename = "SR")]
    SuperRare,
    /// Super super rare (1%).
    #[serde(rename = "SSR")]
    SuperSuperRare,
}

impl Rarity {
    /// All tiers in draw order (rarest first).
    pub fn all() -> &'static [Self] {
        &[
            Self::SuperSuperRare,
            Self::SuperRare,
            Self::Rare,
            Self::Normal,
        ]
    }

    /// Short code used in storage (`N`, `R`, `SR`, `SSR`).
    pub fn code(self) -> &'static str {
        match self {
            Self::Normal => "N",
            Self::Rare => "R",
            Self::SuperRare => "SR",
            Self::SuperSuperRare => "SSR",
        }
    }

    /// Star label shown next to the oracle.
    pub fn label(self) -> &'static str {
        match self {
            Self::Normal => "★",
            Self::Rare => "★★",
            Self::SuperRare => "★★★",
            Self::SuperSuperRare => "★★★★",
        }
    }

    /// Probability of drawing this tier without a streak bonus.
    pub fn probability(self) -> f64 {
        match self {
            Self::Normal => 0.70,
            Self::Rare => 0.25,
            Self::SuperRare => 0.04,
            Self::SuperSuperRare => 0.01,
        }
    }

    /// Map a uniform roll in `[0, 1)` onto a tier.
    ///
    /// Thresholds are cumulative: SSR below 0.01, SR below 0.05, R below
    /// 0.30, N otherwise.
    pub fn from_roll(roll: f64) -> Self {
        let mut cumulative = 0.0;
        for &tier in &Self::all()[..3] {
            cumulative += tier.probability();
            if roll < cumulative {
                return tier;
            }
        }
        Self::Normal
    }
}

impl std::fmt::Display for Rarity {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.code())
    }
}

/// Streak length that guarantees an R.
pub const STREAK_RARE: u32 = 3;
/// Streak length that guarantees an SR.
pub const STREAK_SUPER_RARE: u32 = 7;
/// Streak length that guarantees an SSR.
pub const STREAK_SUPER_SUPER_RARE: u32 = 30;

/// Guaranteed tier for a consecutive-visit streak, if any.
pub fn streak_bonus(streak: u32) -> Option<Rarity> {
    if streak >= STREAK_SUPER_SUPER_RARE {
        Some(Rarity::SuperSuperRare)
    } else if streak >= STREAK_SUPER_RARE {
        Some(Rarity::SuperRare)
    } else if streak >= STREAK_RARE {
        Some(Rarity::Rare)
    } else {
        None
    }
}

/// Draw a tier for a believer with the given streak.
///
/// The RNG is only consumed when no streak bonus applies.
pub fn draw_rarity<R: Rng + ?Sized>(streak: u32, rng: &mut R) -> Rarity {
    if let Some(bonus) = streak_bonus(streak) {
        return bonus;
    }
    Rarity::from_roll(rng.random::<f64>())
}
