//! Believer progression.
//!
//! Each device carries one believer record: a random believer number, a
//! visit streak, experience and level, and counters for the rare tiers drawn.
//! Level `n` needs `n * 100` experience to advance; leftover experience
//! carries over, so one large grant can raise several levels.

use chrono::NaiveDate;
use rand::Rng;
use serde::{Deserialize, Serialize};

use crate::error::YudaneResult;
use crate::rarity::Rarity;
use crate::store::{BELIEVER_KEY, KeyValueStore};

/// Lowest believer number.
pub const BASE_ID: u32 = 10_000;
/// Span of believer numbers above [`BASE_ID`].
pub const ID_SPAN: u32 = 90_000;
/// Experience granted for every ritual.
pub const EXP_PER_VISIT: u32 = 10;
/// Experience per level step.
pub const EXP_PER_LEVEL: u32 = 100;

/// Title thresholds, ascending by level.
pub const TITLES: &[(u32, &str)] = &[
    (1, "入信者"),
    (5, "信徒"),
    (10, "修行者"),
    (20, "求道者"),
    (30, "帰依者"),
    (50, "覚醒者"),
    (100, "悟達者"),
];

/// Bonus experience for drawing a tier, on top of [`EXP_PER_VISIT`].
pub fn rarity_bonus_exp(rarity: Rarity) -> u32 {
    match rarity {
        Rarity::SuperSuperRare => 50,
        Rarity::SuperRare => 20,
        Rarity::Rare => 5,
        Rarity::Normal => 0,
    }
}

/// Title held at a level.
pub fn title_for_level(level: u32) -> &'static str {
    TITLES
        .iter()
        .take_while(|(threshold, _)| level >= *threshold)
        .last()
        .or_else(|| TITLES.first())
        .map(|(_, name)| *name)
        .unwrap_or_default()
}

/// The persisted progression record of one device.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Believer {
    /// Believer number.
    pub id: u32,
    /// Day of the first visit.
    pub created_at: NaiveDate,
    /// Current level (starts at 1).
    pub level: u32,
    /// Experience towards the next level.
    pub exp: u32,
    /// Consecutive days with a ritual.
    pub streak: u32,
    /// Day of the last ritual, `None` before the first.
    pub last_visit: Option<NaiveDate>,
    /// Days with a ritual in total.
    pub total_visits: u32,
    /// SSR oracles drawn.
    pub ssr_count: u32,
    /// SR oracles drawn.
    pub sr_count: u32,
    /// R oracles drawn.
    pub r_count: u32,
}

impl Believer {
    /// A fresh level-1 believer.
    pub fn new(id: u32, created_at: NaiveDate) -> Self {
        Self {
            id,
            created_at,
            level: 1,
            exp: 0,
            streak: 0,
            last_visit: None,
            total_visits: 0,
            ssr_count: 0,
            sr_count: 0,
            r_count: 0,
        }
    }

    /// A fresh believer with a random believer number.
    pub fn generate<R: Rng + ?Sized>(created_at: NaiveDate, rng: &mut R) -> Self {
        Self::new(BASE_ID + rng.random_range(0..ID_SPAN), created_at)
    }

    /// Register a visit on `today`.
    ///
    /// A second visit on the same day changes nothing and returns `false`.
    /// A visit the day after the last one extends the streak; any other gap
    /// restarts it at 1.
    pub fn update_streak(&mut self, today: NaiveDate) -> bool {
        if self.last_visit == Some(today) {
            return false;
        }

        let yesterday = today.pred_opt();
        if self.last_visit.is_some() && self.last_visit == yesterday {
            self.streak += 1;
        } else {
            self.streak = 1;
        }

        self.last_visit = Some(today);
        self.total_visits += 1;
        true
    }

    /// Experience needed to leave the current level.
    pub fn exp_to_next_level(&self) -> u32 {
        self.level.saturating_mul(EXP_PER_LEVEL)
    }

    /// Add experience and apply level-ups. Returns the number of levels gained.
    ///
    /// The threshold is re-evaluated after every level-up, so 250 experience
    /// at level 1 ends at level 2 with 150 banked. A flat 100-point step
    /// fixed at the starting level would instead give level 3 with 50.
    pub fn add_exp(&mut self, amount: u32) -> u32 {
        self.exp = self.exp.saturating_add(amount);

        let mut gained = 0;
        while self.exp >= self.exp_to_next_level() {
            self.exp -= self.exp_to_next_level();
            self.level += 1;
            gained += 1;
        }

        if gained > 0 {
            tracing::info!(level = self.level, gained, "believer leveled up");
        }
        gained
    }

    /// Record a completed ritual: grant experience and count the tier.
    /// Returns the number of levels gained.
    pub fn record_ritual(&mut self, rarity: Rarity) -> u32 {
        match rarity {
            Rarity::SuperSuperRare => self.ssr_count += 1,
            Rarity::SuperRare => self.sr_count += 1,
            Rarity::Rare => self.r_count += 1,
            Rarity::Normal => {}
        }
        self.add_exp(EXP_PER_VISIT + rarity_bonus_exp(rarity))
    }

    /// How many oracles of a tier this believer has drawn. N is not counted.
    pub fn count_for(&self, rarity: Rarity) -> Option<u32> {
        match rarity {
            Rarity::SuperSuperRare => Some(self.ssr_count),
            Rarity::SuperRare => Some(self.sr_count),
            Rarity::Rare => Some(self.r_count),
            Rarity::Normal => None,
        }
    }

    /// Current title.
    pub fn title(&self) -> &'static str {
        title_for_level(self.level)
    }
}

/// Load the believer record. Unreadable or malformed records count as absent.
pub fn load_believer<S: KeyValueStore + ?Sized>(store: &S) -> Option<Believer> {
    let raw = match store.get(BELIEVER_KEY) {
        Ok(raw) => raw?,
        Err(e) => {
            tracing::warn!("failed to load believer: {e}");
            return None;
        }
    };
    serde_json::from_str(&raw)
        .map_err(|e| tracing::warn!("failed to parse believer: {e}"))
        .ok()
}

/// Persist the believer record.
pub fn save_believer<S: KeyValueStore + ?Sized>(store: &mut S, believer: &Believer) -> YudaneResult<()> {
    store.set(BELIEVER_KEY, &serde_json::to_string(believer)?)
}

/// Load the believer, creating and persisting a new one on first use.
pub fn init_believer<S: KeyValueStore + ?Sized, R: Rng + ?Sized>(
    store: &mut S,
    today: NaiveDate,
    rng: &mut R,
) -> YudaneResult<Believer> {
    if let Some(believer) = load_believer(store) {
        return Ok(believer);
    }

    let believer = Believer::generate(today, rng);
    save_believer(store, &believer)?;
    tracing::info!(id = believer.id, "new believer");
    Ok(believer)
}
