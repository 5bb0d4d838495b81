//! Core of the YUDANE oracle.
//!
//! Provides the gacha-style rarity draw (with streak bonuses), the two-part
//! oracle message generator, the daily seal that caches one result per
//! calendar day, and the believer progression record (streaks, experience,
//! levels, titles). All state lives behind an explicit [`Shrine`] with an
//! injected store, clock and RNG.

pub mod believer;
pub mod clock;
pub mod config;
pub mod error;
pub mod lexicon;
pub mod rarity;
pub mod ritual;
pub mod shrine;
pub mod store;

pub use believer::Believer;
pub use clock::{Clock, FixedClock, SystemClock};
pub use config::YudaneConfig;
pub use error::{YudaneError, YudaneResult};
pub use rarity::{Rarity, draw_rarity};
pub use ritual::RitualRecord;
pub use shrine::{Revelation, Shrine};
pub use store::{FileStore, KeyValueStore, MemoryStore};
