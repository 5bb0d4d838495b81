//! The daily seal: one oracle per calendar day.
//!
//! The day's result is written under a single key together with the date it
//! was drawn. A record from any other day reads as absent, so the seal breaks
//! on its own at midnight.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::YudaneResult;
use crate::rarity::Rarity;
use crate::store::{KeyValueStore, RITUAL_KEY};

/// The stored result of one ritual.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RitualRecord {
    /// Day the oracle was drawn.
    pub date: NaiveDate,
    /// Oracle text.
    pub message: String,
    /// Drawn tier.
    pub rarity: Rarity,
}

/// Seal today's oracle, replacing any earlier record.
pub fn save_ritual<S: KeyValueStore + ?Sized>(
    store: &mut S,
    today: NaiveDate,
    message: &str,
    rarity: Rarity,
) -> YudaneResult<RitualRecord> {
    let record = RitualRecord {
        date: today,
        message: message.to_string(),
        rarity,
    };
    store.set(RITUAL_KEY, &serde_json::to_string(&record)?)?;
    tracing::debug!(%today, %rarity, "ritual sealed");
    Ok(record)
}

/// Load today's oracle, if one was sealed today.
///
/// Unreadable or malformed records count as absent.
pub fn load_ritual<S: KeyValueStore + ?Sized>(store: &S, today: NaiveDate) -> Option<RitualRecord> {
    let raw = match store.get(RITUAL_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return None,
        Err(e) => {
            tracing::warn!("failed to load ritual: {e}");
            return None;
        }
    };

    match serde_json::from_str::<RitualRecord>(&raw) {
        Ok(record) if record.date == today => Some(record),
        Ok(record) => {
            tracing::debug!(sealed = %record.date, %today, "ritual seal expired");
            None
        }
        Err(e) => {
            tracing::warn!("failed to load ritual: {e}");
            None
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn save_then_load_same_day() {
        let mut store = MemoryStore::new();
        let today = date(2026, 10, 19);
        let saved = save_ritual(&mut store, today, "寒いし、\n昼寝しろ。", Rarity::Rare).unwrap();

        let loaded = load_ritual(&store, today).unwrap();
        assert_eq!(loaded, saved);
        assert_eq!(loaded.message, "寒いし、\n昼寝しろ。");
        assert_eq!(loaded.rarity, Rarity::Rare);
    }

    #[test]
    fn yesterdays_record_is_absent() {
        let mut store = MemoryStore::new();
        let yesterday = date(2026, 10, 18);
        save_ritual(&mut store, yesterday, "msg", Rarity::SuperRare).unwrap();

        assert!(store.get(RITUAL_KEY).unwrap().is_some());
        assert_eq!(load_ritual(&store, date(2026, 10, 19)), None);
    }

    #[test]
    fn later_save_overwrites() {
        let mut store = MemoryStore::new();
        let today = date(2026, 10, 19);
        save_ritual(&mut store, date(2026, 10, 18), "old", Rarity::Normal).unwrap();
        save_ritual(&mut store, today, "new", Rarity::SuperSuperRare).unwrap();

        let loaded = load_ritual(&store, today).unwrap();
        assert_eq!(loaded.message, "new");
        assert_eq!(loaded.rarity, Rarity::SuperSuperRare);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn malformed_record_is_absent() {
        let mut store = MemoryStore::new();
        let today = date(2026, 10, 19);
        store.set(RITUAL_KEY, "{not json").unwrap();
        assert_eq!(load_ritual(&store, today), None);

        store
            .set(RITUAL_KEY, r#"{"date":"2026-10-19","message":"m","rarity":"UR"}"#)
            .unwrap();
        assert_eq!(load_ritual(&store, today), None);
    }

    #[test]
    fn empty_store_is_absent() {
        let store = MemoryStore::new();
        assert_eq!(load_ritual(&store, date(2026, 1, 1)), None);
    }

    #[test]
    fn stored_shape() {
        let mut store = MemoryStore::new();
        save_ritual(&mut store, date(2026, 10, 19), "m", Rarity::SuperRare).unwrap();
        let raw = store.get(RITUAL_KEY).unwrap().unwrap();
        insta::assert_snapshot!(raw, @r#"{"date":"2026-10-19","message":"m","rarity":"SR"}"#);
    }
}
