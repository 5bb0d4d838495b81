//! Shrine: the ritual flow.
//!
//! `Shrine` owns the record store, the clock and the RNG, and ties the
//! rarity draw, oracle generation, daily seal and believer progression
//! together.

use chrono::TimeDelta;
use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::believer::{Believer, init_believer, save_believer};
use crate::clock::{Clock, time_until_midnight};
use crate::config::YudaneConfig;
use crate::error::{YudaneError, YudaneResult};
use crate::lexicon::generate_oracle;
use crate::rarity::{Rarity, draw_rarity, streak_bonus};
use crate::ritual::{RitualRecord, load_ritual, save_ritual};
use crate::store::{KeyValueStore, RITUAL_KEY};

/// Outcome of a fresh ritual.
#[derive(Debug, Clone)]
pub struct Revelation {
    /// The sealed oracle.
    pub record: RitualRecord,
    /// Streak at draw time, including today.
    pub streak: u32,
    /// Tier guaranteed by the streak, if any.
    pub streak_bonus: Option<Rarity>,
    /// Levels gained from this ritual.
    pub levels_gained: u32,
}

/// A believer's shrine.
pub struct Shrine<S, C> {
    store: S,
    clock: C,
    rng: StdRng,
    believer: Believer,
}

impl<S: KeyValueStore, C: Clock> Shrine<S, C> {
    /// Open the shrine, creating the believer record on first use.
    pub fn open(mut store: S, clock: C, config: &YudaneConfig) -> YudaneResult<Self> {
        let mut rng = match config.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        let believer = init_believer(&mut store, clock.today(), &mut rng)?;

        Ok(Self {
            store,
            clock,
            rng,
            believer,
        })
    }

    /// The believer record.
    pub fn believer(&self) -> &Believer {
        &self.believer
    }

    /// The record store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// The clock.
    pub fn clock(&self) -> &C {
        &self.clock
    }

    /// Mutable access to the clock.
    pub fn clock_mut(&mut self) -> &mut C {
        &mut self.clock
    }

    /// Today's oracle, if it has already been drawn.
    pub fn today_ritual(&self) -> Option<RitualRecord> {
        load_ritual(&self.store, self.clock.today())
    }

    /// Time until the seal breaks.
    pub fn countdown(&self) -> TimeDelta {
        time_until_midnight(self.clock.now())
    }

    /// Perform today's ritual.
    ///
    /// Registers the visit, draws a tier using the updated streak, generates
    /// and seals the oracle, then grants experience and persists the
    /// believer. Fails with [`YudaneError::AlreadySealed`] if today's oracle
    /// exists.
    ///
    /// Either both records are written or neither is: if the believer cannot
    /// be saved, the seal is removed again and the in-memory believer is left
    /// untouched, so the ritual can be retried.
    pub fn perform_ritual(&mut self) -> YudaneResult<Revelation> {
        let today = self.clock.today();
        if let Some(sealed) = load_ritual(&self.store, today) {
            return Err(YudaneError::AlreadySealed(sealed.date));
        }

        let mut believer = self.believer.clone();
        believer.update_streak(today);
        let streak = believer.streak;
        let rarity = draw_rarity(streak, &mut self.rng);
        let message = generate_oracle(rarity, &mut self.rng);
        tracing::debug!(%today, streak, %rarity, "oracle drawn");

        let record = save_ritual(&mut self.store, today, &message, rarity)?;
        let levels_gained = believer.record_ritual(rarity);
        if let Err(e) = save_believer(&mut self.store, &believer) {
            if let Err(undo) = self.store.remove(RITUAL_KEY) {
                tracing::warn!("failed to roll back ritual seal: {undo}");
            }
            return Err(e);
        }
        self.believer = believer;

        Ok(Revelation {
            record,
            streak,
            streak_bonus: streak_bonus(streak),
            levels_gained,
        })
    }

    /// Close the shrine and return its store.
    pub fn into_store(self) -> S {
        self.store
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::believer::load_believer;
    use crate::clock::FixedClock;
    use crate::store::{BELIEVER_KEY, MemoryStore};
    use chrono::NaiveDate;
    use std::cell::Cell;
    use std::rc::Rc;

    fn shrine_on(y: i32, m: u32, d: u32) -> Shrine<MemoryStore, FixedClock> {
        let day = NaiveDate::from_ymd_opt(y, m, d).unwrap();
        let config = YudaneConfig::default().with_seed(42);
        Shrine::open(MemoryStore::new(), FixedClock::on(day), &config).unwrap()
    }

    #[test]
    fn open_creates_believer() {
        let shrine = shrine_on(2026, 10, 19);
        let b = shrine.believer();
        assert_eq!(b.level, 1);
        assert_eq!(b.streak, 0);
        assert_eq!(load_believer(shrine.store()).as_ref(), Some(b));
        assert!(shrine.today_ritual().is_none());
    }

    #[test]
    fn first_ritual_seals_the_day() {
        let mut shrine = shrine_on(2026, 10, 19);
        let rev = shrine.perform_ritual().unwrap();

        assert_eq!(rev.streak, 1);
        assert_eq!(rev.streak_bonus, None);
        assert_eq!(shrine.today_ritual(), Some(rev.record.clone()));
        assert_eq!(shrine.believer().total_visits, 1);
        assert!(shrine.believer().exp >= 10);
    }

    #[test]
    fn second_ritual_same_day_fails() {
        let mut shrine = shrine_on(2026, 10, 19);
        shrine.perform_ritual().unwrap();
        let before = shrine.believer().clone();

        let err = shrine.perform_ritual().unwrap_err();
        assert!(matches!(err, YudaneError::AlreadySealed(_)));
        assert_eq!(shrine.believer(), &before);
    }

    #[test]
    fn seal_breaks_next_day() {
        let mut shrine = shrine_on(2026, 10, 19);
        shrine.perform_ritual().unwrap();
        shrine.clock_mut().advance_days(1);

        assert!(shrine.today_ritual().is_none());
        let rev = shrine.perform_ritual().unwrap();
        assert_eq!(rev.streak, 2);
        assert_eq!(rev.record.date, NaiveDate::from_ymd_opt(2026, 10, 20).unwrap());
    }

    #[test]
    fn streak_guarantees_tiers() {
        let mut shrine = shrine_on(2026, 1, 1);
        for day in 1..=30 {
            let rev = shrine.perform_ritual().unwrap();
            assert_eq!(rev.streak, day);
            match day {
                3..=6 => assert_eq!(rev.record.rarity, Rarity::Rare),
                7..=29 => assert_eq!(rev.record.rarity, Rarity::SuperRare),
                30 => assert_eq!(rev.record.rarity, Rarity::SuperSuperRare),
                _ => assert_eq!(rev.streak_bonus, None),
            }
            shrine.clock_mut().advance_days(1);
        }
        let b = shrine.believer();
        assert!(b.r_count >= 4);
        assert!(b.sr_count >= 23);
        assert!(b.ssr_count >= 1);
        assert!(b.level > 1);
    }

    #[test]
    fn missed_day_resets_streak() {
        let mut shrine = shrine_on(2026, 10, 1);
        shrine.perform_ritual().unwrap();
        shrine.clock_mut().advance_days(1);
        shrine.perform_ritual().unwrap();
        shrine.clock_mut().advance_days(2);
        let rev = shrine.perform_ritual().unwrap();
        assert_eq!(rev.streak, 1);
        assert_eq!(shrine.believer().total_visits, 3);
    }

    #[test]
    fn reopen_keeps_progress() {
        let mut shrine = shrine_on(2026, 10, 19);
        let rev = shrine.perform_ritual().unwrap();
        let believer = shrine.believer().clone();
        let clock = *shrine.clock();

        let reopened = Shrine::open(shrine.into_store(), clock, &YudaneConfig::default()).unwrap();
        assert_eq!(reopened.believer(), &believer);
        assert_eq!(reopened.today_ritual(), Some(rev.record));
    }

    /// Memory store whose believer writes fail while `fail` is set.
    struct FlakyStore {
        inner: MemoryStore,
        fail: Rc<Cell<bool>>,
    }

    impl KeyValueStore for FlakyStore {
        fn get(&self, key: &str) -> YudaneResult<Option<String>> {
            self.inner.get(key)
        }

        fn set(&mut self, key: &str, value: &str) -> YudaneResult<()> {
            if self.fail.get() && key == BELIEVER_KEY {
                return Err(YudaneError::Storage {
                    path: "yudane_believer.json".into(),
                    source: std::io::Error::other("disk full"),
                });
            }
            self.inner.set(key, value)
        }

        fn remove(&mut self, key: &str) -> YudaneResult<()> {
            self.inner.remove(key)
        }
    }

    #[test]
    fn failed_believer_write_rolls_back_seal() {
        let fail = Rc::new(Cell::new(false));
        let store = FlakyStore {
            inner: MemoryStore::new(),
            fail: Rc::clone(&fail),
        };
        let day = NaiveDate::from_ymd_opt(2026, 10, 19).unwrap();
        let config = YudaneConfig::default().with_seed(42);
        let mut shrine = Shrine::open(store, FixedClock::on(day), &config).unwrap();
        let before = shrine.believer().clone();

        fail.set(true);
        let err = shrine.perform_ritual().unwrap_err();
        assert!(matches!(err, YudaneError::Storage { .. }));
        assert!(shrine.today_ritual().is_none());
        assert!(shrine.store().get(RITUAL_KEY).unwrap().is_none());
        assert_eq!(shrine.believer(), &before);
        assert_eq!(load_believer(shrine.store()), Some(before));

        fail.set(false);
        let rev = shrine.perform_ritual().unwrap();
        assert_eq!(rev.streak, 1);
        assert_eq!(shrine.today_ritual(), Some(rev.record));

        let saved = load_believer(shrine.store()).unwrap();
        assert_eq!(saved.streak, 1);
        assert_eq!(saved.total_visits, 1);
        assert_eq!(saved.last_visit, Some(day));
        assert!(saved.exp >= 10);
    }

    #[test]
    fn countdown_from_fixed_clock() {
        let shrine = shrine_on(2026, 10, 19);
        assert_eq!(shrine.countdown(), TimeDelta::hours(12));
    }
}
