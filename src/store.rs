// Copyright (c) AlphaVelocity.
// All rights reserved.
//
// This source code is licensed under the license found in the
// LICENSE file in the root directory of this source tree.

//! The transaction collection and its persistent slot.
//!
//! The collection is ordered newest-first by insertion and is written out in
//! full after every mutation. Reads never fail: absent or unreadable data is
//! replaced by the demo seed.

use crate::clock::{Clock, SystemClock};
use crate::db::KeyValueStore;
use crate::errors::WalletError;
use crate::models::{NewTransaction, Transaction, TransactionType};
use crate::registry;
use crate::utils::parse_amount;
use chrono::{DateTime, Duration, Utc};
use log::{debug, info, warn};
use rust_decimal::Decimal;

pub const STORAGE_KEY: &str = "zenwallet_transactions";

/// Demo data shown on first run, dated relative to `now`.
pub fn seed_transactions(now: DateTime<Utc>) -> Vec<Transaction> {
    let tx = |id: &str, amount: Decimal, r#type, category: &str, date, note: &str| Transaction {
        id: id.to_string(),
        amount,
        r#type,
        category: category.to_string(),
        date,
        note: note.to_string(),
    };
    vec![
        tx(
            "1",
            Decimal::new(2500, 0),
            TransactionType::Income,
            "salary",
            now,
            "Monthly Salary",
        ),
        tx(
            "2",
            Decimal::new(4550, 2),
            TransactionType::Expense,
            "food",
            now,
            "Dinner at Zen Garden",
        ),
        tx(
            "3",
            Decimal::new(1500, 2),
            TransactionType::Expense,
            "transport",
            now - Duration::days(1),
            "Uber ride",
        ),
        tx(
            "4",
            Decimal::new(12000, 2),
            TransactionType::Expense,
            "shopping",
            now - Duration::days(2),
            "Nike Shoes",
        ),
    ]
}

/// Read the persisted collection as-is. `Ok(None)` means nothing was stored.
pub fn read_persisted<S: KeyValueStore>(
    storage: &S,
) -> Result<Option<Vec<Transaction>>, WalletError> {
    match storage.get_item(STORAGE_KEY)? {
        Some(raw) => Ok(Some(serde_json::from_str(&raw)?)),
        None => Ok(None),
    }
}

/// Load the collection, substituting the seed when the slot is empty or
/// cannot be read. The second value is `true` when the seed was used.
pub fn load<S: KeyValueStore>(storage: &S, now: DateTime<Utc>) -> (Vec<Transaction>, bool) {
    match read_persisted(storage) {
        Ok(Some(transactions)) => {
            debug!("loaded {} transactions", transactions.len());
            (transactions, false)
        }
        Ok(None) => {
            info!("no saved transactions, starting from demo data");
            (seed_transactions(now), true)
        }
        Err(e) => {
            warn!("saved transactions unreadable ({}), starting from demo data", e);
            (seed_transactions(now), true)
        }
    }
}

/// The collection as reports and exports see it: the same seed fallback as
/// [`load`], but nothing is written back.
pub fn snapshot<S: KeyValueStore>(storage: &S) -> Vec<Transaction> {
    load(storage, SystemClock.now()).0
}

/// Serialize `transactions` and overwrite the slot.
pub fn save<S: KeyValueStore>(storage: &S, transactions: &[Transaction]) -> Result<(), WalletError> {
    let raw = serde_json::to_string(transactions)?;
    storage.set_item(STORAGE_KEY, &raw)?;
    debug!("saved {} transactions", transactions.len());
    Ok(())
}

pub struct TransactionStore<S: KeyValueStore> {
    storage: S,
    clock: Box<dyn Clock>,
    transactions: Vec<Transaction>,
    persisted: bool,
}

impl<S: KeyValueStore> TransactionStore<S> {
    pub fn open(storage: S) -> Self {
        Self::open_with_clock(storage, Box::new(SystemClock))
    }

    /// Load from `storage`; a seeded collection is written back right away.
    pub fn open_with_clock(storage: S, clock: Box<dyn Clock>) -> Self {
        let (transactions, seeded) = load(&storage, clock.now());
        let mut store = Self {
            storage,
            clock,
            transactions,
            persisted: !seeded,
        };
        if seeded {
            store.persist();
        }
        store
    }

    /// Current in-memory collection, newest first.
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Whether the last write reached storage.
    pub fn is_persisted(&self) -> bool {
        self.persisted
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Re-read the slot, with the same seed fallback as opening.
    pub fn load(&self) -> Vec<Transaction> {
        load(&self.storage, self.clock.now()).0
    }

    /// Persist the whole collection. On failure the in-memory state is kept.
    pub fn save(&mut self) -> Result<(), WalletError> {
        match save(&self.storage, &self.transactions) {
            Ok(()) => {
                self.persisted = true;
                Ok(())
            }
            Err(e) => {
                warn!("could not persist transactions: {}", e);
                self.persisted = false;
                Err(e)
            }
        }
    }

    /// Write through without surfacing the error; `save` has already logged
    /// it and [`is_persisted`](Self::is_persisted) reflects the outcome.
    fn persist(&mut self) {
        if self.save().is_err() {
            debug!("keeping {} transactions in memory only", self.transactions.len());
        }
    }

    /// Validate `input`, prepend the new transaction and persist.
    ///
    /// An unparsable, negative, oversized or sub-cent amount is rejected before anything is
    /// constructed, leaving the collection untouched. A failed write does
    /// not undo the append; check [`is_persisted`](Self::is_persisted).
    pub fn append(&mut self, input: NewTransaction) -> Result<Transaction, WalletError> {
        let amount = parse_amount(&input.amount)?;
        let note = match input.note {
            Some(n) if !n.trim().is_empty() => n,
            _ => registry::resolve(&input.category).name.to_string(),
        };
        let transaction = Transaction {
            id: uuid::Uuid::new_v4().to_string(),
            amount,
            r#type: input.r#type,
            category: input.category,
            date: input.date.unwrap_or_else(|| self.clock.now()),
            note,
        };
        info!(
            "recorded {} {} in '{}'",
            transaction.r#type, transaction.amount, transaction.category
        );
        self.transactions.insert(0, transaction.clone());
        self.persist();
        Ok(transaction)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::FixedClock;
    use crate::db::MemoryStorage;
    use chrono::TimeZone;
    use std::str::FromStr;

    fn init() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2025, 3, 12, 18, 30, 0).unwrap()
    }

    fn open(storage: &MemoryStorage) -> TransactionStore<&MemoryStorage> {
        TransactionStore::open_with_clock(storage, Box::new(FixedClock(now())))
    }

    struct BrokenStorage;

    impl KeyValueStore for BrokenStorage {
        fn get_item(&self, _key: &str) -> Result<Option<String>, WalletError> {
            Err(WalletError::Unavailable("disabled".into()))
        }

        fn set_item(&self, _key: &str, _value: &str) -> Result<(), WalletError> {
            Err(WalletError::Unavailable("quota exceeded".into()))
        }
    }

    #[test]
    fn absent_slot_yields_seed_and_persists_it() {
        init();
        let mem = MemoryStorage::new();
        let store = open(&mem);
        assert_eq!(store.transactions(), seed_transactions(now()).as_slice());
        assert!(store.is_persisted());
        assert_eq!(read_persisted(&mem).unwrap(), Some(seed_transactions(now())));
    }

    #[test]
    fn snapshot_does_not_write_the_seed() {
        let mem = MemoryStorage::new();
        assert_eq!(snapshot(&mem).len(), 4);
        assert_eq!(mem.get_item(STORAGE_KEY).unwrap(), None);

        let corrupt = MemoryStorage::with_item(STORAGE_KEY, "{not json");
        assert_eq!(snapshot(&corrupt).len(), 4);
        assert_eq!(corrupt.get_item(STORAGE_KEY).unwrap().as_deref(), Some("{not json"));
    }

    #[test]
    fn corrupt_slot_yields_seed() {
        init();
        let mem = MemoryStorage::with_item(STORAGE_KEY, "{not json");
        let (loaded, seeded) = load(&mem, now());
        assert!(seeded);
        assert_eq!(loaded, seed_transactions(now()));

        let wrong_shape = MemoryStorage::with_item(STORAGE_KEY, r#"[{"id":"1"}]"#);
        assert_eq!(load(&wrong_shape, now()).0, seed_transactions(now()));
    }

    #[test]
    fn empty_array_is_a_valid_collection() {
        let mem = MemoryStorage::with_item(STORAGE_KEY, "[]");
        let store = open(&mem);
        assert!(store.is_empty());
    }

    #[test]
    fn reads_reference_client_layout() {
        let raw = r#"[{"id":"a1","amount":45.5,"type":"expense","category":"food",
            "date":"2025-03-12T08:15:00.000Z","note":"Lunch"}]"#;
        let mem = MemoryStorage::with_item(STORAGE_KEY, raw);
        let store = open(&mem);
        let t = &store.transactions()[0];
        assert_eq!(t.amount, Decimal::from_str("45.50").unwrap());
        assert_eq!(t.r#type, TransactionType::Expense);
        assert_eq!(t.date, Utc.with_ymd_and_hms(2025, 3, 12, 8, 15, 0).unwrap());
    }

    #[test]
    fn save_then_load_round_trips() {
        let mem = MemoryStorage::new();
        let mut store = open(&mem);
        store
            .append(NewTransaction {
                amount: "0.10".into(),
                r#type: TransactionType::Income,
                category: "freelance".into(),
                note: Some("Tip".into()),
                date: Some(Utc.with_ymd_and_hms(2025, 1, 2, 3, 4, 5).unwrap()),
            })
            .unwrap();
        assert_eq!(store.load(), store.transactions());
    }

    #[test]
    fn largest_amounts_survive_a_reload() {
        let mem = MemoryStorage::with_item(STORAGE_KEY, "[]");
        let mut store = open(&mem);
        for amount in ["9999999999999.99", "1234567890123.45", "0.01", "45.5"] {
            store.append(NewTransaction::expense(amount)).unwrap();
        }
        assert!(store.is_persisted());
        assert_eq!(store.load(), store.transactions());
        assert_eq!(
            store.transactions()[3].amount,
            Decimal::from_str("9999999999999.99").unwrap()
        );
    }

    #[test]
    fn out_of_range_amounts_are_not_recorded() {
        let mem = MemoryStorage::with_item(STORAGE_KEY, "[]");
        let mut store = open(&mem);
        let huge = "50000000000000000000000000000";
        assert!(store.append(NewTransaction::expense(huge)).is_err());
        assert!(matches!(
            store.append(NewTransaction::expense("10000000000000")),
            Err(WalletError::AmountOutOfRange(_))
        ));
        assert!(matches!(
            store.append(NewTransaction::expense("0.12345678901234567891")),
            Err(WalletError::TooPrecise(_))
        ));
        assert!(store.is_empty());
        assert_eq!(read_persisted(&mem).unwrap(), Some(vec![]));
    }

    #[test]
    fn append_prepends_and_defaults_note() {
        let mem = MemoryStorage::with_item(STORAGE_KEY, "[]");
        let mut store = open(&mem);
        let t = store
            .append(NewTransaction {
                amount: "45.50".into(),
                r#type: TransactionType::Expense,
                category: "food".into(),
                note: Some(String::new()),
                date: None,
            })
            .unwrap();
        assert_eq!(t.note, "Food");
        assert_eq!(t.date, now());
        assert_eq!(t.amount, Decimal::new(4550, 2));

        let second = store.append(NewTransaction::expense("3")).unwrap();
        assert_eq!(store.len(), 2);
        assert_eq!(store.transactions()[0], second);
        assert_eq!(second.note, "Other");
        assert_ne!(second.id, t.id);
        assert_eq!(store.load(), store.transactions());
    }

    #[test]
    fn dangling_category_note_uses_fallback_name() {
        let mem = MemoryStorage::with_item(STORAGE_KEY, "[]");
        let mut store = open(&mem);
        let mut input = NewTransaction::expense("12");
        input.category = "pets".into();
        let t = store.append(input).unwrap();
        assert_eq!(t.category, "pets");
        assert_eq!(t.note, "Other");
    }

    #[test]
    fn invalid_amount_leaves_collection_unchanged() {
        let mem = MemoryStorage::new();
        let mut store = open(&mem);
        let before = store.transactions().to_vec();
        for bad in ["abc", "", "  ", "NaN", "-5", "1e3", "0.12345678901234567891"] {
            assert!(store.append(NewTransaction::expense(bad)).is_err(), "{bad}");
        }
        assert_eq!(store.transactions(), before.as_slice());
        assert_eq!(store.load(), before);
    }

    #[test]
    fn failed_write_keeps_memory_state() {
        init();
        let mut store = TransactionStore::open_with_clock(BrokenStorage, Box::new(FixedClock(now())));
        assert_eq!(store.len(), 4);
        assert!(!store.is_persisted());
        store.append(NewTransaction::expense("9.99")).unwrap();
        assert_eq!(store.len(), 5);
        assert!(!store.is_persisted());
        assert!(store.save().is_err());
    }
}
