//! Persistent-storage access with TTL bumps.
//!
//! Per-account records (balances, positions, burns, roles) live in
//! `persistent()` storage so each entry carries its own rent. Every read that
//! finds an entry and every write extends that entry's TTL.

use crate::types::{DataKey, BUMP_TARGET, BUMP_THRESHOLD};
use soroban_sdk::{Env, IntoVal, TryFromVal, Val};

pub fn load<V>(e: &Env, key: &DataKey) -> Option<V>
where
    V: TryFromVal<Env, Val>,
{
    let storage = e.storage().persistent();
    let value: Option<V> = storage.get(key);
    if value.is_some() {
        storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
    }
    value
}

pub fn save<V>(e: &Env, key: &DataKey, value: &V)
where
    V: IntoVal<Env, Val>,
{
    let storage = e.storage().persistent();
    storage.set(key, value);
    storage.extend_ttl(key, BUMP_THRESHOLD, BUMP_TARGET);
}

pub fn remove(e: &Env, key: &DataKey) {
    e.storage().persistent().remove(key);
}
