//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check the TTL rules against a simple model. The store is
//! driven with explicit timestamps so expiry can be tested without sleeping.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;

use crate::adapters::{CacheAdapter, MemoryAdapter};
use crate::cache::CacheStore;
use crate::config::AdapterConfig;
use crate::models::CacheOptions;

// == Test Configuration ==
const START: i64 = 1_700_000_000;
const TEST_DEFAULT_TTL: u64 = 300;

// == Strategies ==
/// Generates cache keys from a small alphabet so operations collide often
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-d]{1,2}".prop_map(|s| s)
}

/// Generates JSON values of a few shapes
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,32}".prop_map(Value::from),
        any::<bool>().prop_map(Value::from),
        prop::collection::vec(any::<u8>(), 0..8).prop_map(|v| json!(v)),
    ]
}

/// Operations applied to the store, each advancing the clock by `elapse` first
#[derive(Debug, Clone)]
enum StoreOp {
    Set { key: String, ttl: u64 },
    Get { key: String, ttl: u64, extend: bool },
    Delete { key: String },
    Touch { key: String, ttl: u64 },
    Check { key: String },
}

fn store_op_strategy() -> impl Strategy<Value = (i64, StoreOp)> {
    let op = prop_oneof![
        (key_strategy(), 1u64..10).prop_map(|(key, ttl)| StoreOp::Set { key, ttl }),
        (key_strategy(), 1u64..10, any::<bool>())
            .prop_map(|(key, ttl, extend)| StoreOp::Get { key, ttl, extend }),
        key_strategy().prop_map(|key| StoreOp::Delete { key }),
        (key_strategy(), 1u64..10).prop_map(|(key, ttl)| StoreOp::Touch { key, ttl }),
        key_strategy().prop_map(|key| StoreOp::Check { key }),
    ];
    (0i64..4, op)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of operations matches a model that tracks only expire_at
    // per key, including lazy removal on get and stale entries seen by check.
    #[test]
    fn prop_store_matches_expiry_model(ops in prop::collection::vec(store_op_strategy(), 1..60)) {
        let mut store = CacheStore::new();
        let mut model: HashMap<String, i64> = HashMap::new();
        let mut now = START;

        for (elapse, op) in ops {
            now += elapse;
            match op {
                StoreOp::Set { key, ttl } => {
                    store.set(key.clone(), key.clone().into_bytes(), ttl, now);
                    model.insert(key, now + ttl as i64);
                }
                StoreOp::Get { key, ttl, extend } => {
                    let expected = match model.get(&key).copied() {
                        Some(expire_at) if expire_at <= now => {
                            model.remove(&key);
                            None
                        }
                        Some(_) => {
                            if extend {
                                model.insert(key.clone(), now + ttl as i64);
                            }
                            Some(key.clone().into_bytes())
                        }
                        None => None,
                    };
                    let got = store.get(&key, ttl, extend, now).map(|p| p.to_vec());
                    prop_assert_eq!(got, expected);
                }
                StoreOp::Delete { key } => {
                    prop_assert_eq!(store.delete(&key), model.remove(&key).is_some());
                }
                StoreOp::Touch { key, ttl } => {
                    let existed = model.contains_key(&key);
                    if existed {
                        model.insert(key.clone(), now + ttl as i64);
                    }
                    prop_assert_eq!(store.touch(&key, ttl, now), existed);
                }
                StoreOp::Check { key } => {
                    let expected = model.get(&key).map_or(0, |expire_at| expire_at - now);
                    prop_assert_eq!(store.check(&key, now), expected);
                }
            }
            prop_assert_eq!(store.len(), model.len());
        }
    }

    // Check is a pure peek: repeated calls never increase and never remove.
    #[test]
    fn prop_check_is_non_increasing(ttl in 1u64..100, steps in prop::collection::vec(0i64..5, 1..20)) {
        let mut store = CacheStore::new();
        store.set("k".to_string(), Vec::new(), ttl, START);

        let mut now = START;
        let mut last = store.check("k", now);
        for step in steps {
            now += step;
            let remaining = store.check("k", now);
            prop_assert!(remaining <= last);
            last = remaining;
        }
        prop_assert_eq!(store.len(), 1);
    }

    // Touch sets the remaining TTL to exactly the requested value, however
    // stale the entry had become.
    #[test]
    fn prop_touch_resets_remaining_ttl(ttl in 1u64..10, idle in 0i64..50, new_ttl in 1u64..1000) {
        let mut store = CacheStore::new();
        store.set("k".to_string(), Vec::new(), ttl, START);

        let now = START + idle;
        prop_assert!(store.touch("k", new_ttl, now));
        prop_assert_eq!(store.check("k", now), new_ttl as i64);
    }

    // Storing a value and reading it back through the adapter before it
    // expires yields the same value.
    #[test]
    fn prop_adapter_set_then_get(key in key_strategy(), value in value_strategy()) {
        let mut cache = MemoryAdapter::new(AdapterConfig::new(TEST_DEFAULT_TTL, false));

        let got = tokio_test::block_on(async {
            cache.set(&key, value.clone(), CacheOptions::new()).await.unwrap();
            cache.get(&key, CacheOptions::new()).await.unwrap()
        });
        prop_assert_eq!(got, Some(value));
    }

    // Deleting a key always resolves with that key and leaves it absent.
    #[test]
    fn prop_adapter_del_resolves_with_key(key in key_strategy(), present in any::<bool>()) {
        let mut cache = MemoryAdapter::new(AdapterConfig::new(TEST_DEFAULT_TTL, false));

        let (deleted, after) = tokio_test::block_on(async {
            if present {
                cache.set(&key, json!(1), CacheOptions::new()).await.unwrap();
            }
            let deleted = cache.del(&key, CacheOptions::new()).await.unwrap();
            let after = cache.get(&key, CacheOptions::new()).await.unwrap();
            (deleted, after)
        });
        prop_assert_eq!(deleted, key);
        prop_assert_eq!(after, None);
        prop_assert!(cache.is_empty());
    }
}
