// Copyright 2025 Cowboy AI, LLC.

//! Interning cache for composite predicates
//!
//! Composites are registered under a [`CacheKey`] built from the structural
//! hash of their ordered operand pair, the composite kind, and the operand
//! handles themselves. Asking for the same composition twice returns the
//! instance built the first time.
//!
//! # Keys
//!
//! The structural hash is order sensitive: `(A, B)` and `(B, A)` produce
//! different keys, so `or(A, B)` and `or(B, A)` are separate entries.
//! Key equality compares operand instances, not just the hash, so two operand
//! pairs whose hashes collide still map to distinct entries. A key holds its
//! operands, so an identity recorded in the cache cannot be reused by a later
//! allocation while the entry exists.
//!
//! # Lifecycle
//!
//! Entries are created lazily and never evicted. [`PredicateCache::clear`]
//! exists so tests can start from an empty cache.
//!
//! # Concurrency
//!
//! The mapping sits behind an [`RwLock`]. Lookups share the read lock;
//! [`PredicateCache::get_or_register`] re-checks and inserts under the write
//! lock, so concurrent requests for one composition agree on one instance.

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, OnceLock, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::errors::PredicateResult;
use crate::predicate::{identity, same_instance, SharedPredicate};

/// Seed and multiplier of the ordered structural hash
const HASH_SEED: u64 = 1;
const HASH_MULTIPLIER: u64 = 31;

/// Kind of composite stored in the cache
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CompositeKind {
    /// Logical AND of two members
    And,
    /// Logical OR of two members
    Or,
    /// Exclusive OR of two members
    Xor,
}

/// Key under which a composite is registered.
///
/// Holds a handle to each present operand.
pub struct CacheKey<T> {
    hash: u64,
    kind: CompositeKind,
    operands: [Option<SharedPredicate<T>>; 2],
}

impl<T> CacheKey<T> {
    /// Build the key for composing `first` and `second` (in that order).
    ///
    /// An absent operand contributes a fixed identity so the key can still be
    /// computed before arguments are validated.
    pub fn for_operands(
        kind: CompositeKind,
        first: Option<&SharedPredicate<T>>,
        second: Option<&SharedPredicate<T>>,
    ) -> Self {
        let hash = structural_hash(&[first.map(identity), second.map(identity)]);
        Self {
            hash,
            kind,
            operands: [first.cloned(), second.cloned()],
        }
    }

    #[cfg(test)]
    pub(crate) fn from_parts(
        hash: u64,
        kind: CompositeKind,
        operands: [Option<SharedPredicate<T>>; 2],
    ) -> Self {
        Self {
            hash,
            kind,
            operands,
        }
    }

    /// Structural hash of the ordered operand pair
    pub fn structural_hash(&self) -> u64 {
        self.hash
    }

    /// Composite kind this key belongs to
    pub fn kind(&self) -> CompositeKind {
        self.kind
    }
}

impl<T> Clone for CacheKey<T> {
    fn clone(&self) -> Self {
        Self {
            hash: self.hash,
            kind: self.kind,
            operands: self.operands.clone(),
        }
    }
}

impl<T> PartialEq for CacheKey<T> {
    fn eq(&self, other: &Self) -> bool {
        self.hash == other.hash
            && self.kind == other.kind
            && self
                .operands
                .iter()
                .zip(&other.operands)
                .all(|pair| match pair {
                    (Some(left), Some(right)) => same_instance(left, right),
                    (None, None) => true,
                    _ => false,
                })
    }
}

impl<T> Eq for CacheKey<T> {}

impl<T> Hash for CacheKey<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.hash.hash(state);
        self.kind.hash(state);
    }
}

impl<T> fmt::Debug for CacheKey<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let operands: Vec<Option<usize>> = self
            .operands
            .iter()
            .map(|operand| operand.as_ref().map(identity))
            .collect();
        f.debug_struct("CacheKey")
            .field("hash", &self.hash)
            .field("kind", &self.kind)
            .field("operands", &operands)
            .finish()
    }
}

/// Order sensitive hash over operand identities. Absent operands hash as zero.
fn structural_hash(operands: &[Option<usize>]) -> u64 {
    operands.iter().fold(HASH_SEED, |acc, operand| {
        acc.wrapping_mul(HASH_MULTIPLIER)
            .wrapping_add(operand.map_or(0, |id| id as u64))
    })
}

/// Snapshot of cache counters
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheStats {
    /// Number of registered composites
    pub entries: usize,
    /// Requests answered from the cache
    pub hits: u64,
    /// Requests that built and registered a new composite
    pub misses: u64,
}

impl CacheStats {
    /// Fraction of requests answered from the cache
    pub fn hit_ratio(&self) -> f64 {
        let total = self.hits + self.misses;
        if total == 0 {
            0.0
        } else {
            self.hits as f64 / total as f64
        }
    }
}

/// Interning cache for composite predicates over inputs of type `T`
pub struct PredicateCache<T> {
    entries: RwLock<HashMap<CacheKey<T>, SharedPredicate<T>>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

type GlobalRegistry = RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>;

static GLOBAL_CACHES: OnceLock<GlobalRegistry> = OnceLock::new();

impl<T> Default for PredicateCache<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PredicateCache<T> {
    /// Create an empty cache
    pub fn new() -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Return the composite registered under `key`, if any.
    ///
    /// Counts a hit when found; an absent entry builds nothing and is not a miss.
    pub fn lookup(&self, key: &CacheKey<T>) -> Option<SharedPredicate<T>> {
        let found = self.read_entries().get(key).cloned();
        if found.is_some() {
            self.record_hit(key);
        }
        found
    }

    /// Register `predicate` under `key`, replacing any previous entry
    pub fn register(&self, key: CacheKey<T>, predicate: SharedPredicate<T>) {
        debug!(hash = key.hash, kind = ?key.kind, "registering composite predicate");
        self.write_entries().insert(key, predicate);
    }

    /// Return the composite registered under `key`, building and registering
    /// it with `build` when absent.
    ///
    /// `build` runs only on a miss, while the write lock is held. Its error is
    /// returned unchanged, nothing is registered and no miss is counted.
    pub fn get_or_register<F>(&self, key: CacheKey<T>, build: F) -> PredicateResult<SharedPredicate<T>>
    where
        F: FnOnce() -> PredicateResult<SharedPredicate<T>>,
    {
        if let Some(found) = self.read_entries().get(&key) {
            self.record_hit(&key);
            return Ok(Arc::clone(found));
        }

        let mut entries = self.write_entries();
        if let Some(found) = entries.get(&key) {
            self.record_hit(&key);
            return Ok(Arc::clone(found));
        }

        let predicate = build()?;
        self.misses.fetch_add(1, Ordering::Relaxed);
        debug!(hash = key.hash, kind = ?key.kind, "registering composite predicate");
        entries.insert(key, Arc::clone(&predicate));
        Ok(predicate)
    }

    /// Number of registered composites
    pub fn len(&self) -> usize {
        self.read_entries().len()
    }

    /// Whether no composite has been registered
    pub fn is_empty(&self) -> bool {
        self.read_entries().is_empty()
    }

    /// Drop every entry and reset the counters
    pub fn clear(&self) {
        let mut entries = self.write_entries();
        debug!(entries = entries.len(), "clearing predicate cache");
        entries.clear();
        self.hits.store(0, Ordering::Relaxed);
        self.misses.store(0, Ordering::Relaxed);
    }

    /// Current counters
    pub fn stats(&self) -> CacheStats {
        CacheStats {
            entries: self.len(),
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
        }
    }

    fn record_hit(&self, key: &CacheKey<T>) {
        self.hits.fetch_add(1, Ordering::Relaxed);
        trace!(hash = key.hash, kind = ?key.kind, "predicate cache hit");
    }

    // A poisoned lock can only follow a panic around a single insert or clear,
    // which leaves the map consistent.
    fn read_entries(&self) -> RwLockReadGuard<'_, HashMap<CacheKey<T>, SharedPredicate<T>>> {
        self.entries.read().unwrap_or_else(|poisoned| {
            warn!("predicate cache lock poisoned, recovering");
            poisoned.into_inner()
        })
    }

    fn write_entries(&self) -> RwLockWriteGuard<'_, HashMap<CacheKey<T>, SharedPredicate<T>>> {
        self.entries.write().unwrap_or_else(|poisoned| {
            warn!("predicate cache lock poisoned, recovering");
            poisoned.into_inner()
        })
    }
}

impl<T: 'static> PredicateCache<T> {
    /// The process-wide cache for predicates over `T`
    pub fn global() -> Arc<Self> {
        let registry = GLOBAL_CACHES.get_or_init(|| RwLock::new(HashMap::new()));
        let type_id = TypeId::of::<T>();

        // Slots are keyed by TypeId, so a present slot always downcasts.
        let existing = registry
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .get(&type_id)
            .cloned()
            .and_then(|any| any.downcast::<Self>().ok());
        if let Some(cache) = existing {
            return cache;
        }

        let mut caches = registry.write().unwrap_or_else(PoisonError::into_inner);
        let existing = caches
            .get(&type_id)
            .cloned()
            .and_then(|any| any.downcast::<Self>().ok());
        if let Some(cache) = existing {
            return cache;
        }

        let cache = Arc::new(Self::new());
        caches.insert(type_id, Arc::clone(&cache) as Arc<dyn Any + Send + Sync>);
        cache
    }
}
