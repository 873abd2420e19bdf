//! Response cache with tag-based invalidation
//!
//! An explicit, in-memory cache keyed by (operation, argument fingerprint).
//! Query results are stored with the tags their descriptor provides;
//! invalidating a tag marks every entry carrying it stale, making those
//! queries eligible for refetch on their next dispatch. Entries are
//! overwritten in place on refetch; there is no eviction policy beyond
//! staleness.

use std::collections::HashMap;
use std::sync::{Mutex, PoisonError};

use chrono::{DateTime, Utc};
use serde_json::Value as JsonValue;
use sha2::{Digest, Sha256};

use crate::registry::{OperationDescriptor, Tag};

#[derive(Debug, Clone)]
struct CacheEntry {
    value: JsonValue,
    tags: Vec<Tag>,
    stale: bool,
    stored_at: DateTime<Utc>,
}

/// In-memory response cache
#[derive(Debug, Default)]
pub struct ResponseCache {
    entries: Mutex<HashMap<String, CacheEntry>>,
}

/// Fingerprint an operation call for use as a cache key
///
/// SHA-256 over the operation name and its arguments, truncated to 16 hex
/// chars. Arguments that never reach the URL still land in the key, so two
/// calls differing only in an unused argument cache separately.
pub fn fingerprint(descriptor: &OperationDescriptor, args: &[String]) -> String {
    let mut key = String::from(descriptor.name);
    for arg in args {
        key.push('|');
        key.push_str(arg);
    }

    let mut hasher = Sha256::new();
    hasher.update(key.as_bytes());
    let result = hasher.finalize();
    hex::encode(&result[..8]) // 16 hex chars
}

impl ResponseCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Get a fresh cached value, if one exists
    ///
    /// Stale entries are treated as absent; the caller is expected to
    /// refetch and store over them.
    pub fn get(&self, descriptor: &OperationDescriptor, args: &[String]) -> Option<JsonValue> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&fingerprint(descriptor, args))
            .filter(|entry| !entry.stale)
            .map(|entry| entry.value.clone())
    }

    /// Store a query result under the operation's provided tags
    pub fn store(&self, descriptor: &OperationDescriptor, args: &[String], value: JsonValue) {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries.insert(
            fingerprint(descriptor, args),
            CacheEntry {
                value,
                tags: descriptor.provides.to_vec(),
                stale: false,
                stored_at: Utc::now(),
            },
        );
    }

    /// Mark every entry carrying the tag stale; returns how many were hit
    pub fn invalidate(&self, tag: Tag) -> usize {
        let mut entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        let mut hit = 0;
        for entry in entries.values_mut() {
            if entry.tags.contains(&tag) && !entry.stale {
                entry.stale = true;
                hit += 1;
            }
        }
        hit
    }

    /// When the entry for this call was last stored, stale or not
    pub fn stored_at(&self, descriptor: &OperationDescriptor, args: &[String]) -> Option<DateTime<Utc>> {
        let entries = self.entries.lock().unwrap_or_else(PoisonError::into_inner);
        entries
            .get(&fingerprint(descriptor, args))
            .map(|entry| entry.stored_at)
    }

    /// Number of entries, fresh and stale
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Drop everything (used on logout)
    pub fn clear(&self) {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::registry::OperationId;

    #[test]
    fn test_fingerprint_shape_and_arg_sensitivity() {
        let descriptor = OperationId::GetUserTransactions.descriptor();
        let a = fingerprint(descriptor, &["user-1".to_string()]);
        let b = fingerprint(descriptor, &["user-2".to_string()]);

        assert_eq!(a.len(), 16);
        assert_ne!(a, b);
        assert_eq!(a, fingerprint(descriptor, &["user-1".to_string()]));
    }

    #[test]
    fn test_fingerprint_distinct_across_operations() {
        let args = vec!["user-1".to_string()];
        let a = fingerprint(OperationId::GetUserTransactions.descriptor(), &args);
        let b = fingerprint(OperationId::GetBalance.descriptor(), &args);
        assert_ne!(a, b);
    }

    #[test]
    fn test_store_and_get() {
        let cache = ResponseCache::new();
        let descriptor = OperationId::GetBalance.descriptor();
        let args = vec!["user-1".to_string()];

        assert!(cache.get(descriptor, &args).is_none());

        cache.store(descriptor, &args, serde_json::json!({"balance": "10.00"}));
        let value = cache.get(descriptor, &args).unwrap();
        assert_eq!(value["balance"], "10.00");
    }

    #[test]
    fn test_invalidate_marks_tagged_entries_stale() {
        let cache = ResponseCache::new();
        let balance = OperationId::GetBalance.descriptor();
        let transactions = OperationId::GetUserTransactions.descriptor();
        let args = vec!["user-1".to_string()];

        cache.store(balance, &args, serde_json::json!({"balance": "10.00"}));
        cache.store(transactions, &args, serde_json::json!([]));

        assert_eq!(cache.invalidate(Tag::Users), 2);
        assert!(cache.get(balance, &args).is_none());
        assert!(cache.get(transactions, &args).is_none());

        // Stale entries stay resident until overwritten
        assert_eq!(cache.len(), 2);
        assert!(cache.stored_at(balance, &args).is_some());
    }

    #[test]
    fn test_refetch_overwrites_stale_entry() {
        let cache = ResponseCache::new();
        let descriptor = OperationId::GetBalance.descriptor();
        let args = vec!["user-1".to_string()];

        cache.store(descriptor, &args, serde_json::json!({"balance": "10.00"}));
        cache.invalidate(Tag::Users);
        cache.store(descriptor, &args, serde_json::json!({"balance": "25.00"}));

        let value = cache.get(descriptor, &args).unwrap();
        assert_eq!(value["balance"], "25.00");
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_clear() {
        let cache = ResponseCache::new();
        let descriptor = OperationId::GetBalance.descriptor();
        cache.store(descriptor, &[], serde_json::json!(1));
        cache.clear();
        assert!(cache.is_empty());
    }
}
