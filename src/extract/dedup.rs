//! Keep-first deduplication.
//!
//! The same operation runs per document and again across the corpus.

use crate::model::{Bullet, Collation};
use std::collections::HashSet;
use std::hash::Hash;

/// Remove later items whose key was already seen, preserving order.
///
/// Returns the number of removed items.
pub fn dedup_by_key<T, K, F>(items: &mut Vec<T>, mut key: F) -> usize
where
    K: Eq + Hash,
    F: FnMut(&T) -> K,
{
    let before = items.len();
    let mut seen = HashSet::with_capacity(before);
    items.retain(|item| seen.insert(key(item)));
    before - items.len()
}

/// Deduplicate one bucket of bullets by their identity key.
pub fn dedup_bullets(bullets: &mut Vec<Bullet>) -> usize {
    dedup_by_key(bullets, Bullet::key)
}

/// Deduplicate every role and section bucket independently.
pub fn dedup_collation(collation: &mut Collation) -> usize {
    collation.buckets_mut().map(dedup_bullets).sum()
}
