// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key comparison helpers and the inclusive key range type.

use core::cmp::Ordering;
use core::fmt::Debug;

/// Inclusive range of keys `[min, max]` along the index axis.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct KeyRange<K> {
    /// Lowest key included in the range.
    pub min: K,
    /// Highest key included in the range.
    pub max: K,
}

impl<K> KeyRange<K> {
    /// Create a new range from its inclusive bounds.
    pub const fn new(min: K, max: K) -> Self {
        Self { min, max }
    }
}

impl<K: Copy + PartialOrd> KeyRange<K> {
    /// Whether `key` lies within `[min, max]`.
    pub fn contains(&self, key: K) -> bool {
        le(self.min, key) && le(key, self.max)
    }

    /// Return true if the range is inverted (`max < min`). Assumes no NaN.
    pub fn is_empty(&self) -> bool {
        lt(self.max, self.min)
    }
}

impl KeyRange<f64> {
    /// Window of `behind` units before and `ahead` units after `cursor`.
    pub fn around(cursor: f64, behind: f64, ahead: f64) -> Self {
        Self::new(cursor - behind, cursor + ahead)
    }
}

impl KeyRange<f32> {
    /// Window of `behind` units before and `ahead` units after `cursor`.
    pub fn around(cursor: f32, behind: f32, ahead: f32) -> Self {
        Self::new(cursor - behind, cursor + ahead)
    }
}

impl KeyRange<i64> {
    /// Window of `behind` units before and `ahead` units after `cursor`, saturating at the
    /// bounds of `i64`.
    pub fn around(cursor: i64, behind: i64, ahead: i64) -> Self {
        Self::new(cursor.saturating_sub(behind), cursor.saturating_add(ahead))
    }
}

/// Total order over keys. Incomparable keys (NaN) are treated as equal in release builds.
#[inline]
pub(crate) fn cmp_keys<K: PartialOrd + Debug>(a: &K, b: &K) -> Ordering {
    let ord = a.partial_cmp(b);
    debug_assert!(ord.is_some(), "keys must be comparable: {a:?} vs {b:?}");
    ord.unwrap_or(Ordering::Equal)
}

pub(crate) fn le<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o != Ordering::Greater)
        .unwrap_or(false)
}

pub(crate) fn lt<T: PartialOrd>(a: T, b: T) -> bool {
    a.partial_cmp(&b)
        .map(|o| o == Ordering::Less)
        .unwrap_or(false)
}
