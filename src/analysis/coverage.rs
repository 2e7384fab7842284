// src/analysis/coverage.rs

//! Minimum number of most frequent categories needed to cover a share of a
//! collection.
//!
//! Categories are taken greedily in decreasing frequency order. Only the
//! number of categories is reported, so the order among equal frequencies
//! never changes the answer.

use log::debug;
use std::collections::HashMap;
use std::hash::Hash;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CoverageError {
    #[error("Invalid coverage fraction {num}/{den}")]
    InvalidFraction { num: usize, den: usize },
}

/// Outcome of a greedy coverage pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CoverageReport {
    /// Number of items in the collection.
    pub total: usize,
    /// Items that had to be covered.
    pub target: usize,
    /// Categories taken, most frequent first.
    pub categories_used: usize,
    /// Items covered by those categories.
    pub covered: usize,
}

/// Occurrence counts per label.
#[derive(Debug, Clone)]
pub struct FrequencyTable<T> {
    counts: HashMap<T, usize>,
    total: usize,
}

impl<T: Hash + Eq> FrequencyTable<T> {
    pub fn new() -> Self {
        Self {
            counts: HashMap::new(),
            total: 0,
        }
    }

    pub fn insert(&mut self, label: T) {
        *self.counts.entry(label).or_insert(0) += 1;
        self.total += 1;
    }

    /// Occurrences of `label`; 0 if it was never seen.
    pub fn count(&self, label: &T) -> usize {
        self.counts.get(label).copied().unwrap_or(0)
    }

    /// Number of items inserted.
    pub fn total(&self) -> usize {
        self.total
    }

    /// Number of distinct labels.
    pub fn categories(&self) -> usize {
        self.counts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.total == 0
    }

    pub fn counts_descending(&self) -> Vec<usize> {
        let mut counts: Vec<usize> = self.counts.values().copied().collect();
        counts.sort_unstable_by(|a, b| b.cmp(a));
        counts
    }

    /// Covers at least half of the items, rounded up.
    pub fn coverage(&self) -> CoverageReport {
        self.cover((self.total + 1) / 2)
    }

    /// Covers at least `ceil(total * num / den)` items.
    pub fn coverage_for_fraction(
        &self,
        num: usize,
        den: usize,
    ) -> Result<CoverageReport, CoverageError> {
        if den == 0 || num > den {
            return Err(CoverageError::InvalidFraction { num, den });
        }

        let scaled = self.total as u128 * num as u128;
        let target = scaled.div_ceil(den as u128) as usize;
        Ok(self.cover(target))
    }

    fn cover(&self, target: usize) -> CoverageReport {
        let mut report = CoverageReport {
            total: self.total,
            target,
            ..Default::default()
        };

        for count in self.counts_descending() {
            if report.covered >= target {
                break;
            }
            report.covered += count;
            report.categories_used += 1;
        }

        debug!(
            "Covered {}/{} items (target {}) with {} of {} categories",
            report.covered,
            report.total,
            report.target,
            report.categories_used,
            self.categories()
        );

        report
    }
}

impl<T: Hash + Eq> Default for FrequencyTable<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Hash + Eq> FromIterator<T> for FrequencyTable<T> {
    fn from_iter<I: IntoIterator<Item = T>>(iter: I) -> Self {
        let mut table = Self::new();
        table.extend(iter);
        table
    }
}

impl<T: Hash + Eq> Extend<T> for FrequencyTable<T> {
    fn extend<I: IntoIterator<Item = T>>(&mut self, iter: I) {
        for label in iter {
            self.insert(label);
        }
    }
}

/// Minimum number of most frequent categories whose combined count reaches
/// half of `items`, rounded up. Returns 0 for an empty collection.
pub fn reduce_capacity<I, T>(items: I) -> usize
where
    I: IntoIterator<Item = T>,
    T: Hash + Eq,
{
    items
        .into_iter()
        .collect::<FrequencyTable<T>>()
        .coverage()
        .categories_used
}
