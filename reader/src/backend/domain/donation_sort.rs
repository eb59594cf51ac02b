//! Ordering of donations and donor summaries by amount or time.
//!
//! Amounts compare numerically with an absent amount counting as zero.
//! Timestamps compare as plain strings, which is only chronological for
//! zero-padded ISO-8601 values. The sort is stable, so ties keep their input
//! order.

use crate::backend::domain::models::donation::FeedRecord;
use crate::backend::domain::models::donor::DonorSummary;
use crate::backend::domain::models::settings::{SortDirection, SortKey};
use std::cmp::Ordering;

/// Anything the reader can order: exposes an amount and a timestamp
pub trait Sortable {
    fn sort_amount(&self) -> f64;
    fn sort_timestamp(&self) -> &str;
}

impl Sortable for FeedRecord {
    fn sort_amount(&self) -> f64 {
        self.amount().map(|a| a.value_or_zero()).unwrap_or(0.0)
    }

    fn sort_timestamp(&self) -> &str {
        self.completed_at()
    }
}

impl Sortable for DonorSummary<'_> {
    fn sort_amount(&self) -> f64 {
        self.total
    }

    fn sort_timestamp(&self) -> &str {
        self.latest
    }
}

impl<T: Sortable + ?Sized> Sortable for &T {
    fn sort_amount(&self) -> f64 {
        (**self).sort_amount()
    }

    fn sort_timestamp(&self) -> &str {
        (**self).sort_timestamp()
    }
}

/// Compare two items under the given key, flipped for descending order.
///
/// Both keys use the same operand order, so ascending time is oldest first.
/// Swapping the operands for the time key alone would make "asc" show the
/// newest donation first.
pub fn compare<T: Sortable + ?Sized>(a: &T, b: &T, key: SortKey, direction: SortDirection) -> Ordering {
    let ordering = match key {
        SortKey::Amount => a.sort_amount().total_cmp(&b.sort_amount()),
        SortKey::Time => a.sort_timestamp().cmp(b.sort_timestamp()),
    };
    match direction {
        SortDirection::Ascending => ordering,
        SortDirection::Descending => ordering.reverse(),
    }
}

/// Sort a collection the caller owns, such as freshly built summaries
pub fn sort_in_place<T: Sortable>(items: &mut [T], key: SortKey, direction: SortDirection) {
    items.sort_by(|a, b| compare(a, b, key, direction));
}

/// Return a sorted copy of the references, leaving the source order alone
pub fn sorted<'a, T: Sortable + ?Sized>(
    items: &[&'a T],
    key: SortKey,
    direction: SortDirection,
) -> Vec<&'a T> {
    let mut copy = items.to_vec();
    copy.sort_by(|a, b| compare(*a, *b, key, direction));
    copy
}
