//! Domain models for donor-grouped views.
//!
//! Both types borrow their records from the feed snapshot for the length of a
//! render pass; nothing here owns a donation.
use crate::backend::domain::models::donation::FeedRecord;
use std::collections::HashMap;

/// Insertion-ordered map of donor name to that donor's records.
///
/// Donors iterate in first-seen order and each donor's records keep the
/// order they were pushed in.
#[derive(Debug, Clone, Default)]
pub struct DonorGroups<'a> {
    groups: Vec<(&'a str, Vec<&'a FeedRecord>)>,
    index: HashMap<&'a str, usize>,
}

impl<'a> DonorGroups<'a> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a record to its donor's group, opening the group if needed
    pub fn push(&mut self, record: &'a FeedRecord) {
        let name = record.donor_name();
        match self.index.get(name) {
            Some(&position) => self.groups[position].1.push(record),
            None => {
                self.index.insert(name, self.groups.len());
                self.groups.push((name, vec![record]));
            }
        }
    }

    pub fn get(&self, donor_name: &str) -> Option<&[&'a FeedRecord]> {
        self.index
            .get(donor_name)
            .map(|&position| self.groups[position].1.as_slice())
    }

    pub fn donor_names(&self) -> impl Iterator<Item = &'a str> + '_ {
        self.groups.iter().map(|(name, _)| *name)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&'a str, &[&'a FeedRecord])> + '_ {
        self.groups
            .iter()
            .map(|(name, records)| (*name, records.as_slice()))
    }

    /// Number of donors
    pub fn len(&self) -> usize {
        self.groups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Total number of records across every group
    pub fn record_count(&self) -> usize {
        self.groups.iter().map(|(_, records)| records.len()).sum()
    }
}

impl<'a> IntoIterator for DonorGroups<'a> {
    type Item = (&'a str, Vec<&'a FeedRecord>);
    type IntoIter = std::vec::IntoIter<(&'a str, Vec<&'a FeedRecord>)>;

    fn into_iter(self) -> Self::IntoIter {
        self.groups.into_iter()
    }
}

/// Per-donor aggregate, computed fresh on each render pass
#[derive(Debug, Clone, PartialEq)]
pub struct DonorSummary<'a> {
    pub name: &'a str,
    pub donations: Vec<&'a FeedRecord>,
    pub total: f64,
    /// Display currency of the first record, or the configured fallback
    pub currency: String,
    /// Greatest completion timestamp under string ordering, "" when unknown
    pub latest: &'a str,
}
