//! Render pass orchestration for the donation reader.
//!
//! One pass takes a feed snapshot and the current settings and produces the
//! ordered list the graphic draws:
//!
//! ```text
//! feed → filter → sort                                  (live and all views)
//! feed → filter → group → summarize → sort each donor's
//!        donations → sort summaries                   (donors view)
//! ```
//!
//! Every result borrows from the snapshot. A pass has no side effects besides
//! logging, so a superseded pass can simply be dropped.

use crate::backend::domain::donation_filter::filter_donations;
use crate::backend::domain::donation_sort::{sort_in_place, sorted};
use crate::backend::domain::donor_grouping::group_by_donor;
use crate::backend::domain::donor_summary::summarize_groups;
use crate::backend::domain::models::donation::{FeedRecord, FeedSnapshot};
use crate::backend::domain::models::donor::DonorSummary;
use crate::backend::domain::models::settings::ReaderSettings;
use crate::backend::domain::view_selector::{select_view, ViewMode};
use log::{debug, info};

/// Currency shown on a donor total when the donor's first record has none
pub const DEFAULT_FALLBACK_CURRENCY: &str = "GBP";

/// Why a view has or has no entries
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ListStatus {
    /// The selected feed is empty (not loaded yet, or no donations yet)
    NoDonations,
    /// The feed had donations but the show settings excluded all of them
    AllFilteredOut,
    Ready,
}

/// One row of a rendered view
#[derive(Debug, Clone, PartialEq)]
pub enum ViewEntry<'a> {
    Donation(&'a FeedRecord),
    Donor(DonorSummary<'a>),
}

impl<'a> ViewEntry<'a> {
    /// Reconciliation key: donation id, or donor name for grouped rows
    pub fn key(&self) -> &'a str {
        match *self {
            ViewEntry::Donation(record) => record.id(),
            ViewEntry::Donor(ref summary) => summary.name,
        }
    }
}

/// Result of one render pass
#[derive(Debug, Clone, PartialEq)]
pub struct ReaderView<'a> {
    pub mode: ViewMode,
    pub status: ListStatus,
    pub entries: Vec<ViewEntry<'a>>,
}

impl<'a> ReaderView<'a> {
    fn empty(mode: ViewMode, status: ListStatus) -> Self {
        Self {
            mode,
            status,
            entries: Vec::new(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct ReaderService {
    fallback_currency: String,
}

impl ReaderService {
    pub fn new() -> Self {
        Self::with_fallback_currency(DEFAULT_FALLBACK_CURRENCY)
    }

    pub fn with_fallback_currency(currency: &str) -> Self {
        Self {
            fallback_currency: currency.to_string(),
        }
    }

    pub fn fallback_currency(&self) -> &str {
        &self.fallback_currency
    }

    /// Assemble the view selected by `settings` from one feed snapshot
    pub fn render<'a>(&self, snapshot: &'a FeedSnapshot, settings: &ReaderSettings) -> ReaderView<'a> {
        let mode = select_view(settings);
        let source = if mode.uses_history_feed() {
            &snapshot.all_donations
        } else {
            &snapshot.donations
        };

        if source.is_empty() {
            info!("📭 No donations available for {:?} view", mode);
            return ReaderView::empty(mode, ListStatus::NoDonations);
        }

        let shown = filter_donations(source, &settings.show);
        if shown.is_empty() {
            info!(
                "🙈 All {} donations filtered out for {:?} view",
                source.len(),
                mode
            );
            return ReaderView::empty(mode, ListStatus::AllFilteredOut);
        }

        let entries: Vec<ViewEntry<'a>> = if mode.is_grouped() {
            // Group in feed order; the summary currency comes from each donor's
            // first feed record. Donations are sorted per donor afterwards.
            let mut summaries = summarize_groups(group_by_donor(shown), &self.fallback_currency);
            for summary in &mut summaries {
                summary.donations = sorted(&summary.donations, settings.sort, settings.direction);
            }
            sort_in_place(&mut summaries, settings.sort, settings.direction);
            summaries.into_iter().map(ViewEntry::Donor).collect()
        } else {
            sorted(&shown, settings.sort, settings.direction)
                .into_iter()
                .map(ViewEntry::Donation)
                .collect()
        };

        debug!(
            "Rendered {:?} view: {} entries from {} donations (sort {} {})",
            mode,
            entries.len(),
            source.len(),
            settings.sort.as_str(),
            settings.direction.as_str()
        );

        ReaderView {
            mode,
            status: ListStatus::Ready,
            entries,
        }
    }
}

impl Default for ReaderService {
    fn default() -> Self {
        Self::new()
    }
}
