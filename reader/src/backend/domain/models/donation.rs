//! Domain model for a donation record.
use serde::{Deserialize, Serialize};

/// Monetary value with its currency code. Formatting happens in the renderer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    pub currency: String,
    pub value: Option<f64>,
}

impl Amount {
    pub fn new(currency: &str, value: f64) -> Self {
        Self {
            currency: currency.to_string(),
            value: Some(value),
        }
    }

    /// Numeric value, with an absent value counting as zero
    pub fn value_or_zero(&self) -> f64 {
        self.value.unwrap_or(0.0)
    }
}

/// Moderation verdict assigned by the external moderation process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ModStatus {
    Approved,
    Undecided,
    Censored,
}

impl ModStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ModStatus::Approved => "approved",
            ModStatus::Undecided => "undecided",
            ModStatus::Censored => "censored",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token.trim().to_ascii_lowercase().as_str() {
            "approved" => Some(ModStatus::Approved),
            "undecided" => Some(ModStatus::Undecided),
            "censored" => Some(ModStatus::Censored),
            _ => None,
        }
    }
}

/// A donation from the live feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LiveDonation {
    pub id: String,
    pub donor_name: String,
    pub donor_comment: Option<String>,
    pub amount: Option<Amount>,
    /// Amount in the campaign's display currency; donor totals sum this
    pub display_amount: Option<Amount>,
    pub completed_at: String,
    pub read: bool,
    /// `None` when the feed carried a status outside the known set
    pub mod_status: Option<ModStatus>,
}

/// A donation from the all-time feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HistoricalDonation {
    pub id: String,
    pub donor_name: String,
    pub donor_comment: Option<String>,
    pub amount: Option<Amount>,
    pub completed_at: String,
}

/// A donation record, tagged at ingestion with the feed it came from
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FeedRecord {
    Live(LiveDonation),
    Historical(HistoricalDonation),
}

impl FeedRecord {
    pub fn id(&self) -> &str {
        match self {
            FeedRecord::Live(d) => &d.id,
            FeedRecord::Historical(d) => &d.id,
        }
    }

    pub fn donor_name(&self) -> &str {
        match self {
            FeedRecord::Live(d) => &d.donor_name,
            FeedRecord::Historical(d) => &d.donor_name,
        }
    }

    pub fn amount(&self) -> Option<&Amount> {
        match self {
            FeedRecord::Live(d) => d.amount.as_ref(),
            FeedRecord::Historical(d) => d.amount.as_ref(),
        }
    }

    /// Amount counted towards a donor's total. All-time records have no
    /// display amount, so their plain amount is used.
    pub fn display_amount(&self) -> Option<&Amount> {
        match self {
            FeedRecord::Live(d) => d.display_amount.as_ref(),
            FeedRecord::Historical(d) => d.amount.as_ref(),
        }
    }

    pub fn completed_at(&self) -> &str {
        match self {
            FeedRecord::Live(d) => &d.completed_at,
            FeedRecord::Historical(d) => &d.completed_at,
        }
    }

    pub fn is_live(&self) -> bool {
        matches!(self, FeedRecord::Live(_))
    }
}

/// Entry of the donor roster feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorProfile {
    pub id: String,
    pub name: String,
    pub total_amount: Option<Amount>,
}

/// Everything the feed subscriptions held at one instant
#[derive(Debug, Clone, PartialEq, Default)]
pub struct FeedSnapshot {
    /// Live feed, every record is `FeedRecord::Live`
    pub donations: Vec<FeedRecord>,
    /// All-time feed, every record is `FeedRecord::Historical`
    pub all_donations: Vec<FeedRecord>,
    pub donors: Vec<DonorProfile>,
}
