use log::warn;
use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Monetary value as delivered by the donation feed
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Amount {
    /// ISO currency code; empty when the feed omitted it
    #[serde(default)]
    pub currency: String,
    /// Decimal value. The feed sends either a JSON string ("10.00") or a number;
    /// anything that does not parse to a finite number is treated as absent.
    #[serde(default, deserialize_with = "deserialize_amount_value")]
    pub value: Option<f64>,
}

/// A donation from the live feed, carrying moderation and read state
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Donation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub donor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    /// Amount converted to the campaign's display currency
    #[serde(rename = "displayAmount", default, skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<Amount>,
    /// Completion timestamp (ISO-8601)
    #[serde(default)]
    pub completed_at: String,
    #[serde(default)]
    pub read: bool,
    /// One of "approved", "undecided" or "censored"
    #[serde(rename = "modStatus", default, skip_serializing_if = "Option::is_none")]
    pub mod_status: Option<String>,
}

/// A donation from the all-time feed. These carry no moderation or read state.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BaseDonation {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub donor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default)]
    pub completed_at: String,
}

/// Entry of the campaign's donor roster
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorRosterEntry {
    #[serde(deserialize_with = "deserialize_id")]
    pub id: String,
    #[serde(default)]
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_amount: Option<Amount>,
}

/// One snapshot of the donation feed subscriptions.
///
/// A missing key means that feed has not delivered anything yet. Records that
/// do not parse are skipped with a warning; the rest of the feed still loads.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct FeedSnapshot {
    #[serde(default, deserialize_with = "deserialize_records")]
    pub donations: Vec<Donation>,
    #[serde(default, deserialize_with = "deserialize_records")]
    pub alldonations: Vec<BaseDonation>,
    #[serde(default, deserialize_with = "deserialize_records")]
    pub donors: Vec<DonorRosterEntry>,
}

/// Sort and filter settings as produced by the settings panel.
///
/// Values are raw tokens; unknown tokens fall back to a default when the
/// settings are mapped into the domain.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SortSettings {
    /// "live", "all" or "donors"
    #[serde(default = "default_list")]
    pub list: String,
    /// "money" or "date"
    #[serde(default = "default_sort")]
    pub sort: String,
    /// "asc" or "desc"
    #[serde(default = "default_dir")]
    pub dir: String,
    /// Subset of "read", "unread", "approved", "undecided", "censored"
    #[serde(default = "default_show")]
    pub show: Vec<String>,
}

fn default_list() -> String {
    "live".to_string()
}

fn default_sort() -> String {
    "money".to_string()
}

fn default_dir() -> String {
    "asc".to_string()
}

fn default_show() -> Vec<String> {
    vec!["unread".to_string(), "approved".to_string(), "undecided".to_string()]
}

impl Default for SortSettings {
    fn default() -> Self {
        Self {
            list: default_list(),
            sort: default_sort(),
            dir: default_dir(),
            show: default_show(),
        }
    }
}

/// Which top-level listing was rendered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewKind {
    Live,
    All,
    Donors,
}

/// Whether a render list has anything to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ListStatus {
    /// The feed delivered no donations (still loading, or none yet)
    NoDonations,
    /// Donations exist but the show settings hid every one of them
    AllFilteredOut,
    Ready,
}

impl ListStatus {
    /// Placeholder text the graphic shows instead of an empty list
    pub fn placeholder(&self) -> Option<&'static str> {
        match self {
            ListStatus::NoDonations => Some("Loading... or No Donations Yet!"),
            ListStatus::AllFilteredOut => Some("All Donations Filtered Out!"),
            ListStatus::Ready => None,
        }
    }
}

impl fmt::Display for ListStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ListStatus::NoDonations => write!(f, "no donations"),
            ListStatus::AllFilteredOut => write!(f, "all filtered out"),
            ListStatus::Ready => write!(f, "ready"),
        }
    }
}

/// A donation as handed to the card renderer
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderedDonation {
    pub id: String,
    pub donor_name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub donor_comment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub amount: Option<Amount>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_amount: Option<Amount>,
    pub completed_at: String,
    /// Absent for all-time feed donations
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mod_status: Option<String>,
}

/// Per-donor aggregate for the grouped listing
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DonorSummary {
    pub name: String,
    pub total: Amount,
    pub latest: String,
    pub donations: Vec<RenderedDonation>,
}

/// One row of the render list, keyed for list reconciliation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum RenderEntry {
    Donation { key: String, donation: RenderedDonation },
    Donor { key: String, donor: DonorSummary },
}

impl RenderEntry {
    /// Stable key: donation id, or donor name for grouped rows
    pub fn key(&self) -> &str {
        match self {
            RenderEntry::Donation { key, .. } => key,
            RenderEntry::Donor { key, .. } => key,
        }
    }
}

/// Ordered output of one render pass
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RenderList {
    pub view: ViewKind,
    pub status: ListStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub placeholder: Option<String>,
    pub entries: Vec<RenderEntry>,
}

fn deserialize_amount_value<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawValue {
        Number(f64),
        Text(String),
    }

    let value = match Option::<RawValue>::deserialize(deserializer)? {
        Some(RawValue::Number(n)) => Some(n),
        Some(RawValue::Text(s)) => s.trim().parse::<f64>().ok(),
        None => None,
    };
    Ok(value.filter(|v| v.is_finite()))
}

fn deserialize_id<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum RawId {
        Text(String),
        Integer(i64),
        Float(f64),
    }

    Ok(match RawId::deserialize(deserializer)? {
        RawId::Text(s) => s,
        RawId::Integer(n) => n.to_string(),
        RawId::Float(n) => n.to_string(),
    })
}

fn deserialize_records<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Vec<serde_json::Value>>::deserialize(deserializer)?.unwrap_or_default();
    Ok(raw
        .into_iter()
        .enumerate()
        .filter_map(|(index, value)| match serde_json::from_value(value) {
            Ok(record) => Some(record),
            Err(e) => {
                warn!("Skipping feed record {}: {}", index, e);
                None
            }
        })
        .collect())
}
