//! Domain model for the reader's sort and filter settings.
//!
//! Settings are an immutable value. Operator edits arrive as a
//! [`SettingsCommand`] and produce a new value through [`ReaderSettings::apply`].
use crate::backend::domain::commands::settings::SettingsCommand;
use crate::backend::domain::models::donation::{LiveDonation, ModStatus};
use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Top-level listing the operator picked
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListMode {
    #[default]
    Live,
    All,
    Donors,
}

impl ListMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            ListMode::Live => "live",
            ListMode::All => "all",
            ListMode::Donors => "donors",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        match token {
            "live" => Some(ListMode::Live),
            "all" => Some(ListMode::All),
            "donors" => Some(ListMode::Donors),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortKey {
    #[default]
    Amount,
    Time,
}

impl SortKey {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortKey::Amount => "money",
            SortKey::Time => "date",
        }
    }

    /// Anything other than "money" sorts by time
    pub fn from_token(token: &str) -> Self {
        if token == "money" {
            SortKey::Amount
        } else {
            SortKey::Time
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum SortDirection {
    #[default]
    Ascending,
    Descending,
}

impl SortDirection {
    pub fn as_str(&self) -> &'static str {
        match self {
            SortDirection::Ascending => "asc",
            SortDirection::Descending => "desc",
        }
    }

    /// Anything other than "asc" sorts descending
    pub fn from_token(token: &str) -> Self {
        if token == "asc" {
            SortDirection::Ascending
        } else {
            SortDirection::Descending
        }
    }

    pub fn reversed(&self) -> Self {
        match self {
            SortDirection::Ascending => SortDirection::Descending,
            SortDirection::Descending => SortDirection::Ascending,
        }
    }
}

/// A read or moderation state the operator can choose to show
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum ShowFlag {
    Read,
    Unread,
    Approved,
    Undecided,
    Censored,
}

impl ShowFlag {
    pub const ALL: [ShowFlag; 5] = [
        ShowFlag::Read,
        ShowFlag::Unread,
        ShowFlag::Approved,
        ShowFlag::Undecided,
        ShowFlag::Censored,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            ShowFlag::Read => "read",
            ShowFlag::Unread => "unread",
            ShowFlag::Approved => "approved",
            ShowFlag::Undecided => "undecided",
            ShowFlag::Censored => "censored",
        }
    }

    pub fn from_token(token: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|flag| flag.as_str() == token)
    }

    pub fn for_mod_status(status: ModStatus) -> Self {
        match status {
            ModStatus::Approved => ShowFlag::Approved,
            ModStatus::Undecided => ShowFlag::Undecided,
            ModStatus::Censored => ShowFlag::Censored,
        }
    }

    pub fn for_read(read: bool) -> Self {
        if read {
            ShowFlag::Read
        } else {
            ShowFlag::Unread
        }
    }
}

/// Inclusion set over read and moderation states
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct ShowSet(BTreeSet<ShowFlag>);

impl ShowSet {
    pub fn new() -> Self {
        Self(BTreeSet::new())
    }

    pub fn contains(&self, flag: ShowFlag) -> bool {
        self.0.contains(&flag)
    }

    /// Read-state membership of a live donation
    pub fn shows_read_state(&self, donation: &LiveDonation) -> bool {
        self.contains(ShowFlag::for_read(donation.read))
    }

    /// Moderation-state membership. A donation with no recognised status
    /// matches nothing.
    pub fn shows_mod_status(&self, donation: &LiveDonation) -> bool {
        donation
            .mod_status
            .map(|status| self.contains(ShowFlag::for_mod_status(status)))
            .unwrap_or(false)
    }

    pub fn with(&self, flag: ShowFlag) -> Self {
        let mut flags = self.0.clone();
        flags.insert(flag);
        Self(flags)
    }

    pub fn without(&self, flag: ShowFlag) -> Self {
        let mut flags = self.0.clone();
        flags.remove(&flag);
        Self(flags)
    }

    pub fn iter(&self) -> impl Iterator<Item = ShowFlag> + '_ {
        self.0.iter().copied()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl FromIterator<ShowFlag> for ShowSet {
    fn from_iter<I: IntoIterator<Item = ShowFlag>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

/// Current sort and filter configuration for one render pass
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderSettings {
    pub list: ListMode,
    pub sort: SortKey,
    pub direction: SortDirection,
    pub show: ShowSet,
}

impl Default for ReaderSettings {
    fn default() -> Self {
        Self {
            list: ListMode::Live,
            sort: SortKey::Amount,
            direction: SortDirection::Ascending,
            show: [ShowFlag::Unread, ShowFlag::Approved, ShowFlag::Undecided]
                .into_iter()
                .collect(),
        }
    }
}

impl ReaderSettings {
    /// Produce the settings that result from an operator edit
    pub fn apply(&self, command: SettingsCommand) -> Self {
        match command {
            SettingsCommand::SetList(list) => Self { list, ..self.clone() },
            SettingsCommand::SetSort(sort) => Self { sort, ..self.clone() },
            SettingsCommand::SetDirection(direction) => Self { direction, ..self.clone() },
            SettingsCommand::ToggleDirection => Self {
                direction: self.direction.reversed(),
                ..self.clone()
            },
            SettingsCommand::Show(flag) => Self {
                show: self.show.with(flag),
                ..self.clone()
            },
            SettingsCommand::Hide(flag) => Self {
                show: self.show.without(flag),
                ..self.clone()
            },
            SettingsCommand::ToggleShow(flag) => {
                let show = if self.show.contains(flag) {
                    self.show.without(flag)
                } else {
                    self.show.with(flag)
                };
                Self { show, ..self.clone() }
            }
            SettingsCommand::Reset => Self::default(),
        }
    }
}
