//! Choice of top-level listing for a render pass.

use crate::backend::domain::models::settings::{ListMode, ReaderSettings};

/// Rendering branch the reader assembles
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ViewMode {
    /// Live feed donations, filtered and sorted
    LiveFeed,
    /// All-time feed donations, sorted only
    FullHistory,
    /// Live feed donations grouped into donor summaries
    DonorGrouped,
}

impl ViewMode {
    /// Whether the branch reads the all-time feed rather than the live one
    pub fn uses_history_feed(&self) -> bool {
        matches!(self, ViewMode::FullHistory)
    }

    pub fn is_grouped(&self) -> bool {
        matches!(self, ViewMode::DonorGrouped)
    }
}

/// Map the configured list mode to its rendering branch.
///
/// Unrecognised list tokens were already mapped to `ListMode::Live` when the
/// settings were read, so this dispatch is total.
pub fn select_view(settings: &ReaderSettings) -> ViewMode {
    match settings.list {
        ListMode::Live => ViewMode::LiveFeed,
        ListMode::All => ViewMode::FullHistory,
        ListMode::Donors => ViewMode::DonorGrouped,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::commands::settings::SettingsCommand;

    #[test]
    fn test_each_list_mode_has_a_branch() {
        let settings = ReaderSettings::default();
        assert_eq!(select_view(&settings), ViewMode::LiveFeed);

        let all = settings.apply(SettingsCommand::SetList(ListMode::All));
        assert_eq!(select_view(&all), ViewMode::FullHistory);
        assert!(select_view(&all).uses_history_feed());

        let donors = settings.apply(SettingsCommand::SetList(ListMode::Donors));
        assert_eq!(select_view(&donors), ViewMode::DonorGrouped);
        assert!(select_view(&donors).is_grouped());
    }
}
