//! Read-state and moderation filtering of donation records.
//!
//! Only live donations carry read and moderation state. All-time records pass
//! through untouched.

use crate::backend::domain::models::donation::FeedRecord;
use crate::backend::domain::models::settings::ShowSet;
use log::debug;

/// Whether a record survives the operator's show settings.
///
/// A live donation is kept when both its read state and its moderation state
/// are in the show set.
pub fn is_shown(record: &FeedRecord, show: &ShowSet) -> bool {
    match record {
        FeedRecord::Live(donation) => {
            show.shows_read_state(donation) && show.shows_mod_status(donation)
        }
        FeedRecord::Historical(_) => true,
    }
}

/// Select the records to display. The input is never modified; the result
/// borrows from it and keeps its order.
pub fn filter_donations<'a, I>(records: I, show: &ShowSet) -> Vec<&'a FeedRecord>
where
    I: IntoIterator<Item = &'a FeedRecord>,
{
    let mut seen = 0usize;
    let kept: Vec<&'a FeedRecord> = records
        .into_iter()
        .inspect(|_| seen += 1)
        .filter(|record| is_shown(record, show))
        .collect();

    debug!("Filter kept {} of {} donations", kept.len(), seen);
    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::donation::{
        Amount, HistoricalDonation, LiveDonation, ModStatus,
    };
    use crate::backend::domain::models::settings::ShowFlag;

    fn create_test_donation(id: &str, read: bool, mod_status: Option<ModStatus>) -> FeedRecord {
        FeedRecord::Live(LiveDonation {
            id: id.to_string(),
            donor_name: "Ada".to_string(),
            donor_comment: None,
            amount: Some(Amount::new("GBP", 5.0)),
            display_amount: Some(Amount::new("GBP", 5.0)),
            completed_at: "2024-01-01T00:00:00Z".to_string(),
            read,
            mod_status,
        })
    }

    fn show(flags: &[ShowFlag]) -> ShowSet {
        flags.iter().copied().collect()
    }

    fn ids(records: &[&FeedRecord]) -> Vec<String> {
        records.iter().map(|r| r.id().to_string()).collect()
    }

    #[test]
    fn test_unread_approved_keeps_only_unread() {
        let records = vec![
            create_test_donation("read", true, Some(ModStatus::Approved)),
            create_test_donation("unread", false, Some(ModStatus::Approved)),
        ];

        let kept = filter_donations(&records, &show(&[ShowFlag::Unread, ShowFlag::Approved]));

        assert_eq!(ids(&kept), vec!["unread"]);
    }

    #[test]
    fn test_both_read_and_moderation_must_match() {
        let records = vec![
            create_test_donation("1", false, Some(ModStatus::Censored)),
            create_test_donation("2", true, Some(ModStatus::Undecided)),
            create_test_donation("3", false, Some(ModStatus::Undecided)),
            create_test_donation("4", false, None),
        ];

        let kept = filter_donations(&records, &show(&[ShowFlag::Unread, ShowFlag::Undecided]));

        assert_eq!(ids(&kept), vec!["3"]);
    }

    #[test]
    fn test_historical_records_pass_through() {
        let records = vec![FeedRecord::Historical(HistoricalDonation {
            id: "h1".to_string(),
            donor_name: "Grace".to_string(),
            donor_comment: None,
            amount: None,
            completed_at: "2022-01-01T00:00:00Z".to_string(),
        })];

        let kept = filter_donations(&records, &ShowSet::new());

        assert_eq!(ids(&kept), vec!["h1"]);
    }

    #[test]
    fn test_everything_filtered_out_is_empty() {
        let records = vec![
            create_test_donation("1", true, Some(ModStatus::Approved)),
            create_test_donation("2", false, Some(ModStatus::Approved)),
        ];

        assert!(filter_donations(&records, &ShowSet::new()).is_empty());
        assert!(filter_donations(&records, &show(&[ShowFlag::Read, ShowFlag::Unread])).is_empty());
    }

    #[test]
    fn test_filter_is_idempotent() {
        let records = vec![
            create_test_donation("1", true, Some(ModStatus::Approved)),
            create_test_donation("2", false, Some(ModStatus::Censored)),
            create_test_donation("3", false, Some(ModStatus::Approved)),
            create_test_donation("4", true, Some(ModStatus::Undecided)),
        ];
        let settings = show(&[ShowFlag::Read, ShowFlag::Unread, ShowFlag::Approved]);

        let once = filter_donations(&records, &settings);
        let twice = filter_donations(once.iter().copied(), &settings);

        assert_eq!(once, twice);
        assert_eq!(ids(&once), vec!["1", "3"]);
    }

    #[test]
    fn test_empty_input() {
        let records: Vec<FeedRecord> = Vec::new();
        assert!(filter_donations(&records, &ShowSet::new()).is_empty());
    }
}
