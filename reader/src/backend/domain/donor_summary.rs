//! Per-donor totals and latest activity.

use crate::backend::domain::models::donation::FeedRecord;
use crate::backend::domain::models::donor::{DonorGroups, DonorSummary};

/// Aggregate one donor's records.
///
/// The total sums each record's display amount with absent amounts counting as
/// zero. The latest timestamp is the string maximum seeded with "". Currency
/// comes from the first record's display amount, else `fallback_currency`
/// (also used when that currency is empty).
pub fn summarize<'a>(
    donor_name: &'a str,
    records: Vec<&'a FeedRecord>,
    fallback_currency: &str,
) -> DonorSummary<'a> {
    let total = records
        .iter()
        .map(|r| r.display_amount().map(|a| a.value_or_zero()).unwrap_or(0.0))
        .sum::<f64>();

    let latest = records.iter().fold("", |latest, &r| {
        let completed_at = r.completed_at();
        if completed_at > latest {
            completed_at
        } else {
            latest
        }
    });

    let currency = records
        .first()
        .and_then(|r| r.display_amount())
        .map(|a| a.currency.as_str())
        .filter(|c| !c.is_empty())
        .unwrap_or(fallback_currency)
        .to_string();

    DonorSummary {
        name: donor_name,
        donations: records,
        total,
        currency,
        latest,
    }
}

/// Summarize every group, keeping first-seen donor order
pub fn summarize_groups<'a>(groups: DonorGroups<'a>, fallback_currency: &str) -> Vec<DonorSummary<'a>> {
    groups
        .into_iter()
        .map(|(name, records)| summarize(name, records, fallback_currency))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::donor_grouping::group_by_donor;
    use crate::backend::domain::models::donation::{Amount, LiveDonation, ModStatus};

    fn create_test_donation(
        id: &str,
        donor: &str,
        display_amount: Option<Amount>,
        completed_at: &str,
    ) -> FeedRecord {
        FeedRecord::Live(LiveDonation {
            id: id.to_string(),
            donor_name: donor.to_string(),
            donor_comment: None,
            amount: display_amount.clone(),
            display_amount,
            completed_at: completed_at.to_string(),
            read: false,
            mod_status: Some(ModStatus::Undecided),
        })
    }

    #[test]
    fn test_summary_of_grouped_donor() {
        let records = vec![
            create_test_donation("rec1", "A", Some(Amount::new("GBP", 10.0)), "2024-01-01"),
            create_test_donation("rec2", "B", Some(Amount::new("GBP", 5.0)), "2024-01-02"),
            create_test_donation("rec3", "A", Some(Amount::new("GBP", 3.0)), "2024-01-03"),
        ];
        let groups = group_by_donor(&records);

        let summary = summarize("A", groups.get("A").unwrap().to_vec(), "GBP");

        assert_eq!(summary.total, 13.0);
        assert_eq!(summary.latest, "2024-01-03");
        assert_eq!(summary.donations.len(), 2);
        assert_eq!(summary.name, "A");
    }

    #[test]
    fn test_missing_amount_contributes_zero() {
        let records = vec![
            create_test_donation("1", "A", Some(Amount::new("USD", 2.5)), "2024-01-01"),
            create_test_donation("2", "A", None, "2024-01-02"),
            create_test_donation("3", "A", Some(Amount { currency: "USD".to_string(), value: None }), "2024-01-03"),
        ];

        let summary = summarize("A", records.iter().collect(), "GBP");

        assert_eq!(summary.total, 2.5);
        assert_eq!(summary.currency, "USD");
    }

    #[test]
    fn test_latest_is_string_maximum() {
        let records = vec![
            create_test_donation("1", "A", None, "2024-03-01T00:00:00Z"),
            create_test_donation("2", "A", None, "2024-11-01T00:00:00Z"),
            create_test_donation("3", "A", None, ""),
            create_test_donation("4", "A", None, "2024-02-01T00:00:00Z"),
        ];

        let summary = summarize("A", records.iter().collect(), "GBP");

        assert_eq!(summary.latest, "2024-11-01T00:00:00Z");
        for record in &summary.donations {
            assert!(summary.latest >= record.completed_at());
        }
    }

    #[test]
    fn test_currency_falls_back_when_first_has_none() {
        let records = vec![
            create_test_donation("1", "A", None, "2024-01-01"),
            create_test_donation("2", "A", Some(Amount::new("EUR", 1.0)), "2024-01-02"),
        ];

        let summary = summarize("A", records.iter().collect(), "GBP");

        assert_eq!(summary.currency, "GBP");
        assert_eq!(summary.total, 1.0);
    }

    #[test]
    fn test_empty_currency_falls_back() {
        let records = vec![
            create_test_donation("1", "A", Some(Amount { currency: String::new(), value: Some(4.0) }), "2024-01-01"),
            create_test_donation("2", "A", Some(Amount::new("EUR", 1.0)), "2024-01-02"),
        ];

        let summary = summarize("A", records.iter().collect(), "GBP");

        assert_eq!(summary.currency, "GBP");
        assert_eq!(summary.total, 5.0);
    }

    #[test]
    fn test_summarize_groups_keeps_donor_order() {
        let records = vec![
            create_test_donation("1", "Zed", Some(Amount::new("GBP", 1.0)), "2024-01-01"),
            create_test_donation("2", "Amy", Some(Amount::new("GBP", 2.0)), "2024-01-02"),
            create_test_donation("3", "Zed", Some(Amount::new("GBP", 4.0)), "2024-01-03"),
        ];

        let summaries = summarize_groups(group_by_donor(&records), "GBP");

        let names: Vec<&str> = summaries.iter().map(|s| s.name).collect();
        assert_eq!(names, vec!["Zed", "Amy"]);
        assert_eq!(summaries[0].total, 5.0);
        let grand_total: f64 = summaries.iter().map(|s| s.total).sum();
        assert_eq!(grand_total, 7.0);
    }
}
