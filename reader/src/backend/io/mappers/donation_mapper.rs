use crate::backend::domain::models::donation::{
    Amount as DomainAmount, DonorProfile, FeedRecord, FeedSnapshot as DomainFeedSnapshot,
    HistoricalDonation, LiveDonation, ModStatus,
};
use chrono::DateTime;
use log::warn;
use shared::{
    Amount as SharedAmount, BaseDonation, Donation, DonorRosterEntry,
    FeedSnapshot as SharedFeedSnapshot, RenderedDonation,
};

pub struct DonationMapper;

impl DonationMapper {
    /// Ingest a whole feed snapshot. Live and all-time records are tagged here,
    /// by the feed they arrived on.
    pub fn snapshot_to_domain(dto: SharedFeedSnapshot) -> DomainFeedSnapshot {
        DomainFeedSnapshot {
            donations: dto.donations.into_iter().map(Self::live_to_domain).collect(),
            all_donations: dto
                .alldonations
                .into_iter()
                .map(Self::historical_to_domain)
                .collect(),
            donors: dto.donors.into_iter().map(Self::donor_to_domain).collect(),
        }
    }

    pub fn live_to_domain(dto: Donation) -> FeedRecord {
        Self::check_timestamp(&dto.id, &dto.completed_at);
        let mod_status = dto.mod_status.as_deref().and_then(|token| {
            let status = ModStatus::from_token(token);
            if status.is_none() {
                warn!("Donation {} has unknown moderation status '{}'", dto.id, token);
            }
            status
        });

        FeedRecord::Live(LiveDonation {
            id: dto.id,
            donor_name: dto.donor_name,
            donor_comment: dto.donor_comment,
            amount: dto.amount.map(Self::amount_to_domain),
            display_amount: dto.display_amount.map(Self::amount_to_domain),
            completed_at: dto.completed_at,
            read: dto.read,
            mod_status,
        })
    }

    pub fn historical_to_domain(dto: BaseDonation) -> FeedRecord {
        Self::check_timestamp(&dto.id, &dto.completed_at);
        FeedRecord::Historical(HistoricalDonation {
            id: dto.id,
            donor_name: dto.donor_name,
            donor_comment: dto.donor_comment,
            amount: dto.amount.map(Self::amount_to_domain),
            completed_at: dto.completed_at,
        })
    }

    pub fn donor_to_domain(dto: DonorRosterEntry) -> DonorProfile {
        DonorProfile {
            id: dto.id,
            name: dto.name,
            total_amount: dto.total_amount.map(Self::amount_to_domain),
        }
    }

    pub fn amount_to_domain(dto: SharedAmount) -> DomainAmount {
        DomainAmount {
            currency: dto.currency,
            value: dto.value,
        }
    }

    pub fn amount_to_dto(domain: &DomainAmount) -> SharedAmount {
        SharedAmount {
            currency: domain.currency.clone(),
            value: domain.value,
        }
    }

    pub fn to_dto(record: &FeedRecord) -> RenderedDonation {
        match record {
            FeedRecord::Live(d) => RenderedDonation {
                id: d.id.clone(),
                donor_name: d.donor_name.clone(),
                donor_comment: d.donor_comment.clone(),
                amount: d.amount.as_ref().map(Self::amount_to_dto),
                display_amount: d.display_amount.as_ref().map(Self::amount_to_dto),
                completed_at: d.completed_at.clone(),
                read: Some(d.read),
                mod_status: d.mod_status.map(|s| s.as_str().to_string()),
            },
            FeedRecord::Historical(d) => RenderedDonation {
                id: d.id.clone(),
                donor_name: d.donor_name.clone(),
                donor_comment: d.donor_comment.clone(),
                amount: d.amount.as_ref().map(Self::amount_to_dto),
                display_amount: None,
                completed_at: d.completed_at.clone(),
                read: None,
                mod_status: None,
            },
        }
    }

    /// Time ordering compares timestamps as strings, so anything that is not
    /// RFC 3339 may sort out of place. Flag it but keep the value as-is.
    fn check_timestamp(id: &str, completed_at: &str) {
        if completed_at.is_empty() {
            warn!("Donation {} has no completion timestamp", id);
        } else if DateTime::parse_from_rfc3339(completed_at).is_err() {
            warn!(
                "Donation {} has non RFC 3339 timestamp '{}', time ordering may be wrong",
                id, completed_at
            );
        }
    }
}
