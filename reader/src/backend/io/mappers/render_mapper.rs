use crate::backend::domain::models::donor::DonorSummary as DomainDonorSummary;
use crate::backend::domain::reader_service::{ListStatus as DomainListStatus, ReaderView, ViewEntry};
use crate::backend::domain::view_selector::ViewMode;
use crate::backend::io::mappers::donation_mapper::DonationMapper;
use shared::{Amount, DonorSummary, ListStatus, RenderEntry, RenderList, ViewKind};

pub struct RenderMapper;

impl RenderMapper {
    pub fn to_dto(view: &ReaderView<'_>) -> RenderList {
        let status = Self::status_to_dto(view.status);
        RenderList {
            view: Self::view_to_dto(view.mode),
            status,
            placeholder: status.placeholder().map(str::to_string),
            entries: view.entries.iter().map(Self::entry_to_dto).collect(),
        }
    }

    pub fn entry_to_dto(entry: &ViewEntry<'_>) -> RenderEntry {
        match entry {
            ViewEntry::Donation(record) => RenderEntry::Donation {
                key: entry.key().to_string(),
                donation: DonationMapper::to_dto(record),
            },
            ViewEntry::Donor(summary) => RenderEntry::Donor {
                key: entry.key().to_string(),
                donor: Self::summary_to_dto(summary),
            },
        }
    }

    pub fn summary_to_dto(summary: &DomainDonorSummary<'_>) -> DonorSummary {
        DonorSummary {
            name: summary.name.to_string(),
            total: Amount {
                currency: summary.currency.clone(),
                value: Some(summary.total),
            },
            latest: summary.latest.to_string(),
            donations: summary
                .donations
                .iter()
                .map(|record| DonationMapper::to_dto(record))
                .collect(),
        }
    }

    fn view_to_dto(mode: ViewMode) -> ViewKind {
        match mode {
            ViewMode::LiveFeed => ViewKind::Live,
            ViewMode::FullHistory => ViewKind::All,
            ViewMode::DonorGrouped => ViewKind::Donors,
        }
    }

    fn status_to_dto(status: DomainListStatus) -> ListStatus {
        match status {
            DomainListStatus::NoDonations => ListStatus::NoDonations,
            DomainListStatus::AllFilteredOut => ListStatus::AllFilteredOut,
            DomainListStatus::Ready => ListStatus::Ready,
        }
    }
}
