//! Partitioning of donation records by donor.

use crate::backend::domain::models::donation::FeedRecord;
use crate::backend::domain::models::donor::DonorGroups;
use log::debug;

/// Group records by donor name.
///
/// Names are taken verbatim, so "Ada" and "ada " are different donors. Donors
/// appear in the order they are first seen and every record lands in exactly
/// one group.
pub fn group_by_donor<'a, I>(records: I) -> DonorGroups<'a>
where
    I: IntoIterator<Item = &'a FeedRecord>,
{
    let mut groups = DonorGroups::new();
    for record in records {
        groups.push(record);
    }
    debug!(
        "Grouped {} donations into {} donors",
        groups.record_count(),
        groups.len()
    );
    groups
}
