use crate::backend::domain::models::settings::{
    ListMode, ReaderSettings, ShowFlag, ShowSet, SortDirection, SortKey,
};
use log::warn;
use shared::SortSettings;

pub struct SettingsMapper;

impl SettingsMapper {
    /// Read raw setting tokens. Nothing here fails: an unknown list mode falls
    /// back to the live feed and unknown show tokens are dropped.
    pub fn to_domain(dto: &SortSettings) -> ReaderSettings {
        let list = ListMode::from_token(&dto.list).unwrap_or_else(|| {
            warn!("Unknown list mode '{}', showing the live feed", dto.list);
            ListMode::Live
        });

        let show: ShowSet = dto
            .show
            .iter()
            .filter_map(|token| {
                let flag = ShowFlag::from_token(token);
                if flag.is_none() {
                    warn!("Ignoring unknown show token '{}'", token);
                }
                flag
            })
            .collect();

        ReaderSettings {
            list,
            sort: SortKey::from_token(&dto.sort),
            direction: SortDirection::from_token(&dto.dir),
            show,
        }
    }

    pub fn to_dto(domain: &ReaderSettings) -> SortSettings {
        SortSettings {
            list: domain.list.as_str().to_string(),
            sort: domain.sort.as_str().to_string(),
            dir: domain.direction.as_str().to_string(),
            show: domain.show.iter().map(|f| f.as_str().to_string()).collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_dto(list: &str, sort: &str, dir: &str, show: &[&str]) -> SortSettings {
        SortSettings {
            list: list.to_string(),
            sort: sort.to_string(),
            dir: dir.to_string(),
            show: show.iter().map(|s| s.to_string()).collect(),
        }
    }

    #[test]
    fn test_default_dto_matches_default_settings() {
        assert_eq!(SettingsMapper::to_domain(&SortSettings::default()), ReaderSettings::default());
    }

    #[test]
    fn test_unknown_tokens_fall_back() {
        let settings = SettingsMapper::to_domain(&create_test_dto(
            "top",
            "weight",
            "sideways",
            &["unread", "shiny", "approved"],
        ));

        assert_eq!(settings.list, ListMode::Live);
        assert_eq!(settings.sort, SortKey::Time);
        assert_eq!(settings.direction, SortDirection::Descending);
        assert_eq!(settings.show.len(), 2);
        assert!(settings.show.contains(ShowFlag::Unread));
        assert!(settings.show.contains(ShowFlag::Approved));
    }

    #[test]
    fn test_to_dto_round_trips() {
        let dto = create_test_dto("donors", "date", "desc", &["read", "censored"]);
        let back = SettingsMapper::to_dto(&SettingsMapper::to_domain(&dto));
        assert_eq!(back, dto);
    }
}
