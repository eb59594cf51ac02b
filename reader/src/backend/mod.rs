//! # Backend Module
//!
//! Contains all non-UI logic for the donation reader.
//!
//! This module serves as the orchestration layer that brings together:
//! - **Domain**: filtering, sorting, grouping and summarizing donations
//! - **Storage**: where feed snapshots come from (memory, JSON dump)
//! - **IO**: mapping between the `shared` DTOs and domain types
//! - **Config**: YAML configuration with environment overrides
//!
//! The backend is UI-agnostic. The card renderer only ever sees the
//! [`shared::RenderList`] produced by [`AppState::render`].
//!
//! ## Architecture
//!
//! ```text
//! Card renderer / settings panel
//!     ↓
//! IO Layer (mappers)
//!     ↓
//! Domain Layer (reader service)
//!     ↓
//! Storage Layer (feed sources)
//! ```

pub mod config;
pub mod domain;
pub mod io;
pub mod storage;

use crate::backend::config::ReaderConfig;
use crate::backend::domain::commands::settings::SettingsCommand;
use crate::backend::domain::models::settings::ReaderSettings;
use crate::backend::domain::ReaderService;
use crate::backend::io::{RenderMapper, SettingsMapper};
use crate::backend::storage::{FeedSource, InMemoryFeed, JsonSnapshotFeed};
use anyhow::Result;
use log::{debug, info};
use shared::{RenderList, SortSettings};
use std::sync::Arc;

/// Main application state: the feed, the render service and the current settings
#[derive(Clone)]
pub struct AppState {
    pub reader_service: ReaderService,
    pub feed: Arc<dyn FeedSource>,
    pub settings: ReaderSettings,
}

impl AppState {
    pub fn new(feed: Arc<dyn FeedSource>, config: &ReaderConfig) -> Self {
        Self {
            reader_service: ReaderService::with_fallback_currency(&config.fallback_currency),
            feed,
            settings: SettingsMapper::to_domain(&config.settings),
        }
    }

    /// Run one render pass over the current feed snapshot
    pub fn render(&self) -> Result<RenderList> {
        let snapshot = self.feed.snapshot()?;
        let view = self.reader_service.render(&snapshot, &self.settings);
        Ok(RenderMapper::to_dto(&view))
    }

    /// Apply an operator edit to the settings
    pub fn apply(&mut self, command: SettingsCommand) {
        debug!("Applying settings command {:?}", command);
        self.settings = self.settings.apply(command);
    }

    /// Replace the settings with a panel's raw tokens
    pub fn update_settings(&mut self, dto: &SortSettings) {
        self.settings = SettingsMapper::to_domain(dto);
    }

    pub fn settings_dto(&self) -> SortSettings {
        SettingsMapper::to_dto(&self.settings)
    }
}

/// Initialize the backend from configuration
pub fn initialize_backend(config: &ReaderConfig) -> Result<AppState> {
    let feed: Arc<dyn FeedSource> = match config.snapshot_path {
        Some(ref path) => {
            info!("Setting up JSON snapshot feed at {}", path.display());
            Arc::new(JsonSnapshotFeed::new(path))
        }
        None => {
            info!("No snapshot configured, setting up empty in-memory feed");
            Arc::new(InMemoryFeed::new())
        }
    };

    info!(
        "Setting up reader service (fallback currency {})",
        config.fallback_currency
    );
    let state = AppState::new(feed, config);
    info!("Backend initialized with settings {:?}", state.settings);
    Ok(state)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::backend::domain::models::donation::{Amount, FeedRecord, FeedSnapshot, LiveDonation, ModStatus};
    use crate::backend::domain::models::settings::{ListMode, SortDirection};
    use shared::{ListStatus, RenderEntry, ViewKind};
    use std::io::Write;

    fn create_test_donation(id: &str, donor: &str, amount: f64, completed_at: &str) -> FeedRecord {
        FeedRecord::Live(LiveDonation {
            id: id.to_string(),
            donor_name: donor.to_string(),
            donor_comment: None,
            amount: Some(Amount::new("GBP", amount)),
            display_amount: Some(Amount::new("GBP", amount)),
            completed_at: completed_at.to_string(),
            read: false,
            mod_status: Some(ModStatus::Approved),
        })
    }

    fn create_test_state() -> (Arc<InMemoryFeed>, AppState) {
        let feed = Arc::new(InMemoryFeed::new());
        let state = AppState::new(feed.clone(), &ReaderConfig::default());
        (feed, state)
    }

    fn keys(list: &RenderList) -> Vec<&str> {
        list.entries.iter().map(RenderEntry::key).collect()
    }

    #[test]
    fn test_empty_feed_renders_placeholder() {
        let (_feed, state) = create_test_state();

        let list = state.render().unwrap();

        assert_eq!(list.status, ListStatus::NoDonations);
        assert_eq!(list.placeholder.as_deref(), Some("Loading... or No Donations Yet!"));
        assert!(list.entries.is_empty());
    }

    #[test]
    fn test_render_follows_published_snapshot_and_commands() {
        let (feed, mut state) = create_test_state();
        feed.publish(FeedSnapshot {
            donations: vec![
                create_test_donation("rec1", "A", 10.0, "2024-01-01"),
                create_test_donation("rec2", "B", 5.0, "2024-01-02"),
                create_test_donation("rec3", "A", 3.0, "2024-01-03"),
            ],
            ..FeedSnapshot::default()
        });

        // Defaults: live list, money ascending
        let list = state.render().unwrap();
        assert_eq!(list.view, ViewKind::Live);
        assert_eq!(keys(&list), vec!["rec3", "rec2", "rec1"]);

        state.apply(SettingsCommand::SetDirection(SortDirection::Descending));
        assert_eq!(keys(&state.render().unwrap()), vec!["rec1", "rec2", "rec3"]);

        state.apply(SettingsCommand::SetList(ListMode::Donors));
        let list = state.render().unwrap();
        assert_eq!(list.view, ViewKind::Donors);
        assert_eq!(keys(&list), vec!["A", "B"]);
    }

    #[test]
    fn test_update_settings_from_tokens() {
        let (_feed, mut state) = create_test_state();

        state.update_settings(&SortSettings {
            list: "all".to_string(),
            sort: "date".to_string(),
            dir: "desc".to_string(),
            show: vec!["read".to_string()],
        });

        let dto = state.settings_dto();
        assert_eq!(dto.list, "all");
        assert_eq!(dto.sort, "date");
        assert_eq!(dto.dir, "desc");
        assert_eq!(dto.show, vec!["read".to_string()]);
    }

    #[test]
    fn test_initialize_backend_with_snapshot_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"{{"alldonations": [{{"id": 7, "donor_name": "Ada", "amount": {{"currency": "USD", "value": 4}},
                "completed_at": "2024-02-01T00:00:00Z"}}]}}"#
        )
        .unwrap();

        let config = ReaderConfig {
            snapshot_path: Some(file.path().to_path_buf()),
            settings: SortSettings {
                list: "all".to_string(),
                ..SortSettings::default()
            },
            ..ReaderConfig::default()
        };
        let state = initialize_backend(&config).unwrap();
        let list = state.render().unwrap();

        assert_eq!(list.status, ListStatus::Ready);
        assert_eq!(keys(&list), vec!["7"]);
    }

    #[test]
    fn test_missing_snapshot_file_is_error() {
        let dir = tempfile::tempdir().unwrap();
        let config = ReaderConfig {
            snapshot_path: Some(dir.path().join("absent.json")),
            ..ReaderConfig::default()
        };

        let state = initialize_backend(&config).unwrap();

        assert!(state.render().is_err());
    }
}
