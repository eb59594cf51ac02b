//! Domain-level command types.
//! These are produced by the settings collaborator and are **not** part of the
//! public DTOs in the `shared` crate. The IO layer maps raw setting tokens to
//! these types.

pub mod settings {
    use crate::backend::domain::models::settings::{ListMode, ShowFlag, SortDirection, SortKey};

    /// One operator edit to the reader settings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum SettingsCommand {
        SetList(ListMode),
        SetSort(SortKey),
        SetDirection(SortDirection),
        ToggleDirection,
        Show(ShowFlag),
        Hide(ShowFlag),
        ToggleShow(ShowFlag),
        /// Back to the graphic's startup settings
        Reset,
    }
}
