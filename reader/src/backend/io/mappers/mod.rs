pub mod donation_mapper;
pub mod render_mapper;
pub mod settings_mapper;

pub use donation_mapper::DonationMapper;
pub use render_mapper::RenderMapper;
pub use settings_mapper::SettingsMapper;
