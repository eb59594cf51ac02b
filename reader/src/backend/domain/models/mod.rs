pub mod donation;
pub mod donor;
pub mod settings;
