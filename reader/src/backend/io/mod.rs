//! # IO Module
//!
//! Provides the boundary between the outside world and the domain logic.
//!
//! The feed, the settings panel and the card renderer all speak in the DTOs of
//! the `shared` crate. This module translates those wire shapes into domain
//! types on the way in and domain results back into DTOs on the way out.
//!
//! ## Key Responsibilities
//!
//! - **Ingestion**: tagging each feed record as live or all-time as it arrives
//! - **Settings Translation**: reading raw setting tokens with documented
//!   fallbacks for anything unrecognised
//! - **Render Output**: flattening a borrowed view into an owned render list
//!   keyed for list reconciliation
//!
//! ## Design Patterns
//!
//! - **Mapper Pattern**: one stateless mapper per DTO family
//! - **Request/Response DTOs**: the domain never sees wire types

pub mod mappers;

pub use mappers::*;
