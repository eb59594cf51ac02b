//! # Domain Module
//!
//! Contains the business logic of the donation reader.
//!
//! This module turns a snapshot of the donation feeds plus the operator's
//! sort/filter settings into the ordered list the broadcast graphic draws. It
//! operates independently of the feed transport, the settings panel and the
//! card renderer.
//!
//! ## Module Organization
//!
//! - **donation_filter**: read-state and moderation filtering
//! - **donation_sort**: ordering by amount or time, ascending or descending
//! - **donor_grouping**: partitioning donations by donor name
//! - **donor_summary**: per-donor totals and latest activity
//! - **view_selector**: choosing the live, all-time or donor listing
//! - **reader_service**: one render pass over the pipeline
//! - **commands**: operator edits to the settings
//! - **models**: donation records, donor aggregates and settings
//!
//! ## Business Rules
//!
//! - Only live donations carry read and moderation state; all-time donations
//!   are never filtered
//! - A donation is shown only when both its read state and its moderation
//!   state are selected
//! - Donor names group verbatim, with no case or whitespace folding
//! - Missing amounts count as zero, missing timestamps as the empty string
//! - Timestamps order as strings, which assumes zero-padded ISO-8601
//!
//! ## Design Principles
//!
//! - **Pure Functions**: every render pass is a function of one feed snapshot
//!   and one settings value
//! - **Borrowed Records**: the pipeline hands out references into the
//!   snapshot and never reorders it
//! - **Immutable Settings**: edits produce new settings values

pub mod commands;
pub mod donation_filter;
pub mod donation_sort;
pub mod donor_grouping;
pub mod donor_summary;
pub mod models;
pub mod reader_service;
pub mod view_selector;

pub use donation_filter::*;
pub use donation_sort::*;
pub use donor_grouping::*;
pub use donor_summary::*;
pub use reader_service::*;
pub use view_selector::*;
