//! Notification classification for the Revere legislative-affairs dashboard.
//!
//! This library turns a flat collection of notifications into the views the
//! notification dropdown shows: the bell badge count, priority/recency
//! buckets, relative-time labels and mute scopes. Every classifier function is
//! pure; effects such as marking read or snoozing are described as commands
//! and left to the caller.

pub mod actions;
pub mod classifier;
pub mod config;
pub mod digest;
pub mod error;
pub mod feed;
pub mod filter;
pub mod mute;
pub mod time;
pub mod types;

pub use actions::{card_actions, snooze_options, toggle_read_command, SnoozeOption};
pub use classifier::{compute_badge_count, compute_unread_count, partition, Bucket, Buckets};
pub use config::{Config, ConfigBuilder, FileConfig, OutputFormat};
pub use digest::{Digest, DigestGroup, DigestItem};
pub use error::{Error, Result};
pub use feed::{load_notifications, read_notifications};
pub use filter::{filter_by_priority, PriorityFilter};
pub use mute::mute_scopes_for;
pub use time::{format_relative_time, parse_timestamp};
pub use types::{
    ActionDescriptor, Category, LinkKind, LinkRef, Notification, NotificationCommand, Priority,
};

/// Re-export commonly used types for convenience
pub mod prelude {
    pub use crate::classifier::{compute_badge_count, partition, Bucket, Buckets};
    pub use crate::config::{Config, ConfigBuilder, OutputFormat};
    pub use crate::digest::Digest;
    pub use crate::error::{Error, Result};
    pub use crate::filter::{filter_by_priority, PriorityFilter};
    pub use crate::mute::mute_scopes_for;
    pub use crate::time::format_relative_time;
    pub use crate::types::{Category, Notification, Priority};
}
