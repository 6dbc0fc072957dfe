use crate::classifier::{compute_badge_count, compute_unread_count, partition, Bucket};
use crate::filter::{filter_by_priority, PriorityFilter};
use crate::mute::mute_scopes_for;
use crate::time::{format_relative_time, serde_timestamp};
use crate::types::Notification;
use chrono::NaiveDateTime;
use serde::Serialize;

/// A notification as shown in the dropdown
#[derive(Debug, Clone, Serialize)]
pub struct DigestItem<'a> {
    pub notification: &'a Notification,
    pub relative_time: String,
    pub mute_scopes: &'static [&'static str],
}

/// One non-empty display group
#[derive(Debug, Clone, Serialize)]
pub struct DigestGroup<'a> {
    pub bucket: Bucket,
    pub label: &'static str,
    pub items: Vec<DigestItem<'a>>,
}

/// Everything the dropdown needs: bell badge, unread total and grouped items
#[derive(Debug, Clone, Serialize)]
pub struct Digest<'a> {
    #[serde(with = "serde_timestamp")]
    pub generated_at: NaiveDateTime,
    pub filter: PriorityFilter,
    pub badge_count: usize,
    pub unread_count: usize,
    pub groups: Vec<DigestGroup<'a>>,
}

impl<'a> Digest<'a> {
    /// Classify `notifications` as of `now`.
    ///
    /// The badge and unread counts always cover the whole collection; only the
    /// groups honour `filter`.
    pub fn build(notifications: &'a [Notification], filter: PriorityFilter, now: NaiveDateTime) -> Self {
        let filtered = filter_by_priority(notifications, filter);
        let buckets = partition(filtered, now);

        let groups = buckets
            .iter()
            .filter(|(_, items)| !items.is_empty())
            .map(|(bucket, items)| DigestGroup {
                bucket,
                label: bucket.label(),
                items: items
                    .iter()
                    .map(|&n| DigestItem {
                        notification: n,
                        relative_time: format_relative_time(n.timestamp(), now),
                        mute_scopes: mute_scopes_for(n.category()),
                    })
                    .collect(),
            })
            .collect();

        Self {
            generated_at: now,
            filter,
            badge_count: compute_badge_count(notifications),
            unread_count: compute_unread_count(notifications),
            groups,
        }
    }

    /// Number of notifications shown across all groups
    pub fn shown(&self) -> usize {
        self.groups.iter().map(|g| g.items.len()).sum()
    }

    /// Plain-text rendering for terminals
    pub fn render_text(&self) -> String {
        let mut lines = vec![format!(
            "Badge: {}  Unread: {}  Filter: {}",
            self.badge_count, self.unread_count, self.filter
        )];

        if self.groups.is_empty() {
            lines.push(String::new());
            lines.push("No notifications".to_string());
            return lines.join("\n");
        }

        for group in &self.groups {
            lines.push(String::new());
            lines.push(format!("== {} ({}) ==", group.label, group.items.len()));
            for item in &group.items {
                let n = item.notification;
                let marker = if n.is_read() { ' ' } else { '*' };
                lines.push(format!(
                    "{} {} [{}] {}",
                    marker,
                    n.title(),
                    n.category(),
                    item.relative_time
                ));
                lines.push(format!("    {}", n.message()));
            }
        }

        lines.join("\n")
    }
}
