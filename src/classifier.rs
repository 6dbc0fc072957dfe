//! Badge count and bucket partition for the notification dropdown.
//!
//! Priority dominates recency: Urgent and ActionNeeded items get their own
//! buckets whatever their age, and only Info items are split by day.

use crate::time::start_of_day;
use crate::types::{Notification, Priority};
use chrono::{Duration, NaiveDateTime};
use serde::Serialize;

/// Number of unread notifications that need a decision (Urgent or ActionNeeded)
pub fn compute_badge_count<'a, I>(notifications: I) -> usize
where
    I: IntoIterator<Item = &'a Notification>,
{
    let count = notifications
        .into_iter()
        .filter(|n| !n.is_read() && n.priority().needs_decision())
        .count();
    tracing::debug!(count, "computed badge count");
    count
}

/// Number of unread notifications of any priority
pub fn compute_unread_count<'a, I>(notifications: I) -> usize
where
    I: IntoIterator<Item = &'a Notification>,
{
    notifications.into_iter().filter(|n| !n.is_read()).count()
}

/// Display group of the notification dropdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Bucket {
    Urgent,
    ActionNeeded,
    Today,
    ThisWeek,
    Older,
}

impl Bucket {
    /// Buckets in display order
    pub const ALL: [Bucket; 5] = [
        Bucket::Urgent,
        Bucket::ActionNeeded,
        Bucket::Today,
        Bucket::ThisWeek,
        Bucket::Older,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Bucket::Urgent => "Urgent",
            Bucket::ActionNeeded => "Action Needed",
            Bucket::Today => "Today",
            Bucket::ThisWeek => "This Week",
            Bucket::Older => "Older",
        }
    }
}

/// Day boundaries used to split Info notifications
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayWindows {
    pub today: NaiveDateTime,
    pub week_ago: NaiveDateTime,
}

impl DayWindows {
    /// `today` is midnight of the day containing `now`; `week_ago` is exactly 7 days before that midnight.
    ///
    /// Near the start of chrono's range `week_ago` saturates at `NaiveDateTime::MIN`.
    pub fn at(now: NaiveDateTime) -> Self {
        let today = start_of_day(now);
        Self {
            today,
            week_ago: today
                .checked_sub_signed(Duration::days(7))
                .unwrap_or(NaiveDateTime::MIN),
        }
    }

    pub fn bucket_for(&self, notification: &Notification) -> Bucket {
        match notification.priority() {
            Priority::Urgent => Bucket::Urgent,
            Priority::ActionNeeded => Bucket::ActionNeeded,
            Priority::Info => {
                let ts = notification.timestamp();
                if ts >= self.today {
                    Bucket::Today
                } else if ts >= self.week_ago {
                    Bucket::ThisWeek
                } else {
                    Bucket::Older
                }
            }
        }
    }
}

/// The five display groups, each sorted newest first
#[derive(Debug, Clone, Default, Serialize)]
pub struct Buckets<'a> {
    pub urgent: Vec<&'a Notification>,
    pub action_needed: Vec<&'a Notification>,
    pub today: Vec<&'a Notification>,
    pub this_week: Vec<&'a Notification>,
    pub older: Vec<&'a Notification>,
}

impl<'a> Buckets<'a> {
    pub fn get(&self, bucket: Bucket) -> &[&'a Notification] {
        match bucket {
            Bucket::Urgent => &self.urgent,
            Bucket::ActionNeeded => &self.action_needed,
            Bucket::Today => &self.today,
            Bucket::ThisWeek => &self.this_week,
            Bucket::Older => &self.older,
        }
    }

    fn get_mut(&mut self, bucket: Bucket) -> &mut Vec<&'a Notification> {
        match bucket {
            Bucket::Urgent => &mut self.urgent,
            Bucket::ActionNeeded => &mut self.action_needed,
            Bucket::Today => &mut self.today,
            Bucket::ThisWeek => &mut self.this_week,
            Bucket::Older => &mut self.older,
        }
    }

    /// Buckets with their contents, in display order (empty ones included)
    pub fn iter(&self) -> impl Iterator<Item = (Bucket, &[&'a Notification])> + '_ {
        Bucket::ALL.into_iter().map(move |b| (b, self.get(b)))
    }

    /// Total number of notifications across all buckets
    pub fn len(&self) -> usize {
        Bucket::ALL.iter().map(|b| self.get(*b).len()).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Split notifications into display buckets.
///
/// Every input item lands in exactly one bucket. Within a bucket items are
/// ordered by timestamp, newest first; equal timestamps keep input order.
pub fn partition<'a, I>(notifications: I, now: NaiveDateTime) -> Buckets<'a>
where
    I: IntoIterator<Item = &'a Notification>,
{
    let windows = DayWindows::at(now);
    let mut buckets = Buckets::default();

    for notification in notifications {
        buckets
            .get_mut(windows.bucket_for(notification))
            .push(notification);
    }

    for bucket in Bucket::ALL {
        buckets
            .get_mut(bucket)
            .sort_by(|a, b| b.timestamp().cmp(&a.timestamp()));
    }

    tracing::debug!(
        urgent = buckets.urgent.len(),
        action_needed = buckets.action_needed.len(),
        today = buckets.today.len(),
        this_week = buckets.this_week.len(),
        older = buckets.older.len(),
        "partitioned notifications"
    );

    buckets
}
