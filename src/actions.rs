//! Card menu for a single notification: read toggle, snooze and mute.
//!
//! Everything here describes effects as [`NotificationCommand`] values; the
//! presentation layer decides how to carry them out.

use crate::mute::mute_scopes_for;
use crate::time::start_of_day;
use crate::types::{ActionDescriptor, Notification, NotificationCommand};
use chrono::{Datelike, Duration, NaiveDateTime};
use serde::Serialize;

/// Hour of day snoozed notifications reappear at ("Tomorrow", "Next week")
pub const SNOOZE_MORNING_HOUR: i64 = 9;

/// A snooze choice offered on a card
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnoozeOption {
    pub label: &'static str,
    pub until: NaiveDateTime,
}

/// Snooze choices relative to `now`: one hour, tomorrow morning, next Monday morning.
///
/// Choices that would fall past the end of the representable calendar are left out.
pub fn snooze_options(now: NaiveDateTime) -> Vec<SnoozeOption> {
    let midnight = start_of_day(now);
    let morning = Duration::hours(SNOOZE_MORNING_HOUR);

    // Monday counts as 0, so from a Monday this is the following Monday
    let days_to_monday = 7 - i64::from(now.weekday().num_days_from_monday());

    let candidates = [
        ("1 hour", now.checked_add_signed(Duration::hours(1))),
        (
            "Tomorrow",
            midnight
                .checked_add_signed(Duration::days(1))
                .and_then(|day| day.checked_add_signed(morning)),
        ),
        (
            "Next week",
            midnight
                .checked_add_signed(Duration::days(days_to_monday))
                .and_then(|day| day.checked_add_signed(morning)),
        ),
    ];

    candidates
        .into_iter()
        .filter_map(|(label, until)| until.map(|until| SnoozeOption { label, until }))
        .collect()
}

/// Command flipping the read state of `notification`
pub fn toggle_read_command(notification: &Notification) -> ActionDescriptor {
    if notification.is_read() {
        ActionDescriptor::new("Mark as unread", NotificationCommand::MarkUnread)
    } else {
        ActionDescriptor::new("Mark as read", NotificationCommand::MarkRead)
    }
}

/// Full card menu: read toggle, snoozes, mutes, open link, then the notification's own actions
pub fn card_actions(notification: &Notification, now: NaiveDateTime) -> Vec<ActionDescriptor> {
    let mut actions = vec![toggle_read_command(notification)];

    actions.extend(snooze_options(now).into_iter().map(|option| {
        ActionDescriptor::new(
            format!("Snooze: {}", option.label),
            NotificationCommand::Snooze {
                until: option.until,
            },
        )
    }));

    actions.extend(mute_scopes_for(notification.category()).iter().map(|scope| {
        ActionDescriptor::new(
            format!("Mute: {}", scope),
            NotificationCommand::Mute {
                scope: scope.to_string(),
            },
        )
    }));

    if let Some(link) = notification.link() {
        actions.push(ActionDescriptor::new(
            "Open",
            NotificationCommand::Open { link: link.clone() },
        ));
    }

    actions.extend(notification.actions().iter().cloned());
    actions
}
