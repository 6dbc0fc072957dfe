use crate::error::{Error, Result};
use crate::types::{Notification, Priority};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Priority filter selected in the notification dropdown.
///
/// Serialized as a flat string, the same spelling `FromStr` accepts: `"all"`, `"urgent"`, ...
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum PriorityFilter {
    #[default]
    All,
    Only(Priority),
}

impl PriorityFilter {
    /// Check if a notification passes the filter
    pub fn matches(&self, notification: &Notification) -> bool {
        match self {
            PriorityFilter::All => true,
            PriorityFilter::Only(priority) => notification.priority() == *priority,
        }
    }
}

impl From<Priority> for PriorityFilter {
    fn from(priority: Priority) -> Self {
        PriorityFilter::Only(priority)
    }
}

impl FromStr for PriorityFilter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        if s.trim().eq_ignore_ascii_case("all") {
            return Ok(PriorityFilter::All);
        }
        s.parse::<Priority>().map(PriorityFilter::Only)
    }
}

impl fmt::Display for PriorityFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PriorityFilter::All => f.write_str("all"),
            PriorityFilter::Only(priority) => f.write_str(priority.as_str()),
        }
    }
}

impl From<PriorityFilter> for String {
    fn from(filter: PriorityFilter) -> Self {
        filter.to_string()
    }
}

impl TryFrom<String> for PriorityFilter {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Keep the notifications matching `filter`, in input order
pub fn filter_by_priority<'a, I>(notifications: I, filter: PriorityFilter) -> Vec<&'a Notification>
where
    I: IntoIterator<Item = &'a Notification>,
{
    notifications
        .into_iter()
        .filter(|n| filter.matches(n))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::parse_timestamp;
    use crate::types::Category;

    fn notification(id: &str, priority: Priority) -> Notification {
        Notification::new(
            id,
            "title",
            "message",
            Category::Tasks,
            priority,
            parse_timestamp("2026-10-17T08:00:00").unwrap(),
        )
    }

    fn ids(items: &[&Notification]) -> Vec<String> {
        items.iter().map(|n| n.id().to_string()).collect()
    }

    #[test]
    fn test_all_keeps_everything_in_order() {
        let ns = vec![
            notification("a", Priority::Info),
            notification("b", Priority::Urgent),
            notification("c", Priority::ActionNeeded),
        ];

        let kept = filter_by_priority(&ns, PriorityFilter::All);
        assert_eq!(ids(&kept), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_only_keeps_matching_priority() {
        let ns = vec![
            notification("a", Priority::Urgent),
            notification("b", Priority::Info),
            notification("c", Priority::Urgent),
        ];

        let kept = filter_by_priority(&ns, PriorityFilter::Only(Priority::Urgent));
        assert_eq!(ids(&kept), vec!["a", "c"]);

        let kept = filter_by_priority(&ns, Priority::ActionNeeded.into());
        assert!(kept.is_empty());
    }

    #[test]
    fn test_empty_input() {
        let ns: Vec<Notification> = Vec::new();
        assert!(filter_by_priority(&ns, PriorityFilter::All).is_empty());
    }

    #[test]
    fn test_parse_filter() {
        assert_eq!("ALL".parse::<PriorityFilter>().unwrap(), PriorityFilter::All);
        assert_eq!(
            "action_needed".parse::<PriorityFilter>().unwrap(),
            PriorityFilter::Only(Priority::ActionNeeded)
        );
        assert!("someday".parse::<PriorityFilter>().is_err());
    }

    #[test]
    fn test_serializes_as_flat_string() {
        assert_eq!(
            serde_json::to_value(PriorityFilter::All).unwrap(),
            serde_json::json!("all")
        );
        assert_eq!(
            serde_json::to_value(PriorityFilter::Only(Priority::ActionNeeded)).unwrap(),
            serde_json::json!("action_needed")
        );

        let back: PriorityFilter = serde_json::from_str(r#""info""#).unwrap();
        assert_eq!(back, PriorityFilter::Only(Priority::Info));
        assert!(serde_json::from_str::<PriorityFilter>(r#"{"only":"info"}"#).is_err());
        assert!(serde_json::from_str::<PriorityFilter>(r#""someday""#).is_err());
    }
}
