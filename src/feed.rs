use crate::error::Result;
use crate::types::Notification;
use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

/// Read notifications from a JSON array or from JSON Lines (one notification per line)
pub fn read_notifications<R: Read>(mut reader: R) -> Result<Vec<Notification>> {
    let mut contents = String::new();
    reader.read_to_string(&mut contents)?;
    parse_notifications(&contents)
}

/// Load notifications from a feed file
pub fn load_notifications(path: &Path) -> Result<Vec<Notification>> {
    let contents = fs::read_to_string(path)?;
    tracing::debug!(path = %path.display(), "loaded notification feed");
    parse_notifications(&contents)
}

/// Parse a feed held in memory
pub fn parse_notifications(contents: &str) -> Result<Vec<Notification>> {
    let notifications: Vec<Notification> = if contents.trim_start().starts_with('[') {
        serde_json::from_str(contents)?
    } else {
        contents
            .lines()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(serde_json::from_str::<Notification>)
            .collect::<std::result::Result<Vec<_>, _>>()?
    };

    warn_on_duplicate_ids(&notifications);
    Ok(notifications)
}

fn warn_on_duplicate_ids(notifications: &[Notification]) {
    let mut seen = HashSet::new();
    for notification in notifications {
        if !seen.insert(notification.id()) {
            tracing::warn!(id = notification.id(), "duplicate notification id in feed");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::types::{Category, Priority};

    const LINE_A: &str = r#"{"id":"a","title":"Filing due","message":"LM-2 due Friday","category":"compliance","priority":"urgent","timestamp":"2026-10-16T10:00:00"}"#;
    const LINE_B: &str = r#"{"id":"b","title":"New hire","message":"Chief of staff changed","category":"relationship","priority":"info","timestamp":"2026-10-15T10:00:00","read":true}"#;

    #[test]
    fn test_reads_json_array() {
        let feed = format!("[{}, {}]", LINE_A, LINE_B);
        let ns = read_notifications(feed.as_bytes()).unwrap();

        assert_eq!(ns.len(), 2);
        assert_eq!(ns[0].category(), Category::Compliance);
        assert_eq!(ns[1].priority(), Priority::Info);
        assert!(ns[1].is_read());
    }

    #[test]
    fn test_reads_json_lines() {
        let feed = format!("{}\n\n{}\n", LINE_A, LINE_B);
        let ns = read_notifications(feed.as_bytes()).unwrap();

        let ids: Vec<&str> = ns.iter().map(|n| n.id()).collect();
        assert_eq!(ids, vec!["a", "b"]);
    }

    #[test]
    fn test_accepts_pascal_and_kebab_case_enum_names() {
        let feed = concat!(
            r#"{"id":"w","title":"War room stood up","message":"Budget fight","category":"WarRoom","priority":"ActionNeeded","timestamp":"2026-10-16T10:00:00"}"#,
            "\n",
            r#"{"id":"c","title":"Client call","message":"Acme debrief","category":"client-work","priority":"action-needed","timestamp":"2026-10-16T11:00:00"}"#,
        );
        let ns = read_notifications(feed.as_bytes()).unwrap();

        assert_eq!(ns[0].category(), Category::WarRoom);
        assert_eq!(ns[0].priority(), Priority::ActionNeeded);
        assert_eq!(ns[1].category(), Category::ClientWork);
        assert_eq!(ns[1].priority(), Priority::ActionNeeded);

        // Written back in the canonical snake_case form
        let value = serde_json::to_value(&ns[0]).unwrap();
        assert_eq!(value["category"], "war_room");
        assert_eq!(value["priority"], "action_needed");
    }

    #[test]
    fn test_unknown_enum_name_is_an_error() {
        let feed = r#"{"id":"x","title":"t","message":"m","category":"lobbying","priority":"info","timestamp":"2026-10-16T10:00:00"}"#;
        assert!(matches!(parse_notifications(feed), Err(Error::Json(_))));
    }

    #[test]
    fn test_empty_feed() {
        assert!(parse_notifications("").unwrap().is_empty());
        assert!(parse_notifications("  []  ").unwrap().is_empty());
    }

    #[test]
    fn test_invalid_line_is_an_error() {
        let feed = format!("{}\nnot json\n", LINE_A);
        assert!(matches!(parse_notifications(&feed), Err(Error::Json(_))));
    }

    #[test]
    fn test_duplicate_ids_are_kept() {
        let feed = format!("{}\n{}\n", LINE_A, LINE_A);
        assert_eq!(parse_notifications(&feed).unwrap().len(), 2);
    }
}
