use crate::error::{Error, Result};
use crate::time::serde_timestamp;
use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Domain area a notification belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Category {
    Compliance,
    Legislation,
    Relationship,
    Records,
    Intel,
    Tasks,
    Calendar,
    Elections,
    ClientWork,
    WarRoom,
}

impl Category {
    pub const ALL: [Category; 10] = [
        Category::Compliance,
        Category::Legislation,
        Category::Relationship,
        Category::Records,
        Category::Intel,
        Category::Tasks,
        Category::Calendar,
        Category::Elections,
        Category::ClientWork,
        Category::WarRoom,
    ];

    /// snake_case name, as used in feeds
    pub fn as_str(&self) -> &'static str {
        match self {
            Category::Compliance => "compliance",
            Category::Legislation => "legislation",
            Category::Relationship => "relationship",
            Category::Records => "records",
            Category::Intel => "intel",
            Category::Tasks => "tasks",
            Category::Calendar => "calendar",
            Category::Elections => "elections",
            Category::ClientWork => "client_work",
            Category::WarRoom => "war_room",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "compliance" => Ok(Category::Compliance),
            "legislation" => Ok(Category::Legislation),
            "relationship" => Ok(Category::Relationship),
            "records" => Ok(Category::Records),
            "intel" => Ok(Category::Intel),
            "tasks" => Ok(Category::Tasks),
            "calendar" => Ok(Category::Calendar),
            "elections" => Ok(Category::Elections),
            "clientwork" => Ok(Category::ClientWork),
            "warroom" => Ok(Category::WarRoom),
            _ => Err(Error::InvalidCategory(s.to_string())),
        }
    }
}

impl TryFrom<String> for Category {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Urgency of a notification, independent of its age
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum Priority {
    Info,
    ActionNeeded,
    Urgent,
}

impl Priority {
    pub const ALL: [Priority; 3] = [Priority::Info, Priority::ActionNeeded, Priority::Urgent];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Info => "info",
            Priority::ActionNeeded => "action_needed",
            Priority::Urgent => "urgent",
        }
    }

    /// Whether an unread notification of this priority counts toward the badge
    pub fn needs_decision(&self) -> bool {
        match self {
            Priority::Urgent | Priority::ActionNeeded => true,
            Priority::Info => false,
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match normalize_name(s).as_str() {
            "info" => Ok(Priority::Info),
            "actionneeded" => Ok(Priority::ActionNeeded),
            "urgent" => Ok(Priority::Urgent),
            _ => Err(Error::InvalidPriority(s.to_string())),
        }
    }
}

impl TryFrom<String> for Priority {
    type Error = Error;

    fn try_from(s: String) -> Result<Self> {
        s.parse()
    }
}

/// Lowercase and drop separators so "ClientWork", "client_work" and "client-work" compare equal
fn normalize_name(s: &str) -> String {
    s.chars()
        .filter(|c| !matches!(c, '_' | '-' | ' '))
        .flat_map(char::to_lowercase)
        .collect()
}

/// Kind of domain object a notification points at
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Bill,
    Person,
    Record,
    Task,
}

/// Reference to a related domain object (identification only)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LinkRef {
    pub kind: LinkKind,
    pub id: String,
}

impl LinkRef {
    pub fn new(kind: LinkKind, id: impl Into<String>) -> Self {
        Self {
            kind,
            id: id.into(),
        }
    }
}

/// An effect the presentation layer is asked to perform.
///
/// Commands are plain data; resolving them to persistence calls is the caller's job.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum NotificationCommand {
    MarkRead,
    MarkUnread,
    Snooze {
        #[serde(with = "serde_timestamp")]
        until: NaiveDateTime,
    },
    Mute {
        scope: String,
    },
    Open {
        link: LinkRef,
    },
    Custom {
        name: String,
        #[serde(default, skip_serializing_if = "serde_json::Value::is_null")]
        payload: serde_json::Value,
    },
}

/// A labelled command offered inline on a notification card
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ActionDescriptor {
    pub label: String,
    pub command: NotificationCommand,
}

impl ActionDescriptor {
    pub fn new(label: impl Into<String>, command: NotificationCommand) -> Self {
        Self {
            label: label.into(),
            command,
        }
    }
}

/// A single alertable event.
///
/// Everything except the read flag is fixed at construction; flipping the flag
/// produces a new value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Notification {
    id: String,
    title: String,
    message: String,
    category: Category,
    priority: Priority,
    #[serde(with = "serde_timestamp")]
    timestamp: NaiveDateTime,
    #[serde(default)]
    read: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    links: Option<LinkRef>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    actions: Vec<ActionDescriptor>,
}

impl Notification {
    /// Create an unread notification with no link and no inline actions
    pub fn new(
        id: impl Into<String>,
        title: impl Into<String>,
        message: impl Into<String>,
        category: Category,
        priority: Priority,
        timestamp: NaiveDateTime,
    ) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
            message: message.into(),
            category,
            priority,
            timestamp,
            read: false,
            links: None,
            actions: Vec::new(),
        }
    }

    pub fn with_link(mut self, link: LinkRef) -> Self {
        self.links = Some(link);
        self
    }

    pub fn with_action(mut self, action: ActionDescriptor) -> Self {
        self.actions.push(action);
        self
    }

    /// Copy of this notification with the read flag set to `read`
    pub fn with_read(&self, read: bool) -> Self {
        Self {
            read,
            ..self.clone()
        }
    }

    /// Copy of this notification with the read flag flipped
    pub fn toggled_read(&self) -> Self {
        self.with_read(!self.read)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn priority(&self) -> Priority {
        self.priority
    }

    pub fn timestamp(&self) -> NaiveDateTime {
        self.timestamp
    }

    pub fn is_read(&self) -> bool {
        self.read
    }

    pub fn link(&self) -> Option<&LinkRef> {
        self.links.as_ref()
    }

    pub fn actions(&self) -> &[ActionDescriptor] {
        &self.actions
    }
}
