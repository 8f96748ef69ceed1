use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Maximum number of notifications kept; older ones fall off the end.
pub const INBOX_CAPACITY: usize = 50;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    Success,
    Error,
    Info,
}

impl std::fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            NotificationKind::Success => write!(f, "success"),
            NotificationKind::Error => write!(f, "error"),
            NotificationKind::Info => write!(f, "info"),
        }
    }
}

impl std::str::FromStr for NotificationKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "success" => Ok(NotificationKind::Success),
            "error" => Ok(NotificationKind::Error),
            "info" => Ok(NotificationKind::Info),
            _ => Err(format!("Invalid notification kind: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Notification {
    pub id: Uuid,
    pub kind: NotificationKind,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl Notification {
    pub fn new(
        kind: NotificationKind,
        title: String,
        description: String,
        timestamp: DateTime<Utc>,
    ) -> Self {
        Self {
            id: Uuid::new_v4(),
            kind,
            title,
            description,
            timestamp,
            read: false,
        }
    }

    /// Constructor for data already persisted in the repository (no validation).
    pub fn from_repository(
        id: Uuid,
        kind: NotificationKind,
        title: String,
        description: String,
        timestamp: DateTime<Utc>,
        read: bool,
    ) -> Self {
        Self {
            id,
            kind,
            title,
            description,
            timestamp,
            read,
        }
    }
}

/// Notification centre contents, newest first.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NotificationInbox {
    items: Vec<Notification>,
}

impl NotificationInbox {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_repository(mut items: Vec<Notification>) -> Self {
        items.truncate(INBOX_CAPACITY);
        Self { items }
    }

    pub fn items(&self) -> &[Notification] {
        &self.items
    }

    pub fn unread_count(&self) -> usize {
        self.items.iter().filter(|n| !n.read).count()
    }

    pub fn push(&mut self, notification: Notification) {
        self.items.insert(0, notification);
        self.items.truncate(INBOX_CAPACITY);
    }

    pub fn mark_read(&mut self, id: Uuid) -> bool {
        match self.items.iter_mut().find(|n| n.id == id) {
            Some(notification) => {
                notification.read = true;
                true
            }
            None => false,
        }
    }

    /// Returns how many notifications changed state.
    pub fn mark_all_read(&mut self) -> usize {
        let mut changed = 0;
        for notification in self.items.iter_mut().filter(|n| !n.read) {
            notification.read = true;
            changed += 1;
        }
        changed
    }

    pub fn remove(&mut self, id: Uuid) -> bool {
        let before = self.items.len();
        self.items.retain(|n| n.id != id);
        self.items.len() != before
    }

    pub fn clear(&mut self) -> usize {
        let count = self.items.len();
        self.items.clear();
        count
    }

    pub fn clear_kind(&mut self, kind: NotificationKind) -> usize {
        let before = self.items.len();
        self.items.retain(|n| n.kind != kind);
        before - self.items.len()
    }
}
