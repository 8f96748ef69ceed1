use chrono::{DateTime, Utc};
use poem_openapi::{Enum, Object};
use serde::{Deserialize, Serialize};

use business::domain::notification::model::{Notification, NotificationInbox, NotificationKind};

#[derive(Debug, Clone, Copy, Serialize, Deserialize, Enum)]
#[oai(rename_all = "lowercase")]
pub enum NotificationKindDto {
    Success,
    Error,
    Info,
}

impl From<NotificationKind> for NotificationKindDto {
    fn from(kind: NotificationKind) -> Self {
        match kind {
            NotificationKind::Success => NotificationKindDto::Success,
            NotificationKind::Error => NotificationKindDto::Error,
            NotificationKind::Info => NotificationKindDto::Info,
        }
    }
}

impl From<NotificationKindDto> for NotificationKind {
    fn from(dto: NotificationKindDto) -> Self {
        match dto {
            NotificationKindDto::Success => NotificationKind::Success,
            NotificationKindDto::Error => NotificationKind::Error,
            NotificationKindDto::Info => NotificationKind::Info,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct NotificationResponse {
    pub id: String,
    #[oai(rename = "type")]
    pub kind: NotificationKindDto,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    pub read: bool,
}

impl From<&Notification> for NotificationResponse {
    fn from(notification: &Notification) -> Self {
        Self {
            id: notification.id.to_string(),
            kind: notification.kind.into(),
            title: notification.title.clone(),
            description: notification.description.clone(),
            timestamp: notification.timestamp,
            read: notification.read,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct NotificationInboxResponse {
    /// Newest first, at most fifty entries
    pub items: Vec<NotificationResponse>,
    pub unread_count: u32,
}

impl From<NotificationInbox> for NotificationInboxResponse {
    fn from(inbox: NotificationInbox) -> Self {
        Self {
            unread_count: inbox.unread_count() as u32,
            items: inbox.items().iter().map(NotificationResponse::from).collect(),
        }
    }
}
