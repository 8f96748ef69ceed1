use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use business::domain::notification::model::{Notification, NotificationKind};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NotificationEntity {
    pub id: Uuid,
    #[serde(rename = "type")]
    pub kind: String,
    pub title: String,
    pub description: String,
    pub timestamp: DateTime<Utc>,
    #[serde(default)]
    pub read: bool,
}

impl NotificationEntity {
    pub fn from_domain(notification: &Notification) -> Self {
        Self {
            id: notification.id,
            kind: notification.kind.to_string(),
            title: notification.title.clone(),
            description: notification.description.clone(),
            timestamp: notification.timestamp,
            read: notification.read,
        }
    }

    pub fn into_domain(self) -> Notification {
        Notification::from_repository(
            self.id,
            self.kind
                .parse::<NotificationKind>()
                .unwrap_or(NotificationKind::Info),
            self.title,
            self.description,
            self.timestamp,
            self.read,
        )
    }
}
