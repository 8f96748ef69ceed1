use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationInbox;

#[async_trait]
pub trait MarkAllNotificationsReadUseCase: Send + Sync {
    async fn execute(&self) -> Result<NotificationInbox, NotificationError>;
}
