use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationInbox;

pub struct MarkNotificationReadParams {
    pub id: Uuid,
}

#[async_trait]
pub trait MarkNotificationReadUseCase: Send + Sync {
    async fn execute(
        &self,
        params: MarkNotificationReadParams,
    ) -> Result<NotificationInbox, NotificationError>;
}
