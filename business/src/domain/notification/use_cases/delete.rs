use async_trait::async_trait;
use uuid::Uuid;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationInbox;

pub struct DeleteNotificationParams {
    pub id: Uuid,
}

#[async_trait]
pub trait DeleteNotificationUseCase: Send + Sync {
    async fn execute(
        &self,
        params: DeleteNotificationParams,
    ) -> Result<NotificationInbox, NotificationError>;
}
