use async_trait::async_trait;

use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::{NotificationInbox, NotificationKind};

pub struct ClearNotificationsParams {
    /// Restricts clearing to one kind; `None` clears everything.
    pub kind: Option<NotificationKind>,
}

#[async_trait]
pub trait ClearNotificationsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: ClearNotificationsParams,
    ) -> Result<NotificationInbox, NotificationError>;
}
