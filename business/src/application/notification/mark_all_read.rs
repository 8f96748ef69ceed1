use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::NotificationState;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationInbox;
use crate::domain::notification::use_cases::mark_all_read::MarkAllNotificationsReadUseCase;

pub struct MarkAllNotificationsReadUseCaseImpl {
    pub state: Arc<NotificationState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MarkAllNotificationsReadUseCase for MarkAllNotificationsReadUseCaseImpl {
    async fn execute(&self) -> Result<NotificationInbox, NotificationError> {
        let (changed, inbox) = self
            .state
            .update(|inbox| (inbox.mark_all_read(), inbox.clone()))
            .await;
        self.logger
            .info(&format!("Marked {} notifications as read", changed));
        Ok(inbox)
    }
}
