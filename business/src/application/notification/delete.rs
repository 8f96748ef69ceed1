use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::NotificationState;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationInbox;
use crate::domain::notification::use_cases::delete::{
    DeleteNotificationParams, DeleteNotificationUseCase,
};

pub struct DeleteNotificationUseCaseImpl {
    pub state: Arc<NotificationState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteNotificationUseCase for DeleteNotificationUseCaseImpl {
    async fn execute(
        &self,
        params: DeleteNotificationParams,
    ) -> Result<NotificationInbox, NotificationError> {
        self.logger
            .info(&format!("Deleting notification with id: {}", params.id));
        let (removed, inbox) = self
            .state
            .update(|inbox| (inbox.remove(params.id), inbox.clone()))
            .await;
        if !removed {
            return Err(NotificationError::NotFound);
        }
        Ok(inbox)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::notification::model::{Notification, NotificationKind};
    use crate::test_support::{mock_logger, notification_state};
    use chrono::Utc;

    #[tokio::test]
    async fn should_delete_notification() {
        let notification =
            Notification::new(NotificationKind::Error, "a".into(), "".into(), Utc::now());
        let id = notification.id;
        let mut inbox = NotificationInbox::new();
        inbox.push(notification);
        let (state, repository) = notification_state(inbox);
        let use_case = DeleteNotificationUseCaseImpl {
            state,
            logger: mock_logger(),
        };

        let inbox = use_case
            .execute(DeleteNotificationParams { id })
            .await
            .unwrap();

        assert!(inbox.items().is_empty());
        assert!(repository.stored().unwrap().items().is_empty());

        let again = use_case.execute(DeleteNotificationParams { id }).await;
        assert!(matches!(again.unwrap_err(), NotificationError::NotFound));
    }
}
