use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::NotificationState;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationInbox;
use crate::domain::notification::use_cases::mark_read::{
    MarkNotificationReadParams, MarkNotificationReadUseCase,
};

pub struct MarkNotificationReadUseCaseImpl {
    pub state: Arc<NotificationState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl MarkNotificationReadUseCase for MarkNotificationReadUseCaseImpl {
    async fn execute(
        &self,
        params: MarkNotificationReadParams,
    ) -> Result<NotificationInbox, NotificationError> {
        let (found, inbox) = self
            .state
            .update(|inbox| (inbox.mark_read(params.id), inbox.clone()))
            .await;
        if !found {
            self.logger
                .warn(&format!("Notification not found: {}", params.id));
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
    use uuid::Uuid;

    #[tokio::test]
    async fn should_mark_one_notification_read() {
        let mut inbox = NotificationInbox::new();
        let target = Notification::new(NotificationKind::Info, "a".into(), "".into(), Utc::now());
        let id = target.id;
        inbox.push(target);
        inbox.push(Notification::new(NotificationKind::Info, "b".into(), "".into(), Utc::now()));
        let (state, repository) = notification_state(inbox);
        let use_case = MarkNotificationReadUseCaseImpl {
            state,
            logger: mock_logger(),
        };

        let inbox = use_case
            .execute(MarkNotificationReadParams { id })
            .await
            .unwrap();

        assert_eq!(inbox.unread_count(), 1);
        assert_eq!(repository.stored().unwrap().unread_count(), 1);
    }

    #[tokio::test]
    async fn should_return_not_found_for_unknown_id() {
        let (state, _) = notification_state(NotificationInbox::new());
        let use_case = MarkNotificationReadUseCaseImpl {
            state,
            logger: mock_logger(),
        };

        let result = use_case
            .execute(MarkNotificationReadParams { id: Uuid::new_v4() })
            .await;

        assert!(matches!(result.unwrap_err(), NotificationError::NotFound));
    }
}
