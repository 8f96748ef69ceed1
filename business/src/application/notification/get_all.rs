use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::NotificationState;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationInbox;
use crate::domain::notification::use_cases::get_all::GetNotificationsUseCase;

pub struct GetNotificationsUseCaseImpl {
    pub state: Arc<NotificationState>,
}

#[async_trait]
impl GetNotificationsUseCase for GetNotificationsUseCaseImpl {
    async fn execute(&self) -> Result<NotificationInbox, NotificationError> {
        Ok(self.state.snapshot().await)
    }
}
