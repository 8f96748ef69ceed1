use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::NotificationState;
use crate::domain::logger::Logger;
use crate::domain::notification::errors::NotificationError;
use crate::domain::notification::model::NotificationInbox;
use crate::domain::notification::use_cases::clear::{
    ClearNotificationsParams, ClearNotificationsUseCase,
};

pub struct ClearNotificationsUseCaseImpl {
    pub state: Arc<NotificationState>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ClearNotificationsUseCase for ClearNotificationsUseCaseImpl {
    async fn execute(
        &self,
        params: ClearNotificationsParams,
    ) -> Result<NotificationInbox, NotificationError> {
        let (removed, inbox) = self
            .state
            .update(|inbox| {
                let removed = match params.kind {
                    Some(kind) => inbox.clear_kind(kind),
                    None => inbox.clear(),
                };
                (removed, inbox.clone())
            })
            .await;
        self.logger
            .info(&format!("Cleared {} notifications", removed));
        Ok(inbox)
    }
}
