use std::sync::Arc;

use async_trait::async_trait;

use crate::application::shared::persisted_state::NotificationState;
use crate::domain::logger::Logger;
use crate::domain::notification::model::Notification;
use crate::domain::notification::services::{Notice, Notifier};
use crate::domain::shared::services::Clock;

/// Notifier that files every notice in the persisted notification centre.
pub struct InboxNotifier {
    pub state: Arc<NotificationState>,
    pub clock: Arc<dyn Clock>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl Notifier for InboxNotifier {
    async fn notify(&self, notice: Notice) {
        self.logger
            .info(&format!("{}: {}", notice.title, notice.description));
        let notification = Notification::new(
            notice.icon.kind(),
            notice.title,
            notice.description,
            self.clock.now(),
        );
        self.state.update(|inbox| inbox.push(notification)).await;
    }
}
