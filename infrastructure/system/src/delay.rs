use std::time::Duration;

use async_trait::async_trait;
use business::domain::shared::services::Delay;

/// Sleeps on the tokio timer. A zero duration returns immediately.
pub struct TokioDelay;

#[async_trait]
impl Delay for TokioDelay {
    async fn wait(&self, duration: Duration) {
        if duration.is_zero() {
            return;
        }
        tokio::time::sleep(duration).await;
    }
}
