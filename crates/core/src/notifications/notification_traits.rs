//! Notification-delivery collaborator.

use async_trait::async_trait;

use super::notification_model::NotificationEvent;
use crate::errors::Result;

/// Delivers alerts to the user. Transport is the implementor's concern.
///
/// A failure is reported as an error; the caller decides whether to retry.
#[async_trait]
pub trait NotificationDeliveryTrait: Send + Sync {
    async fn deliver(&self, event: &NotificationEvent) -> Result<()>;
}

/// Keeps delivered alerts in memory for service tests.
#[cfg(test)]
#[derive(Clone, Default)]
pub(crate) struct RecordingDelivery {
    delivered: std::sync::Arc<std::sync::Mutex<Vec<NotificationEvent>>>,
}

#[cfg(test)]
impl RecordingDelivery {
    pub(crate) fn delivered(&self) -> Vec<NotificationEvent> {
        self.delivered.lock().unwrap().clone()
    }
}

#[cfg(test)]
#[async_trait]
impl NotificationDeliveryTrait for RecordingDelivery {
    async fn deliver(&self, event: &NotificationEvent) -> Result<()> {
        self.delivered.lock().unwrap().push(event.clone());
        Ok(())
    }
}
