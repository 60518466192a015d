use async_trait::async_trait;
use budgetwise_core::notifications::{NotificationDeliveryTrait, NotificationEvent};
use budgetwise_core::Result;
use serde_json::Value;
use tokio::sync::broadcast;

/// Canonical event names pushed to SSE clients.
pub const NEAR_LIMIT_ALERT: &str = "budget:near-limit";
pub const EXPENSE_ADDED: &str = "budget:expense-added";
pub const SALARY_UPDATED: &str = "budget:salary-updated";
pub const SALARY_CYCLE_RELOADED: &str = "budget:cycle-reloaded";

/// Serializable envelope that carries event names, the owning user and an optional payload.
#[derive(Clone, Debug)]
pub struct ServerEvent {
    pub name: &'static str,
    pub user_id: Option<String>,
    pub payload: Option<Value>,
}

impl ServerEvent {
    pub fn for_user(name: &'static str, user_id: impl Into<String>, payload: Value) -> Self {
        Self {
            name,
            user_id: Some(user_id.into()),
            payload: Some(payload),
        }
    }

    /// Whether a subscriber filtering on `user_id` should see this event.
    pub fn is_visible_to(&self, user_id: Option<&str>) -> bool {
        match (user_id, self.user_id.as_deref()) {
            (None, _) => true,
            (Some(wanted), Some(owner)) => wanted == owner,
            (Some(_), None) => true,
        }
    }
}

/// Lightweight broadcast bus that fans out events to any connected clients.
#[derive(Clone)]
pub struct EventBus {
    sender: broadcast::Sender<ServerEvent>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (sender, _receiver) = broadcast::channel(capacity);
        Self { sender }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<ServerEvent> {
        self.sender.subscribe()
    }

    pub fn publish(&self, event: ServerEvent) {
        // Lagging listeners are ignored to avoid blocking producers.
        let _ = self.sender.send(event);
    }
}

/// Delivers near-limit alerts to SSE subscribers.
///
/// With nobody listening the alert is only logged; that is not a failure.
pub struct SseNotificationDelivery {
    event_bus: EventBus,
}

impl SseNotificationDelivery {
    pub fn new(event_bus: EventBus) -> Self {
        Self { event_bus }
    }
}

#[async_trait]
impl NotificationDeliveryTrait for SseNotificationDelivery {
    async fn deliver(&self, event: &NotificationEvent) -> Result<()> {
        tracing::info!(
            user_id = %event.user_id,
            group = %event.group,
            percent_used = %event.percent_used,
            "{}",
            event.title
        );
        let payload = serde_json::to_value(event)?;
        self.event_bus.publish(ServerEvent::for_user(
            NEAR_LIMIT_ALERT,
            event.user_id.clone(),
            payload,
        ));
        Ok(())
    }
}
