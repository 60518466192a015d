//! Notifications module - near-limit alert policy and the delivery collaborator.

mod notification_model;
mod notification_policy;
mod notification_traits;

pub use notification_model::NotificationEvent;
pub use notification_policy::NotificationPolicy;
pub use notification_traits::NotificationDeliveryTrait;

#[cfg(test)]
pub(crate) use notification_traits::RecordingDelivery;
