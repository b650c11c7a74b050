//! Domain model for order notifications, independent of the storage shape.

mod entity_id;
mod order_notification;
mod status;

pub use entity_id::UniqueEntityId;
pub use order_notification::OrderNotification;
pub use status::NotificationStatus;

use thiserror::Error;

/// Rejections raised by the domain value constructors.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
    #[error("entity id must not be empty")]
    EmptyEntityId,

    #[error("unrecognized notification status code: {0}")]
    UnknownStatus(String),
}
