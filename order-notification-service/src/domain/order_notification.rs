use super::{NotificationStatus, UniqueEntityId};
use chrono::{DateTime, Utc};

/// An order notification as the business logic sees it.
///
/// Short-lived value object produced at the persistence boundary; it is never
/// mutated after construction.
#[derive(Debug, Clone, PartialEq)]
pub struct OrderNotification {
    pub id: UniqueEntityId,
    pub status: NotificationStatus,
    pub order_id: UniqueEntityId,
    pub user_id: UniqueEntityId,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}

impl OrderNotification {
    /// Create a notification with a freshly minted id.
    pub fn new(
        status: NotificationStatus,
        order_id: UniqueEntityId,
        user_id: UniqueEntityId,
        message: String,
    ) -> Self {
        Self {
            id: UniqueEntityId::new(),
            status,
            order_id,
            user_id,
            message,
            created_at: Utc::now(),
            updated_at: None,
        }
    }
}
