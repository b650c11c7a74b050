//! Persistence-to-domain conversion for order notifications.
//!
//! The table shape and the domain shape evolve independently; this boundary
//! is the only place one is produced from the other. The conversion is pure:
//! no I/O, no validation of its own. Identifier and status checks live in the
//! domain constructors and their rejections propagate untranslated.

use crate::domain::{DomainError, NotificationStatus, OrderNotification, UniqueEntityId};
use crate::models::OrderNotificationRecord;

impl TryFrom<OrderNotificationRecord> for OrderNotification {
    type Error = DomainError;

    fn try_from(record: OrderNotificationRecord) -> Result<Self, Self::Error> {
        Ok(OrderNotification {
            id: UniqueEntityId::parse(record.id)?,
            status: NotificationStatus::parse(&record.status)?,
            order_id: UniqueEntityId::parse(record.order_id)?,
            user_id: UniqueEntityId::parse(record.user_id)?,
            message: record.message,
            created_at: record.created_at,
            updated_at: record.updated_at,
        })
    }
}
