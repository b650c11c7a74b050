use chrono::{DateTime, Utc};
use sqlx::FromRow;

/// Row shape of the `order_notifications` table.
///
/// Owned by the persistence layer and read-only here. The domain shape is
/// produced from this in `converters`, never constructed from it directly.
#[derive(Debug, Clone, FromRow)]
pub struct OrderNotificationRecord {
    pub id: String,
    pub status: String,
    pub order_id: String,
    pub user_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: Option<DateTime<Utc>>,
}
