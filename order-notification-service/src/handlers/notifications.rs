use axum::{
    extract::{Path, Query, State},
    Json,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::OrderNotification;
use crate::error::AppError;
use crate::startup::AppState;

#[derive(Debug, Serialize)]
pub struct NotificationResponse {
    pub id: String,
    pub status: String,
    pub order_id: String,
    pub user_id: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub updated_at: Option<DateTime<Utc>>,
}

impl From<OrderNotification> for NotificationResponse {
    fn from(n: OrderNotification) -> Self {
        Self {
            id: n.id.to_string(),
            status: n.status.as_str().to_string(),
            order_id: n.order_id.to_string(),
            user_id: n.user_id.to_string(),
            message: n.message,
            created_at: n.created_at,
            updated_at: n.updated_at,
        }
    }
}

#[derive(Debug, Deserialize)]
pub struct ListNotificationsQuery {
    #[serde(default = "default_limit")]
    pub limit: i64,
}

fn default_limit() -> i64 {
    50
}

impl ListNotificationsQuery {
    /// Clamp limit to reasonable range; Postgres rejects a negative LIMIT.
    pub fn effective_limit(&self) -> i64 {
        self.limit.clamp(1, 100)
    }
}

#[derive(Debug, Serialize)]
pub struct ListNotificationsResponse {
    pub notifications: Vec<NotificationResponse>,
    pub count: usize,
}

#[tracing::instrument(skip(state))]
pub async fn get_notification(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<NotificationResponse>, AppError> {
    let record = state
        .db
        .find_by_id(&id)
        .await?
        .ok_or_else(|| AppError::NotFound(anyhow::anyhow!("notification {} not found", id)))?;

    let notification = OrderNotification::try_from(record)?;
    Ok(Json(notification.into()))
}

#[tracing::instrument(skip(state))]
pub async fn list_order_notifications(
    State(state): State<AppState>,
    Path(order_id): Path<String>,
    Query(query): Query<ListNotificationsQuery>,
) -> Result<Json<ListNotificationsResponse>, AppError> {
    let records = state
        .db
        .list_for_order(&order_id, query.effective_limit())
        .await?;

    let notifications = records
        .into_iter()
        .map(OrderNotification::try_from)
        .collect::<Result<Vec<_>, _>>()?;

    let notifications: Vec<NotificationResponse> =
        notifications.into_iter().map(Into::into).collect();

    Ok(Json(ListNotificationsResponse {
        count: notifications.len(),
        notifications,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn a_negative_limit_is_raised_to_one() {
        let query = ListNotificationsQuery { limit: -1 };
        assert_eq!(query.effective_limit(), 1);
    }

    #[test]
    fn an_oversized_limit_is_capped() {
        let query = ListNotificationsQuery { limit: 10_000 };
        assert_eq!(query.effective_limit(), 100);
    }

    #[test]
    fn an_in_range_limit_passes_through() {
        let query = ListNotificationsQuery {
            limit: default_limit(),
        };
        assert_eq!(query.effective_limit(), 50);
    }
}
