mod order_notification_record;

pub use order_notification_record::OrderNotificationRecord;
