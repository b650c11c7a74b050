mod database;

pub use database::NotificationDb;
