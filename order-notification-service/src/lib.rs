pub mod config;
pub mod converters;
pub mod domain;
pub mod error;
pub mod handlers;
pub mod models;
pub mod services;
pub mod startup;
