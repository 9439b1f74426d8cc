pub mod activity;
pub mod auth;
pub mod measurements;
pub mod user;
