//! Terminal message organizer: an in-memory message list filtered by
//! category and free-text search.

pub mod app;
pub mod config;
pub mod logging;
pub mod messages;
pub mod ui;
