pub mod browse;
pub mod categories;
pub mod config;
pub mod detail;
pub mod fetch_ui;
pub mod prompts;
pub mod search;
