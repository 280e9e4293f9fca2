//! trendctl - configuration manager for a trend-monitoring scraper
//!
//! Edits the scraper's `config.yaml` platform list and scalar keys, its
//! keyword groups file and its crontab, leaving every line it does not
//! touch exactly as it was.

pub mod buffer;
pub mod cli;
pub mod commands;
pub mod common;
pub mod error;
pub mod external;
pub mod input;
pub mod keywords;
pub mod notify;
pub mod platform;
pub mod scalar;
pub mod schedule;
pub mod settings;
pub mod ui;
pub mod workspace;
