//! Common utilities shared across trendctl modules

pub mod fs;
pub mod string_utils;
