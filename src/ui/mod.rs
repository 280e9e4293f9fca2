//! Terminal presentation
//!
//! Styling goes through `console::Style`, which drops colors when stdout is
//! not a terminal.

pub mod display;

pub use display::{success, warning};
