//! Terminal input module.
//!
//! This module is intentionally independent of any UI framework beyond
//! crossterm's event types. It maps key events into
//! [`crate::types::GameAction`]s and mouse events into click coordinates;
//! deciding which cell a coordinate hits is the view's job.

pub mod map;
pub mod mouse;

pub use schulte_types as types;

pub use map::{handle_key_event, should_quit};
pub use mouse::{click_position, ClickPosition};
