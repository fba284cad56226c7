//! Schulte table trainer (workspace facade crate).
//!
//! The game rules live in dedicated crates under `crates/`; this package
//! re-exports them as `schulte_tui::{core,input,term,types}` and adds the
//! application shell: environment config, logging setup, and the [`app::App`]
//! glue that routes input to the engine and the engine to the view.

pub mod app;
pub mod config;
pub mod logging;

pub use schulte_core as core;
pub use schulte_input as input;
pub use schulte_term as term;
pub use schulte_types as types;
