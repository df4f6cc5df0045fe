//! Connect Four (workspace facade crate).
//!
//! This package exposes the game under one stable path,
//! `connect_four::{core, settings, types}`, while the implementation lives in
//! dedicated crates under `crates/`.

pub use connect_four_core as core;
pub use connect_four_settings as settings;
pub use connect_four_types as types;
