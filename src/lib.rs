//! matchmint: a terminal concentration card game with token rewards.
//!
//! The board is a pure MVI state machine ([`ui::game`]); finding every
//! pair mints a fixed token reward through the backend API client
//! ([`api`]) and refreshes the displayed balance. Player identity
//! comes from a one-shot login-platform bridge ([`identity`]).

pub mod api;
pub mod config;
pub mod identity;
pub mod logging;
pub mod ui;
