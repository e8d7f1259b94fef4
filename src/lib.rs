//! # TUI Toybox
//!
//! A pair of small terminal apps built with Ratatui: a playable Connect Four
//! game and a todo list manager. The state machines live in [`game`] and
//! [`todo`] and are plain data, fully usable without the UI.
//!
//! ## Modules
//!
//! - [`game`] — Core Connect Four logic: board, player, state machine
//! - [`todo`] — Todo items and the list that manages them
//! - [`ui`] — Terminal UI: event-loop apps and their views
//! - [`config`] — TOML configuration loading and validation
//! - [`error`] — Structured error types

pub mod config;
pub mod error;
pub mod game;
pub mod todo;
pub mod ui;
