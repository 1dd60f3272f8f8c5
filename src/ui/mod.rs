//! Terminal view: a post form above a post table.
//!
//! Renders store snapshots and turns keystrokes into store commands. The
//! editor state (what is being typed, which post is being edited) lives here,
//! never in the store.

pub mod app;
pub mod editor;
pub mod events;
pub mod footer;
pub mod header;
pub mod input;
pub mod layout;
pub mod render;
pub mod runtime;
pub mod terminal_guard;
pub mod theme;
