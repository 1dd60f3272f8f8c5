//! Post form editor.
//!
//! Remembers whether the form creates a new post or edits an existing one,
//! and what the user has typed so far. This is view state: the store never
//! sees it until the form is submitted.
//!
//! # Architecture
//!
//! Uses MVI (Model-View-Intent) pattern:
//! - `state.rs` - Tagged editor state
//! - `intent.rs` - Keystrokes and form actions
//! - `reducer.rs` - State transitions

mod intent;
mod reducer;
mod state;

pub use intent::EditorIntent;
pub use reducer::EditorReducer;
pub use state::{EditorState, Field};
