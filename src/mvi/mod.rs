//! Model-View-Intent (MVI) primitives.
//!
//! Both the post store and the editor form are driven the same way:
//!
//! ```text
//! Intent ──→ Reducer ──→ State ──→ View
//!    ↑                              │
//!    └──────────────────────────────┘
//! ```
//!
//! - **State**: Snapshot-able value, replaced wholesale on each transition
//! - **Intent**: User actions or settled API calls
//! - **Reducer**: Pure function that transforms state based on intents

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::State;
