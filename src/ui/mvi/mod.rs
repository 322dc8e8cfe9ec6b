//! Model-View-Intent (MVI) primitives for the terminal UI.
//!
//! ```text
//! Key press ──→ Intent ──→ Reducer ──→ State ──→ render
//!     ↑                                           │
//!     └───────────────────────────────────────────┘
//! ```
//!
//! Screen-local state (such as the settings slider) lives in MVI states.
//! Side effects on the counter holder are performed by `App` around the
//! dispatch call, never inside a reducer.

mod intent;
mod reducer;
mod state;

pub use intent::Intent;
pub use reducer::Reducer;
pub use state::UiState;
