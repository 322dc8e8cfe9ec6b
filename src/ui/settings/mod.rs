//! Settings screen: the auto-increment interval slider.
//!
//! The slider moves locally; only a commit (Enter) hands the position to the
//! counter holder. While visible, the slider follows external interval
//! changes.

mod intent;
mod reducer;
mod state;

pub use intent::SettingsIntent;
pub use reducer::SettingsReducer;
pub use state::SettingsState;
