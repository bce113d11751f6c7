//! User preferences
//!
//! The shell's theme choice is the only preference the core owns. It is
//! read once at boot and written through on every change, decoupled from
//! the rehearsal flow entirely.

pub mod store;
pub mod theme;

pub use store::{InMemoryPreferences, JsonFilePreferences, PreferenceStore};
pub use theme::{Theme, ThemeManager, THEME_KEY};
