//! Page language and theme preferences.

mod store;
mod theme;

pub use store::{LocalizationStore, MONTHS_PER_YEAR, TextTable};
pub use theme::{
    MemoryPreferenceStore, PreferenceStore, THEME_PREFERENCE_KEY, Theme, ThemePreference,
    ThemeStore,
};
