use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{GoldError, GoldResult};

/// Storage key of the theme preference.
pub const THEME_PREFERENCE_KEY: &str = "theme";

/// Persisted user choice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemePreference {
    /// Follow the host's dark-mode setting.
    #[default]
    System,
    Light,
    Dark,
}

/// Theme actually applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    Light,
    Dark,
}

impl ThemePreference {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::System => "system",
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }

    #[must_use]
    pub const fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            Self::System if system_prefers_dark => Theme::Dark,
            Self::System | Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
        }
    }
}

impl fmt::Display for ThemePreference {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ThemePreference {
    type Err = GoldError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value {
            "system" => Ok(Self::System),
            "light" => Ok(Self::Light),
            "dark" => Ok(Self::Dark),
            other => Err(GoldError::InvalidTheme(other.to_owned())),
        }
    }
}

/// Key/value preference storage owned by the host.
pub trait PreferenceStore {
    fn get(&self, key: &str) -> Option<String>;
    fn set(&mut self, key: &str, value: &str);
}

/// In-memory preference storage.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct MemoryPreferenceStore {
    entries: IndexMap<String, String>,
}

impl MemoryPreferenceStore {
    #[must_use]
    pub fn with_entry(mut self, key: &str, value: &str) -> Self {
        self.entries.insert(key.to_owned(), value.to_owned());
        self
    }
}

impl PreferenceStore for MemoryPreferenceStore {
    fn get(&self, key: &str) -> Option<String> {
        self.entries.get(key).cloned()
    }

    fn set(&mut self, key: &str, value: &str) {
        self.entries.insert(key.to_owned(), value.to_owned());
    }
}

/// Tri-state theme preference backed by a [`PreferenceStore`].
#[derive(Debug)]
pub struct ThemeStore<P: PreferenceStore> {
    storage: P,
    preference: ThemePreference,
    system_prefers_dark: bool,
}

impl<P: PreferenceStore> ThemeStore<P> {
    /// Reads the stored preference. Missing or unknown values mean `system`.
    pub fn load(storage: P, system_prefers_dark: bool) -> Self {
        let preference = match storage.get(THEME_PREFERENCE_KEY) {
            Some(stored) => stored.parse::<ThemePreference>().unwrap_or_else(|err| {
                warn!(error = %err, "ignoring stored theme preference");
                ThemePreference::System
            }),
            None => ThemePreference::System,
        };

        Self {
            storage,
            preference,
            system_prefers_dark,
        }
    }

    #[must_use]
    pub fn preference(&self) -> ThemePreference {
        self.preference
    }

    #[must_use]
    pub fn effective_theme(&self) -> Theme {
        self.preference.resolve(self.system_prefers_dark)
    }

    #[must_use]
    pub fn storage(&self) -> &P {
        &self.storage
    }

    /// Stores and applies a preference given by name.
    ///
    /// Unknown names are rejected and leave the current preference untouched.
    pub fn set_theme(&mut self, name: &str) -> GoldResult<Theme> {
        let preference = name.parse::<ThemePreference>().inspect_err(|err| {
            warn!(error = %err, "rejecting theme preference");
        })?;
        self.preference = preference;
        self.storage.set(THEME_PREFERENCE_KEY, preference.as_str());
        debug!(preference = %preference, "theme preference stored");
        Ok(self.effective_theme())
    }

    /// Host dark-mode setting changed. Returns the new effective theme.
    pub fn on_system_theme_change(&mut self, prefers_dark: bool) -> Theme {
        self.system_prefers_dark = prefers_dark;
        self.effective_theme()
    }
}
