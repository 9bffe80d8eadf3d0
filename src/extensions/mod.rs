mod language;

pub use language::{LanguageChange, LanguageListener};
