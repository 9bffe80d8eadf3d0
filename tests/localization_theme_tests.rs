use gold_price::GoldError;
use gold_price::core::{Language, TextDirection};
use gold_price::localization::{
    LocalizationStore, MemoryPreferenceStore, PreferenceStore, THEME_PREFERENCE_KEY, TextTable,
    Theme, ThemePreference, ThemeStore,
};

#[test]
fn bundled_tables_cover_both_languages() {
    let store = LocalizationStore::new(Language::Fa).expect("bundled texts");

    assert_eq!(store.current(), Language::Fa);
    assert_eq!(store.direction(), TextDirection::Rtl);
    assert_eq!(store.months().len(), 12);
    assert_eq!(store.months()[0], "فروردین");
    assert_eq!(store.texts_for(Language::En).months[11], "December");
    assert!(!store.texts().title.is_empty());
    assert_ne!(
        store.texts_for(Language::Fa).title,
        store.texts_for(Language::En).title
    );
}

#[test]
fn language_change_emits_new_month_labels() {
    let mut store = LocalizationStore::new(Language::Fa).expect("bundled texts");

    let change = store
        .change_language("EN ")
        .expect("known code")
        .expect("language differs");
    assert_eq!(change.language, Language::En);
    assert_eq!(change.months[0], "January");
    assert_eq!(store.direction(), TextDirection::Ltr);

    assert_eq!(store.change_language("en").expect("known code"), None);
}

#[test]
fn unknown_language_is_rejected_without_switching() {
    let mut store = LocalizationStore::new(Language::En).expect("bundled texts");
    let err = store.change_language("de").expect_err("unsupported");
    assert!(matches!(err, GoldError::UnsupportedLanguage(code) if code == "de"));
    assert_eq!(store.current(), Language::En);
}

#[test]
fn text_table_requires_twelve_months() {
    let store = LocalizationStore::new(Language::En).expect("bundled texts");
    let mut table = store.texts().clone();
    table.months.pop();
    let json = serde_json::to_string(&table).expect("serialize table");

    assert!(TextTable::from_json_str(&json).is_err());
    assert!(TextTable::from_json_str("{}").is_err());
}

#[test]
fn theme_defaults_to_system_preference() {
    let theme = ThemeStore::load(MemoryPreferenceStore::default(), true);
    assert_eq!(theme.preference(), ThemePreference::System);
    assert_eq!(theme.effective_theme(), Theme::Dark);

    let theme = ThemeStore::load(MemoryPreferenceStore::default(), false);
    assert_eq!(theme.effective_theme(), Theme::Light);
}

#[test]
fn stored_theme_wins_over_system() {
    let storage = MemoryPreferenceStore::default().with_entry(THEME_PREFERENCE_KEY, "light");
    let mut theme = ThemeStore::load(storage, true);

    assert_eq!(theme.preference(), ThemePreference::Light);
    assert_eq!(theme.effective_theme(), Theme::Light);
    assert_eq!(theme.on_system_theme_change(false), Theme::Light);
}

#[test]
fn corrupt_stored_theme_falls_back_to_system() {
    let storage = MemoryPreferenceStore::default().with_entry(THEME_PREFERENCE_KEY, "sepia");
    let theme = ThemeStore::load(storage, true);
    assert_eq!(theme.preference(), ThemePreference::System);
    assert_eq!(theme.effective_theme(), Theme::Dark);
}

#[test]
fn set_theme_persists_and_rejects_unknown_names() {
    let mut theme = ThemeStore::load(MemoryPreferenceStore::default(), false);

    assert_eq!(theme.set_theme("dark").expect("valid theme"), Theme::Dark);
    assert_eq!(
        theme.storage().get(THEME_PREFERENCE_KEY).as_deref(),
        Some("dark")
    );

    let err = theme.set_theme("blue").expect_err("unknown theme");
    assert!(matches!(err, GoldError::InvalidTheme(_)));
    assert_eq!(theme.preference(), ThemePreference::Dark);

    assert_eq!(theme.set_theme("system").expect("valid theme"), Theme::Light);
    assert_eq!(theme.on_system_theme_change(true), Theme::Dark);
}
