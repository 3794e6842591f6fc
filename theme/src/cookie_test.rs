use super::*;

#[test]
fn flag_renders_only_zero_or_one() {
    assert_eq!(flag(true), "1");
    assert_eq!(flag(false), "0");
}

#[test]
fn cookie_write_constructors_set_kind() {
    assert_eq!(CookieWrite::auto_mode(true).kind, CookieKind::AutoMode);
    assert_eq!(CookieWrite::dark_mode(false).kind, CookieKind::DarkMode);
    assert_eq!(CookieWrite::dark_mode(true).value(), "1");
    assert_eq!(CookieWrite::auto_mode(false).value(), "0");
}

#[test]
fn default_options_are_root_path_lax() {
    let options = CookieOptions::default();
    assert_eq!(options.attributes(), "Path=/; SameSite=Lax");
}

#[test]
fn secure_options_append_secure_attribute() {
    let options = CookieOptions { path: "/app".to_owned(), secure: true };
    assert_eq!(options.attributes(), "Path=/app; SameSite=Lax; Secure");
}

#[test]
fn options_missing_fields_decode_to_defaults() {
    let options: CookieOptions = serde_json::from_str(r#"{"secure":true}"#).unwrap();
    assert_eq!(options.path, "/");
    assert!(options.secure);
}

#[test]
fn memory_store_records_writes_in_order() {
    let mut store = MemoryCookieStore::new();
    store.write("a", "1");
    store.write("b", "0");
    store.write("a", "0");
    assert_eq!(store.get("a"), Some("0"));
    assert_eq!(store.get("b"), Some("0"));
    assert_eq!(
        store.writes(),
        &[
            ("a".to_owned(), "1".to_owned()),
            ("b".to_owned(), "0".to_owned()),
            ("a".to_owned(), "0".to_owned()),
        ]
    );
}

#[test]
fn memory_store_seeded_cookies_are_not_writes() {
    let store = MemoryCookieStore::with_cookies([("darkMode", "1")]);
    assert_eq!(store.get("darkMode"), Some("1"));
    assert!(store.writes().is_empty());
    assert_eq!(store.read_all().len(), 1);
}

#[test]
fn clear_writes_keeps_values() {
    let mut store = MemoryCookieStore::new();
    store.write("a", "1");
    store.clear_writes();
    assert!(store.writes().is_empty());
    assert_eq!(store.get("a"), Some("1"));
}

#[test]
fn persist_resolves_configured_names() {
    let config = ThemeConfig {
        auto_mode_cookie_name: "theme_auto".to_owned(),
        dark_mode_cookie_name: "theme_dark".to_owned(),
        ..ThemeConfig::default()
    };
    let mut store = MemoryCookieStore::new();
    persist(&mut store, &config, &[CookieWrite::auto_mode(false), CookieWrite::dark_mode(true)]);
    assert_eq!(store.get("theme_auto"), Some("0"));
    assert_eq!(store.get("theme_dark"), Some("1"));
    assert_eq!(store.writes().len(), 2);
}
