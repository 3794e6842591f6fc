use super::*;

fn state(auto: bool, supported: bool, browser: Mode, dark: bool) -> ThemeState {
    ThemeState { auto_mode_active: auto, auto_mode_supported: supported, browser_mode: browser, dark_mode_active: dark }
}

const ALL_EVENTS: [ThemeEvent; 7] = [
    ThemeEvent::SwitchToAutoMode,
    ThemeEvent::SwitchToDarkMode,
    ThemeEvent::SwitchToLightMode,
    ThemeEvent::Os(OsTheme::Dark),
    ThemeEvent::Os(OsTheme::Light),
    ThemeEvent::Os(OsTheme::NoPreference),
    ThemeEvent::Os(OsTheme::NotSupported),
];

// =============================================================
// Initial state
// =============================================================

#[test]
fn from_seed_copies_flags_and_starts_unsupported() {
    let config = ThemeConfig { default_mode: Mode::Dark, ..ThemeConfig::default() };
    let s = ThemeState::from_seed(Some(ThemeSeed { auto_mode: true, dark_mode: true }), &config);
    assert_eq!(s, state(true, false, Mode::Dark, true));
}

#[test]
fn from_seed_without_server_phase_uses_client_defaults() {
    let s = ThemeState::from_seed(None, &ThemeConfig::default());
    assert_eq!(s, state(false, false, Mode::Light, false));
    assert_eq!(s.mode(), Mode::Light);
}

// =============================================================
// Manual switches
// =============================================================

#[test]
fn switch_to_dark_pins_manual_dark() {
    let t = apply_event(&state(true, true, Mode::Light, false), ThemeEvent::SwitchToDarkMode);
    assert_eq!(t.state, state(false, true, Mode::Light, true));
    assert_eq!(t.writes, vec![CookieWrite::auto_mode(false), CookieWrite::dark_mode(true)]);
}

#[test]
fn switch_to_light_pins_manual_light_without_support() {
    let t = apply_event(&state(true, false, Mode::Light, true), ThemeEvent::SwitchToLightMode);
    assert_eq!(t.state, state(false, false, Mode::Light, false));
    assert_eq!(t.writes, vec![CookieWrite::auto_mode(false), CookieWrite::dark_mode(false)]);
}

#[test]
fn manual_switch_writes_even_when_state_already_matches() {
    let t = apply_event(&state(false, false, Mode::Light, true), ThemeEvent::SwitchToDarkMode);
    assert_eq!(t.state, state(false, false, Mode::Light, true));
    assert_eq!(t.writes.len(), 2);
}

// =============================================================
// Auto switch
// =============================================================

#[test]
fn switch_to_auto_follows_browser_mode() {
    let t = apply_event(&state(false, true, Mode::Dark, false), ThemeEvent::SwitchToAutoMode);
    assert_eq!(t.state, state(true, true, Mode::Dark, true));
    assert_eq!(t.writes, vec![CookieWrite::auto_mode(true), CookieWrite::dark_mode(true)]);
}

#[test]
fn switch_to_auto_without_support_is_noop() {
    let before = state(false, false, Mode::Dark, false);
    let t = apply_event(&before, ThemeEvent::SwitchToAutoMode);
    assert_eq!(t.state, before);
    assert!(t.writes.is_empty());
}

// =============================================================
// OS events
// =============================================================

#[test]
fn first_os_event_in_auto_mode_drives_dark_flag() {
    let t = apply_event(&state(true, false, Mode::Light, false), ThemeEvent::Os(OsTheme::Dark));
    assert_eq!(t.state, state(true, true, Mode::Dark, true));
    assert_eq!(t.writes, vec![CookieWrite::dark_mode(true)]);
}

#[test]
fn first_os_event_preserves_manual_choice() {
    let t = apply_event(&state(false, false, Mode::Light, true), ThemeEvent::Os(OsTheme::Light));
    assert_eq!(t.state, state(false, true, Mode::Light, true));
    assert!(t.writes.is_empty());
}

#[test]
fn later_os_event_overrides_manual_choice() {
    let after_first = apply_event(&state(false, false, Mode::Light, true), ThemeEvent::Os(OsTheme::Light)).state;

    let t = apply_event(&after_first, ThemeEvent::Os(OsTheme::Dark));
    assert_eq!(t.state, state(false, true, Mode::Dark, true));
    assert_eq!(t.writes, vec![CookieWrite::dark_mode(true)]);

    let t = apply_event(&t.state, ThemeEvent::Os(OsTheme::Light));
    assert_eq!(t.state, state(false, true, Mode::Light, false));
    assert_eq!(t.writes, vec![CookieWrite::dark_mode(false)]);
}

#[test]
fn support_loss_clears_auto_cookie_only() {
    for event in [OsTheme::NotSupported, OsTheme::NoPreference] {
        let before = state(true, true, Mode::Dark, true);
        let t = apply_event(&before, ThemeEvent::Os(event));
        assert_eq!(t.state, state(true, false, Mode::Dark, true), "{event:?}");
        assert_eq!(t.writes, vec![CookieWrite::auto_mode(false)], "{event:?}");
    }
}

#[test]
fn support_regained_after_loss_counts_as_first_observation() {
    let lost = apply_event(&state(false, true, Mode::Dark, true), ThemeEvent::Os(OsTheme::NoPreference)).state;
    let t = apply_event(&lost, ThemeEvent::Os(OsTheme::Light));
    assert_eq!(t.state, state(false, true, Mode::Light, true));
    assert!(t.writes.is_empty());
}

// =============================================================
// Invariants over event sequences
// =============================================================

/// Replays every event sequence up to `depth` from `start`, handing each
/// (state, auto cookie, dark cookie, support-lost-while-auto) tuple to `check`.
fn walk(start: ThemeState, cookies: (bool, bool), depth: usize, check: &mut dyn FnMut(&ThemeState, (bool, bool), bool)) {
    fn go(s: ThemeState, c: (bool, bool), stale_auto: bool, depth: usize, check: &mut dyn FnMut(&ThemeState, (bool, bool), bool)) {
        check(&s, c, stale_auto);
        if depth == 0 {
            return;
        }
        for event in ALL_EVENTS {
            let t = apply_event(&s, event);
            let mut next_cookies = c;
            let mut next_stale = stale_auto;
            for write in &t.writes {
                match write.kind {
                    crate::cookie::CookieKind::AutoMode => {
                        next_cookies.0 = write.enabled;
                        next_stale = false;
                    }
                    crate::cookie::CookieKind::DarkMode => next_cookies.1 = write.enabled,
                }
            }
            if matches!(event, ThemeEvent::Os(OsTheme::NoPreference | OsTheme::NotSupported)) && t.state.auto_mode_active {
                next_stale = true;
            }
            go(t.state, next_cookies, next_stale, depth - 1, check);
        }
    }
    go(start, cookies, false, depth, check);
}

#[test]
fn dark_cookie_always_mirrors_dark_flag() {
    for seed in [(true, true), (true, false), (false, true), (false, false)] {
        let start = ThemeState::from_seed(Some(ThemeSeed { auto_mode: seed.0, dark_mode: seed.1 }), &ThemeConfig::default());
        walk(start, seed, 4, &mut |s, cookies, _| {
            assert_eq!(cookies.1, s.dark_mode_active, "dark cookie diverged at {s:?}");
        });
    }
}

#[test]
fn auto_cookie_mirrors_auto_flag_outside_support_loss() {
    for seed in [(true, true), (false, false)] {
        let start = ThemeState::from_seed(Some(ThemeSeed { auto_mode: seed.0, dark_mode: seed.1 }), &ThemeConfig::default());
        walk(start, seed, 4, &mut |s, cookies, stale_auto| {
            if !stale_auto {
                assert_eq!(cookies.0, s.auto_mode_active, "auto cookie diverged at {s:?}");
            }
        });
    }
}

#[test]
fn supported_os_events_force_dark_flag_to_browser_mode() {
    walk(state(false, true, Mode::Light, true), (false, true), 3, &mut |s, _, _| {
        if s.auto_mode_supported {
            for theme in [OsTheme::Dark, OsTheme::Light] {
                let t = apply_event(s, ThemeEvent::Os(theme));
                assert_eq!(t.state.dark_mode_active, t.state.browser_mode.is_dark());
                assert_eq!(t.writes, vec![CookieWrite::dark_mode(t.state.dark_mode_active)]);
            }
        }
    });
}

#[test]
fn manual_switches_always_write_both_cookies() {
    walk(state(true, false, Mode::Light, false), (true, false), 3, &mut |s, _, _| {
        for (event, dark) in [(ThemeEvent::SwitchToDarkMode, true), (ThemeEvent::SwitchToLightMode, false)] {
            let t = apply_event(s, event);
            assert!(!t.state.auto_mode_active);
            assert_eq!(t.writes, vec![CookieWrite::auto_mode(false), CookieWrite::dark_mode(dark)]);
        }
    });
}
