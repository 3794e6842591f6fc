use theme::Mode;

use super::*;

fn state(auto: bool, supported: bool, dark: bool) -> ThemeState {
    ThemeState { auto_mode_active: auto, auto_mode_supported: supported, browser_mode: Mode::Light, dark_mode_active: dark }
}

#[test]
fn describe_auto_with_support() {
    assert_eq!(describe(&state(true, true, true)), "Dark (following system)");
}

#[test]
fn describe_auto_before_first_os_report() {
    assert_eq!(describe(&state(true, false, false)), "Light (waiting for system)");
}

#[test]
fn describe_manual_ignores_support() {
    assert_eq!(describe(&state(false, true, true)), "Dark (manual)");
    assert_eq!(describe(&state(false, false, false)), "Light (manual)");
}
