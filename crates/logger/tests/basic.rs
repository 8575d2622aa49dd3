//! Integration tests for the logger crate

use logger::{
    disable_verbose, enable_verbose, is_debug_enabled, is_verbose_enabled, set_level,
    set_level_from_str, Level,
};

#[test]
fn macros_do_not_panic_at_any_level() {
    for level in [Level::Error, Level::Warn, Level::Info, Level::Debug] {
        set_level(level);
        logger::error!("error at {:?}", level);
        logger::warn!("warn at {:?}", level);
        logger::info!("info at {:?}", level);
        logger::debug!("debug at {:?}", level);
    }
}

#[test]
fn set_level_from_str_is_case_insensitive() {
    assert!(set_level_from_str("ERROR"));
    assert!(set_level_from_str("Warn"));
    assert!(set_level_from_str("info"));
    assert!(set_level_from_str("dEbUg"));
    assert!(!set_level_from_str(""));
    assert!(!set_level_from_str("trace"));
}

#[cfg(feature = "verbose")]
#[test]
fn verbose_flag_round_trips() {
    enable_verbose();
    assert!(is_verbose_enabled());
    logger::verbose!("only when enabled");
    disable_verbose();
    assert!(!is_verbose_enabled());
}

#[cfg(feature = "log-debug")]
#[test]
fn debug_flag_defaults_on() {
    // The runtime debug flag starts enabled; level gating still applies.
    assert!(is_debug_enabled());
}
