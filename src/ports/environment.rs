// src/ports/environment.rs
// Environment variable lookup port (interface)

/// Keystore path used when `--sign` is given without positional values
pub const KEYSTORE_PATH_VAR: &str = "QT_ANDROID_KEYSTORE_PATH";

/// Keystore alias used when `--sign` is given without positional values
pub const KEYSTORE_ALIAS_VAR: &str = "QT_ANDROID_KEYSTORE_ALIAS";

/// Store password fallback, consulted once per `--sign`
pub const KEYSTORE_STORE_PASS_VAR: &str = "QT_ANDROID_KEYSTORE_STORE_PASS";

/// Key password fallback, consulted once per `--sign`
pub const KEYSTORE_KEY_PASS_VAR: &str = "QT_ANDROID_KEYSTORE_KEY_PASS";

/// Enables timing output when present, whatever its value
pub const TIMING_OUTPUT_VAR: &str = "ANDROIDDEPLOYQT_TIMING_OUTPUT";

/// Port for reading environment variables
#[cfg_attr(test, mockall::automock)]
pub trait Environment {
    /// Look up a variable. `None` when it is unset or not valid unicode.
    fn var(&self, name: &str) -> Option<String>;
}

impl<T: Environment + ?Sized> Environment for &T {
    fn var(&self, name: &str) -> Option<String> {
        (*self).var(name)
    }
}
