use std::sync::LazyLock;

/// Name of the cookie carrying the plaintext session token
pub static SESSION_COOKIE_NAME: LazyLock<String> = LazyLock::new(|| {
    std::env::var("SESSION_COOKIE_NAME")
        .ok()
        .unwrap_or("session".to_string())
});

/// Trailing window, in seconds, during which validation renews the session.
/// Defaults to 15 days.
pub(crate) static SESSION_REFRESH_INTERVAL: LazyLock<u64> = LazyLock::new(|| {
    std::env::var("SESSION_REFRESH_INTERVAL")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(15 * 86400)
});

/// Absolute session lifetime in seconds, twice the refresh interval. A
/// session accessed only in the first half of its lifetime is never renewed.
pub(crate) static SESSION_MAX_DURATION: LazyLock<u64> =
    LazyLock::new(|| 2 * *SESSION_REFRESH_INTERVAL);

/// Cookie security attributes, resolved once at startup. Plain-HTTP local
/// development stays usable because `Secure` is opt-in via
/// `SESSION_COOKIE_SECURE=true`.
#[derive(Debug, Clone, Copy)]
pub(crate) struct CookieSecurity {
    pub(crate) secure: bool,
}

pub(crate) static COOKIE_SECURITY: LazyLock<CookieSecurity> = LazyLock::new(|| CookieSecurity {
    secure: std::env::var("SESSION_COOKIE_SECURE")
        .ok()
        .and_then(|s| s.parse().ok())
        .unwrap_or(false),
});

#[cfg(test)]
mod tests {
    use std::env;

    /// Helper function to set an environment variable for the duration of the
    /// test and restore the original value afterward.
    fn with_env_var<F, R>(key: &str, value: Option<&str>, test: F) -> R
    where
        F: FnOnce() -> R,
    {
        let original = env::var(key).ok();

        match value {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        let result = test();

        match original {
            Some(val) => unsafe { env::set_var(key, val) },
            None => unsafe { env::remove_var(key) },
        }

        result
    }

    #[test]
    fn test_parse_session_cookie_name() {
        // Default value
        with_env_var("SESSION_COOKIE_NAME", None, || {
            let default_value = env::var("SESSION_COOKIE_NAME")
                .ok()
                .unwrap_or("session".to_string());
            assert_eq!(default_value, "session");
        });

        // Custom value
        with_env_var("SESSION_COOKIE_NAME", Some("my_session"), || {
            let custom_value = env::var("SESSION_COOKIE_NAME")
                .ok()
                .unwrap_or("session".to_string());
            assert_eq!(custom_value, "my_session");
        });
    }

    #[test]
    fn test_parse_refresh_interval() {
        // Default is 15 days
        with_env_var("SESSION_REFRESH_INTERVAL", None, || {
            let default_value: u64 = env::var("SESSION_REFRESH_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(15 * 86400);
            assert_eq!(default_value, 1_296_000);
        });

        // Custom value
        with_env_var("SESSION_REFRESH_INTERVAL", Some("3600"), || {
            let custom_value: u64 = env::var("SESSION_REFRESH_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(15 * 86400);
            assert_eq!(custom_value, 3600);
        });

        // Invalid value falls back to the default
        with_env_var("SESSION_REFRESH_INTERVAL", Some("soon"), || {
            let invalid_value: u64 = env::var("SESSION_REFRESH_INTERVAL")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(15 * 86400);
            assert_eq!(invalid_value, 1_296_000);
        });
    }

    #[test]
    fn test_max_duration_is_twice_refresh_interval() {
        let refresh: u64 = 15 * 86400;
        assert_eq!(2 * refresh, 2_592_000); // 30 days
    }

    #[test]
    fn test_parse_cookie_secure_flag() {
        with_env_var("SESSION_COOKIE_SECURE", None, || {
            let secure: bool = env::var("SESSION_COOKIE_SECURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false);
            assert!(!secure);
        });

        with_env_var("SESSION_COOKIE_SECURE", Some("true"), || {
            let secure: bool = env::var("SESSION_COOKIE_SECURE")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(false);
            assert!(secure);
        });
    }
}
