//! Configuration for the session-auth-axum crate

use std::sync::LazyLock;

/// Route prefix under which the authentication endpoints are mounted.
/// Default: "/auth"
pub static AUTH_ROUTE_PREFIX: LazyLock<String> =
    LazyLock::new(|| std::env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/auth".to_string()));

#[cfg(test)]
mod tests {
    use std::env;

    #[test]
    fn test_auth_route_prefix_default() {
        // The LazyLock may already be initialized, so test the same logic it
        // uses rather than the static itself.
        if env::var("AUTH_ROUTE_PREFIX").is_err() {
            let prefix = env::var("AUTH_ROUTE_PREFIX").unwrap_or_else(|_| "/auth".to_string());
            assert_eq!(prefix, "/auth");
        }
    }
}
