//! Deployment base path for the router.

/// Base path for the router (e.g., `/portal` when hosted under a subdirectory).
///
/// Taken from `PUBLIC_URL` at compile time. Returns `None` when no base path is
/// configured so the router falls back to root.
#[must_use]
pub fn router_base() -> Option<String> {
    router_base_with_base(option_env!("PUBLIC_URL").unwrap_or(""))
}

fn router_base_with_base(base: &str) -> Option<String> {
    let base = base.trim().trim_end_matches('/');
    if base.is_empty() {
        None
    } else {
        Some(base.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::router_base_with_base;

    #[test]
    fn empty_or_root_base_means_no_prefix() {
        assert_eq!(router_base_with_base(""), None);
        assert_eq!(router_base_with_base("/"), None);
        assert_eq!(router_base_with_base("  "), None);
    }

    #[test]
    fn trailing_slash_is_trimmed() {
        assert_eq!(
            router_base_with_base("/portal/"),
            Some(String::from("/portal"))
        );
    }
}
