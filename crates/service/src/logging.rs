//! Tracing setup shared by the service binaries

use tracing_subscriber::EnvFilter;

/// Build the log filter. `RUST_LOG`, when set and valid, is used unchanged;
/// otherwise `bin_target`, this crate and `tower_http` log at `info`, or at
/// `debug` in debug mode.
pub fn env_filter(bin_target: &str, debug: bool, rust_log: Option<&str>) -> EnvFilter {
    if let Some(filter) = rust_log.and_then(|directives| EnvFilter::try_new(directives).ok()) {
        return filter;
    }

    let level = if debug { "debug" } else { "info" };
    EnvFilter::new(format!(
        "{bin_target}={level},service={level},tower_http={level}"
    ))
}

/// Install the global fmt subscriber
pub fn init(bin_target: &str, debug: bool) {
    let rust_log = std::env::var(EnvFilter::DEFAULT_ENV).ok();
    tracing_subscriber::fmt()
        .with_env_filter(env_filter(bin_target, debug, rust_log.as_deref()))
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_at_info() {
        let filter = env_filter("blue_service", false, None).to_string();
        assert!(filter.contains("blue_service=info"));
        assert!(filter.contains("service=info"));
        assert!(filter.contains("tower_http=info"));
    }

    #[test]
    fn test_debug_mode_raises_defaults() {
        let filter = env_filter("green_service", true, None).to_string();
        assert!(filter.contains("green_service=debug"));
        assert!(filter.contains("tower_http=debug"));
        assert!(!filter.contains("=info"));
    }

    #[test]
    fn test_rust_log_not_lowered_by_defaults() {
        let filter = env_filter("blue_service", false, Some("service=trace")).to_string();
        assert!(filter.contains("service=trace"));
        assert!(!filter.contains("=info"));
    }

    #[test]
    fn test_invalid_rust_log_falls_back() {
        let filter = env_filter("blue_service", false, Some("service=loud")).to_string();
        assert!(filter.contains("blue_service=info"));
    }
}
