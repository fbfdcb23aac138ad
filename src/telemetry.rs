//! Tracing subscriber setup for the binary.

use tracing_subscriber::EnvFilter;

pub const DEFAULT_LOG_FILTER: &str = "plant_tracker=info,tower_http=info";

/// Install a global fmt subscriber. `RUST_LOG` wins over `default_filter` when set.
pub fn init_tracing(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_filter_covers_request_tracing() {
        assert!(EnvFilter::try_new(DEFAULT_LOG_FILTER).is_ok());
        assert!(DEFAULT_LOG_FILTER.split(',').any(|d| d == "tower_http=info"));
    }
}
