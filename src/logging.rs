//! Diagnostics via `tracing`.
//!
//! Everything goes to stderr so the pipeline's stdout stays byte-exact.

use tracing_subscriber::{fmt, layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Used when `RUST_LOG` is unset or unparsable. Only this crate's warnings
/// get through.
pub const DEFAULT_DIRECTIVE: &str = "squares_pipeline=warn";

/// Builds the filter from `RUST_LOG`, falling back to [`DEFAULT_DIRECTIVE`].
pub fn env_filter() -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_DIRECTIVE))
}

/// Installs the global subscriber: compact format on stderr.
///
/// Call once, at the top of `main`. A second call panics.
///
/// ```bash
/// RUST_LOG=squares_pipeline=debug cargo run
/// ```
pub fn init() {
    tracing_subscriber::registry()
        .with(env_filter())
        .with(fmt::layer().with_writer(std::io::stderr).compact())
        .init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directive_parses() {
        assert!(EnvFilter::try_new(DEFAULT_DIRECTIVE).is_ok());
    }

    #[test]
    fn test_default_directive_targets_this_crate() {
        assert_eq!(
            DEFAULT_DIRECTIVE.split('=').next(),
            Some(env!("CARGO_CRATE_NAME"))
        );
    }
}
