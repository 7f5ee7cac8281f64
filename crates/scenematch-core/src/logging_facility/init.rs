//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for development
    Development,
    /// JSON structured output for production
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

static INIT_ONCE: Once = Once::new();

/// Initialize the logging facility
///
/// Installs the global tracing subscriber for the selected profile. Later
/// calls are no-ops, and so is a call made after another global subscriber
/// (for example the test capture layer) has already been installed.
///
/// # Profiles
///
/// - **Development**: Human-readable logs with debug level
/// - **Production**: JSON structured logs with info level
/// - **Test**: No output; assertions go through `init_test_capture()`
///
/// # Example
///
/// ```
/// use scenematch_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| {
        let installed = match profile {
            Profile::Development => tracing_subscriber::fmt()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("scenematch=debug")),
                )
                .try_init()
                .is_ok(),
            Profile::Production => tracing_subscriber::fmt()
                .json()
                .with_env_filter(
                    EnvFilter::try_from_default_env()
                        .unwrap_or_else(|_| EnvFilter::new("scenematch=info")),
                )
                .try_init()
                .is_ok(),
            Profile::Test => tracing_subscriber::registry().try_init().is_ok(),
        };
        if !installed {
            tracing::debug!(?profile, "global subscriber already installed");
        }
    });
}
