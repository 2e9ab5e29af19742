//! Shared constants for the Vigil status aggregator.

/// Vigil version string.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Environment variable holding the tracing filter.
pub const LOG_ENV_VAR: &str = "VIGIL_LOG";

/// Filter applied when `VIGIL_LOG` is unset or invalid.
pub const DEFAULT_LOG_FILTER: &str = "vigil=info";

/// Conventional name of the workload slot in template configurations.
pub const WORKLOAD_SLOT: &str = "workload";
