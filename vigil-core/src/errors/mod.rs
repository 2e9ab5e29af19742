//! Error taxonomy for the Vigil aggregator.
//! One enum per failure family, plus host-boundary error codes.

pub mod config_error;
pub mod error_code;
pub mod pool_error;
pub mod sink_error;
pub mod status_error;

pub use config_error::ConfigError;
pub use error_code::VigilErrorCode;
pub use pool_error::PoolError;
pub use sink_error::SinkError;
pub use status_error::StatusError;
