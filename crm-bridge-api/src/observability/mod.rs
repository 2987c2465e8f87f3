//! Observability for the bridge: structured logging and request correlation IDs.

pub mod logging;

pub use logging::{init_logging, request_logging_middleware, LogConfig, LogFormat, REQUEST_ID_HEADER};
