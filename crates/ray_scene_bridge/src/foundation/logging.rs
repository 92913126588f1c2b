//! Logging utilities and structured logging support

pub use log::{debug, error, info, trace, warn};
