//! Browser helpers: DOM access and console logging.

pub mod dom;
pub mod logging;
