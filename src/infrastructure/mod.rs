//! Infrastructure layer - logging setup and transport implementations

pub mod logging;
pub mod transport;
