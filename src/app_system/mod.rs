//! System orchestration, startup, and shutdown logic.

pub mod clinic_system;
pub mod config;
pub mod tracing;

pub use self::clinic_system::*;
pub use self::config::*;
pub use self::tracing::*;
