//! The credential store and doctor directory service.

mod actor;
mod error;

pub use actor::DirectoryActor;
pub use error::DirectoryError;
