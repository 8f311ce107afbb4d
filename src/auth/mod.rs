//! Credential hashing, bearer tokens, and the role gate.

pub mod error;
pub mod gate;
pub mod password;
pub mod token;

pub use error::*;
pub use gate::*;
pub use password::*;
pub use token::*;
