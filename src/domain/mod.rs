//! Clean business entities, separate from actor infrastructure.

pub mod appointment;
pub mod slot;
pub mod symptom;
pub mod user;

pub use appointment::*;
pub use slot::*;
pub use symptom::*;
pub use user::*;
