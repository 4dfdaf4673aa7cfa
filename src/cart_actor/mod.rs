//! The cart actor: single owner of the cart sequence.

pub mod error;
pub mod messages;
pub mod service;

pub use error::*;
pub use messages::*;
pub use service::*;
