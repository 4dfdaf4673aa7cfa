//! Snapshot persistence for the cart.

pub mod bridge;
pub mod error;
pub mod store;

pub use bridge::*;
pub use error::*;
pub use store::*;
