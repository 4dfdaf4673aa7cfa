//! Client handles: the cart client given to the presentation layer and the
//! inventory client it uses for stock and catalog lookups.

#[macro_use]
mod macros;

pub mod cart_client;
pub mod inventory_client;

pub use cart_client::*;
pub use inventory_client::*;
