//! Domain Models
//!
//! Plain data types shared by the service and state layers.

pub mod customer;
pub mod load_state;

pub use customer::*;
pub use load_state::*;
