//! Domain models for the Cafeteria Management Dashboard

mod cash;
mod expense;
mod item;
mod purchase;
mod snapshot;
mod user;

pub use cash::*;
pub use expense::*;
pub use item::*;
pub use purchase::*;
pub use snapshot::*;
pub use user::*;
