//! HTTP handlers for the Cafeteria Management Dashboard

pub mod cash;
pub mod expenses;
pub mod gate;
pub mod health;
pub mod items;
pub mod purchases;
pub mod reports;
pub mod sync;
pub mod users;

pub use cash::*;
pub use expenses::*;
pub use gate::*;
pub use health::*;
pub use items::*;
pub use purchases::*;
pub use reports::*;
pub use sync::*;
pub use users::*;
