pub mod football;
pub mod giveaway;
pub mod transaction;
pub mod tryvia;
pub mod user;

pub use football::*;
pub use giveaway::*;
pub use transaction::*;
pub use tryvia::*;
pub use user::*;
