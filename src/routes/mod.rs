pub mod economy;
pub mod giveaway;
pub mod me;
pub mod transaction;
pub mod tryvia;
pub mod users;

pub use economy::{EconomyRoutes, GiveTakeRequest};
pub use giveaway::GiveawayHandle;
pub use me::MeRoutes;
pub use transaction::TransactionHandle;
pub use tryvia::TryviaRoutes;
pub use users::{TransactionFilter, UserRoutes};
