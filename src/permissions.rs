//! Permission scopes the API grants per bot token. Attached to SDK calls so
//! the executor can deny locally when the cached set is known not to cover
//! them.

pub const ECONOMY_READ: &str = "ECONOMY.READ";
pub const ECONOMY_WRITE: &str = "ECONOMY.WRITE";
pub const GIVEAWAY_INFO_READ: &str = "GIVEAWAY.INFO.READ";
