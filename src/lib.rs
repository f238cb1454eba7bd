pub mod cache;
pub mod client;
pub mod config;
pub mod error;
pub mod fields;
pub mod models;
pub mod permissions;
pub mod routes;
pub mod transport;
mod wait;

pub use cache::TtlCache;
pub use client::{CacheWarm, StxClient};
pub use config::ClientConfig;
pub use error::{ErrorKind, SdkError};
pub use fields::UserFields;
pub use routes::{GiveawayHandle, TransactionHandle};

#[cfg(test)]
mod tests;
