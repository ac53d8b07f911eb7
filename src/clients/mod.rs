pub mod marketplace_client;

pub use marketplace_client::{MarketplaceApi, MarketplaceClient};
