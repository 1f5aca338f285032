//! Async client for the token-balance/minting backend.

mod client;
mod error;
mod types;

pub use client::ApiClient;
pub use error::ApiError;
pub use types::{ContractDetail, MintReceipt, MintRequest, PriceFeed, TokenBalance};
