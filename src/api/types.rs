use serde::{Deserialize, Serialize};

/// Balance of the configured address, as a display string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenBalance {
    pub balance: String,
}

/// Body of a mint request: recipient address and amount string.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintRequest {
    pub to: String,
    pub amount: String,
}

/// Receipt for a completed mint transaction.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MintReceipt {
    #[serde(rename = "transactionHash")]
    pub transaction_hash: String,
}

/// Token contract metadata. The backend owns the shape; only the
/// fields the UI shows are typed, the rest ride along untouched.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct ContractDetail {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub symbol: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Latest token price snapshot from the backend's price feed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PriceFeed {
    #[serde(default)]
    pub price: Option<String>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}
