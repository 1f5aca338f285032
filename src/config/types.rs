use serde::{Deserialize, Serialize};

/// Root configuration container.
///
/// Passed explicitly into the API client and the login bridge at
/// construction; nothing else reads the environment.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub backend: BackendConfig,
    #[serde(default)]
    pub login: LoginConfig,
    #[serde(default)]
    pub token: TokenConfig,
}

/// Connection settings for the token-balance/minting backend.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Base URL of the backend (e.g., "http://127.0.0.1:3000").
    #[serde(default = "default_backend_base_url")]
    pub base_url: String,
    /// Request timeout in seconds.
    #[serde(default = "default_timeout")]
    pub timeout_seconds: u32,
    /// Connection timeout in seconds.
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_seconds: u32,
}

/// Login-platform settings for the identity bridge.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoginConfig {
    /// Base URL of the login platform's profile API.
    #[serde(default = "default_login_base_url")]
    pub base_url: String,
    /// Application identifier issued by the login platform.
    #[serde(default)]
    pub app_id: String,
}

/// Token presentation settings.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenConfig {
    /// Contract address the balance query and explorer link are keyed on.
    #[serde(default)]
    pub contract_address: String,
    /// Block-explorer base URL; the contract address is appended.
    #[serde(default = "default_explorer_base_url")]
    pub explorer_base_url: String,
}

impl TokenConfig {
    /// Explorer page for the configured contract address.
    pub fn explorer_url(&self) -> String {
        format!(
            "{}/address/{}",
            self.explorer_base_url.trim_end_matches('/'),
            self.contract_address
        )
    }
}

fn default_backend_base_url() -> String {
    "http://127.0.0.1:3000".to_string()
}

fn default_timeout() -> u32 {
    30
}

fn default_connect_timeout() -> u32 {
    5
}

fn default_login_base_url() -> String {
    "https://api.line.me".to_string()
}

fn default_explorer_base_url() -> String {
    "https://kairos.kaiascan.io".to_string()
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            base_url: default_backend_base_url(),
            timeout_seconds: default_timeout(),
            connect_timeout_seconds: default_connect_timeout(),
        }
    }
}

impl Default for LoginConfig {
    fn default() -> Self {
        Self {
            base_url: default_login_base_url(),
            app_id: String::new(),
        }
    }
}

impl Default for TokenConfig {
    fn default() -> Self {
        Self {
            contract_address: String::new(),
            explorer_base_url: default_explorer_base_url(),
        }
    }
}
