use crate::error::SdkError;
use serde::Serialize as _;
use serde_wasm_bindgen::Serializer;
use wasm_bindgen::JsValue;

/// The chain the wallet starts on: Polygon Mumbai.
pub const DEFAULT_NETWORK_ID: u64 = 80001;

/// Where the Sodium wallet application is served from.
pub const WALLET_APP_URL: &str = "https://sodium-two.vercel.app";

/// The application name announced to the wallet when connecting.
pub const DEFAULT_APP_NAME: &str = "test";

/// Configuration handed over to the Sodium SDK's `initWallet`.
///
/// The field names follow the SDK's own `ProviderConfig` so the value can
/// be serialized straight into the JavaScript object it expects. The keys
/// the connector has no use for are kept in `extra` and handed over too.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProviderConfig {
    pub default_network_id: u64,
    #[serde(rename = "walletAppURL")]
    pub wallet_app_url: String,
    #[serde(default)]
    pub transports: Transports,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Transports {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub iframe_transport: Option<TransportSettings>,
    /// in-page transport, currently not enabled by default
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub app_transport: Option<TransportSettings>,
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct TransportSettings {
    #[serde(default)]
    pub enabled: bool,
}

impl ProviderConfig {
    pub fn new(default_network_id: u64, wallet_app_url: impl Into<String>) -> Self {
        Self {
            default_network_id,
            wallet_app_url: wallet_app_url.into(),
            transports: Transports::default(),
            extra: serde_json::Map::new(),
        }
    }

    pub fn with_iframe_transport(mut self, enabled: bool) -> Self {
        self.transports.iframe_transport = Some(TransportSettings { enabled });
        self
    }

    pub fn with_app_transport(mut self, enabled: bool) -> Self {
        self.transports.app_transport = Some(TransportSettings { enabled });
        self
    }

    /// `true` if the iframe transport was explicitly enabled. This forces
    /// the adapter to consider it runs inside the wallet.
    pub fn iframe_transport_enabled(&self) -> bool {
        self.transports
            .iframe_transport
            .is_some_and(|transport| transport.enabled)
    }

    /// the plain JavaScript object given to the SDK
    pub fn to_js(&self) -> Result<JsValue, SdkError> {
        self.serialize(&Serializer::new().serialize_maps_as_objects(true))
            .map_err(|error| {
                SdkError::internal(format!("Couldn't encode the provider config: {error}"))
            })
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new(DEFAULT_NETWORK_ID, WALLET_APP_URL).with_iframe_transport(true)
    }
}
