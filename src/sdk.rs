use crate::{
    config::ProviderConfig,
    error::{Error, SdkError},
    ffi,
};
use futures::{FutureExt as _, future::LocalBoxFuture};
use wasm_bindgen::{JsCast as _, JsValue};

/// Options of the wallet's `connect` call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ConnectOptions {
    pub app: String,
    pub origin: String,
    pub keep_wallet_opened: bool,
    /// force the wallet to refresh the session, left unset by default
    #[serde(skip_serializing_if = "Option::is_none")]
    pub refresh: Option<bool>,
}

impl ConnectOptions {
    pub fn new(app: impl Into<String>, origin: impl Into<String>) -> Self {
        Self {
            app: app.into(),
            origin: origin.into(),
            keep_wallet_opened: false,
            refresh: None,
        }
    }
}

/// An initialized Sodium wallet.
#[async_trait::async_trait(?Send)]
pub trait WalletHandle {
    type Provider: Clone + 'static;

    fn provider(&self) -> Self::Provider;

    async fn connect(&self, options: &ConnectOptions) -> Result<(), Error>;

    fn disconnect(&self);

    async fn chain_id(&self) -> Result<u64, Error>;

    async fn address(&self) -> Result<String, Error>;
}

/// Loads the SDK and builds the wallet instance.
///
/// The returned future does not borrow the loader so it can be kept
/// around and shared between all the callers waiting on it.
pub trait WalletLoader {
    type Wallet: WalletHandle + 'static;

    fn init_wallet(
        &self,
        config: &ProviderConfig,
    ) -> LocalBoxFuture<'static, Result<Self::Wallet, Error>>;
}

/// Lazily imports the `0xsodium` module in the browser.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BrowserLoader;

impl WalletLoader for BrowserLoader {
    type Wallet = ffi::SodiumWallet;

    fn init_wallet(
        &self,
        config: &ProviderConfig,
    ) -> LocalBoxFuture<'static, Result<Self::Wallet, Error>> {
        let config = config.to_js();

        async move {
            let config = config?;
            let module: ffi::SodiumModule = ffi::import_sodium()
                .await
                .map_err(SdkError::from_js)?
                .unchecked_into();

            tracing::debug!("sodium module loaded");

            let wallet: ffi::SodiumWallet = module
                .init_wallet(JsValue::undefined(), config)
                .await
                .map_err(SdkError::from_js)?
                .unchecked_into();

            Ok::<_, Error>(wallet)
        }
        .boxed_local()
    }
}

#[async_trait::async_trait(?Send)]
impl WalletHandle for ffi::SodiumWallet {
    type Provider = ffi::Provider;

    fn provider(&self) -> Self::Provider {
        ffi::SodiumWallet::provider(self)
    }

    async fn connect(&self, options: &ConnectOptions) -> Result<(), Error> {
        let options = serde_wasm_bindgen::to_value(options).map_err(|error| {
            SdkError::internal(format!("Couldn't encode the connect options: {error}"))
        })?;

        ffi::SodiumWallet::connect(self, options)
            .await
            .map_err(SdkError::from_js)?;
        Ok(())
    }

    fn disconnect(&self) {
        ffi::SodiumWallet::disconnect(self)
    }

    async fn chain_id(&self) -> Result<u64, Error> {
        let chain_id = ffi::SodiumWallet::chain_id(self)
            .await
            .map_err(SdkError::from_js)?;

        let Some(number) = chain_id.as_f64() else {
            return Err(SdkError::internal(format!("Unknown chain id: {chain_id:?}")).into());
        };
        Ok(decode_chain_id(number)?)
    }

    async fn address(&self) -> Result<String, Error> {
        let address = ffi::SodiumWallet::address(self)
            .await
            .map_err(SdkError::from_js)?;

        address
            .as_string()
            .ok_or_else(|| SdkError::internal(format!("Invalid address: {address:?}")).into())
    }
}

/// JavaScript numbers are doubles, only accept the ones that are actual
/// chain ids.
fn decode_chain_id(number: f64) -> Result<u64, SdkError> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

    if number.fract() != 0.0 || !(0.0..=MAX_SAFE_INTEGER).contains(&number) {
        return Err(SdkError::internal(format!("Unknown chain id: {number}")));
    }

    Ok(number as u64)
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn connect_options_json() {
        assert_eq!(
            serde_json::to_value(ConnectOptions::new("test", "https://dapp.example")).unwrap(),
            json! { {
                "app": "test",
                "origin": "https://dapp.example",
                "keepWalletOpened": false,
            }}
        );

        let refreshing = ConnectOptions {
            refresh: Some(true),
            ..ConnectOptions::new("test", "https://dapp.example")
        };
        assert_eq!(
            serde_json::to_value(refreshing).unwrap()["refresh"],
            json!(true)
        );
    }

    #[test]
    fn chain_ids() {
        assert_eq!(decode_chain_id(80001.0), Ok(80001));
        assert_eq!(decode_chain_id(1.0), Ok(1));
        assert!(decode_chain_id(1.5).is_err());
        assert!(decode_chain_id(-1.0).is_err());
        assert!(decode_chain_id(f64::NAN).is_err());
        assert!(decode_chain_id(f64::INFINITY).is_err());
    }
}
