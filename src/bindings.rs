//! The JavaScript facing side of the crate.
//!
//! ```js
//! import { initializeConnector } from '@web3-react/core'
//! import { SodiumConnector, sodiumConnection } from 'sodium-connector'
//!
//! const [sodium, hooks] = initializeConnector((actions) => new SodiumConnector(actions))
//! export const connection = sodiumConnection(sodium, hooks)
//! ```

use crate::{
    config::ProviderConfig,
    connection::{self, BrowserSodiumConnector, Connection},
    connector::Connector as _,
    environment::BrowserEnvironment,
    error::{Error, SdkError},
    ffi,
    sdk::BrowserLoader,
    sodium_connector::SodiumConnector,
};
use std::rc::Rc;
use wasm_bindgen::prelude::*;

#[wasm_bindgen(js_name = SodiumConnector)]
pub struct JsSodiumConnector {
    inner: Rc<BrowserSodiumConnector<ffi::Web3ReactActions>>,
}

#[wasm_bindgen(js_class = SodiumConnector)]
impl JsSodiumConnector {
    /// `config` is optional, the default Sodium configuration is used if
    /// it is `undefined` or `null`.
    #[wasm_bindgen(constructor)]
    pub fn new(
        actions: ffi::Web3ReactActions,
        config: JsValue,
    ) -> Result<JsSodiumConnector, JsValue> {
        let config = if config.is_undefined() || config.is_null() {
            ProviderConfig::default()
        } else {
            serde_wasm_bindgen::from_value(config)?
        };

        let inner = SodiumConnector::new(BrowserLoader, actions, BrowserEnvironment, config);
        Ok(Self {
            inner: Rc::new(inner),
        })
    }

    #[wasm_bindgen(getter)]
    pub fn provider(&self) -> Option<ffi::Provider> {
        self.inner.provider()
    }

    #[wasm_bindgen(js_name = isInSodium)]
    pub fn is_in_sodium(&self) -> bool {
        self.inner.is_in_sodium()
    }

    pub fn activate(&self) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);
        wasm_bindgen_futures::future_to_promise(async move {
            let result: Result<(), Error> = inner.activate().await;
            result.map(|()| JsValue::UNDEFINED).map_err(JsValue::from)
        })
    }

    #[wasm_bindgen(js_name = connectEagerly)]
    pub fn connect_eagerly(&self) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);
        wasm_bindgen_futures::future_to_promise(async move {
            let result: Result<(), Error> = inner.connect_eagerly().await;
            result.map(|()| JsValue::UNDEFINED).map_err(JsValue::from)
        })
    }

    pub fn deactivate(&self) -> js_sys::Promise {
        let inner = Rc::clone(&self.inner);
        wasm_bindgen_futures::future_to_promise(async move {
            let result: Result<(), Error> = inner.deactivate().await;
            result.map(|()| JsValue::UNDEFINED).map_err(JsValue::from)
        })
    }
}

#[wasm_bindgen(js_name = Connection)]
pub struct JsConnection {
    connection: Connection<JsValue, JsValue>,
}

#[wasm_bindgen(js_class = Connection)]
impl JsConnection {
    /// the exact connector object given to [`sodium_connection`]
    #[wasm_bindgen(getter)]
    pub fn connector(&self) -> JsValue {
        self.connection.connector.clone()
    }

    #[wasm_bindgen(getter)]
    pub fn hooks(&self) -> JsValue {
        self.connection.hooks.clone()
    }

    #[wasm_bindgen(getter, js_name = "type")]
    pub fn kind(&self) -> String {
        self.connection.kind.to_string()
    }
}

/// Bind the connector built by the framework's `initializeConnector` and
/// the hooks returned along with it.
///
/// ```js
/// const [sodium, hooks] = initializeConnector((actions) => new SodiumConnector(actions))
/// export const connection = sodiumConnection(sodium, hooks)
/// ```
#[wasm_bindgen(js_name = sodiumConnection)]
pub fn sodium_connection(connector: JsValue, hooks: JsValue) -> Result<JsConnection, JsValue> {
    if !looks_like_connector(&connector) {
        return Err(js_sys::TypeError::new("expecting a SodiumConnector").into());
    }

    Ok(JsConnection {
        connection: Connection::sodium(connector, hooks),
    })
}

fn looks_like_connector(value: &JsValue) -> bool {
    if !value.is_object() {
        return false;
    }

    let has_function_property = |prop: &str| {
        js_sys::Reflect::get(value, &JsValue::from_str(prop))
            .ok()
            .map(|v| v.is_function())
            .unwrap_or(false)
    };

    has_function_property("activate")
        && has_function_property("connectEagerly")
        && has_function_property("deactivate")
}

#[wasm_bindgen(js_name = onError)]
pub fn on_error(error: JsValue) {
    connection::on_error(&Error::Sdk(SdkError::from_js(error)));
}

/// Send the `tracing` events and the panics to the browser's console.
///
/// Calling it more than once has no effect.
#[cfg(target_arch = "wasm32")]
#[wasm_bindgen(js_name = installTracing)]
pub fn install_tracing() {
    console_error_panic_hook::set_once();
    // already installed otherwise
    let _ = tracing_wasm::try_set_as_global_default();
}
