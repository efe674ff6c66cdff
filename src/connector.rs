use crate::{error::Error, ffi};

/// Reverts the framework to the non-activating state. Obtained from
/// [`Actions::start_activation`].
pub type CancelActivation = Box<dyn FnOnce()>;

/// The new state of the connection, published with [`Actions::update`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StateUpdate {
    pub chain_id: u64,
    pub accounts: Vec<String>,
}

/// The capabilities the connector framework gives to every connector.
pub trait Actions {
    fn start_activation(&self) -> CancelActivation;

    fn update(&self, update: StateUpdate);

    fn reset_state(&self);
}

/// A wallet connector as seen from the connector-selection layer.
#[async_trait::async_trait(?Send)]
pub trait Connector {
    type Provider;

    /// the transport handle, available once the wallet was initialized
    fn provider(&self) -> Option<Self::Provider>;

    /// User initiated connection, errors are meant to be shown.
    async fn activate(&self) -> Result<(), Error>;

    /// Silently try to resume a previous connection.
    async fn connect_eagerly(&self) -> Result<(), Error>;

    async fn deactivate(&self) -> Result<(), Error>;
}

impl Actions for ffi::Web3ReactActions {
    fn start_activation(&self) -> CancelActivation {
        let cancel = ffi::Web3ReactActions::start_activation(self);

        Box::new(move || {
            if let Err(error) = cancel.call0(&wasm_bindgen::JsValue::NULL) {
                tracing::warn!(?error, "cancelling the activation failed");
            }
        })
    }

    fn update(&self, update: StateUpdate) {
        match serde_wasm_bindgen::to_value(&update) {
            Ok(state) => ffi::Web3ReactActions::update(self, state),
            Err(error) => tracing::error!(%error, ?update, "couldn't encode the state update"),
        }
    }

    fn reset_state(&self) {
        ffi::Web3ReactActions::reset_state(self)
    }
}
