use wasm_bindgen::prelude::*;

#[wasm_bindgen]
extern "C" {
    /// The `Actions` object `initializeConnector` hands over to every
    /// web3-react connector.
    #[derive(Clone, PartialEq)]
    pub type Web3ReactActions;

    /// Signal the beginning of an activation. Returns the function to call
    /// to revert to the non-activating state.
    #[wasm_bindgen(method, js_name = "startActivation")]
    pub fn start_activation(this: &Web3ReactActions) -> js_sys::Function;

    /// Takes `{ chainId, accounts }`.
    #[wasm_bindgen(method)]
    pub fn update(this: &Web3ReactActions, state: JsValue);

    #[wasm_bindgen(method, js_name = "resetState")]
    pub fn reset_state(this: &Web3ReactActions);
}
