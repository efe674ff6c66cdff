use wasm_bindgen::prelude::*;

#[wasm_bindgen(inline_js = "export function importSodium() { return import('0xsodium'); }")]
extern "C" {
    /// Load the `0xsodium` module. The module is only fetched the first
    /// time this is called, afterward the module loader returns its cache.
    #[wasm_bindgen(catch, js_name = "importSodium")]
    pub async fn import_sodium() -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    #[derive(Clone, PartialEq)]
    pub type SodiumModule;

    /// Build the wallet instance. The first parameter is the optional
    /// network override, the second the `ProviderConfig`.
    #[wasm_bindgen(method, catch, js_name = "initWallet")]
    pub async fn init_wallet(
        this: &SodiumModule,
        network: JsValue,
        config: JsValue,
    ) -> Result<JsValue, JsValue>;
}

#[wasm_bindgen]
extern "C" {
    /// The EIP-1193 provider exposed by the wallet.
    #[derive(Clone, PartialEq)]
    pub type Provider;

    #[derive(Clone, PartialEq)]
    pub type SodiumWallet;

    #[wasm_bindgen(method, js_name = "getProvider")]
    pub fn provider(this: &SodiumWallet) -> Provider;

    /// Open a session with the wallet application.
    ///
    /// Takes an object `{ app, origin, keepWalletOpened, refresh? }`.
    #[wasm_bindgen(method, catch)]
    pub async fn connect(this: &SodiumWallet, options: JsValue) -> Result<JsValue, JsValue>;

    #[wasm_bindgen(method)]
    pub fn disconnect(this: &SodiumWallet);

    /// Resolves to the chain id as a number.
    #[wasm_bindgen(method, catch, js_name = "getChainId")]
    pub async fn chain_id(this: &SodiumWallet) -> Result<JsValue, JsValue>;

    /// Resolves to the `0x` prefixed address of the connected account.
    #[wasm_bindgen(method, catch, js_name = "getAddress")]
    pub async fn address(this: &SodiumWallet) -> Result<JsValue, JsValue>;
}
