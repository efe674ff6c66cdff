/*!

# Sodium Connector

This library is a [web3-react] style connector for the Sodium embedded wallet.
It is meant to be compiled to WebAssembly and used by web applications that
may be loaded inside the Sodium wallet (in an iframe or with the wallet's
marker injected in the page).

## Features

- Detect whether the application runs inside the Sodium wallet
- Lazily load the `0xsodium` SDK, only once
- Connect, eagerly or on user request, and publish the chain id and account
- Disconnect

## Usage

From JavaScript, the connector is built with the `actions` provided by
`initializeConnector`, the connection then binds that very connector to
its hooks:

```js
import { initializeConnector } from '@web3-react/core'
import { SodiumConnector, sodiumConnection } from 'sodium-connector'

const [sodium, hooks] = initializeConnector((actions) => new SodiumConnector(actions))
export const connection = sodiumConnection(sodium, hooks)
```

From Rust, the [`SodiumConnector`] is generic over how the SDK is loaded,
the framework's [`Actions`] and the [`Environment`] it runs in:

```no_run
use sodium_connector::{Connector as _, sodium_connection};
# use sodium_connector::{Actions, CancelActivation, StateUpdate};
# struct MyActions;
# impl Actions for MyActions {
#     fn start_activation(&self) -> CancelActivation { Box::new(|| ()) }
#     fn update(&self, _: StateUpdate) {}
#     fn reset_state(&self) {}
# }

# async fn test() -> Result<(), sodium_connector::Error> {
let connection = sodium_connection(MyActions, ());
connection.connector.connect_eagerly().await?;
# Ok(()) }
```

Connecting eagerly never fails when outside of the wallet, activating
does: it returns an [`Error::NoSodiumContext`].

[web3-react]: https://github.com/Uniswap/web3-react

*/

pub mod bindings;
pub mod config;
pub mod connection;
pub mod connector;
pub mod environment;
pub mod error;
pub mod ffi;
pub mod sdk;
mod sodium_connector;

pub use self::{
    config::ProviderConfig,
    connection::{Connection, ConnectionType, on_error, sodium_connection},
    connector::{Actions, CancelActivation, Connector, StateUpdate},
    environment::{BrowserEnvironment, Environment, HostContext},
    error::{Error, SdkError},
    sodium_connector::SodiumConnector,
};
