use crate::{
    SodiumConnector,
    config::ProviderConfig,
    connector::Actions,
    environment::BrowserEnvironment,
    error::Error,
    sdk::BrowserLoader,
};
use core::fmt;
use std::rc::Rc;

/// The connector running in the actual browser.
pub type BrowserSodiumConnector<A> = SodiumConnector<BrowserLoader, A, BrowserEnvironment>;

#[derive(
    Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub enum ConnectionType {
    #[serde(rename = "SODIUM")]
    Sodium,
}

/// A connector and the hooks the framework built along with it.
///
/// `connector` is the very connector the framework holds, the connection
/// never builds one of its own.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Connection<C, H> {
    pub connector: C,
    pub hooks: H,
    pub kind: ConnectionType,
}

impl fmt::Display for ConnectionType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConnectionType::Sodium => write!(f, "SODIUM"),
        }
    }
}

impl<C, H> Connection<C, H> {
    /// bind an already built Sodium connector and its hooks
    pub fn sodium(connector: C, hooks: H) -> Self {
        Self {
            connector,
            hooks,
            kind: ConnectionType::Sodium,
        }
    }
}

/// Build the Sodium connector, bound to the default [`ProviderConfig`], and
/// its connection.
///
/// `actions` and `hooks` are the pair the connector framework creates when
/// initializing a connector.
pub fn sodium_connection<A, H>(
    actions: A,
    hooks: H,
) -> Connection<Rc<BrowserSodiumConnector<A>>, H>
where
    A: Actions,
{
    let connector = SodiumConnector::new(
        BrowserLoader,
        actions,
        BrowserEnvironment,
        ProviderConfig::default(),
    );

    Connection::sodium(Rc::new(connector), hooks)
}

/// Error reporter handed to the connector framework.
pub fn on_error(error: &Error) {
    tracing::debug!(%error, "web3-react error");
}
