use crate::{
    config::{DEFAULT_APP_NAME, ProviderConfig},
    connector::{Actions, Connector, StateUpdate},
    environment::{Environment, in_sodium},
    error::Error,
    sdk::{ConnectOptions, WalletHandle, WalletLoader},
};
use futures::{
    FutureExt as _, TryFutureExt as _,
    future::{LocalBoxFuture, Shared},
};
use std::{cell::RefCell, rc::Rc};

/// The wallet and its provider. They are captured together so one is never
/// available without the other.
struct Handles<W, P> {
    sdk: Rc<W>,
    provider: P,
}

impl<W, P: Clone> Clone for Handles<W, P> {
    fn clone(&self) -> Self {
        Self {
            sdk: Rc::clone(&self.sdk),
            provider: self.provider.clone(),
        }
    }
}

type WalletHandles<L> = Handles<<L as WalletLoader>::Wallet, ProviderOf<L>>;
type ProviderOf<L> = <<L as WalletLoader>::Wallet as WalletHandle>::Provider;

/// The SDK loading, shared by every caller waiting on it.
type Initialization<L> = Shared<LocalBoxFuture<'static, Result<WalletHandles<L>, Error>>>;

/// Connector for the Sodium embedded wallet.
///
/// The SDK is only loaded on the first activation attempt. The loading is
/// shared between all the callers: concurrent activations wait on the same
/// initialization and the SDK is never loaded twice, even if the loading
/// failed (the failure is then returned to every subsequent caller).
///
/// The connector is meant to run on a single threaded executor (the
/// browser's event loop), it is neither `Send` nor `Sync`.
pub struct SodiumConnector<L: WalletLoader, A, E> {
    config: ProviderConfig,
    app_name: String,
    loader: L,
    actions: A,
    environment: E,
    initialization: RefCell<Option<Initialization<L>>>,
    handles: RefCell<Option<WalletHandles<L>>>,
}

impl<L, A, E> SodiumConnector<L, A, E>
where
    L: WalletLoader,
    A: Actions,
    E: Environment,
{
    pub fn new(loader: L, actions: A, environment: E, config: ProviderConfig) -> Self {
        Self {
            config,
            app_name: DEFAULT_APP_NAME.to_owned(),
            loader,
            actions,
            environment,
            initialization: RefCell::new(None),
            handles: RefCell::new(None),
        }
    }

    /// set the application name announced to the wallet on connection
    pub fn with_app_name(mut self, app_name: impl Into<String>) -> Self {
        self.app_name = app_name.into();
        self
    }

    pub fn config(&self) -> &ProviderConfig {
        &self.config
    }

    /// Check whether the application runs inside the Sodium wallet.
    ///
    /// This is evaluated again on every call.
    pub fn is_in_sodium(&self) -> bool {
        in_sodium(&self.config, &self.environment.probe())
    }

    fn sdk(&self) -> Option<Rc<L::Wallet>> {
        self.handles
            .borrow()
            .as_ref()
            .map(|handles| Rc::clone(&handles.sdk))
    }

    async fn initialize(&self) -> Result<(), Error> {
        let initialization = self
            .initialization
            .borrow_mut()
            .get_or_insert_with(|| {
                tracing::debug!(
                    network_id = self.config.default_network_id,
                    wallet = %self.config.wallet_app_url,
                    "loading the sodium sdk"
                );

                self.loader
                    .init_wallet(&self.config)
                    .map_ok(|wallet| {
                        let provider = wallet.provider();
                        Handles {
                            sdk: Rc::new(wallet),
                            provider,
                        }
                    })
                    .boxed_local()
                    .shared()
            })
            .clone();

        let handles = initialization.await?;

        let mut current = self.handles.borrow_mut();
        if current.is_none() {
            *current = Some(handles);
        }
        Ok(())
    }

    async fn connect(&self) -> Result<(), Error> {
        let sdk = self.sdk().ok_or(Error::NoSodiumContext("connect no sdk"))?;
        let Some(window) = self.environment.probe().window else {
            return Err(Error::NoSodiumContext("connect no window"));
        };

        let options = ConnectOptions::new(&self.app_name, window.origin);
        sdk.connect(&options).await
    }

    async fn publish(&self, sdk: &L::Wallet) -> Result<(), Error> {
        let update = StateUpdate {
            chain_id: sdk.chain_id().await?,
            accounts: vec![sdk.address().await?],
        };

        tracing::debug!(chain_id = update.chain_id, accounts = ?update.accounts, "connected");
        self.actions.update(update);
        Ok(())
    }

    async fn eager_connection(&self) -> Result<(), Error> {
        self.initialize().await?;
        let sdk = self
            .sdk()
            .ok_or(Error::NoSodiumContext("connectEagerly no sdk"))?;
        self.connect().await?;
        self.publish(&sdk).await
    }

    async fn activation(&self) -> Result<(), Error> {
        self.initialize().await?;
        if self.provider().is_none() {
            return Err(Error::NoSodiumContext("no provider"));
        }
        let sdk = self.sdk().ok_or(Error::NoSodiumContext("no sdk"))?;
        self.connect().await?;
        self.publish(&sdk).await
    }
}

#[async_trait::async_trait(?Send)]
impl<L, A, E> Connector for SodiumConnector<L, A, E>
where
    L: WalletLoader,
    A: Actions,
    E: Environment,
{
    type Provider = <L::Wallet as WalletHandle>::Provider;

    fn provider(&self) -> Option<Self::Provider> {
        self.handles
            .borrow()
            .as_ref()
            .map(|handles| handles.provider.clone())
    }

    async fn activate(&self) -> Result<(), Error> {
        if !self.is_in_sodium() {
            return Err(Error::NoSodiumContext("activate"));
        }

        // only show activation if this is a first-time connection
        let first_connection = self.handles.borrow().is_none();
        let cancel_activation = first_connection.then(|| self.actions.start_activation());

        let result = self.activation().await;
        if let Err(error) = &result {
            tracing::debug!(%error, "activation failed");
            if let Some(cancel_activation) = cancel_activation {
                cancel_activation();
            }
        }
        result
    }

    async fn connect_eagerly(&self) -> Result<(), Error> {
        if !self.is_in_sodium() {
            tracing::trace!("not in sodium, skipping eager connection");
            return Ok(());
        }

        let cancel_activation = self.actions.start_activation();

        let result = self.eager_connection().await;
        if let Err(error) = &result {
            tracing::debug!(%error, "eager connection failed");
            cancel_activation();
        }
        result
    }

    async fn deactivate(&self) -> Result<(), Error> {
        let sdk = self
            .sdk()
            .ok_or(Error::NoSodiumContext("deactivate no sdk"))?;

        sdk.disconnect();
        self.actions.reset_state();
        Ok(())
    }
}
