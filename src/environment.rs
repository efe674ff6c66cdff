use crate::config::ProviderConfig;

/// Property set on the global object by the wallet when it injects the
/// application inside its own surface.
pub const SODIUM_MARKER: &str = "__SODIUM__";

/// What the detector can observe of the host page.
///
/// `window` is `None` when there is no browser context at all (server side
/// rendering, native targets).
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct HostContext {
    pub window: Option<WindowContext>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct WindowContext {
    /// the window is not the top level one (i.e. we are in a child frame)
    pub framed: bool,
    /// `window.__SODIUM__` is set
    pub sodium_marker: bool,
    /// `window.location.origin`
    pub origin: String,
}

pub trait Environment {
    fn probe(&self) -> HostContext;
}

/// Probes the actual browser window.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct BrowserEnvironment;

/// A fixed host, mostly useful for testing.
impl Environment for HostContext {
    fn probe(&self) -> HostContext {
        self.clone()
    }
}

impl HostContext {
    pub fn server_side() -> Self {
        Self { window: None }
    }

    pub fn browser(window: WindowContext) -> Self {
        Self {
            window: Some(window),
        }
    }
}

/// Decide whether the application runs inside the Sodium wallet.
///
/// The checks are done in order, the first one to succeed wins:
///
/// 1. no window: `false`, even if the configuration forces the iframe transport;
/// 2. the iframe transport is enabled in the configuration;
/// 3. the window is embedded in a parent frame;
/// 4. the wallet's marker is set on the window.
pub fn in_sodium(config: &ProviderConfig, host: &HostContext) -> bool {
    let Some(window) = host.window.as_ref() else {
        return false;
    };

    config.iframe_transport_enabled() || window.framed || window.sodium_marker
}

#[cfg(target_arch = "wasm32")]
impl Environment for BrowserEnvironment {
    fn probe(&self) -> HostContext {
        use wasm_bindgen::JsValue;

        let Some(window) = web_sys::window() else {
            return HostContext::server_side();
        };

        let this: &JsValue = window.as_ref();
        let framed = match window.parent() {
            Ok(Some(parent)) => this != AsRef::<JsValue>::as_ref(&parent),
            Ok(None) => false,
            // accessing the parent is denied, we can only be in a frame
            Err(_) => true,
        };
        let sodium_marker = js_sys::Reflect::get(this, &JsValue::from_str(SODIUM_MARKER))
            .map(|marker| marker.is_truthy())
            .unwrap_or(false);
        let origin = window.location().origin().unwrap_or_default();

        HostContext::browser(WindowContext {
            framed,
            sodium_marker,
            origin,
        })
    }
}

#[cfg(not(target_arch = "wasm32"))]
impl Environment for BrowserEnvironment {
    fn probe(&self) -> HostContext {
        HostContext::server_side()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn top_level() -> WindowContext {
        WindowContext {
            framed: false,
            sodium_marker: false,
            origin: "https://dapp.example".to_owned(),
        }
    }

    #[test]
    fn server_side_short_circuits_iframe_transport() {
        let config = ProviderConfig::default();
        assert!(config.iframe_transport_enabled());

        assert!(!in_sodium(&config, &HostContext::server_side()));
    }

    #[test]
    fn iframe_transport_forces_context() {
        let config = ProviderConfig::default();

        assert!(in_sodium(&config, &HostContext::browser(top_level())));
    }

    #[test]
    fn framed_window() {
        let config = ProviderConfig::new(80001, "https://wallet.example");

        assert!(!in_sodium(&config, &HostContext::browser(top_level())));
        assert!(in_sodium(
            &config,
            &HostContext::browser(WindowContext {
                framed: true,
                ..top_level()
            })
        ));
    }

    #[test]
    fn sodium_marker() {
        let config = ProviderConfig::default().with_iframe_transport(false);

        assert!(in_sodium(
            &config,
            &HostContext::browser(WindowContext {
                sodium_marker: true,
                ..top_level()
            })
        ));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn native_browser_probe_is_server_side() {
        assert_eq!(BrowserEnvironment.probe(), HostContext::server_side());
    }
}
