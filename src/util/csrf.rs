//! Anti-forgery token plumbing.
//!
//! The token is issued by the server and carried opaquely; it is read from
//! the page (meta tag first, then cookie) and echoed back in a request
//! header on every state-mutating call.

#[cfg(test)]
#[path = "csrf_test.rs"]
mod csrf_test;

use crate::config::ClientConfig;

/// Opaque anti-forgery token supplied by the page.
#[derive(Clone, PartialEq, Eq)]
pub struct CsrfToken(String);

impl CsrfToken {
    pub fn new(value: impl Into<String>) -> Self {
        Self(value.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Read the token from the configured meta tag, then the cookie store.
    pub fn from_document(config: &ClientConfig) -> Option<Self> {
        #[cfg(feature = "hydrate")]
        {
            use wasm_bindgen::JsCast;

            let doc = web_sys::window()?.document()?;
            let selector = meta_selector(&config.csrf_meta_name);
            let from_meta = doc
                .query_selector(&selector)
                .ok()
                .flatten()
                .and_then(|el| el.get_attribute("content"))
                .filter(|v| !v.is_empty());
            if let Some(value) = from_meta {
                return Some(Self(value));
            }
            let cookies = doc.dyn_ref::<web_sys::HtmlDocument>()?.cookie().ok()?;
            cookie_value(&cookies, &config.csrf_cookie_name).map(Self)
        }
        #[cfg(not(feature = "hydrate"))]
        {
            let _ = config;
            None
        }
    }
}

impl std::fmt::Debug for CsrfToken {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str("CsrfToken(..)")
    }
}

#[cfg(any(test, feature = "hydrate"))]
fn meta_selector(name: &str) -> String {
    format!("meta[name=\"{name}\"]")
}

/// Find `name` in a `document.cookie` style string (`a=1; b=2`).
pub fn cookie_value(cookies: &str, name: &str) -> Option<String> {
    cookies
        .split(';')
        .filter_map(|pair| pair.trim().split_once('='))
        .find(|(key, _)| *key == name)
        .map(|(_, value)| value.to_owned())
        .filter(|value| !value.is_empty())
}
