//! Session token persisted in a browser cookie.
//!
//! Reads and writes `document.cookie` under the configured key (default
//! `token`). "Remember me" writes a `Max-Age` cookie; otherwise the cookie
//! ends with the browser session. Requires a browser environment; native
//! builds see no token and accept writes as no-ops.

#[cfg(test)]
#[path = "cookies_test.rs"]
mod tests;

use signon::session::TokenStore;
use signon::{ClientConfig, SessionError};

#[derive(Debug, Clone)]
pub struct CookieTokenStore {
    key: String,
    max_age_secs: u64,
}

impl CookieTokenStore {
    pub fn new(config: &ClientConfig) -> Self {
        Self { key: config.token_key.clone(), max_age_secs: config.remember_max_age_secs() }
    }
}

impl TokenStore for CookieTokenStore {
    fn token(&self) -> Option<String> {
        #[cfg(feature = "csr")]
        {
            let header = html_document().ok()?.cookie().ok()?;
            read_cookie(&header, &self.key)
        }
        #[cfg(not(feature = "csr"))]
        {
            None
        }
    }

    fn store(&self, token: &str, persistent: bool) -> Result<(), SessionError> {
        let cookie = format_cookie(&self.key, token, persistent.then_some(self.max_age_secs));
        write_cookie(&cookie)
    }

    fn clear(&self) -> Result<(), SessionError> {
        write_cookie(&expired_cookie(&self.key))
    }
}

#[cfg(feature = "csr")]
fn html_document() -> Result<web_sys::HtmlDocument, SessionError> {
    use wasm_bindgen::JsCast;

    web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.dyn_into::<web_sys::HtmlDocument>().ok())
        .ok_or_else(|| SessionError::Storage("document unavailable".to_owned()))
}

fn write_cookie(cookie: &str) -> Result<(), SessionError> {
    #[cfg(feature = "csr")]
    {
        html_document()?
            .set_cookie(cookie)
            .map_err(|_| SessionError::Storage("cookie write rejected".to_owned()))
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = cookie;
        Ok(())
    }
}

/// Find `key` in a `document.cookie` string and percent-decode its value.
pub fn read_cookie(header: &str, key: &str) -> Option<String> {
    header.split(';').find_map(|pair| {
        let (name, value) = pair.trim().split_once('=')?;
        if name != key {
            return None;
        }
        Some(urlencoding::decode(value).map_or_else(|_| value.to_owned(), |v| v.into_owned()))
    })
}

/// Cookie assignment for `document.cookie`. `max_age_secs` of `None` makes
/// a session cookie.
pub fn format_cookie(key: &str, value: &str, max_age_secs: Option<u64>) -> String {
    let mut cookie = format!("{key}={}; Path=/; SameSite=Lax", urlencoding::encode(value));
    if let Some(secs) = max_age_secs {
        cookie.push_str(&format!("; Max-Age={secs}"));
    }
    cookie
}

/// Assignment that deletes `key`.
pub fn expired_cookie(key: &str) -> String {
    format!("{key}=; Path=/; Max-Age=0; SameSite=Lax")
}
