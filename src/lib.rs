pub mod errors;
pub mod requests;
pub mod responses;
pub mod services;
pub mod session;
pub mod transport;
pub mod views;
pub mod wallet;

mod utils;

use anyhow::anyhow;
use errors::CivicError;
use requests::auth::Credentials;
use reqwest::header::{HeaderMap, ACCEPT, AUTHORIZATION, USER_AGENT};
use reqwest::Url;
use responses::types::user::User;
use services::AuthService;
use session::Session;
use std::collections::HashMap;
use std::time::Duration;

pub const API_URL_ENV: &str = "CIVIC_API_URL";
pub const PROXY_ENV: &str = "CIVIC_PROXY";

#[derive(Clone, Debug)]
pub struct Civic {
    // Required properties
    pub base_url: String,

    // Optional properties
    token: Option<String>,

    // Optional settings
    proxy: Option<String>,
    timeout: Option<Duration>,
}

impl Civic {

    /// Creates a minimal client instance for the backend at `base_url`.
    pub fn new(base_url: String) -> Self {
        Civic {
            base_url: base_url.trim_end_matches('/').to_owned(),
            token: None,
            proxy: None,
            timeout: None,
        }
    }

    pub fn token(mut self, token: &str) -> Self {
        self.token = Some(token.to_owned());
        self
    }

    pub fn proxy(mut self, address: &str) -> Self {
        self.proxy = Some(address.to_owned());
        self
    }

    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    /// Creates a client instance from a URL.
    ///
    /// URL should be in the following format:
    /// http(s)://{host}[:{port}][/{prefix}]/?token={token}&timeout={seconds}
    pub fn try_new_with_url(url: String) -> Result<Self, CivicError> {
        let mut url = Url::parse(&url)
            .map_err(|e| CivicError::ConfigurationError(e.into()))?;

        if url.scheme() != "http" && url.scheme() != "https" {
            return Err(CivicError::ConfigurationError(anyhow!("Invalid proto {}, expected 'http' or 'https'", url.scheme())));
        }

        if url.host_str().map_or(true, str::is_empty) {
            return Err(CivicError::ConfigurationError(anyhow!("Host is required, but missing from URL")));
        }

        let query: HashMap<_, _> = url.query_pairs().into_owned().collect();
        let token = query.get("token").filter(|t| !t.is_empty()).map(|x| x.to_owned());
        let timeout = query
            .get("timeout")
            .map(|secs| secs.parse::<u64>()
                .map(Duration::from_secs)
                .map_err(|e| CivicError::ConfigurationError(anyhow!("Invalid timeout {secs}: {e}"))))
            .transpose()?;

        url.set_query(None);
        url.set_fragment(None);

        Ok(Civic {
            token,
            timeout,
            ..Civic::new(url.to_string())
        })
    }

    /// Creates a client instance from `CIVIC_API_URL` and, if set, `CIVIC_PROXY`.
    pub fn from_env() -> Result<Self, CivicError> {
        let url = std::env::var(API_URL_ENV)
            .map_err(|e| CivicError::ConfigurationError(anyhow!("{API_URL_ENV} is required: {e}")))?;
        let client = Civic::try_new_with_url(url)?;
        match std::env::var(PROXY_ENV) {
            Ok(proxy) if !proxy.is_empty() => Ok(client.proxy(&proxy)),
            _ => Ok(client),
        }
    }

    /// Creates a session against the backend. No request is made.
    pub fn connect(&self) -> Result<Session, CivicError> {
        let headers = Civic::get_headers(self.token.as_deref())
            .map_err(CivicError::ConfigurationError)?;

        let mut builder = reqwest::Client::builder()
            .gzip(true)
            .deflate(true)
            .cookie_store(true)
            .default_headers(headers);

        if let Some(proxy) = &self.proxy {
            let proxy = reqwest::Proxy::all(proxy)
                .map_err(|e| CivicError::ConfigurationError(e.into()))?;
            builder = builder.proxy(proxy);
        }

        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let client = builder
            .build()
            .map_err(|e| CivicError::ConfigurationError(e.into()))?;

        Ok(Session::new(client, &self.base_url))
    }

    /// Logs in and returns a session authenticated as the returned user.
    ///
    /// When the backend hands out an access token the returned session is a
    /// new client that sends it as a bearer token, and cookies set by the login
    /// response are not carried over. Without a token the login session itself
    /// is returned, along with the cookies it received.
    pub async fn login(&self, credentials: &Credentials) -> Result<(Session, User), CivicError> {
        let session = self.connect()?;
        let login = AuthService::new(&session).login(credentials).await?;

        match login.access_token {
            Some(token) => {
                let authenticated = self.clone().token(&token).connect()?;
                Ok((authenticated, login.user))
            }
            None => Ok((session, login.user)),
        }
    }

    fn get_headers(token: Option<&str>) -> Result<HeaderMap, anyhow::Error> {
        let mut headers = HeaderMap::with_capacity(3);
        headers.append(ACCEPT, "application/json".parse()?);
        if let Some(token) = token {
            headers.append(AUTHORIZATION, format!("Bearer {token}").parse()?);
        }
        headers.append(USER_AGENT, concat!(env!("CARGO_PKG_NAME"), '/', env!("CARGO_PKG_VERSION")).parse()?);
        Ok(headers)
    }

}

#[cfg(test)]
mod tests {

    use super::*;

    #[test]
    fn test_url_builder() -> Result<(), anyhow::Error> {
        Civic::try_new_with_url("ftp://api.example.com".to_owned())
            .expect_err("Should have failed due to invalid scheme");

        Civic::try_new_with_url("not a url".to_owned())
            .expect_err("Should have failed due to unparseable url");

        Civic::try_new_with_url("https://api.example.com/?timeout=soon".to_owned())
            .expect_err("Should have failed due to invalid timeout");

        let client = Civic::try_new_with_url(
            "https://api.example.com:8443/civic/?token=abc%2B123&timeout=30".to_owned()
        ).expect("Client should have been created");

        assert_eq!(client.base_url, "https://api.example.com:8443/civic");
        assert_eq!(client.token, Some("abc+123".to_owned()));
        assert_eq!(client.timeout, Some(Duration::from_secs(30)));
        assert_eq!(client.proxy, None);

        Ok(())
    }

    #[test]
    fn test_url_builder_without_options() -> Result<(), anyhow::Error> {
        let client = Civic::try_new_with_url("http://localhost:8080".to_owned())?;
        assert_eq!(client.base_url, "http://localhost:8080");
        assert_eq!(client.token, None);
        assert_eq!(client.timeout, None);
        Ok(())
    }

    #[test]
    fn test_headers() -> Result<(), anyhow::Error> {
        let headers = Civic::get_headers(Some("abc"))?;
        assert_eq!(headers.get(AUTHORIZATION).map(|v| v.to_str()).transpose()?, Some("Bearer abc"));
        assert_eq!(headers.get(ACCEPT).map(|v| v.to_str()).transpose()?, Some("application/json"));

        let headers = Civic::get_headers(None)?;
        assert!(headers.get(AUTHORIZATION).is_none());
        Ok(())
    }

    #[test]
    fn test_connect_without_network() -> Result<(), anyhow::Error> {
        let session = Civic::new("http://127.0.0.1:9/".to_owned())
            .timeout(Duration::from_secs(1))
            .connect()?;
        assert_eq!(session.host(), "http://127.0.0.1:9");

        Civic::new("http://127.0.0.1:9".to_owned())
            .proxy("::not a proxy::")
            .connect()
            .expect_err("Should have failed due to invalid proxy");
        Ok(())
    }

}
