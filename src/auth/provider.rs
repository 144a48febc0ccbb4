//! Credential providers
//!
//! A provider yields the `(access_token, refresh_token)` pair a client is
//! built from. Browser automation is not part of this crate: the login
//! flow is driven by an external [`LoginDriver`], and [`LoginCredentials`]
//! only resolves the login secrets and picks the token cookies out of what
//! the driver returns.

use super::types::{
    Credentials, LoginCookie, ACCESS_TOKEN_COOKIE, LOGIN_URL, PASSWORD_ENV, POST_LOGIN_URL,
    REFRESH_TOKEN_COOKIE, USERNAME_ENV,
};
use crate::error::{Error, Result};
use crate::types::OptionStringExt;
use async_trait::async_trait;
use std::time::Duration;
use tracing::{debug, info};

/// Source of API credentials
#[async_trait]
pub trait CredentialProvider: Send + Sync {
    /// Produce the credential pair
    async fn credentials(&self) -> Result<Credentials>;
}

#[async_trait]
impl CredentialProvider for Credentials {
    async fn credentials(&self) -> Result<Credentials> {
        Ok(self.clone())
    }
}

/// Reads `CODEMENTOR_ACCESS_TOKEN` / `CODEMENTOR_REFRESH_TOKEN` on demand
#[derive(Debug, Clone, Copy, Default)]
pub struct EnvCredentials;

#[async_trait]
impl CredentialProvider for EnvCredentials {
    async fn credentials(&self) -> Result<Credentials> {
        Credentials::from_env()
    }
}

/// Everything a login driver needs to run the browser flow
#[derive(Clone)]
pub struct LoginRequest {
    /// Page the flow starts on
    pub login_url: String,
    /// Page reached once logged in; the driver waits for it
    pub post_login_url: String,
    /// Login username (email)
    pub username: String,
    /// Login password
    pub password: String,
    /// How long to wait for the post-login redirect
    pub timeout: Duration,
}

impl std::fmt::Debug for LoginRequest {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginRequest")
            .field("login_url", &self.login_url)
            .field("post_login_url", &self.post_login_url)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

/// External capability that performs the interactive login and returns the
/// cookies present once the post-login page is reached
#[async_trait]
pub trait LoginDriver: Send + Sync {
    /// Run the login flow
    async fn login(&self, request: &LoginRequest) -> anyhow::Result<Vec<LoginCookie>>;
}

/// Obtains credentials by logging in through a [`LoginDriver`]
pub struct LoginCredentials<D> {
    driver: D,
    username: Option<String>,
    password: Option<String>,
    timeout: Duration,
}

impl<D: LoginDriver> LoginCredentials<D> {
    /// Create a provider; username and password fall back to the environment
    pub fn new(driver: D) -> Self {
        Self {
            driver,
            username: None,
            password: None,
            timeout: Duration::from_secs(120),
        }
    }

    /// Use an explicit username
    #[must_use]
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Use an explicit password
    #[must_use]
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    /// Set how long the driver may wait for the post-login page
    #[must_use]
    pub fn timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    /// The wrapped login driver
    pub fn driver(&self) -> &D {
        &self.driver
    }

    /// Build the login request, filling gaps from `lookup`.
    ///
    /// Explicit values win over looked-up ones; empty strings count as
    /// missing.
    pub fn login_request<F>(&self, lookup: F) -> Result<LoginRequest>
    where
        F: Fn(&str) -> Option<String>,
    {
        let username = self
            .username
            .clone()
            .none_if_empty()
            .or_else(|| lookup(USERNAME_ENV).none_if_empty());
        let password = self
            .password
            .clone()
            .none_if_empty()
            .or_else(|| lookup(PASSWORD_ENV).none_if_empty());

        match (username, password) {
            (Some(username), Some(password)) => Ok(LoginRequest {
                login_url: LOGIN_URL.to_string(),
                post_login_url: POST_LOGIN_URL.to_string(),
                username,
                password,
                timeout: self.timeout,
            }),
            (username, password) => {
                let missing: Vec<&str> = [
                    username.is_none().then_some("username"),
                    password.is_none().then_some("password"),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(Error::missing_credentials(missing.join(" and ")))
            }
        }
    }

    /// Run the driver and extract the token cookies
    pub async fn login_with<F>(&self, lookup: F) -> Result<Credentials>
    where
        F: Fn(&str) -> Option<String>,
    {
        let request = self.login_request(lookup)?;
        debug!(url = %request.login_url, "Starting browser login");

        let cookies = self.driver.login(&request).await?;
        let access = cookie_value(&cookies, ACCESS_TOKEN_COOKIE)?;
        let refresh = cookie_value(&cookies, REFRESH_TOKEN_COOKIE)?;

        info!("Login succeeded, obtained API credentials");
        Ok(Credentials::new(access, refresh))
    }
}

#[async_trait]
impl<D: LoginDriver> CredentialProvider for LoginCredentials<D> {
    async fn credentials(&self) -> Result<Credentials> {
        self.login_with(|key| std::env::var(key).ok()).await
    }
}

impl<D> std::fmt::Debug for LoginCredentials<D> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginCredentials")
            .field("username", &self.username)
            .field("has_password", &self.password.is_some())
            .field("timeout", &self.timeout)
            .finish_non_exhaustive()
    }
}

fn cookie_value(cookies: &[LoginCookie], name: &str) -> Result<String> {
    cookies
        .iter()
        .find(|c| c.name == name)
        .map(|c| c.value.clone())
        .ok_or_else(|| Error::auth(format!("login finished without a {name} cookie")))
}
