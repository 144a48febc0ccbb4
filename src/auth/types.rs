//! Credential types and the names they travel under

use crate::error::{Error, Result};
use crate::types::OptionStringExt;

/// Cookie carrying the access token
pub const ACCESS_TOKEN_COOKIE: &str = "ACCESS_TOKEN";
/// Cookie carrying the refresh token
pub const REFRESH_TOKEN_COOKIE: &str = "REFRESH_TOKEN";

/// Environment variable holding the access token
pub const ACCESS_TOKEN_ENV: &str = "CODEMENTOR_ACCESS_TOKEN";
/// Environment variable holding the refresh token
pub const REFRESH_TOKEN_ENV: &str = "CODEMENTOR_REFRESH_TOKEN";
/// Environment variable holding the login username
pub const USERNAME_ENV: &str = "CODEMENTOR_USERNAME";
/// Environment variable holding the login password
pub const PASSWORD_ENV: &str = "CODEMENTOR_PASSWORD";

/// Third-party login page the browser flow starts from
pub const LOGIN_URL: &str = "https://arc.dev/login?service=codementor";
/// Page the browser lands on once the login has gone through
pub const POST_LOGIN_URL: &str = "https://www.codementor.io/m/dashboard";

/// The cookie pair that authenticates every request.
///
/// Immutable for the lifetime of a client; there is no renewal.
#[derive(Clone, PartialEq, Eq)]
pub struct Credentials {
    access_token: String,
    refresh_token: String,
}

impl Credentials {
    /// Create credentials from explicit token values
    pub fn new(access_token: impl Into<String>, refresh_token: impl Into<String>) -> Self {
        Self {
            access_token: access_token.into(),
            refresh_token: refresh_token.into(),
        }
    }

    /// Read `CODEMENTOR_ACCESS_TOKEN` / `CODEMENTOR_REFRESH_TOKEN`
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read the token variables through `lookup`; unset or empty values
    /// fail with `MissingCredentials`
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let access = lookup(ACCESS_TOKEN_ENV).none_if_empty();
        let refresh = lookup(REFRESH_TOKEN_ENV).none_if_empty();

        match (access, refresh) {
            (Some(access), Some(refresh)) => Ok(Self::new(access, refresh)),
            (access, refresh) => {
                let missing: Vec<&str> = [
                    access.is_none().then_some(ACCESS_TOKEN_ENV),
                    refresh.is_none().then_some(REFRESH_TOKEN_ENV),
                ]
                .into_iter()
                .flatten()
                .collect();
                Err(Error::missing_credentials(missing.join(" and ")))
            }
        }
    }

    /// Access token value
    pub fn access_token(&self) -> &str {
        &self.access_token
    }

    /// Refresh token value
    pub fn refresh_token(&self) -> &str {
        &self.refresh_token
    }

    /// Value of the `Cookie` header carrying both tokens
    pub fn cookie_header(&self) -> String {
        format!(
            "{ACCESS_TOKEN_COOKIE}={}; {REFRESH_TOKEN_COOKIE}={}",
            self.access_token, self.refresh_token
        )
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("access_token", &"<redacted>")
            .field("refresh_token", &"<redacted>")
            .finish()
    }
}

/// A cookie read out of the browser after login
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginCookie {
    /// Cookie name
    pub name: String,
    /// Cookie value
    pub value: String,
}

impl LoginCookie {
    /// Create a cookie
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
        }
    }
}
