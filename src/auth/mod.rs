//! Authentication module
//!
//! The API authenticates with two cookies, `ACCESS_TOKEN` and
//! `REFRESH_TOKEN`. This module holds the [`Credentials`] pair and the
//! [`CredentialProvider`] seam through which callers supply it: static
//! values, environment variables, or an external browser login driver.

mod provider;
mod types;

pub use provider::{
    CredentialProvider, EnvCredentials, LoginCredentials, LoginDriver, LoginRequest,
};
pub use types::{
    Credentials, LoginCookie, ACCESS_TOKEN_COOKIE, ACCESS_TOKEN_ENV, LOGIN_URL, PASSWORD_ENV,
    POST_LOGIN_URL, REFRESH_TOKEN_COOKIE, REFRESH_TOKEN_ENV, USERNAME_ENV,
};
