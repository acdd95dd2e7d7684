//! Caller identity extraction.
//!
//! The fronting proxy asserts who the caller is through `X-User-Email`. The
//! header is trusted as-is; a missing or blank value means a guest.

use std::convert::Infallible;

use axum::{async_trait, extract::FromRequestParts, http::request::Parts};

use cropdoc_contracts::identity::Identity;

/// Header carrying the caller's asserted email.
pub const USER_EMAIL_HEADER: &str = "x-user-email";

/// The identity of the current request's caller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub Identity);

#[async_trait]
impl<S> FromRequestParts<S> for Caller
where
    S: Send + Sync,
{
    type Rejection = Infallible;

    async fn from_request_parts(parts: &mut Parts, _state: &S) -> Result<Self, Self::Rejection> {
        let email = parts
            .headers
            .get(USER_EMAIL_HEADER)
            .and_then(|value| value.to_str().ok());
        Ok(Caller(Identity::from_email(email)))
    }
}
