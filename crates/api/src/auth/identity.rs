use axum::extract::FromRequestParts;
use axum::http::request::Parts;
use axum::http::HeaderMap;
use familylegacy_domain::{AuthConfig, PlatformError, Result};
use tracing::debug;

use crate::context::SharedContext;
use crate::error::ApiError;

/// Port resolving the authenticated user id for a request.
pub trait IdentityResolver: Send + Sync {
    /// Returns the caller id or [`PlatformError::Unauthenticated`].
    fn resolve(&self, headers: &HeaderMap) -> Result<String>;
}

/// Trusts a header set by the fronting auth proxy.
#[derive(Debug, Clone)]
pub struct HeaderIdentityResolver {
    header: String,
    dev_user_id: Option<String>,
}

impl HeaderIdentityResolver {
    pub fn new(header: impl Into<String>, dev_user_id: Option<String>) -> Self {
        let dev_user_id = dev_user_id.filter(|id| !id.trim().is_empty());
        Self { header: header.into().to_ascii_lowercase(), dev_user_id }
    }

    pub fn from_config(config: &AuthConfig) -> Self {
        Self::new(config.user_header.clone(), config.dev_user_id.clone())
    }
}

impl IdentityResolver for HeaderIdentityResolver {
    fn resolve(&self, headers: &HeaderMap) -> Result<String> {
        let from_header = headers
            .get(self.header.as_str())
            .and_then(|value| value.to_str().ok())
            .map(str::trim)
            .filter(|value| !value.is_empty());

        match from_header {
            Some(user_id) => Ok(user_id.to_string()),
            None => match &self.dev_user_id {
                Some(dev) => {
                    debug!(header = %self.header, "identity header absent, using dev user");
                    Ok(dev.clone())
                }
                None => Err(PlatformError::Unauthenticated),
            },
        }
    }
}

/// Extractor yielding the authenticated caller's user id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Caller(pub String);

impl FromRequestParts<SharedContext> for Caller {
    type Rejection = ApiError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &SharedContext,
    ) -> std::result::Result<Self, Self::Rejection> {
        state.identity.resolve(&parts.headers).map(Caller).map_err(ApiError::from)
    }
}
