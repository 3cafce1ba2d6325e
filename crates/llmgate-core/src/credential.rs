//! Bearer credential resolution for the completion route.

use crate::error::{GatewayError, Upstream};

const BEARER_PREFIX: &str = "Bearer ";

/// Resolve the `Authorization` value forwarded to the completion API.
///
/// A non-empty inbound header wins over the configured key. Either one is
/// given a `Bearer ` prefix unless it already carries one (compared
/// case-insensitively). With neither available the request fails before
/// any upstream call.
pub fn resolve_authorization(
    inbound: Option<&str>,
    configured_key: Option<&str>,
) -> Result<String, GatewayError> {
    let credential = inbound
        .filter(|value| !value.is_empty())
        .or_else(|| configured_key.filter(|key| !key.is_empty()))
        .ok_or(GatewayError::MissingCredential(Upstream::OpenAi))?;

    if has_bearer_prefix(credential) {
        Ok(credential.to_string())
    } else {
        Ok(format!("{BEARER_PREFIX}{credential}"))
    }
}

fn has_bearer_prefix(value: &str) -> bool {
    value
        .get(..BEARER_PREFIX.len())
        .is_some_and(|prefix| prefix.eq_ignore_ascii_case(BEARER_PREFIX))
}
