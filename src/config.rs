//! Configuration management via environment variables
//!
//! The hub client reads its credential from the `HF_TOKEN` environment
//! variable. A token passed on the command line is exported there so the
//! rest of the process (and anything it spawns) sees the same credential.

/// Environment variable the hub client reads its access token from.
pub const TOKEN_ENV: &str = "HF_TOKEN";

/// Environment variable controlling the log level (default: warn).
pub const LOG_LEVEL_ENV: &str = "HF_FETCH_LOG_LEVEL";

/// Export a credential for the hub client side-channel.
///
/// Overwrites any pre-existing `HF_TOKEN` value; callers only invoke this
/// when a token was supplied explicitly.
pub fn set_credential(token: &str) {
    std::env::set_var(TOKEN_ENV, token);
}

/// Resolve the effective access token.
///
/// An explicitly supplied token wins; otherwise a pre-existing `HF_TOKEN`
/// value is used. Returns `None` when neither is set, in which case the hub
/// client falls back to its own credential store.
pub fn resolve_token(explicit: Option<&str>) -> Option<String> {
    if let Some(token) = explicit {
        return Some(token.to_string());
    }
    std::env::var(TOKEN_ENV).ok().filter(|v| !v.is_empty())
}
