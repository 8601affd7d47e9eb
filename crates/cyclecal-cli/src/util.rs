use anyhow::{anyhow, Result};
use cyclecal_core::error::CoreError;
use uuid::Uuid;

/// Picks the user from `--user`, falling back to the configured default.
pub fn resolve_user(arg: Option<&str>, default_user: Option<Uuid>) -> Result<Uuid> {
    match arg {
        Some(raw) => Uuid::parse_str(raw.trim()).map_err(|_| {
            anyhow!(CoreError::InvalidInput(format!(
                "'{}' is not a valid user ID",
                raw
            )))
        }),
        None => default_user.ok_or_else(|| {
            anyhow!(CoreError::InvalidInput(
                "No user given. Pass --user or set default_user.".to_string()
            ))
        }),
    }
}
