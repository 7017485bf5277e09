/******************************************************************************
   Author: Joaquín Béjar García
   Email: jb@taunais.com
   Date: 18/10/26
******************************************************************************/
use chrono::{DateTime, Utc};
use std::env;
use std::fmt::Debug;
use std::str::FromStr;
use tracing::{error, warn};

/// Reads `env_var` and parses it, falling back to `default` when the variable
/// is missing or unparsable
pub fn get_env_or_default<T: FromStr>(env_var: &str, default: T) -> T
where
    <T as FromStr>::Err: Debug,
{
    match env::var(env_var) {
        Ok(val) => val.parse::<T>().unwrap_or_else(|_| {
            error!("Failed to parse {}: {}, using default", env_var, val);
            default
        }),
        Err(_) => default,
    }
}

/// Reads `env_var` and parses it. Missing, empty or unparsable values yield `None`.
pub fn get_env_or_none<T: FromStr>(env_var: &str) -> Option<T>
where
    <T as FromStr>::Err: Debug,
{
    let val = env::var(env_var).ok()?;
    if val.trim().is_empty() {
        return None;
    }
    match val.parse::<T>() {
        Ok(parsed) => Some(parsed),
        Err(e) => {
            warn!("Ignoring {}: {:?}", env_var, e);
            None
        }
    }
}

/// Reads a timestamp expressed in epoch milliseconds from `env_var`
///
/// # Returns
/// The timestamp, or `None` if the variable is missing or out of range
pub fn get_env_timestamp_millis(env_var: &str) -> Option<DateTime<Utc>> {
    let millis: i64 = get_env_or_none(env_var)?;
    let ts = DateTime::from_timestamp_millis(millis);
    if ts.is_none() {
        warn!("{} is out of range: {}", env_var, millis);
    }
    ts
}
