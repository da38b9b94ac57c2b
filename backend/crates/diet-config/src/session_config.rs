use crate::{
    ConfigError, ConfigErrorResult, DEFAULT_COOKIE_NAME, DEFAULT_SESSION_MAX_AGE_DAYS,
    MAX_SESSION_MAX_AGE_DAYS, MIN_SESSION_MAX_AGE_DAYS,
};

use serde::Deserialize;

const SECONDS_PER_DAY: i64 = 60 * 60 * 24;

/// Session cookie settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub cookie_name: String,
    pub max_age_days: u32,
    /// Add the `Secure` attribute (HTTPS deployments)
    pub secure: bool,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            cookie_name: String::from(DEFAULT_COOKIE_NAME),
            max_age_days: DEFAULT_SESSION_MAX_AGE_DAYS,
            secure: false,
        }
    }
}

impl SessionConfig {
    pub fn max_age_secs(&self) -> i64 {
        i64::from(self.max_age_days) * SECONDS_PER_DAY
    }

    pub fn validate(&self) -> ConfigErrorResult<()> {
        if self.cookie_name.is_empty() || !self.cookie_name.chars().all(is_cookie_token_char) {
            return Err(ConfigError::session(format!(
                "session.cookie_name must be a non-empty cookie token, got '{}'",
                self.cookie_name
            )));
        }

        if !(MIN_SESSION_MAX_AGE_DAYS..=MAX_SESSION_MAX_AGE_DAYS).contains(&self.max_age_days) {
            return Err(ConfigError::session(format!(
                "session.max_age_days must be {}-{}, got {}",
                MIN_SESSION_MAX_AGE_DAYS, MAX_SESSION_MAX_AGE_DAYS, self.max_age_days
            )));
        }

        Ok(())
    }
}

// RFC 6265 token: visible ASCII minus separators
fn is_cookie_token_char(c: char) -> bool {
    c.is_ascii_graphic() && !"()<>@,;:\\\"/[]?={}".contains(c)
}
