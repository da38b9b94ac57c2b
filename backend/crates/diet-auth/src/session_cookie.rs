use diet_core::{SESSION_MAX_AGE_SECS, SessionToken};

/// Wire policy for the session cookie: its name and the attributes sent on issue.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionCookie {
    name: String,
    max_age_secs: i64,
    secure: bool,
}

impl SessionCookie {
    pub fn new(name: impl Into<String>, max_age_secs: i64, secure: bool) -> Self {
        Self {
            name: name.into(),
            max_age_secs,
            secure,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn max_age_secs(&self) -> i64 {
        self.max_age_secs
    }

    /// Pull the session token out of a `Cookie` header value.
    ///
    /// Empty values are treated as absent.
    pub fn parse(&self, header: &str) -> Option<SessionToken> {
        header
            .split(';')
            .filter_map(|pair| pair.trim().split_once('='))
            .find(|(name, _)| name.trim() == self.name)
            .map(|(_, value)| value.trim().trim_matches('"'))
            .filter(|value| !value.is_empty())
            .map(SessionToken::from)
    }

    /// `Set-Cookie` value for a freshly minted token
    pub fn issue(&self, token: &SessionToken) -> String {
        let mut cookie = format!(
            "{}={}; Path=/; Max-Age={}; HttpOnly; SameSite=Lax",
            self.name,
            token.as_str(),
            self.max_age_secs
        );
        if self.secure {
            cookie.push_str("; Secure");
        }
        cookie
    }
}

impl Default for SessionCookie {
    fn default() -> Self {
        Self::new("sessionId", SESSION_MAX_AGE_SECS, false)
    }
}
