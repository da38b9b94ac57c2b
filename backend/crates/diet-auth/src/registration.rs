use diet_core::{Identity, SessionToken};

/// Outcome of a successful identity creation
#[derive(Debug, Clone)]
pub struct Registration {
    pub identity: Identity,
    /// Set only when the caller arrived without a token and one was minted
    pub issued_token: Option<SessionToken>,
}
