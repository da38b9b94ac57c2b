/// Already-validated payload for minting a new identity
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdentityDraft {
    pub name: String,
    pub email: String,
    pub avatar_url: Option<String>,
}

impl IdentityDraft {
    pub fn new(name: impl Into<String>, email: impl Into<String>, avatar_url: Option<String>) -> Self {
        Self {
            name: name.into(),
            email: email.into(),
            avatar_url,
        }
    }
}
