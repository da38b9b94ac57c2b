use diet_core::Identity;

use serde::Serialize;

/// Public view of an identity. The session token is never part of it.
#[derive(Debug, Serialize)]
pub struct IdentityDto {
    pub id: String,
    pub name: String,
    pub email: String,
    #[serde(rename = "imgUrl")]
    pub img_url: Option<String>,
    pub created_at: i64,
}

impl From<Identity> for IdentityDto {
    fn from(identity: Identity) -> Self {
        Self {
            id: identity.id.to_string(),
            name: identity.name,
            email: identity.email,
            img_url: identity.avatar_url,
            created_at: identity.created_at.timestamp(),
        }
    }
}
