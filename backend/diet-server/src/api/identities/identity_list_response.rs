use crate::IdentityDto;

use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct IdentityListResponse {
    pub users: Vec<IdentityDto>,
}
