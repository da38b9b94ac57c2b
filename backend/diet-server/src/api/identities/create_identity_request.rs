use crate::Contracted;

use diet_core::{FieldContract, FieldKind, FieldRule, IdentityDraft, InputContract};

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateIdentityRequest {
    pub name: String,
    pub email: String,
    #[serde(rename = "imgUrl", default)]
    pub img_url: Option<String>,
}

impl Contracted for CreateIdentityRequest {
    const CONTRACT: InputContract = InputContract::new(&[
        FieldContract::new(
            "name",
            FieldKind::Text,
            &[FieldRule::NonBlank, FieldRule::MaxLength(120)],
        ),
        FieldContract::new(
            "email",
            FieldKind::Text,
            &[
                FieldRule::NonBlank,
                FieldRule::EmailShaped,
                FieldRule::MaxLength(254),
            ],
        ),
        FieldContract::new("imgUrl", FieldKind::OptionalText, &[FieldRule::MaxLength(2048)]),
    ]);
}

impl From<CreateIdentityRequest> for IdentityDraft {
    fn from(req: CreateIdentityRequest) -> Self {
        IdentityDraft::new(req.name, req.email, req.img_url)
    }
}
