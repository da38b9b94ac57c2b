use crate::{CoreError, FieldContract, Result as CoreErrorResult};

use serde_json::Value;

/// Ordered set of field contracts for one request body.
///
/// Fields not named by the contract are ignored. Checking stops at the first
/// violation, in declaration order.
#[derive(Debug, Clone, Copy)]
pub struct InputContract {
    pub fields: &'static [FieldContract],
}

impl InputContract {
    pub const fn new(fields: &'static [FieldContract]) -> Self {
        Self { fields }
    }

    #[track_caller]
    pub fn check(&self, body: &Value) -> CoreErrorResult<()> {
        let object = body
            .as_object()
            .ok_or_else(|| CoreError::validation("request body must be a JSON object"))?;

        for field in self.fields {
            field.check(object.get(field.name))?;
        }

        Ok(())
    }
}
