use crate::{CoreError, FieldKind, FieldRule, Result as CoreErrorResult, parse_instant};

use serde_json::Value;

/// Kind and constraints for a single named field
#[derive(Debug, Clone, Copy)]
pub struct FieldContract {
    pub name: &'static str,
    pub kind: FieldKind,
    pub rules: &'static [FieldRule],
}

impl FieldContract {
    pub const fn new(name: &'static str, kind: FieldKind, rules: &'static [FieldRule]) -> Self {
        Self { name, kind, rules }
    }

    #[track_caller]
    pub fn check(&self, value: Option<&Value>) -> CoreErrorResult<()> {
        let value = match value {
            None | Some(Value::Null) if self.kind.is_optional() => return Ok(()),
            None | Some(Value::Null) => {
                return Err(CoreError::field(self.name, format!("{} is required", self.name)));
            }
            Some(value) => value,
        };

        match (self.kind, value) {
            (FieldKind::Boolean, Value::Bool(_)) => Ok(()),
            (FieldKind::Instant, Value::String(s)) if parse_instant(s).is_some() => {
                self.check_rules(s)
            }
            (FieldKind::Text | FieldKind::OptionalText, Value::String(s)) => self.check_rules(s),
            _ => Err(CoreError::field(
                self.name,
                format!("{} must be {}", self.name, self.kind.describe()),
            )),
        }
    }

    #[track_caller]
    fn check_rules(&self, value: &str) -> CoreErrorResult<()> {
        match self.rules.iter().find_map(|rule| rule.violation(value)) {
            Some(message) => Err(CoreError::field(
                self.name,
                format!("{} {}", self.name, message),
            )),
            None => Ok(()),
        }
    }
}
