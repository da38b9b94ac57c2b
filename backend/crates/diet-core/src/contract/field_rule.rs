/// Constraint applied to a string-valued field once its kind has been checked
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldRule {
    /// Must contain something other than whitespace
    NonBlank,
    /// At most this many characters
    MaxLength(usize),
    /// `local@domain.tld`, no whitespace
    EmailShaped,
}

impl FieldRule {
    /// Returns the violation message, if any
    pub fn violation(self, value: &str) -> Option<String> {
        match self {
            FieldRule::NonBlank if value.trim().is_empty() => Some("must not be blank".to_string()),
            FieldRule::MaxLength(max) if value.chars().count() > max => {
                Some(format!("must not exceed {} characters", max))
            }
            FieldRule::EmailShaped if !is_email_shaped(value) => {
                Some("must be an e-mail address".to_string())
            }
            _ => None,
        }
    }
}

fn is_email_shaped(value: &str) -> bool {
    if value.chars().any(char::is_whitespace) {
        return false;
    }

    let Some((local, domain)) = value.split_once('@') else {
        return false;
    };

    !local.is_empty()
        && !domain.contains('@')
        && domain.contains('.')
        && !domain.starts_with('.')
        && !domain.ends_with('.')
}
