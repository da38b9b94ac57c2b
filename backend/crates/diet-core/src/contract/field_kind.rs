/// JSON shape a field must have
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    /// Required string
    Text,
    /// String, null, or absent
    OptionalText,
    /// Required JSON boolean
    Boolean,
    /// Required string holding an RFC 3339 date-time or a `YYYY-MM-DD` date
    Instant,
}

impl FieldKind {
    pub fn is_optional(self) -> bool {
        matches!(self, FieldKind::OptionalText)
    }

    pub fn describe(self) -> &'static str {
        match self {
            FieldKind::Text | FieldKind::OptionalText => "a string",
            FieldKind::Boolean => "a boolean",
            FieldKind::Instant => "a date (YYYY-MM-DD) or RFC 3339 date-time",
        }
    }
}
