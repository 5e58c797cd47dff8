// src/schema/types.rs

/// Whether a blank cell is acceptable for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Presence {
    Required,
    Optional,
}

/// How the raw cell text is interpreted before the format checks run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    /// Base-10 integer with an inclusive lower bound.
    Integer { min: i64 },
    Boolean,
}

/// A single format constraint applied to a text value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    /// Character count bounds; `max: None` means unbounded.
    Length { min: usize, max: Option<usize> },
    Ipv4Cidr,
    Ipv4AddressPools,
    HttpsUrl,
    TimeOfDay,
    CalendarDate,
    /// Closed set of values; `label` names the value in failure messages.
    OneOf {
        label: &'static str,
        allowed: &'static [&'static str],
    },
}

/// A single column definition of the registry.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub name: &'static str,
    pub presence: Presence,
    pub kind: FieldKind,
    /// Applied in order; every failing check is reported.
    pub checks: &'static [Check],
}

impl FieldSpec {
    pub const fn required_text(name: &'static str, checks: &'static [Check]) -> Self {
        Self {
            name,
            presence: Presence::Required,
            kind: FieldKind::Text,
            checks,
        }
    }

    pub const fn optional_text(name: &'static str, checks: &'static [Check]) -> Self {
        Self {
            name,
            presence: Presence::Optional,
            kind: FieldKind::Text,
            checks,
        }
    }

    pub fn is_optional(&self) -> bool {
        self.presence == Presence::Optional
    }
}
