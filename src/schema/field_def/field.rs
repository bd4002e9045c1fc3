//! Field descriptors for record schemas
//!
//! A [`FieldDescriptor`] describes one column of a Synthea table: its
//! canonical name, the header spelling used in the CSV export, its semantic
//! type and whether a value is required.

use std::fmt;

use itertools::Itertools;

/// Semantic type of a field
///
/// Every column of every record type maps to one of these; coercion of raw
/// values is driven entirely by this tag.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldType {
    /// 128-bit identifier in canonical dashed-hex form
    Identifier,
    /// Calendar date
    Date,
    /// Date and time, normalized to UTC
    Timestamp,
    /// Arbitrary-precision base-10 number
    Decimal,
    /// Signed whole number
    Integer,
    /// Free text, trimmed
    Text,
    /// One of a closed set of textual tokens
    Token(&'static [&'static str]),
    /// One of a closed set of integer codes
    IntegerToken(&'static [i64]),
    /// The first member type that accepts the value, in declaration order
    Union(&'static [FieldType]),
}

impl FieldType {
    /// Legal values of an enumerated type, rendered as text
    #[must_use]
    pub fn allowed_values(&self) -> Option<Vec<String>> {
        match self {
            Self::Token(tokens) => Some(tokens.iter().map(ToString::to_string).collect()),
            Self::IntegerToken(codes) => Some(codes.iter().map(ToString::to_string).collect()),
            _ => None,
        }
    }

    /// Whether this type restricts values to a closed set
    #[must_use]
    pub fn is_enumerated(&self) -> bool {
        matches!(self, Self::Token(_) | Self::IntegerToken(_))
    }
}

impl fmt::Display for FieldType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Identifier => write!(f, "identifier"),
            Self::Date => write!(f, "date (YYYY-MM-DD)"),
            Self::Timestamp => write!(f, "timestamp"),
            Self::Decimal => write!(f, "decimal"),
            Self::Integer => write!(f, "integer"),
            Self::Text => write!(f, "text"),
            Self::Token(tokens) => write!(f, "one of [{}]", tokens.iter().join(", ")),
            Self::IntegerToken(codes) => write!(f, "one of [{}]", codes.iter().join(", ")),
            Self::Union(members) => write!(f, "{}", members.iter().join(" or ")),
        }
    }
}

/// Description of one column within a record schema
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Canonical lower-case name, used for programmatic construction and dumps
    pub name: &'static str,
    /// Header spelling used by the CSV export, if the field has one
    pub alias: Option<&'static str>,
    /// Semantic type of the field
    pub field_type: FieldType,
    /// Whether the field must be present after normalization
    pub required: bool,
    /// Description of the field
    pub description: &'static str,
}

impl FieldDescriptor {
    /// Create a new field descriptor without alias or description
    #[must_use]
    pub const fn new(name: &'static str, field_type: FieldType, required: bool) -> Self {
        Self {
            name,
            alias: None,
            field_type,
            required,
            description: "",
        }
    }

    /// Add the source-file header spelling
    #[must_use]
    pub const fn with_alias(mut self, alias: &'static str) -> Self {
        self.alias = Some(alias);
        self
    }

    /// Add a description
    #[must_use]
    pub const fn with_description(mut self, description: &'static str) -> Self {
        self.description = description;
        self
    }

    /// Check if the given key is this field's name or alias
    #[must_use]
    pub fn matches_name(&self, name: &str) -> bool {
        self.name == name || self.alias == Some(name)
    }

    /// All keys this field may be supplied under
    pub fn keys(&self) -> impl Iterator<Item = &'static str> {
        std::iter::once(self.name).chain(self.alias)
    }
}
