//! Storage-assigned positive integer identifiers.
//!
//! Both aggregates use `SERIAL` keys, so identifiers are `i32` values strictly
//! greater than zero. The macro keeps the two newtypes from drifting apart.

/// Reasons a raw identifier was rejected.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentifierError {
    /// The input was not an integer at all.
    #[error("identifier must be an integer")]
    NotAnInteger,
    /// The input was zero or negative.
    #[error("identifier must be positive, got {value}")]
    NotPositive { value: i64 },
}

pub(crate) fn parse_positive(raw: &str) -> Result<i32, IdentifierError> {
    let value: i64 = raw.parse().map_err(|_| IdentifierError::NotAnInteger)?;
    positive_from_i64(value)
}

pub(crate) fn positive_from_i64(value: i64) -> Result<i32, IdentifierError> {
    if value <= 0 {
        return Err(IdentifierError::NotPositive { value });
    }
    i32::try_from(value).map_err(|_| IdentifierError::NotAnInteger)
}

macro_rules! define_positive_id {
    ($(#[$outer:meta])* $name:ident) => {
        $(#[$outer])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, ::serde::Serialize, ::serde::Deserialize)]
        #[serde(try_from = "i64", into = "i32")]
        pub struct $name(i32);

        impl $name {
            /// Validate and wrap a storage identifier.
            pub fn new(value: i32) -> Result<Self, $crate::domain::IdentifierError> {
                $crate::domain::identifier::positive_from_i64(i64::from(value)).map(Self)
            }

            /// Parse an identifier from textual input such as a path segment.
            pub fn parse(raw: &str) -> Result<Self, $crate::domain::IdentifierError> {
                $crate::domain::identifier::parse_positive(raw).map(Self)
            }

            /// Raw integer value as stored.
            #[must_use]
            pub fn get(self) -> i32 {
                self.0
            }
        }

        impl ::std::fmt::Display for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}", self.0)
            }
        }

        impl TryFrom<i64> for $name {
            type Error = $crate::domain::IdentifierError;

            fn try_from(value: i64) -> Result<Self, Self::Error> {
                $crate::domain::identifier::positive_from_i64(value).map(Self)
            }
        }

        impl From<$name> for i32 {
            fn from(value: $name) -> Self {
                value.0
            }
        }
    };
}

pub(crate) use define_positive_id;
