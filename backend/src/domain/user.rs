//! User aggregate and its value types.

use std::fmt;
use std::sync::OnceLock;

use chrono::{DateTime, Utc};
use regex::Regex;
use serde::{Deserialize, Serialize};

use super::identifier::define_positive_id;

define_positive_id! {
    /// Storage-assigned user identifier.
    UserId
}

/// Validation errors for user value types.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum UserValidationError {
    /// Name was empty once trimmed.
    #[error("name must not be empty")]
    EmptyName,
    /// Email was empty once trimmed.
    #[error("email must not be empty")]
    EmptyEmail,
    /// Email did not look like `local@domain.tld`.
    #[error("email must be a valid email address")]
    InvalidEmail,
}

/// Non-empty user name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct UserName(String);

impl UserName {
    /// Validate and construct a [`UserName`].
    pub fn new(name: impl Into<String>) -> Result<Self, UserValidationError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(UserValidationError::EmptyName);
        }
        Ok(Self(name))
    }
}

impl AsRef<str> for UserName {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for UserName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<UserName> for String {
    fn from(value: UserName) -> Self {
        value.0
    }
}

impl TryFrom<String> for UserName {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

fn email_regex() -> &'static Regex {
    EMAIL_RE.get_or_init(|| {
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$")
            .unwrap_or_else(|error| panic!("email regex failed to compile: {error}"))
    })
}

/// Syntactically valid email address.
///
/// Uniqueness is a storage concern and is not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct EmailAddress(String);

impl EmailAddress {
    /// Validate and construct an [`EmailAddress`].
    ///
    /// # Examples
    /// ```
    /// use postbox::domain::EmailAddress;
    ///
    /// assert!(EmailAddress::new("ada@example.com").is_ok());
    /// assert!(EmailAddress::new("not-an-email").is_err());
    /// ```
    pub fn new(email: impl Into<String>) -> Result<Self, UserValidationError> {
        let email = email.into();
        if email.trim().is_empty() {
            return Err(UserValidationError::EmptyEmail);
        }
        if !email_regex().is_match(&email) {
            return Err(UserValidationError::InvalidEmail);
        }
        Ok(Self(email))
    }
}

impl AsRef<str> for EmailAddress {
    fn as_ref(&self) -> &str {
        self.0.as_str()
    }
}

impl fmt::Display for EmailAddress {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_ref())
    }
}

impl From<EmailAddress> for String {
    fn from(value: EmailAddress) -> Self {
        value.0
    }
}

impl TryFrom<String> for EmailAddress {
    type Error = UserValidationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::new(value)
    }
}

/// Stored user.
///
/// ## Invariants
/// - `id` is assigned by storage and never changes.
/// - Users are never physically deleted; removal clears `active`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    pub name: UserName,
    pub email: EmailAddress,
    pub active: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

/// Fields required to create a user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewUser {
    pub name: UserName,
    pub email: EmailAddress,
    pub active: bool,
}

impl NewUser {
    /// New active user.
    #[must_use]
    pub fn new(name: UserName, email: EmailAddress) -> Self {
        Self {
            name,
            email,
            active: true,
        }
    }

    /// Override the default `active = true`.
    #[must_use]
    pub fn with_active(mut self, active: bool) -> Self {
        self.active = active;
        self
    }
}

/// Partial update; `None` leaves the stored value untouched.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct UserChanges {
    pub name: Option<UserName>,
    pub email: Option<EmailAddress>,
    pub active: Option<bool>,
}

impl UserChanges {
    /// Changeset used for soft deletion.
    #[must_use]
    pub fn deactivate() -> Self {
        Self {
            active: Some(false),
            ..Self::default()
        }
    }

    /// Whether the changeset touches no field.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.email.is_none() && self.active.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("Ada", true)]
    #[case("  ", false)]
    #[case("", false)]
    fn user_name_rejects_blank(#[case] raw: &str, #[case] ok: bool) {
        assert_eq!(UserName::new(raw).is_ok(), ok);
    }

    #[rstest]
    #[case("ada@example.com", Ok(()))]
    #[case("", Err(UserValidationError::EmptyEmail))]
    #[case("ada", Err(UserValidationError::InvalidEmail))]
    #[case("ada@example", Err(UserValidationError::InvalidEmail))]
    #[case("a da@example.com", Err(UserValidationError::InvalidEmail))]
    fn email_validation(#[case] raw: &str, #[case] expected: Result<(), UserValidationError>) {
        assert_eq!(EmailAddress::new(raw).map(|_| ()), expected);
    }

    #[rstest]
    fn new_user_defaults_to_active() {
        let user = NewUser::new(
            UserName::new("Ada").expect("name"),
            EmailAddress::new("ada@example.com").expect("email"),
        );
        assert!(user.active);
        assert!(!user.with_active(false).active);
    }

    #[rstest]
    fn deactivate_only_touches_active() {
        let changes = UserChanges::deactivate();
        assert_eq!(changes.active, Some(false));
        assert!(changes.name.is_none());
        assert!(changes.email.is_none());
        assert!(!changes.is_empty());
        assert!(UserChanges::default().is_empty());
    }

    #[rstest]
    fn user_id_deserialises_from_positive_integers_only() {
        let id: UserId = serde_json::from_str("7").expect("positive id");
        assert_eq!(id.get(), 7);
        assert!(serde_json::from_str::<UserId>("0").is_err());
        assert!(serde_json::from_str::<UserId>("\"7\"").is_err());
    }

    #[rstest]
    fn user_serialises_in_camel_case() {
        let now = Utc::now();
        let user = User {
            id: UserId::new(1).expect("id"),
            name: UserName::new("Ada").expect("name"),
            email: EmailAddress::new("ada@example.com").expect("email"),
            active: true,
            created_at: now,
            updated_at: now,
        };

        let value = serde_json::to_value(&user).expect("serialise user");
        assert_eq!(value.get("id").and_then(serde_json::Value::as_i64), Some(1));
        assert!(value.get("createdAt").is_some());
        assert!(value.get("created_at").is_none());
    }
}
