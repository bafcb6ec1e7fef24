//! Users shown on the data tables page.

use std::fmt;
use std::str::FromStr;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::error::ProtocolError;
use crate::record::{FieldValue, Record, RecordId};

/// The role a user holds in the administered system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Role {
    /// Full access.
    Admin,
    /// Can change content.
    Editor,
    /// Regular account.
    User,
}

impl Role {
    /// Returns every role in filter-cycling order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Admin, Self::Editor, Self::User]
    }

    /// Returns the name used for display and filtering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Admin => "Admin",
            Self::Editor => "Editor",
            Self::User => "User",
        }
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .into_iter()
            .find(|role| role.as_str().eq_ignore_ascii_case(s))
            .ok_or_else(|| ProtocolError::UnknownRole(s.to_string()))
    }
}

/// The account status of a user.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserStatus {
    /// The account is in use.
    Active,
    /// The account is disabled.
    Inactive,
    /// The account awaits confirmation.
    Pending,
}

impl UserStatus {
    /// Returns every status in filter-cycling order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Active, Self::Inactive, Self::Pending]
    }

    /// Returns the name used for display and filtering.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Active => "active",
            Self::Inactive => "inactive",
            Self::Pending => "pending",
        }
    }
}

impl fmt::Display for UserStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A user account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique identifier.
    pub id: RecordId,
    /// Full name.
    pub name: String,
    /// Contact address.
    pub email: String,
    /// Role in the system.
    pub role: Role,
    /// Account status.
    pub status: UserStatus,
    /// The day the account was created.
    pub join_date: NaiveDate,
    /// The day of the last login, `None` if the user never logged in.
    pub last_login: Option<NaiveDate>,
}

/// The named fields of a [`User`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum UserField {
    /// The user's name.
    Name,
    /// The user's email.
    Email,
    /// The user's role.
    Role,
    /// The account status.
    Status,
    /// The join date.
    JoinDate,
    /// The last login date.
    LastLogin,
}

impl UserField {
    /// Returns every field in column order.
    #[must_use]
    pub const fn all() -> [Self; 6] {
        [
            Self::Name,
            Self::Email,
            Self::Role,
            Self::Status,
            Self::JoinDate,
            Self::LastLogin,
        ]
    }

    /// Returns the column header for this field.
    #[must_use]
    pub const fn header(self) -> &'static str {
        match self {
            Self::Name => "Name",
            Self::Email => "Email",
            Self::Role => "Role",
            Self::Status => "Status",
            Self::JoinDate => "Join Date",
            Self::LastLogin => "Last Login",
        }
    }

    const fn key(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::Email => "email",
            Self::Role => "role",
            Self::Status => "status",
            Self::JoinDate => "join_date",
            Self::LastLogin => "last_login",
        }
    }
}

impl FromStr for UserField {
    type Err = ProtocolError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_ascii_lowercase().replace('-', "_");
        Self::all()
            .into_iter()
            .find(|field| field.key() == normalized)
            .ok_or_else(|| ProtocolError::UnknownField(s.to_string()))
    }
}

impl Record for User {
    type Field = UserField;

    fn id(&self) -> RecordId {
        self.id
    }

    fn searchable_text(&self) -> impl Iterator<Item = &str> {
        [self.name.as_str(), self.email.as_str()].into_iter()
    }

    fn value(&self, field: UserField) -> FieldValue<'_> {
        match field {
            UserField::Name => FieldValue::Text(&self.name),
            UserField::Email => FieldValue::Text(&self.email),
            UserField::Role => FieldValue::Text(self.role.as_str()),
            UserField::Status => FieldValue::Text(self.status.as_str()),
            UserField::JoinDate => FieldValue::Date(Some(self.join_date)),
            UserField::LastLogin => FieldValue::Date(self.last_login),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_parsing_is_case_insensitive() {
        assert_eq!("editor".parse::<Role>(), Ok(Role::Editor));
        assert_eq!("ADMIN".parse::<Role>(), Ok(Role::Admin));
        assert!(matches!(
            "owner".parse::<Role>(),
            Err(ProtocolError::UnknownRole(_))
        ));
    }

    #[test]
    fn field_parsing_accepts_dashes() {
        assert_eq!("join-date".parse::<UserField>(), Ok(UserField::JoinDate));
        assert_eq!("last_login".parse::<UserField>(), Ok(UserField::LastLogin));
        assert!("age".parse::<UserField>().is_err());
    }

    #[test]
    fn status_json_format() {
        let json = serde_json::to_string(&UserStatus::Pending).expect("serialize");
        assert_eq!(json, r#""pending""#);
    }

    #[test]
    fn record_values() {
        let user = User {
            id: 4,
            name: "Alice Brown".to_string(),
            email: "alice@example.com".to_string(),
            role: Role::User,
            status: UserStatus::Pending,
            join_date: NaiveDate::from_ymd_opt(2024, 1, 5).unwrap(),
            last_login: None,
        };

        assert_eq!(user.value(UserField::Role).to_string(), "User");
        assert_eq!(user.value(UserField::Status).to_string(), "pending");
        assert_eq!(user.value(UserField::JoinDate).to_string(), "2024-01-05");
        assert_eq!(user.value(UserField::LastLogin).to_string(), "Never");
        assert_eq!(
            user.searchable_text().collect::<Vec<_>>(),
            vec!["Alice Brown", "alice@example.com"]
        );
    }
}
