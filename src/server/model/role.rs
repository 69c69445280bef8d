//! Role and status tables.
//!
//! The numeric ids are persisted and shared with clients, so each table is a Rust
//! enum with fixed discriminants. Every call site converts through these enums.

use std::fmt;

use crate::server::error::internal::InternalError;

/// User role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    Root = 0,
    Admin = 1,
    Learner = 2,
    Teacher = 3,
}

impl Role {
    pub const ALL: [Role; 4] = [Role::Root, Role::Admin, Role::Learner, Role::Teacher];

    /// Roles that bypass authorship and enrollment checks.
    pub const STAFF: &'static [Role] = &[Role::Root, Role::Admin];

    /// Roles allowed to create course content.
    pub const EDITORS: &'static [Role] = &[Role::Root, Role::Admin, Role::Teacher];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            Role::Root => "ROOT",
            Role::Admin => "ADMIN",
            Role::Learner => "LEARNER",
            Role::Teacher => "TEACHER",
        }
    }

    /// Parses a role name case-insensitively.
    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|role| role.name().eq_ignore_ascii_case(name))
    }

    pub fn is_staff(self) -> bool {
        Self::STAFF.contains(&self)
    }
}

impl TryFrom<i32> for Role {
    type Error = InternalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|role| role.id() == value)
            .ok_or(InternalError::UnknownRole(value))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Account status.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UserStatus {
    Inactive = 0,
    Active = 1,
    Pending = 2,
    Banned = 10,
}

impl UserStatus {
    pub const ALL: [UserStatus; 4] = [
        UserStatus::Inactive,
        UserStatus::Active,
        UserStatus::Pending,
        UserStatus::Banned,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            UserStatus::Inactive => "INACTIVE",
            UserStatus::Active => "ACTIVE",
            UserStatus::Pending => "PENDING",
            UserStatus::Banned => "BANNED",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(name))
    }
}

impl TryFrom<i32> for UserStatus {
    type Error = InternalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.id() == value)
            .ok_or(InternalError::UnknownStatus {
                kind: "account",
                value,
            })
    }
}

/// Publication status of courses and their content.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContentStatus {
    Inactive = 0,
    Active = 1,
    Pending = 2,
    Draft = 20,
}

impl ContentStatus {
    pub const ALL: [ContentStatus; 4] = [
        ContentStatus::Inactive,
        ContentStatus::Active,
        ContentStatus::Pending,
        ContentStatus::Draft,
    ];

    pub fn id(self) -> i32 {
        self as i32
    }

    pub fn name(self) -> &'static str {
        match self {
            ContentStatus::Inactive => "INACTIVE",
            ContentStatus::Active => "ACTIVE",
            ContentStatus::Pending => "PENDING",
            ContentStatus::Draft => "DRAFT",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        let name = name.trim();
        Self::ALL
            .into_iter()
            .find(|status| status.name().eq_ignore_ascii_case(name))
    }
}

impl TryFrom<i32> for ContentStatus {
    type Error = InternalError;

    fn try_from(value: i32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|status| status.id() == value)
            .ok_or(InternalError::UnknownStatus {
                kind: "content",
                value,
            })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_ids_are_fixed() {
        assert_eq!(Role::Root.id(), 0);
        assert_eq!(Role::Admin.id(), 1);
        assert_eq!(Role::Learner.id(), 2);
        assert_eq!(Role::Teacher.id(), 3);
    }

    #[test]
    fn role_round_trips_through_id_and_name() {
        for role in Role::ALL {
            assert_eq!(Role::try_from(role.id()).unwrap(), role);
            assert_eq!(Role::from_name(&role.name().to_lowercase()), Some(role));
        }
        assert!(Role::try_from(7).is_err());
        assert_eq!(Role::from_name("guest"), None);
    }

    #[test]
    fn only_root_and_admin_are_staff() {
        assert!(Role::Root.is_staff());
        assert!(Role::Admin.is_staff());
        assert!(!Role::Teacher.is_staff());
        assert!(!Role::Learner.is_staff());
    }

    #[test]
    fn status_ids_are_fixed() {
        assert_eq!(UserStatus::Banned.id(), 10);
        assert_eq!(ContentStatus::Draft.id(), 20);
        assert_eq!(UserStatus::try_from(2).unwrap(), UserStatus::Pending);
        assert!(UserStatus::try_from(20).is_err());
        assert!(ContentStatus::try_from(10).is_err());
    }
}
