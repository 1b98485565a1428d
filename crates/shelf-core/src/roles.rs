//! Role lattice: owner > admin > member.
//!
//! Every (user, organization) membership carries exactly one role. Comparisons
//! go through the rank table, so adding a role means adding one row there.

use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::errors::PolicyError;

/// Membership role within an organization.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase", try_from = "String")]
pub enum Role {
    Owner,
    Admin,
    Member,
}

/// Rank table indexed by discriminant, in declaration order. Strictly decreasing.
const ROLE_RANKS: [u8; 3] = [3, 2, 1];

impl Role {
    /// All roles, highest rank first.
    pub const ALL: [Role; 3] = [Role::Owner, Role::Admin, Role::Member];

    /// Numeric rank of this role.
    pub fn rank(self) -> u8 {
        ROLE_RANKS[self as usize]
    }

    /// True if this role ranks at or above `required`.
    pub fn at_least(self, required: Role) -> bool {
        self.rank() >= required.rank()
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Self::Owner => "owner",
            Self::Admin => "admin",
            Self::Member => "member",
        }
    }

    /// Parse the lowercase wire form. Unknown values yield `None`.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "owner" => Some(Self::Owner),
            "admin" => Some(Self::Admin),
            "member" => Some(Self::Member),
            _ => None,
        }
    }
}

/// `rank(actual) >= rank(required)`.
pub fn at_least(actual: Role, required: Role) -> bool {
    actual.at_least(required)
}

impl Ord for Role {
    fn cmp(&self, other: &Self) -> Ordering {
        self.rank().cmp(&other.rank())
    }
}

impl PartialOrd for Role {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Role {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl TryFrom<String> for Role {
    type Error = PolicyError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl FromStr for Role {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s).ok_or_else(|| PolicyError::UnknownRole {
            value: s.to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rank_table_is_strictly_decreasing() {
        assert_eq!(ROLE_RANKS.len(), Role::ALL.len());
        for pair in Role::ALL.windows(2) {
            assert!(pair[0].rank() > pair[1].rank(), "{} vs {}", pair[0], pair[1]);
        }
        assert_eq!(Role::Owner.rank(), 3);
        assert_eq!(Role::Member.rank(), 1);
    }

    #[test]
    fn ordering_follows_rank() {
        assert!(Role::Owner > Role::Admin);
        assert!(Role::Admin > Role::Member);
        assert_eq!(Role::ALL.iter().max(), Some(&Role::Owner));
    }

    #[test]
    fn from_str_rejects_unknown() {
        assert_eq!("admin".parse::<Role>(), Ok(Role::Admin));
        let err = "Admin".parse::<Role>().unwrap_err();
        assert_eq!(
            err,
            PolicyError::UnknownRole {
                value: "Admin".into()
            }
        );
    }
}
