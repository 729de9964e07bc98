//! Typed identifiers for members, groups, expenses and settlements
//!
//! Each ID wraps a UUID. Users see the short form, a type prefix plus the
//! first eight hex digits (`mem-1a2b3c4d`), and may type either form back.
//! IDs are totally ordered so the ledger's maps iterate deterministically.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Hex digits of the UUID kept in the short form
const SHORT_LEN: usize = 8;

macro_rules! define_id {
    ($name:ident, $prefix:literal) => {
        #[derive(
            Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
        )]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            pub fn new() -> Self {
                Self(Uuid::new_v4())
            }

            pub fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            pub fn as_uuid(&self) -> &Uuid {
                &self.0
            }

            /// True when `input` is this ID's short form, ignoring case
            pub fn matches_short(&self, input: &str) -> bool {
                let input = input.trim();
                input.len() == $prefix.len() + SHORT_LEN
                    && input.eq_ignore_ascii_case(&self.to_string())
            }
        }

        impl Default for $name {
            fn default() -> Self {
                Self::new()
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                let hex = self.0.simple().to_string();
                write!(f, "{}{}", $prefix, &hex[..SHORT_LEN])
            }
        }

        /// Accepts a bare UUID or one carrying the type prefix
        impl FromStr for $name {
            type Err = uuid::Error;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let s = s.trim();
                let s = s.strip_prefix($prefix).unwrap_or(s);
                Uuid::parse_str(s).map(Self)
            }
        }
    };
}

define_id!(MemberId, "mem-");
define_id!(GroupId, "grp-");
define_id!(ExpenseId, "exp-");
define_id!(SettlementId, "stl-");
