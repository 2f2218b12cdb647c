//! Entity families and the operations every family supports

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One entity category with its own bounded set of database handles
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Family {
    Users,
    Sales,
    Refunds,
    Products,
    Discounts,
    Informs,
}

impl Family {
    /// All families, in initialization order
    pub const ALL: [Family; 6] = [
        Family::Users,
        Family::Sales,
        Family::Refunds,
        Family::Products,
        Family::Discounts,
        Family::Informs,
    ];

    /// Number of families
    pub const COUNT: usize = Self::ALL.len();

    /// Dense index into `Family::ALL`
    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Users => "users",
            Self::Sales => "sales",
            Self::Refunds => "refunds",
            Self::Products => "products",
            Self::Discounts => "discounts",
            Self::Informs => "informs",
        }
    }

    /// Name of the backing table
    #[must_use]
    pub fn table(self) -> &'static str {
        // Table names match the family names one to one
        self.as_str()
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unknown family name
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("Unknown entity family: {0}")]
pub struct UnknownFamily(pub String);

impl FromStr for Family {
    type Err = UnknownFamily;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let lowered = s.trim().to_ascii_lowercase();
        Self::ALL
            .into_iter()
            .find(|family| family.as_str() == lowered)
            .ok_or_else(|| UnknownFamily(s.to_string()))
    }
}

/// Operations backed by one prepared statement per handle
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Operation {
    Add,
    GetById,
    GetByName,
    List,
    Modify,
    Remove,
}

impl Operation {
    pub const ALL: [Operation; 6] = [
        Operation::Add,
        Operation::GetById,
        Operation::GetByName,
        Operation::List,
        Operation::Modify,
        Operation::Remove,
    ];

    pub const COUNT: usize = Self::ALL.len();

    #[inline]
    #[must_use]
    pub fn index(self) -> usize {
        self as usize
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Add => "add",
            Self::GetById => "get_by_id",
            Self::GetByName => "get_by_name",
            Self::List => "list",
            Self::Modify => "modify",
            Self::Remove => "remove",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_family_index_matches_all_order() {
        for (i, family) in Family::ALL.iter().enumerate() {
            assert_eq!(family.index(), i);
        }
        assert_eq!(Family::COUNT, 6);
    }

    #[test]
    fn test_family_parse() {
        assert_eq!("users".parse::<Family>(), Ok(Family::Users));
        assert_eq!(" Discounts ".parse::<Family>(), Ok(Family::Discounts));
        assert_eq!(
            "orders".parse::<Family>(),
            Err(UnknownFamily("orders".to_string()))
        );
    }

    #[test]
    fn test_family_display_round_trips() {
        for family in Family::ALL {
            assert_eq!(family.to_string().parse::<Family>(), Ok(family));
        }
    }

    #[test]
    fn test_family_serde_lowercase() {
        let json = serde_json::to_string(&Family::Informs).unwrap();
        assert_eq!(json, "\"informs\"");
    }

    #[test]
    fn test_operation_index() {
        for (i, op) in Operation::ALL.iter().enumerate() {
            assert_eq!(op.index(), i);
        }
        assert_eq!(Operation::GetByName.to_string(), "get_by_name");
    }
}
