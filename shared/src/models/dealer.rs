//! Dealer (counterparty) models

use std::collections::HashMap;

use serde::{Deserialize, Serialize};
use uuid::Uuid;
use validator::Validate;

/// Display label for a transaction whose dealer cannot be resolved
pub const UNKNOWN_DEALER: &str = "Unknown Dealer";

/// A dealer supplying or receiving batches. Names are not unique.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Dealer {
    pub id: Uuid,
    pub name: String,
    /// Epoch milliseconds
    pub created_at: i64,
}

/// Input for registering a dealer
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct DealerInput {
    #[validate(length(min = 1, max = 100, message = "Dealer name must be 1-100 characters"))]
    pub name: String,
}

impl DealerInput {
    pub fn normalized(self) -> Self {
        Self {
            name: self.name.trim().to_string(),
        }
    }
}

/// Input for renaming a dealer. The id travels in the body, not the path.
#[derive(Debug, Clone, Serialize, Deserialize, Validate)]
pub struct RenameDealerInput {
    pub id: String,
    #[validate(length(min = 1, max = 100, message = "Dealer name must be 1-100 characters"))]
    pub name: String,
}

impl RenameDealerInput {
    pub fn normalized(self) -> Self {
        Self {
            id: self.id.trim().to_string(),
            name: self.name.trim().to_string(),
        }
    }
}

/// Lookup table from dealer id to display name
#[derive(Debug, Clone, Default)]
pub struct DealerNames {
    names: HashMap<Uuid, String>,
}

impl DealerNames {
    pub fn new<'a>(dealers: impl IntoIterator<Item = &'a Dealer>) -> Self {
        Self {
            names: dealers
                .into_iter()
                .map(|d| (d.id, d.name.clone()))
                .collect(),
        }
    }

    /// Resolve a dealer reference, falling back to [`UNKNOWN_DEALER`]
    pub fn resolve(&self, dealer_id: Option<Uuid>) -> String {
        dealer_id
            .and_then(|id| self.names.get(&id))
            .cloned()
            .unwrap_or_else(|| UNKNOWN_DEALER.to_string())
    }

    pub fn contains(&self, dealer_id: Uuid) -> bool {
        self.names.contains_key(&dealer_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn dealer(name: &str) -> Dealer {
        Dealer {
            id: Uuid::new_v4(),
            name: name.to_string(),
            created_at: 0,
        }
    }

    #[test]
    fn test_resolve_known_dealer() {
        let d = dealer("Perera Poultry");
        let names = DealerNames::new([&d]);
        assert_eq!(names.resolve(Some(d.id)), "Perera Poultry");
        assert!(names.contains(d.id));
    }

    #[test]
    fn test_resolve_dangling_or_missing_reference() {
        let names = DealerNames::new([&dealer("Silva")]);
        assert_eq!(names.resolve(Some(Uuid::new_v4())), UNKNOWN_DEALER);
        assert_eq!(names.resolve(None), UNKNOWN_DEALER);
    }

    #[test]
    fn test_dealer_name_validation() {
        assert!(DealerInput { name: "Silva".into() }.validate().is_ok());
        assert!(DealerInput { name: "   ".into() }.normalized().validate().is_err());
        assert!(DealerInput { name: "x".repeat(101) }.validate().is_err());
    }
}
