//! # Identity and Organization value shapes.
//!
//! [`Identity`] describes the current end user for `identify` fan-outs;
//! [`Organization`] describes a group the user belongs to. Both follow the
//! Segment spec's identify/group shapes: a required stable identifier plus an
//! optional open trait mapping.
//!
//! The "traits must include `email` and `name` (resp. `name`) when present"
//! rule is enforced structurally: the trait structs carry those fields as
//! required members and flatten everything else into an open map.
//!
//! # Example
//! ```
//! use crosslytics::{Identity, IdentityTraits, Organization};
//!
//! let identity = Identity::new("u-42")
//!     .with_organization(Organization::new("org-7"))
//!     .with_traits(
//!         IdentityTraits::new("ada@example.com", "Ada").with_extra("plan", "pro"),
//!     );
//!
//! assert_eq!(identity.user_id, "u-42");
//! assert_eq!(identity.traits.unwrap().name, "Ada");
//! ```

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::types::Value;

/// A user being tracked. Logically equivalent to an Identity in the Segment
/// identify spec.
///
/// Immutable from the dispatcher's point of view: it is read during one
/// `identify` fan-out and never stored or mutated.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Identity {
    /// Stable external identifier for the user.
    pub user_id: String,
    /// Group the user belongs to, if any.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub organization: Option<Organization>,
    /// Open trait mapping; always carries `email` and `name` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<IdentityTraits>,
}

impl Identity {
    /// Creates an identity with no organization and no traits.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            organization: None,
            traits: None,
        }
    }

    /// Attaches an organization.
    #[must_use]
    pub fn with_organization(mut self, organization: Organization) -> Self {
        self.organization = Some(organization);
        self
    }

    /// Attaches traits.
    #[must_use]
    pub fn with_traits(mut self, traits: IdentityTraits) -> Self {
        self.traits = Some(traits);
        self
    }
}

/// Traits attached to an [`Identity`]. `email` and `name` are required
/// whenever traits are supplied at all; anything else goes into `extra`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct IdentityTraits {
    /// User's email address.
    pub email: String,
    /// User's display name.
    pub name: String,
    /// Any further traits, keyed by caller-defined names.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl IdentityTraits {
    /// Creates the required trait set.
    pub fn new(email: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            email: email.into(),
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Adds one extra trait.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

/// A group of users. Logically equivalent to a Group in the Segment spec.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Organization {
    /// Stable external identifier for the group.
    pub organization_id: String,
    /// Open trait mapping; always carries `name` when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub traits: Option<OrganizationTraits>,
}

impl Organization {
    /// Creates an organization with no traits.
    pub fn new(organization_id: impl Into<String>) -> Self {
        Self {
            organization_id: organization_id.into(),
            traits: None,
        }
    }

    /// Attaches traits.
    #[must_use]
    pub fn with_traits(mut self, traits: OrganizationTraits) -> Self {
        self.traits = Some(traits);
        self
    }
}

/// Traits attached to an [`Organization`]. `name` is required whenever traits
/// are supplied at all.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct OrganizationTraits {
    /// Group's display name.
    pub name: String,
    /// Any further traits, keyed by caller-defined names.
    #[serde(flatten)]
    pub extra: BTreeMap<String, Value>,
}

impl OrganizationTraits {
    /// Creates the required trait set.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            extra: BTreeMap::new(),
        }
    }

    /// Adds one extra trait.
    #[must_use]
    pub fn with_extra(mut self, key: impl Into<String>, value: impl Into<Value>) -> Self {
        self.extra.insert(key.into(), value.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_chain() {
        let identity = Identity::new("u-1")
            .with_organization(
                Organization::new("org-1")
                    .with_traits(OrganizationTraits::new("Acme").with_extra("seats", 40)),
            )
            .with_traits(IdentityTraits::new("a@b.c", "A").with_extra("beta", true));

        assert_eq!(identity.user_id, "u-1");
        let org = identity.organization.unwrap();
        assert_eq!(org.organization_id, "org-1");
        assert_eq!(org.traits.unwrap().extra["seats"], Value::Int(40));
        assert_eq!(identity.traits.unwrap().extra["beta"], Value::Bool(true));
    }

    #[test]
    fn test_serde_flattens_extra_traits() {
        let identity =
            Identity::new("u-1").with_traits(IdentityTraits::new("a@b.c", "A").with_extra("plan", "pro"));
        let json = serde_json::to_value(&identity).unwrap();

        assert_eq!(json["user_id"], "u-1");
        assert_eq!(json["traits"]["email"], "a@b.c");
        assert_eq!(json["traits"]["plan"], "pro");
        assert!(json.get("organization").is_none());

        let back: Identity = serde_json::from_value(json).unwrap();
        assert_eq!(back, identity);
    }
}
