//! Checkout classification
//!
//! Whether a content item is checked out, and if so whether the
//! requesting user holds the checkout.

use serde::{Deserialize, Serialize};

/// The checkout state of a content item relative to one user.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CheckoutStatus {
    /// Nobody has the item checked out
    NotCheckedOut,
    /// The requesting user holds the checkout
    CheckedOutBySelf,
    /// Somebody else holds the checkout
    CheckedOutByOther,
}

impl CheckoutStatus {
    /// Classify a recorded checkout owner against the requesting user.
    ///
    /// A blank owner (after trimming) means the item is not checked out;
    /// otherwise the comparison is case-insensitive. Total over all
    /// inputs.
    pub fn classify(checkout_user_name: &str, requesting_user_name: &str) -> Self {
        let owner = checkout_user_name.trim();
        if owner.is_empty() {
            return Self::NotCheckedOut;
        }
        if owner.to_lowercase() == requesting_user_name.trim().to_lowercase() {
            Self::CheckedOutBySelf
        } else {
            Self::CheckedOutByOther
        }
    }
}

impl std::fmt::Display for CheckoutStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::NotCheckedOut => "not checked out",
            Self::CheckedOutBySelf => "checked out by self",
            Self::CheckedOutByOther => "checked out by other",
        };
        write!(f, "{}", label)
    }
}
