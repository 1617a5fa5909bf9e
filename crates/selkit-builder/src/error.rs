//! Builder errors.
//!
//! Every error is a malformed call sequence, raised by the call that caused
//! it. The builder keeps the state it had before the failing call.

use thiserror::Error;

use crate::category::Category;

/// A call that the builder's current state does not allow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum SelectorError {
    /// A single-valued category (element, id, pseudo-element) was set twice.
    #[error("{category} is already set; a selector has at most one {category}")]
    Duplicate {
        /// The category that was set twice.
        category: Category,
    },

    /// A category was added after a category that renders later.
    #[error("{category} cannot be added after {conflicting}")]
    Order {
        /// The category being added.
        category: Category,
        /// The later category that is already present.
        conflicting: Category,
    },

    /// A fragment was added to a builder that already holds combined selectors.
    #[error("{category} cannot be added to a builder that has been combined")]
    FragmentAfterCombine {
        /// The category being added.
        category: Category,
    },

    /// `combine` was called on a builder that already holds fragments.
    #[error("cannot combine into a builder that already holds a {category} fragment")]
    CombineAfterFragment {
        /// The first fragment category present in the builder.
        category: Category,
    },
}

impl SelectorError {
    /// Whether the error comes from mixing fragments and combined selectors
    /// on one builder.
    #[must_use]
    pub const fn is_state_error(&self) -> bool {
        matches!(
            self,
            Self::FragmentAfterCombine { .. } | Self::CombineAfterFragment { .. }
        )
    }
}
