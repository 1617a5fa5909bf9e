//! Fragment categories.
//!
//! A compound selector is written in a fixed order:
//!
//! ```text
//! selector := element? id? class* attr* pseudoClass* pseudoElement?
//! ```
//!
//! [`Category`] enumerates those six positions. Its discriminants are the
//! rendering order, so comparing two categories compares their positions.

use serde::{Deserialize, Serialize};
use strum_macros::{Display, EnumCount, EnumIter, EnumString};

/// One of the six positions a fragment can occupy in a compound selector.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    PartialOrd,
    Ord,
    Hash,
    Display,
    EnumCount,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[strum(serialize_all = "kebab-case")]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    /// [§ 5.1 Type selector](https://www.w3.org/TR/selectors-4/#type-selectors)
    ///
    /// Example: `div`
    Element = 0,

    /// [§ 6.7 ID selector](https://www.w3.org/TR/selectors-4/#id-selectors)
    ///
    /// Example: `#main`
    Id = 1,

    /// [§ 6.6 Class selector](https://www.w3.org/TR/selectors-4/#class-html)
    ///
    /// Example: `.container`
    Class = 2,

    /// [§ 6.4 Attribute selectors](https://www.w3.org/TR/selectors-4/#attribute-selectors)
    ///
    /// Example: `[href$=".png"]`
    #[strum(to_string = "attribute", serialize = "attr")]
    Attribute = 3,

    /// [§ 3.6 Pseudo-classes](https://www.w3.org/TR/selectors-4/#pseudo-classes)
    ///
    /// Example: `:focus`
    PseudoClass = 4,

    /// [§ 3.6 Pseudo-elements](https://www.w3.org/TR/selectors-4/#pseudo-elements)
    ///
    /// Example: `::before`
    PseudoElement = 5,
}

impl Category {
    /// Position of this category in the rendering order, starting at 0.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Whether at most one fragment of this category may be added.
    ///
    /// Element, ID and pseudo-element are single-valued; the others
    /// accumulate in insertion order.
    #[must_use]
    pub const fn is_unique(self) -> bool {
        matches!(self, Self::Element | Self::Id | Self::PseudoElement)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use strum::{EnumCount, IntoEnumIterator};

    #[test]
    fn test_iteration_follows_rendering_order() {
        let indices: Vec<usize> = Category::iter().map(Category::index).collect();
        assert_eq!(indices, (0..Category::COUNT).collect::<Vec<_>>());
    }

    #[test]
    fn test_attribute_accepts_short_name() {
        assert_eq!("attr".parse::<Category>(), Ok(Category::Attribute));
        assert_eq!("attribute".parse::<Category>(), Ok(Category::Attribute));
        assert_eq!(Category::Attribute.to_string(), "attribute");
    }

    #[test]
    fn test_kebab_case_names() {
        assert_eq!(Category::PseudoClass.to_string(), "pseudo-class");
        assert_eq!(
            "pseudo-element".parse::<Category>(),
            Ok(Category::PseudoElement)
        );
    }
}
