//! [§ 16 Combinators](https://www.w3.org/TR/selectors-4/#combinators)
//!
//! "A combinator is punctuation that represents a particular kind of
//! relationship between the selectors on either side."
//!
//! [`SelectorBuilder::combine`](crate::SelectorBuilder::combine) accepts any
//! `AsRef<str>` as its combinator and writes it verbatim. [`Combinator`] names
//! the four symbols CSS defines so callers do not have to spell them out.

use serde::{Deserialize, Serialize};
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString};

/// The four CSS combinators.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    AsRefStr,
    Display,
    EnumIter,
    EnumString,
    Serialize,
    Deserialize,
)]
#[serde(rename_all = "kebab-case")]
pub enum Combinator {
    /// [§ 16.1 Descendant combinator](https://www.w3.org/TR/selectors-4/#descendant-combinators)
    /// "A selector of the form 'A B' represents an element B that is an
    /// arbitrary descendant of some ancestor element A."
    #[strum(to_string = " ", serialize = "descendant")]
    Descendant,

    /// [§ 16.2 Child combinator](https://www.w3.org/TR/selectors-4/#child-combinators)
    /// "A selector of the form 'A > B' represents an element B that is a
    /// direct child of element A."
    #[strum(to_string = ">", serialize = "child")]
    Child,

    /// [§ 16.4 Subsequent-sibling combinator](https://www.w3.org/TR/selectors-4/#general-sibling-combinators)
    /// "A selector of the form 'A ~ B' represents an element B that follows
    /// element A (not necessarily immediately), where A and B share the same
    /// parent."
    #[strum(to_string = "~", serialize = "sibling")]
    SubsequentSibling,

    /// [§ 16.3 Next-sibling combinator](https://www.w3.org/TR/selectors-4/#adjacent-sibling-combinators)
    /// "A selector of the form 'A + B' represents an element B that
    /// immediately follows element A, where A and B share the same parent."
    #[strum(to_string = "+", serialize = "adjacent")]
    NextSibling,
}

impl Combinator {
    /// Look up a combinator by its exact CSS symbol (`" "`, `">"`, `"~"`, `"+"`).
    ///
    /// Unlike [`str::parse`], this does not accept the long names, so it can
    /// tell whether a string would render as a real combinator.
    #[must_use]
    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::iter().find(|combinator| combinator.as_ref() == symbol)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_symbols() {
        assert_eq!(Combinator::Descendant.as_ref(), " ");
        assert_eq!(Combinator::Child.as_ref(), ">");
        assert_eq!(Combinator::SubsequentSibling.as_ref(), "~");
        assert_eq!(Combinator::NextSibling.to_string(), "+");
    }

    #[test]
    fn test_parse_accepts_symbol_and_name() {
        assert_eq!(">".parse::<Combinator>(), Ok(Combinator::Child));
        assert_eq!("child".parse::<Combinator>(), Ok(Combinator::Child));
        assert_eq!("descendant".parse::<Combinator>(), Ok(Combinator::Descendant));
        assert!(">>".parse::<Combinator>().is_err());
    }

    #[test]
    fn test_from_symbol_rejects_names() {
        assert_eq!(Combinator::from_symbol("~"), Some(Combinator::SubsequentSibling));
        assert_eq!(Combinator::from_symbol("sibling"), None);
    }
}
